use crate::reward::{ClaimResult, GameResultSet};
use log::{info, warn};
use serde::Serialize;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(10);
const EMBED_TITLE: &str = "HoYoLAB daily check-in";
const EMBED_COLOR: u32 = 0x5865F2;
/// Discord rejects embed field values longer than this
const FIELD_VALUE_LIMIT: usize = 1024;

#[derive(Serialize, Debug)]
pub(crate) struct Payload {
    embeds: Vec<Embed>,
}

#[derive(Serialize, Debug)]
struct Embed {
    title: String,
    color: u32,
    fields: Vec<Field>,
    footer: Footer,
}

#[derive(Serialize, Debug)]
struct Field {
    name: String,
    value: String,
    inline: bool,
}

#[derive(Serialize, Debug)]
struct Footer {
    text: String,
}

/// Posts run summaries to a Discord webhook.
#[derive(Clone)]
pub(crate) struct Webhook {
    client: reqwest::Client,
    url: String,
}

impl Webhook {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Failures are logged, never returned: the console report matters more.
    pub(crate) async fn send(&self, results: &[GameResultSet], timestamp: &str) {
        if results.is_empty() {
            return;
        }
        match self.post(&payload(results, timestamp)).await {
            Ok(()) => info!("Posted results to the webhook"),
            Err(e) => warn!("Failed to post results to the webhook: {e}"),
        }
    }

    async fn post(&self, payload: &Payload) -> reqwest::Result<()> {
        self.client
            .post(&self.url)
            .timeout(TIMEOUT)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

pub(crate) fn payload(results: &[GameResultSet], timestamp: &str) -> Payload {
    let fields = results
        .iter()
        .map(|set| Field {
            name: set.game.to_string(),
            value: truncate(
                &set.rewards.iter().map(line).collect::<Vec<_>>().join("\n"),
                FIELD_VALUE_LIMIT,
            ),
            inline: false,
        })
        .collect();

    Payload {
        embeds: vec![Embed {
            title: EMBED_TITLE.into(),
            color: EMBED_COLOR,
            fields,
            footer: Footer {
                text: timestamp.into(),
            },
        }],
    }
}

fn line(result: &ClaimResult) -> String {
    format!(
        "{} `{}` {} (Lv.{}) · Day {} · {}",
        result.status.glyph(),
        result.uid,
        result.name,
        result.level,
        result.day,
        result.reward
    )
}

fn truncate(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(limit - 1).collect();
    truncated.push('…');
    truncated
}
