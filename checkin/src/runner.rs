use crate::config::Settings;
use crate::credentials;
use crate::error::Error;
use crate::limiter::Limiter;
use crate::orchestrator::run_all;
use crate::report;
use crate::webhook::Webhook;
use chrono::Local;
use hoyolab::{Credential, Game, HttpClient};
use log::{error, info};
use std::collections::HashSet;
use std::sync::Arc;

/// One check-in pass over every account and game, cheap to clone into jobs.
#[derive(Clone)]
pub(crate) struct Runner {
    api: Arc<HttpClient>,
    credentials: Arc<[Credential]>,
    language: String,
    max_parallel: i64,
    disabled_games: Arc<HashSet<Game>>,
    webhook: Option<Webhook>,
}

impl Runner {
    pub(crate) fn new(settings: &Settings) -> Self {
        let credentials = credentials::load(&settings.cookie_file);
        info!("Loaded {} account(s)", credentials.len());

        Self {
            api: Arc::new(HttpClient::new()),
            credentials: credentials.into(),
            language: settings.language.clone(),
            max_parallel: settings.max_parallel,
            disabled_games: Arc::new(settings.disabled_games.clone()),
            webhook: settings.webhook_url.as_deref().map(Webhook::new),
        }
    }

    pub(crate) async fn run(&self) -> Result<(), Error> {
        let limiter = Limiter::new(self.max_parallel);
        let results = run_all(
            Arc::clone(&self.api),
            Arc::clone(&self.credentials),
            &self.language,
            &limiter,
            &self.disabled_games,
        )
        .await?;

        if results.is_empty() {
            info!("No account checked in successfully");
            return Ok(());
        }

        let now = report::timestamp(&Local::now());
        report::print(&results, &now);
        if let Some(webhook) = &self.webhook {
            webhook.send(&results, &now).await;
        }

        Ok(())
    }

    /// Like [`Runner::run`], for callers that can only log the failure.
    pub(crate) async fn run_logged(&self) {
        if let Err(e) = self.run().await {
            error!("Check-in run failed: {e}");
        }
    }
}
