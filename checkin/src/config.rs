use clap::Parser;
use common::is_true;
use hoyolab::Game;
use log::warn;
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use strum::IntoEnumIterator;

const DEFAULT_LANGUAGE: &str = "ko-kr";
const DEFAULT_MAX_PARALLEL: i64 = -1;
const DEFAULT_TIME: &str = "00:00";
const LANGUAGES: [&str; 13] = [
    "zh-cn", "zh-tw", "de-de", "en-us", "es-es", "fr-fr", "id-id", "ja-jp", "ko-kr", "pt-pt",
    "ru-ru", "th-th", "vi-vn",
];

#[derive(Parser, Debug, Default)]
#[command(version, about = "Claims HoYoLAB daily check-in rewards")]
pub(crate) struct Args {
    /// Run a single pass and exit
    #[arg(short, long)]
    pub once: bool,

    /// Also run immediately when scheduling a daily run
    #[arg(long)]
    pub on_launch: bool,

    /// Extra accounts, one `name = "ltuid, ltoken[, ltmid]"` entry per account
    #[arg(long, default_value = "cookie.toml")]
    pub cookie_file: PathBuf,
}

/// Everything a run needs, read once at startup.
#[derive(Debug)]
pub(crate) struct Settings {
    pub language: String,
    pub max_parallel: i64,
    pub disabled_games: HashSet<Game>,
    pub schedule_time: String,
    pub webhook_url: Option<String>,
    pub run_once: bool,
    pub run_on_launch: bool,
    pub cookie_file: PathBuf,
}

impl Settings {
    pub(crate) fn load(args: Args) -> Self {
        Self::from_lookup(args, |name| env::var(name).ok())
    }

    fn from_lookup(args: Args, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |name: &str| lookup(name).is_some_and(|v| is_true(&v));

        let disabled_games = Game::iter()
            .filter(|game| flag(&format!("NO_{game}")))
            .collect();

        Self {
            language: check_language(&lookup("SERVER").unwrap_or_else(|| DEFAULT_LANGUAGE.into())),
            max_parallel: parse_max_parallel(lookup("MAX_PARALLEL")),
            disabled_games,
            schedule_time: lookup("TIME").unwrap_or_else(|| DEFAULT_TIME.into()),
            webhook_url: lookup("DISCORD_WEBHOOK_URL").filter(|url| !url.trim().is_empty()),
            run_once: args.once || flag("RUN_ONCE"),
            run_on_launch: args.on_launch || flag("RUN_ON_LAUNCH"),
            cookie_file: args.cookie_file,
        }
    }
}

/// Lowercases `server` and falls back to `ko-kr` when it is not a supported language.
pub(crate) fn check_language(server: &str) -> String {
    let server = server.trim().to_lowercase();
    if LANGUAGES.contains(&server.as_str()) {
        return server;
    }
    warn!(
        "'{server}' is not a valid server, expected one of {}. Using '{DEFAULT_LANGUAGE}'",
        LANGUAGES.join(", ")
    );
    DEFAULT_LANGUAGE.to_string()
}

fn parse_max_parallel(value: Option<String>) -> i64 {
    let Some(value) = value else {
        return DEFAULT_MAX_PARALLEL;
    };
    value.trim().parse().unwrap_or_else(|_| {
        warn!("MAX_PARALLEL '{value}' is not an integer, running without a limit");
        DEFAULT_MAX_PARALLEL
    })
}
