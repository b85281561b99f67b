use crate::limiter::Limiter;
use crate::reward::{mask_uid, ClaimResult, ClaimStatus, UNKNOWN};
use futures::future;
use hoyolab::{Award, ClaimOutcome, Credential, Game, GameAccount, RewardApi};
use log::{error, warn};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Claims one game's daily reward for any number of credentials.
///
/// The monthly reward catalog is the same for every account, so it is fetched
/// once per instance and reused.
pub(crate) struct DailyReward<A> {
    api: Arc<A>,
    game: Game,
    limiter: Limiter,
    catalog: OnceCell<Vec<Award>>,
}

impl<A: RewardApi> DailyReward<A> {
    pub(crate) fn new(api: Arc<A>, game: Game, limiter: Limiter) -> Self {
        Self {
            api,
            game,
            limiter,
            catalog: OnceCell::new(),
        }
    }

    /// Never fails: every problem ends up as an unsuccessful result and a log line.
    pub(crate) async fn attempt(&self, credential: &Credential, lang: &str) -> ClaimResult {
        let _permit = self.limiter.acquire().await;
        self.claim(credential, lang).await
    }

    async fn claim(&self, credential: &Credential, lang: &str) -> ClaimResult {
        let game = self.game;
        let source = &credential.source;
        let mut info = ClaimResult::default();

        match self.api.claim_daily_reward(credential, game, lang).await {
            Ok(ClaimOutcome::Claimed) => info.status = ClaimStatus::Success,
            Ok(ClaimOutcome::AlreadyClaimed) => info.status = ClaimStatus::AlreadyClaimed,
            Ok(ClaimOutcome::InvalidCookies) => {
                warn!("{source}: cookies are invalid, check ltuid and ltoken");
                return ClaimResult::failed();
            }
            Ok(ClaimOutcome::NoGameAccount) => {}
            Ok(ClaimOutcome::Platform { retcode, message }) => {
                warn!("[{game}] {source}: [{retcode}] {message}");
                info.status = ClaimStatus::Failed;
            }
            Err(e) => {
                warn!("[{game}] {source}: {e}");
                info.status = ClaimStatus::Failed;
            }
        }

        let accounts = match self.api.game_accounts(credential, lang).await {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!("[{game}] {source}: failed to fetch game accounts: {e}");
                return info;
            }
        };

        let Some(account) = highest_level(accounts, game) else {
            return info;
        };

        let day = match self.api.reward_info(credential, game, lang).await {
            Ok(sign_info) => sign_info.total_sign_day,
            Err(e) => {
                warn!("[{game}] {source}: failed to fetch check-in info: {e}");
                return info;
            }
        };

        let catalog = match self.catalog(credential, lang).await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("[{game}] {source}: failed to fetch monthly rewards: {e}");
                return info;
            }
        };

        info.uid = mask_uid(&account.game_uid);
        info.level = account.level.to_string();
        info.name = account.nickname;
        info.server = server_label(&account.region_name);
        info.day = day.to_string();
        info.reward = reward_for_day(catalog, day);
        info.succeeded = true;

        info
    }

    async fn catalog(&self, credential: &Credential, lang: &str) -> hoyolab::Result<&[Award]> {
        self.catalog
            .get_or_try_init(|| self.api.monthly_rewards(credential, self.game, lang))
            .await
            .map(Vec::as_slice)
    }
}

/// Highest level role in `game`, the first one wins a tie.
fn highest_level(accounts: Vec<GameAccount>, game: Game) -> Option<GameAccount> {
    accounts
        .into_iter()
        .filter(|account| account.game() == Some(game))
        .reduce(|best, account| if account.level > best.level { account } else { best })
}

/// Region name without its trailing word: `TW, HK, MO Server` becomes `TW, HK, MO`.
fn server_label(region_name: &str) -> String {
    let region_name = region_name.trim();
    if region_name.is_empty() {
        return UNKNOWN.to_string();
    }
    region_name
        .rsplit_once(char::is_whitespace)
        .map_or(region_name, |(head, _)| head.trim_end())
        .to_string()
}

fn reward_for_day(catalog: &[Award], day: u32) -> String {
    day.checked_sub(1)
        .and_then(|index| catalog.get(index as usize))
        .map(|award| format!("{} x{}", award.name, award.cnt))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Runs one check-in per credential concurrently. Results come back in the
/// order of `credentials`, whatever order the attempts finish in.
pub(crate) async fn claim_for_game<A: RewardApi>(
    api: Arc<A>,
    credentials: Arc<[Credential]>,
    game: Game,
    lang: String,
    limiter: Limiter,
) -> Vec<ClaimResult> {
    let claimer = Arc::new(DailyReward::new(api, game, limiter));
    let lang: Arc<str> = lang.into();

    let tasks: Vec<_> = credentials
        .iter()
        .cloned()
        .map(|credential| {
            let claimer = Arc::clone(&claimer);
            let lang = Arc::clone(&lang);
            tokio::spawn(async move { claimer.attempt(&credential, &lang).await })
        })
        .collect();

    future::join_all(tasks)
        .await
        .into_iter()
        .zip(credentials.iter())
        .map(|(joined, credential)| {
            joined.unwrap_or_else(|e| {
                error!("[{game}] {}: check-in task failed: {e}", credential.source);
                ClaimResult::failed()
            })
        })
        .collect()
}
