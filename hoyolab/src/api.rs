use crate::{Award, Credential, Game, GameAccount, Result, SignInfo};
use std::future::Future;

const RETCODE_OK: i64 = 0;
const RETCODE_ALREADY_CLAIMED: i64 = -5003;
const RETCODE_NO_GAME_ACCOUNT: i64 = -10002;
const RETCODES_INVALID_COOKIES: [i64; 3] = [-100, 10001, 10103];

/// What the platform said about a check-in attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed,
    AlreadyClaimed,
    InvalidCookies,
    /// The login has no role in this game
    NoGameAccount,
    Platform { retcode: i64, message: String },
}

impl ClaimOutcome {
    pub fn from_retcode(retcode: i64, message: &str) -> Self {
        match retcode {
            RETCODE_OK => ClaimOutcome::Claimed,
            RETCODE_ALREADY_CLAIMED => ClaimOutcome::AlreadyClaimed,
            RETCODE_NO_GAME_ACCOUNT => ClaimOutcome::NoGameAccount,
            code if RETCODES_INVALID_COOKIES.contains(&code) => ClaimOutcome::InvalidCookies,
            code => ClaimOutcome::Platform {
                retcode: code,
                message: message.to_string(),
            },
        }
    }
}

/// The calls a daily check-in needs. `HttpClient` talks to HoYoLAB; tests
/// substitute their own implementations.
pub trait RewardApi: Send + Sync + 'static {
    fn claim_daily_reward(
        &self,
        credential: &Credential,
        game: Game,
        lang: &str,
    ) -> impl Future<Output = Result<ClaimOutcome>> + Send;

    fn game_accounts(
        &self,
        credential: &Credential,
        lang: &str,
    ) -> impl Future<Output = Result<Vec<GameAccount>>> + Send;

    fn reward_info(
        &self,
        credential: &Credential,
        game: Game,
        lang: &str,
    ) -> impl Future<Output = Result<SignInfo>> + Send;

    fn monthly_rewards(
        &self,
        credential: &Credential,
        game: Game,
        lang: &str,
    ) -> impl Future<Output = Result<Vec<Award>>> + Send;
}
