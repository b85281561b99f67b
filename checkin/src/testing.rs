//! In-memory `RewardApi` used by the claimer and orchestrator tests.
use hoyolab::{Award, ClaimOutcome, Credential, Game, GameAccount, RewardApi, SignInfo};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

#[derive(Clone)]
pub(crate) struct Behaviour {
    outcome: ClaimOutcome,
    accounts: Vec<GameAccount>,
    day: u32,
    delay: Duration,
    panics: bool,
    unreachable: bool,
}

impl Behaviour {
    pub(crate) fn claimed(accounts: Vec<GameAccount>) -> Self {
        Self {
            outcome: ClaimOutcome::Claimed,
            accounts,
            day: 3,
            delay: Duration::from_millis(5),
            panics: false,
            unreachable: false,
        }
    }

    pub(crate) fn outcome(mut self, outcome: ClaimOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub(crate) fn day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    pub(crate) fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn panicking(mut self) -> Self {
        self.panics = true;
        self
    }

    /// The claim call itself fails, the later lookups still answer.
    pub(crate) fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    behaviours: HashMap<String, Behaviour>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub catalog_calls: AtomicUsize,
    pub account_calls: AtomicUsize,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, ltuid: &str, behaviour: Behaviour) -> Self {
        self.behaviours.insert(ltuid.to_string(), behaviour);
        self
    }

    fn behaviour(&self, credential: &Credential) -> Behaviour {
        self.behaviours
            .get(&credential.ltuid)
            .cloned()
            .unwrap_or_else(|| Behaviour::claimed(Vec::new()).outcome(ClaimOutcome::InvalidCookies))
    }

    async fn call(&self, delay: Duration) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        sleep(delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl RewardApi for FakeApi {
    async fn claim_daily_reward(
        &self,
        credential: &Credential,
        _game: Game,
        _lang: &str,
    ) -> hoyolab::Result<ClaimOutcome> {
        let behaviour = self.behaviour(credential);
        self.call(behaviour.delay).await;
        if behaviour.panics {
            panic!("claim for {} blew up", credential.source);
        }
        if behaviour.unreachable {
            return Err(hoyolab::Error::MissingData);
        }
        Ok(behaviour.outcome)
    }

    async fn game_accounts(
        &self,
        credential: &Credential,
        _lang: &str,
    ) -> hoyolab::Result<Vec<GameAccount>> {
        let behaviour = self.behaviour(credential);
        self.account_calls.fetch_add(1, Ordering::SeqCst);
        self.call(behaviour.delay).await;
        Ok(behaviour.accounts)
    }

    async fn reward_info(
        &self,
        credential: &Credential,
        _game: Game,
        _lang: &str,
    ) -> hoyolab::Result<SignInfo> {
        let behaviour = self.behaviour(credential);
        self.call(behaviour.delay).await;
        Ok(SignInfo {
            total_sign_day: behaviour.day,
            today: "2026-10-18".into(),
            is_sign: true,
        })
    }

    async fn monthly_rewards(
        &self,
        credential: &Credential,
        _game: Game,
        _lang: &str,
    ) -> hoyolab::Result<Vec<Award>> {
        let behaviour = self.behaviour(credential);
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        self.call(behaviour.delay).await;
        Ok((1..=30)
            .map(|n| Award {
                name: format!("Reward {n}"),
                cnt: n * 10,
                icon: String::new(),
            })
            .collect())
    }
}

pub(crate) fn account(game: Game, uid: &str, level: u32) -> GameAccount {
    GameAccount {
        game_biz: format!("{}_global", game.biz_prefix()),
        region: "os_asia".into(),
        game_uid: uid.into(),
        nickname: format!("Player{level}"),
        level,
        region_name: "Asia Server".into(),
    }
}

pub(crate) fn credential(ltuid: &str, source: &str) -> Credential {
    Credential::new(ltuid, format!("v2_{ltuid}"), None, source)
}
