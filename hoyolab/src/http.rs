use crate::api::{ClaimOutcome, RewardApi};
use crate::endpoint::{Endpoint, ACCOUNT_ROLES_URL};
use crate::schema::{Envelope, MonthlyRewards, RoleList, SignResponse};
use crate::{Award, Credential, Error, Game, GameAccount, Result, SignInfo};
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, ORIGIN, REFERER, USER_AGENT};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::json;

const ACT_URL: &str = "https://act.hoyolab.com";
const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    fn headers(credential: &Credential, game: Option<Game>, lang: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_UA));
        headers.insert(ORIGIN, HeaderValue::from_static(ACT_URL));
        headers.insert(REFERER, HeaderValue::from_static(ACT_URL));
        headers.insert(COOKIE, HeaderValue::from_str(&credential.cookie_header())?);
        headers.insert("x-rpc-language", HeaderValue::from_str(lang)?);
        if let Some(sign_game) = game.and_then(Game::sign_game) {
            headers.insert("x-rpc-signgame", HeaderValue::from_static(sign_game));
        }
        Ok(headers)
    }

    async fn request<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<Envelope<T>> {
        let response = builder.send().await?.error_for_status()?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|_| Error::Deserialize(text))
    }

    /// Unwraps `data`, treating any non-zero retcode as an error.
    async fn request_data<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let envelope = self.request::<T>(builder).await?;
        if envelope.retcode != 0 {
            return Err(Error::Api {
                retcode: envelope.retcode,
                message: envelope.message,
            });
        }
        envelope.data.ok_or(Error::MissingData)
    }

    fn event_get(
        &self,
        credential: &Credential,
        game: Game,
        endpoint: Endpoint,
        lang: &str,
    ) -> Result<RequestBuilder> {
        Ok(self
            .client
            .get(format!("{}{endpoint}", game.event_url()))
            .query(&[("act_id", game.act_id()), ("lang", lang)])
            .headers(Self::headers(credential, Some(game), lang)?))
    }
}

impl RewardApi for HttpClient {
    async fn claim_daily_reward(
        &self,
        credential: &Credential,
        game: Game,
        lang: &str,
    ) -> Result<ClaimOutcome> {
        let builder = self
            .client
            .post(format!("{}{}", game.event_url(), Endpoint::Sign))
            .query(&[("lang", lang)])
            .headers(Self::headers(credential, Some(game), lang)?)
            .json(&json!({ "act_id": game.act_id() }));

        let envelope = self.request::<SignResponse>(builder).await?;
        debug!(
            "[{game}] {}: sign returned [{}] {}",
            credential.source, envelope.retcode, envelope.message
        );
        let outcome = ClaimOutcome::from_retcode(envelope.retcode, &envelope.message);

        let captcha = envelope
            .data
            .and_then(|data| data.gt_result)
            .is_some_and(|gt| gt.is_risk);
        if outcome == ClaimOutcome::Claimed && captcha {
            return Ok(ClaimOutcome::Platform {
                retcode: envelope.retcode,
                message: "check-in blocked by a captcha challenge".into(),
            });
        }

        Ok(outcome)
    }

    async fn game_accounts(&self, credential: &Credential, lang: &str) -> Result<Vec<GameAccount>> {
        let builder = self
            .client
            .get(ACCOUNT_ROLES_URL)
            .headers(Self::headers(credential, None, lang)?);

        Ok(self.request_data::<RoleList>(builder).await?.list)
    }

    async fn reward_info(&self, credential: &Credential, game: Game, lang: &str) -> Result<SignInfo> {
        let builder = self.event_get(credential, game, Endpoint::Info, lang)?;
        self.request_data(builder).await
    }

    async fn monthly_rewards(
        &self,
        credential: &Credential,
        game: Game,
        lang: &str,
    ) -> Result<Vec<Award>> {
        let builder = self.event_get(credential, game, Endpoint::Home, lang)?;
        Ok(self.request_data::<MonthlyRewards>(builder).await?.awards)
    }
}
