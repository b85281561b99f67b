use crate::Game;
use serde::Deserialize;

/// Common wrapper around every HoYoLAB response body
#[derive(Deserialize, Debug)]
pub(crate) struct Envelope<T> {
    pub retcode: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct SignResponse {
    #[serde(default)]
    pub gt_result: Option<GeetestResult>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct GeetestResult {
    #[serde(default)]
    pub is_risk: bool,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RoleList {
    pub list: Vec<GameAccount>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct MonthlyRewards {
    pub awards: Vec<Award>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GameAccount {
    pub game_biz: String,
    pub region: String,
    pub game_uid: String,
    pub nickname: String,
    pub level: u32,
    pub region_name: String,
}

impl GameAccount {
    pub fn game(&self) -> Option<Game> {
        Game::from_biz(&self.game_biz)
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SignInfo {
    pub total_sign_day: u32,
    #[serde(default)]
    pub today: String,
    #[serde(default)]
    pub is_sign: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Award {
    pub name: String,
    pub cnt: u32,
    #[serde(default)]
    pub icon: String,
}
