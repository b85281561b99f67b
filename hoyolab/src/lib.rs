//! This library provides functionality for interacting with the HoYoLAB API.
//! It covers the daily check-in endpoints of every supported game and the
//! account binding endpoint used to look up game roles.
mod api;
mod cookie;
mod endpoint;
mod error;
mod http;
mod schema;

pub use api::{ClaimOutcome, RewardApi};
pub use cookie::Credential;
pub use endpoint::Game;
pub use error::Error;
pub use http::HttpClient;
pub use schema::{Award, GameAccount, SignInfo};

pub type Result<T> = std::result::Result<T, Error>;
