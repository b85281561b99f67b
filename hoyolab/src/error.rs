use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to deserialize response: {0}")]
    Deserialize(String),

    #[error("[{retcode}] {message}")]
    Api { retcode: i64, message: String },

    #[error("Response contained no data")]
    MissingData,
}
