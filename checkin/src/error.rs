use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("A game's check-in batch failed unexpectedly: {0}")]
    Structural(#[from] tokio::task::JoinError),

    #[error("'{0}' is not a valid time, TIME must look like HH:MM or HH:MM:SS")]
    ScheduleTime(String),
}
