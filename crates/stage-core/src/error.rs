use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to schedule timer: {0}")]
    Schedule(String),
    #[error("player widget is missing required element `{0}`")]
    MissingElement(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
