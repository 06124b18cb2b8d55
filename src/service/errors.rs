use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("No configuration exists to yield target {target}")]
    NoConfiguration { target: i64 },
    #[error("No reachable target in [{min}, {max})")]
    NoReachableTarget { min: i64, max: i64 },
}
