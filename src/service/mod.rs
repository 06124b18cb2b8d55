//! Query layer over an immutable solution catalog

mod core;
mod errors;
mod problem;

pub use self::core::ProblemService;
pub use errors::ServiceError;
pub use problem::Problem;

#[cfg(test)]
mod tests;
