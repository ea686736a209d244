//! Shared pieces of sixcode: errors, configuration and the model of the
//! target runtime the encoder relies on.

pub mod config;
pub mod dialect;
pub mod error;
pub mod pattern;

pub use config::{EncoderConfig, StrategyKind};
pub use error::{Error, Result};
pub use pattern::PatternError;

#[cfg(test)]
mod tests;
