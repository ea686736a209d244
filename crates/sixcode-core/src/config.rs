use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Inputs longer than this many characters are halved before encoding.
pub const DEFAULT_SPLIT_THRESHOLD: usize = 0xffff;

/// Whole-string encoding strategies the dispatcher can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Rebuild the text from its code points.
    CodePoint,
    /// Index into a string assembled from symbol table entries.
    Lookup,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CodePoint => "code_point",
            Self::Lookup => "lookup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub split_threshold: usize,
    /// Strategies in tie-break order: on equal output length the earlier one wins.
    pub strategies: Vec<StrategyKind>,
}

impl EncoderConfig {
    /// Parse a JSON configuration. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.split_threshold == 0 {
            return Err(Error::InvalidConfig("split_threshold must be at least 1".into()));
        }
        if self.strategies.is_empty() {
            return Err(Error::InvalidConfig("at least one strategy is required".into()));
        }
        Ok(())
    }

    pub fn with_split_threshold(mut self, threshold: usize) -> Self {
        self.split_threshold = threshold;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<StrategyKind>) -> Self {
        self.strategies = strategies;
        self
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            split_threshold: DEFAULT_SPLIT_THRESHOLD,
            strategies: vec![StrategyKind::CodePoint, StrategyKind::Lookup],
        }
    }
}
