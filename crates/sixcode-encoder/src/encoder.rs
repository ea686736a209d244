//! Dispatcher: runs every enabled strategy and keeps the shortest output.

use std::sync::Arc;

use sixcode_core::{EncoderConfig, Error, Result};

use crate::bootstrap::Codebook;
use crate::strategy::{strategy, StringEncoder};
use crate::tokenizer::EMPTY_STRING;

/// An encoded string with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoding {
    pub output: String,
    /// Input length in characters.
    pub input_chars: usize,
    pub output_len: usize,
    /// `"empty"`, `"split"`, or the name of the winning strategy.
    pub strategy: &'static str,
}

impl Encoding {
    /// Output bytes per input character.
    pub fn expansion(&self) -> f64 {
        if self.input_chars == 0 {
            return self.output_len as f64;
        }
        self.output_len as f64 / self.input_chars as f64
    }
}

pub struct Encoder {
    codebook: Arc<Codebook>,
    config: EncoderConfig,
    strategies: Vec<Box<dyn StringEncoder>>,
}

impl Encoder {
    /// Encoder over the global codebook with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(EncoderConfig::default())
    }

    pub fn with_config(config: EncoderConfig) -> Result<Self> {
        Self::with_codebook(Codebook::global()?, config)
    }

    pub fn with_codebook(codebook: Arc<Codebook>, config: EncoderConfig) -> Result<Self> {
        config.validate()?;
        let strategies = config
            .strategies
            .iter()
            .map(|&kind| strategy(kind, Arc::clone(&codebook)))
            .collect();
        Ok(Self { codebook, config, strategies })
    }

    pub fn codebook(&self) -> &Codebook {
        &self.codebook
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Expression that evaluates to `s`.
    pub fn encode(&self, s: &str) -> Result<String> {
        self.encode_detailed(s).map(|encoding| encoding.output)
    }

    /// Program that runs `s` as source text and evaluates to its
    /// completion value.
    pub fn encode_run(&self, s: &str) -> Result<String> {
        let words = self.codebook.words();
        Ok(format!("{}({})()({})", words.function, words.return_eval, self.encode(s)?))
    }

    pub fn encode_detailed(&self, s: &str) -> Result<Encoding> {
        let input_chars = s.chars().count();
        let (output, strategy) = self.dispatch(s, input_chars)?;
        Ok(Encoding {
            output_len: output.len(),
            output,
            input_chars,
            strategy,
        })
    }

    fn dispatch(&self, s: &str, chars: usize) -> Result<(String, &'static str)> {
        if chars == 0 {
            return Ok((EMPTY_STRING.to_string(), "empty"));
        }

        if chars > self.config.split_threshold {
            let mid = chars / 2;
            let at = s.char_indices().nth(mid).map_or(s.len(), |(i, _)| i);
            tracing::debug!(chars, mid, "splitting input");
            let (head, tail) = s.split_at(at);
            let head = self.dispatch(head, mid)?.0;
            let tail = self.dispatch(tail, chars - mid)?.0;
            return Ok((format!("{}+{}", head, tail), "split"));
        }

        let mut best: Option<(String, &'static str)> = None;
        for encoder in &self.strategies {
            if !encoder.can_encode(s) {
                continue;
            }
            let output = encoder.encode(s)?;
            if best.as_ref().map_or(true, |(b, _)| output.len() < b.len()) {
                best = Some((output, encoder.name()));
            }
        }

        let (output, name) = best.ok_or_else(|| Error::NoEncoder { input: s.to_string() })?;
        tracing::trace!(strategy = name, chars, len = output.len(), "encoded");
        Ok((output, name))
    }
}

/// Encode `s` with the global codebook and default configuration.
pub fn encode(s: &str) -> Result<String> {
    Encoder::new()?.encode(s)
}

/// Encode `s` as a program with the global codebook and default configuration.
pub fn encode_run(s: &str) -> Result<String> {
    Encoder::new()?.encode_run(s)
}
