//! sixcode: text to programs over the six characters `[]()!+`.
//!
//! Pieces, bottom up:
//! 1. number: unsigned integers
//! 2. table + bootstrap: the shortest known expression for strings the runtime produces by coercion
//! 3. tokenizer: greedy longest-prefix spelling through the table
//! 4. unique + array: integer arrays, deduplicated when that pays off
//! 5. strategy + encoder: whole-string strategies and the dispatcher picking the shortest

pub mod array;
pub mod bootstrap;
pub mod encoder;
pub mod number;
pub mod strategy;
pub mod table;
pub mod tokenizer;
pub mod unique;

pub use bootstrap::Codebook;
pub use encoder::{encode, encode_run, Encoder, Encoding};
pub use sixcode_core::{EncoderConfig, Error, Result, StrategyKind};
