//! Founder/idea fit scoring: a deterministic scoring engine, idea ranking and filtering, and a
//! prompt compiler for the LLM gateway.

pub mod config;
pub mod error;
pub mod fit;
pub mod load;
pub mod logging;
pub mod prompt;
pub mod rank;
pub mod report;
pub mod score;
pub mod types;
pub mod validate;
