//! Comment insight pipeline for chorus.
//!
//! Splits a batch of comments into fixed-size chunks, asks the external
//! generative model for a quick sentiment pass on every chunk concurrently,
//! averages the chunk numbers, and runs one premium synthesis pass over the
//! merged result. The final report's percentages always come from the local
//! averages, never from the synthesis response.

pub mod aggregate;
pub mod chunker;
pub mod error;
pub mod gemini;
pub mod model;
pub mod pipeline;
pub mod prompts;
pub mod repair;
pub mod types;

pub use aggregate::{aggregate, round_percentage};
pub use chunker::{chunk_comments, CHUNK_SIZE};
pub use error::AnalysisError;
pub use gemini::GeminiClient;
pub use model::{ModelTier, TextModel};
pub use pipeline::{analyze_chunk, run_analysis, synthesize};
pub use types::{Aggregate, PartialResult, Report};
