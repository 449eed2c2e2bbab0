//! Seam between the pipeline and the external text-generation service.

use std::future::Future;

use crate::error::AnalysisError;

/// Which model a prompt is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Cheap, fast model for the per-chunk pass.
    Fast,
    /// Stronger model for the single synthesis pass.
    Premium,
}

/// A single-turn text generator: one prompt in, one text response out.
///
/// [`crate::GeminiClient`] is the production implementation. Tests substitute
/// scripted doubles.
pub trait TextModel: Send + Sync {
    /// Send `prompt` to the model selected by `tier` and return its raw text.
    fn generate(
        &self,
        tier: ModelTier,
        prompt: &str,
    ) -> impl Future<Output = Result<String, AnalysisError>> + Send;
}
