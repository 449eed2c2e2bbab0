//! Comment analysis pipeline orchestration.

use futures::future::try_join_all;

use crate::aggregate::aggregate;
use crate::chunker::{chunk_comments, CHUNK_SIZE};
use crate::error::AnalysisError;
use crate::model::{ModelTier, TextModel};
use crate::prompts::{chunk_prompt, synthesis_prompt};
use crate::repair::parse_model_json;
use crate::types::{Aggregate, PartialResult, Report};

/// Run the full analysis for one batch of comments.
///
/// 1. Split comments into chunks of [`CHUNK_SIZE`].
/// 2. Analyze every chunk concurrently with the fast model.
/// 3. Average the chunk percentages and concatenate their lists.
/// 4. Run one premium synthesis pass and pin its percentages to the averages.
///
/// # Errors
///
/// - [`AnalysisError::NoComments`] if `comments` is empty.
/// - Any model call failure, at either stage.
/// - [`AnalysisError::SynthesisParse`] / [`AnalysisError::SynthesisShape`] if
///   the synthesis response is unusable. Unparseable chunk responses are not
///   errors (see [`analyze_chunk`]).
pub async fn run_analysis<M: TextModel>(
    model: &M,
    comments: &[String],
) -> Result<Report, AnalysisError> {
    let chunks = chunk_comments(comments, CHUNK_SIZE);
    tracing::info!(
        comments = comments.len(),
        chunks = chunks.len(),
        "starting comment analysis"
    );

    let partials = try_join_all(
        chunks
            .iter()
            .enumerate()
            .map(|(index, chunk)| analyze_chunk(model, index, chunk)),
    )
    .await?;

    let merged = aggregate(&partials).ok_or(AnalysisError::NoComments)?;
    tracing::debug!(
        pos_avg = merged.pos_avg,
        neg_avg = merged.neg_avg,
        neu_avg = merged.neu_avg,
        praise = merged.praise.len(),
        pain = merged.pain.len(),
        themes = merged.themes.len(),
        "chunk results merged"
    );

    let report = synthesize(model, &merged).await?;
    tracing::info!(
        chunks = partials.len(),
        positive = report.positive_percentage,
        negative = report.negative_percentage,
        neutral = report.neutral_percentage,
        "comment analysis complete"
    );
    Ok(report)
}

/// Analyze one chunk with the fast model.
///
/// A response that is not valid JSON after fence stripping is logged with its
/// raw text and replaced by [`PartialResult::default`]; it never fails the
/// batch.
///
/// # Errors
///
/// Returns the model call's error if the request itself fails.
pub async fn analyze_chunk<M: TextModel>(
    model: &M,
    index: usize,
    chunk: &[String],
) -> Result<PartialResult, AnalysisError> {
    let prompt = chunk_prompt(chunk);
    let raw = model.generate(ModelTier::Fast, &prompt).await?;

    match parse_model_json(&raw) {
        Ok(value) => Ok(PartialResult::from_value(&value)),
        Err(e) => {
            tracing::warn!(
                chunk = index,
                size = chunk.len(),
                error = %e,
                raw = %raw,
                "chunk response is not valid JSON; using neutral result"
            );
            Ok(PartialResult::default())
        }
    }
}

/// Run the premium synthesis pass over `merged`.
///
/// # Errors
///
/// Returns the model call's error, [`AnalysisError::SynthesisParse`] if the
/// response is not JSON, or [`AnalysisError::SynthesisShape`] if it is JSON
/// but not an object.
pub async fn synthesize<M: TextModel>(
    model: &M,
    merged: &Aggregate,
) -> Result<Report, AnalysisError> {
    let prompt = synthesis_prompt(merged);
    let raw = model.generate(ModelTier::Premium, &prompt).await?;

    let value = parse_model_json(&raw).map_err(|e| {
        tracing::error!(error = %e, raw = %raw, "synthesis response is not valid JSON");
        AnalysisError::SynthesisParse(e)
    })?;

    Report::from_synthesis(value, merged)
}
