use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum CommentsFile {
    List(Vec<String>),
    Wrapped {
        #[serde(default)]
        comments: Option<Vec<String>>,
    },
}

/// Read comments from `path`.
///
/// Accepts either a bare JSON array of strings or the HTTP request shape
/// `{ "comments": [...] }`.
pub(crate) fn read_comments(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_comments(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

pub(crate) fn parse_comments(raw: &str) -> anyhow::Result<Vec<String>> {
    let parsed: CommentsFile = serde_json::from_str(raw)
        .context("expected a JSON array of strings or an object with a `comments` array")?;
    let comments = match parsed {
        CommentsFile::List(list) => list,
        CommentsFile::Wrapped { comments } => comments.unwrap_or_default(),
    };
    if comments.is_empty() {
        anyhow::bail!("No comments");
    }
    Ok(comments)
}
