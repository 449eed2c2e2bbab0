use std::path::Path;

use chorus_analysis::prompts::chunk_prompt;
use chorus_analysis::{chunk_comments, run_analysis, GeminiClient, CHUNK_SIZE};

use crate::input::read_comments;

pub(crate) async fn run(file: &Path, dry_run: bool, compact: bool) -> anyhow::Result<()> {
    let comments = read_comments(file)?;

    if dry_run {
        print_dry_run(&comments);
        return Ok(());
    }

    let config = chorus_core::load_app_config()?;
    let model = GeminiClient::new(&config.model)?;
    tracing::info!(
        comments = comments.len(),
        file = %file.display(),
        "analyzing comment file"
    );
    let report = run_analysis(&model, &comments).await?;

    let rendered = if compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{rendered}");
    Ok(())
}

fn print_dry_run(comments: &[String]) {
    let chunks = chunk_comments(comments, CHUNK_SIZE);
    println!(
        "{} comments -> {} chunk(s) of up to {CHUNK_SIZE}",
        comments.len(),
        chunks.len()
    );
    for (i, chunk) in chunks.into_iter().enumerate() {
        println!("\n--- chunk {} ({} comments) ---", i + 1, chunk.len());
        println!("{}", chunk_prompt(chunk));
    }
}
