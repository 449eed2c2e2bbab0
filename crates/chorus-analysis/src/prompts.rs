//! Prompt templates for the two model passes.
//!
//! Both renderers are pure: the same input always produces the same prompt.

use crate::types::Aggregate;

/// Fields the synthesis pass must return, with the guidance given for each.
pub const REPORT_FIELDS: &[(&str, &str)] = &[
    ("positivePercentage", "integer 0-100, share of positive comments"),
    ("negativePercentage", "integer 0-100, share of negative comments"),
    ("neutralPercentage", "integer 0-100, share of neutral comments"),
    (
        "sentimentSummary_premium",
        "string, 3-5 sentences describing the overall mood and what drives it",
    ),
    (
        "topPraise_premium",
        "array of up to 5 strings, the most valued aspects, merged and deduplicated",
    ),
    (
        "topPainPoints_premium",
        "array of up to 5 strings, the most pressing complaints, merged and deduplicated",
    ),
    (
        "strategicOpportunity",
        "string, the single biggest opportunity the creator should pursue",
    ),
    (
        "audienceDeepProfile",
        "string, who this audience is, what they want and how they talk",
    ),
    (
        "contentIdeas",
        "array of 3-5 strings, concrete content ideas grounded in the data",
    ),
    (
        "engagementPatterns",
        "string, how and why the audience engages",
    ),
    (
        "actionableInsight_premium",
        "string, one specific action to take this week",
    ),
];

/// Render the quick-analysis prompt for one chunk.
///
/// Comments are numbered from 1 within the chunk.
#[must_use]
pub fn chunk_prompt<S: AsRef<str>>(comments: &[S]) -> String {
    let mut prompt = String::from(
        "You are a fast, precise sentiment analyst. Read the numbered audience comments \
         below and summarize them.\n\
         \n\
         Return ONLY a JSON object with exactly these fields and no other text:\n\
         {\"pos\": number, \"neg\": number, \"neu\": number, \"praise\": [string], \
         \"pain\": [string], \"themes\": [string]}\n\
         \n\
         Rules:\n\
         - pos, neg and neu are the estimated percentages (0-100) of positive, negative \
         and neutral comments.\n\
         - praise: up to 5 short phrases naming what commenters appreciate.\n\
         - pain: up to 5 short phrases naming complaints or frustrations.\n\
         - themes: up to 5 short phrases naming recurring topics.\n\
         - Do not wrap the JSON in markdown.\n\
         \n\
         Comments:\n",
    );

    for (i, comment) in comments.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, comment.as_ref()));
    }

    prompt
}

/// Render the premium synthesis prompt from the merged chunk data.
///
/// The aggregate is embedded as pretty-printed JSON.
#[must_use]
pub fn synthesis_prompt(aggregate: &Aggregate) -> String {
    let mut prompt = String::from(
        "You are a senior audience-insight strategist writing a premium report for a \
         content creator. The data below was extracted from batches of their audience's \
         comments: average sentiment percentages plus every praise point, pain point and \
         theme found.\n\
         \n\
         AGGREGATED DATA:\n",
    );
    prompt.push_str(&format!("{:#}\n", aggregate.to_json()));

    prompt.push_str(
        "\nFormatting rules:\n\
         - Respond with ONE valid JSON object and nothing else.\n\
         - No markdown, no code fences, no text before or after the object.\n\
         - Use double quotes for every key and string value.\n\
         - No trailing commas and no comments.\n\
         - Every required field must be present; never return null.\n\
         \n\
         Required fields:\n",
    );

    let fields: Vec<String> = REPORT_FIELDS
        .iter()
        .map(|(name, guidance)| format!("- \"{name}\": {guidance}"))
        .collect();
    prompt.push_str(&fields.join("\n"));
    prompt.push('\n');

    prompt
}
