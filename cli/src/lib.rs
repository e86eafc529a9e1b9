use anyhow::{Context, Result};
use engine::{LookupError, MatchContext, MatchResult, PostingRecord, ResumeRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Outcome of one applicant query, ready for rendering.
#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub applicant: String,
    pub threshold: f64,
    pub matches: Vec<MatchResult>,
}

/// Load records from a `.json` file (array or single object) or a `.jsonl`
/// file (one record per line, blank lines skipped).
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    if path.extension().and_then(|s| s.to_str()) == Some("jsonl") {
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: T = serde_json::from_str(&line)
                .with_context(|| format!("parsing record in {}", path.display()))?;
            records.push(record);
        }
        return Ok(records);
    }
    let json: serde_json::Value = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;
    let records = match json {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(records)
}

pub fn load_resumes(path: &Path) -> Result<Vec<ResumeRecord>> {
    let records: Vec<ResumeRecord> = load_records(path)?;
    tracing::info!(num_resumes = records.len(), path = %path.display(), "resumes loaded");
    Ok(records)
}

pub fn load_postings(path: &Path) -> Result<Vec<PostingRecord>> {
    let records: Vec<PostingRecord> = load_records(path)?;
    tracing::info!(num_postings = records.len(), path = %path.display(), "postings loaded");
    Ok(records)
}

/// Build the match context over both corpora and rank postings for one
/// applicant. Lookup failures are returned as-is for the caller to render.
pub fn run_match(
    resumes: Vec<ResumeRecord>,
    postings: Vec<PostingRecord>,
    query: &str,
    threshold: f64,
) -> Result<MatchReport, LookupError> {
    let ctx = MatchContext::build(resumes, postings);
    let (resume, matches) = ctx.match_applicant(query, threshold)?;
    tracing::info!(applicant = %resume.name, num_matches = matches.len(), "match complete");
    Ok(MatchReport { applicant: resume.name.clone(), threshold, matches })
}
