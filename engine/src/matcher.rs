use crate::corpus::{Posting, Resume};
use crate::similarity::jaccard;
use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error;

/// Minimum similarity (exclusive) a posting must exceed to be retained.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// One ranked match handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub internship_title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub similarity_score: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The query was empty or whitespace-only.
    #[error("applicant name query is empty")]
    EmptyQuery,
    /// A valid query that matched zero resumes.
    #[error("no resume found for applicant: {query}")]
    NoMatch { query: String },
}

/// Score the resume against every posting, keep scores strictly above
/// `threshold`, and rank descending. The sort is stable, so postings with equal
/// scores keep their corpus order. An empty result is a normal outcome.
pub fn match_postings(resume: &Resume, postings: &[Posting], threshold: f64) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = postings
        .iter()
        .filter_map(|posting| {
            let score = jaccard(&resume.skill_set, &posting.skill_set);
            if score > threshold {
                Some(MatchResult {
                    internship_title: posting.title.clone(),
                    company: posting.company.clone(),
                    location: posting.location.clone(),
                    description: posting.description.clone(),
                    similarity_score: score,
                })
            } else {
                None
            }
        })
        .collect();
    results.sort_by(|a, b| {
        b.similarity_score
            .partial_cmp(&a.similarity_score)
            .unwrap_or(Ordering::Equal)
    });
    results
}

/// Case-insensitive substring lookup of an applicant by name. When several
/// resumes match, the first in corpus order wins.
pub fn find_resume<'a>(resumes: &'a [Resume], query: &str) -> Result<&'a Resume, LookupError> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(LookupError::EmptyQuery);
    }
    resumes
        .iter()
        .find(|r| r.name.to_lowercase().contains(&needle))
        .ok_or_else(|| LookupError::NoMatch { query: query.trim().to_string() })
}
