use crate::matcher::{find_resume, match_postings, LookupError, MatchResult};
use crate::tokenizer::{normalize, SkillSet};
use crate::vocab::{SkillVector, Vocabulary};
use serde::{Deserialize, Serialize};

/// Raw resume row as supplied by the loader. Missing fields default to "".
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeRecord {
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
    #[serde(rename = "Skills", alias = "skills", default)]
    pub skills: String,
}

/// Raw internship posting row as supplied by the loader.
#[derive(Debug, Clone, Deserialize)]
pub struct PostingRecord {
    #[serde(rename = "Title", alias = "title", default)]
    pub title: String,
    #[serde(rename = "Company", alias = "company", default)]
    pub company: String,
    #[serde(rename = "Location", alias = "location", default)]
    pub location: String,
    #[serde(rename = "Description", alias = "description", default)]
    pub description: String,
    #[serde(rename = "Required Skills", alias = "required_skills", default)]
    pub required_skills: String,
}

/// A loaded resume with its derived representations. Read-only after load.
#[derive(Debug, Clone, Serialize)]
pub struct Resume {
    pub name: String,
    pub skills: String,
    pub skill_set: SkillSet,
    pub skill_vector: SkillVector,
}

/// A loaded posting with its derived representations. Read-only after load.
#[derive(Debug, Clone, Serialize)]
pub struct Posting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub required_skills: String,
    pub skill_set: SkillSet,
    pub skill_vector: SkillVector,
}

/// Both corpora plus the shared vocabulary, built once at startup and read-only
/// afterwards. Every lookup and match call borrows from this context, so calls
/// are re-entrant and safe to run concurrently for different applicants.
#[derive(Debug, Default)]
pub struct MatchContext {
    resumes: Vec<Resume>,
    postings: Vec<Posting>,
    vocabulary: Vocabulary,
}

impl MatchContext {
    /// Normalize both corpora, build the combined vocabulary, and cache a count
    /// vector on every record. The vocabulary must cover both corpora before any
    /// vectorization so that tokens unique to either side still get valid ids.
    pub fn build(resumes: Vec<ResumeRecord>, postings: Vec<PostingRecord>) -> Self {
        let resume_sets: Vec<SkillSet> = resumes.iter().map(|r| normalize(&r.skills)).collect();
        let posting_sets: Vec<SkillSet> =
            postings.iter().map(|p| normalize(&p.required_skills)).collect();

        let vocabulary = Vocabulary::build(resume_sets.iter().chain(posting_sets.iter()));

        let resumes: Vec<Resume> = resumes
            .into_iter()
            .zip(resume_sets)
            .map(|(record, skill_set)| Resume {
                skill_vector: vocabulary.vectorize(&skill_set),
                name: record.name,
                skills: record.skills,
                skill_set,
            })
            .collect();

        let postings: Vec<Posting> = postings
            .into_iter()
            .zip(posting_sets)
            .map(|(record, skill_set)| Posting {
                skill_vector: vocabulary.vectorize(&skill_set),
                title: record.title,
                company: record.company,
                location: record.location,
                description: record.description,
                required_skills: record.required_skills,
                skill_set,
            })
            .collect();

        tracing::info!(
            num_resumes = resumes.len(),
            num_postings = postings.len(),
            vocab_size = vocabulary.len(),
            "corpora loaded"
        );

        Self { resumes, postings, vocabulary }
    }

    pub fn resumes(&self) -> &[Resume] {
        &self.resumes
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Look up an applicant by name and rank every posting against their resume.
    /// Returns the matched resume alongside the ranked results so the caller can
    /// report the applicant's canonical name.
    pub fn match_applicant(
        &self,
        query: &str,
        threshold: f64,
    ) -> Result<(&Resume, Vec<MatchResult>), LookupError> {
        let resume = find_resume(&self.resumes, query)?;
        let results = match_postings(resume, &self.postings, threshold);
        tracing::debug!(
            applicant = %resume.name,
            threshold,
            num_matches = results.len(),
            "matched postings"
        );
        Ok((resume, results))
    }
}
