//! Skill-matching engine: normalizes free-text skill fields into canonical
//! tokens, builds a shared vocabulary over resumes and postings, vectorizes
//! every record, and ranks postings against one applicant's resume by Jaccard
//! similarity.
//!
//! All data is precomputed once into a [`MatchContext`] and read-only
//! afterwards; every match call is a pure computation over that context.

pub mod corpus;
pub mod matcher;
pub mod similarity;
pub mod tokenizer;
pub mod vocab;

pub use corpus::{MatchContext, Posting, PostingRecord, Resume, ResumeRecord};
pub use matcher::{find_resume, match_postings, LookupError, MatchResult, DEFAULT_THRESHOLD};
pub use similarity::jaccard;
pub use tokenizer::{normalize, SkillSet};
pub use vocab::{SkillVector, TokenId, Vocabulary};
