use crate::tokenizer::SkillSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

pub type TokenId = u32;

/// Occurrence counts over the vocabulary; position `i` counts the token with id `i`.
pub type SkillVector = Vec<u32>;

/// Bijective mapping from every distinct skill token (across both corpora) to a
/// contiguous `TokenId` range starting at 0.
///
/// Built once over the combined corpora before any vectorization, and never
/// appended to afterwards, so cached vectors stay valid for the process lifetime.
/// Indices are assigned in sorted token order to keep the mapping deterministic
/// across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    index: HashMap<String, TokenId>,
}

impl Vocabulary {
    pub fn build<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a SkillSet>,
    {
        let union: BTreeSet<&str> = sets
            .into_iter()
            .flat_map(|s| s.unique().iter().map(String::as_str))
            .collect();
        let index = union
            .into_iter()
            .enumerate()
            .map(|(id, token)| (token.to_string(), id as TokenId))
            .collect();
        Self { index }
    }

    pub fn token_id(&self, token: &str) -> Option<TokenId> {
        self.index.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Count vector of length `|vocabulary|` for the given skill set.
    /// Tokens absent from the vocabulary are silently ignored.
    pub fn vectorize(&self, set: &SkillSet) -> SkillVector {
        let mut vector = vec![0u32; self.index.len()];
        for token in set.tokens() {
            if let Some(&id) = self.index.get(token.as_str()) {
                vector[id as usize] += 1;
            }
        }
        vector
    }
}
