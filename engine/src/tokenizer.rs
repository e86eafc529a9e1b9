use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Alphanumeric runs only: a token produced here can never be pure punctuation.
    static ref RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}]+").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// The canonical skill tokens derived from one free-text skills field.
///
/// Holds the normalized token sequence (duplicates preserved, used by the
/// vectorizer for occurrence counts) alongside a set view of the distinct
/// tokens (used by the similarity engine). Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillSet {
    tokens: Vec<String>,
    unique: HashSet<String>,
}

impl SkillSet {
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let unique = tokens.iter().cloned().collect();
        Self { tokens, unique }
    }

    /// Normalized tokens in extraction order, duplicates included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Distinct tokens.
    pub fn unique(&self) -> &HashSet<String> {
        &self.unique
    }

    pub fn contains(&self, token: &str) -> bool {
        self.unique.contains(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.unique.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unique.is_empty()
    }
}

/// Normalize a raw skills string into a `SkillSet` using NFKC folding,
/// lowercasing, word extraction, and stopword removal.
///
/// Empty, whitespace-only, or punctuation-only input yields an empty set;
/// this never fails.
pub fn normalize(text: &str) -> SkillSet {
    let folded = text.nfkc().collect::<String>().to_lowercase();
    let tokens: Vec<String> = RE
        .find_iter(&folded)
        .map(|m| m.as_str())
        .filter(|t| !is_stopword(t))
        .map(|t| t.to_string())
        .collect();
    SkillSet::from_tokens(tokens)
}
