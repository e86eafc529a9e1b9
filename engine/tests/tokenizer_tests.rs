use engine::tokenizer::normalize;

#[test]
fn it_lowercases_and_strips_punctuation() {
    let s = normalize("Python, SQL; C/C++ (advanced)!");
    assert!(s.contains("python"));
    assert!(s.contains("sql"));
    assert!(s.contains("advanced"));
    for token in s.tokens() {
        assert_eq!(token, &token.to_lowercase());
        assert!(token.chars().all(|c| c.is_alphanumeric()));
    }
}

#[test]
fn it_filters_stopwords() {
    let s = normalize("experience with Python and the SQL language");
    assert!(!s.contains("with"));
    assert!(!s.contains("and"));
    assert!(!s.contains("the"));
    assert!(s.contains("python"));
    assert!(s.contains("sql"));
}

#[test]
fn it_folds_unicode() {
    // NFKC composes the combining-accent form into the precomposed one, so both
    // spellings produce the same token.
    let decomposed = normalize("Cafe\u{0301} management");
    let precomposed = normalize("Caf\u{e9} management");
    assert_eq!(decomposed.unique(), precomposed.unique());
    assert!(decomposed.contains("management"));
}

#[test]
fn blank_and_punctuation_only_inputs_yield_empty_sets() {
    assert!(normalize("").is_empty());
    assert!(normalize(" \t \n ").is_empty());
    assert!(normalize("!!! ... ,,,").is_empty());
}

#[test]
fn renormalizing_joined_tokens_is_idempotent() {
    let first = normalize("Machine Learning, Python (3.x), and SQL databases");
    let joined = first.tokens().join(" ");
    let second = normalize(&joined);
    assert_eq!(first.unique(), second.unique());
}
