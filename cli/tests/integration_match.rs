use cli::{load_postings, load_resumes, run_match};
use engine::{LookupError, DEFAULT_THRESHOLD};
use std::fs;
use tempfile::tempdir;

fn write_fixtures(dir: &std::path::Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let resumes = dir.join("resumes.json");
    let postings = dir.join("postings.json");
    fs::write(
        &resumes,
        r#"[
            {"Name": "Grace Hopper", "Skills": "Python, SQL, Excel"},
            {"Name": "Ada Lovelace", "Skills": ""}
        ]"#,
    )
    .unwrap();
    fs::write(
        &postings,
        r#"[
            {"Title": "Data Intern", "Company": "Acme", "Location": "Remote",
             "Description": "Work with data pipelines", "Required Skills": "Python, SQL"},
            {"Title": "Finance Intern", "Company": "First Bank", "Location": "NYC",
             "Description": "Spreadsheets all day", "Required Skills": "Excel, accounting"}
        ]"#,
    )
    .unwrap();
    (resumes, postings)
}

#[test]
fn end_to_end_match_over_json_fixtures() {
    let dir = tempdir().unwrap();
    let (resumes_path, postings_path) = write_fixtures(dir.path());

    let resumes = load_resumes(&resumes_path).unwrap();
    let postings = load_postings(&postings_path).unwrap();
    let report = run_match(resumes, postings, "grace", DEFAULT_THRESHOLD).unwrap();

    assert_eq!(report.applicant, "Grace Hopper");
    // {python, sql, excel} vs {python, sql} = 2/3; vs {excel, accounting} = 1/4
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].internship_title, "Data Intern");
    assert!((report.matches[0].similarity_score - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn empty_skills_resume_reports_no_matches() {
    let dir = tempdir().unwrap();
    let (resumes_path, postings_path) = write_fixtures(dir.path());

    let report = run_match(
        load_resumes(&resumes_path).unwrap(),
        load_postings(&postings_path).unwrap(),
        "Ada",
        0.0,
    )
    .unwrap();
    assert!(report.matches.is_empty());
}

#[test]
fn unknown_applicant_is_not_found() {
    let dir = tempdir().unwrap();
    let (resumes_path, postings_path) = write_fixtures(dir.path());

    let err = run_match(
        load_resumes(&resumes_path).unwrap(),
        load_postings(&postings_path).unwrap(),
        "Turing",
        DEFAULT_THRESHOLD,
    )
    .unwrap_err();
    assert_eq!(err, LookupError::NoMatch { query: "Turing".to_string() });
}

#[test]
fn loads_jsonl_records_and_defaults_missing_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("resumes.jsonl");
    fs::write(
        &path,
        "{\"Name\": \"Lin Wei\", \"Skills\": \"Rust, Go\"}\n\n{\"Name\": \"No Skills\"}\n",
    )
    .unwrap();

    let resumes = load_resumes(&path).unwrap();
    assert_eq!(resumes.len(), 2);
    assert_eq!(resumes[0].name, "Lin Wei");
    assert_eq!(resumes[1].skills, "");
}
