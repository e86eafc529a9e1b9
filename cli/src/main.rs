use anyhow::Result;
use clap::Parser;
use cli::{load_postings, load_resumes, run_match, MatchReport};
use engine::{LookupError, DEFAULT_THRESHOLD};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "skillsync")]
#[command(about = "Match an applicant's resume against internship postings", long_about = None)]
struct Args {
    /// Applicant name (case-insensitive substring match)
    name: String,
    /// Path to the resume records (.json or .jsonl)
    #[arg(long, default_value = "./data/resumes.json")]
    resumes: PathBuf,
    /// Path to the internship posting records (.json or .jsonl)
    #[arg(long, default_value = "./data/postings.json")]
    postings: PathBuf,
    /// Minimum similarity score (exclusive) for a posting to be listed
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Emit the report as JSON instead of plain text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let resumes = load_resumes(&args.resumes)?;
    let postings = load_postings(&args.postings)?;

    match run_match(resumes, postings, &args.name, args.threshold) {
        Ok(report) => {
            render(&report, args.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(LookupError::EmptyQuery) => {
            eprintln!("Please enter a valid applicant name.");
            Ok(ExitCode::FAILURE)
        }
        Err(LookupError::NoMatch { query }) => {
            eprintln!("No resume found for applicant: {query}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn render(report: &MatchReport, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    if report.matches.is_empty() {
        println!("No internships matched for {}.", report.applicant);
        return Ok(());
    }
    println!("Matched internships for {}:", report.applicant);
    for (rank, m) in report.matches.iter().enumerate() {
        println!(
            "{}. {} at {} ({}) | score {:.3}",
            rank + 1,
            m.internship_title,
            m.company,
            m.location,
            m.similarity_score
        );
        if !m.description.is_empty() {
            println!("   {}", m.description);
        }
    }
    Ok(())
}
