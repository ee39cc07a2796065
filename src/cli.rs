//! CLI argument definitions and dispatch.
//!
//! `run()` owns the whole pipeline: parse args, validate paths, pick
//! file-vs-URL mode, create the tokio runtime, and hand errors to stderr.
//! It returns `Result<(), ExitCode>`; main.rs only maps the code to
//! `std::process::exit` and never prints.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::checker;
use crate::checks::Checklist;
use crate::document::DocumentSource;
use crate::error::GraderError;
use crate::exit_codes::ExitCode;
use crate::logging;
use crate::report;

/// Default checklist path, used when `--checks` is not given.
pub const CHECKS_DEFAULT: &str = "checks.json";

/// Default HTML document path, used when `--file` is not given.
///
/// `--url` combined with this exact value still takes the URL path; only a
/// different explicit `--file` conflicts.
pub const HTML_DEFAULT: &str = "index.html";

/// htmlgrader - grade an HTML document against a checklist of CSS selectors
#[derive(Parser, Debug)]
#[command(name = "htmlgrader")]
#[command(about = "Grade an HTML document for the presence of expected CSS selectors")]
#[command(long_about = r#"
htmlgrader checks that an HTML document contains a set of expected
CSS-selectable elements and prints one boolean per selector as JSON.

EXAMPLES:
  # Grade index.html against checks.json in the current directory
  htmlgrader

  # Explicit paths
  htmlgrader --checks hw1-checks.json --file submission.html

  # Grade a deployed page instead of a file on disk
  htmlgrader --checks hw1-checks.json --url https://example.org/

CHECKLIST FORMAT:
  A JSON array of CSS selector strings, e.g. ["a[href]", "h1", "div.container"]

OUTPUT:
  A JSON object on stdout, keys in ascending selector order, 4-space indent:
  {
      "a[href]": true,
      "h1": false
  }
"#)]
#[command(version)]
pub struct Cli {
    /// Path to the checklist JSON (array of CSS selector strings)
    #[arg(short = 'c', long = "checks", value_name = "check_file")]
    pub checks: Option<PathBuf>,

    /// Path to the HTML document to grade
    #[arg(short = 'f', long = "file", value_name = "html_file")]
    pub file: Option<PathBuf>,

    /// URL to fetch and grade instead of a file on disk
    #[arg(short = 'u', long = "url", value_name = "url")]
    pub url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Main CLI execution function.
///
/// Handles ALL output including errors: on success the report is already on
/// stdout, on failure the diagnostic is already on stderr and the returned
/// `ExitCode` is the only thing left for main.rs to act on.
pub fn run() -> Result<(), ExitCode> {
    execute(Cli::parse())
}

fn execute(cli: Cli) -> Result<(), ExitCode> {
    // A second init (tests, library callers with their own subscriber) is fine.
    let _ = logging::init_tracing(cli.verbose);

    // Explicitly-given paths are validated up front; defaults are not, a
    // missing default surfaces later as a load error. URLs are never
    // existence-checked.
    for path in [cli.checks.as_deref(), cli.file.as_deref()]
        .into_iter()
        .flatten()
    {
        if !path.exists() {
            eprintln!("{} does not exist. Exiting.", path.display());
            return Err(ExitCode::FAILURE);
        }
    }

    let checks_path = cli
        .checks
        .unwrap_or_else(|| PathBuf::from(CHECKS_DEFAULT));
    let html_path = cli.file.unwrap_or_else(|| PathBuf::from(HTML_DEFAULT));

    let source = match cli.url {
        Some(url) if html_path == Path::new(HTML_DEFAULT) => DocumentSource::Url(url),
        Some(_) => {
            eprintln!(
                "Both --url and a --file path were given; grade one document per run."
            );
            return Err(ExitCode::FAILURE);
        }
        None => DocumentSource::File(html_path),
    };

    if let Err(err) = grade(&checks_path, &source) {
        tracing::error!(error = %err, "grading failed");
        eprintln!("Error: {err}");
        return Err(err.to_exit_code());
    }
    Ok(())
}

/// Load the checklist, obtain the document, run the checks, print the report.
///
/// The parsed document never outlives this call and is passed explicitly
/// through the pipeline; there is no shared document handle.
fn grade(checks_path: &Path, source: &DocumentSource) -> Result<(), GraderError> {
    let checks = Checklist::load(checks_path)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let html = runtime.block_on(source.resolve())?;
    let results = checker::check_document(&html, &checks)?;
    report::print(&results)
}
