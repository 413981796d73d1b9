//! `votegrep --url <page>` — extract vote totals and emit the report.

use crate::acquisition::{HttpClient, PageSource};
use crate::cli::output::{self, Styled};
use crate::extract::VoteExtractor;
use crate::report::ExtractionReport;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Split a comma-separated candidate list, trimming names and dropping
/// empties.
pub fn parse_candidate_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run one extraction: load the page, look up each candidate, emit the
/// JSON report to stdout or `--out`.
pub async fn run(
    url: Option<&str>,
    file: Option<&Path>,
    candidates: &str,
    out: Option<&Path>,
    timeout_ms: u64,
) -> Result<()> {
    let source = match (url, file) {
        (Some(raw), None) => {
            PageSource::url(raw).with_context(|| format!("invalid URL: {raw}"))?
        }
        (None, Some(path)) => PageSource::file(path.to_path_buf()),
        (Some(_), Some(_)) => bail!("--url and --file are mutually exclusive"),
        (None, None) => bail!("provide --url or --file pointing to the results page"),
    };

    let candidates = parse_candidate_list(candidates);

    let client = HttpClient::new()?;
    let html = source.load(&client, timeout_ms).await?;

    let tally = VoteExtractor::parse(&html).extract(&candidates);
    let report = ExtractionReport {
        source: source.describe(),
        candidates: tally,
    };
    let json = serde_json::to_string_pretty(&report).context("serializing report")?;

    let s = Styled::new();
    if !output::is_quiet() {
        let found = report
            .candidates
            .iter()
            .filter(|(_, count)| count.is_some())
            .count();
        let total = report.candidates.len();
        let sym = if found == total { s.ok_sym() } else { s.warn_sym() };
        eprintln!(
            "  {sym} {}",
            s.dim(&format!("{found} of {total} candidates matched"))
        );
    }

    match out {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !output::is_quiet() {
                eprintln!("  Saved report to {}", s.bold(&path.display().to_string()));
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}
