//! Rubric generation command
use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::Local;
use serde::Serialize;

use rubricgen_core::document::Document;
use rubricgen_core::error::Result;
use rubricgen_core::rubric::{format_timestamp, render, Provenance, Rubric, RubricRow};
use rubricgen_core::trace_time;

use crate::cli::{Cli, OutputFormat};

/// Machine-readable run summary
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub status: &'static str,
    pub output: String,
    pub source: String,
    pub fingerprint: &'a str,
    pub rules: usize,
    pub max_penalty: u32,
    pub rows: &'a [RubricRow],
}

impl<'a> Summary<'a> {
    pub fn new(status: &'static str, doc: &'a Document, rubric: &'a Rubric, out: &Path) -> Self {
        Self {
            status,
            output: out.display().to_string(),
            source: doc.path.display().to_string(),
            fingerprint: doc.short_fingerprint(),
            rules: rubric.rows.len(),
            max_penalty: rubric.max_penalty(),
            rows: &rubric.rows,
        }
    }

    pub fn print(&self, cli: &Cli, message: &str) -> Result<()> {
        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(self)?),
            OutputFormat::Human if !cli.quiet => println!("{} {}", message, self.output),
            OutputFormat::Human => {}
        }
        Ok(())
    }
}

/// Render the rubric for `agents` and write it to `out`, replacing any existing file
pub fn execute(cli: &Cli, agents: &Path, out: &Path) -> Result<()> {
    let start = Instant::now();

    let doc = Document::read(agents)?;
    let rubric = Rubric::from_markdown(&doc.content);
    let source = doc.path.display().to_string();
    let generated_at = format_timestamp(Local::now());
    let rendered = render(
        &rubric,
        Provenance {
            source: &source,
            generated_at: &generated_at,
            fingerprint: doc.short_fingerprint(),
        },
    );
    trace_time!(start, "render", rules = rubric.rows.len());

    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out, format!("{}\n", rendered))?;
    tracing::debug!(path = %out.display(), bytes = rendered.len() + 1, "write_rubric");

    Summary::new("ok", &doc, &rubric, out).print(cli, "[OK] Wrote rubric:")
}
