//! Staleness check against an existing rubric
use std::fs;
use std::io;
use std::path::Path;

use rubricgen_core::document::Document;
use rubricgen_core::error::{RubricError, Result};
use rubricgen_core::rubric::{parse_fingerprint, Rubric};

use crate::cli::Cli;
use crate::commands::generate::Summary;

/// Compare the fingerprint recorded in `out` with the current source. Writes nothing.
pub fn execute(cli: &Cli, agents: &Path, out: &Path) -> Result<()> {
    let doc = Document::read(agents)?;

    let existing = match fs::read_to_string(out) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(stale(out, "rubric file does not exist"));
        }
        Err(e) => return Err(e.into()),
    };

    let recorded = parse_fingerprint(&existing)
        .ok_or_else(|| stale(out, "no source fingerprint header"))?;
    if recorded != doc.short_fingerprint() {
        return Err(stale(
            out,
            &format!(
                "source fingerprint {} does not match recorded {}",
                doc.short_fingerprint(),
                recorded
            ),
        ));
    }

    let rubric = Rubric::from_markdown(&doc.content);
    Summary::new("up_to_date", &doc, &rubric, out).print(cli, "[OK] Rubric up to date:")
}

fn stale(out: &Path, reason: &str) -> RubricError {
    RubricError::RubricStale {
        path: out.to_path_buf(),
        reason: reason.to_string(),
    }
}
