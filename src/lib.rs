//! prisma-casefix: recase table names in generated SQL migrations
//!
//! This library post-processes a tree of generated `.sql` migration files so
//! table name casing matches the schema definition's model names, either by
//! substituting names parsed from the schema or by capitalizing quoted
//! identifiers in place.

pub mod error;
pub mod rewrite;
pub mod schema;
pub mod util;
pub mod walker;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

pub use error::CasefixError;

/// Which substitution rule to apply to each migration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecaseVariant {
    /// Case-insensitively replace model names parsed from the schema file
    SchemaDriven,
    /// Capitalize backtick-quoted identifiers following a `TABLE ` marker
    InlineCapitalize,
}

/// Options for a recase run
#[derive(Debug, Clone)]
pub struct RecaseOptions {
    /// Path to the schema file (read only for `SchemaDriven`)
    pub schema_path: PathBuf,
    /// Root directory of the generated migration files
    pub migrations_root: PathBuf,
    /// Substitution rule to apply
    pub variant: RecaseVariant,
    /// Enable verbose output
    pub verbose: bool,
}

/// Summary of a completed recase run.
///
/// `files_changed` and `matches_found` are tracked separately: a file whose
/// table names already carry the canonical casing matches without changing,
/// and neither count being zero is an error.
#[derive(Debug, Clone, Default)]
pub struct RecaseReport {
    /// Model names extracted from the schema, in declaration order
    pub model_names: Vec<String>,
    /// Number of `.sql` files visited
    pub files_visited: usize,
    /// Number of files whose content changed and was written back
    pub files_changed: usize,
    /// Total occurrences matched by the substitution rule
    pub matches_found: usize,
}

/// Recase every `.sql` file under the migrations root
pub fn run_recase(options: RecaseOptions) -> Result<RecaseReport> {
    let model_names = match options.variant {
        RecaseVariant::SchemaDriven => {
            let text = fs::read_to_string(&options.schema_path).map_err(|e| {
                CasefixError::SchemaReadError {
                    path: options.schema_path.clone(),
                    source: e,
                }
            })?;
            schema::extract_model_names(&text)
        }
        RecaseVariant::InlineCapitalize => Vec::new(),
    };

    if options.verbose && options.variant == RecaseVariant::SchemaDriven {
        println!("Found {} model declarations", model_names.len());
    }

    let mut report = RecaseReport {
        model_names: model_names.iter().map(|n| n.raw().to_string()).collect(),
        ..Default::default()
    };

    // Rewrites are interleaved with discovery: a failure partway through
    // leaves already-visited files rewritten and the rest untouched.
    for entry in walker::sql_files(&options.migrations_root) {
        let path = entry?;

        if options.verbose {
            println!("{}", path.display());
        }
        report.files_visited += 1;

        let content = fs::read_to_string(&path).map_err(|e| CasefixError::SqlFileReadError {
            path: path.clone(),
            source: e,
        })?;

        let (rewritten, matches) = match options.variant {
            RecaseVariant::SchemaDriven => rewrite::apply_model_names(&content, &model_names),
            RecaseVariant::InlineCapitalize => rewrite::capitalize_table_idents(&content),
        };
        report.matches_found += matches;

        if rewritten != content {
            write_atomic(&path, &rewritten)?;
            report.files_changed += 1;
        }
    }

    Ok(report)
}

/// Replace `path`'s content via a temporary file in the same directory and
/// an atomic rename, so the original is never left partially written.
fn write_atomic(path: &Path, content: &str) -> Result<(), CasefixError> {
    let dir = path.parent().unwrap_or(Path::new("."));

    let result = tempfile::NamedTempFile::new_in(dir)
        .and_then(|mut tmp| {
            tmp.write_all(content.as_bytes())?;
            // Temp files are created 0600; carry the target's permissions
            // over so the rename does not tighten them.
            let permissions = fs::metadata(path)?.permissions();
            tmp.as_file().set_permissions(permissions)?;
            Ok(tmp)
        })
        .and_then(|tmp| tmp.persist(path).map_err(|e| e.error));

    match result {
        Ok(_) => Ok(()),
        Err(source) => Err(CasefixError::SqlFileWriteError {
            path: path.to_path_buf(),
            source,
        }),
    }
}
