//! Model name extraction from a Prisma schema file
//!
//! The schema is scanned with a surface regex rather than parsed; this
//! mirrors the generator's own quasi-parsing and is isolated here so a real
//! parser could be substituted without touching the walking or I/O code.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::util::capitalize_first;

/// Matches declarations of the form `model Ident {`
static MODEL_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"model (\w+) \{").expect("Invalid model declaration regex"));

/// A model name declared in the schema, expected to correspond 1:1 with a
/// database table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName {
    raw: String,
}

impl ModelName {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The identifier exactly as declared in the schema.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The casing a table identifier should have after rewriting: the whole
    /// name lowercased, then the first character uppercased. `userAccount`
    /// becomes `Useraccount` — unlike the inline rule, which leaves the
    /// remainder untouched.
    pub fn canonical(&self) -> String {
        capitalize_first(&self.raw.to_lowercase())
    }
}

/// Extract every declared model name from schema text, in source order.
///
/// Duplicates are kept and declared case is preserved. Text that matches no
/// declaration is skipped silently, so a malformed schema yields an empty
/// list rather than an error.
pub fn extract_model_names(schema: &str) -> Vec<ModelName> {
    MODEL_DECL
        .captures_iter(schema)
        .map(|caps| ModelName::new(&caps[1]))
        .collect()
}
