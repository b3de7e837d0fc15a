//! Substitution rules for migration file content
//!
//! Both rules are pure text transforms: they take the full file content and
//! return the rewritten content plus the number of occurrences matched.
//! Callers decide whether anything actually changed by comparing input and
//! output, so a match that was already canonically cased counts as a match
//! but not as a change.

use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex, RegexBuilder};

use crate::schema::ModelName;
use crate::util::capitalize_first;

/// Matches the literal marker `TABLE ` followed by a backtick-quoted word
static TABLE_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"TABLE `(\w+)`").expect("Invalid table identifier regex"));

/// Schema-driven rule: for every model name, in list order, replace each
/// case-insensitive occurrence with its canonical form.
///
/// The match is a literal one, deliberately not word-bounded, so a model
/// name that is a substring of another identifier (`User` inside
/// `UserProfile`) is rewritten too. Later names re-overwrite substitutions
/// made by earlier ones where names overlap.
pub fn apply_model_names(content: &str, names: &[ModelName]) -> (String, usize) {
    let mut text = content.to_string();
    let mut matches = 0;

    for name in names {
        let pattern = RegexBuilder::new(&regex::escape(name.raw()))
            .case_insensitive(true)
            .build()
            .expect("Escaped model name is a valid pattern");

        matches += pattern.find_iter(&text).count();
        let canonical = name.canonical();
        text = pattern
            .replace_all(&text, NoExpand(&canonical))
            .into_owned();
    }

    (text, matches)
}

/// Inline rule: capitalize the first character of every backtick-quoted
/// identifier that immediately follows the literal `TABLE ` marker.
///
/// The remainder of the identifier is left untouched (`oRDERS` becomes
/// `ORDERS`, not `Orders`); identifiers elsewhere in the file are never
/// modified. Reapplying the rule to its own output is a no-op.
pub fn capitalize_table_idents(content: &str) -> (String, usize) {
    let mut matches = 0;
    let text = TABLE_IDENT.replace_all(content, |caps: &Captures| {
        matches += 1;
        format!("TABLE `{}`", capitalize_first(&caps[1]))
    });
    (text.into_owned(), matches)
}
