//! Unit tests for the two substitution rules

use pretty_assertions::assert_eq;

use prisma_casefix::rewrite::{apply_model_names, capitalize_table_idents};
use prisma_casefix::schema::ModelName;

fn names(raw: &[&str]) -> Vec<ModelName> {
    raw.iter().map(|r| ModelName::new(*r)).collect()
}

// ============================================================================
// Schema-driven substitution
// ============================================================================

#[test]
fn test_replaces_every_case_variant() {
    let (out, matches) = apply_model_names(
        "ALTER TABLE `user` ADD COLUMN x;\nDROP TABLE `USER`;\n",
        &names(&["User"]),
    );
    assert_eq!(out, "ALTER TABLE `User` ADD COLUMN x;\nDROP TABLE `User`;\n");
    assert_eq!(matches, 2);
}

#[test]
fn test_already_canonical_counts_as_match_not_change() {
    let input = "ALTER TABLE `User` ADD COLUMN x;";
    let (out, matches) = apply_model_names(input, &names(&["User"]));
    assert_eq!(out, input);
    assert_eq!(matches, 1);
}

#[test]
fn test_substring_corruption_is_preserved_behavior() {
    // `Trend` matching inside `TrendSetter` is the documented hazard of the
    // non-word-bounded match; the canonical form flattens the inner casing.
    let (out, _) = apply_model_names("`trendsetter`", &names(&["Trend"]));
    assert_eq!(out, "`Trendsetter`");
}

#[test]
fn test_sequential_order_later_names_overwrite() {
    let (out, _) = apply_model_names(
        "CREATE TABLE `userprofile` (id INT);",
        &names(&["UserProfile", "User"]),
    );
    // `UserProfile` canonicalizes the token first, then `User` rewrites its
    // prefix again; the final text reflects the last substitution.
    assert_eq!(out, "CREATE TABLE `Userprofile` (id INT);");
}

#[test]
fn test_empty_name_list_is_noop() {
    let input = "CREATE TABLE `orders` (id INT);";
    let (out, matches) = apply_model_names(input, &[]);
    assert_eq!(out, input);
    assert_eq!(matches, 0);
}

#[test]
fn test_regex_metacharacters_in_names_are_literal() {
    // Model names come from a \w+ capture in practice, but the substitution
    // must treat any name as a literal.
    let (out, _) = apply_model_names("a.c abc", &names(&["a.c"]));
    assert_eq!(out, "A.c abc");
}

// ============================================================================
// Inline capitalization
// ============================================================================

#[test]
fn test_capitalizes_only_behind_table_marker() {
    let input = "CREATE TABLE `orders` (\n  `orders_fk` INT\n);\nINSERT INTO `orders` VALUES (1);";
    let (out, matches) = capitalize_table_idents(input);
    assert_eq!(
        out,
        "CREATE TABLE `Orders` (\n  `orders_fk` INT\n);\nINSERT INTO `orders` VALUES (1);"
    );
    assert_eq!(matches, 1);
}

#[test]
fn test_first_char_only_rest_untouched() {
    let (out, _) = capitalize_table_idents("ALTER TABLE `oRDERS`;");
    assert_eq!(out, "ALTER TABLE `ORDERS`;");

    let (out, _) = capitalize_table_idents("ALTER TABLE `userAccount`;");
    assert_eq!(out, "ALTER TABLE `UserAccount`;");
}

#[test]
fn test_marker_is_case_sensitive() {
    let input = "alter table `orders`;";
    let (out, matches) = capitalize_table_idents(input);
    assert_eq!(out, input);
    assert_eq!(matches, 0);
}

#[test]
fn test_idempotent_on_own_output() {
    let input = "CREATE TABLE `orders` (id INT);\nALTER TABLE `user_session` ADD y;";
    let (first, first_matches) = capitalize_table_idents(input);
    let (second, second_matches) = capitalize_table_idents(&first);
    assert_eq!(first, second);
    // The pattern still matches the already-capitalized identifiers; it just
    // no longer changes them.
    assert_eq!(first_matches, second_matches);
}

#[test]
fn test_multiple_statements_all_rewritten() {
    let input = "ALTER TABLE `user` ADD a;\nALTER TABLE `post` ADD b;";
    let (out, matches) = capitalize_table_idents(input);
    assert_eq!(out, "ALTER TABLE `User` ADD a;\nALTER TABLE `Post` ADD b;");
    assert_eq!(matches, 2);
}
