use indexmap::IndexMap;

/// Ordered query-string parameters.
///
/// `IndexMap` keeps the order parameters arrived in. Inserting an existing key
/// replaces its value in place, a new key is appended, which is how PHP
/// arrays (and therefore `$_GET` copies) behave.
pub type QueryParams = IndexMap<String, String>;

/// Whether a column or sort value counts as unset: blank, or `"0"`, which
/// the template layer has always treated as false.
pub(crate) fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "0"
}
