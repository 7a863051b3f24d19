use std::collections::HashSet;

/// Credential fields that never become columns, whatever the caller excludes
/// or includes.
pub const SENSITIVE_FIELDS: [&str; 2] = ["password", "repassword"];

pub fn is_sensitive_field(field: &str) -> bool {
    SENSITIVE_FIELDS.contains(&field)
}

/// Fields rendered as columns: `fields` minus `excluded` minus
/// [`SENSITIVE_FIELDS`], in the order of `fields`.
pub fn visible_fields<'a>(fields: &'a [String], excluded: &HashSet<String>) -> Vec<&'a str> {
    fields
        .iter()
        .map(String::as_str)
        .filter(|field| !excluded.contains(*field) && !is_sensitive_field(field))
        .collect()
}
