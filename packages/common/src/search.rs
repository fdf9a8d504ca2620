/// Case-insensitive substring test. `needle` is expected to be trimmed already.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
