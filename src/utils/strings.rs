//! String utilities

pub fn say_hello(string: &str) -> String {
    format!("Hello, {string}!")
}

pub fn uppercase(string: &str) -> String {
    string.to_uppercase()
}

pub fn lowercase(string: &str) -> String {
    string.to_lowercase()
}

/// First character, or an empty string for empty input
pub fn first_character(string: &str) -> String {
    first_characters(string, 1)
}

/// Up to `n` leading characters (not bytes)
pub fn first_characters(string: &str, n: usize) -> String {
    string.chars().take(n).collect()
}
