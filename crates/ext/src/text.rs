//! String validators, masks and small transforms

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("valid phone regex"));
static PHONE_SEPARATORS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-.()]").expect("valid separator regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const MIN_PASSWORD_LEN: usize = 8;

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input.trim())
}

/// Optional `+` then 10-15 digits; spaces, dashes, dots and parentheses are ignored
pub fn is_valid_phone(input: &str) -> bool {
    let compact = PHONE_SEPARATORS_RE.replace_all(input.trim(), "");
    PHONE_RE.is_match(&compact)
}

/// At least 8 chars with upper, lower, digit and symbol
pub fn is_strong_password(input: &str) -> bool {
    input.chars().count() >= MIN_PASSWORD_LEN
        && input.chars().any(|c| c.is_uppercase())
        && input.chars().any(|c| c.is_lowercase())
        && input.chars().any(|c| c.is_ascii_digit())
        && input.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

/// Keep the first character of the local part ("j****@example.com")
///
/// Input that is not an email comes back unchanged.
pub fn mask_email(input: &str) -> String {
    let trimmed = input.trim();
    if !is_valid_email(trimmed) {
        return trimmed.to_string();
    }

    match trimmed.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            let first = chars.next().map(String::from).unwrap_or_default();
            format!("{}{}@{}", first, "*".repeat(chars.count().max(1)), domain)
        }
        None => trimmed.to_string(),
    }
}

/// Replace all but the last four digits with `*`
pub fn mask_phone(input: &str) -> String {
    mask_tail(&digits_only(input), 4)
}

/// Card number as "**** **** **** 1234"
///
/// Returns an empty string when fewer than four digits are present.
pub fn mask_card(input: &str) -> String {
    let digits = digits_only(input);
    if digits.len() < 4 {
        return String::new();
    }

    let last4 = &digits[digits.len() - 4..];
    format!("**** **** **** {}", last4)
}

/// Uppercase the first letter of each word, lowercase the rest
pub fn capitalize_words(input: &str) -> String {
    WHITESPACE_RE
        .split(input.trim())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Truncate to `max_chars` characters, ending with "..." when shortened
pub fn truncate_with_ellipsis(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }

    let kept: String = input.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}

fn mask_tail(digits: &str, visible: usize) -> String {
    let hidden = digits.len().saturating_sub(visible);
    format!("{}{}", "*".repeat(hidden), &digits[hidden..])
}
