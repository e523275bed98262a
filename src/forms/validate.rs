//! Client-side field checks
//!
//! Lightweight checks only: non-empty, a simple email shape, and a phone
//! length rule per country calling code. The backend remains the authority.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use super::error::FormError;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

fn digits_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+$").expect("valid digits pattern"))
}

/// Simple email shape check: `local@domain.tld` without whitespace
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Accepted national number length for a calling code
pub fn phone_digits(country_code: &str) -> (usize, usize) {
    match country_code.trim() {
        "+45" => (8, 8),
        "+46" => (7, 10),
        "+47" => (8, 8),
        "+91" => (10, 10),
        "+1" => (10, 10),
        _ => (6, 15),
    }
}

/// Check a national number against its country's pattern.
///
/// Spaces, dashes and parentheses are ignored.
pub fn is_valid_phone(country_code: &str, number: &str) -> bool {
    let digits: String = number
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let (min, max) = phone_digits(country_code);
    digits_pattern().is_match(&digits) && (min..=max).contains(&digits.len())
}

/// Per-field error messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Record `message` when `value` is blank
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.insert(field, message);
            false
        } else {
            true
        }
    }

    /// Required email with a shape check
    pub fn email(&mut self, field: &'static str, value: &str) {
        if self.require(field, value, "Email is required") && !is_valid_email(value.trim()) {
            self.insert(field, "Enter a valid email address");
        }
    }

    /// Optional phone number; blank passes
    pub fn phone(&mut self, field: &'static str, country_code: &str, value: &str) {
        if !value.trim().is_empty() && !is_valid_phone(country_code, value) {
            self.insert(field, format!("Enter a valid {} phone number", country_code.trim()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `Ok` when nothing was recorded
    pub fn into_result(self) -> Result<(), FormError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(FormError::Invalid(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}
