//! Form validation.
//!
//! Each check returns the message shown next to the offending field. Use
//! [`FieldErrors`] to collect them across a whole form.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::entities::feedback::{COMMENTS_MAX_CHARS, CUSTOMER_NAME_MAX_CHARS};

pub const USER_NAME_MAX_CHARS: usize = 100;
pub const PHONE_NUMBER_MAX_CHARS: usize = 15;

lazy_static! {
    /// Loose address check: something@domain.tld, no whitespace
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[^@\s]+@[^@\s]+\.[^@\s]+$"
    ).unwrap();
}

/// Per-field validation messages, keyed by form field name
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }

    /// Record the error of `check`, if any, against `field`
    pub fn check(&mut self, field: &str, check: Result<(), String>) -> &mut Self {
        if let Err(message) = check {
            self.add(field, message);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First message recorded for `field`
    pub fn first(&self, field: &str) -> Option<String> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .cloned()
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self
            .errors
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{}: {}", field, m)))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

/// Required, non-blank text of at most `max_chars` characters
pub fn validate_required_text(value: &str, label: &str, max_chars: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", label));
    }

    if value.chars().count() > max_chars {
        return Err(format!(
            "{} must be at most {} characters",
            label, max_chars
        ));
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err("Email is not a valid email address".to_string());
    }

    Ok(())
}

pub fn validate_phone_number(phone_number: Option<&str>) -> Result<(), String> {
    match phone_number {
        Some(phone) if phone.chars().count() > PHONE_NUMBER_MAX_CHARS => Err(format!(
            "Phone number must be at most {} characters",
            PHONE_NUMBER_MAX_CHARS
        )),
        _ => Ok(()),
    }
}

pub fn validate_feedback(customer_name: &str, comments: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.check(
        "CustomerName",
        validate_required_text(customer_name, "Customer name", CUSTOMER_NAME_MAX_CHARS),
    );
    errors.check(
        "Comments",
        validate_required_text(comments, "Comments", COMMENTS_MAX_CHARS),
    );
    errors.finish()
}

pub fn validate_user(
    name: &str,
    email: &str,
    phone_number: Option<&str>,
    role: &str,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.check("Name", validate_required_text(name, "Name", USER_NAME_MAX_CHARS));
    errors.check("Email", validate_email(email));
    errors.check("PhoneNumber", validate_phone_number(phone_number));
    if role.trim().is_empty() {
        errors.add("Role", "Role is required");
    }
    errors.finish()
}
