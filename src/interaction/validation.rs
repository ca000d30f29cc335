//! Contact form rules
//!
//! Pure checks behind the character counter and the submit handler.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// `local@domain.tld` with no whitespace or extra `@`
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Anything outside the characters allowed in both fields
static ILLEGAL_CHARACTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9@._-]").expect("character class is valid"));

/// Emphasis color of the counter once the message is over the limit
pub const OVER_LIMIT_COLOR: &str = "darkred";

/// Email field problems
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email address")]
    Invalid,
}

/// Message field problems, in the order they are checked
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageError {
    #[error("Please enter the message you wish to submit")]
    Empty,

    #[error("Message too long")]
    TooLong,

    #[error("Your message contains illegal characters")]
    IllegalCharacters,
}

/// Whether `text` contains a character outside `[a-zA-Z0-9@._-]`
pub fn has_illegal_characters(text: &str) -> bool {
    ILLEGAL_CHARACTER.is_match(text)
}

pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() || !EMAIL_SHAPE.is_match(email) || has_illegal_characters(email) {
        return Err(EmailError::Invalid);
    }
    Ok(())
}

pub fn validate_message(message: &str, limit: usize) -> Result<(), MessageError> {
    if message.is_empty() {
        Err(MessageError::Empty)
    } else if message_length(message) > limit {
        Err(MessageError::TooLong)
    } else if has_illegal_characters(message) {
        Err(MessageError::IllegalCharacters)
    } else {
        Ok(())
    }
}

/// Length as the browser reports it, in UTF-16 code units
pub fn message_length(message: &str) -> usize {
    message.encode_utf16().count()
}

/// Counter label, e.g. `Characters: 12/300`
pub fn counter_label(length: usize, limit: usize) -> String {
    format!("Characters: {}/{}", length, limit)
}

/// Counter color for a message length; empty means the default color
pub fn counter_color(length: usize, limit: usize) -> &'static str {
    if length > limit {
        OVER_LIMIT_COLOR
    } else {
        ""
    }
}

/// Outcome of validating both contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormReport {
    pub email: Result<(), EmailError>,
    pub message: Result<(), MessageError>,
}

impl FormReport {
    /// Validate both fields; neither check short-circuits the other
    pub fn check(email: &str, message: &str, limit: usize) -> Self {
        Self {
            email: validate_email(email),
            message: validate_message(message, limit),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.email.is_ok() && self.message.is_ok()
    }

    /// Text for the email error label; empty when valid
    pub fn email_text(&self) -> String {
        self.email.err().map(|e| e.to_string()).unwrap_or_default()
    }

    /// Text for the message error label; empty when valid
    pub fn message_text(&self) -> String {
        self.message.err().map(|e| e.to_string()).unwrap_or_default()
    }
}
