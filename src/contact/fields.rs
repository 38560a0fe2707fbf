use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

const MIN_MESSAGE_CHARS: usize = 10;

/// Trims whitespace and byte order marks, the set a browser's
/// `String.prototype.trim` removes; `str::trim` keeps U+FEFF.
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Value used for the input's `name` and `id` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Runs every rule against the current values. Each field is checked
    /// independently, so one failure never hides another.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if trim_input(&self.name).is_empty() {
            errors.insert(Field::Name, FieldError::NameRequired);
        }

        // emptiness is checked untrimmed; whitespace-only falls through to the pattern
        if self.email.is_empty() {
            errors.insert(Field::Email, FieldError::EmailRequired);
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.insert(Field::Email, FieldError::EmailInvalid);
        }

        // length counts scalar values, not UTF-16 units: "😀😀😀😀😀" is 5 here
        // where a browser length check would see 10
        let message = trim_input(&self.message);
        if message.is_empty() {
            errors.insert(Field::Message, FieldError::MessageRequired);
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.insert(Field::Message, FieldError::MessageTooShort);
        }

        errors
    }
}

/// Per-field validation failures. A field that passed has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Display text for the field's error, if it has one.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub(crate) fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub(crate) fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, message: &str) -> FormFields {
        FormFields {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = FormFields::default().validate();

        assert!(!errors.is_valid());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.message(Field::Name).as_deref(), Some("Name is required"));
        assert_eq!(errors.message(Field::Email).as_deref(), Some("Email is required"));
        assert_eq!(
            errors.message(Field::Message).as_deref(),
            Some("Message is required")
        );
    }

    #[test]
    fn test_bad_email_and_short_message() {
        let errors = fields("Ada", "ada@x", "short").validate();

        assert!(!errors.is_valid());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.get(Field::Email), Some(FieldError::EmailInvalid));
        assert_eq!(
            errors.message(Field::Message).as_deref(),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_valid_form() {
        let errors = fields("Ada", "ada@example.com", "This is a long enough message.").validate();

        assert!(errors.is_valid());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_whitespace_handling() {
        // name and message are trimmed, email is not
        let errors = fields("   ", "   ", "   hi there   ").validate();
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(Field::Email), Some(FieldError::EmailInvalid));
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageTooShort));

        let errors = fields("Ada", "ada@example.com", "  \n\t  ").validate();
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageRequired));
    }

    #[test]
    fn test_message_length_counts_characters() {
        let errors = fields("Ada", "ada@example.com", "ééééééééé").validate();
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageTooShort));

        let errors = fields("Ada", "ada@example.com", "éééééééééé").validate();
        assert!(errors.is_valid());

        // astral characters count once each
        let errors = fields("Ada", "ada@example.com", "😀😀😀😀😀").validate();
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageTooShort));
        let errors = fields("Ada", "ada@example.com", "😀😀😀😀😀😀😀😀😀😀").validate();
        assert!(errors.is_valid());
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let errors = fields("\u{feff}", "ada@example.com", "\u{feff} \u{feff}").validate();
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageRequired));

        let errors = fields("\u{feff}Ada", "ada@example.com", "\u{feff}123456789\u{feff}").validate();
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.get(Field::Message), Some(FieldError::MessageTooShort));
    }

    #[test]
    fn test_email_pattern() {
        let check = |email: &str| fields("Ada", email, "long enough message").validate();

        assert!(check("a@b.c").is_valid());
        assert!(check("first.last@sub.example.org").is_valid());
        // unanchored search, as long as some run matches
        assert!(check("Ada <ada@example.com>").is_valid());

        for bad in ["ada", "ada@", "@example.com", "ada@example", "ada@.com", "ada @example.com"] {
            assert_eq!(
                check(bad).get(Field::Email),
                Some(FieldError::EmailInvalid),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_set_and_get_fields() {
        let mut f = FormFields::default();
        for field in Field::ALL {
            f.set(field, field.as_str().to_uppercase());
        }
        assert_eq!(f.get(Field::Name), "NAME");
        assert_eq!(f.get(Field::Email), "EMAIL");
        assert_eq!(f.get(Field::Message), "MESSAGE");
    }
}
