use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

use super::i18n::{EnglishTranslator, Translator};

pub const NAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 8;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref UPPERCASE_PATTERN: Regex = Regex::new(r"[A-Z]").unwrap();
    static ref DIGIT_PATTERN: Regex = Regex::new(r"[0-9]").unwrap();
    static ref SPECIAL_CHAR_PATTERN: Regex = Regex::new(r"[@$!%*?&]").unwrap();
}

// =============================================================================
// FIELDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Password,
}

impl FormField {
    /// Render order of the form.
    pub const ALL: [FormField; 4] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Password,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Key of the field's label in a [`Translator`].
    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Self::FirstName | Self::LastName => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("must be at least {min} characters")]
    TooShort { min: usize },

    #[error("invalid format")]
    InvalidFormat,

    #[error("missing uppercase letter")]
    MissingUppercase,

    #[error("missing digit")]
    MissingDigit,

    #[error("missing special character")]
    MissingSpecialChar,
}

impl ValidationError {
    /// Message shown beneath `field` in the form.
    pub fn message_for(&self, field: FormField) -> String {
        match (field, self) {
            (FormField::FirstName, Self::TooShort { min }) => {
                format!("First Name must be at least {} characters.", min)
            }
            (FormField::LastName, Self::TooShort { min }) => {
                format!("Last Name must be at least {} characters.", min)
            }
            (FormField::Email, _) => "Please enter a valid email address.".to_string(),
            (FormField::Password, Self::TooShort { min }) => {
                format!("Password must be at least {} characters long.", min)
            }
            (FormField::Password, Self::MissingUppercase) => {
                "Password must include at least one uppercase letter.".to_string()
            }
            (FormField::Password, Self::MissingDigit) => {
                "Password must include at least one number.".to_string()
            }
            (FormField::Password, Self::MissingSpecialChar) => {
                "Password must include at least one special character (@$!%*?&).".to_string()
            }
            (field, err) => format!(
                "{} {}.",
                EnglishTranslator.translate(field.translation_key()),
                err
            ),
        }
    }
}

/// Field-level errors of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: FormField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(|err| err.message_for(field))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, ValidationError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }
}

// =============================================================================
// RULES
// =============================================================================

type Rule = (fn(&str) -> bool, ValidationError);

/// Checked top to bottom once the length rule passes; the first miss wins.
pub const PASSWORD_RULES: &[Rule] = &[
    (has_uppercase, ValidationError::MissingUppercase),
    (has_digit, ValidationError::MissingDigit),
    (has_special_char, ValidationError::MissingSpecialChar),
];

fn has_uppercase(value: &str) -> bool {
    UPPERCASE_PATTERN.is_match(value)
}

fn has_digit(value: &str) -> bool {
    DIGIT_PATTERN.is_match(value)
}

fn has_special_char(value: &str) -> bool {
    SPECIAL_CHAR_PATTERN.is_match(value)
}

fn check_min_length(value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { min });
    }
    Ok(())
}

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    check_min_length(value, NAME_MIN_LENGTH)
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    check_min_length(value, PASSWORD_MIN_LENGTH)?;

    match PASSWORD_RULES.iter().find(|(passes, _)| !passes(value)) {
        Some((_, err)) => Err(*err),
        None => Ok(()),
    }
}

pub fn validate_field(field: FormField, value: &str) -> Result<(), ValidationError> {
    match field {
        FormField::FirstName | FormField::LastName => validate_name(value),
        FormField::Email => validate_email(value),
        FormField::Password => validate_password(value),
    }
}

/// Run every rule; `value_of` supplies the current text for each field.
pub fn validate_all<'a>(value_of: impl Fn(FormField) -> &'a str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in FormField::ALL {
        if let Err(err) = validate_field(field, value_of(field)) {
            errors.insert(field, err);
        }
    }
    errors
}
