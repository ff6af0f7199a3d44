//! Form field validation
//!
//! Pure validation rules for the site's contact/application forms. The host
//! owns error rendering; this module only decides validity and the message.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone regex"));

/// Kind of input field, deciding which format rule applies.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

/// A field to validate: its kind, raw value, and whether it is required.
#[derive(Debug, Clone)]
pub struct FieldSpec<'a> {
    pub kind: FieldKind,
    pub value: &'a str,
    pub required: bool,
}

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldVerdict {
    Valid,
    Invalid { message: &'static str },
}

impl FieldVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldVerdict::Valid)
    }
}

/// Validate a single field.
///
/// Required-ness is checked against the trimmed value; format rules only
/// apply to non-empty values, so an optional empty email field is valid.
pub fn validate_field(field: &FieldSpec<'_>) -> FieldVerdict {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        return FieldVerdict::Invalid {
            message: "This field is required",
        };
    }

    if value.is_empty() {
        return FieldVerdict::Valid;
    }

    match field.kind {
        FieldKind::Text => FieldVerdict::Valid,
        FieldKind::Email => {
            if EMAIL_RE.is_match(value) {
                FieldVerdict::Valid
            } else {
                FieldVerdict::Invalid {
                    message: "Please enter a valid email address",
                }
            }
        }
        FieldKind::Phone => {
            // Formatting characters are insignificant for phone numbers.
            let digits: String = value
                .chars()
                .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
                .collect();
            if PHONE_RE.is_match(&digits) {
                FieldVerdict::Valid
            } else {
                FieldVerdict::Invalid {
                    message: "Please enter a valid phone number",
                }
            }
        }
    }
}

/// Validate a whole form; true only if every field passes.
pub fn validate_form(fields: &[FieldSpec<'_>]) -> bool {
    fields.iter().all(|f| validate_field(f).is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: FieldKind, value: &str, required: bool) -> FieldSpec<'_> {
        FieldSpec {
            kind,
            value,
            required,
        }
    }

    #[test]
    fn test_required_blank_is_invalid() {
        let verdict = validate_field(&field(FieldKind::Text, "   ", true));
        assert_eq!(
            verdict,
            FieldVerdict::Invalid {
                message: "This field is required"
            }
        );
    }

    #[test]
    fn test_optional_blank_is_valid() {
        assert!(validate_field(&field(FieldKind::Email, "", false)).is_valid());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_field(&field(FieldKind::Email, "a@b.co", true)).is_valid());
        assert!(!validate_field(&field(FieldKind::Email, "missing-at.example", true)).is_valid());
        assert!(!validate_field(&field(FieldKind::Email, "no@dot", true)).is_valid());
    }

    #[test]
    fn test_phone_accepts_formatted_numbers() {
        assert!(validate_field(&field(FieldKind::Phone, "+91 (80) 1234-5678", true)).is_valid());
        assert!(validate_field(&field(FieldKind::Phone, "9876543210", true)).is_valid());
    }

    #[test]
    fn test_phone_ignores_any_whitespace_kind() {
        assert!(validate_field(&field(FieldKind::Phone, "+91\t80 1234 5678", true)).is_valid());
        assert!(validate_field(&field(FieldKind::Phone, "98\u{a0}76543210", true)).is_valid());
    }

    #[test]
    fn test_phone_rejects_leading_zero_and_letters() {
        assert!(!validate_field(&field(FieldKind::Phone, "0123", true)).is_valid());
        assert!(!validate_field(&field(FieldKind::Phone, "call-me", true)).is_valid());
    }

    #[test]
    fn test_validate_form_all_or_nothing() {
        let ok = [
            field(FieldKind::Text, "Asha", true),
            field(FieldKind::Email, "asha@example.org", true),
        ];
        assert!(validate_form(&ok));

        let bad = [
            field(FieldKind::Text, "Asha", true),
            field(FieldKind::Email, "nope", true),
        ];
        assert!(!validate_form(&bad));
    }
}
