//! Declarative field validation and the formatter for its failures.
//!
//! A schema is an ordered list of [`FieldRules`]. [`check`] walks it, stops
//! each field at its first failing rule, and collects a [`FieldViolation`]
//! per failing field in schema order.

use std::fmt;
use std::net::Ipv4Addr;

use crate::error::RegistryError;

/// A single constraint a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty.
    Required,
    /// Value must be an IEEE 802 MAC-48, EUI-64 or 20-octet address.
    Mac,
    /// Value must be a dotted-decimal IPv4 address. IPv4-mapped IPv6 is rejected.
    Ipv4,
}

impl Rule {
    /// Tag used in rendered messages.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Mac => "mac",
            Self::Ipv4 => "ipv4",
        }
    }

    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::Mac => is_mac(value),
            Self::Ipv4 => value.parse::<Ipv4Addr>().is_ok(),
        }
    }
}

/// Rules attached to one named field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// One field that broke one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: Rule,
}

/// Ordered, non-empty set of field violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.0 {
            write!(
                f,
                "{} failed validation on {}. ",
                violation.field,
                violation.rule.tag()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate the values returned by `value_of` against `schema`.
///
/// A field for which `value_of` returns `None` is treated as empty.
///
/// # Errors
///
/// Returns [`ValidationErrors`] when at least one field fails.
pub fn check<'a>(
    schema: &[FieldRules],
    value_of: impl Fn(&str) -> Option<&'a str>,
) -> Result<(), ValidationErrors> {
    let violations: Vec<FieldViolation> = schema
        .iter()
        .filter_map(|entry| {
            let value = value_of(entry.field).unwrap_or_default();
            entry
                .rules
                .iter()
                .find(|rule| !rule.accepts(value))
                .map(|&rule| FieldViolation {
                    field: entry.field,
                    rule,
                })
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(violations))
    }
}

/// Collapse a validation failure into a single human-readable error.
///
/// Other errors pass through untouched, and no error stays no error.
#[must_use]
pub fn format_validation_errors(err: Option<RegistryError>) -> Option<RegistryError> {
    err.map(|err| match err {
        RegistryError::Validation(errors) => RegistryError::Invalid(errors.to_string()),
        other => other,
    })
}

fn is_mac(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 14 {
        return false;
    }
    match (bytes[2], bytes[4]) {
        (sep @ (b':' | b'-'), _) => hex_groups(bytes, sep, 2),
        (_, b'.') => hex_groups(bytes, b'.', 4),
        _ => false,
    }
}

fn hex_groups(bytes: &[u8], sep: u8, width: usize) -> bool {
    let stride = width + 1;
    if (bytes.len() + 1) % stride != 0 {
        return false;
    }
    let octets = (bytes.len() + 1) / stride * width / 2;
    if !matches!(octets, 6 | 8 | 20) {
        return false;
    }
    bytes
        .split(|&b| b == sep)
        .all(|group| group.len() == width && group.iter().all(u8::is_ascii_hexdigit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotFoundError;

    const SCHEMA: &[FieldRules] = &[
        FieldRules {
            field: "Name",
            rules: &[Rule::Required],
        },
        FieldRules {
            field: "Addr",
            rules: &[Rule::Required, Rule::Ipv4],
        },
    ];

    #[test]
    fn should_accept_common_mac_notations() {
        assert!(is_mac("00:11:22:33:44:55"));
        assert!(is_mac("00-11-22-33-44-55"));
        assert!(is_mac("0011.2233.4455"));
        assert!(is_mac("aa:BB:cc:DD:ee:FF"));
        assert!(is_mac("00:00:5e:00:53:01:ff:fe"));
        assert!(is_mac("0000.5e00.5301.fffe"));
    }

    #[test]
    fn should_reject_malformed_mac() {
        assert!(!is_mac(""));
        assert!(!is_mac("00:11:22:33:44"));
        assert!(!is_mac("00:11:22:33:44:5g"));
        assert!(!is_mac("00:11-22:33:44:55"));
        assert!(!is_mac("001122334455"));
        assert!(!is_mac("00:11:22:33:44:55:66"));
        assert!(!is_mac("0011.2233.44556"));
    }

    #[test]
    fn should_validate_ipv4_syntax() {
        assert!(Rule::Ipv4.accepts("192.168.0.1"));
        assert!(!Rule::Ipv4.accepts("192.168.0"));
        assert!(!Rule::Ipv4.accepts("256.1.1.1"));
        assert!(!Rule::Ipv4.accepts("::1"));
    }

    #[test]
    fn should_accept_only_dotted_decimal_ipv4() {
        assert!(!Rule::Ipv4.accepts("::ffff:192.168.0.1"));
        assert!(!Rule::Ipv4.accepts("192.168.000.1"));
        assert!(!Rule::Ipv4.accepts(" 192.168.0.1"));
    }

    #[test]
    fn should_stop_each_field_at_first_failing_rule() {
        let err = check(SCHEMA, |_| Some("")).unwrap_err();
        assert_eq!(
            err.violations(),
            &[
                FieldViolation {
                    field: "Name",
                    rule: Rule::Required
                },
                FieldViolation {
                    field: "Addr",
                    rule: Rule::Required
                },
            ]
        );
    }

    #[test]
    fn should_treat_unknown_field_as_empty() {
        let err = check(SCHEMA, |_| None).unwrap_err();
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn should_format_validation_errors_into_one_message() {
        let err = check(SCHEMA, |field| match field {
            "Name" => Some(""),
            _ => Some("10.0.0"),
        })
        .unwrap_err();

        let formatted = format_validation_errors(Some(err.into())).unwrap();
        assert!(matches!(formatted, RegistryError::Invalid(_)));
        assert_eq!(
            formatted.to_string(),
            "Name failed validation on required. Addr failed validation on ipv4. "
        );
    }

    #[test]
    fn should_return_other_errors_unchanged() {
        let err: RegistryError = NotFoundError {
            entity: "Central",
            id: "1".to_string(),
        }
        .into();
        let formatted = format_validation_errors(Some(err)).unwrap();
        assert!(matches!(formatted, RegistryError::NotFound(_)));

        let formatted =
            format_validation_errors(Some(RegistryError::Storage("generic error".into())));
        assert_eq!(formatted.unwrap().to_string(), "generic error");
    }

    #[test]
    fn should_return_none_when_no_error() {
        assert!(format_validation_errors(None).is_none());
    }
}
