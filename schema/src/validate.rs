//! Shape-level field rules shared by every form.
//!
//! DESIGN
//! ======
//! Rules only check shape (length, grammar, precision). Whether a referenced
//! id exists or an email is already registered is the API's business.
//! Lengths count Unicode scalar values, not bytes.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// A rule violation on one named field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every rule violation found on one payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError { field, message: message.into() });
    }

    /// Record `check`'s error, if any, against `field`.
    pub fn check(&mut self, field: &'static str, check: Result<(), String>) {
        if let Err(message) = check {
            self.push(field, message);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message recorded for `field`.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    /// `Ok(())` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

/// Require at least `min` characters.
///
/// # Errors
///
/// Returns the user-facing message when `value` is shorter.
pub fn min_chars(value: &str, min: usize) -> Result<(), String> {
    if value.chars().count() < min {
        return Err(format!("Must contain at least {min} character(s)"));
    }
    Ok(())
}

/// Require exactly `len` characters, of any class.
///
/// # Errors
///
/// Returns the user-facing message when the length differs.
pub fn exact_chars(value: &str, len: usize) -> Result<(), String> {
    if value.chars().count() != len {
        return Err(format!("Must contain exactly {len} character(s)"));
    }
    Ok(())
}

/// Require a syntactically valid email address.
///
/// # Errors
///
/// Returns `"Invalid email"` when the grammar does not match.
pub fn email(value: &str) -> Result<(), String> {
    if is_email(value) { Ok(()) } else { Err("Invalid email".to_owned()) }
}

/// Require an absolute URL (`scheme://host...`).
///
/// # Errors
///
/// Returns `"Invalid url"` when the shape does not match.
pub fn url(value: &str) -> Result<(), String> {
    if is_url(value) { Ok(()) } else { Err("Invalid url".to_owned()) }
}

/// Require a finite number with at most two decimal places.
///
/// # Errors
///
/// Returns the user-facing message when the value is rejected.
pub fn two_decimals(value: f64) -> Result<(), String> {
    if has_at_most_two_decimals(value) {
        Ok(())
    } else {
        Err("Must have at most 2 decimal places".to_owned())
    }
}

/// Parse a number typed into a form field.
///
/// # Errors
///
/// Returns `"Expected a number"` for blank or non-numeric input.
pub fn parse_number(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| "Expected a number".to_owned())
}

/// Local part, `@`, then dot-separated domain labels ending in an
/// alphabetic TLD of two or more letters.
#[must_use]
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let local_ok = !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'));
    if !local_ok {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };
    let hosts_ok = hosts.iter().all(|label| {
        label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    hosts_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// `scheme://` followed by a non-empty host with no whitespace.
#[must_use]
pub fn is_url(value: &str) -> bool {
    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };
    let scheme_ok = scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = host.rsplit('@').next().unwrap_or_default();
    scheme_ok && !host.is_empty() && !host.starts_with(':') && !value.chars().any(char::is_whitespace)
}

/// Fractional-remainder test on `|v| * 100`. The tolerance is a few ULPs of
/// the scaled value, so binary float noise (`0.07 * 100 == 7.000000000000001`)
/// still passes while any real third decimal fails at every magnitude.
#[must_use]
pub fn has_at_most_two_decimals(value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    let scaled = value.abs() * 100.0;
    let tolerance = scaled.max(1.0) * f64::EPSILON * 4.0;
    (scaled - scaled.round()).abs() <= tolerance
}

/// Trim and drop blank optional text.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
