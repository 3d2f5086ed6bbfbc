//! Validated value types shared across the Jemine dashboard workspace.
//!
//! These newtypes carry their invariants in the type: once constructed,
//! a value is known to be well-formed and callers don't re-validate.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing validated value types.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    /// The input text was empty or contained only whitespace.
    #[error("text cannot be empty")]
    EmptyText,
    /// The input was not a plausible email address.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    /// An adherence percentage outside 0-100.
    #[error("adherence rate must be between 0 and 100, got {0}")]
    AdherenceOutOfRange(i64),
    /// A survey rating outside the 1-5 scale.
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),
}

/// A string guaranteed to contain at least one non-whitespace character.
///
/// Input is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a `NonEmptyText`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::EmptyText`] if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, ValueError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValueError::EmptyText);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A minimally validated email address (`local@domain`).
///
/// This is shape validation only; no delivery checks are performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses an email address, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidEmail`] when the input lacks a single
    /// `@` separating non-empty local and domain parts, or when the domain
    /// has no dot.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, ValueError> {
        let trimmed = input.as_ref().trim();
        let invalid = || ValueError::InvalidEmail(trimmed.to_owned());

        let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(invalid());
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A medication adherence percentage in the closed range 0-100.
///
/// Displayed as `NN%`, matching the PHI report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AdherenceRate(u8);

impl AdherenceRate {
    /// Creates an adherence rate.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::AdherenceOutOfRange`] outside 0-100.
    pub fn new(percent: i64) -> Result<Self, ValueError> {
        if !(0..=100).contains(&percent) {
            return Err(ValueError::AdherenceOutOfRange(percent));
        }
        Ok(Self(percent as u8))
    }

    /// Creates an adherence rate, clamping out-of-range input into 0-100.
    ///
    /// Intended for trusted in-process data (seed records, computed
    /// averages); form input should go through [`AdherenceRate::new`].
    pub const fn clamped(percent: i64) -> Self {
        if percent < 0 {
            Self(0)
        } else if percent > 100 {
            Self(100)
        } else {
            Self(percent as u8)
        }
    }

    /// Full adherence, the default for newly created patients.
    pub const FULL: AdherenceRate = AdherenceRate(100);

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for AdherenceRate {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        AdherenceRate::new(value)
    }
}

impl From<AdherenceRate> for i64 {
    fn from(rate: AdherenceRate) -> i64 {
        i64::from(rate.0)
    }
}

impl std::fmt::Display for AdherenceRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A patient satisfaction rating on the 1-5 survey scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// Creates a rating.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::RatingOutOfRange`] outside 1-5.
    pub fn new(stars: i64) -> Result<Self, ValueError> {
        if !(1..=5).contains(&stars) {
            return Err(ValueError::RatingOutOfRange(stars));
        }
        Ok(Self(stars as u8))
    }

    /// Creates a rating, clamping out-of-range input into 1-5.
    ///
    /// Intended for trusted in-process data; form input should go through
    /// [`Rating::new`].
    pub const fn clamped(stars: i64) -> Self {
        if stars < 1 {
            Self(1)
        } else if stars > 5 {
            Self(5)
        } else {
            Self(stars as u8)
        }
    }

    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> i64 {
        i64::from(rating.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_and_rejects_blank() {
        let text = NonEmptyText::new("  Kwame Mensah  ").expect("valid text");
        assert_eq!(text.as_str(), "Kwame Mensah");
        assert!(matches!(
            NonEmptyText::new("   "),
            Err(ValueError::EmptyText)
        ));
    }

    #[test]
    fn email_address_requires_local_and_dotted_domain() {
        EmailAddress::parse("kwame.m@example.com").expect("valid email");
        for bad in ["", "no-at-sign", "@example.com", "user@", "user@nodot", "a b@example.com"] {
            assert!(
                EmailAddress::parse(bad).is_err(),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn adherence_rate_bounds() {
        assert_eq!(AdherenceRate::new(0).expect("zero is valid").percent(), 0);
        assert_eq!(AdherenceRate::FULL.percent(), 100);
        assert!(AdherenceRate::new(101).is_err());
        assert!(AdherenceRate::new(-1).is_err());
    }

    #[test]
    fn adherence_rate_displays_as_percent() {
        let rate = AdherenceRate::new(92).expect("valid rate");
        assert_eq!(rate.to_string(), "92%");
    }

    #[test]
    fn rating_bounds() {
        assert_eq!(Rating::new(5).expect("five stars").stars(), 5);
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
    }
}
