use crate::canonical::canonicalize;
use crate::countries;
use crate::error::BicError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Anchored ISO 9362 grammar over the canonical form. The match must
/// consume the entire input: a valid BIC embedded in a longer string is
/// not a valid BIC.
static BIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]{4})([A-Z]{2})([A-Z0-9]{2})([A-Z0-9]{3})?$")
        .expect("Failed to compile BIC_REGEX")
});

/// Business Identifier Code (SWIFT code).
///
/// A BIC is a string of the form:
/// `<bank code><country code><location code>[<branch code>]`
///
/// - `bank code`: 4 letters
/// - `country code`: 2 letters, must be an assigned ISO 3166-1 alpha-2
///   code
/// - `location code`: 2 alphanumeric characters
/// - `branch code`: optional 3 alphanumeric characters
///
/// Example: "UNCRIT2B912" (bank UNCR, country IT, location 2B,
/// branch 912)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bic {
    bank_code: String,
    country_code: String,
    location_code: String,
    branch_code: Option<String>,
}

impl Bic {
    /// Whether the canonicalized input is a well-formed BIC with a
    /// recognized country segment
    pub fn valid(code: &str) -> bool {
        code.parse::<Bic>().is_ok()
    }

    /// Get the 4-letter bank code
    pub fn bank_code(&self) -> &str {
        &self.bank_code
    }

    /// Get the 2-letter ISO country code
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Get the 2-character location code
    pub fn location_code(&self) -> &str {
        &self.location_code
    }

    /// Get the 3-character branch code, when present
    pub fn branch_code(&self) -> Option<&str> {
        self.branch_code.as_deref()
    }
}

impl FromStr for Bic {
    type Err = BicError;

    /// Parse a string into a Bic
    ///
    /// # Arguments
    ///
    /// * `s` - A candidate code in any mix of case and whitespace
    ///
    /// # Returns
    ///
    /// * `Result<Bic, BicError>` - A Bic or an error if validation
    ///   fails
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = canonicalize(s);

        let captures = BIC_REGEX
            .captures(&code)
            .ok_or_else(|| BicError::InvalidFormat(s.to_string()))?;

        let country_code = captures[2].to_string();
        if !countries::is_assigned(&country_code) {
            return Err(BicError::UnknownCountry(country_code));
        }

        Ok(Self {
            bank_code: captures[1].to_string(),
            country_code,
            location_code: captures[3].to_string(),
            branch_code: captures.get(4).map(|m| m.as_str().to_string()),
        })
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.bank_code,
            self.country_code,
            self.location_code,
            self.branch_code.as_deref().unwrap_or("")
        )
    }
}

impl Serialize for Bic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Bic::from_str(&s).map_err(serde::de::Error::custom)
    }
}
