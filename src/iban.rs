use crate::canonical::canonicalize;
use crate::error::ValidationError;
use crate::rules::IbanRules;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// International Bank Account Number candidate.
///
/// An IBAN is a string of the form:
/// `<country code><check digits><BBAN>`
///
/// - `country code`: 2-letter ISO 3166-1 alpha-2 code (e.g. "GB")
/// - `check digits`: 2 digits authenticated by the ISO 7064 mod-97-10
///   checksum
/// - `BBAN`: country-specific Basic Bank Account Number
///
/// Example: "GB82WEST12345698765432"
///
/// Construction never fails: the input is canonicalized (whitespace
/// stripped, upper-cased) and held as-is, so the component accessors
/// work even for codes that later fail validation. Validation itself is
/// an ordered, short-circuiting pipeline reporting at most one
/// [`ValidationError`] per call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban {
    raw: String,
    code: String,
}

impl Iban {
    /// Create an Iban from a raw candidate string in any mix of case
    /// and whitespace
    pub fn new(code: &str) -> Self {
        Self {
            raw: code.to_string(),
            code: canonicalize(code),
        }
    }

    /// Validate a candidate against the bundled country rules
    pub fn valid(code: &str) -> bool {
        Self::new(code).validation_errors().is_empty()
    }

    /// Validate a candidate against a caller-supplied rule set
    pub fn valid_with(code: &str, rules: &IbanRules) -> bool {
        Self::new(code).validation_errors_with(rules).is_empty()
    }

    /// Get the input exactly as given
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Get the canonical form: uppercase, whitespace removed
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the 2-letter country code (first two characters of the
    /// canonical form). Best-effort: empty when the code is too short.
    pub fn country_code(&self) -> &str {
        self.code.get(..2).unwrap_or("")
    }

    /// Get the check digits (characters 3-4), extracted even when they
    /// are invalid. Best-effort: empty when the code is too short.
    pub fn check_digits(&self) -> &str {
        self.code.get(2..4).unwrap_or("")
    }

    /// Get the BBAN, everything after the check digits.
    /// Best-effort: empty when the code is too short.
    pub fn bban(&self) -> &str {
        self.code.get(4..).unwrap_or("")
    }

    /// Run the validation pipeline against the bundled country rules
    ///
    /// # Returns
    ///
    /// * `Vec<ValidationError>` - Empty when the code is valid; the
    ///   single first-failed stage otherwise
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        self.validation_errors_with(IbanRules::bundled())
    }

    /// Run the validation pipeline against a caller-supplied rule set.
    ///
    /// Stages run strictly in order and stop at the first failure:
    /// character set, country lookup, length, BBAN format, check
    /// digits.
    pub fn validation_errors_with(&self, rules: &IbanRules) -> Vec<ValidationError> {
        match self.first_failure(rules) {
            Some(error) => vec![error],
            None => Vec::new(),
        }
    }

    fn first_failure(&self, rules: &IbanRules) -> Option<ValidationError> {
        if self.code.len() < 4 || !self.code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Some(ValidationError::BadChars);
        }

        let rule = match rules.lookup(self.country_code()) {
            Some(rule) => rule,
            None => return Some(ValidationError::UnknownCountryCode),
        };

        if self.code.len() != rule.total_length() {
            return Some(ValidationError::BadLength);
        }

        if !rule.matches_bban(self.bban()) {
            return Some(ValidationError::BadFormat);
        }

        if mod_97(&self.numerify()) != 1 {
            return Some(ValidationError::BadCheckDigits);
        }

        None
    }

    /// Get the rearranged, letter-expanded numeral the mod-97 check
    /// reduces: the first four characters move to the end, then every
    /// letter becomes its two-digit value (A=10 ... Z=35) while digits
    /// pass through unchanged.
    ///
    /// Defined independently of whether the checksum passes.
    pub fn numerify(&self) -> String {
        let chars: Vec<char> = self.code.chars().collect();
        let split = chars.len().min(4);

        let mut numeral = String::with_capacity(chars.len() * 2);
        for &c in chars[split..].iter().chain(chars[..split].iter()) {
            match c {
                'A'..='Z' => {
                    let value = c as u32 - 'A' as u32 + 10;
                    numeral.push_str(&value.to_string());
                }
                _ => numeral.push(c),
            }
        }
        numeral
    }

    /// Get the canonical code grouped in blocks of four separated by
    /// single spaces, e.g. "GB82 WEST 1234 5698 7654 32". The final
    /// group may be shorter; there is no trailing space.
    pub fn prettify(&self) -> String {
        let chars: Vec<char> = self.code.chars().collect();

        let mut pretty = String::with_capacity(chars.len() + chars.len() / 4);
        for (i, group) in chars.chunks(4).enumerate() {
            if i > 0 {
                pretty.push(' ');
            }
            pretty.extend(group);
        }
        pretty
    }
}

/// Reduce a numeral string modulo 97 one digit at a time. The expanded
/// numeral exceeds any fixed-width integer for most countries, so the
/// remainder is carried incrementally instead.
fn mod_97(numeral: &str) -> u32 {
    numeral
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u32, |remainder, digit| {
            (remainder * 10 + u32::from(digit - b'0')) % 97
        })
}

impl FromStr for Iban {
    type Err = ValidationError;

    /// Parse a string into a validated Iban against the bundled rules
    ///
    /// # Returns
    ///
    /// * `Result<Iban, ValidationError>` - The Iban, or the first
    ///   failed pipeline stage
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let iban = Iban::new(s);
        match iban.first_failure(IbanRules::bundled()) {
            Some(error) => Err(error),
            None => Ok(iban),
        }
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prettify())
    }
}

impl Serialize for Iban {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.code)
    }
}

impl<'de> Deserialize<'de> for Iban {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Iban::from_str(&s).map_err(serde::de::Error::custom)
    }
}
