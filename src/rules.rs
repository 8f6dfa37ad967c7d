use crate::error::RuleError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Validation rule for one country: the expected total IBAN length and
/// a structural pattern for the BBAN portion.
///
/// The pattern is anchored at compile time, so it always matches the
/// entire BBAN and never an embedded substring. Rules are immutable
/// once built.
#[derive(Debug, Clone)]
pub struct CountryRule {
    country_code: String,
    total_length: usize,
    bban_pattern: Regex,
}

impl CountryRule {
    /// Build a rule for `country_code` from a total length and a BBAN
    /// pattern.
    ///
    /// # Arguments
    ///
    /// * `country_code` - The 2-letter uppercase ISO country code key
    /// * `total_length` - Expected length of the full canonical IBAN
    /// * `bban_pattern` - Regex over the BBAN substring; anchored here
    ///
    /// # Returns
    ///
    /// * `Result<CountryRule, RuleError>` - A rule, or a configuration
    ///   error if the key or pattern is malformed
    pub fn new(
        country_code: &str,
        total_length: usize,
        bban_pattern: &str,
    ) -> Result<Self, RuleError> {
        if country_code.len() != 2 || !country_code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(RuleError::InvalidCountryCode(country_code.to_string()));
        }

        let bban_pattern =
            Regex::new(&format!("^(?:{})$", bban_pattern)).map_err(|source| {
                RuleError::InvalidPattern {
                    country: country_code.to_string(),
                    source,
                }
            })?;

        Ok(Self {
            country_code: country_code.to_string(),
            total_length,
            bban_pattern,
        })
    }

    /// Get the 2-letter country code key
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Get the expected total IBAN length
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Match the BBAN substring against the structural pattern.
    /// Full match only; partial or embedded matches do not count.
    pub fn matches_bban(&self, bban: &str) -> bool {
        self.bban_pattern.is_match(bban)
    }
}

/// Repository of per-country IBAN rules.
///
/// The repository is read-only after construction and safe to share
/// across threads. The bundled set covers every country with a
/// published IBAN structure; a custom set can be injected through
/// [`IbanRules::new`] to test the pipeline in isolation.
#[derive(Debug, Clone)]
pub struct IbanRules {
    rules: HashMap<String, CountryRule>,
}

impl IbanRules {
    /// Build a repository from an explicit set of rules
    pub fn new(rules: impl IntoIterator<Item = CountryRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|rule| (rule.country_code.clone(), rule))
                .collect(),
        }
    }

    /// Get the bundled registry rules, compiled once per process
    pub fn bundled() -> &'static IbanRules {
        static BUNDLED_RULES: Lazy<IbanRules> = Lazy::new(|| {
            IbanRules::new(BUNDLED.iter().map(|&(country, length, pattern)| {
                CountryRule::new(country, length, pattern)
                    .expect("Failed to compile bundled IBAN rule")
            }))
        });
        &BUNDLED_RULES
    }

    /// Look up the rule for a 2-letter country code
    pub fn lookup(&self, country_code: &str) -> Option<&CountryRule> {
        self.rules.get(country_code)
    }

    /// Number of countries covered by this rule set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule set is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for IbanRules {
    fn default() -> Self {
        Self::bundled().clone()
    }
}

/// Published IBAN registry: country code, total length, BBAN structure.
/// Each BBAN structure is a sequence of fixed-width digit, letter, or
/// alphanumeric runs over the portion after the check digits.
const BUNDLED: &[(&str, usize, &str)] = &[
    ("AD", 24, "[0-9]{8}[A-Z0-9]{12}"),
    ("AE", 23, "[0-9]{19}"),
    ("AL", 28, "[0-9]{8}[A-Z0-9]{16}"),
    ("AT", 20, "[0-9]{16}"),
    ("AZ", 28, "[A-Z]{4}[A-Z0-9]{20}"),
    ("BA", 20, "[0-9]{16}"),
    ("BE", 16, "[0-9]{12}"),
    ("BG", 22, "[A-Z]{4}[0-9]{6}[A-Z0-9]{8}"),
    ("BH", 22, "[A-Z]{4}[A-Z0-9]{14}"),
    ("BR", 29, "[0-9]{23}[A-Z]{1}[A-Z0-9]{1}"),
    ("BY", 28, "[A-Z0-9]{4}[0-9]{4}[A-Z0-9]{16}"),
    ("CH", 21, "[0-9]{5}[A-Z0-9]{12}"),
    ("CR", 22, "[0-9]{18}"),
    ("CY", 28, "[0-9]{8}[A-Z0-9]{16}"),
    ("CZ", 24, "[0-9]{20}"),
    ("DE", 22, "[0-9]{18}"),
    ("DK", 18, "[0-9]{14}"),
    ("DO", 28, "[A-Z0-9]{4}[0-9]{20}"),
    ("EE", 20, "[0-9]{16}"),
    ("EG", 29, "[0-9]{25}"),
    ("ES", 24, "[0-9]{20}"),
    ("FI", 18, "[0-9]{14}"),
    ("FO", 18, "[0-9]{14}"),
    ("FR", 27, "[0-9]{10}[A-Z0-9]{11}[0-9]{2}"),
    ("GB", 22, "[A-Z]{4}[0-9]{14}"),
    ("GE", 22, "[A-Z]{2}[0-9]{16}"),
    ("GI", 23, "[A-Z]{4}[A-Z0-9]{15}"),
    ("GL", 18, "[0-9]{14}"),
    ("GR", 27, "[0-9]{7}[A-Z0-9]{16}"),
    ("GT", 28, "[A-Z0-9]{24}"),
    ("HR", 21, "[0-9]{17}"),
    ("HU", 28, "[0-9]{24}"),
    ("IE", 22, "[A-Z]{4}[0-9]{14}"),
    ("IL", 23, "[0-9]{19}"),
    ("IQ", 23, "[A-Z]{4}[0-9]{15}"),
    ("IS", 26, "[0-9]{22}"),
    ("IT", 27, "[A-Z]{1}[0-9]{10}[A-Z0-9]{12}"),
    ("JO", 30, "[A-Z]{4}[0-9]{4}[A-Z0-9]{18}"),
    ("KW", 30, "[A-Z]{4}[A-Z0-9]{22}"),
    ("KZ", 20, "[0-9]{3}[A-Z0-9]{13}"),
    ("LB", 28, "[0-9]{4}[A-Z0-9]{20}"),
    ("LC", 32, "[A-Z]{4}[A-Z0-9]{24}"),
    ("LI", 21, "[0-9]{5}[A-Z0-9]{12}"),
    ("LT", 20, "[0-9]{16}"),
    ("LU", 20, "[0-9]{3}[A-Z0-9]{13}"),
    ("LV", 21, "[A-Z]{4}[A-Z0-9]{13}"),
    ("MC", 27, "[0-9]{10}[A-Z0-9]{11}[0-9]{2}"),
    ("MD", 24, "[A-Z0-9]{20}"),
    ("ME", 22, "[0-9]{18}"),
    ("MK", 19, "[0-9]{3}[A-Z0-9]{10}[0-9]{2}"),
    ("MR", 27, "[0-9]{23}"),
    ("MT", 31, "[A-Z]{4}[0-9]{5}[A-Z0-9]{18}"),
    ("MU", 30, "[A-Z]{4}[0-9]{19}[A-Z]{3}"),
    ("NL", 18, "[A-Z]{4}[0-9]{10}"),
    ("NO", 15, "[0-9]{11}"),
    ("PK", 24, "[A-Z]{4}[A-Z0-9]{16}"),
    ("PL", 28, "[0-9]{24}"),
    ("PS", 29, "[A-Z]{4}[A-Z0-9]{21}"),
    ("PT", 25, "[0-9]{21}"),
    ("QA", 29, "[A-Z]{4}[A-Z0-9]{21}"),
    ("RO", 24, "[A-Z]{4}[A-Z0-9]{16}"),
    ("RS", 22, "[0-9]{18}"),
    ("SA", 24, "[0-9]{2}[A-Z0-9]{18}"),
    ("SC", 31, "[A-Z]{4}[0-9]{20}[A-Z]{3}"),
    ("SE", 24, "[0-9]{20}"),
    ("SI", 19, "[0-9]{15}"),
    ("SK", 24, "[0-9]{20}"),
    ("SM", 27, "[A-Z]{1}[0-9]{10}[A-Z0-9]{12}"),
    ("ST", 25, "[0-9]{21}"),
    ("SV", 28, "[A-Z]{4}[0-9]{20}"),
    ("TL", 23, "[0-9]{19}"),
    ("TN", 24, "[0-9]{20}"),
    ("TR", 26, "[0-9]{5}[A-Z0-9]{17}"),
    ("UA", 29, "[0-9]{6}[A-Z0-9]{19}"),
    ("VA", 22, "[0-9]{18}"),
    ("VG", 24, "[A-Z]{4}[0-9]{16}"),
    ("XK", 20, "[0-9]{16}"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_lookup() {
        let rules = IbanRules::bundled();
        let gb = rules.lookup("GB").unwrap();
        assert_eq!(gb.country_code(), "GB");
        assert_eq!(gb.total_length(), 22);
        assert!(gb.matches_bban("WEST12345698765432"));
        assert!(!gb.matches_bban("12345698765432WEST"));
    }

    #[test]
    fn test_bundled_covers_published_lengths() {
        let rules = IbanRules::bundled();
        assert!(rules.len() >= 70);
        // Published IBAN lengths range from 15 (NO) to 34
        assert_eq!(rules.lookup("NO").unwrap().total_length(), 15);
        assert!(BUNDLED
            .iter()
            .all(|&(_, length, _)| (15..=34).contains(&length)));
    }

    #[test]
    fn test_unknown_country() {
        assert!(IbanRules::bundled().lookup("ZZ").is_none());
        assert!(IbanRules::bundled().lookup("").is_none());
    }

    #[test]
    fn test_custom_rule_set_replaces_bundled() {
        let rules = IbanRules::new([CountryRule::new("GB", 22, "[A-Z]{4}.*").unwrap()]);
        assert_eq!(rules.len(), 1);
        assert!(rules.lookup("GB").is_some());
        // Bundled-only countries are absent from the injected set
        assert!(rules.lookup("NO").is_none());
    }

    #[test]
    fn test_pattern_is_anchored() {
        let rule = CountryRule::new("GB", 22, "[A-Z]{4}").unwrap();
        assert!(rule.matches_bban("WEST"));
        // Embedded or partial matches must not count
        assert!(!rule.matches_bban("WEST1234"));
        assert!(!rule.matches_bban("1WEST"));
    }

    #[test]
    fn test_rejects_malformed_country_key() {
        assert!(matches!(
            CountryRule::new("gb", 22, "[0-9]+"),
            Err(RuleError::InvalidCountryCode(_))
        ));
        assert!(matches!(
            CountryRule::new("GBR", 22, "[0-9]+"),
            Err(RuleError::InvalidCountryCode(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_pattern() {
        assert!(matches!(
            CountryRule::new("GB", 22, "[0-9"),
            Err(RuleError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_default_is_bundled() {
        let rules = IbanRules::default();
        assert_eq!(rules.len(), IbanRules::bundled().len());
        assert!(rules.lookup("DE").is_some());
    }
}
