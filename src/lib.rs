/// IBAN and BIC validation, normalization and formatting.
///
/// This library validates the two international bank-identifier formats:
/// the International Bank Account Number (IBAN, ISO 13616) and the
/// Business Identifier Code (BIC/SWIFT code, ISO 9362).
///
/// IBAN validation runs an ordered, short-circuiting pipeline over the
/// canonical form of the input: character set, per-country rule lookup,
/// length, BBAN structure, and finally the ISO 7064 mod-97-10 checksum.
/// Country rules are plain data (length plus an anchored BBAN pattern),
/// bundled for every country with a published IBAN structure and
/// replaceable wholesale for testing.
///
/// ```
/// use iban_tools::{Bic, Iban};
///
/// assert!(Iban::valid("GB82 WEST 1234 5698 7654 32"));
/// assert!(Iban::new("NO9386011117947").validation_errors().is_empty());
/// assert_eq!(
///     Iban::new("gb82west12345698765432").prettify(),
///     "GB82 WEST 1234 5698 7654 32"
/// );
///
/// assert!(Bic::valid("ESSESESS"));
/// assert!(!Bic::valid("SWEDXXSS"));
/// ```
// Re-export main structs and functions
mod bic;
mod canonical;
mod countries;
pub mod error;
mod iban;
mod rules;

pub use bic::Bic;
pub use canonical::canonicalize;
pub use error::{BicError, RuleError, ValidationError};
pub use iban::Iban;
pub use rules::{CountryRule, IbanRules};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iban_smoke() {
        assert!(Iban::valid("DE89 3704 0044 0532 0130 00"));
        assert!(!Iban::valid("DE89 3704 0044 0532 0130 01"));
    }

    #[test]
    fn test_bic_smoke() {
        assert!(Bic::valid("DABASESX"));
        assert!(!Bic::valid("DABA"));
    }

    #[test]
    fn test_rule_injection_smoke() {
        let rules = IbanRules::new([CountryRule::new("GB", 22, "[A-Z]{4}.*").unwrap()]);
        assert!(Iban::valid_with("GB82WEST12345698765432", &rules));
        assert!(!Iban::valid_with("NO9386011117947", &rules));
    }
}
