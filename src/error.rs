use thiserror::Error;

/// A single failed stage of the IBAN validation pipeline.
///
/// The pipeline is strictly ordered and short-circuiting, so a
/// validation call reports at most one of these; an empty error list
/// means the code is valid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The canonical code contains characters outside ASCII letters and
    /// digits, or is too short to hold a country code and check digits
    #[error("IBAN contains invalid characters")]
    BadChars,

    /// No rule exists for the 2-letter country prefix
    #[error("unknown IBAN country code")]
    UnknownCountryCode,

    /// The canonical length differs from the country rule's total length
    #[error("IBAN length does not match country rule")]
    BadLength,

    /// The BBAN does not match the country's structural pattern
    #[error("BBAN does not match country format")]
    BadFormat,

    /// The mod-97 checksum of the rearranged code is not 1
    #[error("IBAN check digits are invalid")]
    BadCheckDigits,
}

/// Error when building a country rule. These are configuration errors,
/// not validation outcomes: a malformed rule set is a caller bug.
#[derive(Error, Debug)]
pub enum RuleError {
    /// Error when the rule key is not a 2-letter uppercase country code
    #[error("invalid country code key: {0}")]
    InvalidCountryCode(String),

    /// Error when the BBAN pattern fails to compile
    #[error("invalid BBAN pattern for {country}: {source}")]
    InvalidPattern {
        country: String,
        #[source]
        source: regex::Error,
    },
}

/// Error when parsing a BIC.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BicError {
    /// Error when the canonical form does not match the BIC grammar
    #[error("invalid BIC format: {0}")]
    InvalidFormat(String),

    /// Error when the embedded country segment is not an assigned
    /// ISO 3166-1 alpha-2 code
    #[error("unknown BIC country code: {0}")]
    UnknownCountry(String),
}
