/// Normalize a candidate code into its canonical form: all whitespace
/// removed and all letters upper-cased.
///
/// No character-set validation happens here; that is the first stage of
/// each validation pipeline. Canonicalization is idempotent.
pub fn canonicalize(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}
