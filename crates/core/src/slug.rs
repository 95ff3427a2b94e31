//! Company code derivation.
//!
//! A company's primary key is derived from its display name: lowercased,
//! with every character that is not an ASCII letter or digit removed.
//! Accented letters are dropped rather than transliterated.

/// Derive the company `code` for a display `name`.
///
/// # Examples
///
/// ```
/// use biztime_core::slug::company_code;
///
/// assert_eq!(company_code("IXL"), "ixl");
/// assert_eq!(company_code("TeleoSpace"), "teleospace");
/// assert_eq!(company_code("Apple Computer, Inc."), "applecomputerinc");
/// ```
pub fn company_code(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
