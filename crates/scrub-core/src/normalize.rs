//! Phone-number canonicalization.
//!
//! Brazilian dialing habits put an optional country code (55) and a
//! two-digit area code (DDD) in front of the 8- or 9-digit subscriber
//! number, with free-form punctuation in between. Comparison therefore
//! happens on the last 9 digits only.

/// Maximum length of a normalized key: the subscriber number without
/// country/area prefix.
pub const MAX_KEY_DIGITS: usize = 9;

/// Canonicalize a phone-like value into a comparable key.
///
/// Strips every non-digit character, then keeps only the last
/// [`MAX_KEY_DIGITS`] digits when more remain. Values with 9 or fewer
/// digits pass through unchanged in digit form. Total and pure: any
/// input yields a key, and an input without digits (including the empty
/// string) yields the empty key.
///
/// Known quirk, kept on purpose: because every digit-free value maps to
/// `""`, an empty entry in the exclusion list matches every base row
/// whose key column holds no digits.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() > MAX_KEY_DIGITS {
        let cut = digits.len() - MAX_KEY_DIGITS;
        digits[cut..].to_string()
    } else {
        digits
    }
}
