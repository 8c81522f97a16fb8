//! Display code generation
//!
//! Draws a uniform fraction, renders its decimal digits and cuts or pads
//! them to the requested length. This is a display gimmick, not an OTP
//! algorithm: there is no secret and no time input.

use crate::types::{CodeLength, DisplayCode};
use rand::Rng;

/// Generate a display code using the thread-local random source
pub fn generate(length: CodeLength) -> DisplayCode {
    generate_with(length, &mut rand::thread_rng())
}

/// Generate a display code from the given random source
///
/// Takes the first `length` digits after the decimal point of a fraction in
/// [0, 1). When the fraction has fewer digits, the result is left-padded with
/// zeros. The returned code always has exactly `length` digits.
pub fn generate_with<R: Rng + ?Sized>(length: CodeLength, rng: &mut R) -> DisplayCode {
    let fraction: f64 = rng.gen();
    digits_from_fraction(fraction, length)
}

/// Build a display code from the decimal rendering of `fraction`
pub(crate) fn digits_from_fraction(fraction: f64, length: CodeLength) -> DisplayCode {
    let width = length.get();

    // f64 Display is shortest round-trip and never uses exponent notation
    let rendered = fraction.to_string();
    let fractional = rendered
        .split_once('.')
        .map(|(_, digits)| digits)
        .unwrap_or("");

    let taken: String = fractional
        .chars()
        .filter(char::is_ascii_digit)
        .take(width)
        .collect();

    // Pad by hand: `format!` widths are limited to u16
    let mut digits = "0".repeat(width.saturating_sub(taken.len()));
    digits.push_str(&taken);
    DisplayCode::new(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_takes_leading_fraction_digits() {
        let code = digits_from_fraction(0.123456789, CodeLength::new(4));
        assert_eq!(code.as_str(), "1234");
    }

    #[test]
    fn test_short_fraction_is_left_padded() {
        let code = digits_from_fraction(0.5, CodeLength::new(6));
        assert_eq!(code.as_str(), "000005");
    }

    #[test]
    fn test_zero_fraction_is_all_zeros() {
        let code = digits_from_fraction(0.0, CodeLength::new(4));
        assert_eq!(code.as_str(), "0000");
    }

    #[test]
    fn test_tiny_fraction_keeps_leading_zeros() {
        let code = digits_from_fraction(0.0000001, CodeLength::new(8));
        assert_eq!(code.as_str(), "00000001");
    }

    #[test]
    fn test_length_beyond_available_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        let code = generate_with(CodeLength::new(40), &mut rng);
        assert_eq!(code.len(), 40);
        assert!(code.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_same_seed_same_code() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_with(CodeLength::new(10), &mut a),
            generate_with(CodeLength::new(10), &mut b)
        );
    }
}
