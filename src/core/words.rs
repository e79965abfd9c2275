//! Amount-in-words in the Indian numbering system.
//!
//! Amounts are grouped as Crore (10^7), Lakh (10^5), Thousand (10^3) and a
//! final 0–999 remainder, e.g. 1,23,45,678 is "One Crore Twenty Three Lakh
//! Forty Five Thousand Six Hundred Seventy Eight".

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Currency prefix of every non-zero phrase.
pub const CURRENCY_PREFIX: &str = "Rupees - ";

/// Phrase returned for a zero amount.
pub const ZERO_WORDS: &str = "Zero Only";

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u128 = 10_000_000;
const LAKH: u128 = 100_000;
const THOUSAND: u128 = 1_000;

/// Whole rupees and paise of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountParts {
    pub rupees: u128,
    /// `round(fraction * 100)`; may be 100 when the fraction is ≥ 0.995.
    pub paise: u32,
}

/// Split a non-negative amount into rupees and paise.
/// Negative amounts are treated as zero.
pub fn split_amount(amount: Decimal) -> AmountParts {
    let amount = if amount.is_sign_negative() {
        Decimal::ZERO
    } else {
        amount
    };
    let whole = amount.trunc();
    let paise = ((amount - whole) * dec!(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0);
    AmountParts {
        rupees: whole.to_u128().unwrap_or(0),
        paise,
    }
}

/// Render an amount as an English phrase, e.g.
/// `"Rupees - One Lakh Eighteen Thousand Only"`.
///
/// Paise are not rendered: 118000.50 reads the same as 118000.
///
/// ```
/// use gst_invoice::core::amount_to_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(amount_to_words(dec!(0)), "Zero Only");
/// assert_eq!(amount_to_words(dec!(118)), "Rupees - One Hundred Eighteen Only");
/// ```
pub fn amount_to_words(amount: Decimal) -> String {
    if amount.is_zero() || amount.is_sign_negative() {
        return ZERO_WORDS.to_string();
    }

    let AmountParts { rupees, .. } = split_amount(amount);

    let mut words = String::from(CURRENCY_PREFIX);
    words.push_str(&indian_words(rupees));
    format!("{} Only", words.trim())
}

/// Words for a whole number in Indian grouping, without prefix or suffix.
/// Returns an empty string for zero.
pub fn indian_words(n: u128) -> String {
    let mut parts: Vec<String> = Vec::new();

    let crores = n / CRORE;
    let mut rest = n % CRORE;
    if crores > 0 {
        // Counts above 999 crore are themselves grouped (e.g. "One Thousand Crore").
        parts.push(indian_words(crores));
        parts.push("Crore".to_string());
    }

    for (scale, name) in [(LAKH, "Lakh"), (THOUSAND, "Thousand")] {
        let count = rest / scale;
        rest %= scale;
        if count > 0 {
            parts.push(below_thousand(count as u16));
            parts.push(name.to_string());
        }
    }

    if rest > 0 {
        parts.push(below_thousand(rest as u16));
    }

    parts.join(" ")
}

/// Words for 1..=999. Zero yields an empty string.
fn below_thousand(n: u16) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let mut n = n as usize;

    if n >= 100 {
        parts.push(ONES[n / 100]);
        parts.push("Hundred");
        n %= 100;
    }

    if n >= 20 {
        parts.push(TENS[n / 10]);
        n %= 10;
        if n > 0 {
            parts.push(ONES[n]);
        }
    } else if n >= 10 {
        parts.push(TEENS[n - 10]);
    } else if n > 0 {
        parts.push(ONES[n]);
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks() {
        assert_eq!(below_thousand(0), "");
        assert_eq!(below_thousand(7), "Seven");
        assert_eq!(below_thousand(13), "Thirteen");
        assert_eq!(below_thousand(40), "Forty");
        assert_eq!(below_thousand(99), "Ninety Nine");
        assert_eq!(below_thousand(100), "One Hundred");
        assert_eq!(below_thousand(110), "One Hundred Ten");
        assert_eq!(below_thousand(999), "Nine Hundred Ninety Nine");
    }

    #[test]
    fn grouping() {
        assert_eq!(indian_words(1_000), "One Thousand");
        assert_eq!(indian_words(100_000), "One Lakh");
        assert_eq!(indian_words(10_000_000), "One Crore");
        assert_eq!(indian_words(10_000_001), "One Crore One");
        assert_eq!(
            indian_words(12_345_678),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight"
        );
    }

    #[test]
    fn large_crore_counts_are_grouped() {
        assert_eq!(indian_words(10_000 * CRORE), "Ten Thousand Crore");
        assert_eq!(indian_words(1_00_000 * CRORE), "One Lakh Crore");
    }

    #[test]
    fn split_parts() {
        assert_eq!(
            split_amount(dec!(1234567.89)),
            AmountParts {
                rupees: 1_234_567,
                paise: 89
            }
        );
        assert_eq!(split_amount(dec!(10.005)).paise, 1);
        assert_eq!(split_amount(dec!(-5)).rupees, 0);
    }

    #[test]
    fn paise_not_rendered() {
        assert_eq!(amount_to_words(dec!(5.75)), amount_to_words(dec!(5)));
    }

    #[test]
    fn below_one_rupee() {
        assert_eq!(amount_to_words(dec!(0.40)), "Rupees - Only");
    }
}
