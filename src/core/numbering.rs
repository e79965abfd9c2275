use chrono::{Datelike, NaiveDate};

use super::error::InvoiceError;

/// Quotation number sequence generator.
///
/// Generates numbers in the format `{prefix}{YY}{MM}-{sequential}`,
/// e.g. "QT-2406-001", "QT-2406-002", etc. The counter does not reset when
/// the month changes; only the `YYMM` stamp moves.
#[derive(Debug, Clone)]
pub struct QuotationNumberSequence {
    prefix: String,
    year: i32,
    month: u32,
    next_number: u64,
    zero_pad: usize,
}

/// Prefix of quotation numbers.
pub const QUOTATION_PREFIX: &str = "QT-";

impl QuotationNumberSequence {
    /// Create a sequence for the month of `date`, starting at 1.
    pub fn for_month(date: NaiveDate) -> Self {
        Self {
            prefix: QUOTATION_PREFIX.to_string(),
            year: date.year(),
            month: date.month(),
            next_number: 1,
            zero_pad: 3,
        }
    }

    /// Continue after the most recently issued number.
    ///
    /// The trailing digit run of `last` is the counter ("QT-2406-007" → 8
    /// next). When `last` has no trailing digits the sequence starts at 1.
    pub fn continuing_from(last: &str, date: NaiveDate) -> Self {
        let mut seq = Self::for_month(date);
        if let Some(n) = trailing_number(last) {
            seq.next_number = n.saturating_add(1);
        }
        tracing::debug!(last, next = seq.next_number, "continuing quotation sequence");
        seq
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next quotation number.
    pub fn next_number(&mut self) -> String {
        let number = self.peek();
        self.next_number = self.next_number.saturating_add(1);
        number
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}{:02}{:02}-{:0>width$}",
            self.prefix,
            self.year.rem_euclid(100),
            self.month,
            self.next_number,
            width = self.zero_pad
        )
    }

    /// Get the next counter value that will be issued.
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Move the `YYMM` stamp to the month of `date`.
    ///
    /// Moving backwards in time is rejected.
    pub fn advance_month(&mut self, date: NaiveDate) -> Result<(), InvoiceError> {
        let current = (self.year, self.month);
        let new = (date.year(), date.month());
        if new < current {
            return Err(InvoiceError::Numbering(format!(
                "{:04}-{:02} is before the current sequence month {:04}-{:02}",
                new.0, new.1, current.0, current.1
            )));
        }
        self.year = new.0;
        self.month = new.1;
        Ok(())
    }
}

/// Timestamp-based number used when the last issued number is unavailable.
pub fn fallback_number(timestamp_millis: i64) -> String {
    format!("{QUOTATION_PREFIX}{timestamp_millis}")
}

fn trailing_number(s: &str) -> Option<u64> {
    let digits = s.len() - s.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    // Longer digit runs than u64 holds saturate.
    Some(s[s.len() - digits..].parse().unwrap_or(u64::MAX))
}
