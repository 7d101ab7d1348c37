//! Expiry classification
//!
//! Classification is a pure function of a record's `expires` text and the
//! reference date. Anything that cannot be verified as a future-or-today
//! date fails the gate.

use chrono::NaiveDate;

use crate::types::{AdvisoryException, Classification};

/// Accepted expiry format
pub const EXPIRY_FORMAT: &str = "%Y-%m-%d";

/// Parse an expiry string as a calendar date.
///
/// The year must be exactly four digits; month and day may have one or two.
/// Whitespace anywhere is rejected.
pub fn parse_expiry(text: &str) -> Option<NaiveDate> {
    let year = text.split('-').next().unwrap_or_default();
    if year.len() != 4
        || !year.bytes().all(|b| b.is_ascii_digit())
        || text.contains(char::is_whitespace)
    {
        return None;
    }
    NaiveDate::parse_from_str(text, EXPIRY_FORMAT).ok()
}

/// Classify one exception relative to `today`.
///
/// Precedence: missing expiry, then malformed date, then expired, else active.
pub fn classify(exception: &AdvisoryException, today: NaiveDate) -> Classification {
    let text = match exception.expires.as_deref() {
        None | Some("") => return Classification::MissingExpiry,
        Some(text) => text,
    };

    match parse_expiry(text) {
        None => Classification::InvalidDate,
        Some(expires) if expires < today => Classification::Expired { expires },
        Some(expires) => Classification::Active { expires },
    }
}
