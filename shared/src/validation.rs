//! Form field validation
//!
//! Rules applied while the user types. The backend re-checks everything; these
//! only exist so obviously malformed input never leaves the client.

use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Hangul syllables, ASCII letters and whitespace
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[가-힣a-zA-Z\s]+$").expect("name pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,11}$").expect("phone pattern"));
static CARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{16}$").expect("card pattern"));

/// Card numbers are cut off at this many characters while typing
pub const CARD_MAX_LEN: usize = 16;

/// How far ahead a table can be booked
pub const BOOKING_WINDOW_DAYS: u64 = 30;

/// Field-level validation failure, rendered under the offending input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Letters only (Hangul/English)")]
    InvalidName,

    #[error("10-11 digits")]
    InvalidPhone,

    #[error("16 digits")]
    InvalidCard,

    #[error("Past dates cannot be booked")]
    DateInPast,

    #[error("Only tables within one month can be booked")]
    DateTooFar,
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidName)
    }
}

pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone)
    }
}

pub fn validate_card(value: &str) -> Result<(), FieldError> {
    if CARD_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidCard)
    }
}

/// Keep only ASCII digits (`010-1234-5678` -> `01012345678`)
pub fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Digits of a card number, truncated to [`CARD_MAX_LEN`]
pub fn card_digits(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(CARD_MAX_LEN)
        .collect()
}

/// Dates from `today` up to [`BOOKING_WINDOW_DAYS`] ahead are bookable
pub fn validate_booking_date(date: NaiveDate, today: NaiveDate) -> Result<(), FieldError> {
    if date < today {
        return Err(FieldError::DateInPast);
    }
    match today.checked_add_days(Days::new(BOOKING_WINDOW_DAYS)) {
        Some(last) if date > last => Err(FieldError::DateTooFar),
        _ => Ok(()),
    }
}

/// Party size, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GuestCount(u32);

impl GuestCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 6;

    /// Clamp `value` into range
    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Step up or down, saturating at the bounds
    pub fn adjust(&mut self, diff: i32) {
        let next = (self.0 as i64 + diff as i64).clamp(Self::MIN as i64, Self::MAX as i64);
        self.0 = next as u32;
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(2)
    }
}
