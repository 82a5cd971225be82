//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal slot a table is booked for
///
/// Declaration order is the display order: lunch sorts before dinner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    #[default]
    Lunch,
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 2] = [MealTime::Lunch, MealTime::Dinner];

    /// Wire value (`lunch` / `dinner`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation entity as listed by `GET /reservations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub date: NaiveDate,
    pub time: MealTime,
    pub table_id: i64,
    pub guests: u32,
    /// Not every backend version includes the table details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl Reservation {
    /// Ordering key: nearest date first, lunch before dinner
    pub fn sort_key(&self) -> (NaiveDate, MealTime) {
        (self.date, self.time)
    }
}

/// Sort reservations so the nearest one comes first
pub fn sort_reservations(reservations: &mut [Reservation]) {
    reservations.sort_by_key(Reservation::sort_key);
}

/// Create reservation payload (`POST /reservations`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub table_id: i64,
    pub date: NaiveDate,
    pub time: MealTime,
    pub name: String,
    pub phone: String,
    pub credit_card: String,
    pub guests: u32,
}
