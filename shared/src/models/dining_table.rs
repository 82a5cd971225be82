//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table with its booking state for one date/meal slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub reserved: bool,
}

/// Whether a party can book a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAvailability {
    Available,
    /// Already booked for the slot
    Reserved,
    /// Party is larger than the table
    TooSmall,
}

impl TableAvailability {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Book",
            Self::Reserved => "Full",
            Self::TooSmall => "Too small",
        }
    }

    pub fn is_bookable(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl DiningTable {
    /// A reserved table is unavailable regardless of its size.
    pub fn availability(&self, guests: u32) -> TableAvailability {
        if self.reserved {
            TableAvailability::Reserved
        } else if guests > self.capacity {
            TableAvailability::TooSmall
        } else {
            TableAvailability::Available
        }
    }
}

/// True when there is at least one table and none is free
pub fn all_reserved(tables: &[DiningTable]) -> bool {
    !tables.is_empty() && tables.iter().all(|t| t.reserved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: i64, capacity: u32, reserved: bool) -> DiningTable {
        DiningTable {
            id,
            location: "Window".into(),
            capacity,
            reserved,
        }
    }

    #[test]
    fn test_availability_labels() {
        assert_eq!(table(1, 4, false).availability(4), TableAvailability::Available);
        assert_eq!(table(1, 2, false).availability(3), TableAvailability::TooSmall);
        assert_eq!(table(1, 6, true).availability(2), TableAvailability::Reserved);
        // Reserved takes precedence over the size check
        assert_eq!(table(1, 2, true).availability(6), TableAvailability::Reserved);

        assert!(TableAvailability::Available.is_bookable());
        assert!(!TableAvailability::TooSmall.is_bookable());
        assert!(!TableAvailability::Reserved.is_bookable());
    }

    #[test]
    fn test_all_reserved() {
        assert!(!all_reserved(&[]));
        assert!(!all_reserved(&[table(1, 2, true), table(2, 4, false)]));
        assert!(all_reserved(&[table(1, 2, true), table(2, 4, true)]));
    }

    #[test]
    fn test_reserved_defaults_to_false() {
        let t: DiningTable =
            serde_json::from_str(r#"{"id":1,"location":"Room","capacity":6}"#).unwrap();
        assert!(!t.reserved);
    }
}
