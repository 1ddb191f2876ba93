use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{PropertyId, UserId};

/// A row of `reservations`: a guest's stay at a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: PropertyId,
    pub guest_id: UserId,
}

impl Reservation {
    /// Number of nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nights() {
        let reservation = Reservation {
            id: 1,
            start_date: NaiveDate::from_ymd_opt(2018, 9, 11).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2018, 9, 26).unwrap(),
            property_id: PropertyId::new(1),
            guest_id: UserId::new(1),
        };

        assert_eq!(reservation.nights(), 15);
    }
}
