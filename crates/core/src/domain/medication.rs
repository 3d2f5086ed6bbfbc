//! Medications owned by a patient record.

use serde::{Deserialize, Serialize};

use crate::constants::REFILL_RESET_DAYS;

/// A prescribed medication, owned exclusively by one patient.
///
/// `remaining_supply` counts days of stock; there is no consumption
/// model elsewhere, so the figure only changes through a refill
/// check-in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    /// Days of supply remaining.
    pub remaining_supply: u32,
    /// Whether remaining supply has crossed the reorder threshold.
    pub refill_due: bool,
    pub instructions: String,
    pub price: f64,
}

impl Medication {
    /// Records a refill pickup: supply resets to the fixed
    /// [`REFILL_RESET_DAYS`] and the refill flag clears.
    pub fn check_in_refill(&mut self) {
        self.remaining_supply = REFILL_RESET_DAYS;
        self.refill_due = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refill_check_in_resets_supply_and_flag() {
        let mut med = Medication {
            id: "M2".to_string(),
            name: "Amlodipine".to_string(),
            dosage: "5mg".to_string(),
            frequency: "Daily".to_string(),
            remaining_supply: 5,
            refill_due: true,
            instructions: "Take before bed".to_string(),
            price: 30.0,
        };

        med.check_in_refill();

        assert_eq!(med.remaining_supply, 30);
        assert!(!med.refill_due);
    }
}
