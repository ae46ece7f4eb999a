use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DayCategory {
    Office,        // at least one timed booking without a type label
    HomeOffice,    // timed "mobiles arbeiten" booking, no office booking that day
    NoWork,        // untimed, unlabeled, violation-free booking
    Uncategorized, // none of the above
}

impl DayCategory {
    /// Short code used in the bookings table.
    pub fn code(&self) -> &str {
        match self {
            DayCategory::Office => "O",
            DayCategory::HomeOffice => "HO",
            DayCategory::NoWork => "F",
            DayCategory::Uncategorized => "?",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DayCategory::Office => "Office",
            DayCategory::HomeOffice => "Home office",
            DayCategory::NoWork => "No work",
            DayCategory::Uncategorized => "Uncategorized",
        }
    }

    /// Categories in resolution order: the first one a day belongs to wins.
    pub fn priority_order() -> [DayCategory; 4] {
        [
            DayCategory::Office,
            DayCategory::HomeOffice,
            DayCategory::NoWork,
            DayCategory::Uncategorized,
        ]
    }
}
