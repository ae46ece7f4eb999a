pub mod booking;
pub mod day_category;
pub mod raw_row;

pub use booking::BookingRecord;
pub use day_category::DayCategory;
pub use raw_row::RawRow;
