pub mod bounds;
pub mod coerce;
pub mod entry;
