//! Pure data records.

pub mod person;

pub use person::*;
