//! ICS document generation and line folding.

pub mod fold;
pub mod generate;

pub use generate::build_calendar;
