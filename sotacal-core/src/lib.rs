//! Core types and transformation pipeline for the sotacal feed.
//!
//! This crate turns a sequence of SOTA activation alerts into an RFC 5545
//! calendar document. It performs no I/O: the server crate hands it
//! already-deserialized `Alert` records plus a generation instant, and gets
//! back the finished ICS text.

pub mod alert;
pub mod error;
pub mod event;
pub mod ics;
pub mod timefmt;
pub mod uid;
pub mod window;

pub use alert::Alert;
pub use error::{SotaCalError, SotaCalResult};
pub use event::CalendarEvent;
pub use ics::generate::build_calendar;
