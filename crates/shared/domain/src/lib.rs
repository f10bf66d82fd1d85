//! # Domain Models
//!
//! This crate contains pure domain types with a minimal dependency (`serde`).
//! Keep it lean: no I/O, networking, or heavy logic—just data and simple helpers.

pub mod contract;
pub mod obligation;
