//! High-level service facade.
//!
//! Wires the backend client, requirement store, map sync, house feed, and
//! selection coordinator into the handful of verbs a presentation layer
//! calls.

mod facade;

pub use facade::ScoutService;
