//! Numeric helpers for curve pricing.
//!
//! This module provides finite-checked `f64` arithmetic, the geometric
//! ladder evaluators the engine is built on, and the floor-to-places
//! truncation applied to every quote output.

mod checked;
mod ladder;
mod rounding;

pub use checked::{checked_add, checked_div, checked_mul, checked_powf, ensure_finite};
pub use ladder::{integral_below_anchor, price_at_supply};
pub use rounding::floor_to_places;
