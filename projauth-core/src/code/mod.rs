//! Rotating display code module
//!
//! Generates cosmetic numeric codes, tracks the regeneration countdown and
//! drives it from a once-per-second timer while a view is active.

pub mod generator;
pub mod rotating;
pub mod rotator;
