//! Small browser-side utilities.

pub mod theme;
