//! Text rendering of assembled content.

pub mod grid;
