//! Terminal output formatting
//!
//! The rendering sink for scored guesses and the rest of the console text.

pub mod display;
pub mod formatters;

pub use display::{Console, Renderer};
