//! Reusable UI widgets - presentational pieces without demo logic
//!
//! Widgets must not import from `crate::app`; they take generic message
//! types and callbacks so the screen decides what a press means.

pub mod button;
pub mod tab_bar;

pub use button::ButtonStyle;
