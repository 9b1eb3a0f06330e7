//! UI module for the animators demo
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): presentational pieces without demo logic
//! - **Components** (`components`): screen pieces wired to `Message`
//! - **Animation** (`animation`): the animator and highlight transitions

pub mod animation;
pub mod components;
pub mod theme;
pub mod widgets;
