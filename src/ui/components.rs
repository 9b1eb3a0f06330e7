//! UI Components module - screen-specific composite components
//!
//! Components combine widgets with the demo's messages and state. They are
//! the only UI layer that imports from `crate::app`.

pub mod animation_list;
pub mod demo_stage;
