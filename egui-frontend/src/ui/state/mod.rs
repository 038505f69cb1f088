//! # State Module
//!
//! Widget-local state, kept apart from rendering so transitions can be
//! tested without a UI context.

pub mod picker_state;

pub use picker_state::{PickerEvent, PickerState, RangeChange, YearStep};
