//! Sheet state types
//!
//! The sheet owns no state of its own. Everything that must survive a
//! re-composition lives in a caller-owned [`Binding`], and the set of
//! allowed resting places is a plain [`SwitchablePositions`] value.

mod binding;
mod position;

pub use binding::{Binding, ReadBinding};
pub use position::{Extent, SheetPosition, SwitchablePositions};
