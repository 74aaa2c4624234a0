//! Bottom sheet - multi-position overlay panel
//!
//! A bottom sheet is a panel anchored to the bottom edge of a host view that
//! rests at one of several snap positions (hidden, peek, half, full, ...).
//!
//! ## Architecture
//!
//! - `BottomSheet`: composes the host view and the sheet overlay into one
//!   tree (host below, sheet above). Holds no state of its own.
//! - `SheetExt`: attaches a sheet to any `View`, with content supplied by
//!   builder closures or as a plain title string.
//! - `SheetOverlay`: the interactive layer. It is the only thing allowed to
//!   write the position binding (indicator taps, drag release, dismiss).
//!
//! ## State
//!
//! The current position lives in a caller-owned `Binding<SheetPosition>`.
//! A `BottomSheet` is rebuilt on every composition pass, so nothing that
//! must survive a pass is stored in it.

mod container;
mod ext;
mod overlay;

pub use container::BottomSheet;
pub use ext::SheetExt;
pub use overlay::SheetOverlay;
