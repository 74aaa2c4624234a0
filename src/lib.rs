//! Token Sheet - multi-position bottom sheet overlay
//!
//! This crate provides a bottom sheet component for a small declarative
//! view layer, plus the CPU renderer used to preview it. The sheet's
//! position lives in a caller-owned binding; the component only composes.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod model;
pub mod render;
pub mod sheet;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use config::SheetConfig;
pub use error::SheetError;
pub use model::{Binding, ReadBinding, SheetPosition, SwitchablePositions};
pub use sheet::{BottomSheet, SheetExt, SheetOverlay};
pub use view::{Empty, Fill, Node, StyledText, VStack, View};
