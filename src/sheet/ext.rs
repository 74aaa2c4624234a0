//! Attach a bottom sheet to any view
//!
//! Mirrors how other decorations are attached in the view layer: call a
//! method on the host view, get back a wrapped view.
//!
//! ```
//! use token_sheet::{Binding, Empty, SheetExt, SheetPosition};
//!
//! let position = Binding::new(SheetPosition::Relative(0.4));
//! let screen = "Document".bottom_sheet_titled(
//!     &position,
//!     [SheetPosition::Hidden, SheetPosition::Relative(0.4), SheetPosition::Full],
//!     Some("Details"),
//!     || None::<Empty>,
//!     || "Body",
//! );
//! assert_eq!(screen.header().map(|h| h.content.as_str()), Some("Details"));
//! ```

use crate::model::{Binding, SheetPosition, SwitchablePositions};
use crate::view::{StyledText, View};

use super::container::BottomSheet;

pub trait SheetExt: View + Sized {
    /// Attach a sheet with header, footer and main content from builders
    ///
    /// Each builder runs exactly once, in argument order, before this call
    /// returns. Header and footer builders may return `None`.
    fn bottom_sheet<H, F, M>(
        self,
        position: &Binding<SheetPosition>,
        switchable: impl Into<SwitchablePositions>,
        header: impl FnOnce() -> Option<H>,
        footer: impl FnOnce() -> Option<F>,
        main: impl FnOnce() -> M,
    ) -> BottomSheet<Self, H, F, M>
    where
        H: View,
        F: View,
        M: View,
    {
        let header = header();
        let footer = footer();
        let main = main();
        BottomSheet::new(self, position.clone(), switchable, header, footer, main)
    }

    /// Attach a sheet whose header is a plain title
    ///
    /// An absent footer stays absent and renders as empty content.
    fn bottom_sheet_titled<F, M>(
        self,
        position: &Binding<SheetPosition>,
        switchable: impl Into<SwitchablePositions>,
        title: Option<&str>,
        footer: impl FnOnce() -> Option<F>,
        main: impl FnOnce() -> M,
    ) -> BottomSheet<Self, StyledText, F, M>
    where
        F: View,
        M: View,
    {
        let footer = footer();
        let main = main();
        BottomSheet::titled(self, position.clone(), switchable, title, footer, main)
    }
}

impl<V: View> SheetExt for V {}
