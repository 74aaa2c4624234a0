//! Host view + sheet overlay composition

use crate::config::SheetConfig;
use crate::model::{Binding, SheetPosition, SwitchablePositions};
use crate::view::{Node, StyledText, View};

use super::overlay::SheetOverlay;

/// A host view with a bottom sheet layered on top
///
/// Owns the host view and the slot contents by value for its own lifetime
/// and never mutates them. Composition reads the position through the
/// overlay's read-only handle; writes happen through [`SheetOverlay`].
///
/// `switchable` is passed through unchecked. An empty set, or one that does
/// not contain the bound position, is the overlay's problem to report.
#[derive(Debug, Clone)]
pub struct BottomSheet<V, H, F, M> {
    view: V,
    position: Binding<SheetPosition>,
    switchable: SwitchablePositions,
    header: Option<H>,
    footer: Option<F>,
    main: M,
    config: SheetConfig,
}

impl<V, H, F, M> BottomSheet<V, H, F, M> {
    /// Build a sheet from arbitrary header, footer and main content
    pub fn new(
        view: V,
        position: Binding<SheetPosition>,
        switchable: impl Into<SwitchablePositions>,
        header: Option<H>,
        footer: Option<F>,
        main: M,
    ) -> Self {
        Self {
            view,
            position,
            switchable: switchable.into(),
            header,
            footer,
            main,
            config: SheetConfig::default(),
        }
    }

    /// Replace the default display options
    pub fn with_config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn position(&self) -> &Binding<SheetPosition> {
        &self.position
    }

    pub fn switchable(&self) -> &SwitchablePositions {
        &self.switchable
    }

    pub fn header(&self) -> Option<&H> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&F> {
        self.footer.as_ref()
    }

    pub fn main(&self) -> &M {
        &self.main
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// The interactive layer, borrowing every slot unchanged
    pub fn overlay(&self) -> SheetOverlay<'_, H, F, M> {
        SheetOverlay::new(
            &self.position,
            self.header.as_ref(),
            self.footer.as_ref(),
            &self.main,
            &self.switchable,
            &self.config,
        )
    }
}

impl<V, F, M> BottomSheet<V, StyledText, F, M> {
    /// Build a sheet whose header is a plain title
    ///
    /// The title becomes bold, title-scale, single-line text. With no title
    /// the sheet has no header.
    pub fn titled(
        view: V,
        position: Binding<SheetPosition>,
        switchable: impl Into<SwitchablePositions>,
        title: Option<&str>,
        footer: Option<F>,
        main: M,
    ) -> Self {
        Self::new(
            view,
            position,
            switchable,
            title.map(StyledText::title),
            footer,
            main,
        )
    }
}

impl<V: View, H: View, F: View, M: View> View for BottomSheet<V, H, F, M> {
    fn node(&self) -> Node {
        let overlay = self.overlay();
        tracing::trace!(
            position = %overlay.position(),
            switchable = self.switchable.len(),
            has_header = self.header.is_some(),
            has_footer = self.footer.is_some(),
            "composing bottom sheet"
        );

        Node::ZStack {
            layers: vec![self.view.node(), overlay.node()],
        }
    }
}
