//! Interactive sheet layer
//!
//! The overlay turns the sheet's slots into a [`SheetNode`] and owns the
//! only code paths that write the position binding. Every read goes through
//! a [`ReadBinding`]; the writable handle is only touched by `write`.

use crate::config::SheetConfig;
use crate::model::{Binding, Extent, ReadBinding, SheetPosition, SwitchablePositions};
use crate::view::{content_height, Node, SheetNode, View};

/// Borrowed view of a sheet's slots, position and configuration
#[derive(Debug)]
pub struct SheetOverlay<'a, H, F, M> {
    reader: ReadBinding<SheetPosition>,
    writer: &'a Binding<SheetPosition>,
    header: Option<&'a H>,
    footer: Option<&'a F>,
    main: &'a M,
    switchable: &'a SwitchablePositions,
    config: &'a SheetConfig,
}

impl<'a, H, F, M> SheetOverlay<'a, H, F, M> {
    pub fn new(
        position: &'a Binding<SheetPosition>,
        header: Option<&'a H>,
        footer: Option<&'a F>,
        main: &'a M,
        switchable: &'a SwitchablePositions,
        config: &'a SheetConfig,
    ) -> Self {
        Self {
            reader: position.read_only(),
            writer: position,
            header,
            footer,
            main,
            switchable,
            config,
        }
    }

    /// Current value of the position binding
    pub fn position(&self) -> SheetPosition {
        self.reader.get()
    }

    pub fn switchable(&self) -> &SwitchablePositions {
        self.switchable
    }

    pub fn config(&self) -> &SheetConfig {
        self.config
    }

    /// Close the sheet, if hidden is one of the allowed positions
    pub fn dismiss(&self) -> bool {
        if !self.switchable.contains(&SheetPosition::Hidden) {
            tracing::debug!("dismiss ignored: hidden is not switchable");
            return false;
        }
        self.write(SheetPosition::Hidden)
    }

    /// Store `next` unless the binding already holds it
    fn write(&self, next: SheetPosition) -> bool {
        let current = self.reader.get();
        if current == next {
            return false;
        }
        tracing::debug!(from = %current, to = %next, "sheet position changed");
        self.writer.set(next);
        true
    }
}

impl<'a, H: View, F: View, M: View> SheetOverlay<'a, H, F, M> {
    /// Snapshot of the sheet for this composition pass
    pub fn sheet_node(&self) -> SheetNode {
        let position = self.reader.get();
        if !self.switchable.contains(&position) {
            tracing::warn!(
                %position,
                switchable = ?self.switchable.as_slice(),
                "sheet position is not switchable; snapping behavior is undefined"
            );
        }

        SheetNode {
            position,
            switchable: self.switchable.clone(),
            header: self.header.node(),
            main: self.main.node(),
            footer: self.footer.node(),
            config: self.config.clone(),
        }
    }

    fn extent(&self, viewport_height: f32) -> Extent {
        let slots = [self.header.node(), self.main.node(), self.footer.node()];
        let content = content_height(self.config, [&slots[0], &slots[1], &slots[2]]);
        Extent::new(viewport_height, content).with_top_inset(self.config.top_inset)
    }

    /// Handle a tap on the drag indicator
    ///
    /// Advances to the next-taller switchable position, wrapping around.
    /// Returns the new position if the binding changed.
    pub fn tap_indicator(&self, viewport_height: f32) -> Option<SheetPosition> {
        if !self.config.indicator_switches_position {
            return None;
        }
        let current = self.reader.get();
        let next = self
            .switchable
            .next_after(&current, &self.extent(viewport_height))?;
        self.write(next).then_some(next)
    }

    /// Settle a drag that ended with the sheet `height` pixels tall
    ///
    /// Snaps to the nearest switchable position. Returns the new position if
    /// the binding changed.
    pub fn release_at(&self, height: f32, viewport_height: f32) -> Option<SheetPosition> {
        let target = self
            .switchable
            .nearest(height, &self.extent(viewport_height))?;
        self.write(target).then_some(target)
    }
}

impl<'a, H: View, F: View, M: View> View for SheetOverlay<'a, H, F, M> {
    fn node(&self) -> Node {
        Node::Sheet(Box::new(self.sheet_node()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Empty, Fill, StyledText};

    struct Fixture {
        position: Binding<SheetPosition>,
        switchable: SwitchablePositions,
        config: SheetConfig,
        main: Fill,
    }

    fn fixture(position: SheetPosition) -> Fixture {
        Fixture {
            position: Binding::new(position),
            switchable: SwitchablePositions::from([
                SheetPosition::Hidden,
                SheetPosition::Absolute(150.0),
                SheetPosition::Full,
            ]),
            config: SheetConfig::default(),
            main: Fill::new(0xFF336699).height(80.0),
        }
    }

    fn overlay(f: &Fixture) -> SheetOverlay<'_, StyledText, Empty, Fill> {
        SheetOverlay::new(
            &f.position,
            None,
            None,
            &f.main,
            &f.switchable,
            &f.config,
        )
    }

    #[test]
    fn test_absent_slots_render_empty() {
        let f = fixture(SheetPosition::Absolute(150.0));
        let node = overlay(&f).sheet_node();
        assert_eq!(node.header, Node::Empty);
        assert_eq!(node.footer, Node::Empty);
        assert_eq!(node.main, f.main.node());
        assert_eq!(node.position, SheetPosition::Absolute(150.0));
    }

    #[test]
    fn test_tap_indicator_cycles() {
        let f = fixture(SheetPosition::Absolute(150.0));
        let o = overlay(&f);

        assert_eq!(o.tap_indicator(800.0), Some(SheetPosition::Full));
        assert_eq!(f.position.get(), SheetPosition::Full);

        assert_eq!(o.tap_indicator(800.0), Some(SheetPosition::Absolute(150.0)));
        assert_eq!(f.position.version(), 2);
    }

    #[test]
    fn test_tap_indicator_disabled() {
        let mut f = fixture(SheetPosition::Absolute(150.0));
        f.config.indicator_switches_position = false;
        assert_eq!(overlay(&f).tap_indicator(800.0), None);
        assert_eq!(f.position.version(), 0);
    }

    #[test]
    fn test_release_snaps_to_nearest() {
        let f = fixture(SheetPosition::Full);
        let o = overlay(&f);
        assert_eq!(o.release_at(120.0, 800.0), Some(SheetPosition::Absolute(150.0)));
        // Already there: no write
        assert_eq!(o.release_at(140.0, 800.0), None);
        assert_eq!(f.position.version(), 1);
    }

    #[test]
    fn test_release_snaps_to_dynamic_content_height() {
        let mut f = fixture(SheetPosition::Full);
        f.switchable = SwitchablePositions::from([SheetPosition::Dynamic, SheetPosition::Full]);
        let o = overlay(&f);
        // indicator 21 + main 80 + padding 12
        assert_eq!(o.sheet_node().content_height(), 113.0);
        assert_eq!(o.release_at(120.0, 800.0), Some(SheetPosition::Dynamic));
    }

    #[test]
    fn test_reads_follow_external_writes() {
        let f = fixture(SheetPosition::Full);
        let o = overlay(&f);
        f.position.set(SheetPosition::Hidden);
        assert_eq!(o.position(), SheetPosition::Hidden);
        assert_eq!(o.sheet_node().position, SheetPosition::Hidden);
        assert_eq!(f.position.version(), 1);
    }

    #[test]
    fn test_dismiss_requires_hidden() {
        let f = fixture(SheetPosition::Full);
        assert!(overlay(&f).dismiss());
        assert_eq!(f.position.get(), SheetPosition::Hidden);

        let mut g = fixture(SheetPosition::Full);
        g.switchable = SwitchablePositions::from([SheetPosition::Full]);
        assert!(!overlay(&g).dismiss());
        assert_eq!(g.position.get(), SheetPosition::Full);
    }
}
