//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::Cell;

use token_sheet::{Fill, Node, SheetPosition, SwitchablePositions, View};

pub const PEEK: SheetPosition = SheetPosition::Absolute(160.0);
pub const HOST_COLOR: u32 = 0xFF202020;

/// The usual hidden / peek / full switch set
pub fn three_positions() -> SwitchablePositions {
    SwitchablePositions::from([SheetPosition::Hidden, PEEK, SheetPosition::Full])
}

/// Opaque full-size host view
pub fn host() -> Fill {
    Fill::new(HOST_COLOR)
}

/// View that counts how often it is turned into a node
pub struct CountingView<'a> {
    pub renders: &'a Cell<usize>,
    pub label: &'static str,
}

impl View for CountingView<'_> {
    fn node(&self) -> Node {
        self.renders.set(self.renders.get() + 1);
        self.label.node()
    }
}

/// Split a composed sheet tree into its (host, sheet) layers
pub fn layers(node: &Node) -> (&Node, &token_sheet::view::SheetNode) {
    let Node::ZStack { layers } = node else {
        panic!("expected a z-stack, got {:?}", node);
    };
    assert_eq!(layers.len(), 2, "expected exactly host + overlay layers");
    let sheet = layers[1]
        .as_sheet()
        .unwrap_or_else(|| panic!("top layer is not a sheet: {:?}", layers[1]));
    (&layers[0], sheet)
}
