//! CPU rendering of composed view trees
//!
//! Rendering is split in three steps so each can be tested on its own:
//!
//! 1. `layout` resolves a sheet against a viewport into rectangles
//! 2. `paint` turns a `Node` tree into a back-to-front display list
//! 3. `frame` rasterizes the display list into an ARGB pixel buffer

pub mod frame;
pub mod layout;
pub mod paint;

pub use frame::{blend_pixel, BlockPainter, Frame, TextPainter};
pub use layout::{Rect, SheetLayout};
pub use paint::{paint, DrawCmd, PaintContext};

use crate::view::Node;

/// Paint `node` over the whole frame
pub fn render_node(
    node: &Node,
    frame: &mut Frame,
    ctx: &PaintContext,
    painter: &mut dyn TextPainter,
) {
    let cmds = paint(node, frame.bounds(), ctx);
    frame.execute(&cmds, painter);
}
