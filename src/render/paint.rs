//! Display list generation
//!
//! Walks a composed [`Node`] tree and emits draw commands back to front.
//! Painting never runs content builders; it only reads the tree.

use crate::config::TextMetrics;
use crate::view::{Node, SheetNode, StyledText, TextStyle};

use super::layout::{Rect, SheetLayout};

/// A single drawing operation in pixel space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Opaque fill
    Fill { rect: Rect, color: u32 },
    /// Alpha-blended fill over what is already drawn
    Blend { rect: Rect, color: u32 },
    /// 1px outline
    Border { rect: Rect, color: u32 },
    /// One line of text with its top-left corner at (x, y), clipped to `clip`
    Text {
        x: f32,
        y: f32,
        clip: Rect,
        text: String,
        style: TextStyle,
        color: u32,
    },
}

/// Inherited paint state
#[derive(Debug, Clone, Copy)]
pub struct PaintContext {
    pub metrics: TextMetrics,
    pub text_color: u32,
}

impl Default for PaintContext {
    fn default() -> Self {
        Self {
            metrics: TextMetrics::default(),
            text_color: 0xFFD4D4D4,
        }
    }
}

/// Paint `node` into `rect`, returning the display list
pub fn paint(node: &Node, rect: Rect, ctx: &PaintContext) -> Vec<DrawCmd> {
    let mut out = Vec::new();
    paint_into(node, rect, ctx, &mut out);
    out
}

fn paint_into(node: &Node, rect: Rect, ctx: &PaintContext, out: &mut Vec<DrawCmd>) {
    if rect.is_empty() {
        return;
    }

    match node {
        Node::Empty => {}
        Node::Text(text) => paint_text(text, rect, ctx, out),
        Node::Fill { color, height } => {
            let h = height.unwrap_or(rect.height).min(rect.height);
            out.push(DrawCmd::Fill {
                rect: Rect::new(rect.x, rect.y, rect.width, h),
                color: *color,
            });
        }
        Node::VStack { children } => {
            let mut y = rect.y;
            for child in children {
                let remaining = rect.bottom() - y;
                if remaining <= 0.0 {
                    break;
                }
                let h = match child {
                    Node::Fill { height: None, .. } => remaining,
                    _ => child.intrinsic_height(&ctx.metrics).min(remaining),
                };
                paint_into(child, Rect::new(rect.x, y, rect.width, h), ctx, out);
                y += h;
            }
        }
        Node::ZStack { layers } => {
            for layer in layers {
                paint_into(layer, rect, ctx, out);
            }
        }
        Node::Sheet(sheet) => paint_sheet(sheet, rect, out),
    }
}

fn paint_text(text: &StyledText, rect: Rect, ctx: &PaintContext, out: &mut Vec<DrawCmd>) {
    let line_height = ctx.metrics.line_height * text.style.scale_factor(&ctx.metrics);
    for (i, line) in text
        .visible_lines(rect.width, &ctx.metrics)
        .into_iter()
        .enumerate()
    {
        let y = rect.y + i as f32 * line_height;
        if y + line_height > rect.bottom() + f32::EPSILON {
            break;
        }
        if line.is_empty() {
            continue;
        }
        out.push(DrawCmd::Text {
            x: rect.x,
            y,
            clip: rect,
            text: line,
            style: text.style,
            color: ctx.text_color,
        });
    }
}

fn paint_sheet(sheet: &SheetNode, viewport: Rect, out: &mut Vec<DrawCmd>) {
    let layout = SheetLayout::compute(sheet, viewport);
    if layout.sheet.is_empty() {
        return;
    }

    let config = &sheet.config;
    out.push(DrawCmd::Blend {
        rect: layout.sheet,
        color: config.background,
    });
    out.push(DrawCmd::Border {
        rect: layout.sheet,
        color: config.border,
    });
    if let Some(pill) = layout.indicator {
        out.push(DrawCmd::Fill {
            rect: pill,
            color: config.indicator_color,
        });
    }

    let ctx = PaintContext {
        metrics: config.metrics,
        text_color: config.text_color,
    };
    paint_into(&sheet.header, layout.header, &ctx, out);
    paint_into(&sheet.main, layout.main, &ctx, out);
    paint_into(&sheet.footer, layout.footer, &ctx, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SheetConfig;
    use crate::model::{SheetPosition, SwitchablePositions};
    use crate::view::{Fill, View};

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 800.0)
    }

    fn sheet_node(position: SheetPosition) -> Node {
        Node::Sheet(Box::new(SheetNode {
            position,
            switchable: SwitchablePositions::default(),
            header: StyledText::title("Details").node(),
            main: Fill::new(0xFF00AA00).node(),
            footer: Node::Empty,
            config: SheetConfig::default(),
        }))
    }

    #[test]
    fn test_zstack_paints_host_before_sheet() {
        let tree = Node::ZStack {
            layers: vec![
                Fill::new(0xFF111111).node(),
                sheet_node(SheetPosition::Absolute(200.0)),
            ],
        };
        let cmds = paint(&tree, viewport(), &PaintContext::default());

        assert_eq!(
            cmds[0],
            DrawCmd::Fill {
                rect: viewport(),
                color: 0xFF111111
            }
        );
        assert!(matches!(cmds[1], DrawCmd::Blend { .. }));
    }

    #[test]
    fn test_sheet_paints_header_text_with_sheet_color() {
        let cmds = paint(
            &sheet_node(SheetPosition::Absolute(200.0)),
            viewport(),
            &PaintContext::default(),
        );
        let text = cmds
            .iter()
            .find_map(|cmd| match cmd {
                DrawCmd::Text { text, color, y, .. } => Some((text.clone(), *color, *y)),
                _ => None,
            })
            .unwrap();
        assert_eq!(text.0, "Details");
        assert_eq!(text.1, SheetConfig::default().text_color);
        assert_eq!(text.2, 621.0);
    }

    #[test]
    fn test_text_carries_slot_rect() {
        let cmds = paint(
            &sheet_node(SheetPosition::Absolute(200.0)),
            viewport(),
            &PaintContext::default(),
        );
        let clip = cmds
            .iter()
            .find_map(|cmd| match cmd {
                DrawCmd::Text { clip, .. } => Some(*clip),
                _ => None,
            })
            .unwrap();
        assert_eq!(clip, Rect::new(12.0, 621.0, 376.0, 30.0));
    }

    #[test]
    fn test_hidden_sheet_paints_nothing() {
        let cmds = paint(
            &sheet_node(SheetPosition::Hidden),
            viewport(),
            &PaintContext::default(),
        );
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_vstack_stretch_fill_takes_remaining_space() {
        let tree = Node::VStack {
            children: vec![StyledText::new("top").node(), Fill::new(0xFF222222).node()],
        };
        let cmds = paint(&tree, Rect::new(0.0, 0.0, 100.0, 100.0), &PaintContext::default());
        assert_eq!(
            cmds[1],
            DrawCmd::Fill {
                rect: Rect::new(0.0, 20.0, 100.0, 80.0),
                color: 0xFF222222
            }
        );
    }

    #[test]
    fn test_text_lines_stop_at_rect_bottom() {
        let tree = StyledText::new("one\ntwo\nthree").node();
        let cmds = paint(&tree, Rect::new(0.0, 0.0, 100.0, 45.0), &PaintContext::default());
        assert_eq!(cmds.len(), 2);
    }
}
