//! Composed view tree
//!
//! A `Node` is the output of composition: a plain value the host can walk,
//! paint or dump as JSON as many times as it likes without re-running any
//! content builders.

use serde::Serialize;

use crate::config::{hex_color, SheetConfig, TextMetrics};
use crate::model::{SheetPosition, SwitchablePositions};

use super::text::StyledText;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Zero-size content
    Empty,
    Text(StyledText),
    /// Solid block; `height: None` stretches to the available space
    Fill {
        #[serde(serialize_with = "hex_color::serialize")]
        color: u32,
        height: Option<f32>,
    },
    /// Children laid out top to bottom
    VStack { children: Vec<Node> },
    /// Children layered back to front
    ZStack { layers: Vec<Node> },
    Sheet(Box<SheetNode>),
}

impl Node {
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Height the node needs when laid out without constraints
    pub fn intrinsic_height(&self, metrics: &TextMetrics) -> f32 {
        match self {
            Node::Empty | Node::Sheet(_) => 0.0,
            Node::Text(text) => text.height(metrics),
            Node::Fill { height, .. } => height.unwrap_or(0.0),
            Node::VStack { children } => children
                .iter()
                .map(|child| child.intrinsic_height(metrics))
                .sum(),
            Node::ZStack { layers } => layers
                .iter()
                .map(|layer| layer.intrinsic_height(metrics))
                .fold(0.0, f32::max),
        }
    }

    /// Text of this node if it is a text leaf
    pub fn as_text(&self) -> Option<&StyledText> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_sheet(&self) -> Option<&SheetNode> {
        match self {
            Node::Sheet(sheet) => Some(sheet),
            _ => None,
        }
    }
}

/// Snapshot of a bottom sheet as seen by one composition pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetNode {
    /// Binding value read when the tree was composed
    pub position: SheetPosition,
    pub switchable: SwitchablePositions,
    pub header: Node,
    pub main: Node,
    pub footer: Node,
    pub config: SheetConfig,
}

impl SheetNode {
    /// Height needed to show indicator, header, main and footer without clipping
    pub fn content_height(&self) -> f32 {
        content_height(&self.config, [&self.header, &self.main, &self.footer])
    }
}

/// Indicator space plus every non-empty slot's height and padding
pub(crate) fn content_height(config: &SheetConfig, slots: [&Node; 3]) -> f32 {
    let padded = slots
        .iter()
        .filter(|slot| !slot.is_empty())
        .map(|slot| slot.intrinsic_height(&config.metrics) + config.padding)
        .sum::<f32>();
    config.indicator_space() + padded
}
