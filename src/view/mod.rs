//! Declarative view layer
//!
//! Anything that can describe itself as a [`Node`] is a [`View`]. Slots that
//! accept caller content (the sheet's header, footer and main areas, and the
//! host view underneath it) are generic over `View`, so callers can pass
//! text, primitives, their own view structs or boxed trait objects.

mod node;
mod text;

pub(crate) use node::content_height;
pub use node::{Node, SheetNode};
pub use text::{FontWeight, StyledText, TextScale, TextStyle};

/// Renderable content
pub trait View {
    /// Describe this view as a tree node
    fn node(&self) -> Node;
}

/// Content that renders nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Empty;

/// Solid color block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: u32,
    pub height: Option<f32>,
}

impl Fill {
    pub fn new(color: u32) -> Self {
        Self {
            color,
            height: None,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }
}

/// Views stacked top to bottom
#[derive(Default)]
pub struct VStack {
    children: Vec<Box<dyn View>>,
}

impl VStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, view: impl View + 'static) -> Self {
        self.children.push(Box::new(view));
        self
    }
}

impl View for Node {
    fn node(&self) -> Node {
        self.clone()
    }
}

impl View for Empty {
    fn node(&self) -> Node {
        Node::Empty
    }
}

impl View for StyledText {
    fn node(&self) -> Node {
        Node::Text(self.clone())
    }
}

impl View for Fill {
    fn node(&self) -> Node {
        Node::Fill {
            color: self.color,
            height: self.height,
        }
    }
}

impl View for VStack {
    fn node(&self) -> Node {
        Node::VStack {
            children: self.children.iter().map(|child| child.node()).collect(),
        }
    }
}

impl View for str {
    fn node(&self) -> Node {
        Node::Text(StyledText::new(self))
    }
}

impl View for String {
    fn node(&self) -> Node {
        self.as_str().node()
    }
}

/// Absent content renders as [`Node::Empty`]
impl<V: View> View for Option<V> {
    fn node(&self) -> Node {
        match self {
            Some(view) => view.node(),
            None => Node::Empty,
        }
    }
}

impl<V: View + ?Sized> View for &V {
    fn node(&self) -> Node {
        (**self).node()
    }
}

impl<V: View + ?Sized> View for Box<V> {
    fn node(&self) -> Node {
        (**self).node()
    }
}
