//! Sheet geometry
//!
//! Resolves a [`SheetNode`] against a viewport into pixel rectangles for the
//! sheet body, drag indicator and the three content slots.

use crate::config::{INDICATOR_HEIGHT, INDICATOR_MARGIN, INDICATOR_WIDTH};
use crate::model::Extent;
use crate::view::SheetNode;

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Resolved sheet rectangles for one viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    /// Whole sheet, anchored to the viewport's bottom edge
    pub sheet: Rect,
    /// Drag indicator pill, if enabled and the sheet is tall enough
    pub indicator: Option<Rect>,
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl SheetLayout {
    pub fn compute(node: &SheetNode, viewport: Rect) -> Self {
        let config = &node.config;
        let metrics = &config.metrics;
        let extent = Extent::new(viewport.height, node.content_height())
            .with_top_inset(config.top_inset);

        let height = node.position.resolve_height(&extent);
        let width = config
            .max_width
            .map_or(viewport.width, |max| max.min(viewport.width))
            .max(0.0);
        let x = viewport.x + (viewport.width - width) / 2.0;
        let top = viewport.bottom() - height;
        let bottom = viewport.bottom();
        let sheet = Rect::new(x, top, width, height);

        let indicator_space = config.indicator_space();
        let indicator = (config.drag_indicator && height >= indicator_space).then(|| {
            Rect::new(
                x + (width - INDICATOR_WIDTH) / 2.0,
                top + INDICATOR_MARGIN,
                INDICATOR_WIDTH,
                INDICATOR_HEIGHT,
            )
        });

        let padding = config.padding;
        let inner_x = x + padding;
        let inner_width = (width - padding * 2.0).max(0.0);
        let content_top = (top + indicator_space).min(bottom);

        let header_height = if node.header.is_empty() {
            0.0
        } else {
            node.header.intrinsic_height(metrics).min(bottom - content_top)
        };
        let header = Rect::new(inner_x, content_top, inner_width, header_height);

        let mut main_top = header.bottom();
        if !node.header.is_empty() {
            main_top = (main_top + padding).min(bottom);
        }

        let content_bottom = (bottom - padding).max(main_top);
        let footer_height = if node.footer.is_empty() {
            0.0
        } else {
            node.footer
                .intrinsic_height(metrics)
                .min(content_bottom - main_top)
        };
        let footer = Rect::new(
            inner_x,
            content_bottom - footer_height,
            inner_width,
            footer_height,
        );

        let mut main_bottom = footer.y;
        if !node.footer.is_empty() {
            main_bottom -= padding;
        }
        let main = Rect::new(
            inner_x,
            main_top,
            inner_width,
            (main_bottom - main_top).max(0.0),
        );

        Self {
            sheet,
            indicator,
            header,
            main,
            footer,
        }
    }

    /// True if `(x, y)` lands in the band that holds the drag indicator
    pub fn hit_indicator(&self, x: f32, y: f32) -> bool {
        self.indicator.is_some_and(|pill| {
            let band = Rect::new(
                self.sheet.x,
                self.sheet.y,
                self.sheet.width,
                pill.bottom() + INDICATOR_MARGIN - self.sheet.y,
            );
            band.contains(x, y)
        })
    }
}
