//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations. All coordinates
//! are in pixels and out-of-bounds operations are clipped.

use crate::config::TextMetrics;
use crate::view::{FontWeight, TextStyle};

use super::layout::Rect;
use super::paint::DrawCmd;

/// Blend a source pixel (with alpha) onto a destination pixel
///
/// Both colors are in ARGB format. The source alpha determines
/// the blend ratio.
#[inline]
pub fn blend_pixel(src: u32, dst: u32) -> u32 {
    let alpha = (src >> 24) & 0xFF;
    if alpha == 0 {
        return dst;
    }
    if alpha == 255 {
        return src | 0xFF000000;
    }

    let inv_alpha = 255 - alpha;

    let r = ((((src >> 16) & 0xFF) * alpha + ((dst >> 16) & 0xFF) * inv_alpha) / 255) & 0xFF;
    let g = ((((src >> 8) & 0xFF) * alpha + ((dst >> 8) & 0xFF) * inv_alpha) / 255) & 0xFF;
    let b = (((src & 0xFF) * alpha + (dst & 0xFF) * inv_alpha) / 255) & 0xFF;

    0xFF000000 | (r << 16) | (g << 8) | b
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// Host-supplied glyph rendering
pub trait TextPainter {
    /// Draw one line of text with its top-left corner at `(x, y)`
    fn draw(
        &mut self,
        frame: &mut Frame,
        x: usize,
        y: usize,
        text: &str,
        style: &TextStyle,
        color: u32,
    );
}

/// Draws each character as a solid cell
///
/// Stands in for a real font when previewing layouts. Bold text fills the
/// whole cell; regular text leaves a one pixel gap.
#[derive(Debug, Clone, Copy)]
pub struct BlockPainter {
    metrics: TextMetrics,
}

impl BlockPainter {
    pub fn new(metrics: &TextMetrics) -> Self {
        Self { metrics: *metrics }
    }
}

impl TextPainter for BlockPainter {
    fn draw(
        &mut self,
        frame: &mut Frame,
        x: usize,
        y: usize,
        text: &str,
        style: &TextStyle,
        color: u32,
    ) {
        let scale = style.scale_factor(&self.metrics);
        let cell_w = (self.metrics.char_width * scale).round() as usize;
        let cell_h = (self.metrics.line_height * scale).round() as usize;
        let glyph_w = match style.weight {
            FontWeight::Bold => cell_w,
            FontWeight::Regular => cell_w.saturating_sub(1),
        };
        // Glyph body sits in the middle 60% of the line
        let glyph_h = cell_h * 3 / 5;
        let glyph_y = y + (cell_h - glyph_h) / 2;

        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            frame.fill_rect_px(x + i * cell_w, glyph_y, glyph_w, glyph_h, color);
        }
    }
}

/// A frame buffer wrapper providing safe drawing primitives.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Full frame as a rect, for painting the root node
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// Set a clipping rectangle. All subsequent drawing operations will be
    /// constrained to this region.
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = (rect.right().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0.0) as usize).min(self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    fn max_x(&self) -> usize {
        self.clip.map_or(self.width, |c| c.x1)
    }

    #[inline]
    fn max_y(&self) -> usize {
        self.clip.map_or(self.height, |c| c.y1)
    }

    #[inline]
    fn min_x(&self) -> usize {
        self.clip.map_or(0, |c| c.x0)
    }

    #[inline]
    fn min_y(&self) -> usize {
        self.clip.map_or(0, |c| c.y0)
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Pixel span covered by `rect` after clipping
    fn span(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width).max(self.min_x());
        let y0 = (rect.y.max(0.0) as usize).min(self.height).max(self.min_y());
        let x1 = (rect.right().max(0.0) as usize).min(self.max_x());
        let y1 = (rect.bottom().max(0.0) as usize).min(self.max_y());
        (x0, y0, x1, y1)
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                self.buffer[row_start + x] = color;
            }
        }
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        self.fill_rect(Rect::new(x as f32, y as f32, w as f32, h as f32), color);
    }

    /// Fill a rectangle with alpha blending (ARGB format)
    pub fn blend_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                let idx = row_start + x;
                self.buffer[idx] = blend_pixel(color, self.buffer[idx]);
            }
        }
    }

    /// Draw a 1px opaque outline along the inside edge of `rect`
    pub fn draw_border(&mut self, rect: Rect, color: u32) {
        let opaque = color | 0xFF000000;
        let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        // Top
        self.fill_rect(Rect::new(x, y, w, 1.0), opaque);
        // Bottom
        self.fill_rect(Rect::new(x, y + h - 1.0, w, 1.0), opaque);
        // Left
        self.fill_rect(Rect::new(x, y, 1.0, h), opaque);
        // Right
        self.fill_rect(Rect::new(x + w - 1.0, y, 1.0, h), opaque);
    }

    /// Rasterize a display list in order
    pub fn execute(&mut self, cmds: &[DrawCmd], painter: &mut dyn TextPainter) {
        for cmd in cmds {
            match cmd {
                DrawCmd::Fill { rect, color } => self.fill_rect(*rect, *color),
                DrawCmd::Blend { rect, color } => self.blend_rect(*rect, *color),
                DrawCmd::Border { rect, color } => self.draw_border(*rect, *color),
                DrawCmd::Text {
                    x,
                    y,
                    clip,
                    text,
                    style,
                    color,
                } => {
                    let px = x.max(0.0).round() as usize;
                    let py = y.max(0.0).round() as usize;
                    self.set_clip(*clip);
                    painter.draw(self, px, py, text, style, *color);
                    self.clear_clip();
                }
            }
        }
    }
}
