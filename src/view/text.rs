//! Styled text content
//!
//! Text carries its style but no font: glyph rasterisation belongs to the
//! host's `TextPainter`. Width math assumes a monospace cell of
//! `char_width * scale`, the same assumption the editor's gutter and tab
//! layout make.

use serde::Serialize;

use crate::config::TextMetrics;

/// Relative type size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextScale {
    #[default]
    Body,
    Headline,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStyle {
    pub scale: TextScale,
    pub weight: FontWeight,
    /// Maximum number of visible lines (`None` = unlimited)
    pub line_limit: Option<usize>,
}

impl TextStyle {
    /// Multiplier applied to line height and character width
    pub fn scale_factor(&self, metrics: &TextMetrics) -> f32 {
        match self.scale {
            TextScale::Body => 1.0,
            TextScale::Headline => 1.25,
            TextScale::Title => metrics.title_scale,
        }
    }
}

/// A run of text with a style
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StyledText {
    pub content: String,
    pub style: TextStyle,
}

impl StyledText {
    /// Plain body text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::default(),
        }
    }

    /// Sheet heading: bold, title scale, one line
    pub fn title(content: impl Into<String>) -> Self {
        Self::new(content)
            .bold()
            .scale(TextScale::Title)
            .line_limit(1)
    }

    pub fn bold(mut self) -> Self {
        self.style.weight = FontWeight::Bold;
        self
    }

    pub fn scale(mut self, scale: TextScale) -> Self {
        self.style.scale = scale;
        self
    }

    pub fn line_limit(mut self, limit: usize) -> Self {
        self.style.line_limit = Some(limit);
        self
    }

    pub fn is_bold(&self) -> bool {
        self.style.weight == FontWeight::Bold
    }

    /// Number of lines shown after applying the line limit
    pub fn line_count(&self) -> usize {
        let lines = self.content.lines().count().max(1);
        match self.style.line_limit {
            Some(limit) => lines.min(limit.max(1)),
            None => lines,
        }
    }

    /// Height in pixels this text occupies
    pub fn height(&self, metrics: &TextMetrics) -> f32 {
        self.line_count() as f32 * metrics.line_height * self.style.scale_factor(metrics)
    }

    /// Lines as they appear within `max_width`, tail-truncated with `…`
    ///
    /// A line is also marked truncated when later lines were cut off by the
    /// line limit.
    pub fn visible_lines(&self, max_width: f32, metrics: &TextMetrics) -> Vec<String> {
        let cell = metrics.char_width * self.style.scale_factor(metrics);
        let max_chars = if cell > 0.0 {
            (max_width.max(0.0) / cell).floor() as usize
        } else {
            usize::MAX
        };

        let all: Vec<&str> = if self.content.is_empty() {
            vec![""]
        } else {
            self.content.lines().collect()
        };
        let shown = self.line_count().min(all.len());
        let cut_below = shown < all.len();

        all.iter()
            .take(shown)
            .enumerate()
            .map(|(i, line)| {
                let force_ellipsis = cut_below && i + 1 == shown;
                clip_line(line, max_chars, force_ellipsis)
            })
            .collect()
    }
}

fn clip_line(line: &str, max_chars: usize, force_ellipsis: bool) -> String {
    let len = line.chars().count();
    if len <= max_chars && !force_ellipsis {
        return line.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let keep = if len < max_chars { len } else { max_chars - 1 };
    let mut clipped: String = line.chars().take(keep).collect();
    clipped.push('…');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> TextMetrics {
        TextMetrics {
            line_height: 20.0,
            char_width: 10.0,
            title_scale: 1.5,
        }
    }

    #[test]
    fn test_title_style() {
        let title = StyledText::title("Details");
        assert_eq!(title.content, "Details");
        assert!(title.is_bold());
        assert_eq!(title.style.scale, TextScale::Title);
        assert_eq!(title.style.line_limit, Some(1));
    }

    #[test]
    fn test_height_uses_scale_and_line_limit() {
        let m = metrics();
        assert_eq!(StyledText::new("a\nb\nc").height(&m), 60.0);
        assert_eq!(StyledText::new("a\nb\nc").line_limit(2).height(&m), 40.0);
        assert_eq!(StyledText::title("one\ntwo").height(&m), 30.0);
        assert_eq!(StyledText::new("").height(&m), 20.0);
    }

    #[test]
    fn test_visible_lines_fit() {
        let lines = StyledText::new("hello").visible_lines(100.0, &metrics());
        assert_eq!(lines, vec!["hello".to_string()]);
    }

    #[test]
    fn test_visible_lines_truncates_overlong_title() {
        // Title cell is 15px wide, so 90px fits six characters
        let lines = StyledText::title("Transactions").visible_lines(90.0, &metrics());
        assert_eq!(lines, vec!["Trans…".to_string()]);
    }

    #[test]
    fn test_visible_lines_marks_cut_lines() {
        let text = StyledText::new("first\nsecond").line_limit(1);
        assert_eq!(text.visible_lines(200.0, &metrics()), vec!["first…".to_string()]);
    }

    #[test]
    fn test_visible_lines_zero_width() {
        let lines = StyledText::new("abc").visible_lines(0.0, &metrics());
        assert_eq!(lines, vec![String::new()]);
    }
}
