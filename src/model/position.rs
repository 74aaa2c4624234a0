//! Sheet resting positions and the set the user may switch between

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SheetError;

/// Where the sheet currently rests
///
/// Heights are only comparable once a viewport is known, so ordering goes
/// through [`SheetPosition::cmp_in`] rather than `PartialOrd`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetPosition {
    /// Fully off screen
    Hidden,
    /// Fixed height in logical pixels
    Absolute(f32),
    /// Fraction of the viewport height (0.0..=1.0)
    Relative(f32),
    /// Tall enough to fit the sheet's content
    Dynamic,
    /// Viewport height minus the top inset
    Full,
}

/// Vertical space a position resolves against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub viewport_height: f32,
    /// Intrinsic height of indicator, header, main and footer together
    pub content_height: f32,
    /// Space kept free above a fully expanded sheet
    pub top_inset: f32,
}

impl Extent {
    pub fn new(viewport_height: f32, content_height: f32) -> Self {
        Self {
            viewport_height,
            content_height,
            top_inset: 0.0,
        }
    }

    pub fn with_top_inset(mut self, top_inset: f32) -> Self {
        self.top_inset = top_inset;
        self
    }

    /// Tallest height any position may resolve to
    pub fn max_height(&self) -> f32 {
        (self.viewport_height - self.top_inset).max(0.0)
    }
}

impl SheetPosition {
    pub fn is_hidden(&self) -> bool {
        matches!(self, SheetPosition::Hidden)
    }

    /// Concrete sheet height for this position, clamped to `[0, max_height]`
    pub fn resolve_height(&self, extent: &Extent) -> f32 {
        let max = extent.max_height();
        match *self {
            SheetPosition::Hidden => 0.0,
            SheetPosition::Absolute(px) => px.clamp(0.0, max),
            SheetPosition::Relative(fraction) => {
                (fraction.clamp(0.0, 1.0) * extent.viewport_height).min(max)
            }
            SheetPosition::Dynamic => extent.content_height.clamp(0.0, max),
            SheetPosition::Full => max,
        }
    }

    /// Order two positions by the height they resolve to in `extent`
    pub fn cmp_in(&self, other: &SheetPosition, extent: &Extent) -> Ordering {
        self.resolve_height(extent)
            .total_cmp(&other.resolve_height(extent))
    }
}

impl fmt::Display for SheetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetPosition::Hidden => write!(f, "hidden"),
            SheetPosition::Absolute(px) => write!(f, "{}px", px),
            SheetPosition::Relative(fraction) => write!(f, "{}", fraction),
            SheetPosition::Dynamic => write!(f, "dynamic"),
            SheetPosition::Full => write!(f, "full"),
        }
    }
}

/// Parses `hidden`, `dynamic`, `full`, `<n>px` or a bare fraction like `0.4`
impl FromStr for SheetPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "hidden" => return Ok(SheetPosition::Hidden),
            "dynamic" => return Ok(SheetPosition::Dynamic),
            "full" => return Ok(SheetPosition::Full),
            _ => {}
        }

        if let Some(px) = s.strip_suffix("px") {
            return px
                .trim()
                .parse::<f32>()
                .map(SheetPosition::Absolute)
                .map_err(|e| format!("Invalid pixel height '{}': {}", s, e));
        }

        let fraction = s
            .parse::<f32>()
            .map_err(|e| format!("Invalid sheet position '{}': {}", s, e))?;
        if !(0.0..=1.0).contains(&fraction) {
            return Err(format!(
                "Relative position must be between 0 and 1, got {}",
                fraction
            ));
        }
        Ok(SheetPosition::Relative(fraction))
    }
}

/// Ordered set of positions the user may drag or tap into
///
/// Construction does not validate; see [`SwitchablePositions::validate`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct SwitchablePositions(Vec<SheetPosition>);

impl SwitchablePositions {
    pub fn new(positions: Vec<SheetPosition>) -> Self {
        Self(positions)
    }

    pub fn as_slice(&self) -> &[SheetPosition] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, position: &SheetPosition) -> bool {
        self.0.contains(position)
    }

    /// Check that the set is non-empty and includes `current`
    pub fn validate(&self, current: &SheetPosition) -> Result<(), SheetError> {
        if self.is_empty() {
            return Err(SheetError::Empty);
        }
        if !self.contains(current) {
            return Err(SheetError::NotSwitchable(*current));
        }
        Ok(())
    }

    /// Allowed position whose resolved height is closest to `height`
    ///
    /// Ties go to the position listed first.
    pub fn nearest(&self, height: f32, extent: &Extent) -> Option<SheetPosition> {
        let mut best: Option<(SheetPosition, f32)> = None;
        for position in &self.0 {
            let distance = (position.resolve_height(extent) - height).abs();
            match best {
                Some((_, d)) if d <= distance => {}
                _ => best = Some((*position, distance)),
            }
        }
        best.map(|(position, _)| position)
    }

    /// Next-taller visible position after `current`, wrapping to the shortest
    ///
    /// Hidden is never a tap target. Returns `None` when nothing visible is
    /// switchable.
    pub fn next_after(&self, current: &SheetPosition, extent: &Extent) -> Option<SheetPosition> {
        let mut visible: Vec<SheetPosition> =
            self.0.iter().copied().filter(|p| !p.is_hidden()).collect();
        visible.sort_by(|a, b| a.cmp_in(b, extent));

        let current_height = current.resolve_height(extent);
        visible
            .iter()
            .copied()
            .find(|p| p.resolve_height(extent) > current_height)
            .or_else(|| visible.first().copied())
    }
}

impl From<Vec<SheetPosition>> for SwitchablePositions {
    fn from(positions: Vec<SheetPosition>) -> Self {
        Self(positions)
    }
}

impl<const N: usize> From<[SheetPosition; N]> for SwitchablePositions {
    fn from(positions: [SheetPosition; N]) -> Self {
        Self(positions.to_vec())
    }
}

impl FromIterator<SheetPosition> for SwitchablePositions {
    fn from_iter<I: IntoIterator<Item = SheetPosition>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SwitchablePositions {
    type Item = &'a SheetPosition;
    type IntoIter = std::slice::Iter<'a, SheetPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent() -> Extent {
        Extent::new(800.0, 300.0)
    }

    #[test]
    fn test_resolve_height_per_variant() {
        let e = extent().with_top_inset(40.0);
        assert_eq!(SheetPosition::Hidden.resolve_height(&e), 0.0);
        assert_eq!(SheetPosition::Absolute(120.0).resolve_height(&e), 120.0);
        assert_eq!(SheetPosition::Relative(0.5).resolve_height(&e), 400.0);
        assert_eq!(SheetPosition::Dynamic.resolve_height(&e), 300.0);
        assert_eq!(SheetPosition::Full.resolve_height(&e), 760.0);
    }

    #[test]
    fn test_resolve_height_clamps_to_viewport() {
        let e = extent().with_top_inset(100.0);
        assert_eq!(SheetPosition::Absolute(5000.0).resolve_height(&e), 700.0);
        assert_eq!(SheetPosition::Absolute(-10.0).resolve_height(&e), 0.0);
        assert_eq!(SheetPosition::Relative(1.5).resolve_height(&e), 700.0);

        let tall_content = Extent::new(800.0, 2000.0);
        assert_eq!(SheetPosition::Dynamic.resolve_height(&tall_content), 800.0);
    }

    #[test]
    fn test_cmp_in_orders_mixed_variants() {
        let e = extent();
        let peek = SheetPosition::Absolute(150.0);
        let half = SheetPosition::Relative(0.5);
        assert_eq!(peek.cmp_in(&half, &e), Ordering::Less);
        assert_eq!(SheetPosition::Full.cmp_in(&half, &e), Ordering::Greater);
        assert_eq!(
            SheetPosition::Hidden.cmp_in(&SheetPosition::Absolute(0.0), &e),
            Ordering::Equal
        );
    }

    #[test]
    fn test_parse_positions() {
        assert_eq!("hidden".parse::<SheetPosition>(), Ok(SheetPosition::Hidden));
        assert_eq!("Full".parse::<SheetPosition>(), Ok(SheetPosition::Full));
        assert_eq!("dynamic".parse::<SheetPosition>(), Ok(SheetPosition::Dynamic));
        assert_eq!("240px".parse::<SheetPosition>(), Ok(SheetPosition::Absolute(240.0)));
        assert_eq!("0.25".parse::<SheetPosition>(), Ok(SheetPosition::Relative(0.25)));
        assert!("1.5".parse::<SheetPosition>().is_err());
        assert!("tall".parse::<SheetPosition>().is_err());
    }

    #[test]
    fn test_validate() {
        let empty = SwitchablePositions::default();
        assert!(matches!(
            empty.validate(&SheetPosition::Hidden),
            Err(SheetError::Empty)
        ));

        let set = SwitchablePositions::from([SheetPosition::Hidden, SheetPosition::Full]);
        assert!(set.validate(&SheetPosition::Full).is_ok());
        assert!(matches!(
            set.validate(&SheetPosition::Dynamic),
            Err(SheetError::NotSwitchable(SheetPosition::Dynamic))
        ));
    }

    #[test]
    fn test_nearest() {
        let set = SwitchablePositions::from([
            SheetPosition::Hidden,
            SheetPosition::Absolute(150.0),
            SheetPosition::Full,
        ]);
        let e = extent();
        assert_eq!(set.nearest(40.0, &e), Some(SheetPosition::Hidden));
        assert_eq!(set.nearest(260.0, &e), Some(SheetPosition::Absolute(150.0)));
        assert_eq!(set.nearest(600.0, &e), Some(SheetPosition::Full));
        assert_eq!(SwitchablePositions::default().nearest(10.0, &e), None);
    }

    #[test]
    fn test_nearest_tie_prefers_first_listed() {
        let set = SwitchablePositions::from([
            SheetPosition::Absolute(100.0),
            SheetPosition::Absolute(200.0),
        ]);
        assert_eq!(
            set.nearest(150.0, &extent()),
            Some(SheetPosition::Absolute(100.0))
        );
    }

    #[test]
    fn test_next_after_cycles_and_skips_hidden() {
        // Deliberately unsorted
        let set = SwitchablePositions::from([
            SheetPosition::Full,
            SheetPosition::Hidden,
            SheetPosition::Absolute(150.0),
        ]);
        let e = extent();
        assert_eq!(
            set.next_after(&SheetPosition::Hidden, &e),
            Some(SheetPosition::Absolute(150.0))
        );
        assert_eq!(
            set.next_after(&SheetPosition::Absolute(150.0), &e),
            Some(SheetPosition::Full)
        );
        assert_eq!(
            set.next_after(&SheetPosition::Full, &e),
            Some(SheetPosition::Absolute(150.0))
        );
    }

    #[test]
    fn test_next_after_with_only_hidden() {
        let set = SwitchablePositions::from([SheetPosition::Hidden]);
        assert_eq!(set.next_after(&SheetPosition::Hidden, &extent()), None);
    }
}
