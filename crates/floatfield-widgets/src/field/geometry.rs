//! Animation targets derived from the field's bounds.

use ratatui::layout::Rect;

/// Fraction of the field height the label climbs when raised.
pub const LIFT_RATIO: f32 = 0.33;

/// Label scale when raised.
pub const RAISED_SCALE: f32 = 0.7;

/// Where the label sits relative to its resting position.
///
/// `offset_x` assumes the host scales around the label's center; combined
/// with `scale` it keeps the label's left edge fixed. `offset_y` is negative
/// upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelTransform {
    /// Horizontal translation in cells.
    pub offset_x: f32,
    /// Vertical translation in rows.
    pub offset_y: f32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl LabelTransform {
    /// The resting transform.
    pub const IDENTITY: Self = Self {
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Linear blend between `self` (t = 0) and `other` (t = 1).
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            offset_x: mix(self.offset_x, other.offset_x),
            offset_y: mix(self.offset_y, other.offset_y),
            scale: mix(self.scale, other.scale),
        }
    }

    /// How far the label's left edge moves once the center-pivot scale and
    /// the translation are both applied. Zero for every blend of the
    /// resting and raised transforms.
    pub fn left_edge_shift(&self, label_width: u16) -> f32 {
        self.offset_x + (1.0 - self.scale) * f32::from(label_width) / 2.0
    }
}

/// Bounds snapshot used to compute animation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    /// Outer bounds of the field, frame included.
    pub bounds: Rect,
}

impl Geometry {
    /// Snapshot the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    /// Rows the label climbs when fully raised.
    pub fn lift(&self) -> f32 {
        f32::from(self.bounds.height) * LIFT_RATIO
    }

    /// Fully raised transform for a label `label_width` cells wide.
    pub fn raised_transform(&self, label_width: u16) -> LabelTransform {
        LabelTransform {
            offset_x: -(1.0 - RAISED_SCALE) * f32::from(label_width) / 2.0,
            offset_y: -self.lift(),
            scale: RAISED_SCALE,
        }
    }

    /// Transform at raise `progress` (0 = resting, 1 = raised).
    pub fn label_transform(&self, progress: f32, label_width: u16) -> LabelTransform {
        LabelTransform::IDENTITY.lerp(self.raised_transform(label_width), progress.clamp(0.0, 1.0))
    }

    /// Underline length in cells for a width `fraction` of the field.
    pub fn underline_cells(&self, fraction: f32) -> u16 {
        let cells = (f32::from(self.bounds.width) * fraction.clamp(0.0, 1.0)).round();
        (cells as u16).min(self.bounds.width)
    }

    /// Row the label and text occupy while resting: the middle of the
    /// interior.
    pub fn text_row(&self) -> u16 {
        let inner_height = self.bounds.height.saturating_sub(2);
        self.bounds.y + 1 + inner_height.saturating_sub(1) / 2
    }

    /// Row the label is drawn on at raise `progress`, never above the
    /// frame's top edge.
    pub fn label_row(&self, progress: f32, label_width: u16) -> u16 {
        let transform = self.label_transform(progress, label_width);
        let row = f32::from(self.text_row()) + transform.offset_y;
        (row.round().max(0.0) as u16).max(self.bounds.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(height: u16) -> Geometry {
        Geometry::new(Rect::new(0, 0, 30, height))
    }

    #[test]
    fn raised_transform_matches_ratios() {
        let t = geometry(3).raised_transform(10);
        assert!((t.offset_y + 0.99).abs() < 1e-4);
        assert!((t.scale - 0.7).abs() < 1e-6);
        assert!((t.offset_x + 1.5).abs() < 1e-4);
    }

    #[test]
    fn left_edge_is_pinned_throughout() {
        let g = geometry(5);
        for step in 0..=10 {
            let t = g.label_transform(step as f32 / 10.0, 12);
            assert!(t.left_edge_shift(12).abs() < 1e-4);
        }
    }

    #[test]
    fn resting_transform_is_identity() {
        assert_eq!(geometry(3).label_transform(0.0, 8), LabelTransform::IDENTITY);
    }

    #[test]
    fn raised_label_lands_on_top_edge() {
        for height in 3..=6 {
            let g = geometry(height);
            assert_eq!(g.label_row(1.0, 5), 0, "height {height}");
            assert_eq!(g.label_row(0.0, 5), g.text_row(), "height {height}");
        }
    }

    #[test]
    fn text_row_is_interior_middle() {
        assert_eq!(geometry(3).text_row(), 1);
        assert_eq!(geometry(5).text_row(), 2);
        assert_eq!(Geometry::new(Rect::new(4, 10, 20, 3)).text_row(), 11);
    }

    #[test]
    fn underline_scales_with_width() {
        let g = geometry(3);
        assert_eq!(g.underline_cells(0.0), 0);
        assert_eq!(g.underline_cells(0.5), 15);
        assert_eq!(g.underline_cells(1.0), 30);
        assert_eq!(g.underline_cells(3.0), 30);
    }
}
