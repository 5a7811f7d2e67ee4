use egui::{Pos2, Rect, Vec2, pos2};

/// Converts a point from surface space `[0,w]x[0,h]` to normalized space
/// `[0,1]x[0,1]`.
///
/// Undefined for a zero-sized surface; stroke creation validates the surface
/// before any point reaches this.
pub fn normalized(point: Pos2, size: Vec2) -> Pos2 {
    pos2(point.x / size.x, point.y / size.y)
}

/// Arithmetic mean of two points, per coordinate.
pub fn midpoint(p1: Pos2, p2: Pos2) -> Pos2 {
    pos2((p1.x + p2.x) * 0.5, (p1.y + p2.y) * 0.5)
}

/// One quadratic Bezier segment of a smoothed stroke path.
///
/// Consecutive segments of a stroke share endpoints: each move event produces
/// a segment from the midpoint of the two older pointer samples to the
/// midpoint of the two newer ones, with the middle sample as control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub start: Pos2,
    pub control: Pos2,
    pub end: Pos2,
}

impl CurveSegment {
    /// Evaluates the curve at `t` in [0, 1].
    pub fn point_at(&self, t: f32) -> Pos2 {
        let u = 1.0 - t;
        let w0 = u * u;
        let w1 = 2.0 * u * t;
        let w2 = t * t;
        pos2(
            w0 * self.start.x + w1 * self.control.x + w2 * self.end.x,
            w0 * self.start.y + w1 * self.control.y + w2 * self.end.y,
        )
    }

    /// Bounding box of the control polygon. Conservative: the curve never
    /// leaves the hull of its three points.
    pub fn bounding_box(&self) -> Rect {
        let mut rect = Rect::from_two_pos(self.start, self.end);
        rect.extend_with(self.control);
        rect
    }

    /// Appends `steps` samples of the curve to `out`, excluding `t = 0`.
    ///
    /// Skipping the start sample keeps a polyline built from consecutive
    /// segments free of duplicate points, since each segment starts where the
    /// previous one ended.
    pub fn flatten_into(&self, steps: usize, out: &mut Vec<Pos2>) {
        let steps = steps.max(1);
        for i in 1..=steps {
            out.push(self.point_at(i as f32 / steps as f32));
        }
    }
}
