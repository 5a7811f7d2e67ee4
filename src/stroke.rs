use egui::emath::Rot2;
use egui::{Color32, Pos2, Rect, Vec2, pos2};

use crate::error::{DrawError, DrawResult};
use crate::geometry::{self, CurveSegment};
use crate::orientation::{self, Orientation};

/// Squared distance (in normalized space) under which pointer samples are
/// treated as coincident. Corresponds to a thousandth of the surface per axis.
const COINCIDENT_DIST_SQ: f32 = 1e-6;

/// A single smoothed stroke, tagged with the orientation and size the surface
/// had when the user started drawing it.
///
/// Every point is normalized to [0,1]x[0,1] against `source_size` at write
/// time, and the stored path never changes after the pointer lifts. That makes
/// re-projection commutative with any sequence of later resizes and rotations:
/// each `transformed_path` query starts over from the same recorded points, so
/// no drift accumulates. Rotation is always about (0.5, 0.5), the center of
/// normalized space.
#[derive(Debug, Clone)]
pub struct Stroke {
    source_orientation: Orientation,
    source_size: Vec2,
    color: Color32,
    width: f32,
    /// Normalized path, grown one segment per move event. Mutated only through
    /// `extend`.
    segments: Vec<CurveSegment>,
}

impl Stroke {
    /// Creates an empty stroke for a surface of the given size and
    /// orientation. Both dimensions must be strictly positive.
    pub fn new(
        source_orientation: Orientation,
        source_size: Vec2,
        color: Color32,
        width: f32,
    ) -> DrawResult<Self> {
        if source_size.x <= 0.0 || source_size.y <= 0.0 {
            return Err(DrawError::DegenerateSurface {
                width: source_size.x,
                height: source_size.y,
            });
        }

        Ok(Self {
            source_orientation,
            source_size,
            color,
            width,
            segments: Vec::new(),
        })
    }

    pub fn source_orientation(&self) -> Orientation {
        self.source_orientation
    }

    pub fn source_size(&self) -> Vec2 {
        self.source_size
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// The recorded path in normalized space.
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Appends one smoothed segment from the latest three pointer positions,
    /// given in surface space at the stroke's source sizing.
    ///
    /// The segment runs from the midpoint of the two older samples to the
    /// midpoint of the two newer ones, using the middle sample as control
    /// point. The first move event of a stroke has no before-previous sample;
    /// callers pass the previous point again in its place, which yields a
    /// zero-length lead-in.
    ///
    /// Returns the bounding box of the appended segment in normalized space,
    /// for minimal-redraw bookkeeping. When all three points coincide there is
    /// nothing to draw and nothing is appended; that case returns `None`.
    pub fn extend(
        &mut self,
        before_previous: Pos2,
        previous: Pos2,
        current: Pos2,
    ) -> Option<Rect> {
        let before_previous = geometry::normalized(before_previous, self.source_size);
        let previous = geometry::normalized(previous, self.source_size);
        let current = geometry::normalized(current, self.source_size);

        let coincident = |a: Pos2, b: Pos2| (a - b).length_sq() <= COINCIDENT_DIST_SQ;
        if coincident(before_previous, previous) && coincident(previous, current) {
            return None;
        }

        let segment = CurveSegment {
            start: geometry::midpoint(before_previous, previous),
            control: previous,
            end: geometry::midpoint(previous, current),
        };
        self.segments.push(segment);
        Some(segment.bounding_box())
    }

    /// Re-projects the recorded path into the given surface configuration,
    /// yielding segments in surface space.
    ///
    /// Every stored point is rotated about (0.5, 0.5) by the delta between the
    /// recorded orientation and `orientation`, then scaled by the surface
    /// dimensions. Pure query: the stroke is never modified, so this can be
    /// asked any number of times with different configurations.
    pub fn transformed_path(&self, orientation: Orientation, size: Vec2) -> Vec<CurveSegment> {
        let delta =
            orientation::rotation_delta_degrees(self.source_orientation, orientation);
        let rotation = Rot2::from_angle(delta.to_radians());
        let center = pos2(0.5, 0.5);

        let project = |p: Pos2| -> Pos2 {
            let rotated = center + rotation * (p - center);
            pos2(rotated.x * size.x, rotated.y * size.y)
        };

        self.segments
            .iter()
            .map(|segment| CurveSegment {
                start: project(segment.start),
                control: project(segment.control),
                end: project(segment.end),
            })
            .collect()
    }
}
