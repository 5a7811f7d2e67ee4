use std::path::Path;

use egui::{Color32, Pos2, Vec2, vec2};
use image::{Rgba, RgbaImage};
use log::info;
use thiserror::Error;

use crate::document::Document;
use crate::geometry::CurveSegment;
use crate::orientation::Orientation;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Errors that can occur while producing or saving a snapshot
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot snapshot a degenerate surface ({width}x{height})")]
    DegenerateSurface { width: u32, height: u32 },

    #[error("failed to write snapshot: {0}")]
    Write(#[from] image::ImageError),
}

/// Result type for snapshot operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Rasterizes the current strokes at the given surface configuration.
///
/// A pure function of the render contract: every stroke is re-projected into
/// the requested orientation and size, then stroked with round caps onto a
/// white background. Requires no state beyond the stroke log itself.
pub fn snapshot(
    document: &Document,
    orientation: Orientation,
    size: Vec2,
) -> ExportResult<RgbaImage> {
    let width = size.x.round().max(0.0) as u32;
    let height = size.y.round().max(0.0) as u32;
    if width == 0 || height == 0 {
        return Err(ExportError::DegenerateSurface { width, height });
    }

    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);
    let surface = vec2(width as f32, height as f32);

    for stroke in document.current_strokes() {
        let color = to_rgba(stroke.color());
        let radius = (stroke.width() / 2.0).max(0.5);
        for segment in stroke.transformed_path(orientation, surface) {
            stamp_segment(&mut image, &segment, radius, color);
        }
    }

    Ok(image)
}

/// Rasterizes the current strokes and saves them as a PNG at `path`.
pub fn save_png(
    document: &Document,
    orientation: Orientation,
    size: Vec2,
    path: &Path,
) -> ExportResult<()> {
    let image = snapshot(document, orientation, size)?;
    image.save(path)?;
    info!(
        "saved {}x{} snapshot to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

/// Stamps overlapping discs along the curve, which gives round caps and round
/// joins in one stroke.
fn stamp_segment(image: &mut RgbaImage, segment: &CurveSegment, radius: f32, color: Rgba<u8>) {
    // Control-polygon length bounds the curve length from above.
    let approx_length = (segment.control - segment.start).length()
        + (segment.end - segment.control).length();
    let spacing = (radius * 0.5).max(0.5);
    let steps = ((approx_length / spacing).ceil() as usize).max(1);

    for i in 0..=steps {
        let point = segment.point_at(i as f32 / steps as f32);
        stamp_disc(image, point, radius, color);
    }
}

fn stamp_disc(image: &mut RgbaImage, center: Pos2, radius: f32, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    let min_x = (center.x - radius).floor().max(0.0) as u32;
    let min_y = (center.y - radius).floor().max(0.0) as u32;
    let max_x = ((center.x + radius).ceil() as i64).min(width as i64 - 1);
    let max_y = ((center.y + radius).ceil() as i64).min(height as i64 - 1);
    if max_x < min_x as i64 || max_y < min_y as i64 {
        return;
    }

    let radius_sq = radius * radius;
    for y in min_y..=max_y as u32 {
        for x in min_x..=max_x as u32 {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= radius_sq {
                image.put_pixel(x, y, color);
            }
        }
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), color.a()])
}
