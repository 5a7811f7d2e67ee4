use egui::{Color32, Painter, Rect, Shape, Slider};

use crate::document::Document;
use crate::orientation::Orientation;
use crate::stroke::Stroke;

/// Line samples per curve segment when flattening for display.
const SEGMENT_SAMPLES: usize = 8;

/// Draws the stroke log onto an egui painter and owns the brush settings.
///
/// The renderer asks every stroke for its path re-projected into the current
/// surface configuration on every frame; the configuration is supplied by the
/// caller and never cached here.
#[derive(Debug)]
pub struct Renderer {
    brush_color: Color32,
    brush_width: f32,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            brush_color: Color32::BLUE,
            brush_width: 8.0,
        }
    }

    pub fn brush_color(&self) -> Color32 {
        self.brush_color
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.brush_color = color;
    }

    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    pub fn set_brush_width(&mut self, width: f32) {
        self.brush_width = width;
    }

    /// Renders the brush controls
    pub fn settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Color:");
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut self.brush_color,
                egui::color_picker::Alpha::Opaque,
            );
        });

        ui.horizontal(|ui| {
            ui.label("Width:");
            ui.add(Slider::new(&mut self.brush_width, 1.0..=32.0));
        });
    }

    /// Renders every stroke re-projected into the current surface
    /// configuration, inside `canvas`.
    pub fn render(
        &self,
        painter: &Painter,
        document: &Document,
        orientation: Orientation,
        canvas: Rect,
    ) {
        for stroke in document.current_strokes() {
            draw_stroke(painter, stroke, orientation, canvas);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_stroke(painter: &Painter, stroke: &Stroke, orientation: Orientation, canvas: Rect) {
    let path = stroke.transformed_path(orientation, canvas.size());
    let Some(first) = path.first() else {
        return;
    };

    let mut points = Vec::with_capacity(path.len() * SEGMENT_SAMPLES + 1);
    points.push(first.start);
    for segment in &path {
        segment.flatten_into(SEGMENT_SAMPLES, &mut points);
    }

    // Transformed points are relative to the canvas origin.
    let offset = canvas.min.to_vec2();
    for point in &mut points {
        *point += offset;
    }

    // egui feathers line ends square; cap both ends with discs of the stroke
    // radius to get round caps.
    let radius = stroke.width() / 2.0;
    if let (Some(&head), Some(&tail)) = (points.first(), points.last()) {
        painter.circle_filled(head, radius, stroke.color());
        painter.circle_filled(tail, radius, stroke.color());
    }

    painter.add(Shape::line(
        points,
        egui::Stroke::new(stroke.width(), stroke.color()),
    ));
}
