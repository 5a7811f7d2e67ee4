use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use egui::{Pos2, Rect, Vec2};
use log::{error, warn};

use crate::document::Document;
use crate::export;
use crate::input::PointerTracker;
use crate::orientation::Orientation;
use crate::renderer::Renderer;

/// Orientations offered by the surface selector. Face-up/face-down/unknown
/// all behave like portrait, so the selector lists the four that differ.
const ORIENTATION_CHOICES: [Orientation; 4] = [
    Orientation::Portrait,
    Orientation::PortraitUpsideDown,
    Orientation::LandscapeLeft,
    Orientation::LandscapeRight,
];

pub struct DrawingApp {
    document: Document,
    renderer: Renderer,
    tracker: PointerTracker,
    /// Simulated device orientation. On a handheld this would come from the
    /// platform; here the user picks it to exercise re-projection.
    orientation: Orientation,
    export_requested: bool,
}

impl Default for DrawingApp {
    fn default() -> Self {
        Self {
            document: Document::new(),
            renderer: Renderer::new(),
            tracker: PointerTracker::new(),
            orientation: Orientation::Portrait,
            export_requested: false,
        }
    }
}

impl DrawingApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn controls_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Brush");
                self.renderer.settings_panel(ui);

                ui.separator();

                ui.heading("Surface");
                egui::ComboBox::from_label("Orientation")
                    .selected_text(self.orientation.label())
                    .show_ui(ui, |ui| {
                        for orientation in ORIENTATION_CHOICES {
                            ui.selectable_value(
                                &mut self.orientation,
                                orientation,
                                orientation.label(),
                            );
                        }
                    });

                ui.separator();

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(self.document.can_undo(), egui::Button::new("Undo"))
                        .clicked()
                    {
                        if let Err(err) = self.document.undo() {
                            warn!("undo ignored: {err}");
                        }
                    }
                    if ui
                        .add_enabled(self.document.can_redo(), egui::Button::new("Redo"))
                        .clicked()
                    {
                        if let Err(err) = self.document.redo() {
                            warn!("redo ignored: {err}");
                        }
                    }
                });

                if ui.button("Clear").clicked() {
                    self.document.clear();
                }

                if ui
                    .add_enabled(!self.document.is_empty(), egui::Button::new("Export PNG"))
                    .clicked()
                {
                    // Deferred to the canvas pass, where the current surface
                    // size is known.
                    self.export_requested = true;
                }

                ui.separator();
                ui.label(format!(
                    "Strokes: {}",
                    self.document.current_strokes().len()
                ));
            });
    }

    fn handle_pointer(&mut self, response: &egui::Response, canvas: Rect) {
        // Strokes are recorded in canvas-local surface space.
        let local = |pos: Pos2| pos - canvas.min.to_vec2();

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                match self.document.begin_stroke(
                    self.orientation,
                    canvas.size(),
                    self.renderer.brush_color(),
                    self.renderer.brush_width(),
                ) {
                    Ok(()) => self.tracker.begin(local(pos)),
                    Err(err) => warn!("stroke rejected: {err}"),
                }
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (before_previous, previous, current) = self.tracker.advance(local(pos));
                if let Err(err) =
                    self.document
                        .continue_stroke(before_previous, previous, current)
                {
                    warn!("move event dropped: {err}");
                }
            }
        }

        if response.drag_stopped() {
            // Feed the release position as a final move so the stroke reaches
            // all the way to where the pointer lifted.
            if let Some(pos) = response.interact_pointer_pos() {
                let (before_previous, previous, current) = self.tracker.advance(local(pos));
                let _ = self
                    .document
                    .continue_stroke(before_previous, previous, current);
            }
            self.document.end_stroke();
            self.tracker.finish();
        }
    }

    fn export_snapshot(&self, size: Vec2) {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let path = PathBuf::from(format!("drawing_{stamp}.png"));
        if let Err(err) = export::save_png(&self.document, self.orientation, size, &path) {
            error!("export failed: {err}");
        }
    }
}

impl eframe::App for DrawingApp {
    /// Called each time the UI needs repainting, which may be many times per
    /// second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controls_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas = response.rect;

            self.handle_pointer(&response, canvas);

            // Orientation and size are sampled fresh every pass; the strokes
            // themselves re-project against whatever is current.
            self.renderer
                .render(&painter, &self.document, self.orientation, canvas);

            if self.export_requested {
                self.export_requested = false;
                self.export_snapshot(canvas.size());
            }
        });
    }
}
