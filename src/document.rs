use egui::{Color32, Pos2, Rect, Vec2};
use log::debug;

use crate::error::{DrawError, DrawResult};
use crate::orientation::Orientation;
use crate::stroke::Stroke;

/// Ordered log of strokes for one drawing surface, with undo/redo history.
///
/// Owns every stroke exclusively; renderers only borrow the list for the
/// duration of a frame. While a stroke is in progress it is always the last
/// element of `strokes`, and once the pointer lifts the log stops routing move
/// events to it, so finished strokes never change.
///
/// All operations are synchronous and run on the surface's event loop; the
/// three fields form one unit of mutation and are never handed out for
/// concurrent access.
#[derive(Debug, Default)]
pub struct Document {
    strokes: Vec<Stroke>,
    redo_stack: Vec<Stroke>,
    /// True while the last element of `strokes` is still being drawn.
    active: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new stroke in the given surface configuration and brush style.
    ///
    /// Fails with `DegenerateSurface` when either dimension is zero. Starting
    /// a stroke discards any divergent redo history. If a stroke is somehow
    /// still open (the event source skipped a pointer-up), it is closed first.
    pub fn begin_stroke(
        &mut self,
        orientation: Orientation,
        size: Vec2,
        color: Color32,
        width: f32,
    ) -> DrawResult<()> {
        let stroke = Stroke::new(orientation, size, color, width)?;
        self.strokes.push(stroke);
        self.active = true;
        self.redo_stack.clear();
        debug!("stroke begun, {} in log", self.strokes.len());
        Ok(())
    }

    /// Routes a move event to the stroke in progress.
    ///
    /// Fails with `NoActiveStroke` when no stroke is open — a caller protocol
    /// violation; the caller should discard the event. Returns the normalized
    /// bounding box of the appended segment, or `None` when the event was a
    /// degenerate (coincident-point) no-op.
    pub fn continue_stroke(
        &mut self,
        before_previous: Pos2,
        previous: Pos2,
        current: Pos2,
    ) -> DrawResult<Option<Rect>> {
        if !self.active {
            return Err(DrawError::NoActiveStroke);
        }
        let stroke = self.strokes.last_mut().ok_or(DrawError::NoActiveStroke)?;
        Ok(stroke.extend(before_previous, previous, current))
    }

    /// Closes the stroke in progress. The stroke stays in the log; no-op while
    /// idle.
    pub fn end_stroke(&mut self) {
        if self.active {
            debug!("stroke ended");
        }
        self.active = false;
    }

    /// Deletes all strokes. Previously undone strokes stay restorable; a
    /// following `undo` fails with `EmptyHistory`.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.active = false;
        debug!("drawing cleared");
    }

    /// Moves the most recent stroke onto the redo stack. Undoing the stroke
    /// currently being drawn also ends it.
    pub fn undo(&mut self) -> DrawResult<()> {
        let stroke = self.strokes.pop().ok_or(DrawError::EmptyHistory)?;
        self.redo_stack.push(stroke);
        self.active = false;
        Ok(())
    }

    /// Restores the most recently undone stroke (LIFO, mirroring `undo`).
    /// A redo while a stroke is open closes it first, so the restored stroke
    /// is never mistaken for the one being drawn.
    pub fn redo(&mut self) -> DrawResult<()> {
        let stroke = self.redo_stack.pop().ok_or(DrawError::EmptyRedoHistory)?;
        self.active = false;
        self.strokes.push(stroke);
        Ok(())
    }

    /// The strokes to render, in draw order. Undone strokes are not included.
    pub fn current_strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// True if the user has not drawn anything or has cleared the surface.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
