use egui::Pos2;

/// Sliding three-point window over the pointer positions of one stroke.
///
/// The stroke log consumes (before-previous, previous, current) triples, one
/// per move event. Pointer events only carry the current position, so this
/// tracker keeps the two older samples. The first move of a stroke has no
/// before-previous sample yet; the window substitutes the previous point,
/// which the stroke model treats as a zero-length lead-in.
#[derive(Debug, Default)]
pub struct PointerTracker {
    previous: Option<Pos2>,
    before_previous: Option<Pos2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a stroke at the pointer-down position.
    pub fn begin(&mut self, position: Pos2) {
        self.previous = Some(position);
        self.before_previous = None;
    }

    /// Advances the window with the next pointer position and returns the
    /// triple to feed to the stroke log.
    pub fn advance(&mut self, position: Pos2) -> (Pos2, Pos2, Pos2) {
        let previous = self.previous.unwrap_or(position);
        let before_previous = self.before_previous.unwrap_or(previous);
        self.before_previous = Some(previous);
        self.previous = Some(position);
        (before_previous, previous, position)
    }

    /// Stops tracking; the next stroke starts from a fresh window.
    pub fn finish(&mut self) {
        self.previous = None;
        self.before_previous = None;
    }
}
