use thiserror::Error;

/// Errors that can occur while operating on the stroke log
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DrawError {
    /// A stroke was requested on a surface with a zero dimension, which makes
    /// point normalization undefined
    #[error("cannot draw on a degenerate surface ({width}x{height})")]
    DegenerateSurface { width: f32, height: f32 },

    /// A move event arrived while no stroke was in progress; the event source
    /// skipped the pointer-down
    #[error("no stroke in progress")]
    NoActiveStroke,

    /// Undo requested with nothing drawn
    #[error("nothing to undo")]
    EmptyHistory,

    /// Redo requested with nothing previously undone
    #[error("nothing to redo")]
    EmptyRedoHistory,
}

/// Result type for stroke log operations
pub type DrawResult<T> = Result<T, DrawError>;
