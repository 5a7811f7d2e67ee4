/// Physical orientation of the surface the user is drawing on.
///
/// The set is closed: these are the orientations a device can physically
/// report. Face-up, face-down and unknown carry no rotation of their own and
/// behave like portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Unknown,
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
}

impl Orientation {
    /// The angle, in degrees, content must be rotated by to compensate for
    /// this orientation.
    pub fn angle_degrees(self) -> f32 {
        match self {
            Orientation::LandscapeLeft => 270.0,
            Orientation::LandscapeRight => 90.0,
            Orientation::PortraitUpsideDown => 180.0,
            _ => 0.0,
        }
    }

    pub fn is_portrait(self) -> bool {
        !matches!(
            self,
            Orientation::LandscapeLeft | Orientation::LandscapeRight
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Unknown => "Unknown",
            Orientation::Portrait => "Portrait",
            Orientation::PortraitUpsideDown => "Portrait (upside down)",
            Orientation::LandscapeLeft => "Landscape left",
            Orientation::LandscapeRight => "Landscape right",
            Orientation::FaceUp => "Face up",
            Orientation::FaceDown => "Face down",
        }
    }
}

/// Degrees in [0, 360) that content recorded under `source` must be rotated by
/// to keep its on-surface meaning under `current`.
pub fn rotation_delta_degrees(source: Orientation, current: Orientation) -> f32 {
    (current.angle_degrees() - source.angle_degrees()).rem_euclid(360.0)
}
