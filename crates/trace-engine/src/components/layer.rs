/// Render layer: controls draw order for entities.
///
/// Layers are drawn back-to-front: Background first, Ui last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    /// Backdrop and the ghost outline of the letter.
    Background = 0,
    /// Filled strokes.
    Strokes = 1,
    /// Dots and other traceable markers.
    #[default]
    Markers = 2,
    /// Hand prompt and pointer-following guides.
    Guides = 3,
    /// Buttons and banner text.
    Ui = 4,
}

impl RenderLayer {
    pub const COUNT: usize = 5;

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Background),
            1 => Some(Self::Strokes),
            2 => Some(Self::Markers),
            3 => Some(Self::Guides),
            4 => Some(Self::Ui),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
