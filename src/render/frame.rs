use serde::{Deserialize, Serialize};

use crate::render::{PolylinePrimitive, TextPrimitive};

/// Everything a [`FrameRecorder`](crate::render::FrameRecorder) has been
/// asked to draw, in call order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub polylines: Vec<PolylinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty() && self.texts.is_empty()
    }

    /// Label strings in the order they were drawn.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.texts.iter().map(|text| text.text.as_str())
    }
}
