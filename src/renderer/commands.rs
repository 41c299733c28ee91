//! Draw command definitions recorded by [`PaintContext`](super::PaintContext).

use crate::widgets::{Color, Rect};

/// A single draw operation in absolute coordinates.
///
/// `clip` is the intersection of every clip region that was active when the
/// command was recorded; `None` means unclipped.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill an axis-aligned rectangle (view backgrounds).
    Rect {
        rect: Rect,
        color: Color,
        clip: Option<Rect>,
    },

    /// Fill a circle (used for ripple effects).
    Circle {
        /// Center point
        center: (f32, f32),
        /// Radius in logical pixels
        radius: f32,
        /// Fill color, alpha included
        color: Color,
        clip: Option<Rect>,
    },
}

impl DrawCommand {
    /// Create a circle.
    pub fn circle(center: (f32, f32), radius: f32, color: Color, clip: Option<Rect>) -> Self {
        Self::Circle {
            center,
            radius,
            color,
            clip,
        }
    }

    pub fn clip(&self) -> Option<Rect> {
        match self {
            DrawCommand::Rect { clip, .. } | DrawCommand::Circle { clip, .. } => *clip,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Rect { color, .. } | DrawCommand::Circle { color, .. } => *color,
        }
    }
}
