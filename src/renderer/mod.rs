pub mod commands;

pub use commands::DrawCommand;

use crate::widgets::{Color, Rect};

/// Drawing surface handed to widgets during a draw pass.
///
/// Hosts implement this over their own canvas. Clips nest: each `push_clip`
/// narrows the drawable area until the matching `pop_clip`.
pub trait Canvas {
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
}

/// A [`Canvas`] that records draw commands instead of rasterizing them.
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
    /// Clip stack for clipping children to container bounds
    clip_stack: Vec<Rect>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new PaintContext with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
            clip_stack: Vec::with_capacity(4),
        }
    }

    /// Clear all buffers for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded circles only, in draw order.
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Circle { .. }))
    }

    /// Compute the intersection of all clip regions in the stack.
    fn current_clip(&self) -> Option<Rect> {
        let mut stack = self.clip_stack.iter();
        let first = *stack.next()?;
        Some(stack.fold(first, |acc, rect| acc.intersection(rect)))
    }
}

impl Canvas for PaintContext {
    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        let clip = self.current_clip();
        self.commands.push(DrawCommand::Rect { rect, color, clip });
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let clip = self.current_clip();
        self.commands
            .push(DrawCommand::circle((cx, cy), radius, color, clip));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclipped_draws() {
        let mut ctx = PaintContext::new();
        ctx.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert_eq!(ctx.commands().len(), 1);
        assert_eq!(ctx.commands()[0].clip(), None);
    }

    #[test]
    fn test_nested_clips_intersect() {
        let mut ctx = PaintContext::new();
        ctx.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        ctx.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        ctx.draw_circle(60.0, 60.0, 5.0, Color::BLACK);
        ctx.pop_clip();
        ctx.draw_circle(10.0, 10.0, 5.0, Color::BLACK);
        ctx.pop_clip();
        ctx.draw_circle(0.0, 0.0, 5.0, Color::BLACK);

        let clips: Vec<_> = ctx.circles().map(DrawCommand::clip).collect();
        assert_eq!(
            clips,
            vec![
                Some(Rect::new(50.0, 50.0, 50.0, 50.0)),
                Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
                None,
            ]
        );
    }

    #[test]
    fn test_clear_resets_clip_stack() {
        let mut ctx = PaintContext::with_capacity(8);
        ctx.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        ctx.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        ctx.clear();
        assert!(ctx.is_empty());

        ctx.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert_eq!(ctx.commands()[0].clip(), None);
    }
}
