use super::params::{RippleParams, BASE_RADIUS};
use crate::widgets::Rect;

/// What a ripple is drawn over: set together on touch-down, cleared together on reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleTarget {
    /// Center of the touched view, in container coordinates
    pub center: (f32, f32),
    /// Frame of the touched view, in container coordinates
    pub clip: Rect,
    pub params: RippleParams,
}

/// One frame's worth of drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleFrame {
    pub center: (f32, f32),
    pub clip: Rect,
    pub radius: i32,
    /// Already clamped to a drawable opacity
    pub alpha: u8,
}

/// Ripple animation state for touch feedback
#[derive(Debug, Clone, PartialEq)]
pub struct RippleState {
    target: Option<RippleTarget>,
    radius: i32,
    alpha: i32,
    resting_alpha: i32,
}

impl RippleState {
    pub fn new(resting_alpha: u8) -> Self {
        Self {
            target: None,
            radius: BASE_RADIUS,
            alpha: i32::from(resting_alpha),
            resting_alpha: i32::from(resting_alpha),
        }
    }

    /// Aim the ripple at a touched view.
    ///
    /// Radius and alpha keep their current values, so a touch during a running
    /// animation continues from wherever that animation had reached.
    pub fn start(&mut self, target: RippleTarget) {
        self.target = Some(target);
    }

    /// Check if ripple is currently active
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&RippleTarget> {
        self.target.as_ref()
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn alpha(&self) -> i32 {
        self.alpha
    }

    /// Step radius and alpha once and return the frame to draw.
    /// Returns `None` when idle.
    pub fn advance(&mut self) -> Option<RippleFrame> {
        let target = self.target?;
        self.radius += target.params.radius_step;
        self.alpha -= target.params.alpha_step;

        Some(RippleFrame {
            center: target.center,
            clip: target.clip,
            radius: self.radius,
            alpha: self.alpha.clamp(0, 255) as u8,
        })
    }

    /// The radius has reached the target's maximum.
    pub fn is_finished(&self) -> bool {
        self.target
            .is_some_and(|target| self.radius >= target.params.max_radius)
    }

    /// Reset ripple state
    pub fn reset(&mut self) {
        self.target = None;
        self.radius = BASE_RADIUS;
        self.alpha = self.resting_alpha;
    }
}
