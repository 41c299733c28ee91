//! Static configuration for the ripple effect.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use material_layout::prelude::*;
//!
//! let config = RippleConfig::new()
//!     .color(Color::from_hex(0x3F51B5))
//!     .duration(Duration::from_millis(300))
//!     .alpha(200)
//!     .scale(1.0);
//! assert_eq!(config.steps(), 30);
//! ```

use std::time::Duration;

use crate::widgets::Color;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(10);
pub const DEFAULT_ALPHA: u8 = 255;
pub const DEFAULT_SCALE: f32 = 0.8;

/// Configuration for ripple effect animation.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleConfig {
    /// Fill color of the ripple; its own alpha is replaced by `alpha`
    pub color: Color,
    /// Total animation time
    pub duration: Duration,
    /// Delay between two frames
    pub frame_interval: Duration,
    /// Opacity at the start of a gesture and at rest (0-255)
    pub alpha: u8,
    /// Maximum radius as a fraction of half the touched view's longest side
    pub scale: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            color: Color::LIGHT_GRAY,
            duration: DEFAULT_DURATION,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            alpha: DEFAULT_ALPHA,
            scale: DEFAULT_SCALE,
        }
    }
}

impl RippleConfig {
    /// Create a new ripple config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ripple config with a custom color.
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the delay between frames. Sub-millisecond intervals are treated as 1 ms.
    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Negative and non-finite scales are clamped to 0.
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
        self
    }

    /// Frame interval in whole milliseconds, never 0.
    pub fn frame_interval_ms(&self) -> u128 {
        self.frame_interval.as_millis().max(1)
    }

    /// Delay scheduled between frames: the interval in whole milliseconds, never 0.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.frame_interval_ms()).unwrap_or(u64::MAX))
    }

    /// Number of frames in one gesture: `duration / frame_interval`, at least 1.
    pub fn steps(&self) -> u32 {
        let steps = self.duration.as_millis() / self.frame_interval_ms();
        u32::try_from(steps).unwrap_or(u32::MAX).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RippleConfig::default();
        assert_eq!(config.color, Color::LIGHT_GRAY);
        assert_eq!(config.duration, Duration::from_millis(200));
        assert_eq!(config.frame_interval, Duration::from_millis(10));
        assert_eq!(config.alpha, 255);
        assert_eq!(config.scale, 0.8);
        assert_eq!(config.steps(), 20);
    }

    #[test]
    fn test_steps_truncate() {
        let config = RippleConfig::new()
            .duration(Duration::from_millis(205))
            .frame_interval(Duration::from_millis(10));
        assert_eq!(config.steps(), 20);
    }

    #[test]
    fn test_steps_never_zero() {
        let short = RippleConfig::new()
            .duration(Duration::from_millis(5))
            .frame_interval(Duration::from_millis(10));
        assert_eq!(short.steps(), 1);

        let zero_interval = RippleConfig::new().frame_interval(Duration::ZERO);
        assert_eq!(zero_interval.frame_interval_ms(), 1);
        assert_eq!(zero_interval.steps(), 200);
        assert_eq!(zero_interval.frame_delay(), Duration::from_millis(1));

        let zero_duration = RippleConfig::new().duration(Duration::ZERO);
        assert_eq!(zero_duration.steps(), 1);
    }

    #[test]
    fn test_scale_clamped() {
        assert_eq!(RippleConfig::new().scale(-1.0).scale, 0.0);
        assert_eq!(RippleConfig::new().scale(f32::NAN).scale, 0.0);
        assert_eq!(RippleConfig::new().scale(1.5).scale, 1.5);
    }

    #[test]
    fn test_with_color_keeps_other_defaults() {
        let config = RippleConfig::with_color(Color::BLACK);
        assert_eq!(config.color, Color::BLACK);
        assert_eq!(config.alpha, DEFAULT_ALPHA);
    }
}
