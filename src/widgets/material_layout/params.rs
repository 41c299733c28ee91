use crate::widgets::RippleConfig;

/// Radius every ripple starts from.
pub const BASE_RADIUS: i32 = 10;

/// Alpha a ripple fades toward over one gesture.
pub const ALPHA_FLOOR: i32 = 100;

/// Per-gesture animation parameters derived from the touched view's size.
///
/// All values use integer arithmetic with truncating division, so a ripple
/// advances in whole pixels and whole alpha units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RippleParams {
    pub max_radius: i32,
    pub radius_step: i32,
    pub alpha_step: i32,
    pub steps: u32,
}

impl RippleParams {
    pub fn derive(width: f32, height: f32, config: &RippleConfig) -> Self {
        let longest = width.max(height).max(0.0) as i32;
        let max_radius = ((longest / 2) as f32 * config.scale) as i32;

        let steps = config.steps();
        let divisor = i32::try_from(steps).unwrap_or(i32::MAX);

        let mut radius_step = (max_radius - BASE_RADIUS) / divisor;
        if max_radius > BASE_RADIUS {
            // A zero step would never reach the target radius
            radius_step = radius_step.max(1);
        }
        let alpha_step = (i32::from(config.alpha) - ALPHA_FLOOR) / divisor;

        Self {
            max_radius,
            radius_step,
            alpha_step,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_max_radius_from_longest_side() {
        let params = RippleParams::derive(100.0, 50.0, &RippleConfig::default());
        assert_eq!(params.max_radius, 40);

        let tall = RippleParams::derive(50.0, 100.0, &RippleConfig::default());
        assert_eq!(tall.max_radius, 40);
    }

    #[test]
    fn test_half_side_truncates_before_scaling() {
        // 101 / 2 = 50 (integer), 50 * 0.8 = 40
        let params = RippleParams::derive(101.0, 10.0, &RippleConfig::default());
        assert_eq!(params.max_radius, 40);

        // 99 / 2 = 49, 49 * 0.8 = 39.2 -> 39
        let params = RippleParams::derive(99.0, 10.0, &RippleConfig::default());
        assert_eq!(params.max_radius, 39);
    }

    #[test]
    fn test_steps_from_default_timing() {
        let params = RippleParams::derive(100.0, 50.0, &RippleConfig::default());
        assert_eq!(params.steps, 20);
        assert_eq!(params.radius_step, 1);
        assert_eq!(params.alpha_step, 7);
    }

    #[test]
    fn test_single_step_when_duration_shorter_than_frame() {
        let config = RippleConfig::new()
            .duration(Duration::from_millis(5))
            .frame_interval(Duration::from_millis(10));
        let params = RippleParams::derive(100.0, 50.0, &config);
        assert_eq!(params.steps, 1);
        assert_eq!(params.radius_step, 30);
        assert_eq!(params.alpha_step, 155);
    }

    #[test]
    fn test_radius_step_at_least_one_when_growing() {
        // (24 - 10) / 20 truncates to 0
        let params = RippleParams::derive(62.0, 10.0, &RippleConfig::default());
        assert_eq!(params.max_radius, 24);
        assert_eq!(params.radius_step, 1);
    }

    #[test]
    fn test_small_view_does_not_grow() {
        let params = RippleParams::derive(10.0, 10.0, &RippleConfig::default());
        assert_eq!(params.max_radius, 4);
        assert!(params.radius_step <= 0);
    }

    #[test]
    fn test_low_alpha_gives_negative_step() {
        let config = RippleConfig::new().alpha(60);
        let params = RippleParams::derive(100.0, 50.0, &config);
        assert_eq!(params.alpha_step, -2);
    }
}
