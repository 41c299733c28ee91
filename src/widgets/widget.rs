use crate::renderer::Canvas;
use crate::scheduler::FrameScheduler;
use crate::tree::ViewTree;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Replace the alpha channel with an 8-bit opacity (0 = transparent, 255 = opaque).
    pub fn with_alpha_u8(self, alpha: u8) -> Self {
        Self {
            a: f32::from(alpha) / 255.0,
            ..self
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const LIGHT_GRAY: Color = Color::from_hex(0xCCCCCC);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect from its left, top, right and bottom edges.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: (right - left).max(0.0),
            height: (bottom - top).max(0.0),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Overlapping region of two rects. Disjoint rects yield an empty rect.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::from_ltrb(left, top, right.max(left), bottom.max(top))
    }

    /// Check if a point lies within the rect. All four edges are inclusive.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Touch input delivered by the host, in the receiving view's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// First finger went down
    TouchDown { x: f32, y: f32 },
    /// Finger moved while down
    TouchMove { x: f32, y: f32 },
    /// Finger lifted
    TouchUp { x: f32, y: f32 },
    /// Gesture was taken over by someone else
    TouchCancel,
}

/// Hooks a view group exposes to its host.
///
/// The host calls `intercept_touch` for every touch event before children see
/// it, and `dispatch_draw` once per draw pass of the group.
pub trait Widget {
    /// Observe a touch event on its way to the children.
    /// Returning `true` steals the gesture from the children.
    fn intercept_touch(
        &mut self,
        tree: &ViewTree,
        event: &Event,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        let _ = (tree, event, scheduler);
        false
    }

    /// Draw the group's children and anything layered over them.
    fn dispatch_draw(
        &mut self,
        tree: &ViewTree,
        ctx: &mut dyn Canvas,
        scheduler: &mut dyn FrameScheduler,
    );

    /// Whether the widget still needs frames to finish what it is showing.
    fn is_animating(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0xFF0000);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);

        let gray = Color::LIGHT_GRAY;
        assert_eq!(gray.r, 204.0 / 255.0);
        assert_eq!(gray.g, gray.b);
    }

    #[test]
    fn test_color_with_alpha_u8() {
        let color = Color::rgb(0.2, 0.4, 0.6).with_alpha_u8(255);
        assert_eq!(color.a, 1.0);
        assert_eq!(color.r, 0.2);

        let faded = color.with_alpha_u8(0);
        assert_eq!(faded.a, 0.0);
        assert_eq!(faded.b, 0.6);
    }

    #[test]
    fn test_rect_from_ltrb() {
        let rect = Rect::from_ltrb(10.0, 20.0, 110.0, 70.0);
        assert_eq!(rect, Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);

        // Inverted edges collapse to an empty rect
        let empty = Rect::from_ltrb(50.0, 50.0, 10.0, 10.0);
        assert_eq!(empty.width, 0.0);
        assert_eq!(empty.height, 0.0);
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.center(), (60.0, 45.0));
    }

    #[test]
    fn test_rect_offset() {
        let rect = Rect::new(10.0, 20.0, 100.0, 200.0);
        let offset_rect = rect.offset(5.0, 10.0);
        assert_eq!(offset_rect.x, 15.0);
        assert_eq!(offset_rect.y, 30.0);
        assert_eq!(offset_rect.width, 100.0);
        assert_eq!(offset_rect.height, 200.0);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        // Inside
        assert!(rect.contains(50.0, 40.0));

        // Edges are inclusive on every side
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(110.0, 70.0));

        // Outside
        assert!(!rect.contains(5.0, 40.0));
        assert!(!rect.contains(150.0, 40.0));
        assert!(!rect.contains(50.0, 10.0));
        assert!(!rect.contains(50.0, 100.0));
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 25.0, 100.0, 50.0);
        assert_eq!(a.intersection(&b), Rect::new(50.0, 25.0, 50.0, 50.0));

        let far = Rect::new(200.0, 200.0, 10.0, 10.0);
        let empty = a.intersection(&far);
        assert_eq!(empty.width, 0.0);
        assert_eq!(empty.height, 0.0);
    }
}
