//! A container that answers touches with a ripple over the touched child.
//!
//! Any leaf below a `MaterialLayout` gets the effect; children need no
//! cooperation. On touch-down the layout finds the leaf under the finger,
//! derives the ripple's size and speed from that leaf's frame, and asks the
//! host for a redraw. Each following draw pass grows and fades the ripple by
//! one step and asks for another redraw after the frame interval, until the
//! ripple reaches its maximum radius.
//!
//! # Example
//! ```
//! use material_layout::prelude::*;
//!
//! let mut tree = ViewTree::new();
//! let root = tree.add_root(Rect::new(0.0, 0.0, 320.0, 240.0));
//! tree.add_leaf(root, Rect::new(20.0, 20.0, 100.0, 50.0));
//!
//! let mut layout = MaterialLayout::new(root);
//! let mut frames = FrameQueue::new();
//! let mut ctx = PaintContext::new();
//!
//! layout.intercept_touch(&tree, &Event::TouchDown { x: 60.0, y: 40.0 }, &mut frames);
//! while frames.pop().is_some() {
//!     ctx.clear();
//!     layout.dispatch_draw(&tree, &mut ctx, &mut frames);
//! }
//! assert!(!layout.is_animating());
//! ```

mod params;
mod ripple;

pub use hit_test::{find_target, Hit};
pub use params::{RippleParams, ALPHA_FLOOR, BASE_RADIUS};
pub use ripple::{RippleFrame, RippleState, RippleTarget};

use crate::renderer::Canvas;
use crate::scheduler::FrameScheduler;
use crate::tree::{ViewId, ViewTree};
use crate::widgets::{Event, RippleConfig, Widget};

pub struct MaterialLayout {
    /// The container view this layout decorates
    root: ViewId,
    config: RippleConfig,
    ripple: RippleState,
    /// A draw pass has been requested and not yet run. Only touch-down checks
    /// it; a draw pass the host runs on its own still advances the ripple.
    frame_scheduled: bool,
}

impl MaterialLayout {
    pub fn new(root: ViewId) -> Self {
        Self::with_config(root, RippleConfig::default())
    }

    pub fn with_config(root: ViewId, config: RippleConfig) -> Self {
        Self {
            root,
            ripple: RippleState::new(config.alpha),
            config,
            frame_scheduled: false,
        }
    }

    pub fn root(&self) -> ViewId {
        self.root
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    pub fn ripple(&self) -> &RippleState {
        &self.ripple
    }

    /// Aim a ripple at the leaf under `(x, y)`, in container coordinates.
    /// Returns the hit, or `None` when the point misses every leaf.
    pub fn touch_down(
        &mut self,
        tree: &ViewTree,
        x: f32,
        y: f32,
        scheduler: &mut dyn FrameScheduler,
    ) -> Option<Hit> {
        let hit = find_target(tree, self.root, x, y)?;
        let params = RippleParams::derive(hit.frame.width, hit.frame.height, &self.config);

        log::debug!(
            "Ripple on {:?} at ({}, {}): max radius {}, {} steps",
            hit.view,
            x,
            y,
            params.max_radius,
            params.steps
        );

        self.ripple.start(RippleTarget {
            center: hit.frame.center(),
            clip: hit.frame,
            params,
        });
        self.request_frame(scheduler);
        Some(hit)
    }

    fn request_frame(&mut self, scheduler: &mut dyn FrameScheduler) {
        if !self.frame_scheduled {
            self.frame_scheduled = true;
            scheduler.invalidate();
        }
    }

    /// Advance the ripple one frame and draw it, then schedule what comes next.
    fn draw_ripple(&mut self, ctx: &mut dyn Canvas, scheduler: &mut dyn FrameScheduler) {
        let Some(frame) = self.ripple.advance() else {
            return;
        };

        log::trace!("Ripple frame: radius {}, alpha {}", frame.radius, frame.alpha);

        ctx.push_clip(frame.clip);
        ctx.draw_circle(
            frame.center.0,
            frame.center.1,
            frame.radius as f32,
            self.config.color.with_alpha_u8(frame.alpha),
        );
        ctx.pop_clip();

        if self.ripple.is_finished() {
            log::debug!("Ripple finished at radius {}", frame.radius);
            self.ripple.reset();
            // One more pass to erase the last frame
            scheduler.invalidate();
        } else {
            scheduler.invalidate_delayed(self.config.frame_delay());
        }
        self.frame_scheduled = true;
    }
}

impl Widget for MaterialLayout {
    fn intercept_touch(
        &mut self,
        tree: &ViewTree,
        event: &Event,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        if let Event::TouchDown { x, y } = *event {
            self.touch_down(tree, x, y, scheduler);
        }
        // Children still get every touch
        false
    }

    fn dispatch_draw(
        &mut self,
        tree: &ViewTree,
        ctx: &mut dyn Canvas,
        scheduler: &mut dyn FrameScheduler,
    ) {
        self.frame_scheduled = false;
        tree.paint_children(self.root, (0.0, 0.0), ctx);
        self.draw_ripple(ctx, scheduler);
    }

    fn is_animating(&self) -> bool {
        self.ripple.is_active()
    }
}
