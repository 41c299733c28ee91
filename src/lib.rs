//! Ripple touch feedback for view containers.
//!
//! [`MaterialLayout`](widgets::MaterialLayout) wraps a container view and
//! draws an expanding, fading circle over whichever child the user touches,
//! clipped to that child. The host supplies geometry through a
//! [`ViewTree`](tree::ViewTree), drawing through a
//! [`Canvas`](renderer::Canvas), and redraw timing through a
//! [`FrameScheduler`](scheduler::FrameScheduler).

pub mod renderer;
pub mod scheduler;
pub mod tree;
pub mod widgets;

pub mod prelude {
    pub use crate::renderer::{Canvas, DrawCommand, PaintContext};
    pub use crate::scheduler::{
        FrameQueue, FrameRequest, FrameScheduler, LoopScheduler, RedrawTarget,
    };
    pub use crate::tree::{ViewId, ViewKind, ViewTree};
    pub use crate::widgets::{Color, Event, MaterialLayout, Rect, RippleConfig, Widget};
}
