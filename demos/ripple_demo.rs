//! Drives a few ripples through a calloop event loop and logs every draw pass.
//!
//! Run with `RUST_LOG=debug cargo run --example ripple_demo` to see the
//! widget's own logging alongside the frames.

use std::time::{Duration, Instant};

use calloop::EventLoop;
use material_layout::prelude::*;

struct Demo {
    tree: ViewTree,
    layout: MaterialLayout,
    scheduler: LoopScheduler<Demo>,
    ctx: PaintContext,
    needs_redraw: bool,
    frames_drawn: usize,
}

impl RedrawTarget for Demo {
    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }
}

impl Demo {
    fn touch(&mut self, x: f32, y: f32) {
        log::info!("Touch down at ({}, {})", x, y);
        let event = Event::TouchDown { x, y };
        self.layout
            .intercept_touch(&self.tree, &event, &mut self.scheduler);
    }

    fn draw(&mut self) {
        self.needs_redraw = false;
        self.ctx.clear();
        self.layout
            .dispatch_draw(&self.tree, &mut self.ctx, &mut self.scheduler);

        for command in self.ctx.circles() {
            if let DrawCommand::Circle {
                center,
                radius,
                color,
                ..
            } = command
            {
                log::info!(
                    "Ripple at ({:.0}, {:.0}) radius {:.0} alpha {:.2}",
                    center.0,
                    center.1,
                    radius,
                    color.a
                );
            }
        }
        self.frames_drawn += 1;
    }
}

fn main() {
    env_logger::init();

    let mut event_loop: EventLoop<'static, Demo> =
        EventLoop::try_new().expect("Failed to create event loop");

    let mut tree = ViewTree::new();
    let root = tree.add_root(Rect::new(0.0, 0.0, 360.0, 240.0));
    let button = tree
        .add_leaf(root, Rect::new(20.0, 20.0, 140.0, 48.0))
        .expect("root exists");
    let card = tree
        .add_group(root, Rect::new(180.0, 20.0, 160.0, 200.0))
        .expect("root exists");
    let avatar = tree
        .add_leaf(card, Rect::new(16.0, 16.0, 64.0, 64.0))
        .expect("card exists");
    tree.set_background(button, Color::from_hex(0x3F51B5));
    tree.set_background(avatar, Color::from_hex(0xFF9800));

    let config = RippleConfig::new()
        .color(Color::WHITE)
        .duration(Duration::from_millis(300))
        .frame_interval(Duration::from_millis(16))
        .alpha(200);

    let mut demo = Demo {
        tree,
        layout: MaterialLayout::with_config(root, config),
        scheduler: LoopScheduler::new(event_loop.handle()),
        ctx: PaintContext::new(),
        needs_redraw: false,
        frames_drawn: 0,
    };
    demo.draw();

    let touches = [(90.0, 44.0), (230.0, 70.0), (10.0, 230.0)];
    for (x, y) in touches {
        demo.touch(x, y);

        let deadline = Instant::now() + Duration::from_secs(2);
        // The last frame arms one more timer to erase itself
        let mut settling = false;
        loop {
            if demo.needs_redraw {
                demo.draw();
            }
            if !demo.layout.is_animating() && !demo.needs_redraw {
                if settling {
                    break;
                }
                settling = true;
            }
            if Instant::now() > deadline {
                log::warn!("Ripple did not settle in time");
                break;
            }
            event_loop
                .dispatch(Some(Duration::from_millis(50)), &mut demo)
                .expect("Failed to dispatch events");
        }
    }

    log::info!("Drew {} frames", demo.frames_drawn);
}
