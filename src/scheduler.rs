//! Redraw scheduling for frame-driven widgets.
//!
//! Widgets never sleep between frames. They ask a [`FrameScheduler`] for the
//! next draw pass and return; the host's event loop calls back into
//! `dispatch_draw` when the request comes due.
//!
//! Two schedulers are provided:
//!
//! - [`FrameQueue`] records requests for hosts that drive their own loop.
//! - [`LoopScheduler`] arms one-shot timers on a `calloop` event loop.

use std::collections::VecDeque;
use std::time::Duration;

use calloop::timer::{TimeoutAction, Timer};
use calloop::LoopHandle;

/// Delayed-callback interface a host offers to its widgets.
pub trait FrameScheduler {
    /// Request a draw pass as soon as possible.
    fn invalidate(&mut self);

    /// Request a draw pass after `delay`.
    fn invalidate_delayed(&mut self, delay: Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    Immediate,
    Delayed(Duration),
}

/// FIFO of pending redraw requests.
#[derive(Debug, Default)]
pub struct FrameQueue {
    requests: VecDeque<FrameRequest>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest pending request.
    pub fn pop(&mut self) -> Option<FrameRequest> {
        self.requests.pop_front()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

impl FrameScheduler for FrameQueue {
    fn invalidate(&mut self) {
        self.requests.push_back(FrameRequest::Immediate);
    }

    fn invalidate_delayed(&mut self, delay: Duration) {
        self.requests.push_back(FrameRequest::Delayed(delay));
    }
}

/// Loop data that can be told a redraw is due.
pub trait RedrawTarget {
    fn request_redraw(&mut self);
}

/// [`FrameScheduler`] backed by a calloop event loop.
///
/// Every request inserts a one-shot timer; when it fires the loop data's
/// [`RedrawTarget::request_redraw`] is called and the timer source is dropped.
pub struct LoopScheduler<D: 'static> {
    handle: LoopHandle<'static, D>,
}

impl<D: RedrawTarget + 'static> LoopScheduler<D> {
    pub fn new(handle: LoopHandle<'static, D>) -> Self {
        Self { handle }
    }

    fn schedule(&self, timer: Timer) {
        let result = self.handle.insert_source(timer, |_deadline, _, data: &mut D| {
            data.request_redraw();
            TimeoutAction::Drop
        });
        if let Err(e) = result {
            log::error!("Failed to schedule redraw: {}", e.error);
        }
    }
}

impl<D: RedrawTarget + 'static> FrameScheduler for LoopScheduler<D> {
    fn invalidate(&mut self) {
        self.schedule(Timer::immediate());
    }

    fn invalidate_delayed(&mut self, delay: Duration) {
        self.schedule(Timer::from_duration(delay));
    }
}
