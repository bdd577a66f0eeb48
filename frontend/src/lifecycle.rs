use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::HeroError;

/// Something a handler can be attached to and later detached from.
pub trait EventSource {
    type Token;

    fn subscribe(&self, handler: Box<dyn FnMut()>) -> Result<Self::Token, HeroError>;
    fn unsubscribe(&self, token: Self::Token);
}

/// Holds one registered handler and detaches it exactly once, on `cancel`
/// or when dropped. Effects hand this to their cleanup closure.
pub struct Subscription<S: EventSource> {
    source: S,
    token: Option<S::Token>,
}

impl<S: EventSource> Subscription<S> {
    pub fn new(source: S, handler: impl FnMut() + 'static) -> Result<Self, HeroError> {
        let token = source.subscribe(Box::new(handler))?;
        Ok(Self {
            source,
            token: Some(token),
        })
    }

    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            self.source.unsubscribe(token);
        }
    }
}

impl<S: EventSource> Drop for Subscription<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A DOM event on the window, `scroll` or `resize`.
pub struct WindowEvent {
    window: Window,
    event: &'static str,
}

impl WindowEvent {
    pub fn scroll(window: Window) -> Self {
        Self { window, event: "scroll" }
    }

    pub fn resize(window: Window) -> Self {
        Self { window, event: "resize" }
    }
}

impl EventSource for WindowEvent {
    type Token = Closure<dyn FnMut()>;

    fn subscribe(&self, handler: Box<dyn FnMut()>) -> Result<Self::Token, HeroError> {
        let callback = Closure::wrap(handler);
        self.window
            .add_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref())
            .map_err(|e| HeroError::Listener {
                event: self.event,
                reason: format!("{:?}", e),
            })?;
        debug!("{} listener attached", self.event);
        Ok(callback)
    }

    fn unsubscribe(&self, callback: Self::Token) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
        debug!("{} listener removed", self.event);
    }
}

/// Fixed-period tick used to drive animation frames.
pub struct FrameTicker {
    interval_ms: u32,
}

impl FrameTicker {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
        }
    }
}

impl EventSource for FrameTicker {
    type Token = Interval;

    fn subscribe(&self, mut handler: Box<dyn FnMut()>) -> Result<Self::Token, HeroError> {
        Ok(Interval::new(self.interval_ms, move || handler()))
    }

    fn unsubscribe(&self, interval: Self::Token) {
        // Dropping the handle clears the interval
        drop(interval);
    }
}
