//! Canvas-backed frame host.
//!
//! The browser delivers input and resize events between animation frames,
//! so DOM listeners only record state; the frame driver reads it on the
//! next tick.

use std::cell::Cell;
use std::rc::Rc;

use simple_shape_core::{FrameHost, Key, RotationClock};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

/// State written by DOM listeners.
#[derive(Default)]
struct DomState {
    escape_down: Cell<bool>,
    resized: Cell<Option<(u32, u32)>>,
}

/// Frame host for a `<canvas>` element.
pub struct CanvasHost {
    clock: RotationClock,
    dom: Rc<DomState>,
    should_close: bool,
}

impl CanvasHost {
    /// Installs key and resize listeners on `window` and starts the clock.
    ///
    /// Listeners live for the rest of the page's life.
    pub fn attach(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let dom = Rc::new(DomState::default());

        let keydown = {
            let dom = dom.clone();
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    dom.escape_down.set(true);
                }
            })
        };
        window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
        keydown.forget();

        let keyup = {
            let dom = dom.clone();
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    dom.escape_down.set(false);
                }
            })
        };
        window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;
        keyup.forget();

        let blur = {
            let dom = dom.clone();
            Closure::<dyn FnMut()>::new(move || dom.escape_down.set(false))
        };
        window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref())?;
        blur.forget();

        let resize = {
            let dom = dom.clone();
            let canvas = canvas.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(size) = fit_canvas(&canvas) {
                    dom.resized.set(Some(size));
                }
            })
        };
        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
        resize.forget();

        Ok(Self {
            clock: RotationClock::start(),
            dom,
            should_close: false,
        })
    }
}

/// Matches the canvas backing store to its CSS box. Returns the new size,
/// or `None` if the canvas is not laid out (zero-sized).
pub fn fit_canvas(canvas: &HtmlCanvasElement) -> Option<(u32, u32)> {
    let width = u32::try_from(canvas.client_width()).ok().filter(|w| *w > 0)?;
    let height = u32::try_from(canvas.client_height()).ok().filter(|h| *h > 0)?;
    canvas.set_width(width);
    canvas.set_height(height);
    Some((width, height))
}

impl FrameHost for CanvasHost {
    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Escape => self.dom.escape_down.get(),
        }
    }

    fn request_close(&mut self) {
        self.should_close = true;
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    // Events were already dispatched by the browser before this frame.
    fn poll_events(&mut self) {}

    fn take_resize(&mut self) -> Option<(u32, u32)> {
        self.dom.resized.take()
    }

    // The browser composites the canvas once the frame callback returns.
    fn present(&mut self) {}
}
