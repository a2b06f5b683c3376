//! `requestAnimationFrame` main loop.
//!
//! The browser owns the event loop, so the driver only schedules ticks. The
//! close flag a host may raise has no effect here: the page keeps animating
//! until it is unloaded.

use std::cell::RefCell;
use std::rc::Rc;

use simple_shape_core::{frame, FrameHost, Scene};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Browser main loop: one tick per `requestAnimationFrame` callback.
///
/// Returns as soon as the first frame is scheduled; the callback then
/// reschedules itself on every frame.
pub fn start<S, H>(scene: S, mut host: H) -> Result<(), JsValue>
where
    S: Scene + 'static,
    H: FrameHost + 'static,
{
    // `slot` holds the frame closure so that the closure can hand itself to
    // `request_animation_frame` again. The Rc cycle keeps it alive for the
    // life of the page.
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();

    *slot.borrow_mut() = Some(Closure::new(move || {
        frame::tick(&mut host, &scene);

        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_frame(callback) {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(())
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
