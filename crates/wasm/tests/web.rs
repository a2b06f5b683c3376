#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use simple_shape_core::{frame, FrameHost, Key, Scene, Viewport};
use simple_shape_wasm::driver;
use simple_shape_wasm::host::{fit_canvas, CanvasHost};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn styled_canvas(width: &str, height: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let style = canvas.style();
    style.set_property("display", "block").unwrap();
    style.set_property("width", width).unwrap();
    style.set_property("height", height).unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn dispatch_key(kind: &str, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict(kind, &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

/// Resolves on the next animation frame, after callbacks queued earlier.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Counts draws without touching WebGL.
struct CountingScene(Rc<Cell<u32>>);

impl Scene for CountingScene {
    fn draw(&self, _rotation: f32) {
        self.0.set(self.0.get() + 1);
    }

    fn set_viewport(&self, _viewport: Viewport) {}
}

#[wasm_bindgen_test]
fn fit_canvas_matches_css_box() {
    let canvas = styled_canvas("320px", "200px");
    assert_eq!(fit_canvas(&canvas), Some((320, 200)));
    assert_eq!((canvas.width(), canvas.height()), (320, 200));
}

#[wasm_bindgen_test]
fn fit_canvas_ignores_unlaid_out_canvas() {
    let canvas = styled_canvas("0px", "0px");
    assert_eq!(fit_canvas(&canvas), None);
}

#[wasm_bindgen_test]
fn escape_keydown_requests_close() {
    let window = web_sys::window().unwrap();
    let canvas = styled_canvas("16px", "16px");
    let mut host = CanvasHost::attach(&window, &canvas).unwrap();

    assert!(!host.is_key_down(Key::Escape));
    dispatch_key("keydown", "Escape");
    assert!(host.is_key_down(Key::Escape));

    frame::process_input(&mut host);
    assert!(host.should_close());

    dispatch_key("keyup", "Escape");
    assert!(!host.is_key_down(Key::Escape));
}

#[wasm_bindgen_test]
fn other_keys_are_ignored() {
    let window = web_sys::window().unwrap();
    let canvas = styled_canvas("16px", "16px");
    let mut host = CanvasHost::attach(&window, &canvas).unwrap();

    dispatch_key("keydown", "Enter");
    frame::process_input(&mut host);
    assert!(!host.should_close());
}

#[wasm_bindgen_test]
async fn animation_keeps_running_after_escape() {
    let window = web_sys::window().unwrap();
    let canvas = styled_canvas("16px", "16px");
    let host = CanvasHost::attach(&window, &canvas).unwrap();
    let draws = Rc::new(Cell::new(0));

    dispatch_key("keydown", "Escape");
    driver::start(CountingScene(draws.clone()), host).unwrap();

    next_frame().await;
    let after_escape_tick = draws.get();
    assert!(after_escape_tick >= 1);

    next_frame().await;
    next_frame().await;
    assert!(draws.get() > after_escape_tick, "loop stopped after the close flag was set");

    dispatch_key("keyup", "Escape");
}
