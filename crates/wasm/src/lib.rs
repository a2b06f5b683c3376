//! WebGL2 entry point for the simple-shape rotating triangle.
//!
//! Build with `wasm-pack build crates/wasm --target web --out-dir static/pkg`
//! and serve `crates/wasm/static/`.

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod driver;
#[cfg(target_arch = "wasm32")]
pub mod host;

/// Id of the canvas element the page must provide.
pub const CANVAS_ID: &str = "c";

#[cfg(target_arch = "wasm32")]
mod wasm {
    use simple_shape_core::frame;
    use simple_shape_core::render::RendererContext;
    use simple_shape_core::{ShaderSources, WindowConfig};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::WebGl2RenderingContext;

    use crate::{driver, host, CANVAS_ID};

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&e.to_string().into());
        }

        let config = WindowConfig::default();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        document.set_title(&config.title);

        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        if host::fit_canvas(&canvas).is_none() {
            canvas.set_width(config.width);
            canvas.set_height(config.height);
        }

        let webgl: WebGl2RenderingContext = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;
        let gl = glow::Context::from_webgl2_context(webgl);

        let renderer = RendererContext::new(gl, &ShaderSources::for_target())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        frame::apply_resize(&renderer, canvas.width(), canvas.height());

        let host = host::CanvasHost::attach(&window, &canvas)?;
        log::info!("starting animation loop on #{CANVAS_ID}");
        driver::start(renderer, host)
    }
}
