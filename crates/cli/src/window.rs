//! Desktop window host: winit for the window and events, glutin for the GL
//! context and surface.
//!
//! winit is driven with `pump_app_events`, so the main loop stays an
//! ordinary blocking `while` loop in `main` and event dispatch happens only
//! where the frame driver polls for it.

use std::num::NonZeroU32;
use std::time::Duration;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use raw_window_handle::HasWindowHandle;
use simple_shape_core::{DesktopGl, FrameHost, Key, RotationClock, WindowConfig};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::error::CliError;

/// How long a startup pump may block while waiting for the window.
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(16);

/// A window with a current GL context.
///
/// Field order is drop order: surface and context go before the window.
struct GlWindow {
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

/// Event-side state, updated from inside `pump_app_events`.
struct WindowState {
    config: WindowConfig,
    gl: Option<GlWindow>,
    init_error: Option<CliError>,
    escape_down: bool,
    should_close: bool,
    pending_resize: Option<(u32, u32)>,
}

impl WindowState {
    fn new(config: WindowConfig) -> Self {
        Self {
            config,
            gl: None,
            init_error: None,
            escape_down: false,
            should_close: false,
            pending_resize: None,
        }
    }
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl.is_some() || self.init_error.is_some() {
            return;
        }

        match create_gl_window(event_loop, &self.config) {
            Ok(gl) => {
                log::info!(
                    "created {}x{} window \"{}\"",
                    self.config.width,
                    self.config.height,
                    self.config.title
                );
                self.gl = Some(gl);
            }
            Err(e) => {
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.should_close = true,

            WindowEvent::Resized(size) => {
                if let (Some(gl), Some(w), Some(h)) = (
                    &self.gl,
                    NonZeroU32::new(size.width),
                    NonZeroU32::new(size.height),
                ) {
                    gl.surface.resize(&gl.context, w, h);
                }
                self.pending_resize = Some((size.width, size.height));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    self.escape_down = event.state == ElementState::Pressed;
                }
            }

            // Key releases are not delivered to unfocused windows.
            WindowEvent::Focused(false) => self.escape_down = false,

            _ => {}
        }
    }
}

/// The native frame host.
pub struct DesktopHost {
    event_loop: EventLoop<()>,
    state: WindowState,
    clock: RotationClock,
}

impl DesktopHost {
    /// Initializes the windowing system, opens the window and makes its GL
    /// context current.
    ///
    /// # Errors
    ///
    /// `CliError::Windowing` if no event loop can be created, and
    /// `CliError::Window` if the window, context or surface cannot be.
    pub fn open(config: WindowConfig) -> Result<Self, CliError> {
        let event_loop = EventLoop::new().map_err(|e| CliError::Windowing(e.to_string()))?;
        Self::with_event_loop(event_loop, config)
    }

    fn with_event_loop(event_loop: EventLoop<()>, config: WindowConfig) -> Result<Self, CliError> {
        let mut host = Self {
            event_loop,
            state: WindowState::new(config),
            clock: RotationClock::start(),
        };
        host.wait_for_window()?;
        Ok(host)
    }

    /// Pumps events until `resumed` has created the window (or failed to).
    fn wait_for_window(&mut self) -> Result<(), CliError> {
        loop {
            let status = self
                .event_loop
                .pump_app_events(Some(STARTUP_PUMP_TIMEOUT), &mut self.state);

            if let Some(err) = self.state.init_error.take() {
                return Err(err);
            }
            if self.state.gl.is_some() {
                return Ok(());
            }
            if let PumpStatus::Exit(code) = status {
                return Err(CliError::Window(format!(
                    "event loop exited with status {code} before a window was created"
                )));
            }
        }
    }

    /// Resolves GL entry points through the current context.
    ///
    /// # Errors
    ///
    /// `CliError::GlLoad` if there is no context or it cannot provide
    /// the shader entry points.
    #[allow(unsafe_code)]
    pub fn load_gl(&self) -> Result<glow::Context, CliError> {
        let gl = self
            .state
            .gl
            .as_ref()
            .ok_or_else(|| CliError::GlLoad("no current GL context".into()))?;
        let display = gl.context.display();

        if display.get_proc_address(c"glCreateShader").is_null() {
            return Err(CliError::GlLoad("glCreateShader is not available".into()));
        }

        // SAFETY: the context is current on this thread and outlives the
        // returned glow context (both are dropped at the end of `run`).
        let context =
            unsafe { glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name)) };
        Ok(context)
    }

    /// Current framebuffer size in physical pixels.
    pub fn framebuffer_size(&self) -> (u32, u32) {
        self.state
            .gl
            .as_ref()
            .map(|gl| {
                let size = gl.window.inner_size();
                (size.width, size.height)
            })
            .unwrap_or((0, 0))
    }
}

impl FrameHost for DesktopHost {
    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Escape => self.state.escape_down,
        }
    }

    fn request_close(&mut self) {
        self.state.should_close = true;
    }

    fn should_close(&self) -> bool {
        self.state.should_close
    }

    fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    fn poll_events(&mut self) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.state);
        if let PumpStatus::Exit(code) = status {
            log::debug!("event loop exited with status {code}");
            self.state.should_close = true;
        }
    }

    fn take_resize(&mut self) -> Option<(u32, u32)> {
        self.state.pending_resize.take()
    }

    fn present(&mut self) {
        if let Some(gl) = &self.state.gl {
            if let Err(e) = gl.surface.swap_buffers(&gl.context) {
                log::warn!("swap_buffers failed: {e}");
            }
        }
    }
}

#[allow(unsafe_code)]
fn create_gl_window(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> Result<GlWindow, CliError> {
    let attrs = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(
            f64::from(config.width),
            f64::from(config.height),
        ))
        .with_resizable(true);

    let (window, gl_config) = DisplayBuilder::new()
        .with_window_attributes(Some(attrs))
        .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
        .map_err(|e| CliError::Window(e.to_string()))?;
    let window = window.ok_or_else(|| CliError::Window("no window was created".into()))?;

    let raw_handle = window
        .window_handle()
        .map_err(|e| CliError::Window(e.to_string()))?
        .as_raw();

    let (major, minor) = DesktopGl::CONTEXT_VERSION;
    let context_attrs = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
        .with_profile(GlProfile::Core)
        .build(Some(raw_handle));

    let surface_attrs = window
        .build_surface_attributes(Default::default())
        .map_err(|e| CliError::Window(e.to_string()))?;

    let display = gl_config.display();

    // SAFETY: the raw window handle belongs to `window`, which is stored
    // next to the context and surface and dropped after them.
    let not_current = unsafe { display.create_context(&gl_config, &context_attrs) }
        .map_err(|e| CliError::Window(format!("GL context: {e}")))?;
    let surface = unsafe { display.create_window_surface(&gl_config, &surface_attrs) }
        .map_err(|e| CliError::Window(format!("GL surface: {e}")))?;
    let context = not_current
        .make_current(&surface)
        .map_err(|e| CliError::Window(format!("make current: {e}")))?;

    let interval = if config.vsync {
        SwapInterval::Wait(NonZeroU32::MIN)
    } else {
        SwapInterval::DontWait
    };
    if let Err(e) = surface.set_swap_interval(&context, interval) {
        log::warn!("could not set swap interval: {e}");
    }

    Ok(GlWindow {
        surface,
        context,
        window,
    })
}

/// Picks the config with the most samples.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, c| if c.num_samples() > best.num_samples() { c } else { best })
        // glutin calls the picker only with a non-empty config list.
        .expect("glutin offers at least one config")
}
