//! Per-frame driver shared by the native and browser main loops.
//!
//! A tick is always, in order: input processing, render, event polling
//! (plus any framebuffer resize it surfaced), presentation. The native
//! loop runs ticks back to back with [`run_blocking`]; the browser loop
//! runs one [`tick`] per animation frame.
//!
//! The windowing side implements [`FrameHost`], the GPU side implements
//! [`Scene`]. Neither trait knows about the other, which keeps the
//! ordering logic testable without a window or a GL context.

use crate::clock::rotation_angle;
use crate::viewport::Viewport;

/// Keys the driver asks the host about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
}

/// Window / canvas side of a frame.
pub trait FrameHost {
    /// Whether `key` is currently held down.
    fn is_key_down(&self, key: Key) -> bool;

    /// Sets the close flag. The native loop stops after the current tick; the
    /// browser loop keeps running.
    fn request_close(&mut self);

    /// Current value of the close flag.
    fn should_close(&self) -> bool;

    /// Seconds elapsed since the windowing layer started.
    fn elapsed_secs(&self) -> f64;

    /// Dispatches pending window-system events.
    fn poll_events(&mut self);

    /// Takes the most recent framebuffer size reported since the last call.
    fn take_resize(&mut self) -> Option<(u32, u32)>;

    /// Presents the back buffer.
    fn present(&mut self);
}

/// GPU side of a frame.
pub trait Scene {
    /// Draws one frame with the given rotation (radians).
    fn draw(&self, rotation: f32);

    /// Maps rendering output to `viewport`.
    fn set_viewport(&self, viewport: Viewport);
}

/// Requests window closure when escape is held.
pub fn process_input<H: FrameHost + ?Sized>(host: &mut H) {
    if host.is_key_down(Key::Escape) {
        host.request_close();
    }
}

/// Framebuffer resize handler: one viewport update covering the new size.
pub fn apply_resize<S: Scene + ?Sized>(scene: &S, width: u32, height: u32) {
    let viewport = Viewport::from_framebuffer(width, height);
    log::debug!("framebuffer resized to {width}x{height}");
    scene.set_viewport(viewport);
}

/// Runs a single frame.
pub fn tick<H, S>(host: &mut H, scene: &S)
where
    H: FrameHost + ?Sized,
    S: Scene + ?Sized,
{
    process_input(host);
    scene.draw(rotation_angle(host.elapsed_secs()));
    host.poll_events();
    if let Some((width, height)) = host.take_resize() {
        apply_resize(scene, width, height);
    }
    host.present();
}

/// Native main loop: ticks until the host's close flag is set.
///
/// Returns the number of frames run.
pub fn run_blocking<H, S>(host: &mut H, scene: &S) -> u64
where
    H: FrameHost + ?Sized,
    S: Scene + ?Sized,
{
    let mut frames = 0u64;
    while !host.should_close() {
        tick(host, scene);
        frames += 1;
    }
    log::info!("main loop finished after {frames} frames");
    frames
}
