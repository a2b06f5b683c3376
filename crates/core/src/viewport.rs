/// Pixel rectangle of the framebuffer that rendering output is mapped into.
///
/// Fields are `i32` because that is what `glViewport` takes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Viewport covering a whole framebuffer of the given size, anchored at the origin.
    ///
    /// Sizes beyond `i32::MAX` saturate.
    pub fn from_framebuffer(width: u32, height: u32) -> Self {
        Self::new(0, 0, saturate(width), saturate(height))
    }
}

fn saturate(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_window_size_maps_to_full_viewport() {
        assert_eq!(Viewport::from_framebuffer(800, 600), Viewport::new(0, 0, 800, 600));
    }

    #[test]
    fn zero_sized_framebuffer_keeps_zero_extent() {
        assert_eq!(Viewport::from_framebuffer(0, 600), Viewport::new(0, 0, 0, 600));
        assert_eq!(Viewport::from_framebuffer(800, 0), Viewport::new(0, 0, 800, 0));
    }

    #[test]
    fn oversized_dimensions_saturate() {
        let vp = Viewport::from_framebuffer(u32::MAX, 10);
        assert_eq!(vp.width, i32::MAX);
        assert_eq!(vp.height, 10);
    }

    proptest! {
        #[test]
        fn framebuffer_viewport_is_origin_anchored_and_exact(w in 0u32..=16_384, h in 0u32..=16_384) {
            let vp = Viewport::from_framebuffer(w, h);
            prop_assert_eq!((vp.x, vp.y), (0, 0));
            prop_assert_eq!(vp.width as u32, w);
            prop_assert_eq!(vp.height as u32, h);
        }

        #[test]
        fn framebuffer_viewport_is_idempotent(w in any::<u32>(), h in any::<u32>()) {
            prop_assert_eq!(Viewport::from_framebuffer(w, h), Viewport::from_framebuffer(w, h));
        }
    }
}
