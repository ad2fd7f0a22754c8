use winit::dpi::PhysicalSize;

/// Drawable size in physical pixels.
///
/// Stored exactly as reported by the window layer; zero is a legal value and
/// simply means there is nothing to draw into.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn to_array(self) -> [u32; 2] {
        [self.width, self.height]
    }

    /// Component-wise minimum, used to keep the rasterizer viewport inside the target.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.width.min(other.width), self.height.min(other.height))
    }
}

impl From<PhysicalSize<u32>> for ViewportSize {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_in_either_axis_is_empty() {
        assert!(ViewportSize::new(0, 10).is_empty());
        assert!(ViewportSize::new(10, 0).is_empty());
        assert!(ViewportSize::default().is_empty());
        assert!(!ViewportSize::new(1, 1).is_empty());
    }

    #[test]
    fn from_physical_size_keeps_components() {
        let v = ViewportSize::from(PhysicalSize::new(1280u32, 720u32));
        assert_eq!(v.to_array(), [1280, 720]);
    }

    #[test]
    fn min_is_component_wise() {
        let a = ViewportSize::new(800, 100);
        let b = ViewportSize::new(640, 480);
        assert_eq!(a.min(b), ViewportSize::new(640, 100));
    }
}
