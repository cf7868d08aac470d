/// Straight (non-premultiplied) RGBA color, each channel nominally in
/// `[0, 1]`.
///
/// The packed instance buffer stores colors exactly as given here, so any
/// premultiplication or gamma policy belongs to the consuming backend.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Channel order matches the packed color block: `r, g, b, a`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_order_is_rgba() {
        let c = ColorRgba::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn white_is_opaque() {
        assert_eq!(ColorRgba::white().to_array(), [1.0; 4]);
    }

    #[test]
    fn finiteness_checks_every_channel() {
        assert!(ColorRgba::white().is_finite());
        assert!(!ColorRgba::new(0.0, f32::NAN, 0.0, 1.0).is_finite());
        assert!(!ColorRgba::new(0.0, 0.0, f32::INFINITY, 1.0).is_finite());
    }
}
