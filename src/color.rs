//! Color types and the fixed plot palette.

// ============================================================================
// Rgba8 (8-bit per channel)
// ============================================================================

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u32 = 255;

    pub fn new(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self {
            r: r as u8,
            g: g as u8,
            b: b as u8,
            a: a as u8,
        }
    }

    pub fn new_opaque(r: u32, g: u32, b: u32) -> Self {
        Self::new(r, g, b, Self::BASE_MASK)
    }

    pub fn black() -> Self {
        Self::new_opaque(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::new_opaque(255, 255, 255)
    }

    /// Mid gray, `(128, 128, 128)`.
    pub fn gray() -> Self {
        Self::new_opaque(128, 128, 128)
    }

    /// Components in `[r, g, b, a]` byte order.
    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Colors used when plotting a curve and its control polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba8,
    pub curve: Rgba8,
    pub control_border: Rgba8,
    pub control_fill: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::black(),
            curve: Rgba8::white(),
            control_border: Rgba8::gray(),
            control_fill: Rgba8::white(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8_new() {
        let c = Rgba8::new(10, 20, 30, 40);
        assert_eq!(c.to_array(), [10, 20, 30, 40]);
        assert_eq!(Rgba8::new_opaque(1, 2, 3).a, 255);
    }

    #[test]
    fn test_default_palette() {
        let p = Palette::default();
        assert_eq!(p.background, Rgba8::new(0, 0, 0, 255));
        assert_eq!(p.curve, Rgba8::new(255, 255, 255, 255));
        assert_eq!(p.control_border, Rgba8::new(128, 128, 128, 255));
        assert_eq!(p.control_fill, p.curve);
    }
}
