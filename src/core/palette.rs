//! Display colours for generated materials
//!
//! Each selected layer gets a random base colour; its variants reuse the base
//! channels scaled by `0.6 + 0.2 * i` so related materials look alike in the
//! modelling application.

use rand::Rng;

/// Lowest channel value drawn for a base colour
pub const MIN_CHANNEL: u32 = 50;
/// Highest channel value
pub const MAX_CHANNEL: u32 = 255;
/// Base colour plus at most three variants
pub const MAX_PALETTE_LEN: usize = 4;

/// RGB colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl Rgb {
    pub fn new(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b }
    }

    /// Packed colour integer, R + G*256 + B*65536
    pub fn packed(&self) -> u32 {
        self.r + self.g * 256 + self.b * 65536
    }

    /// Inverse of [`Rgb::packed`]
    pub fn unpack(packed: u32) -> Self {
        Self {
            r: packed & 0xFF,
            g: (packed >> 8) & 0xFF,
            b: (packed >> 16) & 0xFF,
        }
    }

    /// Scale every channel, truncating and clamping to 255
    fn scaled(&self, factor: f64) -> Self {
        let scale = |channel: u32| ((channel as f64 * factor) as u32).min(MAX_CHANNEL);
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

/// Scaling factor of the i-th palette entry (i >= 1)
pub fn variant_factor(index: usize) -> f64 {
    0.6 + index as f64 * 0.2
}

/// Packed colours for one layer, base colour first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    colors: Vec<u32>,
}

impl ColorPalette {
    /// Draw a random base colour and derive `len - 1` variants from it.
    ///
    /// `len` is clamped to `1..=MAX_PALETTE_LEN`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let base = Rgb::new(
            rng.random_range(MIN_CHANNEL..=MAX_CHANNEL),
            rng.random_range(MIN_CHANNEL..=MAX_CHANNEL),
            rng.random_range(MIN_CHANNEL..=MAX_CHANNEL),
        );
        Self::from_base(base, len)
    }

    /// Deterministic palette from a known base colour
    pub fn from_base(base: Rgb, len: usize) -> Self {
        let len = len.clamp(1, MAX_PALETTE_LEN);
        let colors = std::iter::once(base.packed())
            .chain((1..len).map(|i| base.scaled(variant_factor(i)).packed()))
            .collect();
        Self { colors }
    }

    /// Colour at a cursor position, `None` once the palette is used up
    pub fn get(&self, cursor: usize) -> Option<u32> {
        self.colors.get(cursor).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_packed_layout() {
        assert_eq!(Rgb::new(1, 0, 0).packed(), 1);
        assert_eq!(Rgb::new(0, 1, 0).packed(), 256);
        assert_eq!(Rgb::new(0, 0, 1).packed(), 65536);
        assert_eq!(Rgb::unpack(Rgb::new(12, 34, 56).packed()), Rgb::new(12, 34, 56));
    }

    #[test]
    fn test_from_base_variants() {
        let palette = ColorPalette::from_base(Rgb::new(101, 203, 251), 4);
        assert_eq!(
            palette.as_slice(),
            &[
                16501605, // (101, 203, 251)
                13148752, // x0.8 -> (80, 162, 200)
                16501605, // x1.0
                16774009, // x1.2 -> (121, 243, 255), blue clamped
            ]
        );
    }

    #[test]
    fn test_generate_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..=MAX_PALETTE_LEN {
            assert_eq!(ColorPalette::generate(&mut rng, len).len(), len);
        }
        assert_eq!(ColorPalette::generate(&mut rng, 0).len(), 1);
        assert_eq!(ColorPalette::generate(&mut rng, 9).len(), MAX_PALETTE_LEN);
    }

    #[test]
    fn test_generate_channel_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let palette = ColorPalette::generate(&mut rng, 4);
            let base = Rgb::unpack(palette.as_slice()[0]);
            for channel in [base.r, base.g, base.b] {
                assert!((MIN_CHANNEL..=MAX_CHANNEL).contains(&channel));
            }
            for (i, packed) in palette.as_slice().iter().enumerate().skip(1) {
                let variant = Rgb::unpack(*packed);
                let factor = variant_factor(i);
                let limit = |c: u32| ((c as f64 * factor) as u32).min(MAX_CHANNEL);
                assert!(variant.r <= limit(base.r));
                assert!(variant.g <= limit(base.g));
                assert!(variant.b <= limit(base.b));
                assert!(*packed <= 0xFF_FF_FF);
            }
        }
    }

    #[test]
    fn test_same_seed_same_palette() {
        let a = ColorPalette::generate(&mut StdRng::seed_from_u64(99), 3);
        let b = ColorPalette::generate(&mut StdRng::seed_from_u64(99), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cursor_past_end() {
        let palette = ColorPalette::from_base(Rgb::new(60, 60, 60), 2);
        assert!(palette.get(1).is_some());
        assert_eq!(palette.get(2), None);
    }
}
