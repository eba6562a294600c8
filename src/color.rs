//! Color types and the packed pixel codec.
//!
//! A [`PackedPixel`] stores four 8-bit channels in one `u32`:
//!
//! ```text
//! bits 31..24  23..16  15..8  7..0
//!      alpha   blue    green  red
//! ```
//!
//! Written out little-endian this is the byte sequence `R, G, B, A`, which is
//! exactly the `RGBA8` layout the texture upload declares.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Pack this color into a single pixel value.
    #[must_use]
    pub const fn pack(self) -> PackedPixel {
        PackedPixel::encode(self.r, self.g, self.b, self.a)
    }
}

/// One pixel as stored in the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PackedPixel(pub u32);

impl PackedPixel {
    /// Combine four channels into one packed value.
    #[inline]
    #[must_use]
    pub const fn encode(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32))
    }

    /// Pack an opaque color (alpha = 255).
    #[inline]
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::encode(r, g, b, 255)
    }

    /// Split back into channels.
    #[inline]
    #[must_use]
    pub const fn decode(self) -> Rgba {
        Rgba::new(
            self.0 as u8,
            (self.0 >> 8) as u8,
            (self.0 >> 16) as u8,
            (self.0 >> 24) as u8,
        )
    }

    /// Raw packed value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Bytes in texture order (`R, G, B, A`).
    #[inline]
    #[must_use]
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl From<Rgba> for PackedPixel {
    fn from(color: Rgba) -> Self {
        color.pack()
    }
}

impl From<PackedPixel> for Rgba {
    fn from(pixel: PackedPixel) -> Self {
        pixel.decode()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Decoding an encoded pixel recovers every channel.
        #[test]
        fn prop_encode_decode_round_trip(r: u8, g: u8, b: u8, a: u8) {
            let decoded = PackedPixel::encode(r, g, b, a).decode();
            prop_assert_eq!(decoded, Rgba::new(r, g, b, a));
        }

        /// The texture byte view is the channel order R, G, B, A.
        #[test]
        fn prop_byte_view_matches_channels(r: u8, g: u8, b: u8, a: u8) {
            prop_assert_eq!(PackedPixel::encode(r, g, b, a).to_rgba_bytes(), [r, g, b, a]);
        }
    }
}
