//! Window icon built from the icon image
//!
//! The window system wants three square RGBA layers (16, 32 and 64 px).
//! Layers are nearest-neighbor samples of the source image.

use macroquad::miniquad::conf::Icon;
use macroquad::texture::Image;

/// Sample `image` into a `side`×`side` RGBA buffer of `N` bytes
pub fn resample<const N: usize>(image: &Image, side: usize) -> [u8; N] {
    debug_assert_eq!(N, side * side * 4);
    let mut out = [0u8; N];
    let (src_w, src_h) = (image.width as usize, image.height as usize);
    if src_w == 0 || src_h == 0 {
        return out;
    }

    for y in 0..side {
        let sy = y * src_h / side;
        for x in 0..side {
            let sx = x * src_w / side;
            let src = (sy * src_w + sx) * 4;
            let dst = (y * side + x) * 4;
            if let Some(pixel) = image.bytes.get(src..src + 4) {
                out[dst..dst + 4].copy_from_slice(pixel);
            }
        }
    }
    out
}

/// All three icon layers
pub fn window_icon(image: &Image) -> Icon {
    Icon {
        small: resample::<1024>(image, 16),
        medium: resample::<4096>(image, 32),
        big: resample::<16384>(image, 64),
    }
}
