//! Color space conversion of decoded pixel data.

/// Convert interleaved 8-bit YBR_FULL samples to RGB in place.
///
/// The chroma samples are centered on 128.
/// Results are truncated toward zero and clamped to `0..=255`.
/// A trailing incomplete pixel is left untouched.
pub fn ybr_full_to_rgb(pixels: &mut [u8]) {
    for pixel in pixels.chunks_exact_mut(3) {
        let y = f64::from(pixel[0]);
        let cb = f64::from(pixel[1]) - 128.;
        let cr = f64::from(pixel[2]) - 128.;

        let r = (y + 1.403 * cr) as i32;
        let g = (y - 0.344 * cb - 0.714 * cr) as i32;
        let b = (y + 1.770 * cb) as i32;

        pixel[0] = r.clamp(0, 255) as u8;
        pixel[1] = g.clamp(0, 255) as u8;
        pixel[2] = b.clamp(0, 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_is_unchanged() {
        let mut pixels = [0, 128, 128, 200, 128, 128];
        ybr_full_to_rgb(&mut pixels);
        assert_eq!(pixels, [0, 0, 0, 200, 200, 200]);
    }

    #[test]
    fn results_are_clamped() {
        let mut pixels = [255, 128, 255, 0, 0, 128];
        ybr_full_to_rgb(&mut pixels);
        assert_eq!(pixels, [255, 164, 255, 0, 44, 0]);
    }

    #[test]
    fn saturated_color() {
        // blue overshoots, red and green stay in range
        let mut pixels = [200, 220, 40];
        ybr_full_to_rgb(&mut pixels);
        assert_eq!(pixels, [76, 231, 255]);
    }

    #[test]
    fn results_are_truncated() {
        let mut pixels = [10, 128, 127, 7];
        ybr_full_to_rgb(&mut pixels);
        assert_eq!(pixels, [8, 10, 10, 7]);
    }
}
