//! Directional gradient edge detection.
//!
//! Computes a per-channel gradient magnitude with a 3x3 kernel pair: the
//! in-axis center row/column is doubled, corners count once, and the
//! orthogonal center is zero. Out-of-range neighbors are dropped from the
//! sums, so gradients at the border truncate asymmetrically; that is the
//! contract, not an artifact to smooth over.

use ndarray::Array3;

use crate::image::{Image, CHANNELS};

/// Highlight edges in place via directional gradient magnitude.
///
/// For row offset `k` and column offset `l` in `{-1, 0, 1}` the weights are
/// `gx = k * (2 - |l|)` and `gy = l * (2 - |k|)`. Each output channel is
/// `clamp(round(sqrt(sx^2 + sy^2)), 0, 255)` with the sums taken over
/// in-grid neighbors only. All three channels use the same kernel. A uniform
/// image (and a 1x1 image) comes out all black.
pub fn edges(image: &mut Image) {
    let (height, width) = (image.height(), image.width());
    let src = image.data();
    let mut out = Array3::<u8>::zeros((height, width, CHANNELS));

    for row in 0..height {
        for col in 0..width {
            let mut sum_x = [0.0f64; CHANNELS];
            let mut sum_y = [0.0f64; CHANNELS];

            for k in -1isize..=1 {
                let r = row as isize + k;
                if r < 0 || r >= height as isize {
                    continue;
                }
                for l in -1isize..=1 {
                    let c = col as isize + l;
                    if c < 0 || c >= width as isize {
                        continue;
                    }

                    let gx = (k * (2 - l.abs())) as f64;
                    let gy = (l * (2 - k.abs())) as f64;

                    for ch in 0..CHANNELS {
                        let v = f64::from(src[[r as usize, c as usize, ch]]);
                        sum_x[ch] += v * gx;
                        sum_y[ch] += v * gy;
                    }
                }
            }

            for ch in 0..CHANNELS {
                let magnitude =
                    (sum_x[ch] * sum_x[ch] + sum_y[ch] * sum_y[ch]).sqrt();
                out[[row, col, ch]] = magnitude.round().min(255.0) as u8;
            }
        }
    }

    image.replace(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Pixel;

    #[test]
    fn test_uniform_image_goes_black() {
        let mut img = Image::new(3, 4);
        for row in 0..3 {
            for col in 0..4 {
                img.set(row, col, Pixel::new(90, 90, 90));
            }
        }

        edges(&mut img);

        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(img.pixel(row, col), Pixel::new(0, 0, 0));
            }
        }
    }

    #[test]
    fn test_single_pixel_goes_black() {
        let mut img = Image::new(1, 1);
        img.set(0, 0, Pixel::new(255, 255, 255));

        edges(&mut img);

        assert_eq!(img.pixel(0, 0), Pixel::new(0, 0, 0));
    }

    #[test]
    fn test_white_center_on_black() {
        // 3x3 all black except a white center. For every border pixel the
        // only nonzero contribution is the center:
        //   corners see it at |k| = |l| = 1, so |gx| = |gy| = 1 and the
        //     magnitude is 255 * sqrt(2) = 360.6 -> clamped to 255;
        //   edge midpoints see it at one zero offset, so one weight is 2 and
        //     the other 0, giving 510 -> clamped to 255.
        // The center itself sums symmetric zero neighbors: sx = sy = 0.
        let mut img = Image::new(3, 3);
        img.set(1, 1, Pixel::new(255, 255, 255));

        edges(&mut img);

        for row in 0..3 {
            for col in 0..3 {
                let expected = if (row, col) == (1, 1) { 0 } else { 255 };
                assert_eq!(
                    img.pixel(row, col),
                    Pixel::new(expected, expected, expected),
                    "at ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_dim_center_exact_magnitudes() {
        // Same geometry with a center value of 10 keeps everything below the
        // clamp so the exact magnitudes are visible:
        //   corners: sqrt(10^2 + 10^2) = 14.14 -> 14
        //   edge midpoints: sqrt(20^2 + 0) = 20
        let mut img = Image::new(3, 3);
        img.set(1, 1, Pixel::new(10, 10, 10));

        edges(&mut img);

        assert_eq!(img.pixel(0, 0).red, 14);
        assert_eq!(img.pixel(0, 2).red, 14);
        assert_eq!(img.pixel(2, 0).red, 14);
        assert_eq!(img.pixel(2, 2).red, 14);
        assert_eq!(img.pixel(0, 1).red, 20);
        assert_eq!(img.pixel(1, 0).red, 20);
        assert_eq!(img.pixel(1, 2).red, 20);
        assert_eq!(img.pixel(2, 1).red, 20);
        assert_eq!(img.pixel(1, 1).red, 0);
    }

    #[test]
    fn test_vertical_step_edge() {
        // Left column 0, right column 100, on a 3x2 image. At (1, 0) the
        // in-grid neighbors with value 100 sit at l = 1, k in {-1, 0, 1}:
        //   sx = 100 * (-1*1 + 0 + 1*1) = 0
        //   sy = 100 * (1*1 + 1*2 + 1*1) = 400 -> clamped to 255
        let mut img = Image::new(3, 2);
        for row in 0..3 {
            img.set(row, 1, Pixel::new(100, 100, 100));
        }

        edges(&mut img);

        assert_eq!(img.pixel(1, 0).red, 255);
    }

    #[test]
    fn test_channels_processed_independently() {
        let mut img = Image::new(3, 3);
        // Gradient only in the green channel.
        img.set(1, 1, Pixel::new(0, 10, 0));

        edges(&mut img);

        let px = img.pixel(0, 1);
        assert_eq!(px.red, 0);
        assert_eq!(px.green, 20);
        assert_eq!(px.blue, 0);
    }
}
