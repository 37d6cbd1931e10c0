//! 3x3 box blur filter with edge truncation.

use ndarray::Array3;

use crate::image::{Image, CHANNELS};

/// Blur the image in place with a 3x3 box mean.
///
/// Each output channel is `round(sum / count)` over the valid pixels in the
/// 3x3 neighborhood. Neighbors outside the grid are omitted from both the
/// sum and the count, so interior pixels average 9 contributions, edge
/// pixels 6, corner pixels 4, and a 1x1 image blurs to itself. An average
/// of in-range values stays in range, so no clamping is needed.
pub fn blur(image: &mut Image) {
    let (height, width) = (image.height(), image.width());
    let src = image.data();
    let mut out = Array3::<u8>::zeros((height, width, CHANNELS));

    for row in 0..height {
        for col in 0..width {
            let mut sum = [0u32; CHANNELS];
            let mut count = 0u32;

            for dr in -1isize..=1 {
                let r = row as isize + dr;
                if r < 0 || r >= height as isize {
                    continue;
                }
                for dc in -1isize..=1 {
                    let c = col as isize + dc;
                    if c < 0 || c >= width as isize {
                        continue;
                    }
                    for ch in 0..CHANNELS {
                        sum[ch] += u32::from(src[[r as usize, c as usize, ch]]);
                    }
                    count += 1;
                }
            }

            for ch in 0..CHANNELS {
                out[[row, col, ch]] =
                    (f64::from(sum[ch]) / f64::from(count)).round() as u8;
            }
        }
    }

    image.replace(out);
}
