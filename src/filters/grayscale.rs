//! Grayscale conversion filter.
//!
//! Replaces each pixel with the rounded mean of its own three channels,
//! leaving a neutral gray of the same overall brightness. Unlike a
//! luminosity-weighted conversion, all channels count equally here.

use crate::image::{Image, Pixel};

/// Convert the image to grayscale in place.
///
/// Every channel becomes `round((r + g + b) / 3)`, rounding half away from
/// zero. The mean of three values in 0-255 is itself in range, so no
/// clamping is involved. Applying the filter twice is a no-op.
pub fn grayscale(image: &mut Image) {
    for row in 0..image.height() {
        for col in 0..image.width() {
            let px = image.pixel(row, col);
            let avg =
                (f64::from(px.red) + f64::from(px.green) + f64::from(px.blue)) / 3.0;
            let gray = avg.round() as u8;
            image.set(row, col, Pixel::new(gray, gray, gray));
        }
    }
}
