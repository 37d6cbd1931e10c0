//! Horizontal mirror filter.

use crate::image::Image;

/// Mirror every row of the image in place.
///
/// Columns `c` and `width - 1 - c` are swapped for `c` in `0..width / 2`;
/// the middle column of an odd-width image stays put. Rows are independent.
/// Applying the filter twice restores the original image exactly.
pub fn reflect(image: &mut Image) {
    let width = image.width();
    for row in 0..image.height() {
        for col in 0..width / 2 {
            let left = image.pixel(row, col);
            let right = image.pixel(row, width - 1 - col);
            image.set(row, col, right);
            image.set(row, width - 1 - col, left);
        }
    }
}
