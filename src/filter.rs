use crate::color::Color;

const BLACK_MAX_LIGHTNESS: f32 = 0.05;
const WHITE_MIN_LIGHTNESS: f32 = 0.95;

/// A trait used to implement filters for the image quantization process.
///
/// Filters remove colors from the histogram before quantization, and remove final swatches whose
/// averaged color ends up filtered. Implement this to keep additional colors out of a palette.
///
/// See [`crate::PaletteBuilder::add_filter`] on how to add filters to the quantization process.
pub trait Filter {
    /// Return whether a given color should be allowed or not. The same color is given in both sRGB
    /// and HSL for convenience.
    fn is_allowed(&self, color: Color, hsl: (f32, f32, f32)) -> bool;
}

/// The filter every [`crate::PaletteBuilder`] starts with.
///
/// Disallows colors very close to black, colors very close to white, and skin-like reds and
/// oranges near the I line of the YIQ color space.
#[derive(Debug)]
pub struct DefaultFilter;
impl Filter for DefaultFilter {
    fn is_allowed(&self, _: Color, (h, s, l): (f32, f32, f32)) -> bool {
        !is_black(l) && !is_white(l) && !is_near_red_i_line(h, s)
    }
}

fn is_black(l: f32) -> bool {
    l <= BLACK_MAX_LIGHTNESS
}

fn is_white(l: f32) -> bool {
    l >= WHITE_MIN_LIGHTNESS
}

fn is_near_red_i_line(h: f32, s: f32) -> bool {
    (10.0..=37.0).contains(&h) && s <= 0.82
}
