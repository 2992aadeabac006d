use crate::{color::Color, filter::Filter, swatch::Swatch};
use std::collections::{BinaryHeap, HashMap};

const QUANTIZE_WORD_WIDTH: u32 = 5;
const QUANTIZE_WORD_MAX: u8 = (1 << QUANTIZE_WORD_WIDTH) - 1;

/// Median cut quantizer over a 5 bit per channel color histogram.
pub struct ColorCutQuantizer<'f> {
    pixels: Vec<Color>,
    max_colors: usize,
    filters: &'f [Box<dyn Filter>],
}

// a box in the quantized color space, holding a slice of (quantized color, count) entries
struct Vbox<'a> {
    colors: &'a mut [(Color, u32)],
    population: u32,
    red_range: (u8, u8),
    green_range: (u8, u8),
    blue_range: (u8, u8),
}

enum Component {
    Red,
    Green,
    Blue,
}

impl<'f> ColorCutQuantizer<'f> {
    pub fn new(pixels: Vec<Color>, max_colors: usize, filters: &'f [Box<dyn Filter>]) -> Self {
        Self {
            pixels,
            max_colors,
            filters,
        }
    }

    pub fn quantized_colors(self) -> Vec<Swatch> {
        // histogram of the pixels with each channel reduced to the quantize word width
        let mut hist = HashMap::new();
        for pixel in &self.pixels {
            *hist.entry(quantize(*pixel)).or_insert(0u32) += 1;
        }

        // drop histogram entries whose 8 bit approximation is filtered out
        let mut colors = hist
            .into_iter()
            .filter(|(quantized, _)| !self.should_ignore_color(approximate(*quantized)))
            .collect::<Vec<_>>();

        // red is the most significant component of the ordering, blue the least
        colors.sort_by_key(|(quantized, _)| pack(*quantized));

        if colors.len() <= self.max_colors {
            // few enough distinct colors, each one becomes a swatch as-is
            colors
                .into_iter()
                .map(|(quantized, count)| Swatch::new(approximate(quantized), count))
                .collect()
        } else {
            self.quantize_pixels(colors)
        }
    }

    fn quantize_pixels(&self, mut colors: Vec<(Color, u32)>) -> Vec<Swatch> {
        // the queue pops the largest box by volume first, see the Ord impl of Vbox
        let mut pq = BinaryHeap::with_capacity(self.max_colors);
        pq.push(Vbox::new(&mut colors));

        self.split_boxes(&mut pq);

        // the averaged color of a box may itself be filtered
        pq.iter()
            .map(Vbox::average_color)
            .filter(|swatch| !self.should_ignore_color(swatch.color()))
            .collect()
    }

    fn should_ignore_color(&self, color: Color) -> bool {
        let hsl = color.hsl();
        self.filters.iter().any(|filter| !filter.is_allowed(color, hsl))
    }

    fn split_boxes(&self, pq: &mut BinaryHeap<Vbox<'_>>) {
        while pq.len() < self.max_colors {
            match pq.pop() {
                Some(vbox) if vbox.can_split() => {
                    let (left, right) = vbox.split_box();

                    pq.push(left);
                    pq.push(right);
                }
                Some(vbox) => {
                    // the largest box cannot be split any further, and neither can any other
                    pq.push(vbox);
                    return;
                }
                None => return,
            }
        }
    }
}

impl<'a> Vbox<'a> {
    fn new(colors: &'a mut [(Color, u32)]) -> Self {
        // tightly fit the boundaries around the colors within

        let mut population = 0;
        // min, max
        let (mut min_red, mut max_red) = (QUANTIZE_WORD_MAX, 0);
        let (mut min_green, mut max_green) = (QUANTIZE_WORD_MAX, 0);
        let (mut min_blue, mut max_blue) = (QUANTIZE_WORD_MAX, 0);

        for (color, count) in colors.iter() {
            let (r, g, b) = color.rgb();
            population += count;

            min_red = min_red.min(r);
            max_red = max_red.max(r);
            min_green = min_green.min(g);
            max_green = max_green.max(g);
            min_blue = min_blue.min(b);
            max_blue = max_blue.max(b);
        }

        Self {
            colors,
            population,
            red_range: (min_red, max_red),
            green_range: (min_green, max_green),
            blue_range: (min_blue, max_blue),
        }
    }

    fn volume(&self) -> u32 {
        (self.red_range.1 - self.red_range.0 + 1) as u32
            * (self.green_range.1 - self.green_range.0 + 1) as u32
            * (self.blue_range.1 - self.blue_range.0 + 1) as u32
    }

    fn can_split(&self) -> bool {
        self.colors.len() > 1
    }

    fn split_box(self) -> (Vbox<'a>, Vbox<'a>) {
        debug_assert!(self.can_split());

        // sort along the longest dimension and cut at the population midpoint
        let dimension = self.longest_dimension();
        let midpoint = self.population / 2;
        let colors = self.colors;

        colors.sort_by_key(|(color, _)| component(*color, &dimension));
        let split = split_point(colors, midpoint);
        let (left, right) = colors.split_at_mut(split);

        (Vbox::new(left), Vbox::new(right))
    }

    fn longest_dimension(&self) -> Component {
        let red_length = self.red_range.1 - self.red_range.0;
        let green_length = self.green_range.1 - self.green_range.0;
        let blue_length = self.blue_range.1 - self.blue_range.0;

        if red_length >= green_length && red_length >= blue_length {
            Component::Red
        } else if green_length >= red_length && green_length >= blue_length {
            Component::Green
        } else {
            Component::Blue
        }
    }

    fn average_color(&self) -> Swatch {
        let (population, red_sum, green_sum, blue_sum) = self.colors.iter().fold(
            (0u32, 0u32, 0u32, 0u32),
            |(population, red_sum, green_sum, blue_sum), (color, count)| {
                let (r, g, b) = color.rgb();

                (
                    population + count,
                    red_sum + r as u32 * count,
                    green_sum + g as u32 * count,
                    blue_sum + b as u32 * count,
                )
            },
        );

        let mean = |sum: u32| (sum as f32 / population as f32).round() as u8;

        Swatch::new(
            approximate(Color::new(mean(red_sum), mean(green_sum), mean(blue_sum))),
            population,
        )
    }
}

impl Eq for Vbox<'_> {}
impl PartialEq for Vbox<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.volume() == other.volume()
    }
}

impl Ord for Vbox<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.volume().cmp(&other.volume())
    }
}

impl PartialOrd for Vbox<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// index of the first color whose running population crosses the midpoint, never 0 so that both
// halves are non-empty
fn split_point(colors: &[(Color, u32)], midpoint: u32) -> usize {
    let mut population = 0;

    for (i, (_, count)) in colors.iter().enumerate() {
        population += count;

        if population >= midpoint {
            return i.max(1);
        }
    }

    1
}

fn component(color: Color, dimension: &Component) -> u8 {
    match dimension {
        Component::Red => color.red(),
        Component::Green => color.green(),
        Component::Blue => color.blue(),
    }
}

fn pack(quantized: Color) -> u32 {
    let (r, g, b) = quantized.rgb();
    ((r as u32) << (QUANTIZE_WORD_WIDTH + QUANTIZE_WORD_WIDTH)) | ((g as u32) << QUANTIZE_WORD_WIDTH) | b as u32
}

fn quantize(color: Color) -> Color {
    let (r, g, b) = color.rgb();
    Color::new(
        modify_width(r, 8, QUANTIZE_WORD_WIDTH),
        modify_width(g, 8, QUANTIZE_WORD_WIDTH),
        modify_width(b, 8, QUANTIZE_WORD_WIDTH),
    )
}

fn approximate(quantized: Color) -> Color {
    let (r, g, b) = quantized.rgb();
    Color::new(
        modify_width(r, QUANTIZE_WORD_WIDTH, 8),
        modify_width(g, QUANTIZE_WORD_WIDTH, 8),
        modify_width(b, QUANTIZE_WORD_WIDTH, 8),
    )
}

fn modify_width(value: u8, current_width: u32, target_width: u32) -> u8 {
    if target_width > current_width {
        value.wrapping_shl(target_width - current_width)
    } else {
        value.wrapping_shr(current_width - target_width)
    }
}
