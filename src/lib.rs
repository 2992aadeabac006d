// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Extract the prominent colors of an image and print them as plain text, JSON or CSS.
//!
//! The extraction is a reimplementation of the Palette library in Android Jetpack. Android Jetpack is Copyright 2018
//! The Android Open Source Project. Android Jetpack is licensed under the Apache License, Version 2.0.
//!
//! [Original source.](https://github.com/androidx/androidx/tree/f4eca2c46040cab36ebf7f34e68bdd973110e4a5/palette/palette/src/main/java/androidx/palette/graphics)
//!
//! [Android Jetpack license.](https://github.com/androidx/androidx/blob/7b7922489f9a7572f4462558691bf5550dd65c26/LICENSE.txt)
//!
//! ```no_run
//! use vibrant::{decode, ImageSource, Palette, RenderConfig, Renderer};
//!
//! let bytes = ImageSource::File("cover.jpg".into()).read()?;
//! let palette = Palette::from_image(decode(&bytes)?).generate()?;
//! print!("{}", Renderer::Css.render(&palette, &RenderConfig::default())?);
//! # Ok::<(), vibrant::Error>(())
//! ```

pub mod cli;
mod color;
mod color_cut_quantizer;
mod decode;
mod error;
mod filter;
pub mod render;
mod swatch;
pub mod target;

pub const DEFAULT_CALCULATE_NUMBER_COLORS: usize = 16;
pub const DEFAULT_RESIZE_IMAGE_AREA: u32 = 112 * 112;

pub use crate::{
    color::Color,
    decode::{decode, ImageSource},
    error::{Error, Result},
    filter::{DefaultFilter, Filter},
    render::{RenderConfig, Renderer},
    swatch::Swatch,
    target::Target,
};
pub use image;

use color_cut_quantizer::ColorCutQuantizer;
use image::{math::Rect, GenericImageView, RgbImage};
use serde::Serialize;
use std::collections::{btree_map, BTreeMap, HashSet};
use tracing::{debug, warn};

/// The named swatches of one image, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    swatches: BTreeMap<String, Swatch>,
}

pub struct PaletteBuilder {
    image: RgbImage,
    targets: Vec<Target>,
    maximum_color_count: usize,
    resize_area: u32,
    region: Option<Rect>,
    filters: Vec<Box<dyn Filter>>,
}

impl Palette {
    pub fn new() -> Palette {
        Self::default()
    }

    pub fn from_image(image: RgbImage) -> PaletteBuilder {
        PaletteBuilder::from_image(image)
    }

    pub fn insert(&mut self, name: impl Into<String>, swatch: Swatch) -> Option<Swatch> {
        self.swatches.insert(name.into(), swatch)
    }

    pub fn get(&self, name: &str) -> Option<Swatch> {
        self.swatches.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.swatches.iter())
    }

    pub fn get_swatch_for_target(&self, target: Target) -> Option<Swatch> {
        self.get(target.name())
    }

    pub fn light_vibrant_swatch(&self) -> Option<Swatch> {
        self.get_swatch_for_target(Target::light_vibrant())
    }

    pub fn vibrant_swatch(&self) -> Option<Swatch> {
        self.get_swatch_for_target(Target::vibrant())
    }

    pub fn dark_vibrant_swatch(&self) -> Option<Swatch> {
        self.get_swatch_for_target(Target::dark_vibrant())
    }

    pub fn light_muted_swatch(&self) -> Option<Swatch> {
        self.get_swatch_for_target(Target::light_muted())
    }

    pub fn muted_swatch(&self) -> Option<Swatch> {
        self.get_swatch_for_target(Target::muted())
    }

    pub fn dark_muted_swatch(&self) -> Option<Swatch> {
        self.get_swatch_for_target(Target::dark_muted())
    }

    pub fn most_prominent_swatch(&self) -> Option<Swatch> {
        self.swatches.values().copied().max_by_key(|swatch| swatch.population())
    }

    fn generate(swatches: &[Swatch], mut targets: Vec<Target>) -> Palette {
        let max_population = swatches.iter().map(|swatch| swatch.population()).max().unwrap_or(0);
        let mut palette = Palette::new();
        let mut used_colors = HashSet::new();

        for target in &mut targets {
            target.normalize_weights();

            match generate_scored_target(swatches, *target, max_population, &mut used_colors) {
                Some(swatch) => {
                    debug!(target_name = target.name(), color = %swatch.color(), "selected swatch");
                    palette.insert(target.name(), swatch);
                }
                None => debug!(target_name = target.name(), "no swatch matches target"),
            }
        }

        palette
    }
}

/// Iterator over `(name, swatch)` pairs of a [`Palette`] in name order.
#[derive(Debug, Clone)]
pub struct Iter<'a>(btree_map::Iter<'a, String, Swatch>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, Swatch);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(name, swatch)| (name.as_str(), *swatch))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = (&'a str, Swatch);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N> FromIterator<(N, Swatch)> for Palette
where
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, Swatch)>>(iter: I) -> Self {
        Self {
            swatches: iter.into_iter().map(|(name, swatch)| (name.into(), swatch)).collect(),
        }
    }
}

impl PaletteBuilder {
    pub fn from_image(image: RgbImage) -> Self {
        Self {
            image,
            targets: Target::default_targets().to_vec(),
            maximum_color_count: DEFAULT_CALCULATE_NUMBER_COLORS,
            resize_area: DEFAULT_RESIZE_IMAGE_AREA,
            region: None,
            filters: vec![Box::new(DefaultFilter)],
        }
    }

    pub fn maximum_color_count(self, maximum_color_count: usize) -> Self {
        Self {
            maximum_color_count,
            ..self
        }
    }

    /// Images larger than this area are scaled down before quantization. 0 disables scaling.
    pub fn resize_image_area(self, resize_area: u32) -> Self {
        Self { resize_area, ..self }
    }

    pub fn region(self, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            region: Some(Rect { x, y, width, height }),
            ..self
        }
    }

    pub fn add_target(mut self, target: Target) -> Self {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }

        self
    }

    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn clear_region(self) -> Self {
        Self { region: None, ..self }
    }

    pub fn clear_targets(self) -> Self {
        Self {
            targets: Vec::new(),
            ..self
        }
    }

    pub fn clear_filters(self) -> Self {
        Self {
            filters: Vec::new(),
            ..self
        }
    }

    /// Quantize the image and pick a swatch for each target.
    ///
    /// Fails with [`Error::Extraction`] if the image (or region) has no pixels or if every color in it is
    /// filtered out. Targets no swatch qualifies for are left out of the palette.
    pub fn generate(mut self) -> Result<Palette> {
        if let Some(scale) = self.scale_image_down() {
            if let Some(region) = self.region {
                // scale down the region to match the new scaled image
                self.region = Some(Rect {
                    x: (region.x as f32 * scale).floor() as u32,
                    y: (region.y as f32 * scale).floor() as u32,
                    width: (region.width as f32 * scale).ceil() as u32,
                    height: (region.height as f32 * scale).ceil() as u32,
                });
            }
        }

        let (width, height) = self.image.dimensions();
        let region = self.region.unwrap_or(Rect {
            x: 0,
            y: 0,
            width,
            height,
        });

        // keep the region inside the image
        let x = region.x.min(width);
        let y = region.y.min(height);
        let view = self
            .image
            .view(x, y, region.width.min(width - x), region.height.min(height - y));

        if view.width() == 0 || view.height() == 0 {
            return Err(Error::Extraction("image has no pixels".to_string()));
        }

        let pixels = view.pixels().map(|(_, _, p)| Color::new(p[0], p[1], p[2])).collect();
        let quantizer = ColorCutQuantizer::new(pixels, self.maximum_color_count, &self.filters);
        let swatches = quantizer.quantized_colors();
        debug!(count = swatches.len(), "quantized image colors");

        if swatches.is_empty() {
            return Err(Error::Extraction("no colors left after filtering".to_string()));
        }

        let palette = Palette::generate(&swatches, self.targets);
        if palette.is_empty() {
            warn!("no swatch matched any target");
        }

        Ok(palette)
    }

    // returns the ratio the image was scaled by, if it was
    fn scale_image_down(&mut self) -> Option<f32> {
        let (width, height) = self.image.dimensions();
        let area = width as u64 * height as u64;

        if self.resize_area == 0 || area <= self.resize_area as u64 {
            return None;
        }

        let scale_ratio = (self.resize_area as f64 / area as f64).sqrt() as f32;
        let scaled_width = (width as f32 * scale_ratio).ceil() as u32;
        let scaled_height = (height as f32 * scale_ratio).ceil() as u32;
        debug!(width, height, scaled_width, scaled_height, "scaling image down");

        self.image = image::imageops::resize(
            &self.image,
            scaled_width,
            scaled_height,
            image::imageops::FilterType::Nearest,
        );

        Some(scale_ratio)
    }
}

fn generate_scored_target(
    swatches: &[Swatch],
    target: Target,
    max_population: u32,
    used_colors: &mut HashSet<Color>,
) -> Option<Swatch> {
    let swatch = get_max_scored_swatch_for_target(swatches, target, max_population, used_colors)?;

    if target.is_exclusive() {
        used_colors.insert(swatch.color());
    }

    Some(swatch)
}

fn get_max_scored_swatch_for_target(
    swatches: &[Swatch],
    target: Target,
    max_population: u32,
    used_colors: &HashSet<Color>,
) -> Option<Swatch> {
    let mut max_score = 0.0;
    let mut max_score_swatch = None;

    for swatch in swatches.iter().copied() {
        if should_be_scored_for_target(swatch, target, used_colors) {
            let score = generate_score(swatch, target, max_population);

            if max_score_swatch.is_none() || score > max_score {
                max_score_swatch = Some(swatch);
                max_score = score;
            }
        }
    }

    max_score_swatch
}

fn should_be_scored_for_target(swatch: Swatch, target: Target, used_colors: &HashSet<Color>) -> bool {
    let (_, saturation, lightness) = swatch.hsl();

    (target.minimum_saturation()..=target.maximum_saturation()).contains(&saturation)
        && (target.minimum_lightness()..=target.maximum_lightness()).contains(&lightness)
        && !used_colors.contains(&swatch.color())
}

fn generate_score(swatch: Swatch, target: Target, max_population: u32) -> f32 {
    let (_, saturation, lightness) = swatch.hsl();

    let saturation_score = if target.saturation_weight() > 0.0 {
        target.saturation_weight() * (1.0 - (saturation - target.target_saturation()).abs())
    } else {
        0.0
    };

    let luminance_score = if target.lightness_weight() > 0.0 {
        target.lightness_weight() * (1.0 - (lightness - target.target_lightness()).abs())
    } else {
        0.0
    };

    let population_score = if target.population_weight() > 0.0 && max_population > 0 {
        target.population_weight() * (swatch.population() as f32 / max_population as f32)
    } else {
        0.0
    };

    saturation_score + luminance_score + population_score
}
