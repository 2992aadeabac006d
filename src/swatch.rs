use crate::color::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    color: Color,
    population: u32,
    title_text_color: Color,
}

impl Swatch {
    pub fn new(color: Color, population: u32) -> Swatch {
        Self::with_title_text_color(color, population, color.title_text_color())
    }

    pub fn with_title_text_color(color: Color, population: u32, title_text_color: Color) -> Swatch {
        Self {
            color,
            population,
            title_text_color,
        }
    }

    pub fn color(self) -> Color {
        self.color
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        self.color.rgb()
    }

    pub fn hsl(self) -> (f32, f32, f32) {
        self.color.hsl()
    }

    pub fn population(self) -> u32 {
        self.population
    }

    pub fn title_text_color(self) -> Color {
        self.title_text_color
    }
}
