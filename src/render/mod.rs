//! Text renderers for a [`Palette`].
//!
//! Every renderer is a pure function of the palette and a [`RenderConfig`]: swatches are visited in
//! name order and the whole payload, including its trailing newline, is returned as one string.

mod css;
mod json;
mod plain;

use crate::{error::Result, Palette};

/// Options resolved once from the command line and shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Strip optional whitespace from JSON and CSS output.
    pub compress: bool,
    /// Lowercase names and color literals.
    pub lowercase: bool,
    /// Print `rgb(r,g,b)` instead of hex colors.
    pub rgb: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            compress: false,
            lowercase: true,
            rgb: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Renderer {
    /// One aligned `name: #hex, population: n` line per swatch.
    #[default]
    Plain,
    Json,
    Css,
}

impl Renderer {
    pub fn render(self, palette: &Palette, config: &RenderConfig) -> Result<String> {
        match self {
            Renderer::Plain => Ok(plain::render(palette, config)),
            Renderer::Json => json::render(palette, config),
            Renderer::Css => Ok(css::render(palette, config)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Swatch};
    use pretty_assertions::assert_eq;

    const RENDERERS: [Renderer; 3] = [Renderer::Plain, Renderer::Json, Renderer::Css];

    fn sample_palette() -> Palette {
        [
            ("Vibrant", Swatch::new(Color::new(0xC8, 0x1E, 0x2A), 120)),
            ("DarkMuted", Swatch::new(Color::new(0x33, 0x44, 0x55), 37)),
            ("LightVibrant", Swatch::new(Color::new(0xFF, 0xEE, 0xAA), 9)),
        ]
        .into_iter()
        .collect()
    }

    fn all_configs() -> Vec<RenderConfig> {
        let mut configs = Vec::new();
        for compress in [false, true] {
            for lowercase in [false, true] {
                for rgb in [false, true] {
                    configs.push(RenderConfig {
                        compress,
                        lowercase,
                        rgb,
                    });
                }
            }
        }
        configs
    }

    #[test]
    fn test_lowercase_output_has_no_uppercase() {
        let palette = sample_palette();

        for renderer in RENDERERS {
            for config in all_configs().into_iter().filter(|config| config.lowercase) {
                let output = renderer.render(&palette, &config).unwrap();
                assert!(
                    !output.chars().any(|c| c.is_ascii_uppercase()),
                    "{renderer:?} {config:?} produced {output:?}"
                );
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let palette = sample_palette();

        for renderer in RENDERERS {
            for config in all_configs() {
                assert_eq!(
                    renderer.render(&palette, &config).unwrap(),
                    renderer.render(&palette.clone(), &config).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_empty_palette() {
        let palette = Palette::new();

        for config in all_configs() {
            assert_eq!(Renderer::Plain.render(&palette, &config).unwrap(), "");
            assert_eq!(Renderer::Json.render(&palette, &config).unwrap(), "{}\n");
            assert_eq!(Renderer::Css.render(&palette, &config).unwrap(), "");
        }
    }

    #[test]
    fn test_unknown_names_are_rendered() {
        let palette = [("Accent", Swatch::new(Color::new(1, 2, 3), 4))].into_iter().collect::<Palette>();
        let config = RenderConfig::default();

        for renderer in RENDERERS {
            assert!(renderer.render(&palette, &config).unwrap().contains("accent"));
        }
    }

    #[test]
    fn test_default_config() {
        assert_eq!(
            RenderConfig::default(),
            RenderConfig {
                compress: false,
                lowercase: true,
                rgb: false
            }
        );
        assert_eq!(Renderer::default(), Renderer::Plain);
    }
}
