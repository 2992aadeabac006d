use super::RenderConfig;
use crate::{error::Result, Palette};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
#[serde(untagged)]
enum JsonSwatch {
    // rgb mode only carries the background color
    Rgb {
        r: u8,
        g: u8,
        b: u8,
    },
    Hex {
        #[serde(rename = "Color")]
        color: String,
        #[serde(rename = "Text")]
        text: String,
    },
}

/// Serializes `{name: swatch}` compactly or with 2 space indentation.
///
/// With `lowercase` the finished document is lowercased as a whole, keys included, so
/// `"Color"` becomes `"color"` and `"Vibrant"` becomes `"vibrant"`.
pub(super) fn render(palette: &Palette, config: &RenderConfig) -> Result<String> {
    let swatches = palette
        .iter()
        .map(|(name, swatch)| {
            let value = if config.rgb {
                let (r, g, b) = swatch.rgb();
                JsonSwatch::Rgb { r, g, b }
            } else {
                JsonSwatch::Hex {
                    color: swatch.color().to_hex(false),
                    text: swatch.title_text_color().to_hex(false),
                }
            };

            (name, value)
        })
        .collect::<BTreeMap<_, _>>();

    let mut out = if config.compress {
        serde_json::to_string(&swatches)?
    } else {
        serde_json::to_string_pretty(&swatches)?
    };

    if config.lowercase {
        out = out.to_lowercase();
    }

    out.push('\n');
    Ok(out)
}
