use super::RenderConfig;
use crate::Palette;

// swatch names are right-justified to this width
const NAME_WIDTH: usize = 12;

/// Plain output always prints lowercase hex, regardless of `rgb` and `compress`.
pub(super) fn render(palette: &Palette, config: &RenderConfig) -> String {
    let mut out = String::new();

    for (name, swatch) in palette {
        let line = format!(
            "{name:>width$}: {hex}, population: {population}\n",
            width = NAME_WIDTH,
            hex = swatch.color().to_hex(true),
            population = swatch.population(),
        );

        if config.lowercase {
            out.push_str(&line.to_lowercase());
        } else {
            out.push_str(&line);
        }
    }

    out
}
