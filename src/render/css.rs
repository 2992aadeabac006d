use super::RenderConfig;
use crate::{Color, Palette};

// optional whitespace and the last semicolon of a rule
struct Layout {
    space: &'static str,
    newline: &'static str,
    indent: &'static str,
    semicolon: &'static str,
}

const PRETTY: Layout = Layout {
    space: " ",
    newline: "\n",
    indent: "  ",
    semicolon: ";",
};

const COMPRESSED: Layout = Layout {
    space: "",
    newline: "",
    indent: "",
    semicolon: "",
};

/// One `.name` rule per swatch setting `background-color` to the swatch color and `color` to its
/// title text color.
///
/// Pretty rules are each followed by a blank line. Compressed rules are concatenated and the
/// stylesheet ends with a single newline.
pub(super) fn render(palette: &Palette, config: &RenderConfig) -> String {
    let Layout {
        space: sp,
        newline: lf,
        indent: tb,
        semicolon: sc,
    } = if config.compress { COMPRESSED } else { PRETTY };

    let mut out = String::new();

    for (name, swatch) in palette {
        let name = if config.lowercase {
            name.to_lowercase()
        } else {
            name.to_string()
        };
        let background = literal(swatch.color(), config);
        let foreground = literal(swatch.title_text_color(), config);

        out.push_str(&format!(
            ".{name}{sp}{{{lf}\
             {tb}background-color:{sp}{background};{lf}\
             {tb}color:{sp}{foreground}{sc}{lf}\
             }}{lf}{lf}"
        ));
    }

    if config.compress && !out.is_empty() {
        out.push('\n');
    }

    out
}

fn literal(color: Color, config: &RenderConfig) -> String {
    if config.rgb {
        color.to_rgb_functional()
    } else if config.compress {
        color.to_short_hex(config.lowercase)
    } else {
        color.to_hex(config.lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Swatch;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn vibrant_red() -> Palette {
        [(
            "Vibrant",
            Swatch::with_title_text_color(Color::new(255, 0, 0), 120, Color::WHITE),
        )]
        .into_iter()
        .collect()
    }

    fn two_swatches() -> Palette {
        [
            (
                "Vibrant",
                Swatch::with_title_text_color(Color::new(255, 0, 0), 120, Color::WHITE),
            ),
            (
                "LightMuted",
                Swatch::with_title_text_color(Color::new(0xc0, 0xb4, 0xaa), 30, Color::BLACK),
            ),
        ]
        .into_iter()
        .collect()
    }

    fn config(compress: bool, lowercase: bool, rgb: bool) -> RenderConfig {
        RenderConfig {
            compress,
            lowercase,
            rgb,
        }
    }

    // selector -> (background-color, color), ignoring layout
    fn parse(css: &str) -> BTreeMap<String, (String, String)> {
        css.split('}')
            .filter(|rule| !rule.trim().is_empty())
            .map(|rule| {
                let (selector, body) = rule.split_once('{').unwrap();
                let declarations = body
                    .split(';')
                    .filter_map(|declaration| declaration.split_once(':'))
                    .map(|(property, value)| (property.trim().to_string(), value.trim().to_string()))
                    .collect::<BTreeMap<_, _>>();

                (
                    selector.trim().to_string(),
                    (declarations["background-color"].clone(), declarations["color"].clone()),
                )
            })
            .collect()
    }

    #[test]
    fn test_pretty_lowercase_hex() {
        assert_eq!(
            render(&vibrant_red(), &config(false, true, false)),
            ".vibrant {\n  background-color: #ff0000;\n  color: #ffffff;\n}\n\n"
        );
    }

    #[test]
    fn test_pretty_keeps_case_without_lowercase() {
        assert_eq!(
            render(&vibrant_red(), &config(false, false, false)),
            ".Vibrant {\n  background-color: #FF0000;\n  color: #FFFFFF;\n}\n\n"
        );
    }

    #[test]
    fn test_compressed_uses_short_hex() {
        assert_eq!(
            render(&two_swatches(), &config(true, true, false)),
            ".lightmuted{background-color:#c0b4aa;color:#000}.vibrant{background-color:#f00;color:#fff}\n"
        );
    }

    #[test]
    fn test_compressed_rgb_never_shortens() {
        assert_eq!(
            render(&vibrant_red(), &config(true, true, true)),
            ".vibrant{background-color:rgb(255,0,0);color:rgb(255,255,255)}\n"
        );
    }

    #[test]
    fn test_pretty_rgb() {
        assert_eq!(
            render(&vibrant_red(), &config(false, false, true)),
            ".Vibrant {\n  background-color: rgb(255,0,0);\n  color: rgb(255,255,255);\n}\n\n"
        );
    }

    #[test]
    fn test_compression_only_changes_layout() {
        for lowercase in [false, true] {
            for rgb in [false, true] {
                let compressed = parse(&render(&two_swatches(), &config(true, lowercase, rgb)));
                let pretty = parse(&render(&two_swatches(), &config(false, lowercase, rgb)));

                let decode = |rules: BTreeMap<String, (String, String)>| {
                    rules
                        .into_iter()
                        .map(|(selector, (bg, fg))| {
                            (selector, (bg.parse::<Color>().unwrap(), fg.parse::<Color>().unwrap()))
                        })
                        .collect::<BTreeMap<_, _>>()
                };

                assert_eq!(decode(compressed), decode(pretty));
            }
        }
    }

    #[test]
    fn test_empty_palette() {
        assert_eq!(render(&Palette::new(), &config(false, true, false)), "");
        assert_eq!(render(&Palette::new(), &config(true, true, false)), "");
    }
}
