//! Command line flags and their resolution into rendering options.

use crate::{ImageSource, RenderConfig, Renderer};
use clap::{builder::BoolishValueParser, ArgAction, Parser};
use std::{ffi::OsString, path::PathBuf};

// long flags that may also be spelled with a single dash, e.g. `-json` or `-lowercase=false`
const SINGLE_DASH_FLAGS: [&str; 6] = ["stdin", "json", "css", "compress", "lowercase", "rgb"];

#[derive(Debug, Parser)]
#[command(name = "vibrant", version)]
#[command(about = "Print the prominent colors of an image as plain text, JSON or CSS")]
#[command(override_usage = "vibrant [options] <FILE>\n       cat image.jpg | vibrant -i [options]")]
pub struct Cli {
    /// Read image data from stdin
    #[arg(short = 'i', long)]
    pub stdin: bool,

    /// Output results in JSON
    #[arg(long, conflicts_with = "css")]
    pub json: bool,

    /// Output results in CSS
    #[arg(long)]
    pub css: bool,

    /// Strip whitespace from output
    #[arg(long)]
    pub compress: bool,

    /// Use lowercase only for all output
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
    )]
    pub lowercase: bool,

    /// Output rgb(r,g,b) instead of HTML hex, e.g. #ffffff
    #[arg(long)]
    pub rgb: bool,

    /// Image file to read
    #[arg(required_unless_present = "stdin")]
    pub file: Option<PathBuf>,
}

impl Cli {
    pub fn renderer(&self) -> Renderer {
        if self.json {
            Renderer::Json
        } else if self.css {
            Renderer::Css
        } else {
            Renderer::Plain
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            compress: self.compress,
            lowercase: self.lowercase,
            rgb: self.rgb,
        }
    }

    pub fn source(&self) -> ImageSource {
        match (self.stdin, &self.file) {
            (false, Some(path)) => ImageSource::File(path.clone()),
            _ => ImageSource::Stdin,
        }
    }
}

/// Rewrite single dash long flags (`-json`) to the double dash form clap expects. The program name
/// and everything after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized = args.next().into_iter().collect::<Vec<_>>();

    for arg in args.by_ref() {
        if arg == "--" {
            normalized.push(arg);
            break;
        }

        let flag = arg
            .to_str()
            .and_then(|s| s.strip_prefix('-'))
            .filter(|rest| !rest.starts_with('-'))
            .filter(|rest| {
                let name = rest.split_once('=').map_or(*rest, |(name, _)| name);
                SINGLE_DASH_FLAGS.contains(&name)
            })
            .map(|rest| OsString::from(format!("--{rest}")));

        normalized.push(flag.unwrap_or(arg));
    }

    normalized.extend(args);
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_args(std::iter::once("vibrant").chain(args.iter().copied())))
    }

    #[test]
    fn test_normalize_args() {
        let normalized = normalize_args(["vibrant", "-json", "-lowercase=false", "-i", "--css", "-x", "--", "-rgb"]);
        assert_eq!(
            normalized,
            ["vibrant", "--json", "--lowercase=false", "-i", "--css", "-x", "--", "-rgb"]
                .map(OsString::from)
                .to_vec()
        );
    }

    #[test]
    fn test_defaults_render_plain() {
        let cli = parse(&["cover.png"]).unwrap();

        assert_eq!(cli.renderer(), Renderer::Plain);
        assert_eq!(cli.render_config(), RenderConfig::default());
        assert_eq!(cli.source(), ImageSource::File("cover.png".into()));
    }

    #[test]
    fn test_go_style_flags() {
        let cli = parse(&["-css", "-compress", "-rgb", "-lowercase=false", "cover.png"]).unwrap();

        assert_eq!(cli.renderer(), Renderer::Css);
        assert_eq!(
            cli.render_config(),
            RenderConfig {
                compress: true,
                lowercase: false,
                rgb: true,
            }
        );
    }

    #[test]
    fn test_lowercase_without_value() {
        let cli = parse(&["-lowercase", "cover.png"]).unwrap();
        assert!(cli.lowercase);
        assert_eq!(cli.file, Some("cover.png".into()));

        let cli = parse(&["--lowercase=0", "cover.png"]).unwrap();
        assert!(!cli.lowercase);
    }

    #[test]
    fn test_stdin_needs_no_file() {
        let cli = parse(&["-i", "-json"]).unwrap();

        assert_eq!(cli.source(), ImageSource::Stdin);
        assert_eq!(cli.renderer(), Renderer::Json);
    }

    #[test]
    fn test_json_and_css_conflict() {
        let error = parse(&["-json", "-css", "cover.png"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_missing_file_is_usage_error() {
        let error = parse(&["-json"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(error.exit_code(), 2);
    }
}
