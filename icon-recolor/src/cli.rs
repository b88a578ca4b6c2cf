use clap::Parser;
use std::path::PathBuf;

use crate::color::parse_hex;

#[derive(Parser, Debug)]
#[command(
    name = "icon-recolor",
    about = "Recolor blue branding icons to a custom color",
    long_about = "
Icon Recolorer

Takes an icon whose branding is blue and creates a recolored version based on
a user-provided color. Blue pixels are detected heuristically and shifted to
the target hue while keeping their original shading, so gradients and
highlights survive the recolor. Output format follows the output file
extension; .ico output embeds a full multi-resolution size set.

Example Usage:
  # Recolor to red (PNG output)
  icon-recolor icon.png icon-red.png 255 0 0

  # Recolor to purple (ICO output with 16/32/48/64 sizes)
  icon-recolor icon.png icon-purple.ico 128 0 128

  # Hex color, desktop ICO with 128/256 (and 512+ for large sources)
  icon-recolor icon.png icon-brown.ico '#b14b0b' --desktop

  # Same color via the --hex option
  icon-recolor icon.png icon-blue.ico --hex '#0066CC'

  # Widen the blue detection window
  icon-recolor icon.png icon-orange.png 255 165 0 --tolerance 50

  # Flat replacement instead of shading-preserving hue shift
  icon-recolor icon.png icon-flat.png 255 0 0 --no-preserve-brightness"
)]
pub struct Args {
    /// Input icon file (PNG, ICO, etc.)
    pub input: PathBuf,

    /// Output icon file - format determined by extension
    pub output: PathBuf,

    /// Color input: either 3 RGB values (255 0 0) or a hex code (#FF0000)
    #[arg(value_name = "COLOR")]
    pub color: Vec<String>,

    /// Hex color code (e.g., #FF0000 or #b14b0b)
    #[arg(long = "hex", value_name = "#RRGGBB")]
    pub hex: Option<String>,

    /// Color matching tolerance per channel
    #[arg(long = "tolerance", default_value_t = 30, value_name = "N")]
    pub tolerance: i32,

    /// Generate larger icon sizes optimized for desktop use
    #[arg(long = "desktop")]
    pub desktop: bool,

    /// Don't preserve original brightness/saturation (flat replacement)
    #[arg(long = "no-preserve-brightness")]
    pub no_preserve_brightness: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Resolve the target color from the positional arguments or --hex.
    ///
    /// Exactly one of the two forms must be present: either three RGB
    /// components (or a single positional hex literal) or the --hex option.
    pub fn parse_target_color(&self) -> Result<[u8; 3], String> {
        if !self.color.is_empty() && self.hex.is_some() {
            return Err(
                "Please provide either color values OR --hex option, not both".to_string(),
            );
        }

        if self.color.is_empty() {
            return match &self.hex {
                Some(hex) => parse_hex(hex),
                None => Err(
                    "Please provide color input: either RGB values (R G B) or hex code (#FF0000)"
                        .to_string(),
                ),
            };
        }

        // Single positional argument starting with '#' is a hex literal
        if self.color.len() == 1 && self.color[0].starts_with('#') {
            return parse_hex(&self.color[0]);
        }

        if self.color.len() != 3 {
            return Err(
                "RGB requires exactly 3 values (R G B) or use hex format (#FF0000)".to_string(),
            );
        }

        let mut rgb = [0u8; 3];
        for (i, channel) in ["R", "G", "B"].iter().enumerate() {
            let value: i64 = self.color[i]
                .parse()
                .map_err(|_| "RGB values must be numbers".to_string())?;
            if !(0..=255).contains(&value) {
                return Err(format!("{} value must be between 0 and 255", channel));
            }
            rgb[i] = value as u8;
        }

        Ok(rgb)
    }

    pub fn preserve_brightness(&self) -> bool {
        !self.no_preserve_brightness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_components() {
        let args = Args {
            color: vec!["255".into(), "0".into(), "128".into()],
            ..Default::default()
        };
        assert_eq!(args.parse_target_color().unwrap(), [255, 0, 128]);
    }

    #[test]
    fn test_parse_positional_hex() {
        let args = Args {
            color: vec!["#b14b0b".into()],
            ..Default::default()
        };
        assert_eq!(args.parse_target_color().unwrap(), [177, 75, 11]);
    }

    #[test]
    fn test_parse_hex_option() {
        let args = Args {
            hex: Some("#0066CC".into()),
            ..Default::default()
        };
        assert_eq!(args.parse_target_color().unwrap(), [0, 102, 204]);
    }

    #[test]
    fn test_both_color_forms_rejected() {
        let args = Args {
            color: vec!["255".into(), "0".into(), "0".into()],
            hex: Some("#FF0000".into()),
            ..Default::default()
        };
        assert!(args.parse_target_color().is_err());
    }

    #[test]
    fn test_missing_color_rejected() {
        let args = Args::default();
        assert!(args.parse_target_color().is_err());
    }

    #[test]
    fn test_out_of_range_component() {
        let args = Args {
            color: vec!["255".into(), "300".into(), "0".into()],
            ..Default::default()
        };
        let err = args.parse_target_color().unwrap_err();
        assert!(err.contains("G value"));
    }

    #[test]
    fn test_non_numeric_component() {
        let args = Args {
            color: vec!["red".into(), "0".into(), "0".into()],
            ..Default::default()
        };
        assert!(args.parse_target_color().is_err());
    }

    #[test]
    fn test_wrong_component_count() {
        let args = Args {
            color: vec!["255".into(), "0".into()],
            ..Default::default()
        };
        assert!(args.parse_target_color().is_err());
    }

    #[test]
    fn test_preserve_brightness_default() {
        let args = Args::default();
        assert!(args.preserve_brightness());

        let args = Args {
            no_preserve_brightness: true,
            ..Default::default()
        };
        assert!(!args.preserve_brightness());
    }
}

// Default implementation for tests
#[cfg(test)]
impl Default for Args {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            color: vec![],
            hex: None,
            tolerance: 30,
            desktop: false,
            no_preserve_brightness: false,
            verbose: false,
        }
    }
}
