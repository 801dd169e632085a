use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;
use termcolor::{Color, ColorSpec};

use crate::colorize::Colorizer;
use crate::error::QuillError;

/// User defined styles, loaded from a YAML document:
///
/// ```yaml
/// shout: { fg: red, bold: true }
/// muted: { fg: "8", dim: true }
/// ```
///
/// Color values are whatever termcolor accepts: named colors, ANSI-256
/// numbers, or comma separated RGB.
#[derive(Debug, Deserialize)]
pub struct Theme(HashMap<String, StyleDef>);

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleDef {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underline: bool,
}

impl FromStr for Theme {
    type Err = QuillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_yaml::from_str(s).map_err(|e| QuillError::Theme(e.to_string()))
    }
}

impl Theme {
    /// Register every style of this theme on the colorizer. Theme names obey
    /// the same validation as [`Colorizer::define`].
    pub fn apply(&self, colorizer: &mut Colorizer) -> Result<(), QuillError> {
        for (name, def) in &self.0 {
            colorizer.define(name, def.spec()?)?;
        }

        Ok(())
    }
}

impl StyleDef {
    fn spec(&self) -> Result<ColorSpec, QuillError> {
        let mut spec = ColorSpec::new();
        if let Some(fg) = &self.fg {
            spec.set_fg(Some(parse_color(fg)?));
        }
        if let Some(bg) = &self.bg {
            spec.set_bg(Some(parse_color(bg)?));
        }
        spec.set_bold(self.bold);
        spec.set_dimmed(self.dim);
        spec.set_italic(self.italic);
        spec.set_underline(self.underline);

        Ok(spec)
    }
}

fn parse_color(input: &str) -> Result<Color, QuillError> {
    Color::from_str(input).map_err(|e| QuillError::Theme(e.to_string()))
}

#[cfg(test)]
mod tests {
    use termcolor::{Color, ColorChoice, ColorSpec};

    use super::Theme;
    use crate::colorize::Colorizer;
    use crate::error::QuillError;

    #[test]
    fn theme_styles_become_usable() -> Result<(), QuillError> {
        let theme: Theme = "shout: { fg: red, bold: true }\nmuted: { fg: \"8\", dim: true }"
            .parse()?;

        let mut colorizer = Colorizer::new(ColorChoice::Always);
        theme.apply(&mut colorizer)?;

        let shout: ColorSpec = colorizer.spec("shout")?;
        assert_eq!(Some(&Color::Red), shout.fg());
        assert!(shout.bold());

        let muted: ColorSpec = colorizer.spec("muted")?;
        assert_eq!(Some(&Color::Ansi256(8)), muted.fg());
        assert!(muted.dimmed());

        Ok(())
    }

    #[test]
    fn invalid_color_is_rejected() {
        let theme: Theme = "shout: { fg: firetruck }".parse().unwrap();

        let mut colorizer = Colorizer::default();
        match theme.apply(&mut colorizer) {
            Err(QuillError::Theme(_)) => (),
            other => panic!("Expected Theme error, got {:?}", other),
        }
    }

    #[test]
    fn builtin_names_cannot_be_redefined() {
        let theme: Theme = "red: { fg: blue }".parse().unwrap();

        let mut colorizer = Colorizer::default();
        assert!(theme.apply(&mut colorizer).is_err());
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!("shout: [not, a, mapping]".parse::<Theme>().is_err());
    }
}
