use std::collections::HashMap;
use std::env;
use std::io::Write;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use termcolor::{Ansi, ColorChoice, ColorSpec, WriteColor};

use crate::error::QuillError;
use crate::style;
use crate::writer::EOL;

lazy_static! {
    static ref STYLE_NAME: Regex = Regex::new("^[a-z][a-z0-9]*$").unwrap();
    static ref MARKUP_TAG: Regex =
        Regex::new("<(?P<name>[a-zA-Z][a-zA-Z0-9]*)>(?P<body>.*?)</end>").unwrap();
}

/// Renders text under a named style. Style names are camel cased combinations
/// of the tokens in the static style table, e.g. `red`, `bgRedBold` or
/// `warn`, plus any custom styles registered through [`Colorizer::define`].
#[derive(Debug, Clone)]
pub struct Colorizer {
    enabled: bool,
    custom: HashMap<String, ColorSpec>,
}

impl Default for Colorizer {
    fn default() -> Colorizer {
        Colorizer::new(ColorChoice::Auto)
    }
}

impl Colorizer {
    /// The color choice is resolved once, here. `Auto` checks the environment
    /// the same way termcolor's stream types do.
    pub fn new(choice: ColorChoice) -> Colorizer {
        let enabled: bool = match choice {
            ColorChoice::Always | ColorChoice::AlwaysAnsi => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => env_allows_color(),
        };

        Colorizer {
            enabled,
            custom: HashMap::new(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Register a custom style. Names must be lowercase alphanumeric so that
    /// camel cased combinations stay unambiguous, and built in tokens cannot
    /// be shadowed.
    pub fn define(&mut self, name: &str, spec: ColorSpec) -> Result<(), QuillError> {
        if !STYLE_NAME.is_match(name) {
            return Err(QuillError::Theme(format!("Invalid style name '{name}'")));
        }
        if style::token(name).is_some() {
            return Err(QuillError::Theme(format!(
                "Style '{name}' is built in and cannot be redefined"
            )));
        }

        log::debug!("Registered custom style '{name}'");
        self.custom.insert(name.to_string(), spec);

        Ok(())
    }

    /// Resolve a combined style name into a single color spec. Custom styles
    /// take precedence over the static table.
    pub fn spec(&self, name: &str) -> Result<ColorSpec, QuillError> {
        let mut spec = ColorSpec::new();
        for token in style::split_tokens(name) {
            match self.custom.get(&token) {
                Some(custom) => merge(&mut spec, custom),
                None => match style::token(&token) {
                    Some(t) => t.apply(&mut spec),
                    None => return Err(QuillError::UnknownStyle(token)),
                },
            }
        }

        Ok(spec)
    }

    /// Render `text` under the given style name. Returns the text unchanged
    /// when colors are disabled or the style resolves to nothing, as the
    /// neutral `line` style does.
    pub fn render(&self, name: &str, text: &str) -> Result<String, QuillError> {
        let spec: ColorSpec = self.spec(name)?;
        if !self.enabled || spec.is_none() {
            return Ok(text.to_string());
        }

        let mut buf: Ansi<Vec<u8>> = Ansi::new(Vec::with_capacity(text.len() + 16));
        buf.set_color(&spec)?;
        write!(buf, "{text}")?;
        buf.reset()?;

        Ok(String::from_utf8_lossy(&buf.into_inner()).into_owned())
    }

    /// Render inline markup: `<red>text</end>` becomes the styled rendering
    /// of `text`, and `<eol>` becomes a newline. Tags with a name that does
    /// not resolve to a style are left untouched.
    pub fn colorize(&self, markup: &str) -> String {
        let replaced = MARKUP_TAG.replace_all(markup, |caps: &Captures| {
            let name = &caps["name"];
            let body = &caps["body"];
            match self.render(name, body) {
                Ok(styled) => styled,
                Err(_) => {
                    log::warn!("Ignoring unknown style '{name}' in markup");
                    caps[0].to_string()
                }
            }
        });

        replaced.replace("<eol>", EOL)
    }
}

fn merge(into: &mut ColorSpec, from: &ColorSpec) {
    if let Some(fg) = from.fg() {
        into.set_fg(Some(*fg));
    }
    if let Some(bg) = from.bg() {
        into.set_bg(Some(*bg));
    }
    if from.bold() {
        into.set_bold(true);
    }
    if from.dimmed() {
        into.set_dimmed(true);
    }
    if from.italic() {
        into.set_italic(true);
    }
    if from.underline() {
        into.set_underline(true);
    }
}

#[cfg(not(windows))]
fn env_allows_color() -> bool {
    match env::var_os("TERM") {
        // Without TERM set, assume the environment does not support colors
        None => return false,
        Some(term) => {
            if term == "dumb" {
                return false;
            }
        }
    }

    env::var_os("NO_COLOR").is_none()
}

#[cfg(windows)]
fn env_allows_color() -> bool {
    // TERM is usually not set on Windows, so its absence means nothing there
    if let Some(term) = env::var_os("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    env::var_os("NO_COLOR").is_none()
}

#[cfg(test)]
mod tests {
    use termcolor::{Color, ColorChoice, ColorSpec};

    use super::Colorizer;
    use crate::error::QuillError;

    #[test]
    fn spec_resolves_compound_name() -> Result<(), QuillError> {
        let colorizer = Colorizer::new(ColorChoice::Always);
        let spec: ColorSpec = colorizer.spec("bgRedBold")?;

        assert!(spec.fg().is_none());
        assert_eq!(Some(&Color::Red), spec.bg());
        assert!(spec.bold());

        Ok(())
    }

    #[test]
    fn spec_rejects_unknown_token() {
        let colorizer = Colorizer::new(ColorChoice::Always);
        match colorizer.spec("redSparkle") {
            Err(QuillError::UnknownStyle(token)) => assert_eq!("sparkle", token),
            other => panic!("Expected UnknownStyle, got {:?}", other),
        }
    }

    #[test]
    fn render_emits_ansi_codes() -> Result<(), QuillError> {
        let colorizer = Colorizer::new(ColorChoice::Always);

        assert_eq!("\x1b[0m\x1b[31mhi\x1b[0m", colorizer.render("red", "hi")?);
        assert_eq!(
            "\x1b[0m\x1b[1m\x1b[31mhi\x1b[0m",
            colorizer.render("redBold", "hi")?
        );

        Ok(())
    }

    #[test]
    fn render_is_plain_when_disabled() -> Result<(), QuillError> {
        let colorizer = Colorizer::new(ColorChoice::Never);
        assert_eq!("hi", colorizer.render("redBold", "hi")?);

        Ok(())
    }

    #[test]
    fn line_style_renders_plain() -> Result<(), QuillError> {
        let colorizer = Colorizer::new(ColorChoice::Always);
        assert_eq!("hi", colorizer.render("line", "hi")?);

        Ok(())
    }

    #[test]
    fn custom_style_resolves_after_define() -> Result<(), QuillError> {
        let mut colorizer = Colorizer::new(ColorChoice::Always);
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan)).set_underline(true);
        colorizer.define("shout", spec.clone())?;

        assert_eq!(spec, colorizer.spec("shout")?);

        // Custom styles combine with built in tokens like any other
        let combined: ColorSpec = colorizer.spec("shoutBold")?;
        assert!(combined.bold());
        assert_eq!(Some(&Color::Cyan), combined.fg());

        Ok(())
    }

    #[test]
    fn define_rejects_bad_names() {
        let mut colorizer = Colorizer::default();
        assert!(colorizer.define("Shout", ColorSpec::new()).is_err());
        assert!(colorizer.define("sh-out", ColorSpec::new()).is_err());
        assert!(colorizer.define("red", ColorSpec::new()).is_err());
    }

    #[test]
    fn markup_renders_known_tags() {
        let colorizer = Colorizer::new(ColorChoice::Never);
        let out: String = colorizer.colorize("say <red>hi</end> twice");
        assert_eq!("say hi twice", out);
    }

    #[test]
    fn markup_keeps_unknown_tags() {
        let colorizer = Colorizer::new(ColorChoice::Never);
        let out: String = colorizer.colorize("<nope>hi</end>");
        assert_eq!("<nope>hi</end>", out);
    }

    #[test]
    fn markup_expands_eol() {
        let colorizer = Colorizer::new(ColorChoice::Never);
        let out: String = colorizer.colorize("a<eol>b");
        assert_eq!(format!("a{}b", crate::writer::EOL), out);
    }
}
