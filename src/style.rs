use std::collections::HashMap;

use lazy_static::lazy_static;
use termcolor::{Color, ColorSpec};

/// One entry of the known style table: a color, a text attribute, or the
/// neutral `line` token that leaves text unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleToken {
    Fg(Color),
    Bg(Color),
    Bold,
    Dim,
    Italic,
    Underline,
    Plain,
}

impl StyleToken {
    pub fn apply(&self, spec: &mut ColorSpec) {
        match self {
            StyleToken::Fg(color) => {
                spec.set_fg(Some(*color));
            }
            StyleToken::Bg(color) => {
                spec.set_bg(Some(*color));
            }
            StyleToken::Bold => {
                spec.set_bold(true);
            }
            StyleToken::Dim => {
                spec.set_dimmed(true);
            }
            StyleToken::Italic => {
                spec.set_italic(true);
            }
            StyleToken::Underline => {
                spec.set_underline(true);
            }
            StyleToken::Plain => (),
        }
    }
}

lazy_static! {
    static ref TOKENS: HashMap<&'static str, StyleToken> = {
        let mut table: HashMap<&'static str, StyleToken> = HashMap::with_capacity(32);
        table.insert("black", StyleToken::Fg(Color::Black));
        table.insert("red", StyleToken::Fg(Color::Red));
        table.insert("green", StyleToken::Fg(Color::Green));
        table.insert("yellow", StyleToken::Fg(Color::Yellow));
        table.insert("blue", StyleToken::Fg(Color::Blue));
        table.insert("magenta", StyleToken::Fg(Color::Magenta));
        table.insert("cyan", StyleToken::Fg(Color::Cyan));
        table.insert("white", StyleToken::Fg(Color::White));
        table.insert("gray", StyleToken::Fg(Color::Ansi256(8)));
        table.insert("bgBlack", StyleToken::Bg(Color::Black));
        table.insert("bgRed", StyleToken::Bg(Color::Red));
        table.insert("bgGreen", StyleToken::Bg(Color::Green));
        table.insert("bgYellow", StyleToken::Bg(Color::Yellow));
        table.insert("bgBlue", StyleToken::Bg(Color::Blue));
        table.insert("bgMagenta", StyleToken::Bg(Color::Magenta));
        table.insert("bgCyan", StyleToken::Bg(Color::Cyan));
        table.insert("bgWhite", StyleToken::Bg(Color::White));
        table.insert("bold", StyleToken::Bold);
        table.insert("dim", StyleToken::Dim);
        table.insert("italic", StyleToken::Italic);
        table.insert("underline", StyleToken::Underline);
        // Status styles used by CLI output
        table.insert("error", StyleToken::Fg(Color::Red));
        table.insert("warn", StyleToken::Fg(Color::Yellow));
        table.insert("info", StyleToken::Fg(Color::Blue));
        table.insert("ok", StyleToken::Fg(Color::Green));
        table.insert("comment", StyleToken::Fg(Color::Ansi256(8)));
        table.insert("line", StyleToken::Plain);
        table
    };
}

pub fn token(name: &str) -> Option<StyleToken> {
    TOKENS.get(name).copied()
}

/// Split a camel cased style name into its tokens. The `bg` prefix belongs to
/// the color word that follows it, so `bgRedBold` yields `bgRed` and `bold`.
pub fn split_tokens(name: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::with_capacity(4);
    let mut current: String = String::with_capacity(name.len());

    for c in name.chars() {
        if c.is_ascii_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c.to_ascii_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut tokens: Vec<String> = Vec::with_capacity(words.len());
    let mut words = words.into_iter();
    while let Some(word) = words.next() {
        if word == "bg" {
            match words.next() {
                Some(color) => tokens.push(format!("bg{}", ucfirst(&color))),
                None => tokens.push(word),
            }
        } else {
            tokens.push(word);
        }
    }

    tokens
}

/// Join tokens back into one combined camel cased style name.
pub fn combine(tokens: &[String]) -> String {
    let mut name: String = String::with_capacity(16);
    for token in tokens {
        if name.is_empty() {
            name.push_str(token);
        } else {
            name.push_str(&ucfirst(token));
        }
    }

    name
}

fn ucfirst(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use termcolor::{Color, ColorSpec};

    use super::{combine, split_tokens, token, StyleToken};

    #[test]
    fn split_compound_style_name() {
        let tokens: Vec<String> = split_tokens("bgRedBold");
        assert_eq!(vec!["bgRed".to_string(), "bold".to_string()], tokens);
    }

    #[test]
    fn split_single_style_name() {
        let tokens: Vec<String> = split_tokens("red");
        assert_eq!(vec!["red".to_string()], tokens);
    }

    #[test]
    fn split_keeps_dangling_bg() {
        let tokens: Vec<String> = split_tokens("redBg");
        assert_eq!(vec!["red".to_string(), "bg".to_string()], tokens);
    }

    #[test]
    fn combine_tokens_camel_cases() {
        let tokens: Vec<String> = vec!["red".to_string(), "bold".to_string(), "bgBlue".to_string()];
        assert_eq!("redBoldBgBlue", combine(&tokens));
    }

    #[test]
    fn lookup_known_tokens() {
        assert_eq!(Some(StyleToken::Fg(Color::Red)), token("red"));
        assert_eq!(Some(StyleToken::Bg(Color::Cyan)), token("bgCyan"));
        assert_eq!(Some(StyleToken::Plain), token("line"));
        assert_eq!(None, token("sparkle"));
    }

    #[test]
    fn tokens_fold_into_spec() {
        let mut spec = ColorSpec::new();
        StyleToken::Fg(Color::Red).apply(&mut spec);
        StyleToken::Bold.apply(&mut spec);

        assert_eq!(Some(&Color::Red), spec.fg());
        assert!(spec.bold());
        assert!(spec.bg().is_none());
    }
}
