use std::fmt::Display;
use std::io::{self, Write};

use crate::colorize::Colorizer;
use crate::cursor;
use crate::error::QuillError;
use crate::sink::{OutputTarget, Sink};
use crate::style;

#[cfg(windows)]
pub const EOL: &str = "\r\n";
#[cfg(not(windows))]
pub const EOL: &str = "\n";

const DEFAULT_STYLE: &str = "line";

/// Writes styled text and cursor control sequences to a pair of sinks.
///
/// Styles are queued with [`Writer::style`] or the named shorthands and
/// consumed by the next [`Writer::write`]:
///
/// ```no_run
/// use quill::Writer;
///
/// let mut writer = Writer::default();
/// writer.red().bold().write("look out!", true)?;
/// writer.write("back to normal", true)?;
/// # Ok::<(), quill::QuillError>(())
/// ```
///
/// A queued style name containing `error` sends that write to the error sink
/// instead of the normal one.
pub struct Writer {
    out: Sink,
    err: Sink,
    pending: Vec<String>,
    colorizer: Colorizer,
}

impl Default for Writer {
    fn default() -> Writer {
        Writer::new(Colorizer::default())
    }
}

impl Writer {
    /// A writer over the process standard streams.
    pub fn new(colorizer: Colorizer) -> Writer {
        Writer::from_sinks(
            Sink::Stdout(io::stdout()),
            Sink::Stderr(io::stderr()),
            colorizer,
        )
    }

    /// A writer over the sinks the given target resolves to. Fails when a
    /// file target cannot be created.
    pub fn with_target(target: &OutputTarget, colorizer: Colorizer) -> Result<Writer, QuillError> {
        let (out, err) = target.open()?;
        Ok(Writer::from_sinks(out, err, colorizer))
    }

    fn from_sinks(out: Sink, err: Sink, colorizer: Colorizer) -> Writer {
        Writer {
            out,
            err,
            pending: Vec::new(),
            colorizer,
        }
    }

    pub fn colorizer(&self) -> &Colorizer {
        &self.colorizer
    }

    /// Queue a style for the next `write`. The name is validated against the
    /// colorizer's known styles; unknown names are rejected.
    pub fn style(&mut self, name: &str) -> Result<&mut Writer, QuillError> {
        self.colorizer.spec(name)?;
        Ok(self.push_token(name))
    }

    fn push_token(&mut self, name: &str) -> &mut Writer {
        if !self.pending.iter().any(|token| token == name) {
            self.pending.push(name.to_string());
        }

        self
    }

    pub fn black(&mut self) -> &mut Writer {
        self.push_token("black")
    }

    pub fn red(&mut self) -> &mut Writer {
        self.push_token("red")
    }

    pub fn green(&mut self) -> &mut Writer {
        self.push_token("green")
    }

    pub fn yellow(&mut self) -> &mut Writer {
        self.push_token("yellow")
    }

    pub fn blue(&mut self) -> &mut Writer {
        self.push_token("blue")
    }

    pub fn magenta(&mut self) -> &mut Writer {
        self.push_token("magenta")
    }

    pub fn cyan(&mut self) -> &mut Writer {
        self.push_token("cyan")
    }

    pub fn white(&mut self) -> &mut Writer {
        self.push_token("white")
    }

    pub fn gray(&mut self) -> &mut Writer {
        self.push_token("gray")
    }

    pub fn bg_black(&mut self) -> &mut Writer {
        self.push_token("bgBlack")
    }

    pub fn bg_red(&mut self) -> &mut Writer {
        self.push_token("bgRed")
    }

    pub fn bg_green(&mut self) -> &mut Writer {
        self.push_token("bgGreen")
    }

    pub fn bg_yellow(&mut self) -> &mut Writer {
        self.push_token("bgYellow")
    }

    pub fn bg_blue(&mut self) -> &mut Writer {
        self.push_token("bgBlue")
    }

    pub fn bg_magenta(&mut self) -> &mut Writer {
        self.push_token("bgMagenta")
    }

    pub fn bg_cyan(&mut self) -> &mut Writer {
        self.push_token("bgCyan")
    }

    pub fn bg_white(&mut self) -> &mut Writer {
        self.push_token("bgWhite")
    }

    pub fn bold(&mut self) -> &mut Writer {
        self.push_token("bold")
    }

    pub fn dim(&mut self) -> &mut Writer {
        self.push_token("dim")
    }

    pub fn italic(&mut self) -> &mut Writer {
        self.push_token("italic")
    }

    pub fn underline(&mut self) -> &mut Writer {
        self.push_token("underline")
    }

    pub fn error(&mut self) -> &mut Writer {
        self.push_token("error")
    }

    pub fn warn(&mut self) -> &mut Writer {
        self.push_token("warn")
    }

    pub fn info(&mut self) -> &mut Writer {
        self.push_token("info")
    }

    pub fn ok(&mut self) -> &mut Writer {
        self.push_token("ok")
    }

    pub fn comment(&mut self) -> &mut Writer {
        self.push_token("comment")
    }

    /// Render `text` under the queued styles and write it out, appending a
    /// newline when `eol` is set. Goes to the error sink when the combined
    /// style name contains `error`, otherwise to the normal sink.
    pub fn write(&mut self, text: &str, eol: bool) -> Result<&mut Writer, QuillError> {
        let style: String = self.take_style();
        let error: bool = style.to_lowercase().contains("error");

        let mut text: String = self.colorizer.render(&style, text)?;
        if eol {
            text.push_str(EOL);
        }

        self.do_write(&text, error)
    }

    /// Consume the queued style tokens. Falls back to the neutral `line`
    /// style when none were queued.
    fn take_style(&mut self) -> String {
        let tokens: Vec<String> = std::mem::take(&mut self.pending);
        if tokens.is_empty() {
            String::from(DEFAULT_STYLE)
        } else {
            style::combine(&tokens)
        }
    }

    pub fn up(&mut self, n: i32) -> Result<&mut Writer, QuillError> {
        self.do_write(&cursor::up(n), false)
    }

    pub fn down(&mut self, n: i32) -> Result<&mut Writer, QuillError> {
        self.do_write(&cursor::down(n), false)
    }

    pub fn right(&mut self, n: i32) -> Result<&mut Writer, QuillError> {
        self.do_write(&cursor::forward(n), false)
    }

    pub fn left(&mut self, n: i32) -> Result<&mut Writer, QuillError> {
        self.do_write(&cursor::back(n), false)
    }

    /// Write `n` newlines, at least one.
    pub fn eol(&mut self, n: i32) -> Result<&mut Writer, QuillError> {
        self.do_write(&EOL.repeat(n.max(1) as usize), false)
    }

    pub fn clear_line(&mut self) -> Result<&mut Writer, QuillError> {
        self.do_write(cursor::ERASE_LINE, false)
    }

    pub fn clear_screen(&mut self) -> Result<&mut Writer, QuillError> {
        self.do_write(cursor::ERASE_SCREEN, false)
    }

    /// Write anything displayable verbatim, bypassing styling. The queued
    /// style tokens are left untouched.
    pub fn raw<T: Display>(&mut self, text: T, error: bool) -> Result<&mut Writer, QuillError> {
        self.do_write(&text.to_string(), error)
    }

    fn do_write(&mut self, text: &str, error: bool) -> Result<&mut Writer, QuillError> {
        let sink: &mut Sink = if error { &mut self.err } else { &mut self.out };
        sink.write_all(text.as_bytes())?;

        Ok(self)
    }
}
