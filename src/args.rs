use std::path::{Path, PathBuf};

use clap::Parser;
use quill::OutputTarget;
use termcolor::ColorChoice;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Set verbosity level, 0 - 5
    ///
    /// Set the verbosity level, from 0 (least amount of output) to 5 (most verbose). Note that
    /// logging level configured via RUST_LOG overrides this setting.
    #[clap(short = 'v', long = "verbosity", default_value = "1")]
    pub verbosity_level: u8,

    /// Print debug information
    ///
    /// Print debug information about current build for binary, useful for when an issue is
    /// encountered and reported
    #[clap(short = 'D', long = "debug")]
    pub print_dbg: bool,

    /// Enable colors
    ///
    /// Enable output with colors. By default colors will be used if the terminal seems
    /// to support colors.
    #[clap(short = 'c', long = "colors")]
    enable_colors: bool,

    /// Disable colors
    ///
    /// Disable output with colors. By default colors will be used if the terminal seems
    /// to support colors.
    #[clap(short = 'C', long = "no-colors")]
    disable_colors: bool,

    /// Style name
    ///
    /// Combined camel cased style name under which TEXT is rendered, built from the known
    /// style tokens or a theme file, e.g. `red`, `bgRedBold` or `warn`. A name containing
    /// `error` writes to the error sink instead of the normal one.
    #[clap(short, long, default_value = "line")]
    style: String,

    /// Append newline
    ///
    /// Append a newline after the rendered text.
    #[clap(short, long)]
    newline: bool,

    /// Write verbatim
    ///
    /// Skip styling entirely and write TEXT exactly as given.
    #[clap(short, long)]
    raw: bool,

    /// Output target
    ///
    /// Where to write: `stdout`, `stderr`, or a file path. A file is created and used for
    /// both normal and error output.
    #[clap(short, long, default_value = "stdout")]
    output: OutputTarget,

    /// Theme file
    ///
    /// A YAML file with custom style definitions, each mapping a style name to colors and
    /// attributes, e.g. `shout: { fg: red, bold: true }`.
    #[clap(short, long)]
    theme: Option<PathBuf>,

    /// Text to write
    #[clap(value_parser)]
    text: Vec<String>,
}

impl Args {
    pub fn use_colors(&self) -> ColorChoice {
        match (self.enable_colors, self.disable_colors) {
            (true, false) => ColorChoice::Always,
            (false, true) => ColorChoice::Never,
            (false, false) => ColorChoice::Auto,
            (true, true) => {
                panic!("Flags --colors (-c) and --no-colors (-C) are mutually exclusive")
            }
        }
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn newline(&self) -> bool {
        self.newline
    }

    pub fn raw(&self) -> bool {
        self.raw
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    pub fn theme(&self) -> Option<&Path> {
        self.theme.as_deref()
    }

    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}
