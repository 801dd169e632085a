use std::error::Error as StdError;
use std::fmt::Debug;
use std::fmt::Display;
use std::path::PathBuf;
use std::process::{self, ExitCode, Termination};

pub enum QuillError {
    CreateFile(PathBuf),
    Io(String),
    UnknownStyle(String),
    Theme(String),
}

impl Debug for QuillError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl Display for QuillError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg: String = match &self {
            QuillError::CreateFile(path) => format!("Unable to create output file {:?}", path.clone()),
            QuillError::Io(err) => format!("IO error: {err}"),
            QuillError::UnknownStyle(name) => format!("Unknown style '{name}'"),
            QuillError::Theme(msg) => format!("Unable to load theme. {msg}"),
        };

        f.write_str(&msg)
    }
}

impl StdError for QuillError {}

impl From<std::io::Error> for QuillError {
    fn from(e: std::io::Error) -> Self {
        QuillError::Io(e.to_string())
    }
}

impl Termination for QuillError {
    fn report(self) -> process::ExitCode {
        match self {
            QuillError::UnknownStyle(_) => ExitCode::from(2),
            QuillError::CreateFile(_) => ExitCode::from(5),
            QuillError::Io(_) => ExitCode::from(8),
            QuillError::Theme(_) => ExitCode::from(9),
        }
    }
}

pub fn exit(err: QuillError) -> ExitCode {
    eprintln!("{err}");
    err.report()
}
