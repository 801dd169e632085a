use std::convert::Infallible;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::QuillError;

/// Where a writer sends its output. Resolved into concrete sink handles once,
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::Stdout
    }
}

impl FromStr for OutputTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(OutputTarget::Stdout),
            "stderr" => Ok(OutputTarget::Stderr),
            path => Ok(OutputTarget::File(PathBuf::from(path))),
        }
    }
}

impl OutputTarget {
    /// Open the `(normal, error)` sink pair for this target. A file target is
    /// created (or truncated) once and used for both sinks, sharing one
    /// descriptor so writes interleave in order.
    pub(crate) fn open(&self) -> Result<(Sink, Sink), QuillError> {
        match self {
            OutputTarget::Stdout => Ok((Sink::Stdout(io::stdout()), Sink::Stderr(io::stderr()))),
            OutputTarget::Stderr => Ok((Sink::Stderr(io::stderr()), Sink::Stderr(io::stderr()))),
            OutputTarget::File(path) => {
                let file: File =
                    File::create(path).map_err(|_| QuillError::CreateFile(path.clone()))?;
                let clone: File = file
                    .try_clone()
                    .map_err(|_| QuillError::CreateFile(path.clone()))?;
                log::debug!("Writing output to file {:?}", path);
                Ok((Sink::File(file), Sink::File(clone)))
            }
        }
    }
}

/// `std::io` exposes `Stdout` and `Stderr` as unrelated types, so an enum
/// holds whichever handle the target resolved to.
#[derive(Debug)]
pub(crate) enum Sink {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    File(File),
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(s) => s.write(buf),
            Sink::Stderr(s) => s.write(buf),
            Sink::File(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(s) => s.flush(),
            Sink::Stderr(s) => s.flush(),
            Sink::File(s) => s.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::OutputTarget;

    #[test]
    fn parse_output_target() {
        assert_eq!(OutputTarget::Stdout, "stdout".parse().unwrap());
        assert_eq!(OutputTarget::Stderr, "stderr".parse().unwrap());
        assert_eq!(
            OutputTarget::File(PathBuf::from("/tmp/out.log")),
            "/tmp/out.log".parse().unwrap()
        );
    }
}
