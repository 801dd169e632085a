//! Terminal output helpers: a chainable [`Writer`] for styled text and raw
//! cursor control, plus the [`Colorizer`] that turns style names into ANSI
//! escape codes.

pub mod colorize;
pub mod cursor;
pub mod error;
pub mod sink;
pub mod style;
pub mod theme;
pub mod writer;

pub use colorize::Colorizer;
pub use error::QuillError;
pub use sink::OutputTarget;
pub use theme::Theme;
pub use writer::{Writer, EOL};
