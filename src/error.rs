use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a run with a non-zero exit status.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} template {} is missing.", path.display())]
    MissingTemplate { kind: &'static str, path: PathBuf },

    #[error("No fonts found in {}", svg.display())]
    NoFonts { svg: PathBuf },

    #[error("font '{title}' has no font-face element")]
    MissingFontFace { title: String },

    #[error("font '{title}' has no glyphs")]
    NoGlyphs { title: String },

    #[error("FontForge not installed ({})", program.display())]
    FontForgeMissing { program: PathBuf },

    #[error("No SVG files found in {}", dir.display())]
    EmptyDirectory { dir: PathBuf },
}
