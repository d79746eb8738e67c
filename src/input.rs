use crate::error::Error;
use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every path derived from a single input argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    /// SVG font source
    pub svg: PathBuf,
    /// Output base name (e.g., "icons" from "assets/icons.svg")
    pub name: String,
    /// Directory holding the templates and receiving the outputs, empty for cwd
    pub dir: PathBuf,
    pub css: PathBuf,
    pub html: PathBuf,
    pub ttf: PathBuf,
    pub css_template: PathBuf,
    pub html_template: PathBuf,
}

impl InputPaths {
    /// Resolve an input argument given with or without its `.svg` extension.
    pub fn resolve(infile: &Path) -> Self {
        let dir = infile.parent().map(Path::to_path_buf).unwrap_or_default();
        let file_name = infile
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (svg, name) = match file_name.strip_suffix(".svg") {
            Some(stem) => (infile.to_path_buf(), stem.to_string()),
            None => {
                let mut svg = OsString::from(infile.as_os_str());
                svg.push(".svg");
                (PathBuf::from(svg), file_name)
            }
        };

        Self {
            css: dir.join(format!("{name}.css")),
            html: dir.join(format!("{name}.html")),
            ttf: dir.join(format!("{name}.ttf")),
            css_template: dir.join(format!("{name}.css.in")),
            html_template: dir.join(format!("{name}.html.in")),
            svg,
            name,
            dir,
        }
    }
}

/// Expand the command line argument into the inputs to process.
///
/// A directory yields every `.svg` file directly inside it, sorted by name.
/// Anything else is passed through untouched and resolved later.
pub fn collect_inputs(arg: &Path) -> Result<Vec<PathBuf>> {
    if !arg.is_dir() {
        return Ok(vec![arg.to_path_buf()]);
    }

    let mut entries: Vec<_> = WalkDir::new(arg)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "svg")
                .unwrap_or(false)
        })
        .collect();

    if entries.is_empty() {
        return Err(Error::EmptyDirectory {
            dir: arg.to_path_buf(),
        }
        .into());
    }

    entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

    Ok(entries.into_iter().map(|e| e.into_path()).collect())
}
