use crate::error::Error;
use crate::svg_parser::{Font, Glyph};
use anyhow::{Context, Result};
use read_fonts::{FontRef, TableProvider};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// FontForge script opening the SVG given as first argument and
/// generating the font named by the second
const SCRIPT: &str = "Open($1);Generate($2);Quit(0);";

/// The external FontForge executable used to compile SVG fonts
#[derive(Debug, Clone)]
pub struct FontForge {
    program: PathBuf,
}

impl FontForge {
    /// Check that `program` can be started before handing it any work
    pub fn locate(program: &Path) -> Result<Self> {
        let probe = Command::new(program)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match probe {
            Ok(_) => Ok(Self {
                program: program.to_path_buf(),
            }),
            Err(e) => {
                log::debug!("probing {} failed: {}", program.display(), e);
                Err(Error::FontForgeMissing {
                    program: program.to_path_buf(),
                }
                .into())
            }
        }
    }

    /// Build the compile command. Paths are passed as script arguments,
    /// never spliced into the script itself.
    pub fn command(&self, svg: &Path, ttf: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("-lang=ff").arg("-c").arg(SCRIPT).arg(svg).arg(ttf);
        command
    }

    /// Compile `svg` into `ttf`.
    ///
    /// Returns `Ok(false)` when FontForge ran but exited unsuccessfully.
    pub fn compile(&self, svg: &Path, ttf: &Path) -> Result<bool> {
        let mut command = self.command(svg, ttf);
        println!("{:?}", command);

        let status = command
            .status()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        if !status.success() {
            println!("Converting {} to {} failed", svg.display(), ttf.display());
            log::debug!("FontForge exited with {}", status);
            return Ok(false);
        }

        Ok(true)
    }
}

/// Count the glyphs whose character the compiled font does not map.
///
/// Only glyphs mapped to a single code point are checked; ligature
/// sequences live outside the cmap.
pub fn verify_font(ttf: &Path, glyphs: &[Glyph]) -> Result<usize> {
    let data = std::fs::read(ttf).with_context(|| format!("Failed to read {}", ttf.display()))?;

    let font = FontRef::new(&data)
        .with_context(|| format!("Failed to load font {}", ttf.display()))?;
    let cmap = font
        .cmap()
        .with_context(|| format!("Failed to read cmap of {}", ttf.display()))?;

    let missing = glyphs
        .iter()
        .filter(|g| {
            single_codepoint(&g.char)
                .map(|cp| cmap.map_codepoint(cp).is_none())
                .unwrap_or(false)
        })
        .inspect(|g| log::debug!("glyph '{}' is not mapped in {}", g.name, ttf.display()))
        .count();

    Ok(missing)
}

/// Glyphs expected in the compiled font. FontForge opens only the first
/// `<font>` of an SVG.
pub fn compiled_glyphs(fonts: &[Font]) -> &[Glyph] {
    fonts.first().map(|f| f.glyphs.as_slice()).unwrap_or_default()
}

fn single_codepoint(s: &str) -> Option<u32> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c as u32),
        _ => None,
    }
}
