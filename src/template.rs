use crate::error::Error;
use crate::input::InputPaths;
use crate::svg_parser::Font;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Run-time values substituted into the `.css.in` and `.html.in` templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub prefix: String,
    pub family: String,
    pub title: String,
    pub name: String,
    pub path: String,
    pub css: String,
    pub html: String,
    pub ttf: String,
}

impl Placeholders {
    pub fn new(prefix: &str, font: &Font, paths: &InputPaths) -> Self {
        Self {
            prefix: prefix.to_string(),
            family: font.family.clone(),
            title: font.title.clone(),
            name: paths.name.clone(),
            path: paths.dir.display().to_string(),
            css: paths.css.display().to_string(),
            html: paths.html.display().to_string(),
            ttf: paths.ttf.display().to_string(),
        }
    }

    /// Tokens in substitution order
    fn tokens(&self) -> [(&'static str, &str); 8] {
        [
            ("[prefix]", self.prefix.as_str()),
            ("[family]", self.family.as_str()),
            ("[title]", self.title.as_str()),
            ("[name]", self.name.as_str()),
            ("[path]", self.path.as_str()),
            ("[css]", self.css.as_str()),
            ("[html]", self.html.as_str()),
            ("[ttf]", self.ttf.as_str()),
        ]
    }
}

/// Read a template and substitute its placeholders.
///
/// `kind` names the template in the error raised when the file is missing.
pub fn prepare_template(
    path: &Path,
    kind: &'static str,
    placeholders: &Placeholders,
) -> Result<String> {
    if !path.is_file() {
        return Err(Error::MissingTemplate {
            kind,
            path: path.to_path_buf(),
        }
        .into());
    }

    let template = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(substitute(&template, placeholders))
}

/// Replace each token literally, one after the other, and end with a newline
pub fn substitute(template: &str, placeholders: &Placeholders) -> String {
    let mut out = template.to_string();
    for (token, value) in placeholders.tokens() {
        out = out.replace(token, value);
    }
    out.push('\n');
    out
}

/// Write a generated document as UTF-8, replacing any previous file
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
