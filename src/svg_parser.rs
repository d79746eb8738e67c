use crate::error::Error;
use anyhow::{Context, Result};
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;

/// One `<glyph>` of an SVG font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Raw glyph name, possibly several aliases separated by "/"
    pub name: String,
    /// Character the font maps the glyph to
    pub char: String,
    /// CSS-safe identifier per alias (e.g., "arrow_down" from "Arrow Down.")
    pub icons: Vec<String>,
    /// Spaces aligning each icon to the longest icon of the font
    pub fills: Vec<String>,
}

/// One `<font>` element and the glyphs it defines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// The font's `id` attribute
    pub title: String,
    /// `font-family` of its `<font-face>`
    pub family: String,
    pub glyphs: Vec<Glyph>,
    /// Glyphs dropped for lacking a name or a character
    pub skipped: usize,
}

/// Load every font of an SVG file.
///
/// A file that cannot be read or parsed is reported and treated as holding
/// no fonts, which then fails with [`Error::NoFonts`].
pub fn load_fonts(svg: &Path) -> Result<Vec<Font>> {
    let parsed = std::fs::read_to_string(svg)
        .with_context(|| format!("Failed to read {}", svg.display()))
        .and_then(|text| parse_fonts(&text));

    let fonts = match parsed {
        Ok(fonts) => fonts,
        Err(e) if e.downcast_ref::<Error>().is_some() => return Err(e),
        Err(e) => {
            println!("Unable to parse file {}", svg.display());
            log::debug!("{:#}", e);
            Vec::new()
        }
    };

    if fonts.is_empty() {
        return Err(Error::NoFonts {
            svg: svg.to_path_buf(),
        }
        .into());
    }

    Ok(fonts)
}

/// Parse all `<font>` elements of an SVG document, in document order
pub fn parse_fonts(text: &str) -> Result<Vec<Font>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options).context("Failed to parse SVG")?;

    doc.descendants()
        .filter(|n| is_element(n, "font"))
        .map(parse_font)
        .collect()
}

fn parse_font(node: Node) -> Result<Font> {
    let title = node.attribute("id").unwrap_or_default().to_string();

    let family = node
        .descendants()
        .find(|n| is_element(n, "font-face"))
        .ok_or_else(|| Error::MissingFontFace {
            title: title.clone(),
        })?
        .attribute("font-family")
        .unwrap_or_default()
        .to_string();

    let (glyphs, skipped) = parse_glyphs(node);

    if glyphs.is_empty() {
        return Err(Error::NoGlyphs { title }.into());
    }

    log::debug!(
        "font '{}' ({}): {} glyphs, {} skipped",
        title,
        family,
        glyphs.len(),
        skipped
    );

    Ok(Font {
        title,
        family,
        glyphs,
        skipped,
    })
}

/// Collect the glyphs of a font element and align their icon names.
///
/// Returns the glyphs together with the number of `<glyph>` elements
/// dropped for an empty `glyph-name` or `unicode`.
pub fn parse_glyphs(font: Node) -> (Vec<Glyph>, usize) {
    let mut skipped = 0;
    let mut glyphs = Vec::new();

    for node in font.descendants().filter(|n| is_element(n, "glyph")) {
        let name = node.attribute("glyph-name").unwrap_or_default();
        let char = node.attribute("unicode").unwrap_or_default();

        if name.is_empty() || char.is_empty() {
            log::debug!("skipping glyph '{}' -> '{}'", name, char);
            skipped += 1;
            continue;
        }

        glyphs.push(Glyph {
            name: name.to_string(),
            char: char.to_string(),
            icons: name.split('/').map(icon_identifier).collect(),
            fills: Vec::new(),
        });
    }

    let size = glyphs
        .iter()
        .flat_map(|g| &g.icons)
        .map(|icon| icon.chars().count())
        .max()
        .unwrap_or(0);

    for glyph in &mut glyphs {
        glyph.fills = glyph
            .icons
            .iter()
            .map(|icon| " ".repeat(size - icon.chars().count()))
            .collect();
    }

    (glyphs, skipped)
}

/// Turn one glyph name alias into a CSS class identifier
pub fn icon_identifier(atom: &str) -> String {
    atom.replace(' ', "").to_lowercase().replace('.', "_")
}

fn is_element(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}
