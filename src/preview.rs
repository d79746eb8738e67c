use crate::svg_parser::Font;
use crate::template::{prepare_template, write_output, Placeholders};
use anyhow::Result;
use std::path::Path;

/// Generate the HTML preview page for the icon font
pub fn generate_preview(
    font: &Font,
    prefix: &str,
    placeholders: &Placeholders,
    template_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let page = prepare_template(template_path, "HTML", placeholders)?;
    let html = page.replace("[glyphs]", &generate_table(font, prefix));

    write_output(output_path, &html)
}

/// Table with one row per glyph listing every alias
pub fn generate_table(font: &Font, prefix: &str) -> String {
    let mut table = String::from("\n<table>\n");
    table.push_str("<tr><th>Icon</th><th>Char</th><th>Name</th><th>CSS</th><th>HTML</th></tr>\n");

    for glyph in &font.glyphs {
        let first = glyph.icons.first().map(String::as_str).unwrap_or_default();
        let snippets: String = glyph
            .icons
            .iter()
            .map(|icon| format!("&lt;span class='{prefix}icon {icon}'&gt;&lt;/span&gt;<br>"))
            .collect();

        table.push_str(&format!(
            "<tr><td><span class='{prefix}icon {first}'></span></td><td>{char}</td><td>{name}</td><td>{classes}</td><td>{snippets}</td></tr>\n",
            char = glyph.char,
            name = glyph.name,
            classes = glyph.icons.join("<br>"),
        ));
    }

    table.push_str("</table>\n\n");
    table
}
