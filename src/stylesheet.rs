use crate::svg_parser::Font;
use crate::template::{prepare_template, write_output, Placeholders};
use anyhow::Result;
use std::path::Path;

/// Generate the icon stylesheet from its template
pub fn generate_stylesheet(
    font: &Font,
    prefix: &str,
    placeholders: &Placeholders,
    template_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let mut css = prepare_template(template_path, "CSS", placeholders)?;
    css.push_str(&generate_rules(font, prefix));

    write_output(output_path, &css)
}

/// One `::before` rule per icon alias, in glyph order
pub fn generate_rules(font: &Font, prefix: &str) -> String {
    let mut rules = String::new();

    for glyph in &font.glyphs {
        for (icon, fill) in glyph.icons.iter().zip(&glyph.fills) {
            rules.push_str(&format!(
                ".{prefix}icon.{icon}::before {fill}{{ font-family: '{family}'; content: '{char}'; }}\n",
                family = font.family,
                char = glyph.char,
            ));
        }
    }

    rules
}
