//! Terminal palette previews.

use anyhow::{Context, Result};
use console::Style;
use swatch::{Rgb, Theme};

const SWATCH_WIDTH: usize = 8;

/// Renders one line per property: a colour block, the hex value and the name.
///
/// Colours are approximated with the 256-colour palette. When the terminal
/// does not support colour, `console` drops the styling and only text remains.
pub fn render_preview(theme: &Theme) -> Result<String> {
    let name_width = theme
        .properties()
        .map(|(property, _)| property.len())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", Style::new().bold().apply_to(theme.name()));
    for (property, value) in theme.properties() {
        let rgb = Rgb::parse(value).with_context(|| format!("{property} has value {value}"))?;
        // Dark text on light swatches, light text on dark ones.
        let fg = if rgb.luminance() > 0.5 { 16 } else { 231 };
        let block = Style::new()
            .on_color256(rgb.to_ansi256())
            .color256(fg)
            .apply_to(format!("{:^width$}", "", width = SWATCH_WIDTH));
        out.push_str(&format!("  {block} {value}  {property:<name_width$}\n"));
    }
    Ok(out)
}
