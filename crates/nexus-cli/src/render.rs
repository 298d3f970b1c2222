use is_terminal::IsTerminal;
use nexus_types::Tier;
use owo_colors::OwoColorize;

pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Parse `#RRGGBB` into its components.
pub fn hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Render `text` in `color` when writing to a color-capable terminal.
pub fn paint(text: &str, color: &str) -> String {
    match hex_rgb(color) {
        Some((r, g, b)) if use_color() => text.truecolor(r, g, b).bold().to_string(),
        _ => text.to_string(),
    }
}

pub fn tier_label(tier: Tier) -> String {
    let color = nexus_qr::palette::tier_color(tier.name()).unwrap_or(nexus_qr::palette::FALLBACK_COLOR);
    paint(tier.name(), color)
}

pub fn status(ok: bool) -> String {
    let (text, plain) = if ok { ("✓ Valid", "valid") } else { ("✗ Invalid", "invalid") };
    if !use_color() {
        return plain.to_string();
    }
    if ok {
        text.green().bold().to_string()
    } else {
        text.red().bold().to_string()
    }
}

pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("{:<18} {}", format!("{}:", label), value);
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
