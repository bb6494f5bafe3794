use std::str::FromStr;

/// Named colors understood by [`resolve_color`]
const NAMED_COLORS: [(&str, &str); 16] = [
    ("white", "#FFFFFF"),
    ("black", "#000000"),
    ("red", "#FF0000"),
    ("green", "#00FF00"),
    ("blue", "#0000FF"),
    ("yellow", "#FFFF00"),
    ("cyan", "#00FFFF"),
    ("magenta", "#FF00FF"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("silver", "#C0C0C0"),
    ("maroon", "#800000"),
    ("olive", "#808000"),
    ("purple", "#800080"),
    ("teal", "#008080"),
    ("navy", "#000080"),
];

/// Maps a color token to the value written into the drawable.
///
/// Hex values are returned untouched (no case or shorthand normalization),
/// named colors from the table above are mapped case-insensitively, and any
/// other token (`currentColor`, `rgb(...)`, unknown names) is passed through
/// as-is. Absent and empty tokens yield [`None`].
pub fn resolve_color(color: Option<&str>) -> Option<&str> {
    let color = color.filter(|c| !c.is_empty())?;

    if color.starts_with('#') {
        return Some(color);
    }

    let hex = NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(color))
        .map(|(_, hex)| *hex);

    Some(hex.unwrap_or(color))
}

/// Whether `color` is a CSS color `svgtypes` can parse
pub fn is_valid_color(color: &str) -> bool {
    svgtypes::Color::from_str(color).is_ok()
}
