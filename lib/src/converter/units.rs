use std::sync::LazyLock;

use regex::Regex;

/// Anything that is not part of a plain decimal number
static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("non-numeric pattern is valid"));

/// Drops units and any other non-numeric characters from a length attribute.
///
/// `"100px"` becomes `"100"`, `"12.5mm"` becomes `"12.5"`. No validation is
/// done on what remains, so `"1.2.3"` or `""` are possible results.
pub fn strip_units(length: &str) -> String {
    NON_NUMERIC.replace_all(length, "").into_owned()
}

/// Width and height of a `viewBox`, if it has exactly four whitespace separated
/// components. The components are returned verbatim.
pub fn viewport_dimensions(view_box: &str) -> Option<[&str; 2]> {
    let parts = view_box.split_whitespace().collect::<Vec<_>>();
    match parts.as_slice() {
        [_min_x, _min_y, width, height] => Some([*width, *height]),
        _ => None,
    }
}
