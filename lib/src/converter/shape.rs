use roxmltree::Node;

use super::ConversionVisitor;
use crate::color::resolve_color;
use crate::drawable::DrawablePath;

const NONE: &str = "none";
const DEFAULT_STROKE_WIDTH: &str = "1";

/// Element kinds that map onto drawable paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// `<path d="...">`
    Path,
    /// `<polygon points="...">`
    Polygon,
    /// Containers, metadata and every shape this converter does not understand
    Other,
}

impl ShapeKind {
    /// Classifies an element by its local name, whatever its namespace
    pub fn of(node: &Node) -> Self {
        match node.tag_name().name() {
            "path" => Self::Path,
            "polygon" => Self::Polygon,
            _ => Self::Other,
        }
    }
}

impl ConversionVisitor<'_> {
    /// A path always yields a drawable path, even without `d`
    pub(super) fn path(&self, node: &Node) -> DrawablePath {
        let path_data = node.attribute("d").map(str::to_string);
        let drawable = DrawablePath::new(path_data, self.fill_color(node));

        match node.attribute("stroke").filter(|stroke| is_paint(stroke)) {
            Some(stroke) => {
                let color = resolve_color(Some(stroke)).unwrap_or(stroke);
                let width = node.attribute("stroke-width").unwrap_or(DEFAULT_STROKE_WIDTH);
                drawable.with_stroke(color, width)
            }
            None => drawable,
        }
    }

    /// Closed path through the polygon's points, or nothing when there are none.
    ///
    /// Point tokens are copied verbatim.
    pub(super) fn polygon(&self, node: &Node) -> Option<DrawablePath> {
        let mut points = node.attribute("points")?.split_whitespace();
        let first = points.next()?;

        let mut path_data = format!("M{first}");
        for point in points {
            path_data.push_str(" L");
            path_data.push_str(point);
        }
        path_data.push_str(" Z");

        Some(DrawablePath::new(Some(path_data), self.fill_color(node)))
    }

    /// The element's own `fill`, else the `fill` declared for its class, else
    /// the configured default
    fn fill_color(&self, node: &Node) -> String {
        let own = node.attribute("fill").filter(|fill| is_paint(fill));
        let from_class = || {
            node.attribute("class")
                .filter(|class| !class.is_empty())
                .and_then(|class| self.styles.lookup("fill", class))
                .filter(|fill| is_paint(fill))
        };

        resolve_color(own.or_else(from_class))
            .unwrap_or(self.config.default_fill.as_str())
            .to_string()
    }
}

fn is_paint(value: &str) -> bool {
    !value.is_empty() && value != NONE
}
