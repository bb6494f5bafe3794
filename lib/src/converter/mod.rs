use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use roxmltree::{Document, Node, ParsingOptions};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use self::units::{strip_units, viewport_dimensions};
use crate::drawable::{DrawablePath, VectorDrawable};
use crate::postprocess::write_drawable;
use crate::style::StyleTable;
use crate::{ConvertError, Settings};

pub use self::shape::ShapeKind;

mod shape;
mod units;
mod visit;

/// A leading `<?xml ...?>`, possibly preceded by whitespace
static XML_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\r\n]*<\?xml[^>]*\?>").expect("xml declaration pattern is valid")
});

/// High-level output configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionConfig {
    /// Fill for shapes that have no usable fill of their own
    pub default_fill: String,
    /// Used when the root element has no `width`
    pub default_width: String,
    /// Used when the root element has no `height`
    pub default_height: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            default_fill: "#FFFFFF".to_string(),
            default_width: "24".to_string(),
            default_height: "24".to_string(),
        }
    }
}

/// Maps SVG [`Node`]s and their attributes into [`DrawablePath`]s
#[derive(Debug)]
struct ConversionVisitor<'a> {
    styles: &'a StyleTable,
    config: &'a ConversionConfig,
    paths: Vec<DrawablePath>,
    name_stack: Vec<String>,
}

impl<'a> ConversionVisitor<'a> {
    fn new(styles: &'a StyleTable, config: &'a ConversionConfig) -> Self {
        Self {
            styles,
            config,
            paths: vec![],
            name_stack: vec![],
        }
    }

    fn push(&mut self, node: &Node, path: DrawablePath) {
        debug!(
            "{}{} -> fill {}",
            self.name_stack
                .iter()
                .map(|name| format!("{name} > "))
                .collect::<String>(),
            node_name(node),
            path.fill_color
        );
        self.paths.push(path);
    }
}

impl visit::XmlVisitor for ConversionVisitor<'_> {
    fn visit_enter(&mut self, node: Node) {
        match ShapeKind::of(&node) {
            ShapeKind::Path => {
                let path = self.path(&node);
                self.push(&node, path);
            }
            ShapeKind::Polygon => {
                if let Some(path) = self.polygon(&node) {
                    self.push(&node, path);
                }
            }
            ShapeKind::Other => {}
        }
        self.name_stack.push(node_name(&node));
    }

    fn visit_exit(&mut self, _node: Node) {
        self.name_stack.pop();
    }
}

/// Top-level function for converting an SVG [`Document`] into a [`VectorDrawable`]
pub fn svg2drawable(doc: &Document, config: &ConversionConfig) -> VectorDrawable {
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        warn!("Root element is <{}>, not <svg>", root.tag_name().name());
    }

    let styles = StyleTable::from_document(doc);

    let width = root.attribute("width").unwrap_or(config.default_width.as_str());
    let height = root.attribute("height").unwrap_or(config.default_height.as_str());
    let view_box = root
        .attribute("viewBox")
        .map(str::to_string)
        .unwrap_or_else(|| format!("0 0 {width} {height}"));

    let width = strip_units(width);
    let height = strip_units(height);
    let [viewport_width, viewport_height] = viewport_dimensions(&view_box)
        .map(|dims| dims.map(str::to_string))
        .unwrap_or_else(|| [width.clone(), height.clone()]);

    let mut visitor = ConversionVisitor::new(&styles, config);
    visit::depth_first_visit(doc, &mut visitor);

    VectorDrawable {
        width,
        height,
        viewport_width,
        viewport_height,
        paths: visitor.paths,
    }
}

/// Converts SVG text into serialized vector drawable XML
pub fn convert_str(svg: &str, settings: &Settings) -> Result<String, ConvertError> {
    let svg = svg.trim_start_matches('\u{feff}');
    let svg = XML_DECLARATION.replace(svg, "");
    // Exporters commonly emit a DOCTYPE, often with an internal entity subset
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(&svg, options)?;
    let drawable = svg2drawable(&doc, &settings.conversion);
    write_drawable(&drawable, &settings.postprocess)
}

fn node_name(node: &Node) -> String {
    let mut name = node.tag_name().name().to_string();
    if let Some(id) = node.attribute("id") {
        name += "#";
        name += id;
    }
    name
}

#[cfg(test)]
mod test {
    use super::*;

    fn drawable(svg: &str) -> VectorDrawable {
        let doc = Document::parse(svg).unwrap();
        svg2drawable(&doc, &ConversionConfig::default())
    }

    #[test]
    fn dimensions_default_to_24() {
        let d = drawable(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#);
        assert_eq!([d.width, d.height], ["24", "24"]);
        assert_eq!([d.viewport_width, d.viewport_height], ["24", "24"]);
        assert!(d.paths.is_empty());
    }

    #[test]
    fn view_box_without_dimensions() {
        let d = drawable(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 48"/>"#);
        assert_eq!([d.width, d.height], ["24", "24"]);
        assert_eq!([d.viewport_width, d.viewport_height], ["48", "48"]);
    }

    #[test]
    fn units_are_stripped_from_dimensions() {
        let d = drawable(r#"<svg width="100px" height="50.5pt" viewBox="0 0 200 101"/>"#);
        assert_eq!([d.width, d.height], ["100", "50.5"]);
        assert_eq!([d.viewport_width, d.viewport_height], ["200", "101"]);
    }

    #[test]
    fn malformed_view_box_falls_back_to_dimensions() {
        let d = drawable(r#"<svg width="32px" height="16px" viewBox="0,0,64,32"/>"#);
        assert_eq!([d.viewport_width, d.viewport_height], ["32", "16"]);
    }

    #[test]
    fn fallback_view_box_uses_raw_dimensions() {
        let d = drawable(r#"<svg width="32px" height="16"/>"#);
        assert_eq!([d.width, d.height], ["32", "16"]);
        assert_eq!([d.viewport_width, d.viewport_height], ["32px", "16"]);
    }

    #[test]
    fn nested_shapes_are_collected_in_document_order() {
        let d = drawable(
            r#"<svg xmlns="http://www.w3.org/2000/svg">
                <defs><style>.a{fill:red}</style></defs>
                <g id="outer">
                    <path d="M1 1" class="a"/>
                    <g><polygon points="0,0 1,1"/><circle r="3"/></g>
                    <polygon/>
                </g>
                <path d="M2 2"><path d="M3 3"/></path>
            </svg>"#,
        );
        let data = d
            .paths
            .iter()
            .map(|p| p.path_data.as_deref().unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(data, ["M1 1", "M0,0 L1,1 Z", "M2 2", "M3 3"]);
        assert_eq!(d.paths[0].fill_color, "#FF0000");
        assert_eq!(d.paths[1].fill_color, "#FFFFFF");
    }

    #[test]
    fn root_is_not_converted() {
        let d = drawable(r#"<path d="M0 0"><path d="M1 1"/></path>"#);
        assert_eq!(d.paths.len(), 1);
        assert_eq!(d.paths[0].path_data.as_deref(), Some("M1 1"));
    }

    #[test]
    fn leading_declaration_and_bom_are_stripped() {
        let svg = "\u{feff}\n  <?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg><path d=\"M0 0\"/></svg>";
        let xml = convert_str(svg, &Settings::default()).unwrap();
        assert!(xml.contains(r#"android:pathData="M0 0""#));
    }

    #[test]
    fn doctype_is_accepted() {
        let svg = concat!(
            "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" ",
            "\"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\"><path d=\"M0 0\" fill=\"red\"/></svg>",
        );
        let xml = convert_str(svg, &Settings::default()).unwrap();
        assert!(xml.contains(r##"android:fillColor="#FF0000""##));
    }

    #[test]
    fn unparsable_input_is_an_error() {
        let result = convert_str("<svg><path></svg>", &Settings::default());
        assert!(matches!(result, Err(ConvertError::Parse(_))));
    }
}
