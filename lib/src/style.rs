use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use roxmltree::{Document, Node};

pub(crate) const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// `.selector { body }`: only class selectors are picked up, anything else in
/// the stylesheet is skipped over.
static CLASS_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.([^{]+)\{([^}]+)\}").expect("class rule pattern is valid")
});

/// CSS declarations from embedded `<style>` blocks, keyed by property and then
/// by class selector
///
/// This is a pattern matcher, not a CSS parser: malformed text is ignored and
/// a later declaration for the same property and selector replaces the earlier
/// one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StyleTable {
    properties: BTreeMap<String, BTreeMap<String, String>>,
}

impl StyleTable {
    /// Collects every class rule found in the document's SVG `<style>` elements
    pub fn from_document(doc: &Document) -> Self {
        let mut table = Self::default();
        doc.root_element()
            .descendants()
            .filter(is_svg_style)
            .map(|node| stylesheet(&node))
            .for_each(|css| table.extend_from_css(&css));
        table
    }

    /// Adds the class rules of a stylesheet to the table
    pub fn extend_from_css(&mut self, css: &str) {
        for rule in CLASS_RULE.captures_iter(css) {
            let selector = rule[1].trim();
            for declaration in rule[2].split(';') {
                let Some((property, value)) = declaration.split_once(':') else {
                    continue;
                };
                let property = property.trim();
                if property.is_empty() {
                    continue;
                }
                debug!(".{selector} {{ {property}: {} }}", value.trim());
                self.properties
                    .entry(property.to_string())
                    .or_default()
                    .insert(selector.to_string(), value.trim().to_string());
            }
        }
    }

    /// Value of `property` declared for the class selector `class`
    pub fn lookup(&self, property: &str, class: &str) -> Option<&str> {
        self.properties
            .get(property)
            .and_then(|selectors| selectors.get(class))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

fn is_svg_style(node: &Node) -> bool {
    node.is_element()
        && node.tag_name().name() == "style"
        && node.tag_name().namespace() == Some(SVG_NAMESPACE)
}

/// All character data of a `<style>` element, with comments dropped
fn stylesheet(node: &Node) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|text| text.text())
        .collect()
}
