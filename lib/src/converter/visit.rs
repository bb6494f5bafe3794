use roxmltree::{Document, Node};

/// A callback interface for walking the elements of an SVG document
pub trait XmlVisitor {
    fn visit_enter(&mut self, node: Node);
    fn visit_exit(&mut self, _node: Node) {}
}

/// Visits every element below the root element, parents before their children.
///
/// The root element itself is not visited. Text, comments and processing
/// instructions are skipped.
pub fn depth_first_visit(doc: &Document, visitor: &mut impl XmlVisitor) {
    fn visit_node<V: XmlVisitor>(node: Node, visitor: &mut V) {
        if !node.is_element() {
            return;
        }
        visitor.visit_enter(node);
        node.children().for_each(|child| visit_node(child, visitor));
        visitor.visit_exit(node);
    }

    doc.root_element()
        .children()
        .for_each(|child| visit_node(child, visitor));
}
