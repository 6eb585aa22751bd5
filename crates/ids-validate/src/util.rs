//! Helpers for navigating the parsed tree by local tag name.
//!
//! Upstream documents are not guaranteed to be prefix-consistent, so every
//! lookup ignores namespace prefixes and matches on the local name only.

use roxmltree::Node;

/// Tag name without namespace prefix.
pub fn local_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// First child element with the given local tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && local_name(*child) == tag)
}

/// All child elements, regardless of name.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

/// True when the element has a non-blank attribute with the given name.
pub fn has_attribute(node: Node<'_, '_>, name: &str) -> bool {
    node.attribute(name)
        .map(|value| !value.trim().is_empty())
        .unwrap_or(false)
}
