use std::fmt::Write as _;

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Child of an [`SvgElement`].
#[derive(Clone, Debug, PartialEq)]
pub enum SvgNode {
    /// Nested element.
    Element(SvgElement),
    /// Character data (style sheets and scripts); escaped on output.
    Text(String),
}

/// Minimal in-memory SVG element tree.
///
/// Attributes keep insertion order so the serialized output is stable.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgElement {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<SvgNode>,
}

impl SvgElement {
    /// Empty element named `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`SvgElement::set_attr`].
    pub fn with_attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Builder form of [`SvgElement::push`].
    pub fn with_child(mut self, child: SvgElement) -> Self {
        self.push(child);
        self
    }

    /// Tag name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Set or replace an attribute.
    pub fn set_attr(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Remove an attribute if present.
    pub fn remove_attr(&mut self, key: &str) {
        self.attrs.retain(|(k, _)| *k != key);
    }

    /// Attribute value.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Append a child element.
    pub fn push(&mut self, child: SvgElement) {
        self.children.push(SvgNode::Element(child));
    }

    /// Drop every direct child named like `child`, then append `child`.
    pub fn replace_children_named(&mut self, child: SvgElement) {
        self.children
            .retain(|c| !matches!(c, SvgNode::Element(e) if e.name == child.name));
        self.push(child);
    }

    /// Append character data.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(SvgNode::Text(text.into()));
    }

    /// Direct children.
    pub fn children(&self) -> &[SvgNode] {
        &self.children
    }

    /// Direct child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(|c| match c {
            SvgNode::Element(e) => Some(e),
            SvgNode::Text(_) => None,
        })
    }

    /// Remove every attribute and child.
    pub fn clear(&mut self) {
        self.attrs.clear();
        self.children.clear();
    }

    /// Depth-first search for the element with `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&SvgElement> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find_by_id(id))
    }

    /// Mutable depth-first search for the element with `id`.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut SvgElement> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| match c {
            SvgNode::Element(e) => e.find_by_id_mut(id),
            SvgNode::Text(_) => None,
        })
    }

    /// Every element of the subtree named `name`, in document order.
    pub fn descendants_named<'a>(&'a self, name: &'a str) -> Vec<&'a SvgElement> {
        let mut out = Vec::new();
        self.collect_named(name, &mut out);
        out
    }

    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a SvgElement>) {
        if self.name == name {
            out.push(self);
        }
        for c in self.child_elements() {
            c.collect_named(name, out);
        }
    }

    /// Serialize the subtree as XML.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out);
        out
    }

    fn write_xml(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.name);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {k}=\"{}\"", escape_xml(v));
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                SvgNode::Element(e) => e.write_xml(out),
                SvgNode::Text(t) => out.push_str(&escape_xml(t)),
            }
        }
        let _ = write!(out, "</{}>", self.name);
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
#[path = "../../../tests/unit/render/svg_doc.rs"]
mod tests;
