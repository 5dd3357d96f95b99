//! The slice of the DOM the form controller touches.
//!
//! [`Element`] and [`Document`] are implemented by the browser binding (feature
//! `wasm`) and by [`MemoryDocument`], an in-memory tree used by tests, the CLI
//! and the demo.
//!
//! Element handles are cheap to clone and mutate through `&self`, the same as
//! browser element references.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::FormConfig;
use crate::Field;

/// An element handle.
pub trait Element: Clone {
    /// Returns the current `value` of an input.
    fn value(&self) -> String;

    /// Replaces the `value` of an input.
    fn set_value(&self, value: &str);

    /// Returns true if the element carries `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Adds `class`, doing nothing if it is already present.
    fn add_class(&self, class: &str);

    /// Removes `class`, doing nothing if it is absent.
    fn remove_class(&self, class: &str);

    /// Returns the element's text content.
    fn text(&self) -> String;

    /// Replaces the element's content with `text`.
    fn set_text(&self, text: &str);

    /// Enables or disables a control.
    fn set_disabled(&self, disabled: bool);

    /// Returns the next sibling that is an element.
    fn next_element_sibling(&self) -> Option<Self>;
}

/// A document elements can be looked up in.
pub trait Document {
    /// Element handle type.
    type Element: Element;

    /// Finds the element with the given id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Finds the first element whose `type` attribute is `submit`.
    fn first_submit_button(&self) -> Option<Self::Element>;
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    parent: Option<usize>,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    value: String,
    text: String,
    disabled: bool,
}

/// An in-memory document.
///
/// Nodes are kept in insertion order; the next sibling of a node is the next
/// node appended under the same parent.
///
/// # Example
///
/// ```
/// use payform::dom::{Document, Element, MemoryDocument};
///
/// let doc = MemoryDocument::new();
/// let form = doc.append(None, "form").with_id("payment-form");
/// let cvv = doc.append(Some(&form), "input").with_id("cvv");
/// doc.append(Some(&form), "div").with_class("form-error");
///
/// cvv.set_value("123");
/// assert_eq!(doc.element_by_id("cvv").unwrap().value(), "123");
/// assert!(cvv.next_element_sibling().unwrap().has_class("form-error"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Rc<RefCell<Vec<Node>>>,
}

impl MemoryDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the stock payment page for `config`.
    ///
    /// Every field is followed by its error slot; the form holds a submit
    /// button and the page a hidden banner.
    pub fn payment_form(config: &FormConfig) -> Self {
        let doc = Self::new();
        let form = doc.append(None, "form").with_id(&config.ids.form);

        for field in Field::ALL {
            let group = doc.append(Some(&form), "div").with_class("form-group");
            doc.append(Some(&group), "input")
                .with_id(config.ids.field(field))
                .with_attr("type", "text");
            doc.append(Some(&group), "div")
                .with_class(&config.classes.error_slot);
        }

        doc.append(Some(&form), "button")
            .with_attr("type", "submit")
            .set_text("Pay now");

        doc.append(None, "div")
            .with_id(&config.ids.banner)
            .with_class(&config.classes.hidden);

        doc
    }

    /// Appends a new `tag` element under `parent`, or at the top level.
    pub fn append(&self, parent: Option<&MemoryElement>, tag: &str) -> MemoryElement {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_string(),
            parent: parent.map(|p| p.index),
            ..Node::default()
        });

        MemoryElement {
            nodes: Rc::clone(&self.nodes),
            index: nodes.len() - 1,
        }
    }

    /// Returns the number of elements in the document.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    /// Returns true if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    fn handle(&self, index: usize) -> MemoryElement {
        MemoryElement {
            nodes: Rc::clone(&self.nodes),
            index,
        }
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let index = self
            .nodes
            .borrow()
            .iter()
            .position(|node| node.id.as_deref() == Some(id))?;
        Some(self.handle(index))
    }

    fn first_submit_button(&self) -> Option<MemoryElement> {
        let index = self.nodes.borrow().iter().position(|node| {
            node.attrs
                .iter()
                .any(|(name, value)| name == "type" && value.eq_ignore_ascii_case("submit"))
        })?;
        Some(self.handle(index))
    }
}

/// A handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone)]
pub struct MemoryElement {
    nodes: Rc<RefCell<Vec<Node>>>,
    index: usize,
}

impl MemoryElement {
    /// Sets the element's id.
    pub fn with_id(self, id: &str) -> Self {
        self.nodes.borrow_mut()[self.index].id = Some(id.to_string());
        self
    }

    /// Adds a class.
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute.
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        {
            let mut nodes = self.nodes.borrow_mut();
            let attrs = &mut nodes[self.index].attrs;
            match attrs.iter_mut().find(|(n, _)| n == name) {
                Some((_, v)) => *v = value.to_string(),
                None => attrs.push((name.to_string(), value.to_string())),
            }
        }
        self
    }

    /// Returns the tag name.
    pub fn tag(&self) -> String {
        self.nodes.borrow()[self.index].tag.clone()
    }

    /// Returns the id, if any.
    pub fn id(&self) -> Option<String> {
        self.nodes.borrow()[self.index].id.clone()
    }

    /// Returns the classes in the order they were added.
    pub fn classes(&self) -> Vec<String> {
        self.nodes.borrow()[self.index].classes.clone()
    }

    /// Returns true if the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.nodes.borrow()[self.index].disabled
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.nodes, &other.nodes) && self.index == other.index
    }
}

impl Eq for MemoryElement {}

impl Element for MemoryElement {
    fn value(&self) -> String {
        self.nodes.borrow()[self.index].value.clone()
    }

    fn set_value(&self, value: &str) {
        self.nodes.borrow_mut()[self.index].value = value.to_string();
    }

    fn has_class(&self, class: &str) -> bool {
        self.nodes.borrow()[self.index]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.nodes.borrow_mut()[self.index]
                .classes
                .push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.nodes.borrow_mut()[self.index]
            .classes
            .retain(|c| c != class);
    }

    fn text(&self) -> String {
        self.nodes.borrow()[self.index].text.clone()
    }

    fn set_text(&self, text: &str) {
        self.nodes.borrow_mut()[self.index].text = text.to_string();
    }

    fn set_disabled(&self, disabled: bool) {
        self.nodes.borrow_mut()[self.index].disabled = disabled;
    }

    fn next_element_sibling(&self) -> Option<Self> {
        let nodes = self.nodes.borrow();
        let parent = nodes[self.index].parent;
        let offset = nodes[self.index + 1..]
            .iter()
            .position(|node| node.parent == parent)?;

        Some(Self {
            nodes: Rc::clone(&self.nodes),
            index: self.index + 1 + offset,
        })
    }
}
