//! Page capabilities used by the storefront, and an in-memory page.
//!
//! [`Dom`] is everything the storefront needs from a browser page: element
//! lookup, a few rendering primitives, alerts and native validation UI.
//! [`MemoryDom`] implements it over a flat element list and records every
//! visible effect for inspection.

use std::collections::BTreeMap;

use super::form::{Form, ValidationError};

/// Handle to an element of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Page section an element sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    Header,
    Main,
    Footer,
}

/// Page operations the storefront relies on.
pub trait Dom {
    /// Element carrying `id`.
    fn get_element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Elements carrying attribute `name`, in document order.
    fn query_by_attribute(&self, name: &str) -> Vec<NodeId>;

    /// Submit controls belonging to a form inside `landmark`.
    fn submit_controls_in(&self, landmark: Landmark) -> Vec<NodeId>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Form element a control belongs to.
    fn form_owner(&self, node: NodeId) -> Option<NodeId>;

    /// Form model of a form element.
    fn form(&self, node: NodeId) -> Option<&Form>;

    fn form_mut(&mut self, node: NodeId) -> Option<&mut Form>;

    fn set_hidden(&mut self, node: NodeId, hidden: bool);

    fn set_text(&mut self, node: NodeId, text: &str);

    /// Replace all children of `node` with one text item per line.
    fn replace_children(&mut self, node: NodeId, lines: &[String]);

    fn focus(&mut self, node: NodeId);

    /// Modal acknowledgment dialog.
    fn alert(&mut self, message: &str);

    /// Surface the native validation UI for `form`.
    fn report_validity(&mut self, form: NodeId, error: &ValidationError);
}

/// One element of a [`MemoryDom`].
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub landmark: Option<Landmark>,
    pub form_owner: Option<NodeId>,
    pub hidden: bool,
    pub text: String,
    pub children: Vec<String>,
    pub form: Option<Form>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn in_landmark(mut self, landmark: Landmark) -> Self {
        self.landmark = Some(landmark);
        self
    }

    pub fn owned_by(mut self, form: NodeId) -> Self {
        self.form_owner = Some(form);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Turn this element into a form element with the given fields.
    pub fn with_form(mut self, form: Form) -> Self {
        self.form = Some(form);
        self
    }
}

/// In-memory page.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    elements: Vec<Element>,
    focused: Option<NodeId>,
    alerts: Vec<String>,
    validity_reports: Vec<(NodeId, ValidationError)>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element at the end of the document.
    pub fn append(&mut self, element: Element) -> NodeId {
        self.elements.push(element);
        NodeId(self.elements.len() - 1)
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    /// First element whose attribute `name` equals `value`.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .position(|el| el.attributes.get(name).map(String::as_str) == Some(value))
            .map(NodeId)
    }

    /// Set a field of the form with element id `form_id`.
    pub fn fill(&mut self, form_id: &str, field: &str, value: impl Into<String>) -> bool {
        let Some(node) = self.get_element_by_id(form_id) else {
            return false;
        };
        self.form_mut(node)
            .map(|form| form.set_value(field, value))
            .unwrap_or(false)
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.element(node).map(|el| el.hidden).unwrap_or(true)
    }

    pub fn text(&self, node: NodeId) -> &str {
        self.element(node).map(|el| el.text.as_str()).unwrap_or("")
    }

    pub fn children(&self, node: NodeId) -> &[String] {
        self.element(node)
            .map(|el| el.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain alerts shown so far.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn validity_reports(&self) -> &[(NodeId, ValidationError)] {
        &self.validity_reports
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(node.0)
    }
}

impl Dom for MemoryDom {
    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn query_by_attribute(&self, name: &str) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.attributes.contains_key(name))
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn submit_controls_in(&self, landmark: Landmark) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| {
                el.landmark == Some(landmark)
                    && el.form_owner.is_some()
                    && el.attributes.get("type").map(String::as_str) == Some("submit")
            })
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attributes.get(name).map(String::as_str)
    }

    fn form_owner(&self, node: NodeId) -> Option<NodeId> {
        self.element(node)?.form_owner
    }

    fn form(&self, node: NodeId) -> Option<&Form> {
        self.element(node)?.form.as_ref()
    }

    fn form_mut(&mut self, node: NodeId) -> Option<&mut Form> {
        self.element_mut(node)?.form.as_mut()
    }

    fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        if let Some(el) = self.element_mut(node) {
            el.hidden = hidden;
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.element_mut(node) {
            el.text = text.to_string();
        }
    }

    fn replace_children(&mut self, node: NodeId, lines: &[String]) {
        if let Some(el) = self.element_mut(node) {
            el.children = lines.to_vec();
        }
    }

    fn focus(&mut self, node: NodeId) {
        if self.element(node).is_some() {
            self.focused = Some(node);
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn report_validity(&mut self, form: NodeId, error: &ValidationError) {
        self.validity_reports.push((form, error.clone()));
    }
}
