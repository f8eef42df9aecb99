//! Cart modal: a two-state visibility toggle over one page surface.

use tracing::debug;

use super::bindings::ids;
use super::dom::{Dom, NodeId};
use crate::cart::CartView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Elements making up the cart modal. Only the modal itself is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalElements {
    pub modal: NodeId,
    pub list: Option<NodeId>,
    pub total: Option<NodeId>,
    pub empty: Option<NodeId>,
    pub close: Option<NodeId>,
}

impl ModalElements {
    pub fn locate(dom: &impl Dom) -> Option<Self> {
        Some(Self {
            modal: dom.get_element_by_id(ids::CART_MODAL)?,
            list: dom.get_element_by_id(ids::CART_ITEMS),
            total: dom.get_element_by_id(ids::CART_TOTAL),
            empty: dom.get_element_by_id(ids::CART_EMPTY),
            close: dom.get_element_by_id(ids::CLOSE_CART),
        })
    }
}

/// The cart modal. Closed initially.
#[derive(Debug, Clone, Default)]
pub struct CartModal {
    state: ModalState,
    elements: Option<ModalElements>,
}

impl CartModal {
    pub fn new(elements: Option<ModalElements>) -> Self {
        Self {
            state: ModalState::Closed,
            elements,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Whether the page has a cart modal at all.
    pub fn is_available(&self) -> bool {
        self.elements.is_some()
    }

    /// Write `view` into the modal, replacing previous contents.
    /// Visibility is left as is.
    pub fn render(&self, dom: &mut impl Dom, view: &CartView) {
        let Some(elements) = self.elements else {
            return;
        };
        if let Some(list) = elements.list {
            dom.replace_children(list, &view.lines);
        }
        if let Some(total) = elements.total {
            dom.set_text(total, view.total.as_deref().unwrap_or(""));
        }
        if let Some(empty) = elements.empty {
            dom.set_hidden(empty, !view.empty);
        }
    }

    /// Closed → Open: render `view`, show the modal, focus the close control.
    ///
    /// Returns whether a transition happened.
    pub fn open(&mut self, dom: &mut impl Dom, view: &CartView) -> bool {
        let Some(elements) = self.elements else {
            return false;
        };
        if self.is_open() {
            return false;
        }
        self.render(dom, view);
        dom.set_hidden(elements.modal, false);
        if let Some(close) = elements.close {
            dom.focus(close);
        }
        self.state = ModalState::Open;
        debug!("Cart modal opened");
        true
    }

    /// Open → Closed: hide the modal. Returns whether a transition happened.
    pub fn close(&mut self, dom: &mut impl Dom) -> bool {
        let Some(elements) = self.elements else {
            return false;
        };
        if !self.is_open() {
            return false;
        }
        dom.set_hidden(elements.modal, true);
        self.state = ModalState::Closed;
        debug!("Cart modal closed");
        true
    }
}
