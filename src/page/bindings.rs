//! One-time wiring of page controls to storefront actions.
//!
//! [`bind`] only reads the page: it maps the elements it can find to
//! [`Binding`]s and skips features whose elements are missing.

use tracing::debug;

use super::dom::{Dom, Landmark, NodeId};

/// Element ids the storefront looks for.
pub mod ids {
    pub const VIEW_CART: &str = "viewCartBtn";
    pub const CART_MODAL: &str = "cartModal";
    pub const CART_ITEMS: &str = "cartItems";
    pub const CART_TOTAL: &str = "cartTotal";
    pub const CART_EMPTY: &str = "cartEmpty";
    pub const CLOSE_CART: &str = "closeCartBtn";
    pub const CLEAR_CART: &str = "clearCartBtn";
    pub const PROCESS_ORDER: &str = "processOrderBtn";
    pub const CONTACT_FORM: &str = "contactForm";
}

/// Attributes the storefront reads.
pub mod attrs {
    /// Marks an add-to-cart control and carries the product id.
    pub const PRODUCT_ID: &str = "data-id";
    pub const PRODUCT_NAME: &str = "data-name";
    pub const PRODUCT_PRICE: &str = "data-price";
    /// Marks an element whose click dismisses the cart modal.
    pub const CLOSE_MODAL: &str = "data-close-modal";
}

/// Keyboard key of a key-down event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other(String),
}

impl Key {
    /// Map a `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Event delivered to the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Click(NodeId),
    Submit(NodeId),
    KeyDown(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Submit,
    KeyDown,
}

/// Where a listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Document,
    Node(NodeId),
}

/// What a registered listener does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddToCart,
    OpenCart,
    CloseCart,
    ClearCart,
    ProcessOrder,
    Subscribe { form: NodeId },
    SubmitContact { form: NodeId },
    DismissOnEscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub target: Target,
    pub kind: EventKind,
    pub action: Action,
}

/// Registered listeners in registration order.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    entries: Vec<Binding>,
}

impl Bindings {
    fn register(&mut self, target: Target, kind: EventKind, action: Action) {
        self.entries.push(Binding {
            target,
            kind,
            action,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.entries.iter()
    }

    /// Actions to run for `event`, in registration order.
    ///
    /// Key-down events reach document listeners regardless of focus.
    pub fn actions_for(&self, event: &PageEvent) -> Vec<Action> {
        let (target, kind) = match event {
            PageEvent::Click(node) => (Target::Node(*node), EventKind::Click),
            PageEvent::Submit(node) => (Target::Node(*node), EventKind::Submit),
            PageEvent::KeyDown(_) => (Target::Document, EventKind::KeyDown),
        };
        self.entries
            .iter()
            .filter(|binding| binding.target == target && binding.kind == kind)
            .map(|binding| binding.action)
            .collect()
    }
}

/// Map the page's controls to actions.
pub fn bind(dom: &impl Dom) -> Bindings {
    let mut bindings = Bindings::default();

    let by_id = |id: &str| dom.get_element_by_id(id).map(Target::Node);

    for node in dom.query_by_attribute(attrs::PRODUCT_ID) {
        bindings.register(Target::Node(node), EventKind::Click, Action::AddToCart);
    }

    if let Some(target) = by_id(ids::VIEW_CART) {
        bindings.register(target, EventKind::Click, Action::OpenCart);
    }
    if let Some(target) = by_id(ids::CLOSE_CART) {
        bindings.register(target, EventKind::Click, Action::CloseCart);
    }
    for node in dom.query_by_attribute(attrs::CLOSE_MODAL) {
        bindings.register(Target::Node(node), EventKind::Click, Action::CloseCart);
    }
    if let Some(target) = by_id(ids::CLEAR_CART) {
        bindings.register(target, EventKind::Click, Action::ClearCart);
    }
    if let Some(target) = by_id(ids::PROCESS_ORDER) {
        bindings.register(target, EventKind::Click, Action::ProcessOrder);
    }
    if dom.get_element_by_id(ids::CART_MODAL).is_some() {
        bindings.register(Target::Document, EventKind::KeyDown, Action::DismissOnEscape);
    }

    for button in dom.submit_controls_in(Landmark::Footer) {
        if let Some(form) = dom.form_owner(button) {
            bindings.register(
                Target::Node(button),
                EventKind::Click,
                Action::Subscribe { form },
            );
        }
    }

    if let Some(form) = dom
        .get_element_by_id(ids::CONTACT_FORM)
        .filter(|node| dom.form(*node).is_some())
    {
        bindings.register(
            Target::Node(form),
            EventKind::Submit,
            Action::SubmitContact { form },
        );
    }

    debug!(count = bindings.len(), "Page controls bound");
    bindings
}
