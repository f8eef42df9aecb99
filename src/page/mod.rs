//! Page wiring: binds page controls to the cart and order logic.
//!
//! ## Flow
//! ```text
//! [page event] --> Bindings::actions_for --> Storefront action
//!                                              |        |
//!                                       CartManager   OrderBook
//!                                       (session)     (persistent)
//!                                              |
//!                                   CartModal::render --> [page]
//! ```

pub mod bindings;
pub mod demo;
pub mod dom;
pub mod form;
pub mod modal;

pub use bindings::{bind, Action, Bindings, Key, PageEvent};
pub use dom::{Dom, Element, Landmark, MemoryDom, NodeId};
pub use form::{FieldKind, Form, FormField, ValidationError};
pub use modal::{CartModal, ModalElements, ModalState};

use tracing::{debug, info, warn};

use crate::cart::{render_cart, CartItem, CartManager};
use crate::orders::{OrderBook, OrderRecord};
use crate::storage::{PersistentStore, Result, SessionStore};
use bindings::attrs;

/// Acknowledgment texts shown through `Dom::alert`.
pub mod messages {
    pub const ITEM_ADDED: &str = "Item added to the cart.";
    pub const CART_CLEARED: &str = "Cart cleared.";
    pub const ORDER_PROCESSED: &str = "Thank you for your order.";
    pub const MESSAGE_RECEIVED: &str = "Thank you for your message.";
    pub const SUBSCRIBED: &str = "Thank you for subscribing.";
}

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// Number of bound actions that ran.
    pub actions_run: usize,
    /// Whether the page's default handling (form navigation) was suppressed.
    pub default_prevented: bool,
}

/// A bound page plus the cart and order state behind it.
pub struct Storefront<D: Dom> {
    dom: D,
    cart: CartManager,
    orders: OrderBook,
    bindings: Bindings,
    modal: CartModal,
}

impl<D: Dom> Storefront<D> {
    /// Bind `dom` once and attach the two storage areas.
    pub fn new(dom: D, session: SessionStore, persistent: PersistentStore) -> Self {
        let bindings = bind(&dom);
        let modal = CartModal::new(ModalElements::locate(&dom));
        info!(
            bindings = bindings.len(),
            cart_modal = modal.is_available(),
            "Storefront ready"
        );
        Self {
            dom,
            cart: CartManager::new(session),
            orders: OrderBook::new(persistent),
            bindings,
            modal,
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    pub fn modal_state(&self) -> ModalState {
        self.modal.state()
    }

    /// Run every action bound to `event`, in registration order.
    pub async fn dispatch(&mut self, event: PageEvent) -> Result<EventOutcome> {
        let actions = self.bindings.actions_for(&event);
        let mut outcome = EventOutcome::default();

        for action in actions {
            debug!(?event, ?action, "Dispatching");
            let prevented = match action {
                Action::AddToCart => match &event {
                    PageEvent::Click(node) => self.add_from_control(*node).await?,
                    _ => false,
                },
                Action::OpenCart => {
                    self.open_cart_modal().await;
                    false
                }
                Action::CloseCart => {
                    self.close_cart_modal();
                    false
                }
                Action::ClearCart => self.clear_cart().await?,
                Action::ProcessOrder => self.process_order().await?,
                Action::Subscribe { form } => self.subscribe(form),
                Action::SubmitContact { form } => self.submit_contact(form).await?,
                Action::DismissOnEscape => {
                    if event == PageEvent::KeyDown(Key::Escape) {
                        self.close_cart_modal();
                    }
                    false
                }
            };
            outcome.actions_run += 1;
            outcome.default_prevented |= prevented;
        }

        Ok(outcome)
    }

    /// Re-render the cart modal from the stored cart.
    pub async fn render_cart_modal(&mut self) {
        let view = render_cart(&self.cart.get_cart().await);
        self.modal.render(&mut self.dom, &view);
    }

    /// Show the cart modal with fresh contents. No-op when already open.
    pub async fn open_cart_modal(&mut self) -> bool {
        if self.modal.is_open() {
            return false;
        }
        let view = render_cart(&self.cart.get_cart().await);
        self.modal.open(&mut self.dom, &view)
    }

    /// Hide the cart modal. No-op when already closed.
    pub fn close_cart_modal(&mut self) -> bool {
        self.modal.close(&mut self.dom)
    }

    async fn add_from_control(&mut self, node: NodeId) -> Result<bool> {
        let Some(item) = product_from(&self.dom, node) else {
            return Ok(false);
        };
        self.cart.add_to_cart(item).await?;
        self.dom.alert(messages::ITEM_ADDED);
        Ok(false)
    }

    async fn clear_cart(&mut self) -> Result<bool> {
        self.cart.clear_cart().await?;
        self.render_cart_modal().await;
        self.dom.alert(messages::CART_CLEARED);
        Ok(false)
    }

    /// Discard the cart and acknowledge. Nothing is persisted.
    async fn process_order(&mut self) -> Result<bool> {
        let discarded = self.cart.get_cart().await;
        self.cart.clear_cart().await?;
        self.render_cart_modal().await;
        self.dom.alert(messages::ORDER_PROCESSED);
        info!(
            lines = discarded.len(),
            units = discarded.unit_count(),
            "Order processed"
        );
        Ok(false)
    }

    fn subscribe(&mut self, form: NodeId) -> bool {
        let Some(check) = self.dom.form(form).map(Form::check_validity) else {
            return false;
        };
        if let Err(e) = check {
            debug!(field = e.field(), "Subscribe form invalid");
            self.dom.report_validity(form, &e);
            return false;
        }

        self.dom.alert(messages::SUBSCRIBED);
        if let Some(form) = self.dom.form_mut(form) {
            form.reset();
        }
        info!("Subscription acknowledged");
        true
    }

    async fn submit_contact(&mut self, form: NodeId) -> Result<bool> {
        let record = match self.dom.form(form) {
            Some(fields) => match fields.check_validity() {
                Ok(()) => OrderRecord::from_form(fields, chrono::Utc::now()),
                Err(e) => {
                    debug!(field = e.field(), "Contact form invalid");
                    self.dom.report_validity(form, &e);
                    return Ok(false);
                }
            },
            None => return Ok(false),
        };

        self.orders.record(&record).await?;
        self.dom.alert(messages::MESSAGE_RECEIVED);
        if let Some(fields) = self.dom.form_mut(form) {
            fields.reset();
        }
        Ok(true)
    }
}

/// Build a cart item from an add-to-cart control's data attributes.
///
/// The id is required. A missing name falls back to the id; a missing,
/// unparsable or negative price is 0.
fn product_from(dom: &impl Dom, node: NodeId) -> Option<CartItem> {
    let id = dom.attribute(node, attrs::PRODUCT_ID)?;
    let name = dom.attribute(node, attrs::PRODUCT_NAME).unwrap_or(id);
    let raw_price = dom.attribute(node, attrs::PRODUCT_PRICE).unwrap_or("");
    let price = match raw_price.trim().parse::<f64>() {
        Ok(price) => price,
        Err(_) => {
            warn!(item_id = %id, price = %raw_price, "Unreadable product price, using 0");
            0.0
        }
    };
    Some(CartItem::new(id, name, price))
}
