//! Shared page fixture for the step worlds.

use std::sync::Arc;

use abc_studio::page::bindings::{attrs, ids};
use abc_studio::page::demo::studio_page;
use abc_studio::page::{Dom, EventOutcome, Key, MemoryDom, NodeId, PageEvent, Storefront};
use abc_studio::storage::{MemoryStore, PersistentStore, SessionStore};

/// Demo page bound to fresh storage areas.
pub struct PageContext {
    pub storefront: Storefront<MemoryDom>,
    pub session: Arc<MemoryStore>,
    pub persistent: Arc<MemoryStore>,
    pub last_outcome: Option<EventOutcome>,
}

impl PageContext {
    pub fn new() -> Self {
        let session = Arc::new(MemoryStore::new());
        let persistent = Arc::new(MemoryStore::new());
        let storefront = Storefront::new(
            studio_page(),
            SessionStore::new(session.clone()),
            PersistentStore::new(persistent.clone()),
        );
        Self {
            storefront,
            session,
            persistent,
            last_outcome: None,
        }
    }

    pub fn node(&self, id: &str) -> NodeId {
        self.storefront
            .dom()
            .get_element_by_id(id)
            .unwrap_or_else(|| panic!("no element with id {id}"))
    }

    pub fn product(&self, id: &str) -> NodeId {
        self.storefront
            .dom()
            .find_by_attribute(attrs::PRODUCT_ID, id)
            .unwrap_or_else(|| panic!("no product {id}"))
    }

    pub fn overlay(&self) -> NodeId {
        self.storefront
            .dom()
            .find_by_attribute(attrs::CLOSE_MODAL, "true")
            .expect("page has a modal overlay")
    }

    pub async fn dispatch(&mut self, event: PageEvent) {
        let outcome = self
            .storefront
            .dispatch(event)
            .await
            .expect("dispatch should succeed");
        self.last_outcome = Some(outcome);
    }

    pub async fn click(&mut self, node: NodeId) {
        self.dispatch(PageEvent::Click(node)).await;
    }

    pub async fn press(&mut self, key: &str) {
        self.dispatch(PageEvent::KeyDown(Key::from_name(key))).await;
    }

    pub fn cart_modal_hidden(&self) -> bool {
        let modal = self.node(ids::CART_MODAL);
        self.storefront.dom().is_hidden(modal)
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.storefront.dom().alerts().last().map(String::as_str)
    }
}

impl std::fmt::Debug for PageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageContext")
            .field("modal_state", &self.storefront.modal_state())
            .field("alerts", &self.storefront.dom().alerts())
            .field("last_outcome", &self.last_outcome)
            .finish_non_exhaustive()
    }
}
