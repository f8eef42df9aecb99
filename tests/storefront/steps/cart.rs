//! Cart step definitions.

use abc_studio::page::bindings::ids;
use abc_studio::storage::{KeyValueStore, CART_KEY};
use cucumber::{given, then, when, World};

use super::page::PageContext;

/// Test context for cart scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct CartWorld {
    page: PageContext,
}

impl CartWorld {
    fn new() -> Self {
        Self {
            page: PageContext::new(),
        }
    }
}

// --- Given steps ---

#[given("the studio page is loaded")]
async fn given_page_loaded(world: &mut CartWorld) {
    world.page = PageContext::new();
}

#[given(expr = "the session cart holds {string}")]
async fn given_session_cart(world: &mut CartWorld, raw: String) {
    world.page.session.set(CART_KEY, &raw).await.unwrap();
}

// --- When steps ---

#[when(expr = "I add {string} to the cart")]
async fn when_add_product(world: &mut CartWorld, product: String) {
    let node = world.page.product(&product);
    world.page.click(node).await;
}

#[when(expr = "I add {string} to the cart {int} times")]
async fn when_add_product_times(world: &mut CartWorld, product: String, times: u32) {
    let node = world.page.product(&product);
    for _ in 0..times {
        world.page.click(node).await;
    }
}

#[when("I clear the cart")]
async fn when_clear_cart(world: &mut CartWorld) {
    let node = world.page.node(ids::CLEAR_CART);
    world.page.click(node).await;
}

#[when("I process the order")]
async fn when_process_order(world: &mut CartWorld) {
    let node = world.page.node(ids::PROCESS_ORDER);
    world.page.click(node).await;
}

// --- Then steps ---

#[then(expr = "the cart holds {int} distinct products")]
async fn then_cart_lines(world: &mut CartWorld, lines: usize) {
    let cart = world.page.storefront.cart().get_cart().await;
    assert_eq!(cart.len(), lines);
}

#[then(expr = "the cart line {string} has quantity {int}")]
async fn then_line_quantity(world: &mut CartWorld, id: String, qty: u32) {
    let cart = world.page.storefront.cart().get_cart().await;
    let item = cart
        .items()
        .iter()
        .find(|item| item.id == id)
        .unwrap_or_else(|| panic!("cart has no line {id}"));
    assert_eq!(item.qty, qty);
}

#[then(expr = "the cart total is {string}")]
async fn then_cart_total(world: &mut CartWorld, expected: String) {
    let cart = world.page.storefront.cart().get_cart().await;
    let view = abc_studio::cart::render_cart(&cart);
    assert_eq!(view.total.as_deref(), Some(expected.as_str()));
}

#[then("the cart is empty")]
async fn then_cart_empty(world: &mut CartWorld) {
    assert!(world.page.storefront.cart().get_cart().await.is_empty());
}

#[then("the session cart key is absent")]
async fn then_cart_key_absent(world: &mut CartWorld) {
    let raw = world.page.session.get(CART_KEY).await.unwrap();
    assert!(raw.is_none(), "cart key should be removed, found {raw:?}");
}

#[then(expr = "the page shows the alert {string}")]
async fn then_alert(world: &mut CartWorld, message: String) {
    assert_eq!(world.page.last_alert(), Some(message.as_str()));
}

#[then("nothing is stored in the persistent area")]
async fn then_nothing_persisted(world: &mut CartWorld) {
    assert_eq!(world.page.persistent.stored_count().await, 0);
}
