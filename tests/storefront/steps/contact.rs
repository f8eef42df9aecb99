//! Contact and subscribe form step definitions.

use abc_studio::orders::OrderRecord;
use abc_studio::page::bindings::ids;
use abc_studio::page::demo::{SUBSCRIBE_BUTTON, SUBSCRIBE_FORM};
use abc_studio::page::{Dom, PageEvent, ValidationError};
use abc_studio::storage::{KeyValueStore, ORDERS_KEY};
use cucumber::{given, then, when, World};

use super::page::PageContext;

/// Test context for form scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ContactWorld {
    page: PageContext,
}

impl ContactWorld {
    fn new() -> Self {
        Self {
            page: PageContext::new(),
        }
    }

    fn form_value(&self, form_id: &str, field: &str) -> String {
        let form = self.page.node(form_id);
        self.page
            .storefront
            .dom()
            .form(form)
            .and_then(|form| form.value(field))
            .unwrap_or_default()
            .to_string()
    }

    fn last_report(&self) -> Option<&ValidationError> {
        self.page
            .storefront
            .dom()
            .validity_reports()
            .last()
            .map(|(_, error)| error)
    }
}

fn record_field<'a>(record: &'a OrderRecord, field: &str) -> &'a str {
    match field {
        "fullName" => &record.full_name,
        "email" => &record.email,
        "phone" => &record.phone,
        "contactReason" => &record.contact_reason,
        "message" => &record.message,
        "customOrder" => &record.custom_order,
        other => panic!("unknown order field {other}"),
    }
}

// --- Given steps ---

#[given("the studio page is loaded")]
async fn given_page_loaded(world: &mut ContactWorld) {
    world.page = PageContext::new();
}

#[given(expr = "the order log holds {string}")]
async fn given_order_log(world: &mut ContactWorld, raw: String) {
    world.page.persistent.set(ORDERS_KEY, &raw).await.unwrap();
}

#[given("a complete contact form")]
async fn given_complete_contact(world: &mut ContactWorld) {
    let dom = world.page.storefront.dom_mut();
    dom.fill(ids::CONTACT_FORM, "fullName", "Jo Smith");
    dom.fill(ids::CONTACT_FORM, "email", "jo@example.com");
    dom.fill(ids::CONTACT_FORM, "contactReason", "custom-order");
    dom.fill(ids::CONTACT_FORM, "message", "Two mats please");
}

// --- When steps ---

#[when(expr = "I fill the contact field {string} with {string}")]
async fn when_fill_contact(world: &mut ContactWorld, field: String, value: String) {
    let filled = world
        .page
        .storefront
        .dom_mut()
        .fill(ids::CONTACT_FORM, &field, value);
    assert!(filled, "contact form has no field {field}");
}

#[when(expr = "I fill the subscribe email with {string}")]
async fn when_fill_subscribe(world: &mut ContactWorld, value: String) {
    world
        .page
        .storefront
        .dom_mut()
        .fill(SUBSCRIBE_FORM, "email", value);
}

#[when("I submit the contact form")]
async fn when_submit_contact(world: &mut ContactWorld) {
    let form = world.page.node(ids::CONTACT_FORM);
    world.page.dispatch(PageEvent::Submit(form)).await;
}

#[when("I click subscribe")]
async fn when_click_subscribe(world: &mut ContactWorld) {
    let button = world.page.node(SUBSCRIBE_BUTTON);
    world.page.click(button).await;
}

// --- Then steps ---

#[then(expr = "the order log has {int} entries")]
async fn then_order_count(world: &mut ContactWorld, count: usize) {
    assert_eq!(world.page.storefront.orders().orders().await.len(), count);
}

#[then(expr = "the last order has {string} set to {string}")]
async fn then_last_order_field(world: &mut ContactWorld, field: String, expected: String) {
    let last = world
        .page
        .storefront
        .orders()
        .last_order()
        .await
        .expect("a last order is stored");
    assert_eq!(record_field(&last, &field), expected);
}

#[then("the last order matches the newest log entry")]
async fn then_last_matches_log(world: &mut ContactWorld) {
    let orders = world.page.storefront.orders();
    let last = orders.last_order().await;
    assert_eq!(last.as_ref(), orders.orders().await.last());
}

#[then("the last order has a UTC timestamp")]
async fn then_last_order_timestamp(world: &mut ContactWorld) {
    let last = world
        .page
        .storefront
        .orders()
        .last_order()
        .await
        .expect("a last order is stored");
    assert!(last.timestamp.ends_with('Z'), "{}", last.timestamp);
    assert!(chrono::DateTime::parse_from_rfc3339(&last.timestamp).is_ok());
}

#[then("nothing is stored in the order log")]
async fn then_log_absent(world: &mut ContactWorld) {
    let raw = world.page.persistent.get(ORDERS_KEY).await.unwrap();
    assert!(raw.is_none());
}

#[then(expr = "the contact field {string} is empty")]
async fn then_contact_field_empty(world: &mut ContactWorld, field: String) {
    assert_eq!(world.form_value(ids::CONTACT_FORM, &field), "");
}

#[then(expr = "the contact field {string} still reads {string}")]
async fn then_contact_field_kept(world: &mut ContactWorld, field: String, expected: String) {
    assert_eq!(world.form_value(ids::CONTACT_FORM, &field), expected);
}

#[then("the subscribe email is empty")]
async fn then_subscribe_empty(world: &mut ContactWorld) {
    assert_eq!(world.form_value(SUBSCRIBE_FORM, "email"), "");
}

#[then(expr = "the subscribe email still reads {string}")]
async fn then_subscribe_kept(world: &mut ContactWorld, expected: String) {
    assert_eq!(world.form_value(SUBSCRIBE_FORM, "email"), expected);
}

#[then(expr = "the form reports {string} as missing")]
async fn then_reports_missing(world: &mut ContactWorld, field: String) {
    match world.last_report() {
        Some(ValidationError::ValueMissing { field: reported }) => assert_eq!(reported, &field),
        other => panic!("expected a missing-value report, got {other:?}"),
    }
}

#[then(expr = "the form reports {string} as malformed")]
async fn then_reports_malformed(world: &mut ContactWorld, field: String) {
    match world.last_report() {
        Some(ValidationError::TypeMismatch { field: reported }) => assert_eq!(reported, &field),
        other => panic!("expected a type-mismatch report, got {other:?}"),
    }
}

#[then(expr = "the page shows the alert {string}")]
async fn then_alert(world: &mut ContactWorld, message: String) {
    assert_eq!(world.page.last_alert(), Some(message.as_str()));
}

#[then("no alert is shown")]
async fn then_no_alert(world: &mut ContactWorld) {
    assert!(world.page.storefront.dom().alerts().is_empty());
}

#[then("the page does not navigate")]
async fn then_default_prevented(world: &mut ContactWorld) {
    let outcome = world.page.last_outcome.expect("an event was dispatched");
    assert!(outcome.default_prevented);
}
