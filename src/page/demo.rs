//! The studio's shop page as an in-memory page.

use super::bindings::{attrs, ids};
use super::dom::{Element, Landmark, MemoryDom};
use super::form::{FieldKind, Form, FormField};
use crate::orders::fields;

/// Gallery products: (id, name, price).
pub const PRODUCTS: &[(&str, &str, &str)] = &[
    ("yoga-mat", "Yoga Mat", "24.99"),
    ("resistance-bands", "Resistance Bands", "14.50"),
    ("water-bottle", "Water Bottle", "9.99"),
    ("gift-card", "Class Pass Gift Card", "50"),
];

/// Id of the footer subscribe form.
pub const SUBSCRIBE_FORM: &str = "subscribeForm";
/// Id of the footer subscribe button.
pub const SUBSCRIBE_BUTTON: &str = "subscribeBtn";

/// Header, gallery, cart modal, contact form and footer of the shop page.
pub fn studio_page() -> MemoryDom {
    let mut dom = MemoryDom::new();

    dom.append(
        Element::new("button")
            .with_id(ids::VIEW_CART)
            .with_text("View Cart")
            .in_landmark(Landmark::Header),
    );

    for (id, name, price) in PRODUCTS {
        dom.append(
            Element::new("button")
                .with_attr("class", "btn")
                .with_attr(attrs::PRODUCT_ID, *id)
                .with_attr(attrs::PRODUCT_NAME, *name)
                .with_attr(attrs::PRODUCT_PRICE, *price)
                .with_text("Add to Cart")
                .in_landmark(Landmark::Main),
        );
    }

    dom.append(
        Element::new("div")
            .with_id(ids::CART_MODAL)
            .with_attr("role", "dialog")
            .in_landmark(Landmark::Main)
            .hidden(),
    );
    dom.append(
        Element::new("div")
            .with_attr("class", "modal-overlay")
            .with_attr(attrs::CLOSE_MODAL, "true")
            .in_landmark(Landmark::Main),
    );
    dom.append(Element::new("ul").with_id(ids::CART_ITEMS).in_landmark(Landmark::Main));
    dom.append(Element::new("p").with_id(ids::CART_TOTAL).in_landmark(Landmark::Main));
    dom.append(
        Element::new("p")
            .with_id(ids::CART_EMPTY)
            .with_text("Your cart is empty.")
            .in_landmark(Landmark::Main),
    );
    for (id, label) in [
        (ids::CLOSE_CART, "Close"),
        (ids::CLEAR_CART, "Clear Cart"),
        (ids::PROCESS_ORDER, "Process Order"),
    ] {
        dom.append(
            Element::new("button")
                .with_id(id)
                .with_text(label)
                .in_landmark(Landmark::Main),
        );
    }

    let contact = dom.append(
        Element::new("form")
            .with_id(ids::CONTACT_FORM)
            .in_landmark(Landmark::Main)
            .with_form(
                Form::new()
                    .with_field(FormField::new(fields::FULL_NAME, FieldKind::Text).required())
                    .with_field(FormField::new(fields::EMAIL, FieldKind::Email).required())
                    .with_field(FormField::new(fields::PHONE, FieldKind::Tel))
                    .with_field(
                        FormField::new(fields::CONTACT_REASON, FieldKind::Select).required(),
                    )
                    .with_field(FormField::new(fields::MESSAGE, FieldKind::TextArea).required())
                    .with_field(FormField::new(fields::CUSTOM_ORDER, FieldKind::TextArea)),
            ),
    );
    dom.append(
        Element::new("button")
            .with_attr("type", "submit")
            .with_text("Submit")
            .in_landmark(Landmark::Main)
            .owned_by(contact),
    );

    let subscribe = dom.append(
        Element::new("form")
            .with_id(SUBSCRIBE_FORM)
            .in_landmark(Landmark::Footer)
            .with_form(
                Form::new().with_field(FormField::new(fields::EMAIL, FieldKind::Email).required()),
            ),
    );
    dom.append(
        Element::new("button")
            .with_id(SUBSCRIBE_BUTTON)
            .with_attr("type", "submit")
            .with_text("Subscribe")
            .in_landmark(Landmark::Footer)
            .owned_by(subscribe),
    );

    dom
}
