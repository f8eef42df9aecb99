//! Cucumber step definitions for storefront behavior tests.

pub mod cart;
pub mod contact;
pub mod page;
