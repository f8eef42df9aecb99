//! ABC Studio - storefront core
//!
//! Cart, order log and page wiring for the ABC Fitness Studio site.
//! State lives in two key-value areas: a session area for the cart and a
//! persistent area for submitted orders.

pub mod cart;
pub mod config;
pub mod orders;
pub mod page;
pub mod storage;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod utils;
