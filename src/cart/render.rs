//! Text projection of a cart for the cart modal.

use super::Cart;

/// What the cart modal shows for a given cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// One `"name (xqty) - $amount"` line per item, in cart order.
    pub lines: Vec<String>,
    /// `"Total: $amount"`; `None` for an empty cart.
    pub total: Option<String>,
    /// Whether the empty-state indicator is shown.
    pub empty: bool,
}

/// Render `cart` for display.
pub fn render_cart(cart: &Cart) -> CartView {
    if cart.is_empty() {
        return CartView {
            lines: Vec::new(),
            total: None,
            empty: true,
        };
    }

    let lines = cart
        .items()
        .iter()
        .map(|item| {
            format!(
                "{} (x{}) - ${}",
                item.name,
                item.qty,
                format_money(item.line_total())
            )
        })
        .collect();

    CartView {
        lines,
        total: Some(format!("Total: ${}", format_money(cart.total()))),
        empty: false,
    }
}

/// Format an amount with exactly two decimals, rounding half up at the cent.
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
