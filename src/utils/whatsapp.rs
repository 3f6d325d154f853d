use std::error::Error;
use std::fmt;

use chrono::NaiveDateTime;
use url::Url;

use crate::storefront::cart::CartItem;
use crate::utils::price::format_price;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutError {
    MissingPhoneNumber,
    EmptyCart,
    InvalidPhoneNumber,
}

impl Error for CheckoutError {}

impl fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutError::MissingPhoneNumber => {
                write!(f, "WhatsApp phone number is not configured")
            }
            CheckoutError::EmptyCart => write!(f, "The cart is empty"),
            CheckoutError::InvalidPhoneNumber => {
                write!(f, "WhatsApp phone number is not a valid URL segment")
            }
        }
    }
}

/// Optional contact details included at the top of the order message.
/// Empty strings count as absent, like an unfilled checkout form field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerInfo {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CustomerInfo {
    fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    fn phone(&self) -> Option<&str> {
        present(&self.phone)
    }

    fn address(&self) -> Option<&str> {
        present(&self.address)
    }

    fn is_empty(&self) -> bool {
        self.name().is_none() && self.phone().is_none() && self.address().is_none()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Renders the WhatsApp order message the shopper sends to the store.
/// The copy is Spanish by design; it is the store's own voice, not UI text.
pub fn format_order_message(
    items: &[CartItem],
    total: f64,
    customer: &CustomerInfo,
    placed_at: NaiveDateTime,
) -> String {
    let mut lines = Vec::new();

    lines.push("🛍️ *Nuevo Pedido*".to_string());
    lines.push("━━━━━━━━━━━━━━━━".to_string());
    lines.push(String::new());

    if !customer.is_empty() {
        lines.push("👤 *Información del Cliente*".to_string());
        if let Some(name) = customer.name() {
            lines.push(format!("Nombre: {name}"));
        }
        if let Some(phone) = customer.phone() {
            lines.push(format!("Teléfono: {phone}"));
        }
        if let Some(address) = customer.address() {
            lines.push(format!("Dirección: {address}"));
        }
        lines.push(String::new());
    }

    lines.push("📦 *Detalles del Pedido*".to_string());
    lines.push(String::new());

    for (index, item) in items.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, item.name));
        lines.push(format!("   Material: {}", or_dash(&item.material)));
        lines.push(format!("   Piedra principal: {}", or_dash(&item.stone)));
        lines.push(format!("   Tamaño: {}", or_dash(&item.size)));
        lines.push(format!("   Precio unitario: {}", format_price(item.price)));
        lines.push(format!("   Cantidad: {}", item.quantity));
        lines.push(format!(
            "   Subtotal: {}",
            format_price(item.price * item.quantity as f64)
        ));
        lines.push(String::new());
    }

    lines.push("━━━━━━━━━━━━━━━━".to_string());
    lines.push(format!("💰 *Total del Pedido: {}*", format_price(total)));
    lines.push(String::new());

    lines.push(format!(
        "📅 Hora del pedido: {}",
        placed_at.format("%d/%m/%Y, %H:%M")
    ));
    lines.push(String::new());
    lines.push("¡Gracias por su pedido! Nos pondremos en contacto con usted pronto.".to_string());

    lines.join("\n")
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// Builds the `https://wa.me/<phone>?text=...` link carrying the full order
/// message, percent-encoded.
pub fn order_link(
    phone_number: &str,
    items: &[CartItem],
    total: f64,
    customer: &CustomerInfo,
    placed_at: NaiveDateTime,
) -> Result<Url, CheckoutError> {
    if phone_number.is_empty() {
        return Err(CheckoutError::MissingPhoneNumber);
    }
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let message = format_order_message(items, total, customer, placed_at);

    Url::parse_with_params(
        &format!("https://wa.me/{phone_number}"),
        [("text", message.as_str())],
    )
    .map_err(|_| CheckoutError::InvalidPhoneNumber)
}

/// Single-product shortcut for the "order now" button on a product page.
pub fn quick_order_link(
    phone_number: &str,
    item: CartItem,
    customer: &CustomerInfo,
    placed_at: NaiveDateTime,
) -> Result<Url, CheckoutError> {
    let total = item.price * item.quantity as f64;

    order_link(phone_number, &[item], total, customer, placed_at)
}
