//! Shareable event menus.
//!
//! An event menu is a title plus a list of menu item references. It travels
//! as the `event` query parameter of a link, holding unpadded URL-safe
//! base64 of the menu's JSON.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SushiError};
use crate::models::{Catalog, MenuItem, MenuItemRef};
use crate::state::Cart;

/// Query parameter carrying the encoded event menu.
pub const EVENT_PARAM: &str = "event";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMenu {
    pub title: String,
    pub items: Vec<MenuItemRef>,
}

impl EventMenu {
    pub fn new(title: impl Into<String>, items: Vec<MenuItemRef>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Event menu listing every dish in the cart, in cart order.
    pub fn from_cart(title: impl Into<String>, cart: &Cart) -> Self {
        Self::new(title, cart.entries().iter().map(|e| e.item.key()).collect())
    }
}

/// Event menu items matched back to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEvent<'a> {
    pub title: String,
    pub items: Vec<&'a MenuItem>,
    /// References the catalog no longer has.
    pub missing: Vec<MenuItemRef>,
}

/// Encode an event menu into a link under `base_url`.
pub fn encode_link(base_url: &str, event: &EventMenu) -> Result<String> {
    let json = serde_json::to_vec(event)?;
    let token = URL_SAFE_NO_PAD.encode(json);
    let sep = if base_url.contains('?') { '&' } else { '?' };
    Ok(format!("{base_url}{sep}{EVENT_PARAM}={token}"))
}

/// Decode a share link, or a bare token, back into an event menu.
pub fn decode_link(link: &str) -> Result<EventMenu> {
    let token = extract_token(link.trim());
    if token.is_empty() {
        return Err(SushiError::InvalidShareLink("no event token".to_string()));
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| SushiError::InvalidShareLink(format!("bad encoding: {e}")))?;
    let event: EventMenu = serde_json::from_slice(&bytes)
        .map_err(|e| SushiError::InvalidShareLink(format!("bad payload: {e}")))?;
    Ok(event)
}

fn extract_token(link: &str) -> &str {
    let Some((_, query)) = link.split_once('?') else {
        return link;
    };
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == EVENT_PARAM)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Match an event menu against the catalog by (name, category).
pub fn resolve<'a>(catalog: &'a Catalog, event: &EventMenu) -> ResolvedEvent<'a> {
    let mut items = Vec::new();
    let mut missing = Vec::new();

    for item_ref in &event.items {
        match catalog.menu_item(&item_ref.name, &item_ref.category) {
            Some(item) => items.push(item),
            None => {
                tracing::warn!(
                    item = %item_ref.name,
                    category = %item_ref.category,
                    "shared item not in catalog"
                );
                missing.push(item_ref.clone());
            }
        }
    }

    ResolvedEvent {
        title: event.title.clone(),
        items,
        missing,
    }
}
