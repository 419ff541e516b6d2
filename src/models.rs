//! Frontend Models
//!
//! Data structures matching the backend wire format, plus the
//! client-local draft used by the admin form.

use serde::{Deserialize, Serialize};

/// Default image used when a new item is created without one
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// Menu item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

/// Create payload: menu item fields minus the server-assigned id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

/// Partial update payload for PATCH
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Transient admin form state. Price is kept as a raw string so the
/// field tolerates in-progress typing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl Draft {
    /// Populate the form from an existing item for editing.
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            image: item.image.clone(),
        }
    }

    /// Submittable when name and price are non-empty after trimming and
    /// price parses as a finite number.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.price.trim().is_empty()
            && self
                .price
                .trim()
                .parse::<f64>()
                .map(|p| p.is_finite())
                .unwrap_or(false)
    }

    /// Build the create payload, defaulting a blank image to the
    /// placeholder. Returns `None` when the draft is not submittable.
    pub fn to_create_payload(&self) -> Option<NewMenuItem> {
        let price = self.parsed_price()?;
        let image = self.image.trim();
        Some(NewMenuItem {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            image: if image.is_empty() {
                PLACEHOLDER_IMAGE.to_string()
            } else {
                image.to_string()
            },
        })
    }

    /// Build the update payload with all editable fields populated.
    /// Returns `None` when the draft is not submittable.
    pub fn to_update_payload(&self) -> Option<MenuItemPatch> {
        let price = self.parsed_price()?;
        Some(MenuItemPatch {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            price: Some(price),
            image: Some(self.image.trim().to_string()),
        })
    }

    fn parsed_price(&self) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }
        self.price.trim().parse().ok()
    }
}
