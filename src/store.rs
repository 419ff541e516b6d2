//! Local List State
//!
//! Fetch lifecycle state plus reconciliation helpers for the cached
//! menu list. Mutations run only after server confirmation, so these
//! helpers are applied to the local list once a call succeeds.

use crate::models::MenuItem;

/// Display state of a view's initial fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

impl LoadState {
    /// Failure state carrying the error message, with a generic
    /// fallback when the message is blank.
    pub fn failed(message: String) -> Self {
        if message.trim().is_empty() {
            Self::Failed("Failed to load".to_string())
        } else {
            Self::Failed(message)
        }
    }
}

/// Replace the list entry whose id matches the server's returned item
pub fn replace_item(items: &mut [MenuItem], updated: MenuItem) {
    if let Some(item) = items.iter_mut().find(|item| item.id == updated.id) {
        *item = updated;
    }
}

/// Remove an item from the list after a confirmed delete. Returns
/// true when the removed item was the one being edited, in which case
/// the caller must reset the form to create mode.
pub fn apply_delete(items: &mut Vec<MenuItem>, editing_id: Option<u32>, id: u32) -> bool {
    items.retain(|item| item.id != id);
    editing_id == Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Draft;

    fn item(id: u32, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: String::new(),
            price,
            image: "/images/placeholder.jpg".to_string(),
        }
    }

    fn sample_list() -> Vec<MenuItem> {
        vec![
            item(1, "Burger", 9.5),
            item(3, "Pizza", 11.0),
            item(4, "Fries", 3.25),
        ]
    }

    #[test]
    fn replace_touches_only_the_matching_entry() {
        let mut items = sample_list();
        replace_item(&mut items, item(3, "Pizza", 12.0));

        assert_eq!(items.len(), 3);
        assert_eq!(items[1].price, 12.0);
        assert_eq!(items[0], item(1, "Burger", 9.5));
        assert_eq!(items[2], item(4, "Fries", 3.25));
    }

    #[test]
    fn replace_with_unknown_id_is_a_no_op() {
        let mut items = sample_list();
        replace_item(&mut items, item(99, "Ghost", 1.0));
        assert_eq!(items, sample_list());
    }

    #[test]
    fn delete_drops_exactly_one_entry() {
        let mut items = sample_list();
        let clear_form = apply_delete(&mut items, None, 3);

        assert!(!clear_form);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.id != 3));
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].id, 4);
    }

    #[test]
    fn deleting_the_edited_item_resets_to_create_mode() {
        let mut items = sample_list();
        assert!(apply_delete(&mut items, Some(3), 3));
        assert!(items.iter().all(|i| i.id != 3));
    }

    #[test]
    fn deleting_another_item_keeps_the_edit_in_progress() {
        let mut items = sample_list();
        assert!(!apply_delete(&mut items, Some(3), 4));
        assert!(items.iter().any(|i| i.id == 3));
    }

    #[test]
    fn edit_then_cancel_leaves_the_list_unchanged() {
        let items = sample_list();
        let mut editing_id = Some(items[1].id);
        let mut draft = Draft::from_item(&items[1]);
        assert_eq!(editing_id, Some(3));
        assert!(draft.is_valid());

        // cancel: form state resets, no API call, list untouched
        editing_id = None;
        draft = Draft::default();

        assert_eq!(items, sample_list());
        assert_eq!(editing_id, None);
        assert_eq!(draft, Draft::default());
        assert!(!draft.is_valid());
    }

    #[test]
    fn blank_failure_message_gets_a_fallback() {
        assert_eq!(
            LoadState::failed(String::new()),
            LoadState::Failed("Failed to load".to_string())
        );
        assert_eq!(
            LoadState::failed("boom".to_string()),
            LoadState::Failed("boom".to_string())
        );
    }
}
