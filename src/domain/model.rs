use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type OrderId = u64;

/// 不可變的訂單快照，每次變更都會產生新的實例
pub type OrderList = Arc<[Order]>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub company_name: String,
    pub photo: String,
    pub is_liked: bool,
}

impl Order {
    pub fn new(
        id: OrderId,
        name: impl Into<String>,
        company_name: impl Into<String>,
        photo: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            company_name: company_name.into(),
            photo: photo.into(),
            is_liked: false,
        }
    }

    /// Returns a copy with the liked flag flipped.
    pub fn toggled_like(&self) -> Self {
        Self {
            is_liked: !self.is_liked,
            ..self.clone()
        }
    }
}

/// Which row actions are enabled for an order at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionMenu {
    pub move_up: bool,
    pub move_down: bool,
    pub remove: bool,
}

impl ActionMenu {
    pub fn for_position(position: usize, len: usize) -> Self {
        Self {
            move_up: position > 0,
            move_down: position + 1 < len,
            remove: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_like_keeps_other_fields() {
        let order = Order::new(7, "Ada Lovelace", "Analytical Engines", "https://example.com/7");
        let liked = order.toggled_like();

        assert!(liked.is_liked);
        assert_eq!(liked.id, order.id);
        assert_eq!(liked.name, order.name);
        assert_eq!(liked.toggled_like(), order);
    }

    #[test]
    fn test_action_menu_edges() {
        let first = ActionMenu::for_position(0, 3);
        assert!(!first.move_up);
        assert!(first.move_down);

        let last = ActionMenu::for_position(2, 3);
        assert!(last.move_up);
        assert!(!last.move_down);

        let only = ActionMenu::for_position(0, 1);
        assert!(!only.move_up && !only.move_down && only.remove);
    }
}
