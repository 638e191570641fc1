use crate::core::feed::OrderFeed;
use crate::core::store::OrderStore;
use crate::domain::model::OrderId;
use crate::domain::ports::ListUpdateCallback;
use crate::utils::error::{OrderError, Result};
use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

/// A user action on a single order row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    ShowId(OrderId),
    Like(OrderId),
    Remove(OrderId),
    Move { id: OrderId, by: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Text to surface to the user, e.g. in a toast.
    Message(String),
    Applied,
    /// The order id was not in the list.
    Ignored,
    /// The row menu had this action disabled.
    Skipped(String),
}

impl FromStr for OrderAction {
    type Err = OrderError;

    fn from_str(input: &str) -> Result<Self> {
        let parse_error = |reason: &str| OrderError::ActionParseError {
            input: input.to_string(),
            reason: reason.to_string(),
        };
        let parse_id = |raw: Option<&str>| -> Result<OrderId> {
            raw.ok_or_else(|| parse_error("missing order id"))?
                .trim()
                .parse()
                .map_err(|_| parse_error("order id must be a non-negative integer"))
        };

        let mut parts = input.trim().split(':');
        let verb = parts.next().unwrap_or_default().to_ascii_lowercase();
        let id = parse_id(parts.next())?;

        let action = match verb.as_str() {
            "show" => OrderAction::ShowId(id),
            "like" => OrderAction::Like(id),
            "remove" => OrderAction::Remove(id),
            "up" => OrderAction::Move { id, by: -1 },
            "down" => OrderAction::Move { id, by: 1 },
            "move" => {
                let by = parts
                    .next()
                    .ok_or_else(|| parse_error("missing move offset"))?
                    .trim()
                    .parse()
                    .map_err(|_| parse_error("move offset must be an integer"))?;
                OrderAction::Move { id, by }
            }
            _ => return Err(parse_error("unknown action")),
        };

        if parts.next().is_some() {
            return Err(parse_error("too many segments"));
        }
        Ok(action)
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderAction::ShowId(id) => write!(f, "show:{}", id),
            OrderAction::Like(id) => write!(f, "like:{}", id),
            OrderAction::Remove(id) => write!(f, "remove:{}", id),
            OrderAction::Move { id, by: -1 } => write!(f, "up:{}", id),
            OrderAction::Move { id, by: 1 } => write!(f, "down:{}", id),
            OrderAction::Move { id, by } => write!(f, "move:{}:{}", id, by),
        }
    }
}

/// Routes an action to the store the way the row menu would.
///
/// Single-step moves are gated on the menu computed from the feed's
/// displayed list; larger offsets go straight to the store and may be
/// rejected. The feed borrow is released before the store is mutated, so a
/// feed attached as a store listener can be passed here.
pub fn apply_action<C: ListUpdateCallback>(
    store: &mut OrderStore,
    feed: &RefCell<OrderFeed<C>>,
    action: OrderAction,
) -> Result<ActionOutcome> {
    tracing::debug!("Applying action {}", action);

    let applied = |changed: bool| {
        if changed {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Ignored
        }
    };

    match action {
        OrderAction::ShowId(id) => {
            let order = store.order(id)?;
            Ok(ActionOutcome::Message(format!("Orders ID: {}", order.id)))
        }
        OrderAction::Like(id) => Ok(applied(store.like_order(id))),
        OrderAction::Remove(id) => Ok(applied(store.remove_order(id))),
        OrderAction::Move { id, by } => {
            let menu = feed.borrow().menu_for(id);
            let Some(menu) = menu else {
                return Ok(ActionOutcome::Ignored);
            };
            if by == -1 && !menu.move_up {
                return Ok(ActionOutcome::Skipped(format!(
                    "order {} is already first",
                    id
                )));
            }
            if by == 1 && !menu.move_down {
                return Ok(ActionOutcome::Skipped(format!(
                    "order {} is already last",
                    id
                )));
            }
            store.move_order(id, by).map(applied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::RecordingRenderer;
    use crate::domain::model::Order;
    use std::rc::Rc;

    type SharedFeed = Rc<RefCell<OrderFeed<RecordingRenderer>>>;

    fn store(count: u64) -> OrderStore {
        let orders: Vec<Order> = (1..=count)
            .map(|id| Order::new(id, "n", "c", "https://example.com"))
            .collect();
        OrderStore::from_orders(orders).unwrap()
    }

    /// Store plus a feed kept in sync through a listener.
    fn attached(count: u64) -> (OrderStore, SharedFeed) {
        let mut store = store(count);
        let feed = Rc::new(RefCell::new(OrderFeed::new(RecordingRenderer::default())));
        let handle = Rc::clone(&feed);
        store.add_listener(move |orders| {
            handle.borrow_mut().set_data(orders.clone());
        });
        (store, feed)
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("show:4".parse::<OrderAction>().unwrap(), OrderAction::ShowId(4));
        assert_eq!("LIKE:2".parse::<OrderAction>().unwrap(), OrderAction::Like(2));
        assert_eq!(
            "up:3".parse::<OrderAction>().unwrap(),
            OrderAction::Move { id: 3, by: -1 }
        );
        assert_eq!(
            "move:3:-2".parse::<OrderAction>().unwrap(),
            OrderAction::Move { id: 3, by: -2 }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "like", "like:x", "jump:1", "move:1", "like:1:2"] {
            assert!(
                matches!(
                    input.parse::<OrderAction>(),
                    Err(OrderError::ActionParseError { .. })
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["show:1", "like:2", "remove:3", "up:4", "down:5", "move:6:3"] {
            let action: OrderAction = text.parse().unwrap();
            assert_eq!(action.to_string(), text);
        }
    }

    #[test]
    fn test_show_id_message() {
        let (mut store, feed) = attached(3);
        assert_eq!(
            apply_action(&mut store, &*feed, OrderAction::ShowId(2)).unwrap(),
            ActionOutcome::Message("Orders ID: 2".to_string())
        );
        assert!(matches!(
            apply_action(&mut store, &*feed, OrderAction::ShowId(9)),
            Err(OrderError::NotFound { id: 9 })
        ));
    }

    #[test]
    fn test_edge_moves_are_skipped() {
        let (mut store, feed) = attached(3);
        let before = store.orders();

        let up = apply_action(&mut store, &*feed, OrderAction::Move { id: 1, by: -1 }).unwrap();
        let down = apply_action(&mut store, &*feed, OrderAction::Move { id: 3, by: 1 }).unwrap();

        assert!(matches!(up, ActionOutcome::Skipped(_)));
        assert!(matches!(down, ActionOutcome::Skipped(_)));
        assert!(std::sync::Arc::ptr_eq(&before, &store.orders()));
    }

    #[test]
    fn test_large_move_reaches_store() {
        let (mut store, feed) = attached(3);
        assert_eq!(
            apply_action(&mut store, &*feed, OrderAction::Move { id: 1, by: 2 }).unwrap(),
            ActionOutcome::Applied
        );
        assert!(matches!(
            apply_action(&mut store, &*feed, OrderAction::Move { id: 1, by: -5 }),
            Err(OrderError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let (mut store, feed) = attached(2);
        assert_eq!(
            apply_action(&mut store, &*feed, OrderAction::Like(7)).unwrap(),
            ActionOutcome::Ignored
        );
        assert_eq!(
            apply_action(&mut store, &*feed, OrderAction::Move { id: 7, by: 1 }).unwrap(),
            ActionOutcome::Ignored
        );
    }

    #[test]
    fn test_menu_follows_the_feed_not_the_store() {
        let mut store = store(3);
        let feed = RefCell::new(OrderFeed::new(RecordingRenderer::default()));
        feed.borrow_mut().set_data(store.orders());

        // store becomes [2, 1, 3] while the detached feed still shows [1, 2, 3]
        store.move_order(1, 1).unwrap();

        let up_first = apply_action(&mut store, &feed, OrderAction::Move { id: 1, by: -1 }).unwrap();
        assert!(matches!(up_first, ActionOutcome::Skipped(_)));

        assert!(matches!(
            apply_action(&mut store, &feed, OrderAction::Move { id: 2, by: -1 }),
            Err(OrderError::IndexOutOfRange { id: 2, index: -1, len: 3 })
        ));

        let down_last = apply_action(&mut store, &feed, OrderAction::Move { id: 3, by: 1 }).unwrap();
        assert!(matches!(down_last, ActionOutcome::Skipped(_)));
        assert_eq!(
            store.orders().iter().map(|order| order.id).collect::<Vec<_>>(),
            vec![2, 1, 3]
        );
    }

    #[test]
    fn test_move_of_row_missing_from_feed_is_ignored() {
        let mut store = store(3);
        let feed = RefCell::new(OrderFeed::new(RecordingRenderer::default()));

        assert_eq!(
            apply_action(&mut store, &feed, OrderAction::Move { id: 2, by: 1 }).unwrap(),
            ActionOutcome::Ignored
        );
        assert_eq!(store.position_of(2), Some(1));
    }
}
