use crate::domain::model::{Order, OrderId, OrderList};
use crate::domain::ports::OrderGenerator;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::validate_unique_ids;
use std::collections::BTreeMap;
use std::fmt;

/// Handle returned by [`OrderStore::add_listener`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

pub type OrderListener = Box<dyn FnMut(&OrderList)>;

/// 產生 `count` 筆訂單，id 從 1 開始連續遞增
pub fn seed_orders<G: OrderGenerator + ?Sized>(count: usize, generator: &mut G) -> OrderList {
    (1..=count as OrderId)
        .map(|id| Order {
            id,
            name: generator.name(id),
            company_name: generator.company_name(id),
            photo: generator.photo(id),
            is_liked: false,
        })
        .collect()
}

/// Single source of truth for the order list.
///
/// Every successful mutation installs a fresh snapshot and synchronously
/// notifies all listeners, in registration order, before returning.
pub struct OrderStore {
    orders: OrderList,
    listeners: BTreeMap<ListenerId, OrderListener>,
    next_listener_id: u64,
}

impl OrderStore {
    pub fn new<G: OrderGenerator + ?Sized>(count: usize, generator: &mut G) -> Self {
        let orders = seed_orders(count, generator);
        tracing::info!("🌱 Seeded {} orders", orders.len());
        Self::with_snapshot(orders)
    }

    pub fn from_orders(orders: impl Into<OrderList>) -> Result<Self> {
        let orders = orders.into();
        validate_unique_ids("initial", &orders)?;
        Ok(Self::with_snapshot(orders))
    }

    fn with_snapshot(orders: OrderList) -> Self {
        Self {
            orders,
            listeners: BTreeMap::new(),
            next_listener_id: 0,
        }
    }

    pub fn orders(&self) -> OrderList {
        self.orders.clone()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn position_of(&self, id: OrderId) -> Option<usize> {
        self.orders.iter().position(|order| order.id == id)
    }

    pub fn order(&self, id: OrderId) -> Result<Order> {
        self.orders
            .iter()
            .find(|order| order.id == id)
            .cloned()
            .ok_or(OrderError::NotFound { id })
    }

    /// Flips the liked flag. Unknown ids are ignored and return `false`.
    pub fn like_order(&mut self, id: OrderId) -> bool {
        let Some(index) = self.position_of(id) else {
            tracing::debug!("Like ignored, order {} not found", id);
            return false;
        };

        let mut next = self.orders.to_vec();
        next[index] = next[index].toggled_like();
        tracing::debug!("Order {} liked: {}", id, next[index].is_liked);
        self.replace(next);
        true
    }

    /// Removes the order. Unknown ids are ignored and return `false`.
    pub fn remove_order(&mut self, id: OrderId) -> bool {
        let Some(index) = self.position_of(id) else {
            tracing::debug!("Remove ignored, order {} not found", id);
            return false;
        };

        let mut next = self.orders.to_vec();
        next.remove(index);
        tracing::debug!("Order {} removed from position {}", id, index);
        self.replace(next);
        true
    }

    /// Swaps the order with the one `move_by` positions away.
    ///
    /// Unknown ids return `Ok(false)`. A target outside the list is rejected
    /// with [`OrderError::IndexOutOfRange`] and leaves the store untouched.
    pub fn move_order(&mut self, id: OrderId, move_by: i64) -> Result<bool> {
        let Some(old_index) = self.position_of(id) else {
            tracing::debug!("Move ignored, order {} not found", id);
            return Ok(false);
        };

        let len = self.orders.len();
        let new_index = (old_index as i64).saturating_add(move_by);
        if new_index < 0 || new_index >= len as i64 {
            tracing::warn!(
                "Rejected move of order {} from {} to {} (len {})",
                id,
                old_index,
                new_index,
                len
            );
            return Err(OrderError::IndexOutOfRange {
                id,
                index: new_index,
                len,
            });
        }

        let mut next = self.orders.to_vec();
        next.swap(old_index, new_index as usize);
        tracing::debug!("Order {} moved from {} to {}", id, old_index, new_index);
        self.replace(next);
        Ok(true)
    }

    /// Registers a listener and immediately hands it the current list.
    pub fn add_listener<F>(&mut self, mut listener: F) -> ListenerId
    where
        F: FnMut(&OrderList) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;

        listener(&self.orders);
        self.listeners.insert(id, Box::new(listener));
        tracing::debug!("Listener {:?} registered ({} total)", id, self.listeners.len());
        id
    }

    /// Unregisters a listener without notifying it.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(&id).is_some();
        if removed {
            tracing::debug!("Listener {:?} removed", id);
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn replace(&mut self, next: Vec<Order>) {
        self.orders = next.into();
        self.notify_changes();
    }

    fn notify_changes(&mut self) {
        let orders = &self.orders;
        for listener in self.listeners.values_mut() {
            listener(orders);
        }
    }
}

impl fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderStore")
            .field("orders", &self.orders.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
