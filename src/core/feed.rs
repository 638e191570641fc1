use crate::core::diff::{diff, EditScript};
use crate::domain::model::{ActionMenu, Order, OrderId, OrderList};
use crate::domain::ports::ListUpdateCallback;
use std::sync::Arc;

/// View-side holder of the displayed list.
///
/// Each new snapshot is diffed against the current one and the resulting
/// edit script is dispatched to the sink so it can animate the change.
#[derive(Debug)]
pub struct OrderFeed<C: ListUpdateCallback> {
    data: OrderList,
    sink: C,
}

impl<C: ListUpdateCallback> OrderFeed<C> {
    pub fn new(sink: C) -> Self {
        Self {
            data: Arc::from(Vec::<Order>::new()),
            sink,
        }
    }

    pub fn set_data(&mut self, orders: OrderList) -> EditScript {
        if Arc::ptr_eq(&self.data, &orders) {
            return EditScript::default();
        }

        let script = diff(&self.data, &orders);
        self.data = orders;
        script.dispatch_updates_to(&mut self.sink);
        tracing::debug!("Feed updated to {} rows: {}", self.data.len(), script.stats());
        script
    }

    pub fn data(&self) -> &OrderList {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn position_of(&self, id: OrderId) -> Option<usize> {
        self.data.iter().position(|order| order.id == id)
    }

    /// Row menu enablement as the displayed list sees it.
    pub fn menu_for(&self, id: OrderId) -> Option<ActionMenu> {
        self.position_of(id)
            .map(|position| ActionMenu::for_position(position, self.data.len()))
    }

    pub fn sink(&self) -> &C {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut C {
        &mut self.sink
    }
}
