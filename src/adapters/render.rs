use crate::domain::ports::ListUpdateCallback;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListUpdate {
    Removed(usize),
    Moved(usize, usize),
    Inserted(usize),
    Changed(usize),
}

/// Keeps every dispatched update and the resulting row count.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Vec<ListUpdate>,
    item_count: usize,
}

impl RecordingRenderer {
    pub fn events(&self) -> &[ListUpdate] {
        &self.events
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ListUpdateCallback for RecordingRenderer {
    fn on_removed(&mut self, position: usize) {
        self.item_count = self.item_count.saturating_sub(1);
        self.events.push(ListUpdate::Removed(position));
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        self.events.push(ListUpdate::Moved(from, to));
    }

    fn on_inserted(&mut self, position: usize) {
        self.item_count += 1;
        self.events.push(ListUpdate::Inserted(position));
    }

    fn on_changed(&mut self, position: usize) {
        self.events.push(ListUpdate::Changed(position));
    }
}

/// Logs each update instead of drawing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRenderer;

impl ListUpdateCallback for TracingRenderer {
    fn on_removed(&mut self, position: usize) {
        tracing::info!("➖ row {} removed", position);
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        tracing::info!("↕️ row {} moved to {}", from, to);
    }

    fn on_inserted(&mut self, position: usize) {
        tracing::debug!("➕ row {} inserted", position);
    }

    fn on_changed(&mut self, position: usize) {
        tracing::info!("🔄 row {} changed", position);
    }
}
