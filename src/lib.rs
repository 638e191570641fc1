pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::OrderConfig;

pub use crate::adapters::{export::ExportFormat, fake_data::FakeDataGenerator};
pub use crate::core::{
    actions::{apply_action, ActionOutcome, OrderAction},
    diff::{diff, try_diff, DiffStats, Edit, EditScript},
    feed::OrderFeed,
    store::{seed_orders, ListenerId, OrderStore},
};
pub use crate::domain::model::{ActionMenu, Order, OrderId, OrderList};
pub use crate::domain::ports::{ListUpdateCallback, OrderGenerator};
pub use crate::utils::error::{OrderError, Result};
