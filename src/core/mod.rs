pub mod actions;
pub mod diff;
pub mod feed;
pub mod store;
