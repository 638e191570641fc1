pub mod export;
pub mod fake_data;
pub mod render;
