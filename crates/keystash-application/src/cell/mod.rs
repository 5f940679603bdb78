//! Storage-backed value cells

pub mod value_cell;

pub use value_cell::{CellSubscription, ValueCell};
