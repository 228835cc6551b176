pub mod format;
pub mod history_store;
pub mod manager;
