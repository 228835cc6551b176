pub mod plan;
pub mod projection;
pub mod request;
pub mod settings;
pub mod summary;
