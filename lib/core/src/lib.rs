pub mod config;
pub mod error;

pub use config::StoreConfig;
pub use error::ServiceError;
