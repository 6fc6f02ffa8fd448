pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod storage;
pub mod utils;

pub use error::{AppError, AppResult};
pub use storage::{MemStorage, SharedStorage, Storage};
