pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod views;

pub use db::{Todo, TodoStorage};
pub use error::{TodoError, ValidationError};
pub use service::TodoService;
