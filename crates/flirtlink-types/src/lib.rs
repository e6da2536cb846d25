pub mod persona;
pub mod transcript;
pub mod wire;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::ServiceError;
pub type Result<T> = std::result::Result<T, ServiceError>;
