pub mod client;
pub mod error;
pub mod traits;

pub use client::HttpApi;
pub use error::ApiError;
pub use traits::PropertyApi;
