//! AvoimuusExplorer - browse, search, and export the Finnish lobbying
//! transparency register

pub mod api;
pub mod cache;
pub mod error;
pub mod explorer;
pub mod export;
pub mod filter;
pub mod locale;
pub mod models;
pub mod resolver;
pub mod view;

pub use error::AppError;
pub use explorer::Explorer;
