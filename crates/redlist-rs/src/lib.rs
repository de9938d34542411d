//! redlist-rs: Rust client for the regional species Red List API
//!
//! This crate provides a small, high-level client for fetching paginated
//! species listings for a geographic region over HTTP+JSON.
//!
//! # Example
//!
//! ```no_run
//! use redlist_rs::{RedlistClient, SpeciesQuery, SpeciesSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RedlistClient::new("https://api.example.org", None)?;
//!
//!     let page = client.species(&SpeciesQuery::new("AF")).await?;
//!     for record in &page.items {
//!         println!("{} {}", record.taxon_id, record.scientific_name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod species;

pub use client::{RedlistClient, SpeciesSource};
pub use config::{CategoryEntry, ClassEntry, RedlistConfig};
pub use error::RedlistError;
pub use species::{ALL, PageResult, SpeciesQuery, SpeciesRecord};
