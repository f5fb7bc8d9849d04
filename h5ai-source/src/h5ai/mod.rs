//! h5ai Source
//!
//! HTTP client for h5ai directory indexes plus the content-source adapter
//! built on top of it.
//!
//! # Example
//!
//! ```no_run
//! use h5ai_source::config::SourceConfig;
//! use h5ai_source::h5ai::{ContentSource, H5aiSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = H5aiSource::new(SourceConfig::default())?;
//! let page = source.popular(1).await?;
//! if let Some(series) = page.containers.first() {
//!     let episodes = source.episodes(series).await?;
//!     println!("{} has {} episodes", series.title, episodes.len());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod service;
pub mod types;

pub use client::{json_listing_url, resolve_link, H5aiClient};
pub use service::{containers_from, episodes_from, ContentSource, H5aiSource};
pub use types::{parse_listing, DirectoryEntry, EntryKind, ListingResult};
