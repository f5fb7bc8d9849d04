// h5ai Content Source
//
// Lists and streams media hosted behind an h5ai directory index.
//
// Architecture:
// - h5ai::H5aiClient: JSON listing fetch + link resolution
// - h5ai::H5aiSource: ContentSource implementation (series -> episodes -> video)
// - config / logging: ambient setup used by the h5ai-browse binary

pub mod config;
pub mod error;
pub mod h5ai;
pub mod logging;
pub mod model;

pub use config::{AppConfig, SourceConfig};
pub use error::H5aiError;
pub use h5ai::{ContentSource, H5aiClient, H5aiSource};
pub use model::{Container, ContainerDetails, ContainerPage, Episode, SearchFilter, Video};
