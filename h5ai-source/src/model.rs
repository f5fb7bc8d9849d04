//! Host content model
//!
//! Containers are browsable collections (series), episodes are the playable
//! units inside them and videos are the fetchable streams of an episode.

use serde::{Deserialize, Serialize};

/// A browsable collection, mapped from a directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub title: String,
    /// Link as reported by the server, resolved against the base URL on use
    pub reference: String,
}

/// One page of containers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerPage {
    pub containers: Vec<Container>,
    pub has_next_page: bool,
}

/// Metadata synthesized for a container without contacting the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDetails {
    pub title: String,
    pub description: String,
    pub reference: String,
}

/// A playable item, mapped from a file entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    /// 1-based position of the file in the server listing
    pub ordinal: f32,
    pub reference: String,
}

/// A fetchable media stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub url: String,
    /// Quality label shown to the user
    pub quality: String,
    pub video_url: String,
}

/// Host-supplied search filter. h5ai ignores all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub name: String,
    pub value: String,
}
