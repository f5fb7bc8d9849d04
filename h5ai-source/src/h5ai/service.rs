//! h5ai content source
//!
//! Maps h5ai listings onto the host content model. Every operation is a
//! single listing fetch (or none) followed by a filter and a map.

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use tracing::debug;
use url::Url;

use super::client::H5aiClient;
use super::types::{DirectoryEntry, EntryKind};
use crate::config::SourceConfig;
use crate::error::H5aiError;
use crate::model::{Container, ContainerDetails, ContainerPage, Episode, SearchFilter, Video};

/// Description attached to every container.
pub const CONTAINER_DESCRIPTION: &str = "Folder from h5ai server.";

/// Quality label of the single video an episode resolves to.
pub const DEFAULT_QUALITY: &str = "Default";

/// Content source interface
///
/// The operations a media host calls to browse and play a remote tree.
/// Implementations must be shareable across concurrent host tasks.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Language tag of the content
    fn lang(&self) -> &str;

    /// Whether `latest` yields anything different from `popular`
    fn supports_latest(&self) -> bool;

    /// Top-level containers
    async fn popular(&self, page: u32) -> Result<ContainerPage, H5aiError>;

    /// Recently updated containers
    async fn latest(&self, page: u32) -> Result<ContainerPage, H5aiError>;

    /// Containers matching a query
    async fn search(
        &self,
        page: u32,
        query: &str,
        filters: &[SearchFilter],
    ) -> Result<ContainerPage, H5aiError>;

    /// Metadata for one container
    async fn container_details(&self, container: &Container) -> Result<ContainerDetails, H5aiError>;

    /// Playable items inside a container
    async fn episodes(&self, container: &Container) -> Result<Vec<Episode>, H5aiError>;

    /// Streams for one playable item
    async fn videos(&self, episode: &Episode) -> Result<Vec<Video>, H5aiError>;
}

/// h5ai source implementation
pub struct H5aiSource {
    config: SourceConfig,
    client: H5aiClient,
}

impl H5aiSource {
    /// Create a source; fails if the configured base URL is malformed.
    pub fn new(config: SourceConfig) -> Result<Self, H5aiError> {
        let client = H5aiClient::new(&config)?;
        Ok(Self { config, client })
    }

    #[must_use]
    pub const fn config(&self) -> &SourceConfig {
        &self.config
    }

    #[must_use]
    pub const fn client(&self) -> &H5aiClient {
        &self.client
    }

    /// Direct media URL of an episode.
    #[must_use]
    pub fn video_url(&self, episode: &Episode) -> String {
        self.client.resolve(&episode.reference)
    }
}

#[async_trait]
impl ContentSource for H5aiSource {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn lang(&self) -> &str {
        &self.config.lang
    }

    fn supports_latest(&self) -> bool {
        self.config.supports_latest
    }

    async fn popular(&self, _page: u32) -> Result<ContainerPage, H5aiError> {
        let entries = self.client.list_directory(self.client.base_url().as_str()).await?;
        Ok(ContainerPage {
            containers: containers_from(&entries),
            has_next_page: false,
        })
    }

    async fn latest(&self, page: u32) -> Result<ContainerPage, H5aiError> {
        self.popular(page).await
    }

    async fn search(
        &self,
        page: u32,
        query: &str,
        filters: &[SearchFilter],
    ) -> Result<ContainerPage, H5aiError> {
        debug!(query, filters = filters.len(), "h5ai search falls back to the root listing");
        self.popular(page).await
    }

    async fn container_details(&self, container: &Container) -> Result<ContainerDetails, H5aiError> {
        let url = self.client.resolve(&container.reference);
        Ok(ContainerDetails {
            title: last_segment_title(&url),
            description: CONTAINER_DESCRIPTION.to_string(),
            reference: container.reference.clone(),
        })
    }

    async fn episodes(&self, container: &Container) -> Result<Vec<Episode>, H5aiError> {
        let url = self.client.resolve(&container.reference);
        let entries = self.client.list_directory(&url).await?;
        Ok(episodes_from(&entries))
    }

    async fn videos(&self, episode: &Episode) -> Result<Vec<Video>, H5aiError> {
        let url = self.video_url(episode);
        Ok(vec![Video {
            url: url.clone(),
            quality: DEFAULT_QUALITY.to_string(),
            video_url: url,
        }])
    }
}

/// Directory entries as containers, in listing order.
#[must_use]
pub fn containers_from(entries: &[DirectoryEntry]) -> Vec<Container> {
    entries
        .iter()
        .filter(|entry| entry.is_dir())
        .map(|entry| Container {
            title: entry.name.clone(),
            reference: entry.link.clone(),
        })
        .collect()
}

/// File entries as episodes. The ordinal is the 1-based position in the
/// unfiltered listing.
#[must_use]
pub fn episodes_from(entries: &[DirectoryEntry]) -> Vec<Episode> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match &entry.kind {
            EntryKind::File => Some(Episode {
                title: entry.name.clone(),
                ordinal: (index + 1) as f32,
                reference: entry.link.clone(),
            }),
            EntryKind::Directory => None,
            EntryKind::Unknown(kind) => {
                debug!(name = %entry.name, kind = %kind, "skipping h5ai entry of unknown type");
                None
            }
        })
        .collect()
}

/// Last non-empty path segment of `url`, percent-decoded.
fn last_segment_title(url: &str) -> String {
    let path = Url::parse(url).map_or_else(|_| url.to_string(), |u| u.path().to_string());
    path.split('/')
        .rfind(|segment| !segment.is_empty())
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::h5ai::types::parse_listing;

    const LISTING: &str = r#"{"children":[
        {"name":"Show A","type":"dir","href":"/root/Show%20A/"},
        {"name":"ep1.mkv","type":"file","href":"/root/ep1.mkv"},
        {"name":"odd","type":"symlink","href":"/root/odd"},
        {"name":"Show B","type":"dir","href":"/root/Show%20B/"},
        {"name":"ep2.mkv","type":"file","href":"/root/ep2.mkv"}
    ]}"#;

    fn source() -> H5aiSource {
        H5aiSource::new(SourceConfig {
            base_url: "https://example.test/root".to_string(),
            ..SourceConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_containers_keep_only_directories_in_order() {
        let entries = parse_listing(LISTING).unwrap();
        let containers = containers_from(&entries);
        let titles: Vec<_> = containers.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Show A", "Show B"]);
        assert_eq!(containers[1].reference, "/root/Show%20B/");
    }

    #[test]
    fn test_episodes_use_listing_positions() {
        let entries = parse_listing(LISTING).unwrap();
        let episodes = episodes_from(&entries);
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].title, "ep1.mkv");
        assert!((episodes[0].ordinal - 2.0).abs() < f32::EPSILON);
        assert_eq!(episodes[1].title, "ep2.mkv");
        assert!((episodes[1].ordinal - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unknown_kind_is_in_neither_list() {
        let entries = parse_listing(LISTING).unwrap();
        assert!(containers_from(&entries).iter().all(|c| c.title != "odd"));
        assert!(episodes_from(&entries).iter().all(|e| e.title != "odd"));
    }

    #[test]
    fn test_last_segment_title() {
        assert_eq!(last_segment_title("https://example.test/root/Show%20A/"), "Show A");
        assert_eq!(last_segment_title("https://example.test/root/ep.mkv"), "ep.mkv");
        assert_eq!(last_segment_title("https://example.test/"), "");
    }

    #[test]
    fn test_source_constants() {
        let source = source();
        assert_eq!(source.name(), "h5ai (Custom)");
        assert_eq!(source.lang(), "en");
        assert!(!source.supports_latest());
    }

    #[test]
    fn test_source_rejects_bad_base_url() {
        let result = H5aiSource::new(SourceConfig {
            base_url: "://broken".to_string(),
            ..SourceConfig::default()
        });
        assert!(matches!(result, Err(H5aiError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_container_details_needs_no_server() {
        let container = Container {
            title: "Show A".to_string(),
            reference: "/root/Show%20A/".to_string(),
        };
        let details = source().container_details(&container).await.unwrap();
        assert_eq!(details.title, "Show A");
        assert_eq!(details.description, CONTAINER_DESCRIPTION);
        assert_eq!(details.reference, "/root/Show%20A/");
    }

    #[tokio::test]
    async fn test_videos_single_default_stream() {
        let episode = Episode {
            title: "ep1.mkv".to_string(),
            ordinal: 1.0,
            reference: "/root/Show%20A/ep1.mkv".to_string(),
        };
        let source = source();
        let videos = source.videos(&episode).await.unwrap();
        assert_eq!(
            videos,
            vec![Video {
                url: "https://example.test/root/Show%20A/ep1.mkv".to_string(),
                quality: DEFAULT_QUALITY.to_string(),
                video_url: "https://example.test/root/Show%20A/ep1.mkv".to_string(),
            }]
        );
        assert_eq!(source.video_url(&episode), videos[0].url);
    }

    #[tokio::test]
    async fn test_videos_absolute_reference_passes_through() {
        let episode = Episode {
            title: "mirror".to_string(),
            ordinal: 1.0,
            reference: "https://mirror.test/a.mp4".to_string(),
        };
        let videos = source().videos(&episode).await.unwrap();
        assert_eq!(videos[0].url, "https://mirror.test/a.mp4");
    }
}
