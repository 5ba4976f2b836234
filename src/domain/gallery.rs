use serde::{Deserialize, Serialize};

use super::{display_date, Searchable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEvent {
    pub id: String,
    pub name: String,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub folder_id: String,
    /// Display order is significant.
    #[serde(default)]
    pub images: Vec<String>,
    /// Display order is significant.
    #[serde(default)]
    pub videos: Vec<String>,
    pub show_on_home: bool,
    pub is_pinned: bool,
}

impl GalleryEvent {
    pub fn display_date(&self) -> String {
        display_date(&self.date)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Images followed by videos, in their stored order.
    pub fn media(&self) -> Vec<MediaItem> {
        self.images
            .iter()
            .map(|url| MediaItem { kind: MediaKind::Image, url: url.clone() })
            .chain(
                self.videos
                    .iter()
                    .map(|url| MediaItem { kind: MediaKind::Video, url: url.clone() }),
            )
            .collect()
    }
}

impl Searchable for GalleryEvent {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.date.as_str(), self.description.as_str()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub url: String,
}

impl MediaItem {
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Cursor over one event's media with wraparound navigation.
#[derive(Debug, Clone)]
pub struct GalleryViewer {
    items: Vec<MediaItem>,
    index: usize,
}

impl GalleryViewer {
    /// Opening an event always starts at the first item.
    pub fn open(event: &GalleryEvent) -> Self {
        Self {
            items: event.media(),
            index: 0,
        }
    }

    /// Open an event positioned at `index`, wrapped into range.
    pub fn open_at(event: &GalleryEvent, index: usize) -> Self {
        let mut viewer = Self::open(event);
        viewer.select(index);
        viewer
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.items.get(self.index)
    }

    pub fn select(&mut self, index: usize) {
        if !self.items.is_empty() {
            self.index = index % self.items.len();
        }
    }

    pub fn next_index(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        (self.index + 1) % self.items.len()
    }

    pub fn previous_index(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        (self.index + self.items.len() - 1) % self.items.len()
    }

    pub fn next(&mut self) {
        self.index = self.next_index();
    }

    pub fn previous(&mut self) {
        self.index = self.previous_index();
    }
}
