use std::{collections::HashMap, ops::Range};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many thumbnails are shown on either side of the selected one.
const THUMBNAIL_RADIUS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Wrap-around step within `[0, len)`. Callers pass the length of a
    /// `GalleryItem`, which is never zero.
    fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("gallery item '{0}' has no images")]
pub struct EmptyGallery(pub String);

#[derive(Deserialize)]
struct RawGalleryItem {
    id: String,
    images: Vec<String>,
}

impl TryFrom<RawGalleryItem> for GalleryItem {
    type Error = EmptyGallery;

    fn try_from(raw: RawGalleryItem) -> Result<Self, Self::Error> {
        let id = raw.id.clone();
        GalleryItem::new(raw.id, raw.images).ok_or(EmptyGallery(id))
    }
}

/// One project's ordered set of preview images, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGalleryItem")]
pub struct GalleryItem {
    id: String,
    images: Vec<String>,
}

impl GalleryItem {
    /// Returns `None` when `images` is empty.
    pub fn new(id: impl Into<String>, images: Vec<String>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self {
            id: id.into(),
            images,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// Full-screen lightbox state. The images are a snapshot taken when it opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    images: Vec<String>,
    current: usize,
}

impl ModalView {
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> &str {
        &self.images[self.current]
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }
}

/// Owns the per-item inline indices and the optional lightbox.
///
/// Every mutation keeps indices inside `[0, len)`, so readers never need to
/// bounds-check. Inline and modal indices never affect each other.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    inline: HashMap<String, usize>,
    modal: Option<ModalView>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            inline: HashMap::new(),
            modal: None,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&GalleryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Inline index for `id`, defaulting to 0 before the first interaction.
    pub fn current_index(&self, id: &str) -> usize {
        self.inline.get(id).copied().unwrap_or(0)
    }

    pub fn current_image(&self, id: &str) -> Option<&str> {
        let item = self.item(id)?;
        item.images
            .get(self.current_index(id))
            .map(String::as_str)
    }

    /// Moves the inline view of `id` one image forward or back. Unknown ids are ignored.
    pub fn advance(&mut self, id: &str, direction: Direction) -> Option<usize> {
        let len = self.item(id)?.image_count();
        let next = direction.step(self.current_index(id), len);
        self.inline.insert(id.to_string(), next);
        Some(next)
    }

    /// Thumbnail click on the inline strip. Out-of-range indices clamp to the last image.
    pub fn select(&mut self, id: &str, index: usize) -> Option<usize> {
        let len = self.item(id)?.image_count();
        let index = index.min(len - 1);
        self.inline.insert(id.to_string(), index);
        Some(index)
    }

    /// Indices of the thumbnails shown around the current inline image.
    pub fn thumbnail_window(&self, id: &str) -> Range<usize> {
        let Some(item) = self.item(id) else {
            return 0..0;
        };
        let current = self.current_index(id);
        let start = current.saturating_sub(THUMBNAIL_RADIUS);
        let end = item.image_count().min(current + THUMBNAIL_RADIUS + 1);
        start..end
    }

    /// Whether a rotation timer should move this item at all.
    pub fn auto_rotates(&self, id: &str) -> bool {
        self.item(id).is_some_and(|item| item.image_count() > 1)
    }

    /// One auto-rotation tick. Advances only while the card is not hovered and
    /// has more than one image; returns the new index when it moved.
    pub fn rotate(&mut self, id: &str, paused: bool) -> Option<usize> {
        if paused || !self.auto_rotates(id) {
            return None;
        }
        self.advance(id, Direction::Next)
    }

    pub fn modal(&self) -> Option<&ModalView> {
        self.modal.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Opens the lightbox on the image currently shown inline for `id`.
    pub fn open_modal(&mut self, id: &str) -> bool {
        let Some(item) = self.item(id) else {
            return false;
        };
        self.modal = Some(ModalView {
            images: item.images.clone(),
            current: self.current_index(id),
        });
        true
    }

    pub fn advance_modal(&mut self, direction: Direction) -> Option<usize> {
        let modal = self.modal.as_mut()?;
        modal.current = direction.step(modal.current, modal.image_count());
        Some(modal.current)
    }

    /// Jumps the lightbox to `index`, clamped to the last image.
    pub fn select_modal_index(&mut self, index: usize) -> Option<usize> {
        let modal = self.modal.as_mut()?;
        modal.current = index.min(modal.image_count() - 1);
        Some(modal.current)
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Keyboard handling for the open lightbox. Returns whether `key` was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.modal.is_none() {
            return false;
        }
        match key {
            "ArrowLeft" => {
                self.advance_modal(Direction::Previous);
                true
            }
            "ArrowRight" => {
                self.advance_modal(Direction::Next);
                true
            }
            "Escape" => {
                self.close_modal();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://img.test/{i}.png")).collect()
    }

    fn gallery() -> Gallery {
        Gallery::new(vec![
            GalleryItem::new("shop", images(3)).unwrap(),
            GalleryItem::new("crafts", images(6)).unwrap(),
            GalleryItem::new("single", images(1)).unwrap(),
        ])
    }

    #[test]
    fn test_empty_item_rejected() {
        assert!(GalleryItem::new("empty", vec![]).is_none());
    }

    #[test]
    fn test_deserialize_rejects_empty_images() {
        let err = serde_json::from_str::<GalleryItem>(r#"{"id": "x", "images": []}"#).unwrap_err();
        assert!(err.to_string().contains("gallery item 'x' has no images"), "{err}");
        assert!(serde_json::from_str::<GalleryItem>(r#"{"images": []}"#).is_err());
    }

    #[test]
    fn test_deserialized_item_navigates() {
        let item: GalleryItem =
            serde_json::from_str(r#"{"id": "x", "images": ["a.png", "b.png"]}"#).unwrap();
        assert_eq!(item.id(), "x");
        assert_eq!(item.images(), ["a.png", "b.png"]);

        let mut g = Gallery::new(vec![item]);
        assert_eq!(g.select("x", 0), Some(0));
        assert!(g.open_modal("x"));
        assert_eq!(g.select_modal_index(0), Some(0));
        assert_eq!(g.modal().unwrap().current_image(), "a.png");
    }

    #[test]
    fn test_advance_three_images_wraps() {
        let mut g = gallery();
        assert_eq!(g.current_index("shop"), 0);
        assert_eq!(g.advance("shop", Direction::Next), Some(1));
        assert_eq!(g.advance("shop", Direction::Next), Some(2));
        assert_eq!(g.advance("shop", Direction::Next), Some(0));
        assert_eq!(g.current_image("shop"), Some("https://img.test/0.png"));
    }

    #[test]
    fn test_advance_full_cycle_returns_to_start() {
        for len in 1..8 {
            for start in 0..len {
                let mut g = Gallery::new(vec![GalleryItem::new("p", images(len)).unwrap()]);
                g.select("p", start);
                for _ in 0..len {
                    g.advance("p", Direction::Next);
                }
                assert_eq!(g.current_index("p"), start, "len {len} start {start}");
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        let mut g = gallery();
        for start in 0..6 {
            g.select("crafts", start);
            g.advance("crafts", Direction::Next);
            g.advance("crafts", Direction::Previous);
            assert_eq!(g.current_index("crafts"), start);
            g.advance("crafts", Direction::Previous);
            g.advance("crafts", Direction::Next);
            assert_eq!(g.current_index("crafts"), start);
        }
    }

    #[test]
    fn test_previous_from_zero_wraps_to_last() {
        let mut g = gallery();
        assert_eq!(g.advance("crafts", Direction::Previous), Some(5));
    }

    #[test]
    fn test_advance_only_touches_one_item() {
        let mut g = gallery();
        g.advance("shop", Direction::Next);
        assert_eq!(g.current_index("shop"), 1);
        assert_eq!(g.current_index("crafts"), 0);
    }

    #[test]
    fn test_advance_unknown_item_is_noop() {
        let mut g = gallery();
        assert_eq!(g.advance("missing", Direction::Next), None);
        assert_eq!(g.current_index("missing"), 0);
        assert!(g.current_image("missing").is_none());
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut g = gallery();
        assert_eq!(g.advance("single", Direction::Next), Some(0));
        assert_eq!(g.advance("single", Direction::Previous), Some(0));
        assert!(!g.auto_rotates("single"));
        assert!(g.auto_rotates("shop"));
        assert!(!g.auto_rotates("missing"));
    }

    #[test]
    fn test_rotate_advances_unless_paused() {
        let mut g = gallery();
        assert_eq!(g.rotate("shop", false), Some(1));
        assert_eq!(g.rotate("shop", true), None);
        assert_eq!(g.current_index("shop"), 1);
        assert_eq!(g.rotate("shop", false), Some(2));
        assert_eq!(g.rotate("shop", false), Some(0));
    }

    #[test]
    fn test_rotate_skips_single_and_unknown() {
        let mut g = gallery();
        assert_eq!(g.rotate("single", false), None);
        assert_eq!(g.rotate("missing", false), None);
        assert_eq!(g.current_index("single"), 0);
        assert_eq!(g.current_index("shop"), 0);
    }

    #[test]
    fn test_open_modal_snapshots_inline_index() {
        let mut g = gallery();
        g.advance("crafts", Direction::Next);
        g.advance("crafts", Direction::Next);
        assert!(g.open_modal("crafts"));
        let modal = g.modal().unwrap();
        assert_eq!(modal.current_index(), 2);
        assert_eq!(modal.image_count(), 6);
        assert_eq!(modal.current_image(), "https://img.test/2.png");
        assert_eq!(modal.counter(), "3 / 6");
    }

    #[test]
    fn test_open_then_close_leaves_inline_unchanged() {
        let mut g = gallery();
        g.select("crafts", 4);
        g.open_modal("crafts");
        g.close_modal();
        assert_eq!(g.current_index("crafts"), 4);
        assert!(!g.is_modal_open());
    }

    #[test]
    fn test_modal_and_inline_are_independent() {
        let mut g = gallery();
        g.open_modal("shop");
        g.advance_modal(Direction::Next);
        g.advance_modal(Direction::Next);
        assert_eq!(g.current_index("shop"), 0);

        g.advance("shop", Direction::Previous);
        assert_eq!(g.modal().unwrap().current_index(), 2);
        assert_eq!(g.current_index("shop"), 2);
    }

    #[test]
    fn test_select_then_advance_modal() {
        let mut g = gallery();
        g.open_modal("crafts");
        for selected in 0..6 {
            g.select_modal_index(selected);
            assert_eq!(g.advance_modal(Direction::Next), Some((selected + 1) % 6));
        }
    }

    #[test]
    fn test_select_modal_index_clamps() {
        let mut g = gallery();
        g.open_modal("shop");
        assert_eq!(g.select_modal_index(42), Some(2));
        assert_eq!(g.modal().unwrap().current_image(), "https://img.test/2.png");
    }

    #[test]
    fn test_modal_ops_without_modal_are_noops() {
        let mut g = gallery();
        assert_eq!(g.advance_modal(Direction::Next), None);
        assert_eq!(g.select_modal_index(1), None);
        g.close_modal();
        g.close_modal();
        assert!(g.modal().is_none());
    }

    #[test]
    fn test_open_unknown_item_keeps_state() {
        let mut g = gallery();
        g.open_modal("shop");
        g.advance_modal(Direction::Next);
        assert!(!g.open_modal("missing"));
        assert_eq!(g.modal().unwrap().current_index(), 1);
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut g = gallery();
        assert!(!g.handle_key("ArrowRight"));

        g.open_modal("shop");
        assert!(g.handle_key("ArrowLeft"));
        assert_eq!(g.modal().unwrap().current_index(), 2);
        assert!(g.handle_key("ArrowRight"));
        assert_eq!(g.modal().unwrap().current_index(), 0);
        assert!(!g.handle_key("Enter"));
        assert!(g.handle_key("Escape"));
        assert!(!g.is_modal_open());
    }

    #[test]
    fn test_thumbnail_window() {
        let mut g = gallery();
        assert_eq!(g.thumbnail_window("crafts"), 0..3);
        g.select("crafts", 1);
        assert_eq!(g.thumbnail_window("crafts"), 0..4);
        g.select("crafts", 3);
        assert_eq!(g.thumbnail_window("crafts"), 1..6);
        g.select("crafts", 5);
        assert_eq!(g.thumbnail_window("crafts"), 3..6);
        assert_eq!(g.thumbnail_window("single"), 0..1);
        assert_eq!(g.thumbnail_window("missing"), 0..0);
    }

    #[test]
    fn test_select_inline_clamps() {
        let mut g = gallery();
        assert_eq!(g.select("shop", 9), Some(2));
        assert_eq!(g.select("missing", 0), None);
    }
}
