use crate::layout::Placement;
use std::fmt;

/// Stable identifier of a gallery item: the index of its image in the configured list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: ItemId,
    pub source: String,
    /// `None` until the first layout pass has run.
    pub placement: Option<Placement>,
}

impl GalleryItem {
    pub fn new(id: ItemId, source: impl Into<String>) -> Self {
        Self {
            id,
            source: source.into(),
            placement: None,
        }
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }
}
