use crate::item::ItemId;

/// Whether the full-size image view is showing, and what it shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { item: ItemId, source: String },
}

impl ModalState {
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn open(&mut self, item: ItemId, source: impl Into<String>) {
        *self = ModalState::Open {
            item,
            source: source.into(),
        };
    }

    /// Close the modal; returns `false` if it was already closed.
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.is_open();
        *self = ModalState::Closed;
        was_open
    }

    pub fn displayed(&self) -> Option<&str> {
        match self {
            ModalState::Open { source, .. } => Some(source),
            ModalState::Closed => None,
        }
    }
}
