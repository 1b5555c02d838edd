use crate::error::GalleryError;
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadProgress {
    Pending { loaded: usize, expected: usize },
    /// Reported exactly once, for the completion that fills the set.
    Complete,
}

/// Counts image completions against the expected total.
///
/// Completions may arrive in any order. Out-of-range and repeated indices are
/// rejected so the `Complete` transition cannot fire twice.
#[derive(Clone, Debug)]
pub struct LoadTracker {
    expected: usize,
    completed: FnvHashSet<usize>,
}

impl LoadTracker {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            completed: FnvHashSet::default(),
        }
    }

    pub fn record(&mut self, index: usize) -> Result<LoadProgress, GalleryError> {
        if index >= self.expected {
            return Err(GalleryError::UnknownImage {
                index,
                expected: self.expected,
            });
        }
        if !self.completed.insert(index) {
            return Err(GalleryError::DuplicateCompletion(index));
        }
        if self.completed.len() == self.expected {
            Ok(LoadProgress::Complete)
        } else {
            Ok(LoadProgress::Pending {
                loaded: self.completed.len(),
                expected: self.expected,
            })
        }
    }

    #[inline]
    pub fn loaded(&self) -> usize {
        self.completed.len()
    }

    #[inline]
    pub fn expected(&self) -> usize {
        self.expected
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completed.len() == self.expected
    }
}
