use crate::compat::Vec;
use crate::error::Result;
use crate::location::Location;
use crate::navigator::Navigator;

/// Maximum number of entries kept per session, matching the browsers' default
/// session history limit.
pub const MAX_ENTRIES: usize = 50;

/// In-memory session history for one page view.
///
/// Behaves like a browser tab: `push` drops any forward entries and appends,
/// `back`/`forward`/`go` move a cursor over the entries, and moves past either
/// end are ignored. There is always at least one entry and never more than
/// [`MAX_ENTRIES`]; on overflow the oldest entry is evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<Location>,
    index: usize,
}

impl SessionHistory {
    pub fn new(initial: Location) -> Self {
        let mut entries = Vec::with_capacity(4);
        entries.push(initial);
        Self { entries, index: 0 }
    }

    /// Start a session at the given address.
    ///
    /// # Errors
    ///
    /// Returns an error if `href` is not an absolute path address.
    pub fn parse(href: &str) -> Result<Self> {
        Location::parse(href).map(Self::new)
    }

    /// The entry the cursor points at
    pub fn location(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Number of entries, including any forward entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a session starts with one entry and never loses it.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current entry, 0-based
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Overwrite the current entry without adding a new one.
    pub fn replace(&mut self, location: Location) {
        tracing::debug!(href = %location, index = self.index, "history replace");
        self.entries[self.index] = location;
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Move `delta` entries. Returns false, leaving the cursor where it was,
    /// if the target is outside the history.
    pub fn go(&mut self, delta: isize) -> bool {
        let Some(target) = self.index.checked_add_signed(delta) else {
            return false;
        };
        if target >= self.entries.len() {
            return false;
        }
        self.index = target;
        tracing::debug!(index = target, href = %self.entries[target], "history traverse");
        true
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

impl Navigator for SessionHistory {
    fn current(&self) -> Location {
        self.location().clone()
    }

    fn push(&mut self, next: Location) {
        self.entries.truncate(self.index + 1);
        if self.entries.len() == MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push(next);
        self.index = self.entries.len() - 1;
        tracing::debug!(href = %self.entries[self.index], depth = self.entries.len(), "history push");
    }
}
