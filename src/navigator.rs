use crate::location::Location;

/// Handle to the address of one page view.
///
/// Implementations own the current location and its session history. Every
/// `push` replaces the visible address and appends exactly one history entry
/// without reloading anything. One handle belongs to one session; hosts that
/// serve several sessions at once keep one handle per session.
pub trait Navigator {
    /// The current address, read fresh on every call.
    fn current(&self) -> Location;

    /// Make `next` the current address and add it to session history.
    fn push(&mut self, next: Location);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn current(&self) -> Location {
        (**self).current()
    }

    fn push(&mut self, next: Location) {
        (**self).push(next);
    }
}
