use crate::SelectionKey;

/// A catalog row as seen by the list core.
///
/// The core never inspects row content beyond the key; ordering is declared separately in a
/// [`crate::ComparatorTable`].
pub trait Row {
    type Key: SelectionKey + Clone;

    fn key(&self) -> &Self::Key;
}

impl<R: Row + ?Sized> Row for &R {
    type Key = R::Key;

    fn key(&self) -> &Self::Key {
        (**self).key()
    }
}
