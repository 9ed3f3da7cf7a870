//! Sequence and container forwarding.
//!
//! Iterators, indexing and collection construction all come straight from
//! the raw value; the wrapper hands out `V`'s own iterator types rather
//! than wrapping them, so iteration behaves bit-identically to iterating
//! the raw value.

use core::iter::{Extend, FromIterator};
use core::ops::{Index, IndexMut};

use crate::Tagged;

impl<V: IntoIterator, Tag> IntoIterator for Tagged<V, Tag> {
    type Item = V::Item;
    type IntoIter = V::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, V, Tag> IntoIterator for &'a Tagged<V, Tag>
where
    &'a V: IntoIterator,
{
    type Item = <&'a V as IntoIterator>::Item;
    type IntoIter = <&'a V as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.value).into_iter()
    }
}

impl<'a, V, Tag> IntoIterator for &'a mut Tagged<V, Tag>
where
    &'a mut V: IntoIterator,
{
    type Item = <&'a mut V as IntoIterator>::Item;
    type IntoIter = <&'a mut V as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&mut self.value).into_iter()
    }
}

/// Collecting builds the raw container and wraps it, covering list-shaped
/// sources and, through `(K, W)` items, map-shaped ones.
impl<A, V: FromIterator<A>, Tag> FromIterator<A> for Tagged<V, Tag> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Tagged::new(V::from_iter(iter))
    }
}

impl<A, V: Extend<A>, Tag> Extend<A> for Tagged<V, Tag> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.value.extend(iter);
    }
}

impl<V: Index<I>, I, Tag> Index<I> for Tagged<V, Tag> {
    type Output = V::Output;

    fn index(&self, index: I) -> &V::Output {
        self.value.index(index)
    }
}

impl<V: IndexMut<I>, I, Tag> IndexMut<I> for Tagged<V, Tag> {
    fn index_mut(&mut self, index: I) -> &mut V::Output {
        self.value.index_mut(index)
    }
}

#[cfg(feature = "stream")]
mod stream {
    use core::pin::Pin;
    use core::task::{Context, Poll};

    use futures_core::Stream;

    use crate::Tagged;

    impl<V: Stream, Tag> Stream for Tagged<V, Tag> {
        type Item = V::Item;

        fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<V::Item>> {
            // The raw value is structurally pinned: the wrapper is `Unpin`
            // only when `V` is, and nothing here moves the value out.
            unsafe { self.map_unchecked_mut(|this| &mut this.value) }.poll_next(cx)
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            self.value.size_hint()
        }
    }
}
