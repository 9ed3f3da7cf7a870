#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]
#![deny(rust_2024_compatibility)]

#[cfg(test)]
extern crate std;

use core::{
    any,
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Deref, DerefMut},
    str::FromStr,
};

mod iter;
mod macros;
mod ops;
#[cfg(feature = "serde")]
mod ser;

/// A raw value of type `V` distinguished by a compile-time marker `Tag`.
///
/// Two wrappers are interchangeable only when both `V` and `Tag` match:
///
/// ```rust,compile_fail
/// use tagged::Tagged;
///
/// enum Username {}
/// enum Password {}
///
/// fn greet(name: Tagged<&str, Username>) {}
///
/// let pass: Tagged<&str, Password> = Tagged::new("pa55w0rD");
/// greet(pass); // mismatched tags
/// ```
///
/// `Tag` is never instantiated or stored; it contributes nothing to the
/// layout, which is exactly `V`'s. Marker types are typically uninhabited
/// enums, most conveniently declared with [`tag!`].
///
/// The phantom is held as `fn() -> Tag` so the wrapper stays covariant in
/// `Tag` and its auto traits (`Send`, `Sync`, `Unpin`) depend on `V` alone.
#[repr(transparent)]
pub struct Tagged<V, Tag> {
    value: V,
    _tag: PhantomData<fn() -> Tag>,
}

impl<V, Tag> Tagged<V, Tag> {
    /// Wraps a raw value. Total; the value is stored unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged::Tagged;
    ///
    /// enum Meters {}
    ///
    /// let distance: Tagged<u32, Meters> = Tagged::new(42);
    /// assert_eq!(distance.into_inner(), 42);
    /// ```
    pub const fn new(value: V) -> Self {
        Tagged {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns the raw value unchanged.
    pub fn into_inner(self) -> V {
        self.value
    }

    /// Borrows the raw value.
    ///
    /// Named `raw` rather than `get` so it cannot shadow a `get` method of
    /// `V` reachable through `Deref`.
    pub const fn raw(&self) -> &V {
        &self.value
    }

    /// Mutably borrows the raw value. Mutating through this reference
    /// mutates the wrapper, as with any single-field value.
    pub fn raw_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Transforms the raw value, preserving the tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged::Tagged;
    ///
    /// enum Meters {}
    ///
    /// let m: Tagged<u32, Meters> = Tagged::new(3);
    /// assert_eq!(m.map(|v| v * 2), Tagged::new(6));
    /// ```
    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Tagged<W, Tag> {
        Tagged::new(f(self.value))
    }

    /// Fallibly transforms the raw value, preserving the tag.
    ///
    /// Fails with exactly the closure's error; no error kind of its own.
    pub fn try_map<W, E>(self, f: impl FnOnce(V) -> Result<W, E>) -> Result<Tagged<W, Tag>, E> {
        f(self.value).map(Tagged::new)
    }

    /// Reinterprets the same raw value under a different marker.
    ///
    /// Pure and total; the representation does not change. This exists for
    /// the cases where a value's kind legitimately changes without its data
    /// changing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged::Tagged;
    ///
    /// enum Draft {}
    /// enum Published {}
    ///
    /// let draft: Tagged<&str, Draft> = Tagged::new("post");
    /// let live: Tagged<&str, Published> = draft.retag();
    /// assert_eq!(live.into_inner(), "post");
    /// ```
    pub fn retag<NewTag>(self) -> Tagged<V, NewTag> {
        Tagged::new(self.value)
    }
}

impl<V, Tag> From<V> for Tagged<V, Tag> {
    fn from(value: V) -> Self {
        Tagged::new(value)
    }
}

impl<V: Default, Tag> Default for Tagged<V, Tag> {
    fn default() -> Self {
        Tagged::new(V::default())
    }
}

// Clone and Copy are written out by hand: a derive would also bound `Tag`,
// which is never stored and must not constrain the wrapper.
impl<V: Clone, Tag> Clone for Tagged<V, Tag> {
    fn clone(&self) -> Self {
        Tagged::new(self.value.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.value.clone_from(&source.value);
    }
}

impl<V: Copy, Tag> Copy for Tagged<V, Tag> {}

impl<V, Tag> Deref for Tagged<V, Tag> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.value
    }
}

impl<V, Tag> DerefMut for Tagged<V, Tag> {
    fn deref_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<V, Tag> AsRef<V> for Tagged<V, Tag> {
    fn as_ref(&self) -> &V {
        &self.value
    }
}

impl<V, Tag> AsMut<V> for Tagged<V, Tag> {
    fn as_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

// Sound alongside the Eq/Ord/Hash forwardings below: each is exactly the
// raw value's, so `Borrow`'s consistency requirements hold.
impl<V, Tag> Borrow<V> for Tagged<V, Tag> {
    fn borrow(&self) -> &V {
        &self.value
    }
}

impl<V, Tag> BorrowMut<V> for Tagged<V, Tag> {
    fn borrow_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<V: PartialEq, Tag> PartialEq for Tagged<V, Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq, Tag> Eq for Tagged<V, Tag> {}

/// Mixed comparison against a bare raw value.
///
/// The reverse direction (`V == Tagged<V, Tag>` for an open `V`) cannot be
/// written under coherence rules; compare with the wrapper on the left.
impl<V: PartialEq, Tag> PartialEq<V> for Tagged<V, Tag> {
    fn eq(&self, other: &V) -> bool {
        self.value == *other
    }
}

impl<V: PartialOrd, Tag> PartialOrd for Tagged<V, Tag> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<V: PartialOrd, Tag> PartialOrd<V> for Tagged<V, Tag> {
    fn partial_cmp(&self, other: &V) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl<V: Ord, Tag> Ord for Tagged<V, Tag> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// Only the raw value is hashed, so `hash(wrapper) == hash(raw)`.
impl<V: Hash, Tag> Hash for Tagged<V, Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<V: fmt::Display, Tag> fmt::Display for Tagged<V, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<V: fmt::Debug, Tag> fmt::Debug for Tagged<V, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tagged<{}, {}>(",
            ShortName(any::type_name::<V>()),
            ShortName(any::type_name::<Tag>())
        )?;
        self.value.fmt(f)?;
        f.write_str(")")
    }
}

/// Prints a `type_name` output with module paths stripped from every
/// segment, so `alloc::string::String` renders as `String` and
/// `alloc::vec::Vec<u32>` as `Vec<u32>`.
struct ShortName(&'static str);

fn is_path_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ':'
}

impl fmt::Display for ShortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in self.0.split_inclusive(|c| !is_path_char(c)) {
            let (path, delim) = match piece.char_indices().last() {
                Some((i, c)) if !is_path_char(c) => piece.split_at(i),
                _ => (piece, ""),
            };
            if let Some(last) = path.rsplit("::").next() {
                f.write_str(last)?;
            }
            f.write_str(delim)?;
        }
        Ok(())
    }
}

impl<V: FromStr, Tag> FromStr for Tagged<V, Tag> {
    type Err = V::Err;

    /// Parses the raw value from text; fails exactly when `V`'s parse
    /// fails.
    fn from_str(s: &str) -> Result<Self, V::Err> {
        V::from_str(s).map(Tagged::new)
    }
}

impl<V: core::error::Error, Tag> core::error::Error for Tagged<V, Tag> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.value.source()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::format;
    use std::string::{String, ToString};

    use super::*;

    enum Username {}
    enum Password {}

    #[test]
    fn wrap_unwrap_identity() {
        let user: Tagged<String, Username> = Tagged::new("user@name.com".to_string());
        assert_eq!(user.into_inner(), "user@name.com");
    }

    #[test]
    fn accessors_share_one_value() {
        let mut user: Tagged<String, Username> = Tagged::new("user".to_string());
        user.raw_mut().push('!');
        assert_eq!(user.raw(), "user!");
        assert_eq!(user.into_inner(), "user!");
    }

    #[test]
    fn deref_forwards_members() {
        let user: Tagged<String, Username> = Tagged::new("user@name.com".to_string());
        assert!(user.contains('@'));
        assert_eq!(user.len(), 13);
    }

    #[test]
    fn deref_mut_mutates_in_place() {
        let mut user: Tagged<String, Username> = Tagged::new("user".to_string());
        user.push_str("@name.com");
        assert_eq!(*user, "user@name.com");
    }

    #[test]
    fn map_preserves_tag_and_applies() {
        let user: Tagged<String, Username> = Tagged::new("User".to_string());
        let lower: Tagged<String, Username> = user.map(|v| v.to_lowercase());
        assert_eq!(lower, Tagged::new("user".to_string()));
    }

    #[test]
    fn try_map_propagates_the_closure_error() {
        let n: Tagged<&str, Username> = Tagged::new("17");
        let parsed = n.try_map(|v| v.parse::<u32>());
        assert_eq!(parsed.unwrap(), Tagged::<u32, Username>::new(17));

        let bad: Tagged<&str, Username> = Tagged::new("abc");
        assert_eq!(
            bad.try_map(|v| v.parse::<u32>()).unwrap_err(),
            "abc".parse::<u32>().unwrap_err()
        );
    }

    #[test]
    fn retag_preserves_the_raw_value() {
        let user: Tagged<String, Username> = Tagged::new("secret".to_string());
        let pass: Tagged<String, Password> = user.retag();
        assert_eq!(pass.into_inner(), "secret");
    }

    #[test]
    fn equality_matches_the_raw_values() {
        let a: Tagged<u32, Username> = Tagged::new(7);
        let b: Tagged<u32, Username> = Tagged::new(7);
        let c: Tagged<u32, Username> = Tagged::new(8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn mixed_equality_with_raw_value() {
        let a: Tagged<u32, Username> = Tagged::new(7);
        assert_eq!(a, 7);
        assert_ne!(a, 8);
    }

    #[test]
    fn ordering_matches_the_raw_order() {
        let mut v = [
            Tagged::<u32, Username>::new(3),
            Tagged::new(1),
            Tagged::new(2),
        ];
        v.sort();
        assert_eq!(v, [Tagged::new(1), Tagged::new(2), Tagged::new(3)]);
        assert!(v[0] < 2 && v[2] > 2);
    }

    #[test]
    fn hashing_is_consistent_with_equality() {
        let mut set = HashSet::new();
        set.insert(Tagged::<&str, Username>::new("a"));
        assert!(set.contains(&Tagged::new("a")));
        assert!(!set.contains(&Tagged::new("b")));
    }

    #[test]
    fn borrow_allows_raw_keyed_lookup() {
        let mut set = HashSet::new();
        set.insert(Tagged::<String, Username>::new("a".to_string()));
        // Borrow<String> + matching Hash lets the raw value act as the key.
        assert!(set.contains(&"a".to_string()));
    }

    #[test]
    fn display_equals_the_raw_display() {
        let user: Tagged<String, Username> = Tagged::new("user@name.com".to_string());
        assert_eq!(user.to_string(), "user@name.com");
    }

    #[test]
    fn debug_names_raw_type_and_tag() {
        let user: Tagged<String, Username> = Tagged::new("u".to_string());
        assert_eq!(format!("{user:?}"), "Tagged<String, Username>(\"u\")");

        let n: Tagged<u32, Password> = Tagged::new(5);
        assert_eq!(format!("{n:?}"), "Tagged<u32, Password>(5)");
    }

    #[test]
    fn debug_strips_paths_inside_generics() {
        let v: Tagged<Option<String>, Username> = Tagged::new(None);
        assert_eq!(format!("{v:?}"), "Tagged<Option<String>, Username>(None)");
    }

    #[test]
    fn parse_fails_exactly_when_raw_parse_fails() {
        let ok: Tagged<u32, Username> = "42".parse().unwrap();
        assert_eq!(ok, Tagged::new(42));

        let err = "abc".parse::<Tagged<u32, Username>>().unwrap_err();
        assert_eq!(err, "abc".parse::<u32>().unwrap_err());
    }

    #[test]
    fn default_is_the_raw_default() {
        let d: Tagged<u32, Username> = Tagged::default();
        assert_eq!(d, Tagged::new(0));
    }

    #[test]
    fn error_forwarding_exposes_raw_error() {
        use core::error::Error;

        let raw = "x".parse::<u32>().unwrap_err();
        let wrapped: Tagged<core::num::ParseIntError, Username> = Tagged::new(raw.clone());
        assert_eq!(wrapped.to_string(), raw.to_string());
        assert!(wrapped.source().is_none());
    }

    #[test]
    fn tag_has_no_runtime_footprint() {
        use core::mem::{align_of, size_of};

        assert_eq!(size_of::<Tagged<u64, Username>>(), size_of::<u64>());
        assert_eq!(align_of::<Tagged<u64, Username>>(), align_of::<u64>());
        assert_eq!(size_of::<Tagged<String, Username>>(), size_of::<String>());
    }

    #[test]
    fn auto_traits_follow_the_raw_value_not_the_tag() {
        fn check<T: Send + Sync + Unpin>() {}

        // `*const u8` is neither Send nor Sync; as a tag it must not matter.
        check::<Tagged<u32, *const u8>>();
        check::<Tagged<String, Username>>();
    }

    #[test]
    fn clone_decouples_and_copy_shares() {
        let a: Tagged<String, Username> = Tagged::new("a".to_string());
        let mut b = a.clone();
        b.push('b');
        assert_eq!(*a, "a");
        assert_eq!(*b, "ab");

        let x: Tagged<u32, Username> = Tagged::new(1);
        let y = x;
        assert_eq!(x, y);
    }
}
