/// Declares compile-time marker types, optionally with a [`Tagged`] alias.
///
/// Markers are uninhabited enums: they can never be instantiated, which
/// matches their role as type-level labels with no runtime representation.
///
/// # Examples
///
/// ```rust
/// use tagged::{tag, Tagged};
///
/// tag! {
///     /// Marks a validated login name.
///     pub UsernameTag => Username: String;
///     pub CountTag;
/// }
///
/// let user = Username::new("user@name.com".to_string());
/// let count: Tagged<u32, CountTag> = Tagged::new(3);
/// assert_eq!(*count, 3);
/// # let _ = user;
/// ```
///
/// [`Tagged`]: crate::Tagged
#[macro_export]
macro_rules! tag {
    () => {};
    (
        $(#[$attr:meta])* $vis:vis $name:ident => $alias:ident: $raw:ty;
        $($rest:tt)*
    ) => {
        $(#[$attr])*
        $vis enum $name {}
        $vis type $alias = $crate::Tagged<$raw, $name>;
        $crate::tag!($($rest)*);
    };
    (
        $(#[$attr:meta])* $vis:vis $name:ident;
        $($rest:tt)*
    ) => {
        $(#[$attr])*
        $vis enum $name {}
        $crate::tag!($($rest)*);
    };
}
