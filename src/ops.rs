//! Operand-wise arithmetic forwarding.
//!
//! Every impl delegates straight to the raw value and re-wraps under the
//! same tag: `Tagged(a) + Tagged(b) == Tagged(a + b)`. Operands must share
//! both the raw type and the tag, so quantities of different kinds never
//! mix silently.

use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::Tagged;

macro_rules! forward_binop {
    ($($trait:ident::$method:ident),* $(,)?) => {$(
        impl<V: $trait<Output = V>, Tag> $trait for Tagged<V, Tag> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Tagged::new(self.value.$method(rhs.value))
            }
        }
    )*};
}

macro_rules! forward_binop_assign {
    ($($trait:ident::$method:ident),* $(,)?) => {$(
        impl<V: $trait, Tag> $trait for Tagged<V, Tag> {
            fn $method(&mut self, rhs: Self) {
                self.value.$method(rhs.value);
            }
        }
    )*};
}

forward_binop!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
forward_binop_assign!(
    AddAssign::add_assign,
    SubAssign::sub_assign,
    MulAssign::mul_assign,
    DivAssign::div_assign,
    RemAssign::rem_assign,
);

impl<V: Neg<Output = V>, Tag> Neg for Tagged<V, Tag> {
    type Output = Self;

    fn neg(self) -> Self {
        Tagged::new(self.value.neg())
    }
}

impl<V: Sum, Tag> Sum for Tagged<V, Tag> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Tagged::new(iter.map(Tagged::into_inner).sum())
    }
}

impl<V: Product, Tag> Product for Tagged<V, Tag> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        Tagged::new(iter.map(Tagged::into_inner).product())
    }
}

impl<V, Tag> Tagged<V, Tag> {
    /// Advances the raw value by an offset, preserving the tag.
    ///
    /// The offset type is whatever `V` accepts, so an instant tagged as a
    /// deadline can move by a bare duration without changing kind.
    pub fn advanced_by<D>(self, offset: D) -> Self
    where
        V: Add<D, Output = V>,
    {
        Tagged::new(self.value + offset)
    }

    /// Distance from `self` to `other`, as `V`'s own difference type.
    pub fn distance_to<D>(self, other: Self) -> D
    where
        V: Sub<V, Output = D>,
    {
        other.value - self.value
    }
}

#[cfg(feature = "num")]
mod num {
    use num_traits::{FromPrimitive, Num, NumCast, One, Signed, ToPrimitive, Zero};

    use crate::Tagged;

    impl<V: Zero, Tag> Zero for Tagged<V, Tag> {
        fn zero() -> Self {
            Tagged::new(V::zero())
        }

        fn is_zero(&self) -> bool {
            self.value.is_zero()
        }

        fn set_zero(&mut self) {
            self.value.set_zero();
        }
    }

    impl<V: One, Tag> One for Tagged<V, Tag> {
        fn one() -> Self {
            Tagged::new(V::one())
        }

        fn set_one(&mut self) {
            self.value.set_one();
        }
    }

    impl<V: Num, Tag> Num for Tagged<V, Tag> {
        type FromStrRadixErr = V::FromStrRadixErr;

        fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
            V::from_str_radix(str, radix).map(Tagged::new)
        }
    }

    impl<V: Signed, Tag> Signed for Tagged<V, Tag> {
        fn abs(&self) -> Self {
            Tagged::new(self.value.abs())
        }

        fn abs_sub(&self, other: &Self) -> Self {
            Tagged::new(self.value.abs_sub(&other.value))
        }

        fn signum(&self) -> Self {
            Tagged::new(self.value.signum())
        }

        fn is_positive(&self) -> bool {
            self.value.is_positive()
        }

        fn is_negative(&self) -> bool {
            self.value.is_negative()
        }
    }

    impl<V: ToPrimitive, Tag> ToPrimitive for Tagged<V, Tag> {
        fn to_i64(&self) -> Option<i64> {
            self.value.to_i64()
        }

        fn to_u64(&self) -> Option<u64> {
            self.value.to_u64()
        }

        fn to_i128(&self) -> Option<i128> {
            self.value.to_i128()
        }

        fn to_u128(&self) -> Option<u128> {
            self.value.to_u128()
        }

        fn to_f64(&self) -> Option<f64> {
            self.value.to_f64()
        }
    }

    // Exact construction from a wider numeric type: `None` exactly when
    // `V`'s own conversion yields `None`.
    impl<V: FromPrimitive, Tag> FromPrimitive for Tagged<V, Tag> {
        fn from_i64(n: i64) -> Option<Self> {
            V::from_i64(n).map(Tagged::new)
        }

        fn from_u64(n: u64) -> Option<Self> {
            V::from_u64(n).map(Tagged::new)
        }

        fn from_i128(n: i128) -> Option<Self> {
            V::from_i128(n).map(Tagged::new)
        }

        fn from_u128(n: u128) -> Option<Self> {
            V::from_u128(n).map(Tagged::new)
        }

        fn from_f64(n: f64) -> Option<Self> {
            V::from_f64(n).map(Tagged::new)
        }
    }

    impl<V: NumCast, Tag> NumCast for Tagged<V, Tag> {
        fn from<T: ToPrimitive>(n: T) -> Option<Self> {
            V::from(n).map(Tagged::new)
        }
    }
}
