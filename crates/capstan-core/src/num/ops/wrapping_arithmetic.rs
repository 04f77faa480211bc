// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use core::ops::{Add, Mul, Sub};

macro_rules! wrapping_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! wrapping_impl_unary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self) -> Self {
                <$t>::$src_method(self)
            }
        }
    };
}

/// Wrapping addition by value (no references).
///
/// This trait provides a by-value API for modular addition, wrapping around
/// at the numeric bounds of the type. It mirrors the inherent `wrapping_add`
/// on primitive integers but avoids any ambiguity with reference-based trait
/// APIs.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::wrapping_arithmetic::WrappingAddVal;
///
/// let a: u8 = 250;
/// let b: u8 = 10;
/// assert_eq!(a.wrapping_add_val(b), 4); // 260 mod 256
///
/// let x: i8 = 120;
/// let y: i8 = 10;
/// assert_eq!(x.wrapping_add_val(y), -126); // Wraps past i8::MAX
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping (modular) addition by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::num::ops::wrapping_arithmetic::WrappingAddVal;
    ///
    /// let a: u8 = 250;
    /// let b: u8 = 10;
    /// assert_eq!(a.wrapping_add_val(b), 4); // 260 mod 256
    /// ```
    fn wrapping_add_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u8, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u16, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u32, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u64, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, usize, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u128, wrapping_add);

wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i8, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i16, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i32, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i64, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, isize, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i128, wrapping_add);

/// Wrapping subtraction by value (no references).
///
/// This trait provides a by-value API for modular subtraction, wrapping
/// around at the numeric bounds of the type.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::wrapping_arithmetic::WrappingSubVal;
///
/// let a: u8 = 5;
/// let b: u8 = 10;
/// assert_eq!(a.wrapping_sub_val(b), 251); // Wraps below u8::MIN
///
/// let x: i8 = -120;
/// let y: i8 = 20;
/// assert_eq!(x.wrapping_sub_val(y), 116); // Wraps past i8::MIN
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping (modular) subtraction by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::num::ops::wrapping_arithmetic::WrappingSubVal;
    ///
    /// let a: u8 = 5;
    /// let b: u8 = 10;
    /// assert_eq!(a.wrapping_sub_val(b), 251); // Wraps below u8::MIN
    /// ```
    fn wrapping_sub_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u8, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u16, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u32, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u64, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, usize, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u128, wrapping_sub);

wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i8, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i16, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i32, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i64, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, isize, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i128, wrapping_sub);

/// Wrapping multiplication by value (no references).
///
/// This trait provides a by-value API for modular multiplication, wrapping
/// around at the numeric bounds of the type.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::wrapping_arithmetic::WrappingMulVal;
///
/// let a: u8 = 64;
/// let b: u8 = 10;
/// assert_eq!(a.wrapping_mul_val(b), 128); // 640 mod 256
///
/// let x: i8 = 30;
/// let y: i8 = 10;
/// assert_eq!(x.wrapping_mul_val(y), 44); // 300 mod 256
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping (modular) multiplication by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::num::ops::wrapping_arithmetic::WrappingMulVal;
    ///
    /// let a: u8 = 64;
    /// let b: u8 = 10;
    /// assert_eq!(a.wrapping_mul_val(b), 128); // 640 mod 256
    /// ```
    fn wrapping_mul_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u8, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u16, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u32, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u64, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, usize, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, u128, wrapping_mul);

wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i8, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i16, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i32, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i64, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, isize, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i128, wrapping_mul);

/// Wrapping negation by value (no references).
///
/// This trait provides a by-value API for two's-complement negation. Unlike
/// `core::ops::Neg` it is also defined for unsigned integers, where
/// `x.wrapping_neg_val()` is `0 - x` modulo 2^w — the bit pattern a negative
/// stride takes when reinterpreted in an unsigned bound type.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::wrapping_arithmetic::WrappingNegVal;
///
/// let a: i8 = 100;
/// assert_eq!(a.wrapping_neg_val(), -100);
///
/// let b: i8 = -128;
/// assert_eq!(b.wrapping_neg_val(), -128); // i8::MIN has no positive twin
///
/// let c: u8 = 1;
/// assert_eq!(c.wrapping_neg_val(), 255); // 0 - 1 mod 256
/// ```
pub trait WrappingNegVal: Sized {
    /// Performs wrapping (modular) negation by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::num::ops::wrapping_arithmetic::WrappingNegVal;
    ///
    /// let a: u8 = 1;
    /// assert_eq!(a.wrapping_neg_val(), 255); // 0 - 1 mod 256
    /// ```
    fn wrapping_neg_val(self) -> Self;
}

wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, u8, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, u16, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, u32, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, u64, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, usize, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, u128, wrapping_neg);

wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, i8, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, i16, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, i32, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, i64, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, isize, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, i128, wrapping_neg);

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapping_add_val<T: WrappingAddVal>(a: T, b: T) -> T {
        a.wrapping_add_val(b)
    }
    fn wrapping_sub_val<T: WrappingSubVal>(a: T, b: T) -> T {
        a.wrapping_sub_val(b)
    }
    fn wrapping_mul_val<T: WrappingMulVal>(a: T, b: T) -> T {
        a.wrapping_mul_val(b)
    }
    fn wrapping_neg_val<T: WrappingNegVal>(a: T) -> T {
        a.wrapping_neg_val()
    }

    #[test]
    fn test_wrapping_add_val() {
        assert_eq!(wrapping_add_val(255u8, 1u8), 0u8);
        assert_eq!(wrapping_add_val(127i8, 1i8), -128i8);
        assert_eq!(wrapping_add_val(-128i8, -1i8), 127i8);
    }

    #[test]
    fn test_wrapping_sub_val() {
        assert_eq!(wrapping_sub_val(0u8, 1u8), 255u8);
        assert_eq!(wrapping_sub_val(-128i8, 1i8), 127i8);
        assert_eq!(wrapping_sub_val(127i8, -1i8), -128i8);
    }

    #[test]
    fn test_wrapping_mul_val() {
        assert_eq!(wrapping_mul_val(128u8, 2u8), 0u8);
        assert_eq!(wrapping_mul_val(127i8, 2i8), -2i8);
        assert_eq!(wrapping_mul_val(-128i8, 2i8), 0i8);
    }

    #[test]
    fn test_wrapping_neg_val() {
        assert_eq!(wrapping_neg_val(127i8), -127i8);
        assert_eq!(wrapping_neg_val(-128i8), -128i8);
        assert_eq!(wrapping_neg_val(0u8), 0u8);
        assert_eq!(wrapping_neg_val(3u8), 253u8);
    }
}
