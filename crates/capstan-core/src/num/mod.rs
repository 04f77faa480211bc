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

//! # Numeric Foundations
//!
//! Traits for integer-centric scheduling arithmetic. This module pairs each
//! supported loop-bound type with its signed stride and unsigned trip-count
//! companions, and provides uniform by-value wrapping operations.
//!
//! ## Submodules
//!
//! - `domain`: The `SchedNumeric` contract tying a bound type to its stride
//!   and count types with bit-exact conversions, implemented for the four
//!   supported representations (`i32`, `u32`, `i64`, `u64`).
//! - `ops`: By-value wrapping arithmetic traits (addition, subtraction,
//!   multiplication, negation) mirroring the inherent `wrapping_*` methods
//!   on primitive integers.
//!
//! ## Motivation
//!
//! Static loop partitioning mixes three numeric roles per width: the bound
//! type itself, a signed increment/stride, and an unsigned iteration count.
//! Keeping those roles apart generically, while preserving the exact
//! two's-complement conversion behavior between them, is what makes one
//! algorithm serve all four instantiations.

pub mod domain;
pub mod ops;
