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

//! # Capstan Core
//!
//! Numeric foundations for the Capstan static loop scheduling ecosystem.
//! Loop partitioning is dense, overflow-sensitive integer arithmetic over
//! four width/signedness combinations; this crate consolidates the numeric
//! contracts and the by-value wrapping operations the higher-level model
//! and scheduler crates are built on.
//!
//! ## Modules
//!
//! - `num`: The scheduling numeric domain (`SchedNumeric` with its signed
//!   stride and unsigned trip-count companion types, instantiated for
//!   `i32`/`u32`/`i64`/`u64`) and by-value wrapping arithmetic traits
//!   (`WrappingAddVal`, `WrappingSubVal`, `WrappingMulVal`,
//!   `WrappingNegVal`).
//!
//! ## Purpose
//!
//! Partition arithmetic is deliberately defined modulo 2^w: raw block
//! bounds are allowed to wrap and are then corrected by explicit
//! saturate-then-clamp steps. These primitives make that arithmetic
//! expressible generically, without per-width duplication and without the
//! reference-based ergonomics of the generic wrapping traits.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
