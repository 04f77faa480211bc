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

//! # Capstan FFI
//!
//! **C-Compatible Entry Points for the Capstan Static Loop Scheduler.**
//!
//! This crate serves as the bridge between the Rust core of Capstan and
//! compiled code that lowers worksharing loops to runtime calls, whether
//! emitted by a compiler or written by hand in C or C++. It exposes a
//! stable, ABI-compliant interface designed around **Opaque Pointers**
//! (Handles) and in-out bound rewriting.
//!
//! ## Core Design Principles
//!
//! 1.  **Opaque Handles**: The scheduler (`CapstanScheduler`) is hidden
//!     behind a raw pointer. The host application never accesses struct
//!     fields directly; it uses the provided accessor functions.
//! 2.  **Explicit Lifecycle**: Memory is manually managed. Every `_new`
//!     call must have a corresponding `_free` call. The worksharing
//!     entries themselves never allocate; they rewrite the caller's loop
//!     bounds in place.
//! 3.  **Fail-Fast Safety**: To protect the integrity of the host
//!     application, this FFI layer adopts a "Fail-Fast" strategy. Passing
//!     `NULL` required pointers, negative thread ids, or unknown
//!     scheduling types results in an immediate process abort (panic)
//!     rather than undefined behavior or stack unwinding.

pub mod scheduler;
pub mod worksharing;
