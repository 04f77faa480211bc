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

//! # Loop Consistency Checking
//!
//! Opt-in validation of loop descriptors before any partitioning arithmetic
//! runs. The schedulers trust their callers by default; when the consistency
//! check is enabled they route every incoming range through the functions in
//! this module first and surface violations as [`ConsistencyError`] instead
//! of computing with a malformed loop.

use capstan_core::num::domain::SchedNumeric;
use capstan_model::location::SourceLocation;
use capstan_model::range::LoopRange;
use num_traits::Zero;
use std::fmt::Display;

/// The error type for loop consistency violations.
///
/// Each variant carries the rendered source location of the offending
/// construct so the message can point back at user code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    /// The loop increment is zero, so the loop could never advance.
    ZeroIncrement {
        /// The rendered source location of the loop construct.
        location: String,
    },
    /// The loop bounds run against the increment direction.
    InvertedBounds {
        /// The rendered source location of the loop construct.
        location: String,
    },
    /// The iteration count does not fit the unsigned counting type.
    RangeTooLarge {
        /// The rendered source location of the loop construct.
        location: String,
    },
}

impl ConsistencyError {
    /// Returns the rendered source location the violation was raised at.
    #[inline]
    pub fn location(&self) -> &str {
        match self {
            Self::ZeroIncrement { location } => location,
            Self::InvertedBounds { location } => location,
            Self::RangeTooLarge { location } => location,
        }
    }
}

impl Display for ConsistencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroIncrement { location } => {
                write!(f, "Zero loop increment is prohibited (at {})", location)
            }
            Self::InvertedBounds { location } => {
                write!(
                    f,
                    "Loop bounds are inverted with respect to the increment direction (at {})",
                    location
                )
            }
            Self::RangeTooLarge { location } => {
                write!(
                    f,
                    "Loop iteration count overflows the counting type (at {})",
                    location
                )
            }
        }
    }
}

impl std::error::Error for ConsistencyError {}

/// Rejects loops whose increment is zero.
///
/// The partitioning arithmetic divides by the increment, so a zero increment
/// must be caught before any trip count is computed.
pub fn ensure_nonzero_increment<T>(
    range: &LoopRange<T>,
    location: &SourceLocation<'_>,
) -> Result<(), ConsistencyError>
where
    T: SchedNumeric,
{
    if range.incr().is_zero() {
        return Err(ConsistencyError::ZeroIncrement {
            location: location.to_string(),
        });
    }
    Ok(())
}

/// Rejects loops whose bounds run against the increment direction.
///
/// The distribute-level schedulers treat an empty range as a caller error
/// rather than a benign early exit, so they call this after the increment
/// check. The single-level loop scheduler does not; an empty range there is
/// answered with an empty partition.
pub fn ensure_consistent_bounds<T>(
    range: &LoopRange<T>,
    location: &SourceLocation<'_>,
) -> Result<(), ConsistencyError>
where
    T: SchedNumeric,
{
    if range.is_zero_trip() {
        return Err(ConsistencyError::InvertedBounds {
            location: location.to_string(),
        });
    }
    Ok(())
}

/// Rejects loops whose iteration count wrapped the counting type.
///
/// Trip counts are computed modulo the width of [`SchedNumeric::Count`]. A
/// span covering the full width wraps back to zero, and a zero count paired
/// with distinct bounds is exactly that overflow signature.
pub fn ensure_countable<T>(
    range: &LoopRange<T>,
    trip_count: T::Count,
    location: &SourceLocation<'_>,
) -> Result<(), ConsistencyError>
where
    T: SchedNumeric,
{
    if trip_count.is_zero() && range.upper() != range.lower() {
        return Err(ConsistencyError::RangeTooLarge {
            location: location.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonzero_increment_accepts_normal_loops() {
        let ascending = LoopRange::new(0i32, 9, 1);
        let descending = LoopRange::new(9i32, 0, -3);
        assert!(ensure_nonzero_increment(&ascending, &SourceLocation::unknown()).is_ok());
        assert!(ensure_nonzero_increment(&descending, &SourceLocation::unknown()).is_ok());
    }

    #[test]
    fn test_nonzero_increment_rejects_zero() {
        let range = LoopRange::new(0i32, 9, 0);
        let location = SourceLocation::new(";demo.c;main;42;3;;");
        let err = ensure_nonzero_increment(&range, &location).unwrap_err();
        assert_eq!(
            err,
            ConsistencyError::ZeroIncrement {
                location: ";demo.c;main;42;3;;".to_string(),
            }
        );
        assert_eq!(err.location(), ";demo.c;main;42;3;;");
    }

    #[test]
    fn test_consistent_bounds_accepts_aligned_loops() {
        let ascending = LoopRange::new(0i64, 99, 4);
        let descending = LoopRange::new(99u32, 0, -1);
        let single = LoopRange::new(5i32, 5, 1);
        assert!(ensure_consistent_bounds(&ascending, &SourceLocation::unknown()).is_ok());
        assert!(ensure_consistent_bounds(&descending, &SourceLocation::unknown()).is_ok());
        assert!(ensure_consistent_bounds(&single, &SourceLocation::unknown()).is_ok());
    }

    #[test]
    fn test_consistent_bounds_rejects_inverted_ascending() {
        let range = LoopRange::new(9i32, 0, 1);
        let err = ensure_consistent_bounds(&range, &SourceLocation::unknown()).unwrap_err();
        assert!(matches!(err, ConsistencyError::InvertedBounds { .. }));
    }

    #[test]
    fn test_consistent_bounds_rejects_inverted_descending() {
        let range = LoopRange::new(0i32, 9, -1);
        let err = ensure_consistent_bounds(&range, &SourceLocation::unknown()).unwrap_err();
        assert!(matches!(err, ConsistencyError::InvertedBounds { .. }));
    }

    #[test]
    fn test_countable_rejects_full_width_span() {
        let range = LoopRange::new(0u32, u32::MAX, 1);
        assert_eq!(range.trip_count(), 0);
        let err =
            ensure_countable(&range, range.trip_count(), &SourceLocation::unknown()).unwrap_err();
        assert!(matches!(err, ConsistencyError::RangeTooLarge { .. }));
    }

    #[test]
    fn test_countable_accepts_zero_count_on_equal_bounds() {
        // A count of zero only signals overflow when the bounds differ.
        let range = LoopRange::new(5i32, 5, 1);
        assert!(ensure_countable(&range, 0u32, &SourceLocation::unknown()).is_ok());
    }

    #[test]
    fn test_countable_accepts_representable_counts() {
        let range = LoopRange::new(0u64, 1_000_000, 7);
        assert!(ensure_countable(&range, range.trip_count(), &SourceLocation::unknown()).is_ok());
    }

    #[test]
    fn test_display_points_at_the_location() {
        let err = ConsistencyError::ZeroIncrement {
            location: ";demo.c;main;42;3;;".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Zero loop increment is prohibited (at ;demo.c;main;42;3;;)"
        );

        let err = ConsistencyError::RangeTooLarge {
            location: "<unknown>".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Loop iteration count overflows the counting type (at <unknown>)"
        );
    }
}
