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

/// The schedule kind a caller requests at loop entry.
///
/// The discriminants are the wire values compilers emit for static
/// schedules; [`ScheduleKind::from_raw`] is the only sanctioned way to turn
/// an untrusted integer into a kind. The two `Distribute*` kinds select the
/// league (team-level) view of the caller and otherwise behave like their
/// plain counterparts.
///
/// # Examples
///
/// ```rust
/// # use capstan_model::policy::ScheduleKind;
///
/// assert_eq!(ScheduleKind::from_raw(34), Some(ScheduleKind::Static));
/// assert_eq!(ScheduleKind::from_raw(0), None);
/// assert_eq!(ScheduleKind::DistributeStatic.as_plain(), ScheduleKind::Static);
/// assert!(ScheduleKind::DistributeStaticChunked.is_distribute());
/// ```
#[repr(i32)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ScheduleKind {
    /// Fixed-chunk round-robin schedule.
    StaticChunked = 33,

    /// Plain static schedule; the concrete split is the configured default.
    Static = 34,

    /// Team-level variant of [`ScheduleKind::StaticChunked`].
    DistributeStaticChunked = 91,

    /// Team-level variant of [`ScheduleKind::Static`].
    DistributeStatic = 92,
}

impl ScheduleKind {
    /// Decodes a raw schedule kind, returning `None` for anything that is
    /// not a supported static kind.
    #[inline]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            33 => Some(ScheduleKind::StaticChunked),
            34 => Some(ScheduleKind::Static),
            91 => Some(ScheduleKind::DistributeStaticChunked),
            92 => Some(ScheduleKind::DistributeStatic),
            _ => None,
        }
    }

    /// Returns the wire value of this kind.
    #[inline(always)]
    pub const fn as_raw(&self) -> i32 {
        *self as i32
    }

    /// Checks whether this kind partitions across teams rather than threads.
    #[inline(always)]
    pub const fn is_distribute(&self) -> bool {
        matches!(
            self,
            ScheduleKind::DistributeStatic | ScheduleKind::DistributeStaticChunked
        )
    }

    /// Maps the distribute kinds onto their plain counterparts; plain kinds
    /// are returned unchanged.
    #[inline]
    pub const fn as_plain(&self) -> Self {
        match self {
            ScheduleKind::DistributeStatic => ScheduleKind::Static,
            ScheduleKind::DistributeStaticChunked => ScheduleKind::StaticChunked,
            plain => *plain,
        }
    }

    /// Returns a human-readable name for this kind.
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScheduleKind::StaticChunked => "static chunked",
            ScheduleKind::Static => "static",
            ScheduleKind::DistributeStaticChunked => "distribute static chunked",
            ScheduleKind::DistributeStatic => "distribute static",
        }
    }
}

impl std::fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The concrete split a range partition applies.
///
/// `Greedy` and `Balanced` both hand every participant one contiguous block;
/// they differ in how the remainder of an uneven division is placed.
/// `ChunkedRoundRobin` deals fixed-size blocks cyclically and is the only
/// policy that reads a chunk size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SchedulePolicy {
    /// Ceiling-division blocks; the final block is clamped to the range end.
    Greedy,

    /// Exact blocks differing by at most one iteration; no clamping needed.
    Balanced,

    /// Fixed-size blocks assigned cyclically by participant ordinal.
    ChunkedRoundRobin,
}

impl SchedulePolicy {
    /// Returns a human-readable name for this policy.
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SchedulePolicy::Greedy => "greedy",
            SchedulePolicy::Balanced => "balanced",
            SchedulePolicy::ChunkedRoundRobin => "chunked round-robin",
        }
    }
}

impl std::fmt::Display for SchedulePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The runtime-wide default split for plain static schedules.
///
/// A plain [`ScheduleKind::Static`] request does not name a concrete split;
/// the scheduler resolves it through this configured default. Only the two
/// contiguous-block policies are eligible.
///
/// # Examples
///
/// ```rust
/// # use capstan_model::policy::{SchedulePolicy, StaticPolicy};
///
/// assert_eq!(StaticPolicy::default(), StaticPolicy::Balanced);
/// assert_eq!(
///     StaticPolicy::Greedy.schedule_policy(),
///     SchedulePolicy::Greedy
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StaticPolicy {
    /// Resolve plain static schedules to [`SchedulePolicy::Greedy`].
    Greedy,

    /// Resolve plain static schedules to [`SchedulePolicy::Balanced`].
    Balanced,
}

impl StaticPolicy {
    /// Returns the schedule policy this default resolves to.
    #[inline(always)]
    pub const fn schedule_policy(&self) -> SchedulePolicy {
        match self {
            StaticPolicy::Greedy => SchedulePolicy::Greedy,
            StaticPolicy::Balanced => SchedulePolicy::Balanced,
        }
    }

    /// Returns a human-readable name for this policy.
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            StaticPolicy::Greedy => "greedy",
            StaticPolicy::Balanced => "balanced",
        }
    }
}

impl Default for StaticPolicy {
    fn default() -> Self {
        StaticPolicy::Balanced
    }
}

impl std::fmt::Display for StaticPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_accepts_only_static_kinds() {
        assert_eq!(ScheduleKind::from_raw(33), Some(ScheduleKind::StaticChunked));
        assert_eq!(ScheduleKind::from_raw(34), Some(ScheduleKind::Static));
        assert_eq!(
            ScheduleKind::from_raw(91),
            Some(ScheduleKind::DistributeStaticChunked)
        );
        assert_eq!(
            ScheduleKind::from_raw(92),
            Some(ScheduleKind::DistributeStatic)
        );

        // Dynamic, guided, and ordered kinds are all rejected.
        for raw in [-1, 0, 32, 35, 41, 45, 66, 72, 90, 93] {
            assert_eq!(ScheduleKind::from_raw(raw), None, "raw = {}", raw);
        }
    }

    #[test]
    fn test_raw_roundtrip() {
        for kind in [
            ScheduleKind::StaticChunked,
            ScheduleKind::Static,
            ScheduleKind::DistributeStaticChunked,
            ScheduleKind::DistributeStatic,
        ] {
            assert_eq!(ScheduleKind::from_raw(kind.as_raw()), Some(kind));
        }
    }

    #[test]
    fn test_as_plain_degrades_distribute_kinds() {
        assert_eq!(
            ScheduleKind::DistributeStatic.as_plain(),
            ScheduleKind::Static
        );
        assert_eq!(
            ScheduleKind::DistributeStaticChunked.as_plain(),
            ScheduleKind::StaticChunked
        );
        assert_eq!(ScheduleKind::Static.as_plain(), ScheduleKind::Static);
        assert_eq!(
            ScheduleKind::StaticChunked.as_plain(),
            ScheduleKind::StaticChunked
        );
    }

    #[test]
    fn test_is_distribute() {
        assert!(ScheduleKind::DistributeStatic.is_distribute());
        assert!(ScheduleKind::DistributeStaticChunked.is_distribute());
        assert!(!ScheduleKind::Static.is_distribute());
        assert!(!ScheduleKind::StaticChunked.is_distribute());
    }

    #[test]
    fn test_static_policy_maps_into_schedule_policy() {
        assert_eq!(
            StaticPolicy::Greedy.schedule_policy(),
            SchedulePolicy::Greedy
        );
        assert_eq!(
            StaticPolicy::Balanced.schedule_policy(),
            SchedulePolicy::Balanced
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(format!("{}", ScheduleKind::Static), "static");
        assert_eq!(
            format!("{}", ScheduleKind::DistributeStaticChunked),
            "distribute static chunked"
        );
        assert_eq!(
            format!("{}", SchedulePolicy::ChunkedRoundRobin),
            "chunked round-robin"
        );
        assert_eq!(format!("{}", StaticPolicy::Balanced), "balanced");
    }
}
