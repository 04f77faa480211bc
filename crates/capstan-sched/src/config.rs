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

use capstan_model::policy::StaticPolicy;

/// Configuration for the static schedulers.
///
/// Covers the two knobs the schedulers expose: which partitioning policy an
/// unchunked static loop uses, and whether incoming loop descriptors are
/// validated before any arithmetic runs. The defaults are balanced
/// partitioning with checking disabled, matching the behavior production
/// runtimes ship with.
///
/// # Examples
///
/// ```rust
/// # use capstan_model::policy::StaticPolicy;
/// # use capstan_sched::config::SchedConfig;
///
/// let config = SchedConfig::new()
///     .static_policy(StaticPolicy::Greedy)
///     .consistency_check(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedConfig {
    pub(crate) static_policy: StaticPolicy,
    pub(crate) consistency_check: bool,
}

impl Default for SchedConfig {
    fn default() -> Self {
        Self {
            static_policy: StaticPolicy::Balanced,
            consistency_check: false,
        }
    }
}

impl SchedConfig {
    /// Creates a configuration with the default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the partitioning policy used by unchunked static loops.
    #[inline]
    pub fn static_policy(mut self, policy: StaticPolicy) -> Self {
        self.static_policy = policy;
        self
    }

    /// Enables or disables validation of incoming loop descriptors.
    ///
    /// With checking disabled the schedulers trust their callers and compute
    /// with whatever bounds arrive, wrapping arithmetic included.
    #[inline]
    pub fn consistency_check(mut self, yes: bool) -> Self {
        self.consistency_check = yes;
        self
    }
}
