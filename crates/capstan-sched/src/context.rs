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

//! # Execution Contexts
//!
//! The schedulers never track threads or teams themselves. Whoever embeds
//! them supplies an [`ExecutionContext`] that resolves a raw [`CallerId`]
//! into the caller's position among its peers, at two granularities: the
//! thread team the caller computes in, and the league of teams its team
//! belongs to. [`UniformLeague`] is the stock implementation for the common
//! rectangular case.

use capstan_model::participant::{CallerId, Participant};

/// A caller's position among its peers, as reported by an execution context.
///
/// Bundles the [`Participant`] with whether the surrounding team executes
/// serialized. A serialized team hands whole loops to single callers instead
/// of partitioning them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamView {
    participant: Participant,
    serialized: bool,
}

impl TeamView {
    /// Creates a view from a participant and the serialization flag.
    #[inline]
    pub const fn new(participant: Participant, serialized: bool) -> Self {
        Self {
            participant,
            serialized,
        }
    }

    /// Returns the caller's position among its peers.
    #[inline]
    pub const fn participant(&self) -> Participant {
        self.participant
    }

    /// Returns whether the team executes serialized.
    #[inline]
    pub const fn is_serialized(&self) -> bool {
        self.serialized
    }
}

/// Resolves caller identities into positions within a parallel region.
///
/// The two granularities correspond to the two levels a distribute loop is
/// split at: [`league_view`](ExecutionContext::league_view) positions the
/// caller's team among all teams, [`thread_view`](ExecutionContext::thread_view)
/// positions the caller among the threads of its team.
pub trait ExecutionContext {
    /// Resolves the caller's position among the threads of its team.
    fn thread_view(&self, caller: CallerId) -> TeamView;

    /// Resolves the position of the caller's team among all teams.
    fn league_view(&self, caller: CallerId) -> TeamView;
}

/// A rectangular league of `num_teams` teams with `team_size` threads each.
///
/// Caller identities map row-major: caller `id` sits at thread
/// `id % team_size` of team `(id / team_size) % num_teams`. Identities past
/// the league size wrap around, so every [`CallerId`] resolves.
///
/// # Examples
///
/// ```rust
/// # use capstan_model::participant::CallerId;
/// # use capstan_sched::context::{ExecutionContext, UniformLeague};
///
/// let league = UniformLeague::new(2, 4);
/// let view = league.thread_view(CallerId::new(5));
/// assert_eq!(view.participant().ordinal(), 1);
/// assert_eq!(view.participant().cardinality(), 4);
///
/// let view = league.league_view(CallerId::new(5));
/// assert_eq!(view.participant().ordinal(), 1);
/// assert_eq!(view.participant().cardinality(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformLeague {
    num_teams: u32,
    team_size: u32,
    serialized: bool,
}

impl UniformLeague {
    /// Creates a league of `num_teams` teams with `team_size` threads each.
    ///
    /// # Panics
    ///
    /// Panics if `num_teams` or `team_size` is zero.
    #[inline]
    pub fn new(num_teams: u32, team_size: u32) -> Self {
        assert!(
            num_teams > 0,
            "called `UniformLeague::new` with zero teams"
        );
        assert!(
            team_size > 0,
            "called `UniformLeague::new` with zero team size"
        );
        Self {
            num_teams,
            team_size,
            serialized: false,
        }
    }

    /// Marks the thread teams as serialized.
    ///
    /// Serialization collapses the thread teams only; the league keeps its
    /// shape, so distribute loops still split across teams.
    #[inline]
    pub fn serialized(mut self, yes: bool) -> Self {
        self.serialized = yes;
        self
    }

    /// Returns the number of teams in the league.
    #[inline]
    pub const fn num_teams(&self) -> u32 {
        self.num_teams
    }

    /// Returns the number of threads per team.
    #[inline]
    pub const fn team_size(&self) -> u32 {
        self.team_size
    }
}

impl ExecutionContext for UniformLeague {
    fn thread_view(&self, caller: CallerId) -> TeamView {
        let ordinal = caller.get() % self.team_size;
        TeamView::new(Participant::new(ordinal, self.team_size), self.serialized)
    }

    fn league_view(&self, caller: CallerId) -> TeamView {
        let ordinal = (caller.get() / self.team_size) % self.num_teams;
        TeamView::new(Participant::new(ordinal, self.num_teams), false)
    }
}
