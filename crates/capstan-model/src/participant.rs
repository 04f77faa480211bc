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

/// A globally unique caller identity.
///
/// Every execution unit that enters the scheduler carries one. The scheduler
/// itself only forwards it to the execution context, which resolves it into a
/// [`Participant`] within the relevant team or league.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallerId(u32);

impl CallerId {
    /// Creates a new caller identity from a raw ordinal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::participant::CallerId;
    ///
    /// let caller = CallerId::new(3);
    /// assert_eq!(caller.get(), 3);
    /// ```
    #[inline(always)]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw caller ordinal.
    #[inline(always)]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Debug for CallerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CallerId({})", self.0)
    }
}

impl std::fmt::Display for CallerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CallerId({})", self.0)
    }
}

impl From<u32> for CallerId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<CallerId> for u32 {
    fn from(caller: CallerId) -> Self {
        caller.0
    }
}

/// One execution unit's position within its peer group.
///
/// Describes either a thread within a team or a team within a league: a
/// zero-based `ordinal` and the total `cardinality` of the group. Partition
/// arithmetic is a pure function of these two numbers and the loop range;
/// peers never communicate.
///
/// # Examples
///
/// ```rust
/// # use capstan_model::participant::Participant;
///
/// let participant = Participant::new(2, 4);
/// assert_eq!(participant.ordinal(), 2);
/// assert_eq!(participant.cardinality(), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Participant {
    ordinal: u32,
    cardinality: u32,
}

impl Participant {
    /// Constructs a new `Participant`.
    ///
    /// # Panics
    ///
    /// Panics if `cardinality` is zero or `ordinal` is not below it.
    pub fn new(ordinal: u32, cardinality: u32) -> Self {
        assert!(
            cardinality > 0,
            "called `Participant::new` with zero cardinality"
        );
        assert!(
            ordinal < cardinality,
            "called `Participant::new` with ordinal out of bounds: the cardinality is {} but the ordinal is {}",
            cardinality,
            ordinal
        );

        Self {
            ordinal,
            cardinality,
        }
    }

    /// Constructs a new `Participant`, returning `None` on invalid input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::participant::Participant;
    ///
    /// assert!(Participant::try_new(0, 1).is_some());
    /// assert!(Participant::try_new(4, 4).is_none());
    /// assert!(Participant::try_new(0, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(ordinal: u32, cardinality: u32) -> Option<Self> {
        if cardinality == 0 || ordinal >= cardinality {
            return None;
        }
        Some(Self {
            ordinal,
            cardinality,
        })
    }

    /// Returns the zero-based position within the group.
    #[inline(always)]
    pub const fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Returns the total number of execution units in the group.
    #[inline(always)]
    pub const fn cardinality(&self) -> u32 {
        self.cardinality
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant({} of {})", self.ordinal, self.cardinality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_id_conversions() {
        let caller: CallerId = 7.into();
        assert_eq!(caller.get(), 7);

        let raw: u32 = caller.into();
        assert_eq!(raw, 7);
    }

    #[test]
    fn test_caller_id_display() {
        assert_eq!(format!("{}", CallerId::new(3)), "CallerId(3)");
        assert_eq!(format!("{:?}", CallerId::new(3)), "CallerId(3)");
    }

    #[test]
    fn test_participant_new_and_accessors() {
        let participant = Participant::new(0, 1);
        assert_eq!(participant.ordinal(), 0);
        assert_eq!(participant.cardinality(), 1);
    }

    #[test]
    #[should_panic(expected = "called `Participant::new` with zero cardinality")]
    fn test_participant_new_panics_on_zero_cardinality() {
        let _ = Participant::new(0, 0);
    }

    #[test]
    #[should_panic(expected = "called `Participant::new` with ordinal out of bounds")]
    fn test_participant_new_panics_on_ordinal_out_of_bounds() {
        let _ = Participant::new(4, 4);
    }

    #[test]
    fn test_participant_display() {
        assert_eq!(format!("{}", Participant::new(2, 4)), "Participant(2 of 4)");
    }
}
