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

/// The source location a scheduling call originates from.
///
/// Callers hand the scheduler a preformatted location string (typically
/// `;file;function;line;column;;`) that is threaded through diagnostics and
/// instrumentation unchanged. The scheduler never parses it; an absent
/// location is legal and renders as `<unknown>`.
///
/// # Examples
///
/// ```rust
/// # use capstan_model::location::SourceLocation;
///
/// let loc = SourceLocation::new(";demo.c;main;42;3;;");
/// assert_eq!(loc.text(), Some(";demo.c;main;42;3;;"));
/// assert_eq!(format!("{}", SourceLocation::unknown()), "<unknown>");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SourceLocation<'a> {
    text: Option<&'a str>,
}

impl<'a> SourceLocation<'a> {
    /// Creates a source location from a preformatted location string.
    #[inline(always)]
    pub const fn new(text: &'a str) -> Self {
        Self { text: Some(text) }
    }

    /// Creates a source location for callers that supplied none.
    #[inline(always)]
    pub const fn unknown() -> Self {
        Self { text: None }
    }

    /// Returns the location string, if one was supplied.
    #[inline(always)]
    pub const fn text(&self) -> Option<&'a str> {
        self.text
    }
}

impl std::fmt::Display for SourceLocation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "<unknown>"),
        }
    }
}

/// The work-sharing construct a scheduling call partitions for.
///
/// Tags diagnostics and monitor callbacks with the entry family that raised
/// them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Construct {
    /// A single-level statically scheduled loop.
    StaticLoop,

    /// A two-level distribute loop (teams, then threads within the team).
    DistributeLoop,

    /// A team-level chunked distribute schedule without a thread split.
    TeamChunk,
}

impl Construct {
    /// Returns a human-readable name for this construct.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::location::Construct;
    ///
    /// assert_eq!(Construct::StaticLoop.as_str(), "static loop");
    /// assert_eq!(Construct::DistributeLoop.as_str(), "distribute loop");
    /// assert_eq!(Construct::TeamChunk.as_str(), "team chunk");
    /// ```
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Construct::StaticLoop => "static loop",
            Construct::DistributeLoop => "distribute loop",
            Construct::TeamChunk => "team chunk",
        }
    }
}

impl std::fmt::Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_text_roundtrip() {
        let loc = SourceLocation::new(";a.c;f;1;1;;");
        assert_eq!(loc.text(), Some(";a.c;f;1;1;;"));
        assert_eq!(format!("{}", loc), ";a.c;f;1;1;;");
    }

    #[test]
    fn test_unknown_location_displays_placeholder() {
        let loc = SourceLocation::unknown();
        assert_eq!(loc.text(), None);
        assert_eq!(format!("{}", loc), "<unknown>");
    }

    #[test]
    fn test_construct_display_matches_as_str() {
        for construct in [
            Construct::StaticLoop,
            Construct::DistributeLoop,
            Construct::TeamChunk,
        ] {
            assert_eq!(format!("{}", construct), construct.as_str());
        }
    }
}
