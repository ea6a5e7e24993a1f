//! Interface surfaces between two phases.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Name used for surfaces and phases that have not been given one.
pub const UNSPECIFIED_NAME: &str = "NotSpecified";

/// Phase index used before a surface is attached to actual phases.
pub const UNSPECIFIED_PHASE_INDEX: usize = usize::MAX;

/// The interface between exactly two phases.
///
/// A `Surface` is a value: every `with_*` method returns an updated copy and
/// leaves the original untouched. The phase pair keeps the order it was given
/// in for reporting, but [`Surface::equivalent`] treats it as an unordered
/// pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surface {
    name: String,
    phase_names: (String, String),
    phase_indices: (usize, usize),
}

/// A phase given either by name or by index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhaseRef {
    Name(String),
    Index(usize),
}

impl From<&str> for PhaseRef {
    fn from(name: &str) -> Self {
        PhaseRef::Name(name.to_string())
    }
}

impl From<String> for PhaseRef {
    fn from(name: String) -> Self {
        PhaseRef::Name(name)
    }
}

impl From<usize> for PhaseRef {
    fn from(index: usize) -> Self {
        PhaseRef::Index(index)
    }
}

impl PhaseRef {
    fn matches(&self, name: &str, index: usize) -> bool {
        match self {
            PhaseRef::Name(n) => n == name,
            PhaseRef::Index(i) => *i == index,
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            name: UNSPECIFIED_NAME.to_string(),
            phase_names: (UNSPECIFIED_NAME.to_string(), UNSPECIFIED_NAME.to_string()),
            phase_indices: (UNSPECIFIED_PHASE_INDEX, UNSPECIFIED_PHASE_INDEX),
        }
    }
}

impl Surface {
    /// A surface with no name and no phases yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface with the given name and unspecified phases.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A surface between two phases known only by name.
    pub fn between(
        name: impl Into<String>,
        phase1: impl Into<String>,
        phase2: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phase_names: (phase1.into(), phase2.into()),
            ..Self::default()
        }
    }

    /// A fully specified surface.
    pub fn with_all(
        name: impl Into<String>,
        phase1: impl Into<String>,
        iphase1: usize,
        phase2: impl Into<String>,
        iphase2: usize,
    ) -> Self {
        Self {
            name: name.into(),
            phase_names: (phase1.into(), phase2.into()),
            phase_indices: (iphase1, iphase2),
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_phase_names(&self, phase1: impl Into<String>, phase2: impl Into<String>) -> Self {
        Self {
            phase_names: (phase1.into(), phase2.into()),
            ..self.clone()
        }
    }

    /// Replace the phase indices. Identical indices are allowed; a surface of
    /// a single phase (a mineral surface, say) uses them.
    pub fn with_phase_indices(&self, iphase1: usize, iphase2: usize) -> Self {
        Self {
            phase_indices: (iphase1, iphase2),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase_names(&self) -> (&str, &str) {
        (&self.phase_names.0, &self.phase_names.1)
    }

    pub fn phase_indices(&self) -> (usize, usize) {
        self.phase_indices
    }

    /// True if both surfaces lie between the same two phases, in either
    /// order. Only phase indices are compared; names play no part.
    pub fn equivalent(&self, other: &Surface) -> bool {
        let (i, j) = other.phase_indices;
        self.equivalent_phase_indices(i, j)
    }

    /// True if this surface lies between the phases with the given names.
    pub fn equivalent_phase_names(&self, phase1: &str, phase2: &str) -> bool {
        let (a, b) = self.phase_names();
        (a == phase1 && b == phase2) || (a == phase2 && b == phase1)
    }

    /// True if this surface lies between the phases with the given indices.
    pub fn equivalent_phase_indices(&self, iphase1: usize, iphase2: usize) -> bool {
        let (a, b) = self.phase_indices;
        (a == iphase1 && b == iphase2) || (a == iphase2 && b == iphase1)
    }

    /// True if this surface lies between the given phases, each referred to
    /// by name or by index.
    pub fn equivalent_phases(&self, phase1: impl Into<PhaseRef>, phase2: impl Into<PhaseRef>) -> bool {
        let (p1, p2) = (phase1.into(), phase2.into());
        let (n1, n2) = self.phase_names();
        let (i1, i2) = self.phase_indices;
        (p1.matches(n1, i1) && p2.matches(n2, i2)) || (p2.matches(n1, i1) && p1.matches(n2, i2))
    }
}

impl Hash for Surface {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Surface {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Surfaces sort by name first.
impl Ord for Surface {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.phase_names.cmp(&other.phase_names))
            .then_with(|| self.phase_indices.cmp(&other.phase_indices))
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.phase_names();
        write!(f, "{} ({} | {})", self.name, a, b)
    }
}
