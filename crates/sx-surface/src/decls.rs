//! Surface declarations by phase name.
//!
//! A phase-assembly stage first collects which phase pairs have a surface,
//! then resolves them against the final ordered phase list once phase
//! indices are known.

use tracing::trace;

use crate::error::{SurfaceError, SurfaceResult};
use crate::list::SurfaceList;
use crate::surface::Surface;

/// Phase-name pairs that have an interface surface between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceDecls {
    pairs: Vec<(String, String)>,
}

impl SurfaceDecls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a surface between two phases.
    pub fn add(&mut self, phase1: impl Into<String>, phase2: impl Into<String>) -> &mut Self {
        self.pairs.push((phase1.into(), phase2.into()));
        self
    }

    /// Declare the surface of a single phase, e.g. a mineral exposed to
    /// whatever surrounds it. Stored as the pair `(phase, phase)`.
    pub fn add_single(&mut self, phase: impl Into<String>) -> &mut Self {
        let phase = phase.into();
        self.pairs.push((phase.clone(), phase));
        self
    }

    /// The declared phase pairs, in declaration order.
    pub fn data(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Resolve every declared pair against `phases`, the ordered phase names
    /// of the system.
    ///
    /// Surfaces are named `"a:b"`, or just `"a"` for a single-phase surface.
    pub fn convert<S: AsRef<str>>(&self, phases: &[S]) -> SurfaceResult<SurfaceList> {
        let index_of = |surface: &str, phase: &str| {
            phases
                .iter()
                .position(|p| p.as_ref() == phase)
                .ok_or_else(|| SurfaceError::UnknownPhase {
                    surface: surface.to_string(),
                    phase: phase.to_string(),
                })
        };

        self.pairs
            .iter()
            .map(|(phase1, phase2)| {
                let name = if phase1 == phase2 {
                    phase1.clone()
                } else {
                    format!("{phase1}:{phase2}")
                };
                let iphase1 = index_of(&name, phase1)?;
                let iphase2 = index_of(&name, phase2)?;
                trace!(surface = %name, iphase1, iphase2, "resolved surface");
                Ok(Surface::with_all(name, phase1.clone(), iphase1, phase2.clone(), iphase2))
            })
            .collect()
    }
}
