//! sx-surface: phase-interface surfaces for surfex.
//!
//! Provides:
//! - `Surface`, an immutable value naming the interface between two phases
//! - `SurfaceList` with lookups by name and by phase pair
//! - `SurfaceDecls`, phase-name pairs resolved into surfaces against a phase list
//!
//! # Example
//!
//! ```
//! use sx_surface::Surface;
//!
//! let a = Surface::new().with_phase_names("A", "B").with_phase_indices(0, 1);
//! let b = Surface::new().with_phase_names("B", "A").with_phase_indices(1, 0);
//! assert!(a.equivalent(&b));
//! ```

pub mod decls;
pub mod error;
pub mod list;
pub mod surface;

// Re-exports for ergonomics
pub use decls::SurfaceDecls;
pub use error::{SurfaceError, SurfaceResult};
pub use list::SurfaceList;
pub use surface::{PhaseRef, Surface, UNSPECIFIED_NAME, UNSPECIFIED_PHASE_INDEX};
