//! sx-core: shared foundation for surfex.
//!
//! Contains:
//! - error (the workspace-wide error type every layer converts into)
//! - numeric (tolerance comparison + finiteness checks)

pub mod error;
pub mod numeric;

pub use error::{SxError, SxResult};
pub use numeric::*;
