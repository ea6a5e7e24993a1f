//! sx-exchange: ion-exchange surface bookkeeping for surfex.
//!
//! Given the species of an ion-exchange surface (`X-`, `NaX`, `CaX2`, ...),
//! works out which one is the bare exchanger and how many exchanger
//! equivalents every other species consumes. Downstream mass- and
//! charge-balance constraints use these counts directly.
//!
//! # Example
//!
//! ```
//! use sx_exchange::{ExchangeOptions, IonExchangeSurface};
//!
//! let options = ExchangeOptions::new().with_exchanger_symbol("X");
//! let surface =
//!     IonExchangeSurface::from_formulas(&["X-", "AlOHX2", "AlX3", "KX", "NaX"], &options)
//!         .unwrap();
//!
//! assert_eq!(surface.ze(), &[0, 2, 3, 1, 1]);
//! assert_eq!(surface.index_exchanger(), 0);
//! assert_eq!(surface.indices_exchange(), &[1, 2, 3, 4]);
//! ```

pub mod equivalents;
pub mod error;
pub mod options;
pub mod surface;

// Re-exports for ergonomics
pub use equivalents::{ExchangerSite, exchanger_equivalents};
pub use error::{ExchangeError, ExchangeResult};
pub use options::ExchangeOptions;
pub use surface::IonExchangeSurface;
