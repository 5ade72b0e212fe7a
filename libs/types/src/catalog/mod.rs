//! # Message Catalog
//!
//! Concrete message types, one per [`CommandCode`](crate::CommandCode).
//!
//! ```text
//! Command  ─ change state        SetGlobalVector, Shutdown, SetWrenchEffort, ...
//! Query    ─ ask for a report    QueryGlobalPose, QueryTime, ...
//! Inform   ─ answer a query      ReportGlobalPose, ReportTime, ...
//! ```
//!
//! Every type has a fixed command code, a zeroed default, deep `Clone`, typed
//! setters that reject out-of-range values and `Option` getters.

mod macros;

mod core;
mod platform;

pub use self::core::*;
pub use self::platform::*;
