//! Dataset records, the in-memory store, and the persisted snapshot.
//!
//! Each chart type owns an independent ordered sequence of records with no
//! cross-chart relationships. Records are identified by a natural key
//! (subject, task, day, row/column) except scatter points, which carry a
//! stable synthetic [`records::PointId`] assigned at creation.
//!
//! ## Error Handling
//!
//! Store operations return `StoreResult<T>` using the `StoreError` type.
//! A malformed persisted snapshot is not an error at this layer's callers:
//! the application keeps defaults and logs a warning.

mod error;
mod records;
mod snapshot;
mod store;

pub use error::*;
pub use records::*;
pub use snapshot::*;
pub use store::*;
