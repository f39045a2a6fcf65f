//! Browser helpers shared by the feature units.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from feature logic. `dom` only
//! exists in `csr` builds; `clock` and `storage` degrade to no-ops so the
//! crate stays testable natively.

pub mod clock;
#[cfg(feature = "csr")]
pub mod dom;
pub mod storage;
