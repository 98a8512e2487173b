//! Internal utility helpers for query escaping, memoization, and serde shapes.

pub(crate) mod cache;
pub(crate) mod query;
pub(crate) mod serde;
