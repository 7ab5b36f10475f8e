//! Traits describing where location records come from.

use crate::model::{Location, SourceMeta};

/// A fixed, read-only collection of location records.
///
/// Implementations hand out the same records, in the same order, for their whole lifetime.
pub trait LocationSource: Send + Sync {
    /// Metadata describing this source.
    fn meta(&self) -> &SourceMeta;

    /// Every record, in dataset order.
    fn locations(&self) -> &[Location];
}
