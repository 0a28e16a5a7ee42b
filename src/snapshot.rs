//! The recorded feature-set of an editing layer.

use alloc::vec::Vec;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A recorded copy of an editing layer's full feature content
/// at one point in time.
///
/// Snapshots are immutable at rest: they hold clones taken when the
/// snapshot was captured and are only ever handed out by shared
/// reference, so later edits to the live layer cannot reach them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snapshot<F> {
    features: Vec<F>,
    #[cfg(feature = "chrono")]
    timestamp: DateTime<Utc>,
}

impl<F> Snapshot<F> {
    pub(crate) fn new(features: Vec<F>) -> Snapshot<F> {
        Snapshot {
            features,
            #[cfg(feature = "chrono")]
            timestamp: Utc::now(),
        }
    }

    /// Returns the features recorded in this snapshot.
    pub fn features(&self) -> &[F] {
        &self.features
    }

    /// Returns the number of features recorded in this snapshot.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if the snapshot records an empty layer.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Returns the time the snapshot was captured.
    #[cfg(feature = "chrono")]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
