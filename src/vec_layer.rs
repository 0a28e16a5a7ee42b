//! The layer used in the examples and tests.

use crate::layer::{AddOptions, EditLayer};
use alloc::vec::Vec;

/// This is the layer used in all the examples and tests.
///
/// It stores features in a `Vec` and counts the notifications a real
/// layer would fire, so the suppression contract stays observable.
/// Not part of the API and can change at any time.
#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct VecLayer<F> {
    features: Vec<F>,
    /// Adds that fired user-edit-change notifications, counted per feature.
    pub notified_adds: usize,
    /// Adds with suppressed notifications, counted per feature.
    pub silent_adds: usize,
    /// Remove notifications fired, counted per feature.
    pub removals: usize,
}

impl<F> VecLayer<F> {
    /// Returns a new, empty layer.
    pub fn new() -> VecLayer<F> {
        VecLayer::default()
    }

    /// Simulates a user edit that puts `feature` on the layer.
    pub fn insert(&mut self, feature: F) {
        self.features.push(feature);
    }

    /// Simulates a user edit that mutates the live features in place.
    pub fn features_mut(&mut self) -> &mut [F] {
        &mut self.features
    }
}

impl<F> Default for VecLayer<F> {
    fn default() -> Self {
        VecLayer {
            features: Vec::new(),
            notified_adds: 0,
            silent_adds: 0,
            removals: 0,
        }
    }
}

impl<F: Clone> EditLayer for VecLayer<F> {
    type Feature = F;

    fn features(&self) -> &[F] {
        &self.features
    }

    fn add_features(&mut self, features: &[F], options: AddOptions) {
        if options.silent {
            self.silent_adds += features.len();
        } else {
            self.notified_adds += features.len();
        }
        self.features.extend_from_slice(features);
    }

    fn remove_all_features(&mut self) {
        self.removals += self.features.len();
        self.features.clear();
    }
}
