//! The boundary to the host editing layer.

/// The host collection of user-editable features.
///
/// The controls in this crate never own a layer; every operation borrows
/// one. The layer keeps its own feature storage, rendering, and change
/// notifications, and stores its own clones of any features added
/// through this trait.
pub trait EditLayer {
    /// The feature type displayed on the layer.
    ///
    /// Cloning must produce a deep value copy with a fresh identity:
    /// mutating the original afterwards must not affect the clone.
    type Feature: Clone;

    /// Returns the features currently displayed on the layer.
    fn features(&self) -> &[Self::Feature];

    /// Adds clones of `features` to the layer.
    ///
    /// With [`AddOptions::SILENT`] the layer must suppress its
    /// user-edit-change notifications for this add. The controls pass
    /// it only for programmatic undo-redo restores, never for
    /// user-driven edits.
    fn add_features(&mut self, features: &[Self::Feature], options: AddOptions);

    /// Removes every feature from the layer, triggering the layer's own
    /// remove notification per feature.
    fn remove_all_features(&mut self);
}

/// Options for [`EditLayer::add_features`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct AddOptions {
    /// Suppress the layer's user-edit-change notifications for this add.
    pub silent: bool,
}

impl AddOptions {
    /// Options for a user-driven edit, notifications fire.
    pub const NOTIFY: AddOptions = AddOptions { silent: false };

    /// Options for a programmatic restore, notifications are suppressed.
    pub const SILENT: AddOptions = AddOptions { silent: true };
}
