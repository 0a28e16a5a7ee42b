//! Provides snapshot-based undo-redo functionality for vector feature layers.
//!
//! This crate implements the interactive controls of a map-editing widget
//! that are not owned by the renderer: an undo-redo manager for geometry
//! edits and a point-drawing trigger. The history records the full
//! feature-set of an editable layer as cloned [snapshots](Snapshot) and
//! rolls the layer backward and forward through them. It owns no geometry
//! logic and treats each snapshot opaquely; feature storage stays behind
//! the [`EditLayer`] boundary owned by the host.
//!
//! # Features
//!
//! * [`EditHistory`] captures a snapshot at every
//!   [registration](EditHistory::register) point and moves the layer
//!   between recorded states with [`undo`](EditHistory::undo) and
//!   [`redo`](EditHistory::redo), driven directly or through
//!   [key presses](EditHistory::handle_key).
//! * [`DrawPoint`] puts completed point sketches onto the layer, with a
//!   veto hook for the host.
//! * Hosts observe transitions by connecting a [`Slot`] that receives
//!   [`Event`]s, supplied at construction or connected later.
//! * The number of undo steps being tracked can be configured by the user
//!   so only the `N` most recent states are stored.
//! * Configurable display formatting is provided, colored when the
//!   `colored` feature is enabled.
//! * Snapshots carry time stamps when the `chrono` feature is enabled.
//! * Serialization is provided when the `serde` feature is enabled.
//!
//! # Examples
//!
//! Add this to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rewind = "0.1"
//! ```
//!
//! And this to `main.rs`:
//!
//! ```
//! use rewind::{EditHistory, EditLayer, VecLayer};
//!
//! fn main() {
//!     let mut layer = VecLayer::new();
//!     let mut history = EditHistory::new();
//!
//!     layer.insert("tower");
//!     history.register(&layer);
//!     layer.insert("bridge");
//!     history.register(&layer);
//!
//!     history.undo(&mut layer);
//!     assert_eq!(layer.features(), &["tower"]);
//!     history.undo(&mut layer);
//!     assert!(layer.features().is_empty());
//!
//!     history.redo(&mut layer);
//!     history.redo(&mut layer);
//!     assert_eq!(layer.features(), &["tower", "bridge"]);
//! }
//! ```

#![no_std]
#![doc(html_root_url = "https://docs.rs/rewind")]
#![deny(missing_docs)]

extern crate alloc;

mod display;
mod draw;
mod history;
mod keymap;
mod layer;
mod snapshot;
mod socket;
mod vec_layer;

pub use self::display::Display;
pub use self::draw::{DrawPoint, DrawSlot};
pub use self::history::{Builder, EditHistory};
pub use self::keymap::{HistoryOp, KeyPress, BINDINGS, KEY_Y, KEY_Z};
pub use self::layer::{AddOptions, EditLayer};
pub use self::snapshot::Snapshot;
pub use self::socket::{Event, Slot};
#[doc(hidden)]
pub use self::vec_layer::VecLayer;
