//! The undo-redo control for an editing layer.

use crate::display::Display;
use crate::keymap::{HistoryOp, KeyPress};
use crate::layer::{AddOptions, EditLayer};
use crate::snapshot::Snapshot;
use crate::socket::{Event, Slot, Socket};
use alloc::collections::VecDeque;
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::num::NonZeroUsize;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An undo-redo control that records snapshots of an editing layer.
///
/// The control can roll the layer's feature-set backward and forward
/// through the recorded snapshots. The host workflow calls
/// [`register`](EditHistory::register) after every completed editing
/// action; [`undo`](EditHistory::undo) and [`redo`](EditHistory::redo)
/// then move the recorded states between the two stacks and keep the
/// layer's displayed features in sync with the current state. The host
/// is notified about transitions through [`Event`]s sent to the
/// connected [`Slot`].
///
/// A stack entry of `None` records "the layer was empty and nothing was
/// registered", so rolling back past the oldest snapshot still round
/// trips through redo.
///
/// # Examples
/// ```
/// use rewind::{EditHistory, EditLayer, VecLayer};
///
/// let mut layer = VecLayer::new();
/// let mut history = EditHistory::new();
///
/// layer.insert("tower");
/// history.register(&layer);
/// layer.insert("bridge");
/// history.register(&layer);
///
/// history.undo(&mut layer);
/// assert_eq!(layer.features(), &["tower"]);
/// history.undo(&mut layer);
/// assert!(layer.features().is_empty());
/// history.redo(&mut layer);
/// history.redo(&mut layer);
/// assert_eq!(layer.features(), &["tower", "bridge"]);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(serialize = "F: Serialize", deserialize = "F: Deserialize<'de>"))
)]
#[derive(Clone)]
pub struct EditHistory<F, S = ()> {
    pub(crate) undo_stack: VecDeque<Option<Snapshot<F>>>,
    pub(crate) redo_stack: VecDeque<Option<Snapshot<F>>>,
    pub(crate) current: Option<Snapshot<F>>,
    limit: NonZeroUsize,
    #[cfg_attr(feature = "serde", serde(skip))]
    socket: Socket<S>,
}

impl<F> EditHistory<F> {
    /// Returns a new edit history.
    pub fn new() -> EditHistory<F> {
        Builder::default().build()
    }
}

impl<F, S> EditHistory<F, S> {
    /// Returns a builder for an edit history.
    pub fn builder() -> Builder<F, S> {
        Builder::default()
    }

    /// Returns `true` if the control can undo.
    ///
    /// This includes the roll back to the empty state that is available
    /// while a current state exists.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() || self.current.is_some()
    }

    /// Returns `true` if the control can redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Returns the number of entries on the undo stack.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Returns the number of entries on the redo stack.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Returns the maximum number of entries kept on the undo stack.
    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Returns the snapshot recording the layer's current content, or
    /// `None` if nothing has been registered yet.
    pub fn current_state(&self) -> Option<&Snapshot<F>> {
        self.current.as_ref()
    }

    /// Sets how events should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Drops every recorded snapshot, including the current state,
    /// without touching the layer.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current = None;
    }

    /// Returns a structure for configurable formatting of the history.
    pub fn display(&self) -> Display<F, S> {
        Display::from(self)
    }

    fn push_undo(&mut self, entry: Option<Snapshot<F>>) {
        self.undo_stack.push_back(entry);
        // Drop the oldest state once the limit is reached.
        if self.undo_stack.len() > self.limit.get() {
            self.undo_stack.pop_front();
        }
    }
}

impl<F: Clone, S: Slot<F>> EditHistory<F, S> {
    /// Captures the layer's current feature-set as the new current state.
    ///
    /// Call this after every completed editing action (add, move,
    /// delete, modify). The prior current state, if one existed, moves
    /// onto the undo stack and the redo stack is cleared: a new edit
    /// invalidates any forward history. The layer's displayed features
    /// are not touched and no events are emitted.
    pub fn register<L>(&mut self, layer: &L)
    where
        L: EditLayer<Feature = F>,
    {
        let snapshot = Snapshot::new(layer.features().to_vec());
        if let Some(prev) = self.current.take() {
            self.push_undo(Some(prev));
        }
        self.current = Some(snapshot);
        self.redo_stack.clear();
    }

    /// Rolls the layer one snapshot backward.
    ///
    /// The current state moves onto the redo stack and the undo stack's
    /// top entry becomes the new current state, its features re-added to
    /// the layer with notifications suppressed. When the undo stack is
    /// empty but a current state exists, the layer rolls back to the
    /// empty state instead.
    ///
    /// [`Event::RemoveFeature`] fires for every live feature before the
    /// layer is cleared, and [`Event::Undo`] fires with the restored
    /// feature-set once the transition is complete.
    ///
    /// Returns the restored feature-set, which is empty when the layer
    /// rolled back to the empty state, or `None` if there was nothing
    /// to undo. Nothing is emitted, and neither stack changes, on a
    /// no-op.
    pub fn undo<'a, L>(&'a mut self, layer: &mut L) -> Option<&'a [F]>
    where
        L: EditLayer<Feature = F>,
    {
        if !self.transition(layer, HistoryOp::Undo) {
            return None;
        }
        let restored = self.current.as_ref().map_or(&[][..], |s| s.features());
        self.socket.emit(Event::Undo(restored));
        Some(restored)
    }

    /// Rolls the layer one snapshot forward.
    ///
    /// The mirror image of [`undo`](EditHistory::undo): the current
    /// state moves onto the undo stack and the redo stack's top entry is
    /// restored to the layer, again with notifications suppressed.
    /// [`Event::Redo`] fires once the transition is complete.
    ///
    /// Returns the restored feature-set, or `None` if there was nothing
    /// to redo.
    pub fn redo<'a, L>(&'a mut self, layer: &mut L) -> Option<&'a [F]>
    where
        L: EditLayer<Feature = F>,
    {
        if !self.transition(layer, HistoryOp::Redo) {
            return None;
        }
        let restored = self.current.as_ref().map_or(&[][..], |s| s.features());
        self.socket.emit(Event::Redo(restored));
        Some(restored)
    }

    /// Reacts to a key press delivered by the host's keyboard dispatch.
    ///
    /// `Ctrl+Z` undoes; `Ctrl+Y` and `Ctrl+Shift+Z` redo. Returns the
    /// operation that was dispatched, even when the operation itself had
    /// nothing to move, or `None` for an unbound combination.
    pub fn handle_key<L>(&mut self, layer: &mut L, press: KeyPress) -> Option<HistoryOp>
    where
        L: EditLayer<Feature = F>,
    {
        let op = HistoryOp::for_press(press)?;
        match op {
            HistoryOp::Undo => self.undo(layer),
            HistoryOp::Redo => self.redo(layer),
        };
        Some(op)
    }

    /// The transition engine shared by undo and redo. Returns `false`
    /// when there was nothing to move.
    fn transition<L>(&mut self, layer: &mut L, op: HistoryOp) -> bool
    where
        L: EditLayer<Feature = F>,
    {
        let popped = match op {
            HistoryOp::Undo => self.undo_stack.pop_back(),
            HistoryOp::Redo => self.redo_stack.pop_back(),
        };
        match popped {
            Some(state) => {
                self.notify_removals(layer);
                layer.remove_all_features();
                let prev = self.current.take();
                match op {
                    HistoryOp::Undo => self.redo_stack.push_back(prev),
                    HistoryOp::Redo => self.push_undo(prev),
                }
                if let Some(snapshot) = state {
                    layer.add_features(snapshot.features(), AddOptions::SILENT);
                    self.current = Some(snapshot);
                }
                true
            }
            // Rolling back past the oldest snapshot empties the layer;
            // the redo stack records the state it came from.
            None if op == HistoryOp::Undo && self.current.is_some() => {
                self.notify_removals(layer);
                let prev = self.current.take();
                self.redo_stack.push_back(prev);
                layer.remove_all_features();
                true
            }
            None => false,
        }
    }

    fn notify_removals<L>(&mut self, layer: &L)
    where
        L: EditLayer<Feature = F>,
    {
        for feature in layer.features() {
            self.socket.emit(Event::RemoveFeature(feature));
        }
    }
}

impl<F> Default for EditHistory<F> {
    fn default() -> EditHistory<F> {
        EditHistory::new()
    }
}

impl<F: Debug, S> Debug for EditHistory<F, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("EditHistory")
            .field("undo_stack", &self.undo_stack)
            .field("redo_stack", &self.redo_stack)
            .field("current", &self.current)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

/// Builder for an [`EditHistory`].
///
/// # Examples
/// ```
/// use rewind::{Builder, Event, VecLayer};
///
/// let mut layer = VecLayer::new();
/// let mut history = Builder::default()
///     .limit(100)
///     .capacity(100)
///     .connect(|event: Event<&str>| {
///         let _ = event;
///     })
///     .build();
///
/// layer.insert("tower");
/// history.register(&layer);
/// assert!(history.can_undo());
/// ```
#[derive(Debug)]
pub struct Builder<F, S = ()> {
    capacity: usize,
    limit: NonZeroUsize,
    socket: Socket<S>,
    pd: PhantomData<F>,
}

impl<F, S> Builder<F, S> {
    /// Sets the capacity reserved for the undo stack.
    pub fn capacity(mut self, capacity: usize) -> Builder<F, S> {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum number of entries kept on the undo stack.
    ///
    /// The oldest entry is dropped once the limit is exceeded.
    ///
    /// # Panics
    /// Panics if `limit` is `0`.
    pub fn limit(mut self, limit: usize) -> Builder<F, S> {
        self.limit = NonZeroUsize::new(limit).expect("limit can not be `0`");
        self
    }

    /// Connects the slot.
    pub fn connect(mut self, slot: S) -> Builder<F, S> {
        self.socket = Socket::new(slot);
        self
    }

    /// Builds the edit history.
    pub fn build(self) -> EditHistory<F, S> {
        EditHistory {
            undo_stack: VecDeque::with_capacity(self.capacity),
            redo_stack: VecDeque::new(),
            current: None,
            limit: self.limit,
            socket: self.socket,
        }
    }
}

impl<F, S> Default for Builder<F, S> {
    fn default() -> Self {
        Builder {
            capacity: 0,
            limit: NonZeroUsize::MAX,
            socket: Socket::default(),
            pd: PhantomData,
        }
    }
}
