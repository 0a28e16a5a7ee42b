//! Module used to communicate transitions applied to the editing layer.

use core::mem;

/// Slot wrapper that adds some additional functionality.
#[derive(Clone, Debug)]
pub(crate) struct Socket<S>(Option<S>);

impl<S> Socket<S> {
    pub const fn new(slot: S) -> Socket<S> {
        Socket(Some(slot))
    }

    pub fn connect(&mut self, slot: Option<S>) -> Option<S> {
        mem::replace(&mut self.0, slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.0.take()
    }

    pub fn slot_mut(&mut self) -> Option<&mut S> {
        self.0.as_mut()
    }

    pub fn emit<F>(&mut self, event: Event<'_, F>)
    where
        S: Slot<F>,
    {
        if let Some(slot) = &mut self.0 {
            slot.on_emit(event);
        }
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Self {
        Socket(None)
    }
}

/// The `Event` describes a transition applied to the editing layer.
///
/// See [`Slot`] for more information.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Event<'a, F> {
    /// Emitted after an undo has rolled the layer backward,
    /// with the features that were restored.
    Undo(&'a [F]),
    /// Emitted after a redo has rolled the layer forward,
    /// with the features that were restored.
    Redo(&'a [F]),
    /// Emitted for every live feature just before a transition
    /// clears the layer, giving the host a chance to react
    /// (deselect, detach handles) while the feature still exists.
    RemoveFeature(&'a F),
}

/// Use this to react to the transitions applied by the controls.
///
/// This allows you to trigger events on certain state changes.
///
/// # Examples
/// ```
/// use rewind::{EditHistory, Event, VecLayer};
///
/// let mut layer = VecLayer::new();
/// let mut history = EditHistory::builder()
///     .connect(|event: Event<&str>| match event {
///         Event::Undo(features) => println!("undid, {} features live", features.len()),
///         Event::Redo(features) => println!("redid, {} features live", features.len()),
///         Event::RemoveFeature(feature) => println!("removing {}", feature),
///         _ => (),
///     })
///     .build();
///
/// layer.insert("tower");
/// history.register(&layer);
/// history.undo(&mut layer);
/// ```
pub trait Slot<F> {
    /// Receives an event that describes the transition applied to the layer.
    fn on_emit(&mut self, event: Event<'_, F>);
}

impl<F> Slot<F> for () {
    fn on_emit(&mut self, _: Event<'_, F>) {}
}

impl<F, S> Slot<F> for S
where
    S: for<'a> FnMut(Event<'a, F>),
{
    fn on_emit(&mut self, event: Event<'_, F>) {
        self(event)
    }
}
