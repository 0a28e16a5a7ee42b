//! The point-drawing control.

use crate::layer::{AddOptions, EditLayer};
use crate::socket::Socket;
use core::slice;

/// Handler hooks for the point-drawing control.
///
/// Connected the same way a [`Slot`](crate::Slot) is: at construction or
/// through [`DrawPoint::connect`]. Both hooks have no-op defaults.
pub trait DrawSlot<F> {
    /// Decides whether a completed sketch becomes a feature.
    ///
    /// Returning `false` vetoes the insertion and nothing else happens.
    /// The default accepts every sketch.
    fn on_sketch_complete(&mut self, feature: &F) -> bool {
        let _ = feature;
        true
    }

    /// Called once `feature` has been added to the layer.
    fn on_feature_added(&mut self, feature: &F) {
        let _ = feature;
    }
}

impl<F> DrawSlot<F> for () {}

/// A control that puts point features drawn by the user onto a layer.
///
/// This is a thin trigger: the host's drawing-interaction handler turns
/// pointer input into a completed point feature and hands it to
/// [`draw_feature`](DrawPoint::draw_feature). Unlike the undo-redo
/// restores, the insertion counts as a user edit, so the layer's change
/// notifications fire.
///
/// # Examples
/// ```
/// use rewind::{DrawPoint, EditLayer, VecLayer};
///
/// let mut layer = VecLayer::new();
/// let mut draw = DrawPoint::new();
///
/// assert!(draw.draw_feature(&mut layer, "tower"));
/// assert_eq!(layer.features(), &["tower"]);
/// ```
#[derive(Clone, Debug)]
pub struct DrawPoint<H = ()> {
    socket: Socket<H>,
}

impl DrawPoint {
    /// Returns a new point-drawing control without a handler.
    pub fn new() -> DrawPoint {
        DrawPoint::default()
    }
}

impl<H> DrawPoint<H> {
    /// Returns a point-drawing control with `handler` connected.
    pub fn with_handler(handler: H) -> DrawPoint<H> {
        DrawPoint {
            socket: Socket::new(handler),
        }
    }

    /// Sets how the draw hooks should be handled.
    ///
    /// The previous handler is returned if it exists.
    pub fn connect(&mut self, handler: H) -> Option<H> {
        self.socket.connect(Some(handler))
    }

    /// Removes and returns the handler if it exists.
    pub fn disconnect(&mut self) -> Option<H> {
        self.socket.disconnect()
    }

    /// Puts a completed point sketch onto the layer.
    ///
    /// [`DrawSlot::on_sketch_complete`] fires first and can veto the
    /// insertion. Otherwise the layer stores a clone of `feature` with
    /// its user-edit notifications firing, and
    /// [`DrawSlot::on_feature_added`] is called with the drawn feature.
    ///
    /// Returns whether the feature was added.
    pub fn draw_feature<L>(&mut self, layer: &mut L, feature: L::Feature) -> bool
    where
        L: EditLayer,
        H: DrawSlot<L::Feature>,
    {
        if let Some(handler) = self.socket.slot_mut() {
            if !handler.on_sketch_complete(&feature) {
                return false;
            }
        }
        layer.add_features(slice::from_ref(&feature), AddOptions::NOTIFY);
        if let Some(handler) = self.socket.slot_mut() {
            handler.on_feature_added(&feature);
        }
        true
    }
}

impl<H> Default for DrawPoint<H> {
    fn default() -> Self {
        DrawPoint {
            socket: Socket::default(),
        }
    }
}
