use rewind::{DrawPoint, DrawSlot, EditHistory, EditLayer, VecLayer};

#[derive(Clone, Debug, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

fn point(x: f64, y: f64) -> Point {
    Point { x, y }
}

/// Accepts sketches in the first quadrant only.
#[derive(Default)]
struct Bounds {
    added: Vec<Point>,
    vetoed: usize,
}

impl DrawSlot<Point> for Bounds {
    fn on_sketch_complete(&mut self, feature: &Point) -> bool {
        let inside = feature.x >= 0.0 && feature.y >= 0.0;
        if !inside {
            self.vetoed += 1;
        }
        inside
    }

    fn on_feature_added(&mut self, feature: &Point) {
        self.added.push(feature.clone());
    }
}

#[test]
fn drawn_points_land_on_the_layer() {
    let mut layer = VecLayer::new();
    let mut draw = DrawPoint::new();

    assert!(draw.draw_feature(&mut layer, point(1.0, 2.0)));
    assert_eq!(layer.features(), &[point(1.0, 2.0)]);
    assert_eq!(layer.notified_adds, 1);
    assert_eq!(layer.silent_adds, 0);
}

#[test]
fn vetoed_sketches_never_reach_the_layer() {
    let mut layer = VecLayer::new();
    let mut draw = DrawPoint::with_handler(Bounds::default());

    assert!(!draw.draw_feature(&mut layer, point(-1.0, 0.0)));
    assert!(layer.features().is_empty());
    assert_eq!(layer.notified_adds, 0);

    assert!(draw.draw_feature(&mut layer, point(3.0, 4.0)));
    let handler = draw.disconnect().unwrap();
    assert_eq!(handler.vetoed, 1);
    assert_eq!(handler.added, &[point(3.0, 4.0)]);
}

#[test]
fn drawn_then_registered_points_can_be_undone() {
    let mut layer = VecLayer::new();
    let mut draw = DrawPoint::new();
    let mut history = EditHistory::new();

    draw.draw_feature(&mut layer, point(1.0, 1.0));
    history.register(&layer);
    draw.draw_feature(&mut layer, point(2.0, 2.0));
    history.register(&layer);

    history.undo(&mut layer);
    assert_eq!(layer.features(), &[point(1.0, 1.0)]);
    assert_eq!(layer.notified_adds, 2);
    assert_eq!(layer.silent_adds, 1);
}
