use rewind::{EditHistory, EditLayer, Event, HistoryOp, KeyPress, Slot, VecLayer, KEY_Y, KEY_Z};

#[derive(Clone, Debug, Eq, PartialEq)]
struct Landmark {
    name: &'static str,
    position: (i64, i64),
}

fn landmark(name: &'static str, x: i64, y: i64) -> Landmark {
    Landmark {
        name,
        position: (x, y),
    }
}

#[derive(Default)]
struct EventLog {
    entries: Vec<String>,
}

impl Slot<Landmark> for EventLog {
    fn on_emit(&mut self, event: Event<'_, Landmark>) {
        let entry = match event {
            Event::Undo(features) => format!("undo {}", features.len()),
            Event::Redo(features) => format!("redo {}", features.len()),
            Event::RemoveFeature(feature) => format!("remove {}", feature.name),
            _ => String::from("other"),
        };
        self.entries.push(entry);
    }
}

#[test]
fn register_captures_layer_content() {
    let mut layer = VecLayer::new();
    let mut history = EditHistory::new();

    layer.insert(landmark("tower", 1, 2));
    history.register(&layer);

    let snapshot = history.current_state().unwrap();
    assert_eq!(snapshot.features(), &[landmark("tower", 1, 2)]);
    assert_eq!(history.undo_len(), 0);
    assert_eq!(history.redo_len(), 0);
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn snapshots_are_independent_of_live_mutation() {
    let mut layer = VecLayer::new();
    let mut history = EditHistory::new();

    layer.insert(landmark("tower", 1, 2));
    history.register(&layer);
    layer.insert(landmark("bridge", 3, 4));
    history.register(&layer);

    layer.features_mut()[0].position = (9, 9);
    assert_eq!(history.current_state().unwrap().features()[0].position, (1, 2));

    history.undo(&mut layer);
    assert_eq!(layer.features(), &[landmark("tower", 1, 2)]);
}

#[test]
fn round_trip_restores_the_last_registration() {
    let mut layer = VecLayer::new();
    let mut history = EditHistory::new();

    let names = ["tower", "bridge", "pier"];
    for (i, &name) in names.iter().enumerate() {
        layer.insert(landmark(name, i as i64, 0));
        history.register(&layer);
    }

    for _ in 0..names.len() {
        assert!(history.undo(&mut layer).is_some());
    }
    assert!(layer.features().is_empty());
    assert!(history.undo(&mut layer).is_none());

    for _ in 0..names.len() {
        assert!(history.redo(&mut layer).is_some());
    }
    assert_eq!(layer.features().len(), 3);
    assert_eq!(layer.features()[2], landmark("pier", 2, 0));
    assert!(history.redo(&mut layer).is_none());
}

#[test]
fn undo_redo_walks_the_recorded_states() {
    let mut layer = VecLayer::new();
    let mut history = EditHistory::new();
    let a = landmark("a", 0, 0);
    let b = landmark("b", 1, 0);

    layer.insert(a.clone());
    history.register(&layer);
    layer.insert(b.clone());
    history.register(&layer);

    assert_eq!(history.undo(&mut layer), Some(&[a.clone()][..]));
    assert_eq!(layer.features(), &[a.clone()]);

    assert_eq!(history.undo(&mut layer), Some(&[][..]));
    assert!(layer.features().is_empty());

    assert_eq!(history.redo(&mut layer), Some(&[a.clone()][..]));
    assert_eq!(history.redo(&mut layer), Some(&[a.clone(), b.clone()][..]));
    assert_eq!(layer.features(), &[a, b]);
}

#[test]
fn register_discards_redo_history() {
    let mut layer = VecLayer::new();
    let mut history = EditHistory::new();

    layer.insert(landmark("tower", 0, 0));
    history.register(&layer);
    layer.insert(landmark("bridge", 1, 1));
    history.register(&layer);

    history.undo(&mut layer);
    assert!(history.can_redo());

    layer.insert(landmark("pier", 2, 2));
    history.register(&layer);
    assert!(!history.can_redo());
    assert_eq!(history.redo_len(), 0);

    // The discarded forward state is gone for good.
    assert!(history.redo(&mut layer).is_none());
    assert_eq!(
        layer.features(),
        &[landmark("tower", 0, 0), landmark("pier", 2, 2)]
    );
}

#[test]
fn transitions_never_grow_their_own_stack() {
    let mut layer = VecLayer::new();
    let mut history = EditHistory::new();

    for (i, &name) in ["tower", "bridge", "pier"].iter().enumerate() {
        layer.insert(landmark(name, i as i64, 0));
        history.register(&layer);
    }

    let mut previous = history.undo_len();
    while history.undo(&mut layer).is_some() {
        assert!(history.undo_len() <= previous);
        previous = history.undo_len();
    }

    let mut previous = history.redo_len();
    while history.redo(&mut layer).is_some() {
        assert!(history.redo_len() <= previous);
        previous = history.redo_len();
    }
}

#[test]
fn undo_on_fresh_history_is_a_noop() {
    let mut layer: VecLayer<Landmark> = VecLayer::new();
    let mut history = EditHistory::new();

    assert!(history.undo(&mut layer).is_none());
    assert_eq!(history.redo_len(), 0);
    assert!(history.redo(&mut layer).is_none());
    assert_eq!(history.undo_len(), 0);
    assert_eq!(layer.removals, 0);
}

#[test]
fn events_describe_each_transition() {
    let mut layer = VecLayer::new();
    let mut history = EditHistory::builder().connect(EventLog::default()).build();

    layer.insert(landmark("tower", 0, 0));
    history.register(&layer);
    layer.insert(landmark("bridge", 1, 1));
    history.register(&layer);

    history.undo(&mut layer);
    history.undo(&mut layer);
    history.redo(&mut layer);
    history.redo(&mut layer);

    // Registrations stay silent.
    layer.insert(landmark("pier", 2, 2));
    history.register(&layer);

    let log = history.disconnect().unwrap();
    assert_eq!(
        log.entries,
        [
            "remove tower",
            "remove bridge",
            "undo 1",
            "remove tower",
            "undo 0",
            "redo 1",
            "remove tower",
            "redo 2",
        ]
    );
}

#[test]
fn restores_are_silent_and_notify_removals() {
    let mut layer = VecLayer::new();
    let mut history = EditHistory::new();

    layer.insert(landmark("tower", 0, 0));
    history.register(&layer);
    layer.insert(landmark("bridge", 1, 1));
    history.register(&layer);

    history.undo(&mut layer);
    assert_eq!(layer.silent_adds, 1);
    assert_eq!(layer.removals, 2);
    assert_eq!(layer.notified_adds, 0);

    history.redo(&mut layer);
    assert_eq!(layer.silent_adds, 3);
    assert_eq!(layer.removals, 3);
    assert_eq!(layer.notified_adds, 0);
}

#[test]
fn key_presses_drive_the_stacks() {
    let mut layer = VecLayer::new();
    let mut history = EditHistory::new();
    let a = landmark("a", 0, 0);
    let b = landmark("b", 1, 0);

    layer.insert(a.clone());
    history.register(&layer);
    layer.insert(b.clone());
    history.register(&layer);

    assert_eq!(
        history.handle_key(&mut layer, KeyPress::new(KEY_Z).ctrl()),
        Some(HistoryOp::Undo)
    );
    assert_eq!(layer.features(), &[a.clone()]);

    assert_eq!(
        history.handle_key(&mut layer, KeyPress::new(KEY_Y).ctrl()),
        Some(HistoryOp::Redo)
    );
    assert_eq!(layer.features(), &[a.clone(), b.clone()]);

    // Unbound combinations have no effect.
    assert_eq!(history.handle_key(&mut layer, KeyPress::new(KEY_Z)), None);
    assert_eq!(layer.features(), &[a.clone(), b.clone()]);

    // A bound combination dispatches even when there is nothing to move.
    assert_eq!(
        history.handle_key(&mut layer, KeyPress::new(KEY_Z).ctrl().shift()),
        Some(HistoryOp::Redo)
    );
    assert_eq!(layer.features(), &[a, b]);
}

#[test]
fn limit_drops_the_oldest_states() {
    let mut layer = VecLayer::new();
    let mut history: EditHistory<Landmark> = EditHistory::builder().limit(2).build();

    for (i, &name) in ["a", "b", "c", "d"].iter().enumerate() {
        layer.insert(landmark(name, i as i64, 0));
        history.register(&layer);
    }
    assert_eq!(history.undo_len(), 2);

    history.undo(&mut layer);
    history.undo(&mut layer);
    assert_eq!(layer.features().len(), 2);

    // The states older than the limit are gone: the next undo falls
    // through to the empty state.
    history.undo(&mut layer);
    assert!(layer.features().is_empty());
    assert!(history.undo(&mut layer).is_none());
}

#[test]
fn clear_forgets_everything_without_touching_the_layer() {
    let mut layer = VecLayer::new();
    let mut history = EditHistory::new();

    layer.insert(landmark("tower", 0, 0));
    history.register(&layer);
    layer.insert(landmark("bridge", 1, 1));
    history.register(&layer);
    history.undo(&mut layer);

    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_len(), 0);
    assert_eq!(history.redo_len(), 0);
    assert!(history.current_state().is_none());
    assert_eq!(layer.features(), &[landmark("tower", 0, 0)]);

    assert!(history.undo(&mut layer).is_none());
}

#[test]
#[should_panic]
fn zero_limit_panics() {
    rewind::Builder::<Landmark>::default().limit(0);
}
