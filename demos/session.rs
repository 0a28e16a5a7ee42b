use rewind::{DrawPoint, EditHistory, EditLayer, Event, KeyPress, VecLayer, KEY_Y, KEY_Z};

fn main() {
    let mut layer = VecLayer::new();
    let mut draw = DrawPoint::new();
    let mut history = EditHistory::builder()
        .connect(|event: Event<&str>| match event {
            Event::Undo(features) => println!("undo, {} features live", features.len()),
            Event::Redo(features) => println!("redo, {} features live", features.len()),
            Event::RemoveFeature(feature) => println!("removing {}", feature),
            _ => (),
        })
        .build();

    draw.draw_feature(&mut layer, "tower");
    history.register(&layer);
    draw.draw_feature(&mut layer, "bridge");
    history.register(&layer);
    assert_eq!(layer.features(), &["tower", "bridge"]);

    history.handle_key(&mut layer, KeyPress::new(KEY_Z).ctrl());
    assert_eq!(layer.features(), &["tower"]);

    history.handle_key(&mut layer, KeyPress::new(KEY_Y).ctrl());
    assert_eq!(layer.features(), &["tower", "bridge"]);
}
