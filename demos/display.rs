use rewind::{EditHistory, VecLayer};

fn main() {
    let mut layer = VecLayer::new();
    let mut history = EditHistory::new();

    for name in ["tower", "bridge", "pier"].iter() {
        layer.insert(*name);
        history.register(&layer);
    }
    history.undo(&mut layer);

    println!("{}", history.display());
}
