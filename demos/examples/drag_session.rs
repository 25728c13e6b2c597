// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving the drag layer directly, without the menu controller.
//!
//! Shows what `arbor_menu` does under the hood: pointer events feed a
//! [`DragSession`], a frame tick classifies against the hovered row's band,
//! and the commit outcome drives `Tree::move_node`.
//!
//! Run:
//! - `cargo run -p arbor_demos --example drag_session`

use arbor_drag::{DragEnd, DragSession};
use arbor_tree::{Node, Seed, Tree};
use arbor_zone::RowBand;
use kurbo::Point;

const ROW_HEIGHT: f64 = 28.0;

fn print_tree(tree: &Tree) {
    fn print_node(node: &Node, depth: usize) {
        println!("{:indent$}{}", "", node.label(), indent = depth * 2);
        for child in node.children() {
            print_node(child, depth + 1);
        }
    }
    for root in tree.roots() {
        print_node(root, 0);
    }
    println!();
}

/// The band for the nth row when every row is visible and `ROW_HEIGHT` tall.
fn band_of(index: usize) -> RowBand {
    RowBand::new(index as f64 * ROW_HEIGHT, ROW_HEIGHT)
}

fn main() {
    let tree = Tree::from_seeds(vec![
        Seed::new("Inbox")
            .child(Seed::new("Today"))
            .child(Seed::new("Later")),
        Seed::new("Journal"),
    ])
    .expect("seed labels are unique");
    let today = tree.id_of("Today").expect("seeded");
    let journal = tree.id_of("Journal").expect("seeded");

    println!("== before ==");
    print_tree(&tree);

    // Rows top to bottom: Inbox 0, Today 1, Later 2, Journal 3.
    let mut session = DragSession::default();
    session.on_pointer_down(today, Point::new(40.0, 1.5 * ROW_HEIGHT));

    // First move travels past the activation distance.
    let activated = session.on_pointer_move(Point::new(40.0, 2.5 * ROW_HEIGHT));
    println!("activated: {activated:?}");
    println!("frame lease active: {}", session.frame_lease_active());

    // Hover Journal's row; several moves land between ticks, then one tick
    // classifies the newest position (Journal's middle third).
    session.set_hover(Some((journal, band_of(3))));
    session.on_pointer_move(Point::new(40.0, 3.1 * ROW_HEIGHT));
    session.on_pointer_move(Point::new(40.0, 3.5 * ROW_HEIGHT));
    let target = session.on_frame(&tree);
    println!("classified target: {target:?}");

    match session.on_pointer_up(&tree) {
        Some(DragEnd::Commit { source, target }) => {
            println!("commit: {source:?} -> {target:?}\n");
            if let Some(moved) = tree.move_node(source, target.id, target.zone) {
                println!("== after ==");
                print_tree(&moved);
                println!("== original is untouched ==");
                print_tree(&tree);
            }
        }
        other => println!("no move: {other:?}"),
    }
    println!("frame lease active: {}", session.frame_lease_active());
}
