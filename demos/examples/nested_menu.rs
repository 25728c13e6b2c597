// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted walkthrough of the headless nested menu.
//!
//! Drives a [`NestedMenu`] with synthetic pointer gestures — click, expand,
//! reorder, nest, an invalid drop onto the dragged node's own subtree, and a
//! drop on the seam between two siblings — printing the visible outline after
//! each step.
//!
//! Run:
//! - `cargo run -p arbor_demos --example nested_menu`

use arbor_menu::{Indicator, MenuConfig, MenuEvent, NestedMenu};
use arbor_tree::{Icon, Seed};
use kurbo::Point;

const INBOX: Icon = Icon(1);
const JOURNAL: Icon = Icon(2);
const NOTES: Icon = Icon(3);
const IDEAS: Icon = Icon(4);
const BOOKMARKS: Icon = Icon(5);

fn seeds() -> Vec<Seed> {
    vec![
        Seed::new("Inbox").icon(INBOX).children([
            Seed::new("Today").icon(NOTES).children([
                Seed::new("Calls").icon(NOTES),
                Seed::new("Emails").icon(NOTES),
                Seed::new("Messages").icon(NOTES),
            ]),
            Seed::new("Later").icon(NOTES).children([
                Seed::new("Errands").icon(NOTES),
                Seed::new("Reading").icon(NOTES),
                Seed::new("Follow-ups").icon(NOTES),
            ]),
            Seed::new("Past").icon(NOTES),
        ]),
        Seed::new("Journal").icon(JOURNAL).children([
            Seed::new("Trips").icon(NOTES).children([
                Seed::new("Summer").icon(NOTES).children([
                    Seed::new("Boston").icon(NOTES),
                    Seed::new("New York").icon(NOTES),
                    Seed::new("San Francisco").icon(NOTES),
                ]),
                Seed::new("Spring").icon(NOTES).children([
                    Seed::new("Japan").icon(NOTES),
                    Seed::new("Bangkok").icon(NOTES),
                    Seed::new("Shanghai").icon(NOTES),
                ]),
                Seed::new("Winter").icon(NOTES).children([
                    Seed::new("Guatemala").icon(NOTES),
                    Seed::new("Mexico City").icon(NOTES),
                    Seed::new("Sao Paulo").icon(NOTES),
                ]),
                Seed::new("Autumn").icon(NOTES).children([
                    Seed::new("Barcelona").icon(NOTES),
                    Seed::new("Porto").icon(NOTES),
                    Seed::new("Paris").icon(NOTES),
                ]),
            ]),
            Seed::new("Events").icon(NOTES),
        ]),
        Seed::new("Notes").icon(NOTES).children([
            Seed::new("Work").icon(NOTES).children([
                Seed::new("Designs").icon(NOTES),
                Seed::new("Clients").icon(NOTES),
                Seed::new("Meetings").icon(NOTES),
            ]),
            Seed::new("Personal").icon(NOTES).children([
                Seed::new("Health").icon(NOTES),
                Seed::new("Investments").icon(NOTES),
                Seed::new("Family").icon(NOTES),
            ]),
        ]),
        Seed::new("Ideas").icon(IDEAS).children([
            Seed::new("Apps").icon(NOTES).children([
                Seed::new("Weather").icon(NOTES),
                Seed::new("News").icon(NOTES),
                Seed::new("Music").icon(NOTES),
            ]),
            Seed::new("Components").icon(NOTES).children([
                Seed::new("Tabs").icon(NOTES),
                Seed::new("Dropdown").icon(NOTES),
                Seed::new("Menu").icon(NOTES),
            ]),
        ]),
        Seed::new("Bookmarks").icon(BOOKMARKS).children([
            Seed::new("Books").icon(NOTES).children([
                Seed::new("The Great Gatsby").icon(NOTES),
                Seed::new("To Kill a Mockingbird").icon(NOTES),
                Seed::new("1984").icon(NOTES),
            ]),
            Seed::new("Movies").icon(NOTES).children([
                Seed::new("The Godfather").icon(NOTES),
                Seed::new("The Dark Knight").icon(NOTES),
                Seed::new("The Lord of the Rings").icon(NOTES),
            ]),
        ]),
    ]
}

fn print_outline(menu: &NestedMenu) {
    for row in menu.rows() {
        let marker = match row.indicator {
            Some(Indicator::LineAbove) => "▲ ",
            Some(Indicator::LineBelow) => "▼ ",
            Some(Indicator::FillInto) => "■ ",
            None if row.dragging => "~ ",
            None => "  ",
        };
        let disclosure = if !row.shows_disclosure {
            "  "
        } else if row.expanded {
            "▾ "
        } else {
            "▸ "
        };
        println!(
            "{marker}{:indent$}{disclosure}{}",
            "",
            row.label,
            indent = row.depth * 2
        );
    }
    println!();
}

fn center_of(menu: &NestedMenu, label: &str) -> Point {
    let rows = menu.rows();
    let row = rows
        .iter()
        .find(|row| row.label == label)
        .unwrap_or_else(|| panic!("row {label:?} is not visible"));
    row.visual_bounds.center()
}

/// Press `from`, drag to a point `fraction` of the way down `to`'s row, run
/// one frame tick, and release.
fn drag(menu: &mut NestedMenu, from: &str, to: &str, fraction: f64) -> Option<MenuEvent> {
    menu.pointer_down(center_of(menu, from));

    let rows = menu.rows();
    let target = rows.iter().find(|row| row.label == to).unwrap();
    let band = target.band();
    let destination = Point::new(
        target.visual_bounds.center().x,
        band.top + band.height * fraction,
    );

    menu.pointer_move(destination);
    if menu.needs_frame() {
        menu.on_frame();
    }
    menu.pointer_up()
}

fn main() {
    let mut menu = NestedMenu::with_setup(MenuConfig::default(), seeds(), &["Inbox"], &[])
        .expect("seed labels are unique");

    println!("== initial outline (Inbox pre-expanded) ==");
    print_outline(&menu);

    println!("== click Today (press, 2-unit wiggle, release) ==");
    let start = center_of(&menu, "Today");
    menu.pointer_down(start);
    menu.pointer_move(Point::new(start.x + 2.0, start.y));
    println!("-> {:?}\n", menu.pointer_up());

    println!("== press Journal's disclosure ==");
    let journal_row_y = center_of(&menu, "Journal").y;
    println!("-> {:?}", menu.pointer_down(Point::new(5.0, journal_row_y)));
    print_outline(&menu);

    println!("== drag Today into the bottom third of Past's row (reorder to the end) ==");
    println!("-> {:?}", drag(&mut menu, "Today", "Past", 0.9));
    print_outline(&menu);

    println!("== drag Notes onto the middle of Journal (nest + auto-expand) ==");
    println!("-> {:?}", drag(&mut menu, "Notes", "Journal", 0.5));
    print_outline(&menu);

    println!("== drag Inbox onto its own child Later (refused) ==");
    println!("-> {:?}", drag(&mut menu, "Inbox", "Later", 0.5));
    print_outline(&menu);

    println!("== drag Ideas to the seam below Later (normalizes to above Past) ==");
    println!("-> {:?}", drag(&mut menu, "Ideas", "Later", 0.9));
    print_outline(&menu);
}
