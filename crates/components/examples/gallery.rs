//! Render every widget to an in-memory canvas and print it as ASCII art.
//!
//! Run: RUST_LOG=debug cargo run -p dav-components --example gallery

#![allow(clippy::print_stdout)]

use dav_components::prelude::*;
use dav_testing::TestCanvas;
use dav_ui::attrs::Orientation;
use dav_ui::pagination::PageChange;
use dav_ui::settings::SettingsStore;
use embedded_graphics::prelude::*;
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 340;
const HEIGHT: u32 = 300;

fn at(x: u32, y: u32) -> Point {
    Point::new(
        i32::try_from(x).unwrap_or(i32::MAX),
        i32::try_from(y).unwrap_or(i32::MAX),
    )
}

fn below(y: u32, size: Size, gap: u32) -> u32 {
    y.saturating_add(size.height).saturating_add(gap)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = SettingsStore::new();

    let mut header = Header::new("Gallery")
        .back_button_visible(true)
        .edit_button_visible(true);
    let mut pagination = Pagination::new().pages(12).current_page(6);
    let mut checkbox = Checkbox::new().label("Dark mode");
    let mut card = Card::new()
        .headline("Dune")
        .subhead("Frank Herbert")
        .image_src("dune.jpg")
        .orientation(Orientation::Horizontal)
        .width(WIDTH.saturating_sub(20));
    let mut tab = TabBarItem::new("Library").active(true);
    let item = ListItem::new().headline("Track 01").subhead("Artist");

    header.attach(&store);
    pagination.attach(&store);
    checkbox.attach(&store);
    card.attach(&store);
    tab.attach(&store);

    for round in 0..2 {
        let mut canvas = TestCanvas::new(WIDTH, HEIGHT);
        let palette = Palette::for_theme(store.settings().theme);
        canvas.fill(palette.surface);

        let mut y = 0u32;
        header.render(&mut canvas, at(0, y)).ok();
        y = below(y, header.dimensions(), 4);
        pagination.render(&mut canvas, at(4, y)).ok();
        y = below(y, pagination.size(), 8);
        checkbox.render(&mut canvas, at(8, y)).ok();
        y = below(y, checkbox.size(), 8);
        card.render(&mut canvas, at(10, y)).ok();
        y = below(y, card.dimensions(), 8);
        tab.render(&mut canvas, at(10, y)).ok();
        y = below(y, tab.dimensions(), 4);
        item.render(&mut canvas, at(0, y), &palette).ok();

        println!("--- round {round} ---");
        println!("{}", canvas.to_ascii());

        // Flip the theme through the store, the way the checkbox would.
        if let Some(change) = checkbox.click() {
            store.set_theme(change.checked);
        }
        pagination.apply(PageChange { page: 7 });
        for pending in [
            header.binding().take_render_request(),
            pagination.binding().take_render_request(),
            card.binding().take_render_request(),
            tab.binding().take_render_request(),
        ] {
            tracing::info!(pending, "render requested");
        }
    }

    header.detach(&store);
    pagination.detach(&store);
    checkbox.detach(&store);
    card.detach(&store);
    tab.detach(&store);
}
