//! Headless wheel-picker demo: drags, snaps, taps, and a composite jump,
//! printed to stdout. Run with `RUST_LOG=debug` to see the shift decisions.

use std::rc::Rc;
use std::thread;
use std::time::Duration;

use rondel_core::{ScrollSurface, Vec2, WheelConfig, WheelGroup, WheelSession, curved_center_y};
use rondel_list::{VirtualWheel, WheelPicker};

fn run_to_rest(picker: &WheelPicker) {
    while picker.tick() {
        thread::sleep(Duration::from_millis(16));
    }
}

fn print_wheel(picker: &WheelPicker, items: &[&str]) {
    for frame in picker.visible_transforms() {
        if frame.transform.opacity == 0.0 {
            continue;
        }
        let marker = if frame.logical == picker.selected_index() {
            ">"
        } else {
            " "
        };
        println!(
            "  {marker} {:<10} rot {:>6.1}°  scale {:.3}  shift {:>6.1}px",
            items[frame.logical],
            frame.transform.rotation_x,
            frame.transform.scale_x,
            frame.transform.translation_y,
        );
    }
}

fn main() {
    env_logger::init();

    let items = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];

    let picker = WheelPicker::new(
        WheelConfig::new(items.len())
            .non_focused_items(6)
            .initial_index(3)
            .infinite(true),
    );

    println!("initial wheel (selected {}):", items[picker.selected_index()]);
    print_wheel(&picker, &items);

    // A short drag that ends between slots, then the release snap.
    picker.surface().begin_drag();
    picker.surface().scroll_by(60.0);
    picker.surface().end_drag();
    run_to_rest(&picker);
    println!("\nafter drag + snap: {}", items[picker.selected_index()]);

    // Tap the item one slot below the center.
    let layout = picker.surface().layout_info();
    let below = layout.viewport_height / 2.0 + picker.config().item_height;
    let visual = curved_center_y(below, layout.viewport_height, &picker.config().curve);
    if picker.tap(Vec2 { x: 0.0, y: visual }).is_some() {
        run_to_rest(&picker);
        println!("after tap:         {}", items[picker.selected_index()]);
    }

    // Shortest-path jump the long way past the wrap seam.
    picker.animate_to_index(10);
    run_to_rest(&picker);
    println!("after jump to 10:  {}", items[picker.selected_index()]);

    // A three-wheel date group jumping in one logical operation.
    let wheel = |config: WheelConfig| {
        let surface = Rc::new(VirtualWheel::new(config.clone()));
        (WheelSession::new(config, surface.clone()), surface)
    };
    let (day, day_surface) = wheel(WheelConfig::new(31).infinite(true));
    let (month, month_surface) = wheel(WheelConfig::new(12).infinite(true));
    let (year, year_surface) = wheel(WheelConfig::new(200).initial_index(26));
    let group = WheelGroup::new(vec![day, month, year]).expect("group has wheels");

    let jump = group.animate_all(&[(13, 31), (7, 12), (125, 200)]);
    while day_surface.tick() | month_surface.tick() | year_surface.tick() {
        thread::sleep(Duration::from_millis(16));
    }
    println!(
        "\ndate group jumped ({:?}): day {} month {} year {}",
        jump.phase(),
        group.wheel(0).unwrap().selected_index(31) + 1,
        group.wheel(1).unwrap().selected_index(12) + 1,
        group.wheel(2).unwrap().selected_index(200) + 1900,
    );

    log::info!("demo finished at logical {}", picker.selected_index());
}
