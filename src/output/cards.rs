use comfy_table::Cell;

use crate::events::MissionEvent;
use crate::output::format::{create_styled_table, header_cell, right_cell};
use crate::view::DisplayState;

#[derive(Debug, Clone, Copy)]
pub(crate) struct CardOptions {
    pub(crate) use_color: bool,
}

/// Commit a display state to stdout. Replaces everything: one table of
/// cards under an optional heading, or a single message line.
pub(crate) fn print_display(state: &DisplayState, options: CardOptions) {
    match state {
        DisplayState::Message(message) => println!("{message}"),
        DisplayState::Cards { heading, photos } => {
            if let Some(heading) = heading {
                println!("\n  {heading}\n");
            }
            let c = options.use_color;
            let mut table = create_styled_table();
            table.set_header(vec![
                header_cell("#", c),
                header_cell("Photo", c),
                header_cell("Caption", c),
                header_cell("Image URL", c),
            ]);
            for (i, photo) in photos.iter().enumerate() {
                table.add_row(vec![
                    right_cell(&(i + 1).to_string()),
                    Cell::new(photo.alt_text()),
                    Cell::new(photo.caption()),
                    Cell::new(&photo.img_src),
                ]);
            }
            println!("{table}");
        }
    }
}

/// Print the summary line under a card table
pub(crate) fn print_summary_line(shown: usize, total: usize, use_color: bool) {
    let text = if total > shown {
        format!("Showing first {shown} of {total} photos")
    } else if shown == 1 {
        "1 photo".to_string()
    } else {
        format!("{shown} photos")
    };

    if use_color {
        println!("\n  \x1b[36m{text}\x1b[0m\n");
    } else {
        println!("\n  {text}\n");
    }
}

pub(crate) fn print_events(events: &[MissionEvent], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Event", use_color),
        header_cell("Earth Date", use_color),
        header_cell("Description", use_color),
    ]);
    for event in events {
        table.add_row(vec![
            Cell::new(event.name),
            Cell::new(event.earth_date),
            Cell::new(event.label),
        ]);
    }
    println!("\n  Mission Events\n");
    println!("{table}");
}
