mod cards;
mod format;
mod json;

pub(crate) use cards::{CardOptions, print_display, print_events, print_summary_line};
pub(crate) use json::{display_json, events_json};
