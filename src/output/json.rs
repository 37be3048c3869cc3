use crate::events::MissionEvent;
use crate::view::DisplayState;

pub(crate) fn display_json(state: &DisplayState) -> String {
    let value = match state {
        DisplayState::Cards { heading, photos } => serde_json::json!({
            "heading": heading,
            "photos": photos,
        }),
        DisplayState::Message(message) => serde_json::json!({
            "message": message,
        }),
    };
    serde_json::to_string_pretty(&value).unwrap()
}

pub(crate) fn events_json(events: &[MissionEvent]) -> String {
    let output: Vec<serde_json::Value> = events
        .iter()
        .map(|event| {
            serde_json::json!({
                "name": event.name,
                "earth_date": event.earth_date,
                "description": event.label,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap()
}
