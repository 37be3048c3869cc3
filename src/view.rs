//! Display state and the output surface
//!
//! Rendering is pure: it turns a photo list into a `DisplayState` value.
//! The boundary layer owns a `Surface` and commits states to it; commits
//! carry the sequence number of the interaction that produced them, and
//! anything older than the latest issued interaction is discarded.

use crate::api::Photo;
use crate::consts::MAX_CARDS;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DisplayState {
    Cards {
        heading: Option<String>,
        photos: Vec<Photo>,
    },
    Message(String),
}

/// Selection policy: first `MAX_CARDS` photos in received order.
pub(crate) fn render_cards(
    photos: &[Photo],
    heading: Option<String>,
    selector: &str,
) -> DisplayState {
    if photos.is_empty() {
        return DisplayState::Message(format!("No photos found for {selector}."));
    }
    DisplayState::Cards {
        heading,
        photos: photos.iter().take(MAX_CARDS).cloned().collect(),
    }
}

pub(crate) fn present_error(message: impl Into<String>) -> DisplayState {
    DisplayState::Message(message.into())
}

#[derive(Debug, Default)]
pub(crate) struct Surface {
    issued: u64,
    current: Option<DisplayState>,
}

impl Surface {
    /// Tag the next interaction. Issuing invalidates all earlier tags.
    pub(crate) fn next_sequence(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Replace the visible state wholesale. Returns false when the
    /// commit is stale, i.e. a newer interaction has been issued since.
    pub(crate) fn commit(&mut self, seq: u64, state: DisplayState) -> bool {
        if seq != self.issued {
            return false;
        }
        self.current = Some(state);
        true
    }

    pub(crate) fn current(&self) -> Option<&DisplayState> {
        self.current.as_ref()
    }
}
