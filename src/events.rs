//! Significant mission dates
//!
//! The enumerated selector surface: a fixed set of Curiosity milestones
//! addressable by name instead of a raw date.

#[derive(Debug, Clone, Copy)]
pub(crate) struct MissionEvent {
    pub(crate) name: &'static str,
    pub(crate) earth_date: &'static str,
    pub(crate) label: &'static str,
}

pub(crate) const MISSION_EVENTS: &[MissionEvent] = &[
    MissionEvent {
        name: "landing",
        earth_date: "2012-08-06",
        label: "Curiosity landing at Gale Crater",
    },
    MissionEvent {
        name: "mount-sharp",
        earth_date: "2014-09-11",
        label: "Arrival at the base of Mount Sharp",
    },
    MissionEvent {
        name: "sol-1000",
        earth_date: "2015-05-31",
        label: "Sol 1000 milestone",
    },
    MissionEvent {
        name: "sol-2000",
        earth_date: "2018-03-22",
        label: "Sol 2000 milestone",
    },
    MissionEvent {
        name: "sol-3000",
        earth_date: "2021-01-12",
        label: "Sol 3000 milestone",
    },
];

pub(crate) fn find_event(name: &str) -> Option<&'static MissionEvent> {
    let needle = name.trim().to_ascii_lowercase();
    MISSION_EVENTS.iter().find(|event| event.name == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_date;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find_event("Landing").map(|e| e.earth_date), Some("2012-08-06"));
        assert_eq!(find_event("  SOL-1000 ").map(|e| e.earth_date), Some("2015-05-31"));
    }

    #[test]
    fn unknown_event_is_none() {
        assert!(find_event("olympus-mons").is_none());
    }

    #[test]
    fn all_event_dates_parse() {
        for event in MISSION_EVENTS {
            assert!(
                parse_date(event.earth_date).is_ok(),
                "bad date for {}",
                event.name
            );
        }
    }

    #[test]
    fn event_names_are_unique() {
        for (i, a) in MISSION_EVENTS.iter().enumerate() {
            for b in &MISSION_EVENTS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
