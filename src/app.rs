//! Interaction boundary
//!
//! Drives the query → fetch → render pipeline for one invocation,
//! converts every error into a user-facing message, and commits the
//! resulting display state to the surface. Diagnostic detail goes to
//! stderr; the user-facing output never carries status codes or error
//! chains verbatim.

use std::time::Duration;

use crate::api::{build_agent, fetch_photos, redact_key};
use crate::cli::{Cli, Commands};
use crate::config::{Config, resolve_api_key};
use crate::consts::{DEFAULT_TIMEOUT_SECS, MAX_CARDS};
use crate::error::{AppError, FetchError, QueryError};
use crate::events::{MISSION_EVENTS, find_event};
use crate::output::{
    CardOptions, display_json, events_json, print_display, print_events, print_summary_line,
};
use crate::query::{Query, build_request, parse_date};
use crate::view::{DisplayState, Surface, present_error, render_cards};

const FETCH_FAILED_MSG: &str = "Could not fetch rover photos. Please try again later.";

pub(crate) fn run(cli: &Cli, config: &Config) -> i32 {
    match &cli.command {
        Some(Commands::Events) => {
            if cli.json {
                println!("{}", events_json(MISSION_EVENTS));
            } else {
                print_events(MISSION_EVENTS, cli.use_color());
            }
            0
        }
        Some(Commands::Event { name }) => match event_query(name) {
            Ok((query, heading)) => run_fetch(cli, config, query, Some(heading)),
            Err(err) => show_failure(cli, &err),
        },
        Some(Commands::Fetch) | None => match resolve_query(cli, config) {
            Ok(query) => run_fetch(cli, config, query, None),
            Err(err) => show_failure(cli, &err.into()),
        },
    }
}

/// Build the query from CLI selectors, falling back to the configured
/// default date when neither is given.
fn resolve_query(cli: &Cli, config: &Config) -> Result<Query, QueryError> {
    let earth_date = match &cli.date {
        Some(raw) => Some(parse_date(raw)?),
        None => None,
    };
    let mut query = Query {
        earth_date,
        sol: cli.sol,
    };
    if query.is_empty()
        && let Some(raw) = &config.default_date
    {
        query.earth_date = Some(parse_date(raw)?);
    }
    Ok(query)
}

fn event_query(name: &str) -> Result<(Query, String), AppError> {
    let event = find_event(name).ok_or_else(|| QueryError::UnknownEvent {
        input: name.to_string(),
    })?;
    let date = parse_date(event.earth_date)?;
    Ok((Query::from_date(date), event.label.to_string()))
}

fn run_fetch(cli: &Cli, config: &Config, query: Query, heading: Option<String>) -> i32 {
    let mut surface = Surface::default();
    let seq = surface.next_sequence();
    let selector = query.describe();

    let mut counts = None;
    let (state, code) = match fetch_display(cli, config, &query, heading, &selector) {
        Ok((state, shown, total)) => {
            counts = Some((shown, total));
            (state, 0)
        }
        Err(AppError::Fetch(FetchError::Empty)) => {
            (present_error(format!("No photos found for {selector}.")), 0)
        }
        Err(AppError::Query(err)) => (present_error(err.to_string()), 1),
        Err(err) => {
            eprintln!("Error fetching photos: {err}");
            (present_error(FETCH_FAILED_MSG), 1)
        }
    };

    if surface.commit(seq, state)
        && let Some(current) = surface.current()
    {
        emit(cli, current);
        if !cli.json
            && let Some((shown, total)) = counts
        {
            print_summary_line(shown, total, cli.use_color());
        }
    }
    code
}

fn fetch_display(
    cli: &Cli,
    config: &Config,
    query: &Query,
    heading: Option<String>,
    selector: &str,
) -> Result<(DisplayState, usize, usize), AppError> {
    let api_key = resolve_api_key(cli.api_key.as_deref(), config, cli.json && !cli.debug);
    let url = build_request(query, &api_key)?;
    if cli.debug {
        eprintln!("GET {}", redact_key(&url));
    }

    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
    let agent = build_agent(timeout);
    let result = fetch_photos(&agent, &url)?;
    if cli.debug {
        eprintln!(
            "Fetched {} photos ({} malformed records skipped)",
            result.photos.len(),
            result.skipped
        );
    }

    let total = result.photos.len();
    let state = render_cards(&result.photos, heading, selector);
    Ok((state, total.min(MAX_CARDS), total))
}

/// Validation failures: show the message the same way a fetch result
/// would be shown, then exit nonzero.
fn show_failure(cli: &Cli, err: &AppError) -> i32 {
    let mut surface = Surface::default();
    let seq = surface.next_sequence();
    surface.commit(seq, present_error(err.to_string()));
    if let Some(state) = surface.current() {
        emit(cli, state);
    }
    1
}

fn emit(cli: &Cli, state: &DisplayState) {
    if cli.json {
        println!("{}", display_json(state));
    } else {
        print_display(
            state,
            CardOptions {
                use_color: cli.use_color(),
            },
        );
    }
}
