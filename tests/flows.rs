//! End-to-end flows through `handle_event` with a manual clock.
//!
//! The harness plays the host: it records every requested wakeup, fires
//! `Tick` when the clock passes one, and keeps the lookups the handler issued
//! so tests can answer them.

use moviesearch::app::{handle_event, AppState, Event};
use moviesearch::omdb::{LookupRequest, OmdbClient};
use moviesearch::ui::{render_to_string, Body, DetailsScreen, Theme, ThemeSet};
use moviesearch::{Action, Route, StalePolicy};
use std::time::Duration;

struct Harness {
    state: AppState,
    now: Duration,
    wakeups: Vec<Duration>,
    lookups: Vec<LookupRequest>,
    closed: bool,
}

impl Harness {
    fn new() -> Self {
        let client = OmdbClient::new("test-key", "https://omdb.test").expect("valid client");
        Self {
            state: AppState::new(Some(client), ThemeSet::default(), false),
            now: Duration::ZERO,
            wakeups: Vec::new(),
            lookups: Vec::new(),
            closed: false,
        }
    }

    fn with_policy(policy: StalePolicy) -> Self {
        let mut harness = Self::new();
        harness.state.stale_policy = policy;
        harness
    }

    fn send(&mut self, event: Event) -> bool {
        let (render, actions) = handle_event(&mut self.state, &event, self.now).expect("handler never fails");
        for action in actions {
            match action {
                Action::ScheduleWakeup(delay) => self.wakeups.push(self.now + delay),
                Action::Lookup(request) => self.lookups.push(request),
                Action::CloseFocus => self.closed = true,
            }
        }
        render
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(Event::Char(c));
        }
    }

    /// Moves the clock to `ms` after start, firing every wakeup on the way.
    fn advance_to(&mut self, ms: u64) {
        let target = Duration::from_millis(ms);
        loop {
            self.wakeups.sort();
            match self.wakeups.first().copied() {
                Some(deadline) if deadline <= target => {
                    self.wakeups.remove(0);
                    self.now = self.now.max(deadline);
                    self.send(Event::Tick);
                }
                _ => break,
            }
        }
        self.now = target;
    }

    fn respond(&mut self, request: &LookupRequest, body: &str) -> bool {
        self.send(Event::LookupCompleted {
            context: request.context.clone(),
            status: 200,
            body: body.as_bytes().to_vec(),
        })
    }

    fn suggestion_count(&self) -> usize {
        self.state.search_view().map_or(0, |v| v.suggestions.len())
    }
}

fn search_body(count: usize) -> String {
    let hits: Vec<String> = (0..count)
        .map(|n| {
            let poster = if n == 0 {
                "N/A".to_string()
            } else {
                format!("https://img.test/{n}.jpg")
            };
            format!(r#"{{"Title":"Batman {n}","Year":"19{n:02}","imdbID":"tt{n:07}","Type":"movie","Poster":"{poster}"}}"#)
        })
        .collect();
    format!(r#"{{"Search":[{}],"totalResults":"{count}","Response":"True"}}"#, hits.join(","))
}

const MATRIX_SEARCH: &str = r#"{"Search":[{"Title":"The Matrix","Year":"1999","imdbID":"tt0133093","Type":"movie","Poster":"N/A"}],"totalResults":"1","Response":"True"}"#;

const MATRIX_DETAILS: &str = r#"{"Title":"The Matrix","Year":"1999","Rated":"R","Runtime":"136 min","Genre":"Action, Sci-Fi","Director":"Lana Wachowski, Lilly Wachowski","Actors":"Keanu Reeves, Laurence Fishburne","Plot":"A computer hacker learns about the true nature of reality.","Language":"English","Awards":"Won 4 Oscars","Poster":"N/A","imdbRating":"8.7","imdbID":"tt0133093","Response":"True"}"#;

#[test]
fn short_queries_never_look_up() {
    let mut h = Harness::new();
    h.type_text("ba");
    h.advance_to(1_000);
    assert!(h.lookups.is_empty());
    assert_eq!(h.suggestion_count(), 0);
}

#[test]
fn settled_query_issues_exactly_one_lookup() {
    let mut h = Harness::new();
    h.type_text("bat");
    h.advance_to(200);
    h.type_text("man");
    h.advance_to(2_000);

    assert_eq!(h.lookups.len(), 1);
    assert!(h.lookups[0].url.ends_with("&s=batman"));
}

#[test]
fn lookup_waits_for_the_full_quiet_period() {
    let mut h = Harness::new();
    h.type_text("alien");
    h.advance_to(299);
    assert!(h.lookups.is_empty());
    h.advance_to(300);
    assert_eq!(h.lookups.len(), 1);
}

#[test]
fn shortening_below_three_clears_and_skips() {
    let mut h = Harness::new();
    h.type_text("bat");
    h.advance_to(300);
    let request = h.lookups[0].clone();
    h.respond(&request, &search_body(4));
    assert_eq!(h.suggestion_count(), 4);

    h.send(Event::Backspace);
    assert_eq!(h.suggestion_count(), 0);
    h.advance_to(1_000);
    assert_eq!(h.lookups.len(), 1);
}

#[test]
fn suggestion_list_is_capped_at_ten() {
    let mut h = Harness::new();
    h.type_text("batman");
    h.advance_to(300);
    let request = h.lookups[0].clone();
    h.respond(&request, &search_body(25));

    assert_eq!(h.suggestion_count(), 10);
    let Body::Search(screen) = h.state.compute_viewmodel(60, 100).body else {
        panic!("expected search screen");
    };
    assert_eq!(screen.items.len(), 10);
    assert_eq!(screen.summary.as_deref(), Some("Showing 10 of 25 matches"));
}

#[test]
fn missing_poster_uses_placeholder() {
    let mut h = Harness::new();
    h.type_text("batman");
    h.advance_to(300);
    let request = h.lookups[0].clone();
    h.respond(&request, &search_body(2));

    let Body::Search(screen) = h.state.compute_viewmodel(40, 100).body else {
        panic!("expected search screen");
    };
    assert_eq!(screen.items[0].poster, "placeholder.png");
    assert_eq!(screen.items[1].poster, "https://img.test/1.jpg");
    assert!(h.lookups.iter().all(|r| !r.url.contains("N/A")));
}

#[test]
fn not_found_clears_suggestions() {
    let mut h = Harness::new();
    h.type_text("qqqqzz");
    h.advance_to(300);
    let request = h.lookups[0].clone();
    h.respond(&request, r#"{"Response":"False","Error":"Movie not found!"}"#);
    assert_eq!(h.suggestion_count(), 0);
}

#[test]
fn selecting_opens_details_with_one_lookup() {
    let mut h = Harness::new();
    h.type_text("matrix");
    h.advance_to(300);
    let request = h.lookups[0].clone();
    h.respond(&request, MATRIX_SEARCH);

    h.send(Event::FocusSuggestions);
    h.send(Event::Select);

    assert_eq!(h.state.route().path(), "/movie/tt0133093");
    assert_eq!(h.lookups.len(), 2);
    assert!(h.lookups[1].url.contains("i=tt0133093"));

    h.advance_to(5_000);
    assert_eq!(h.lookups.len(), 2);
}

#[test]
fn details_reveal_after_record_arrives() {
    let mut h = Harness::new();
    h.send(Event::Navigate("/movie/tt0133093".into()));
    let request = h.lookups[0].clone();

    h.advance_to(40);
    h.respond(&request, MATRIX_DETAILS);
    let Body::Details(DetailsScreen::Loaded(content)) = h.state.compute_viewmodel(40, 100).body else {
        panic!("expected loaded details");
    };
    assert!(content.dimmed);
    assert!(content.facts.contains(&("Rating".to_string(), "8.7/10".to_string())));

    h.advance_to(140);
    let Body::Details(DetailsScreen::Loaded(content)) = h.state.compute_viewmodel(40, 100).body else {
        panic!("expected loaded details");
    };
    assert!(!content.dimmed);
    assert_eq!(content.poster, "placeholder.png");
}

#[test]
fn failed_details_lookup_stays_loading() {
    let mut h = Harness::new();
    h.send(Event::Navigate("/movie/tt9999999".into()));
    let request = h.lookups[0].clone();
    h.respond(&request, r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#);

    assert!(matches!(
        h.state.compute_viewmodel(40, 100).body,
        Body::Details(DetailsScreen::Loading { .. })
    ));
}

#[test]
fn back_changes_route_only_after_exit_delay() {
    let mut h = Harness::new();
    h.send(Event::Navigate("/movie/tt0133093".into()));
    let request = h.lookups[0].clone();
    h.respond(&request, MATRIX_DETAILS);
    h.advance_to(1_000);

    h.send(Event::Back);
    h.advance_to(1_299);
    assert_eq!(h.state.route(), Route::Details { id: "tt0133093".into() });
    h.advance_to(1_300);
    assert_eq!(h.state.route(), Route::Search);
    assert_eq!(h.state.search_view().map(|v| v.query.as_str()), Some(""));
}

#[test]
fn back_is_allowed_while_loading() {
    let mut h = Harness::new();
    h.send(Event::Navigate("/movie/tt0133093".into()));
    h.send(Event::Back);
    h.advance_to(300);
    assert_eq!(h.state.route(), Route::Search);
}

#[test]
fn late_response_for_unmounted_view_is_ignored() {
    let mut h = Harness::new();
    h.send(Event::Navigate("/movie/tt0133093".into()));
    let request = h.lookups[0].clone();
    h.send(Event::Back);
    h.advance_to(300);

    assert!(!h.respond(&request, MATRIX_DETAILS));
    assert_eq!(h.state.route(), Route::Search);
}

#[test]
fn pending_debounce_dies_with_its_view() {
    let mut h = Harness::new();
    h.type_text("matrix");
    h.send(Event::Navigate("/movie/tt0133093".into()));
    h.advance_to(1_000);
    assert_eq!(h.lookups.len(), 1);
    assert!(h.lookups[0].url.contains("i=tt0133093"));
}

#[test]
fn stale_response_wins_in_arrival_order() {
    let mut h = Harness::new();
    h.type_text("bat");
    h.advance_to(300);
    h.type_text("s");
    h.advance_to(600);
    let (first, second) = (h.lookups[0].clone(), h.lookups[1].clone());

    h.respond(&second, &search_body(2));
    h.respond(&first, &search_body(7));
    assert_eq!(h.suggestion_count(), 7);
}

#[test]
fn latest_policy_drops_stale_response() {
    let mut h = Harness::with_policy(StalePolicy::Latest);
    h.type_text("bat");
    h.advance_to(300);
    h.type_text("s");
    h.advance_to(600);
    let (first, second) = (h.lookups[0].clone(), h.lookups[1].clone());

    h.respond(&second, &search_body(2));
    h.respond(&first, &search_body(7));
    assert_eq!(h.suggestion_count(), 2);
}

#[test]
fn escape_on_empty_query_closes() {
    let mut h = Harness::new();
    h.send(Event::Escape);
    assert!(h.closed);
}

#[test]
fn theme_toggle_reaches_every_screen() {
    let mut h = Harness::new();
    let themes = ThemeSet::default();
    let light_background = Theme::bg(&themes.light.colors.background);
    let dark_background = Theme::bg(&themes.dark.colors.background);
    let dark_accent = Theme::fg(&themes.dark.colors.accent);

    let frame = render_to_string(&h.state, 30, 100);
    assert!(frame.contains(&light_background));
    assert!(frame.contains("☾ dark"));

    h.send(Event::ToggleTheme);
    let frame = render_to_string(&h.state, 30, 100);
    assert!(frame.contains(&dark_background));
    assert!(frame.contains(&dark_accent));
    assert!(frame.contains("☀ light"));
    assert!(!frame.contains(&light_background));

    h.send(Event::Navigate("/movie/tt0133093".into()));
    let request = h.lookups[0].clone();
    h.respond(&request, MATRIX_DETAILS);
    h.advance_to(200);
    let frame = render_to_string(&h.state, 30, 100);
    assert!(frame.contains("The Matrix"));
    assert!(frame.contains(&dark_background));
    assert!(!frame.contains(&light_background));
    assert!(h.state.dark_mode);
}
