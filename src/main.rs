//! Zellij plugin wrapper and entry point.
//!
//! A thin layer between the MovieSearch library and the Zellij plugin API: it
//! translates Zellij events into library events, feeds them to `handle_event`
//! with the time since load, and carries out the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Key, `Timer`, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Permission granted**: navigate to the configured start route
//! 4. **Update**: Map events, delegate to the library, execute actions
//! 5. **Render**: Print the library's frame
//!
//! # Event Mapping
//!
//! - `Key` → input events, depending on screen and focus
//! - `Timer` → `Event::Tick`
//! - `WebRequestResult` → `Event::LookupCompleted` (context decoded from the echo map)
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+t`: Toggle light/dark theme
//! - `Ctrl+n` / `Ctrl+p`: Move the suggestion highlight
//!
//! Search, typing:
//! - characters / `Backspace`: Edit the query
//! - `Down`: Move into the suggestions
//! - `Enter`: Open the highlighted suggestion
//! - `Esc`: Clear the query, or close when it is empty
//!
//! Search, suggestions:
//! - `j`/`Down`, `k`/`Up`: Move the highlight
//! - `Enter`: Open the highlighted suggestion
//! - `/` or `Esc`: Back to the search box
//!
//! Details:
//! - `Esc`/`b`/`Backspace`/`Left`: Back to search
//! - `q`: Close the plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::time::Instant;
use zellij_tile::prelude::*;

use moviesearch::omdb::RequestContext;
use moviesearch::{handle_event, Action, Config, Event, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    app: moviesearch::AppState,

    /// Reference point for the scheduler clock.
    started: Instant,

    /// Route to open once web access is granted.
    start_route: String,

    web_access: bool,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: moviesearch::initialize(&default_config),
            started: Instant::now(),
            start_route: default_config.start_route,
            web_access: false,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        moviesearch::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(base_url = %config.base_url, dark_mode = config.dark_mode, "parsed configuration");
        self.app = moviesearch::initialize(&config);
        self.started = Instant::now();
        self.start_route.clone_from(&config.start_route);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match self.handle_permission_result(status) {
                Some(event) => event,
                None => return false,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event, self.started.elapsed()) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        moviesearch::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('t') => Some(Event::ToggleTheme),
                BareKey::Char('n') => Some(Event::MoveDown),
                BareKey::Char('p') => Some(Event::MoveUp),
                _ => None,
            };
        }

        let Some(search) = self.app.search_view() else {
            return match key.bare_key {
                BareKey::Esc | BareKey::Backspace | BareKey::Left | BareKey::Char('b') => Some(Event::Back),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        };

        Some(match (search.focus, key.bare_key) {
            (SearchFocus::Typing, BareKey::Down) => Event::FocusSuggestions,
            (SearchFocus::Typing, BareKey::Up) => return None,
            (SearchFocus::Navigating, BareKey::Down | BareKey::Char('j')) => Event::MoveDown,
            (SearchFocus::Navigating, BareKey::Up | BareKey::Char('k')) => Event::MoveUp,
            (SearchFocus::Navigating, BareKey::Char('/')) => Event::FocusInput,
            (SearchFocus::Navigating, BareKey::Char('q')) => Event::CloseFocus,
            (_, BareKey::Enter) => Event::Select,
            (_, BareKey::Esc) => Event::Escape,
            (_, BareKey::Backspace) => Event::Backspace,
            (_, BareKey::Char(c)) => Event::Char(c),
            _ => return None,
        })
    }

    /// Maps a web response back onto the lookup that issued it.
    fn map_web_result_event(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(context) = RequestContext::from_map(context) else {
            tracing::debug!(status, "web response without a lookup context");
            return None;
        };
        tracing::debug!(status, body_len = body.len(), view = context.view, seq = context.seq, "lookup response");
        Some(Event::LookupCompleted { context, status, body })
    }

    fn handle_permission_result(&mut self, status: PermissionStatus) -> Option<Event> {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!(start_route = %self.start_route, "web access granted");
                self.web_access = true;
                Some(Event::Navigate(self.start_route.clone()))
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - lookups disabled");
                None
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleWakeup(delay) => set_timeout(delay.as_secs_f64()),
            Action::Lookup(request) => {
                if !self.web_access {
                    tracing::warn!(view = request.context.view, "web access not granted, lookup dropped");
                    return;
                }
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context.to_map(),
                );
            }
        }
    }
}
