//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the `world_cuisines` library and the
//! Zellij plugin system: it maps host events to library events, runs the
//! returned actions through the host API and forwards rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult` and `PermissionRequestResult`
//! 3. **Update**: Translate events, delegate to the library, execute actions
//! 4. **Render**: Record the viewport, call the library render function
//!
//! # Event Mapping
//!
//! - `Key` → navigation, input and page events (see below)
//! - `WebRequestResult` → `Event::ApiResponse`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//! - `Ctrl+s`: Submit the contact or suggestion form
//!
//! In normal mode:
//! - `h` `c` `m` `r`: Home, Cuisines, Contact, Reviews
//! - `j`/`Down`, `k`/`Up`: Move
//! - `Enter`: Select (edit a field on the contact page, dismiss a banner
//!   on the contact or reviews page)
//! - `q`: Close plugin
//! - `/`: Search (cuisines, reviews)
//! - `Tab`: Cycle category (cuisines) or next field (contact)
//! - `Shift+Tab`: Previous field
//! - `d` `s` `x`: Cycle difficulty, cycle sort, clear filters
//! - `Esc`/`b`: Back from a cuisine detail
//! - `i`: Edit the focused field
//! - `g`: Toggle the suggestion form
//! - `f` `t` `R` `S`: Status filter, toggle feed, reload, advance status
//!
//! In search mode, characters go to the search term; `Enter` keeps it and
//! `Esc` clears it. In editing mode, characters go to the focused field;
//! `Enter`/`Tab` move to the next field and `Esc` stops editing.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use world_cuisines::api::{ApiReply, ApiRequest, HttpMethod};
use world_cuisines::app::Viewport;
use world_cuisines::{handle_event, Action, Config, Event, InputMode, Page};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: world_cuisines::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: world_cuisines::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Requests `WebAccess` so submissions and review feeds can reach the
    /// backend. Browsing the catalog works without it.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        world_cuisines::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(api_base_url = %config.api_base_url, "parsed configuration");
        self.app = world_cuisines::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// # Returns
    ///
    /// - `true` if the plugin UI should re-render
    /// - `false` if the event was ignored or changed nothing
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status, body_len = body.len(), "web request result");
                Event::ApiResponse(ApiReply {
                    status,
                    body,
                    context,
                })
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Self::map_permission_result(permissions)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// The viewport is recorded first so detail scrolling stays bounded by
    /// the visible height.
    fn render(&mut self, rows: usize, cols: usize) {
        self.app.viewport = Viewport { rows, cols };
        world_cuisines::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_permission_result(permissions: PermissionStatus) -> Event {
        let granted = match permissions {
            PermissionStatus::Granted => vec![PermissionType::WebAccess],
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - submissions and reviews unavailable");
                Vec::new()
            }
        };
        Event::PermissionsResult { granted }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::CursorDown),
                BareKey::Char('p') => Some(Event::CursorUp),
                BareKey::Char('s') => Some(Event::SubmitForm),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Search => Some(match key.bare_key {
                BareKey::Down => Event::CursorDown,
                BareKey::Up => Event::CursorUp,
                BareKey::Enter => Event::Select,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Editing => Some(match key.bare_key {
                BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
                BareKey::Tab => Event::NextField,
                BareKey::Enter => Event::Select,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Normal => self.map_normal_key(key),
        }
    }

    fn map_normal_key(&self, key: &KeyWithModifier) -> Option<Event> {
        let page = self.app.view.current_page;

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('h') => Event::Navigate(Page::Home),
            BareKey::Char('c') => Event::Navigate(Page::Cuisines),
            BareKey::Char('m') => Event::Navigate(Page::Contact),
            BareKey::Char('r') => Event::Navigate(Page::Reviews),
            BareKey::Esc => Event::Escape,
            BareKey::Char('b') => Event::Back,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Enter if page == Page::Contact => {
                if self.app.active_submit().banner.is_some() {
                    Event::DismissBanner
                } else {
                    Event::BeginEditing
                }
            }
            BareKey::Enter if page == Page::Reviews && self.app.status_update.banner.is_some() => {
                Event::DismissBanner
            }
            BareKey::Enter => Event::Select,
            BareKey::Tab if page == Page::Contact => {
                if key.has_modifiers(&[KeyModifier::Shift]) {
                    Event::PrevField
                } else {
                    Event::NextField
                }
            }
            BareKey::Tab => Event::CycleCategory,
            BareKey::Char('d') => Event::CycleDifficulty,
            BareKey::Char('s') => Event::CycleSort,
            BareKey::Char('x') => Event::ClearFilters,
            BareKey::Char('i') => Event::BeginEditing,
            BareKey::Char('g') => Event::ToggleSuggestionForm,
            BareKey::Char('f') => Event::CycleStatusFilter,
            BareKey::Char('t') => Event::ToggleFeed,
            BareKey::Char('R') => Event::RefreshFeed,
            BareKey::Char('S') => Event::AdvanceStatus,
            _ => return None,
        })
    }

    /// Executes an action returned from event handling.
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `Dispatch`: Hand the request to the host's web request facility;
    ///   the answer comes back as `WebRequestResult` with the same context
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Dispatch(request) => Self::dispatch(request),
        }
    }

    fn dispatch(request: &ApiRequest) {
        let verb = match request.method {
            HttpMethod::Get => HttpVerb::Get,
            HttpMethod::Post => HttpVerb::Post,
            HttpMethod::Put => HttpVerb::Put,
        };

        let mut headers = BTreeMap::new();
        if !request.body.is_empty() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        tracing::debug!(url = %request.url, kind = ?request.kind(), "dispatching web request");
        web_request(
            &request.url,
            verb,
            headers,
            request.body.clone(),
            request.context.clone(),
        );
    }
}
