//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place application state changes. The plugin
//! shim turns host events (key presses, web replies, permission results) into
//! [`Event`]s, calls the handler, renders when asked to, and executes the
//! returned actions.
//!
//! # Architecture
//!
//! ```text
//! Key / WebRequestResult → Event → handle_event → AppState mutation → Vec<Action>
//!                                        ↑                                  │
//!                                        └──── Event::ApiResponse ←── Dispatch
//! ```
//!
//! # Event Types
//!
//! - **Navigation**: `Navigate`, `CursorUp`, `CursorDown`, `Select`, `Back`
//! - **Input**: `SearchMode`, `Char`, `Backspace`, `Escape`
//! - **Listing**: `CycleCategory`, `CycleDifficulty`, `CycleSort`, `ClearFilters`
//! - **Forms**: `BeginEditing`, `NextField`, `PrevField`, `SubmitForm`, `ToggleSuggestionForm`, `DismissBanner`
//! - **Reviews**: `CycleStatusFilter`, `ToggleFeed`, `RefreshFeed`, `AdvanceStatus`
//! - **System**: `ApiResponse`, `PermissionsResult`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::api::ApiClient;
//! use world_cuisines::app::{handle_event, AppState, Event, Page};
//! use world_cuisines::catalog::Catalog;
//! use world_cuisines::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin()?, Theme::default(), ApiClient::new("http://localhost:5000/api"));
//! let (should_render, actions) = handle_event(&mut state, &Event::Navigate(Page::Cuisines))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), world_cuisines::CuisineError>(())
//! ```

use super::modes::{FeedKind, InputMode};
use super::navigator::{resolve_detail, DetailView, Page};
use crate::api::ApiReply;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Difficulty;
use crate::reviews::LoadState;
use zellij_tile::prelude::PermissionType;

/// Events triggered by user input, backend replies or host notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Switches to a top-level page.
    Navigate(Page),
    /// Moves the page cursor down (listing row, detail scroll, form field, review).
    CursorDown,
    /// Moves the page cursor up.
    CursorUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Activates the highlighted item.
    Select,
    /// Leaves the detail page.
    Back,

    /// Enters search mode on the cuisines or reviews page.
    SearchMode,
    /// Printable character, routed by input mode.
    Char(char),
    /// Deletes the last character of the search term or focused field.
    Backspace,
    /// Leaves search or editing mode, or the detail page.
    Escape,

    /// Steps the category facet.
    CycleCategory,
    /// Steps the difficulty facet.
    CycleDifficulty,
    /// Steps the sort key.
    CycleSort,
    /// Restores the default listing query.
    ClearFilters,

    /// Starts editing the focused form field.
    BeginEditing,
    /// Focuses the next form field.
    NextField,
    /// Focuses the previous form field.
    PrevField,
    /// Validates and submits the active form.
    SubmitForm,
    /// Switches between the contact and suggestion forms.
    ToggleSuggestionForm,
    /// Hides the result banner.
    DismissBanner,

    /// Steps the reviews status facet.
    CycleStatusFilter,
    /// Switches between contact messages and suggestions.
    ToggleFeed,
    /// Reloads the active feed.
    RefreshFeed,
    /// Moves the highlighted message to its next status.
    AdvanceStatus,

    /// Wraps the host's answer to a dispatched request.
    ApiResponse(ApiReply),

    /// Reports granted Zellij permissions after permission request.
    PermissionsResult {
        /// Permissions granted by the user.
        granted: Vec<PermissionType>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// Whether the UI should be re-rendered, and the actions to execute in order.
///
/// # Errors
///
/// Returns errors from form mutation (an unknown focused field).
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type. Backend replies
/// get their own span parented to the span that dispatched the request.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    if let Event::ApiResponse(reply) = event {
        return Ok(handle_reply(state, reply));
    }

    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();
    let page = state.view.current_page;

    match event {
        Event::Navigate(target) => Ok((true, state.navigate(*target, None))),
        Event::CursorDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Select => handle_select(state),
        Event::Back => {
            if page != Page::CuisineDetail {
                return Ok((false, vec![]));
            }
            let target = resolve_detail(&state.catalog, &state.view).back_target();
            Ok((true, state.navigate(target, None)))
        }
        Event::SearchMode => {
            if !matches!(page, Page::Cuisines | Page::Reviews) {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search => {
                edit_search(state, |term| term.push(*c));
                Ok((true, vec![]))
            }
            InputMode::Editing => {
                state.active_form_mut().push_char(*c)?;
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search => {
                edit_search(state, |term| {
                    term.pop();
                });
                Ok((true, vec![]))
            }
            InputMode::Editing => {
                state.active_form_mut().pop_char()?;
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode {
            InputMode::Search => {
                edit_search(state, String::clear);
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Editing => {
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Normal if page == Page::CuisineDetail => {
                let target = resolve_detail(&state.catalog, &state.view).back_target();
                Ok((true, state.navigate(target, None)))
            }
            InputMode::Normal if page == Page::Contact && state.active_submit().banner.is_some() => {
                state.active_submit_mut().banner = None;
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::CycleCategory => {
            if page != Page::Cuisines {
                return Ok((false, vec![]));
            }
            let options = state.catalog.categories();
            state.query.category = state.query.category.cycled(&options);
            state.clamp_selection();
            tracing::debug!(category = ?state.query.category, "category facet changed");
            Ok((true, vec![]))
        }
        Event::CycleDifficulty => {
            if page != Page::Cuisines {
                return Ok((false, vec![]));
            }
            state.query.difficulty = state.query.difficulty.cycled(&Difficulty::ALL);
            state.clamp_selection();
            tracing::debug!(difficulty = ?state.query.difficulty, "difficulty facet changed");
            Ok((true, vec![]))
        }
        Event::CycleSort => {
            if page != Page::Cuisines {
                return Ok((false, vec![]));
            }
            state.query.sort_key = state.query.sort_key.next();
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            if page != Page::Cuisines || !state.query.has_active_filters() {
                return Ok((false, vec![]));
            }
            state.query.clear();
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::BeginEditing => {
            if page != Page::Contact {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Editing;
            state.active_submit_mut().banner = None;
            Ok((true, vec![]))
        }
        Event::NextField => {
            if page != Page::Contact {
                return Ok((false, vec![]));
            }
            state.active_form_mut().focus_next();
            Ok((true, vec![]))
        }
        Event::PrevField => {
            if page != Page::Contact {
                return Ok((false, vec![]));
            }
            state.active_form_mut().focus_prev();
            Ok((true, vec![]))
        }
        Event::SubmitForm => {
            if page != Page::Contact {
                return Ok((false, vec![]));
            }
            match state.submit_active_form() {
                Some(action) => {
                    state.input_mode = InputMode::Normal;
                    Ok((true, vec![action]))
                }
                None => Ok((true, vec![])),
            }
        }
        Event::ToggleSuggestionForm => {
            if page != Page::Contact {
                return Ok((false, vec![]));
            }
            state.form_kind = state.form_kind.toggled();
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::DismissBanner => {
            let status = match page {
                Page::Contact => state.active_submit_mut(),
                Page::Reviews => &mut state.status_update,
                _ => return Ok((false, vec![])),
            };
            Ok((status.banner.take().is_some(), vec![]))
        }
        Event::CycleStatusFilter => {
            if page != Page::Reviews {
                return Ok((false, vec![]));
            }
            match state.feed_kind {
                FeedKind::Messages => state.messages.cycle_status_filter(),
                FeedKind::Suggestions => state.suggestions.cycle_status_filter(),
            }
            Ok((true, vec![]))
        }
        Event::ToggleFeed => {
            if page != Page::Reviews {
                return Ok((false, vec![]));
            }
            state.feed_kind = state.feed_kind.toggled();
            state.input_mode = InputMode::Normal;
            let load_state = match state.feed_kind {
                FeedKind::Messages => state.messages.load_state(),
                FeedKind::Suggestions => state.suggestions.load_state(),
            };
            if matches!(load_state, LoadState::Idle | LoadState::Failed(_)) {
                Ok((true, vec![state.load_feed()]))
            } else {
                Ok((true, vec![]))
            }
        }
        Event::RefreshFeed => {
            if page != Page::Reviews {
                return Ok((false, vec![]));
            }
            Ok((true, vec![state.load_feed()]))
        }
        Event::AdvanceStatus => Ok(state
            .advance_status()
            .map_or((false, vec![]), |action| (true, vec![action]))),
        Event::PermissionsResult { granted } => {
            if !granted.contains(&PermissionType::WebAccess) {
                tracing::warn!(granted = ?granted, "web access not granted");
                return Ok((false, vec![]));
            }
            tracing::debug!("web access granted");
            if page == Page::Reviews {
                Ok((true, vec![state.load_feed()]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::ApiResponse(_) => Ok((false, vec![])),
    }
}

fn handle_reply(state: &mut AppState, reply: &ApiReply) -> (bool, Vec<Action>) {
    let span = tracing::debug_span!(
        "api_reply",
        kind = ?reply.kind(),
        request_id = ?reply.request_id(),
        status = reply.status
    );
    if let Some(trace) = reply.trace_context() {
        trace.adopt(&span);
    }
    let _entered = span.entered();

    (state.apply_reply(reply), vec![])
}

fn handle_select(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    match state.input_mode {
        InputMode::Search => {
            tracing::debug!("leaving search mode, keeping term");
            state.input_mode = InputMode::Normal;
            return Ok((true, vec![]));
        }
        InputMode::Editing => {
            state.active_form_mut().focus_next();
            return Ok((true, vec![]));
        }
        InputMode::Normal => {}
    }

    match state.view.current_page {
        Page::Home => Ok((true, state.navigate(Page::Cuisines, None))),
        Page::Cuisines => {
            let Some(id) = state.selected_record().map(|r| r.id.clone()) else {
                tracing::debug!("no cuisine selected");
                return Ok((false, vec![]));
            };
            tracing::debug!(cuisine_id = %id, "cuisine selected");
            Ok((true, state.navigate(Page::CuisineDetail, Some(&id))))
        }
        Page::CuisineDetail => {
            let target = match resolve_detail(&state.catalog, &state.view) {
                DetailView::Found(_) => return Ok((false, vec![])),
                not_found @ DetailView::NotFound { .. } => not_found.back_target(),
            };
            Ok((true, state.navigate(target, None)))
        }
        Page::Contact => {
            if state.active_submit_mut().banner.take().is_none() {
                state.input_mode = InputMode::Editing;
            }
            Ok((true, vec![]))
        }
        Page::Reviews => Ok((false, vec![])),
    }
}

/// Applies `edit` to the search term of the current page.
fn edit_search(state: &mut AppState, edit: impl FnOnce(&mut String)) {
    match (state.view.current_page, state.feed_kind) {
        (Page::Reviews, FeedKind::Messages) => state.messages.edit_search(edit),
        (Page::Reviews, FeedKind::Suggestions) => state.suggestions.edit_search(edit),
        _ => {
            edit(&mut state.query.search_term);
            state.clamp_selection();
            tracing::trace!(query = %state.query.search_term, "search query updated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiClient, ApiRequest, RequestKind, CONTEXT_GENERATION};
    use crate::app::state::{Banner, CONTACT_THANKS};
    use crate::catalog::{Catalog, Facet};
    use crate::domain::ContactStatus;
    use crate::ui::Theme;
    use std::collections::BTreeMap;

    fn state() -> AppState {
        AppState::new(
            Catalog::builtin().unwrap(),
            Theme::default(),
            ApiClient::new("http://localhost:5000/api"),
        )
    }

    fn send(state: &mut AppState, event: Event) -> Vec<Action> {
        handle_event(state, &event).unwrap().1
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            send(state, Event::Char(c));
        }
    }

    fn fill_contact(state: &mut AppState, subject: &str) {
        let form = &mut state.contact_form;
        form.set_field("name", "Ana Souza").unwrap();
        form.set_field("email", "ana@example.com").unwrap();
        form.set_field("subject", subject).unwrap();
        form.set_field("message", "Please add Brazilian cuisine.").unwrap();
    }

    fn reply_to(request: &ApiRequest, status: u16, body: &str) -> ApiReply {
        ApiReply {
            status,
            body: body.as_bytes().to_vec(),
            context: request.context.clone(),
        }
    }

    fn dispatched(actions: &[Action]) -> &ApiRequest {
        match actions {
            [Action::Dispatch(request)] => request,
            other => panic!("expected one dispatch, got {other:?}"),
        }
    }

    const MESSAGE_JSON: &str = r#"{
        "_id": "m1", "name": "Ana Souza", "email": "ana@example.com",
        "subject": "Hello", "message": "Please add Brazilian cuisine.",
        "createdAt": "2024-03-01T10:00:00Z", "status": "new"
    }"#;

    fn envelope(data: &str) -> String {
        format!(r#"{{"success": true, "data": {data}}}"#)
    }

    #[test]
    fn blank_subject_reports_only_subject_and_dispatches_nothing() {
        let mut state = state();
        send(&mut state, Event::Navigate(Page::Contact));
        fill_contact(&mut state, "   ");

        let actions = send(&mut state, Event::SubmitForm);

        assert!(actions.is_empty());
        let expected: BTreeMap<String, String> =
            [("subject".to_string(), "Subject is required".to_string())].into();
        assert_eq!(state.contact_form.state().errors, expected);
        assert!(!state.contact_submit.in_flight);
    }

    #[test]
    fn duplicate_submit_is_ignored_while_in_flight() {
        let mut state = state();
        send(&mut state, Event::Navigate(Page::Contact));
        fill_contact(&mut state, "Hello");

        let first = send(&mut state, Event::SubmitForm);
        let request = dispatched(&first);
        assert_eq!(request.kind(), Some(RequestKind::SubmitContact));
        assert!(request.url.ends_with("/contact"));

        assert!(send(&mut state, Event::SubmitForm).is_empty());
    }

    #[test]
    fn successful_submit_resets_form_and_thanks() {
        let mut state = state();
        send(&mut state, Event::Navigate(Page::Contact));
        fill_contact(&mut state, "Hello");
        let actions = send(&mut state, Event::SubmitForm);
        let reply = reply_to(dispatched(&actions), 201, &envelope(MESSAGE_JSON));

        send(&mut state, Event::ApiResponse(reply));

        assert!(!state.contact_submit.in_flight);
        assert_eq!(state.contact_submit.banner, Some(Banner::Success(CONTACT_THANKS.to_string())));
        assert_eq!(state.contact_form.value("subject"), Some(""));
    }

    #[test]
    fn failed_submit_keeps_values_and_shows_backend_message() {
        let mut state = state();
        send(&mut state, Event::Navigate(Page::Contact));
        fill_contact(&mut state, "Hello");
        let actions = send(&mut state, Event::SubmitForm);
        let reply = reply_to(
            dispatched(&actions),
            400,
            r#"{"success": false, "message": "Email already used today"}"#,
        );

        send(&mut state, Event::ApiResponse(reply));

        assert_eq!(
            state.contact_submit.banner,
            Some(Banner::Failure("Email already used today".to_string()))
        );
        assert_eq!(state.contact_form.value("subject"), Some("Hello"));

        send(&mut state, Event::Select);
        assert_eq!(state.contact_submit.banner, None);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn editing_routes_characters_to_focused_field() {
        let mut state = state();
        send(&mut state, Event::Navigate(Page::Contact));
        send(&mut state, Event::BeginEditing);
        type_text(&mut state, "Lia");
        send(&mut state, Event::Backspace);
        send(&mut state, Event::NextField);
        type_text(&mut state, "lia@x.io");

        assert_eq!(state.contact_form.value("name"), Some("Li"));
        assert_eq!(state.contact_form.value("email"), Some("lia@x.io"));
    }

    #[test]
    fn unknown_detail_id_leads_back_to_cuisines() {
        let mut state = state();
        state.navigate(Page::CuisineDetail, Some("404"));

        let vm = state.compute_viewmodel(24, 80);
        let crate::ui::viewmodel::PageBody::Empty(empty) = vm.body else {
            panic!("expected not-found state");
        };
        assert_eq!(empty.message, "Cuisine Not Found");

        send(&mut state, Event::Select);
        assert_eq!(state.view.current_page, Page::Cuisines);
    }

    #[test]
    fn selecting_a_cuisine_opens_its_detail() {
        let mut state = state();
        send(&mut state, Event::Navigate(Page::Cuisines));
        send(&mut state, Event::SearchMode);
        type_text(&mut state, "japan");
        send(&mut state, Event::Select);
        send(&mut state, Event::Select);

        assert_eq!(state.view.current_page, Page::CuisineDetail);
        assert_eq!(state.view.selected_id.as_deref(), Some("2"));

        send(&mut state, Event::Back);
        assert_eq!(state.view.current_page, Page::Cuisines);
        assert_eq!(state.query.search_term, "japan");
    }

    #[test]
    fn escape_in_search_clears_term() {
        let mut state = state();
        send(&mut state, Event::Navigate(Page::Cuisines));
        send(&mut state, Event::SearchMode);
        type_text(&mut state, "zz");
        assert!(state.results().is_empty());

        send(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.results().len(), 8);
    }

    #[test]
    fn facet_cycling_narrows_listing() {
        let mut state = state();
        send(&mut state, Event::Navigate(Page::Cuisines));
        send(&mut state, Event::CycleCategory);
        assert_eq!(state.query.category, Facet::Only("European".to_string()));
        assert!(state.results().iter().all(|r| r.category == "European"));

        send(&mut state, Event::CycleDifficulty);
        assert_eq!(state.query.difficulty, Facet::Only(Difficulty::Easy));

        send(&mut state, Event::ClearFilters);
        assert!(!state.query.has_active_filters());
    }

    #[test]
    fn stale_feed_reply_is_discarded_after_leaving_reviews() {
        let mut state = state();
        let first = send(&mut state, Event::Navigate(Page::Reviews));
        let stale = reply_to(dispatched(&first), 200, r#"{"success": true, "data": []}"#);

        send(&mut state, Event::Navigate(Page::Home));
        let second = send(&mut state, Event::Navigate(Page::Reviews));
        let fresh_request = dispatched(&second).clone();

        let (changed, _) = handle_event(&mut state, &Event::ApiResponse(stale)).unwrap();
        assert!(!changed);
        assert_eq!(state.messages.load_state(), &LoadState::Loading);

        let fresh = reply_to(&fresh_request, 200, r#"{"success": true, "data": []}"#);
        send(&mut state, Event::ApiResponse(fresh));
        assert_eq!(state.messages.load_state(), &LoadState::Loaded);
        assert_ne!(fresh_request.context.get(CONTEXT_GENERATION), Some(&"1".to_string()));
    }

    #[test]
    fn advance_status_updates_message() {
        let mut state = state();
        let load = send(&mut state, Event::Navigate(Page::Reviews));
        let list = envelope(&format!("[{MESSAGE_JSON}]"));
        send(&mut state, Event::ApiResponse(reply_to(dispatched(&load), 200, &list)));
        assert_eq!(state.messages.entries().len(), 1);

        let update = send(&mut state, Event::AdvanceStatus);
        let request = dispatched(&update).clone();
        assert!(request.url.ends_with("/contact/m1/status"));
        assert!(send(&mut state, Event::AdvanceStatus).is_empty());

        let body = envelope(&MESSAGE_JSON.replace("\"new\"", "\"read\""));
        send(&mut state, Event::ApiResponse(reply_to(&request, 200, &body)));
        assert_eq!(state.messages.entries()[0].status, ContactStatus::Read);
        assert!(!state.status_update.in_flight);
    }

    #[test]
    fn failed_status_update_banner_dismisses_on_reviews() {
        let mut state = state();
        send(&mut state, Event::Navigate(Page::Reviews));
        state.status_update.banner = Some(Banner::Failure("Failed to update status".to_string()));

        let (dirty, actions) = handle_event(&mut state, &Event::DismissBanner).unwrap();
        assert!(dirty && actions.is_empty());
        assert_eq!(state.status_update.banner, None);

        let (dirty, _) = handle_event(&mut state, &Event::DismissBanner).unwrap();
        assert!(!dirty);
    }

    #[test]
    fn web_access_grant_reloads_reviews() {
        let mut state = state();
        send(&mut state, Event::Navigate(Page::Reviews));

        let actions = send(
            &mut state,
            Event::PermissionsResult {
                granted: vec![PermissionType::WebAccess],
            },
        );
        assert_eq!(dispatched(&actions).kind(), Some(RequestKind::ListContacts));
    }
}
