//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches the host. It returns a `Vec<Action>` and
//! the plugin shim executes each one in order. Network traffic is the only
//! real side effect: a [`Action::Dispatch`] leaves now and its answer comes
//! back later as [`Event::ApiResponse`](crate::app::Event::ApiResponse).
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::api::ApiClient;
//! use world_cuisines::app::Action;
//!
//! let client = ApiClient::new("http://localhost:5000/api");
//! let actions = vec![Action::Dispatch(client.list_contacts())];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::api::ApiRequest;

/// Commands the plugin runtime executes after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Sends a request to the backend through the host.
    ///
    /// The request's context map is echoed back with the reply so the
    /// handler can route it.
    Dispatch(ApiRequest),
}
