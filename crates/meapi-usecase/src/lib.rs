//! # Me-API Use Case Layer
//!
//! The fetch views, the notification toast and the shell that composes them.
//! Views are plain state machines: starting a load returns a [`Fetch`] that
//! the caller drives, and the result comes back through `complete`.
//!
//! ```text
//! Shell
//!  ├─ ProfileView      GET /profile/
//!  ├─ ProjectListView  GET /projects/?skill=
//!  ├─ SearchView       GET /search/?q=
//!  └─ Toast            3s auto-dismiss
//! ```

pub mod fetch;
pub mod notification;
pub mod profile_view;
pub mod project_list_view;
pub mod search_view;
pub mod shell;

#[cfg(test)]
mod test_support;

pub use meapi_domain;

pub use fetch::{Completed, Connection, Fetch, FetchFuture};
pub use notification::{DismissCallback, Toast, AUTO_DISMISS_AFTER};
pub use profile_view::{ProfilePanel, ProfileView};
pub use project_list_view::{ProjectListPanel, ProjectListView};
pub use search_view::{SearchPanel, SearchView};
pub use shell::{Shell, ShellEvent, PROFILE_LOADED, SEARCH_COMPLETED};
