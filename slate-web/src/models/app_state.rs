use shared::models::User;
use yewdux::Store;

/// Global UI state: the session user, if any.
///
/// UI components read this through selectors; all writes go through the
/// session facade.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<User>,
}
