//! Ephemeral UI session state: login, navigation, modal, and theme.
//!
//! Nothing here survives the process; the store never depends on it.

use crate::types::SubscriptionId;

/// Main views reachable from the navigation header.
///
/// The detail view carries the selected id, so navigating anywhere else
/// drops the selection by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    Subscriptions,
    Settings,
    SubscriptionDetail(SubscriptionId),
}

/// Modal dialogs. At most one is open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    AddSubscription,
    ReminderSettings,
}

/// Color theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Per-process UI session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    logged_in: bool,
    view: View,
    modal: Option<Modal>,
    theme: Theme,
}

impl Session {
    /// A fresh session: logged out, dashboard, no modal, light theme.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Login ---

    /// Any login action succeeds; there is no credential check.
    pub fn log_in(&mut self) {
        self.logged_in = true;
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    // --- Navigation ---

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Switch the main view.
    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// Open the detail view for a subscription.
    pub fn select_subscription(&mut self, id: SubscriptionId) {
        self.view = View::SubscriptionDetail(id);
    }

    /// The id shown by the detail view, if that is where we are.
    pub fn selected_subscription(&self) -> Option<&SubscriptionId> {
        match &self.view {
            View::SubscriptionDetail(id) => Some(id),
            _ => None,
        }
    }

    /// React to a deletion: if the deleted subscription is the one being
    /// viewed, fall back to the dashboard.
    pub fn subscription_deleted(&mut self, id: &SubscriptionId) {
        if self.selected_subscription() == Some(id) {
            self.view = View::Dashboard;
        }
    }

    // --- Modals ---

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    /// Open a modal, implicitly closing any other.
    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    // --- Theme ---

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> SubscriptionId {
        SubscriptionId::new(s)
    }

    #[test]
    fn test_fresh_session() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.view(), &View::Dashboard);
        assert_eq!(session.modal(), None);
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn test_login_lands_on_dashboard() {
        let mut session = Session::new();
        session.log_in();
        assert!(session.is_logged_in());
        assert_eq!(session.view(), &View::Dashboard);
    }

    #[test]
    fn test_navigation_drops_selection() {
        let mut session = Session::new();
        session.select_subscription(id("2"));
        assert_eq!(session.selected_subscription(), Some(&id("2")));

        session.navigate(View::Settings);
        assert_eq!(session.selected_subscription(), None);
    }

    #[test]
    fn test_delete_of_viewed_subscription_forces_dashboard() {
        let mut session = Session::new();
        session.select_subscription(id("2"));

        session.subscription_deleted(&id("2"));
        assert_eq!(session.view(), &View::Dashboard);
    }

    #[test]
    fn test_delete_of_other_subscription_keeps_view() {
        let mut session = Session::new();
        session.select_subscription(id("2"));

        session.subscription_deleted(&id("3"));
        assert_eq!(session.view(), &View::SubscriptionDetail(id("2")));
    }

    #[test]
    fn test_at_most_one_modal() {
        let mut session = Session::new();
        session.open_modal(Modal::AddSubscription);
        session.open_modal(Modal::ReminderSettings);
        assert_eq!(session.modal(), Some(Modal::ReminderSettings));

        session.close_modal();
        assert_eq!(session.modal(), None);
    }

    #[test]
    fn test_theme_toggle() {
        let mut session = Session::new();
        session.toggle_theme();
        assert_eq!(session.theme(), Theme::Dark);
        session.toggle_theme();
        assert_eq!(session.theme(), Theme::Light);
    }
}
