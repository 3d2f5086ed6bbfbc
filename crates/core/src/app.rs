//! Application shell state.
//!
//! The root orchestrator: which screen is showing, who is signed in,
//! which patient is open, and the cross-screen shortcuts (the dashboard
//! tiles that jump into a pre-filtered directory, the detail view's
//! jump into the composer). Everything here resets on logout.

use serde::{Deserialize, Serialize};

use jemine_types::{EmailAddress, NonEmptyText};

use crate::config::{Settings, UserProfile};
use crate::directory::StatusFilter;
use crate::error::{DashboardError, DashboardResult};
use crate::i18n::{translations, Translations};

/// Minimum accepted password length at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Which top-level screen is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppView {
    #[default]
    Landing,
    Auth,
    App,
}

/// Mode of the auth screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Navigation tabs inside the signed-in app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Dashboard,
    Patients,
    Communication,
    Analytics,
    Settings,
}

/// A submitted signup form, prior to validation.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validated signup identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupDetails {
    pub name: NonEmptyText,
    pub email: EmailAddress,
}

impl SignupForm {
    /// Validates the form.
    ///
    /// # Errors
    ///
    /// Mismatched passwords, passwords shorter than
    /// [`MIN_PASSWORD_LEN`], blank names, and malformed email addresses
    /// are each rejected with their own error.
    pub fn validate(&self) -> DashboardResult<SignupDetails> {
        if self.password != self.confirm_password {
            return Err(DashboardError::PasswordMismatch);
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(DashboardError::PasswordTooShort);
        }
        let name = NonEmptyText::new(&self.name)?;
        let email = EmailAddress::parse(&self.email)?;
        Ok(SignupDetails { name, email })
    }
}

/// Root navigation and session state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub view: AppView,
    pub auth_mode: AuthMode,
    pub active_tab: Tab,
    /// Patient open in the detail view, when on the Patients tab.
    pub selected_patient_id: Option<String>,
    /// Filter the directory should open with, set by dashboard tiles.
    pub pending_directory_filter: Option<StatusFilter>,
    /// Patient the composer should pre-select, set from the detail view.
    pub pending_composer_target: Option<String>,
    pub settings: Settings,
    pub profile: UserProfile,
}

impl AppState {
    pub fn open_auth(&mut self, mode: AuthMode) {
        self.view = AppView::Auth;
        self.auth_mode = mode;
    }

    /// Any credentials are accepted; there is no account store.
    pub fn login(&mut self) {
        self.view = AppView::App;
        self.active_tab = Tab::Dashboard;
    }

    /// Validates the form and, on success, signs in.
    pub fn signup(&mut self, form: &SignupForm) -> DashboardResult<SignupDetails> {
        let details = form.validate()?;
        self.view = AppView::App;
        self.active_tab = Tab::Dashboard;
        Ok(details)
    }

    /// Returns to the landing screen and discards all session state.
    pub fn logout(&mut self) {
        *self = AppState::default();
    }

    /// Sidebar navigation. Entering the Patients tab starts from the
    /// unfiltered directory with no detail view open.
    pub fn set_tab(&mut self, tab: Tab) {
        if tab == Tab::Patients {
            self.selected_patient_id = None;
            self.pending_directory_filter = None;
        }
        self.active_tab = tab;
    }

    pub fn select_patient(&mut self, id: impl Into<String>) {
        self.active_tab = Tab::Patients;
        self.selected_patient_id = Some(id.into());
    }

    pub fn close_patient_detail(&mut self) {
        self.selected_patient_id = None;
    }

    /// Dashboard shortcut: open the directory filtered to critical
    /// patients.
    pub fn view_critical_patients(&mut self) {
        self.active_tab = Tab::Patients;
        self.selected_patient_id = None;
        self.pending_directory_filter = Some(StatusFilter::critical());
    }

    /// Detail-view shortcut: open the composer with this patient
    /// pre-selected.
    pub fn navigate_to_communication(&mut self, patient_id: impl Into<String>) {
        self.active_tab = Tab::Communication;
        self.selected_patient_id = None;
        self.pending_composer_target = Some(patient_id.into());
    }

    /// Consumes the directory deep-link filter, if one is pending.
    pub fn take_directory_filter(&mut self) -> Option<StatusFilter> {
        self.pending_directory_filter.take()
    }

    /// Consumes the composer pre-selection, if one is pending.
    pub fn take_composer_target(&mut self) -> Option<String> {
        self.pending_composer_target.take()
    }

    /// Label table for the currently selected interface language.
    pub fn translations(&self) -> &'static Translations {
        translations(self.settings.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn valid_form() -> SignupForm {
        SignupForm {
            name: "Adaeze Obi".to_string(),
            email: "adaeze@clinic.example".to_string(),
            password: "secret99".to_string(),
            confirm_password: "secret99".to_string(),
        }
    }

    #[test]
    fn signup_rejects_mismatched_passwords() {
        let mut state = AppState::default();
        let form = SignupForm {
            confirm_password: "different".to_string(),
            ..valid_form()
        };
        let err = state.signup(&form).expect_err("mismatch");
        assert_eq!(
            err.to_string(),
            "Passwords do not match. Please verify your entries."
        );
        assert_eq!(state.view, AppView::Landing);
    }

    #[test]
    fn signup_rejects_short_passwords() {
        let mut state = AppState::default();
        let form = SignupForm {
            password: "abc12".to_string(),
            confirm_password: "abc12".to_string(),
            ..valid_form()
        };
        let err = state.signup(&form).expect_err("too short");
        assert_eq!(err.to_string(), "Password must be at least 6 characters.");
    }

    #[test]
    fn signup_success_enters_the_app() {
        let mut state = AppState::default();
        let details = state.signup(&valid_form()).expect("valid form");
        assert_eq!(details.email.as_str(), "adaeze@clinic.example");
        assert_eq!(state.view, AppView::App);
        assert_eq!(state.active_tab, Tab::Dashboard);
    }

    #[test]
    fn logout_resets_everything() {
        let mut state = AppState::default();
        state.login();
        state.select_patient("P001");
        state.settings.language = Language::Swahili;

        state.logout();

        assert_eq!(state.view, AppView::Landing);
        assert!(state.selected_patient_id.is_none());
        assert_eq!(state.settings.language, Language::English);
    }

    #[test]
    fn returning_to_the_patients_tab_starts_clean() {
        let mut state = AppState::default();
        state.login();
        state.select_patient("P002");
        assert_eq!(state.active_tab, Tab::Patients);

        state.set_tab(Tab::Analytics);
        state.set_tab(Tab::Patients);
        assert!(state.selected_patient_id.is_none());

        state.view_critical_patients();
        state.set_tab(Tab::Patients);
        assert!(state.pending_directory_filter.is_none());
    }

    #[test]
    fn critical_shortcut_sets_a_pending_filter() {
        let mut state = AppState::default();
        state.login();
        state.view_critical_patients();
        assert_eq!(state.active_tab, Tab::Patients);
        assert_eq!(state.take_directory_filter(), Some(StatusFilter::critical()));
        assert_eq!(state.take_directory_filter(), None);
    }

    #[test]
    fn communication_shortcut_preselects_the_patient() {
        let mut state = AppState::default();
        state.login();
        state.select_patient("P003");
        state.navigate_to_communication("P003");
        assert_eq!(state.active_tab, Tab::Communication);
        assert!(state.selected_patient_id.is_none());
        assert_eq!(state.take_composer_target().as_deref(), Some("P003"));
    }
}
