use super::forms::FormDescription;
use super::redirect::resolve_redirect;
use campus_core::{Choice, CurrentLocation, Navigator};
use serde::{Deserialize, Serialize};

const DEFAULT_DASHBOARD_URL: &str = "/dashboard";

/// Form the page opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Register,
    PasswordReset,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [Self::Login, Self::Register, Self::PasswordReset];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::PasswordReset => "password-reset",
        }
    }
}

impl From<AccessMode> for FormKind {
    fn from(mode: AccessMode) -> Self {
        match mode {
            AccessMode::Login => Self::Login,
            AccessMode::Register => Self::Register,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthProvider {
    pub name: String,
    #[serde(default)]
    pub icon_class: Option<String>,
    pub login_url: String,
    pub register_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyAuth {
    /// Provider the user is currently signing in with, if any.
    #[serde(default)]
    pub current_provider: Option<String>,
    #[serde(default)]
    pub providers: Vec<AuthProvider>,
    /// Where to resume the third-party pipeline after local sign-in.
    #[serde(default)]
    pub finish_auth_url: Option<String>,
}

impl ThirdPartyAuth {
    pub fn provider(&self, name: &str) -> Option<&AuthProvider> {
        self.providers.iter().find(|provider| provider.name == name)
    }

    pub fn is_pipeline_running(&self) -> bool {
        self.finish_auth_url
            .as_deref()
            .is_some_and(|url| !url.is_empty())
    }
}

/// Everything the sign-in page is initialised with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessOptions {
    #[serde(default)]
    pub mode: AccessMode,
    #[serde(default)]
    pub third_party_auth: ThirdPartyAuth,
    /// Redirect target taken from the `?next=` query parameter. Untrusted.
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub platform_name: String,
    pub login_form_desc: FormDescription,
    pub registration_form_desc: FormDescription,
    pub password_reset_form_desc: FormDescription,
}

/// Switches between the login, registration and password reset forms.
///
/// Exactly one form is visible at any time. The login/registration toggle is
/// hidden while the password reset form is shown.
pub struct AccessView<N, L> {
    options: AccessOptions,
    active_form: Choice<FormKind>,
    toggle_visible: bool,
    dashboard_url: String,
    navigator: N,
    location: L,
}

impl<N: Navigator, L: CurrentLocation> AccessView<N, L> {
    pub fn new(options: AccessOptions, navigator: N, location: L) -> Self {
        Self {
            active_form: Choice::new(options.mode.into()),
            toggle_visible: true,
            dashboard_url: DEFAULT_DASHBOARD_URL.to_string(),
            options,
            navigator,
            location,
        }
    }

    /// Fallback redirect target after authentication.
    pub fn with_dashboard_url(mut self, url: impl Into<String>) -> Self {
        self.dashboard_url = url.into();
        self
    }

    pub fn active_form(&self) -> FormKind {
        self.active_form.active()
    }

    pub fn is_visible(&self, kind: FormKind) -> bool {
        self.active_form.is_active(kind)
    }

    pub fn visible_forms(&self) -> Vec<FormKind> {
        FormKind::ALL
            .into_iter()
            .filter(|kind| self.is_visible(*kind))
            .collect()
    }

    /// Whether the login/registration switcher is shown.
    pub fn is_toggle_visible(&self) -> bool {
        self.toggle_visible
    }

    pub fn platform_name(&self) -> &str {
        &self.options.platform_name
    }

    pub fn third_party_auth(&self) -> &ThirdPartyAuth {
        &self.options.third_party_auth
    }

    pub fn form_description(&self, kind: FormKind) -> &FormDescription {
        match kind {
            FormKind::Login => &self.options.login_form_desc,
            FormKind::Register => &self.options.registration_form_desc,
            FormKind::PasswordReset => &self.options.password_reset_form_desc,
        }
    }

    /// Show the selected primary form, hiding the other one and the password
    /// reset form.
    pub fn toggle_form(&mut self, selected: AccessMode) {
        let kind = FormKind::from(selected);
        self.toggle_visible = true;

        if self.active_form.select(kind) {
            tracing::debug!(form = kind.slug(), "Switched access form");
            self.navigator.push_history(&self.history_url(kind));
        }
    }

    /// Show the password reset form in place of the login/registration forms.
    pub fn reset_password(&mut self) {
        self.toggle_visible = false;
        self.active_form.select(FormKind::PasswordReset);
        tracing::debug!("Showing password reset form");
    }

    /// Where the user would be sent if authentication completed now.
    pub fn redirect_target(&self) -> String {
        resolve_redirect(
            self.options.third_party_auth.finish_auth_url.as_deref(),
            self.options.next_url.as_deref(),
            self.location.current_url(),
            &self.dashboard_url,
        )
    }

    /// Handle successful sign-in or registration by leaving the page.
    ///
    /// Returns the URL the navigator was sent to.
    pub fn auth_complete(&self, source: AccessMode) -> String {
        let target = self.redirect_target();
        tracing::info!(
            form = FormKind::from(source).slug(),
            redirect_to = %target,
            "Authentication complete, redirecting"
        );
        self.navigator.redirect(&target);
        target
    }

    fn history_url(&self, kind: FormKind) -> String {
        match self.location.current_url().query() {
            Some(query) => format!("/{}?{}", kind.slug(), query),
            None => format!("/{}", kind.slug()),
        }
    }
}
