use crate::domain::user_profile::NAME;
use crate::domain::{Document, Identity, UserProfile};
use crate::error::{AppError, ValidationError};
use crate::notice::Notice;
use crate::providers::with_timeout;
use crate::screens::{MIN_PASSWORD_LENGTH, Outcome, Route, Services};
use tracing::{error, info, instrument, warn};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditorState {
    Viewing,
    Editing,
    Submitting,
}

#[derive(Clone, Default, Debug)]
pub struct ProfileForm {
    pub name: String,
    pub current_password: String,
    pub new_password: String,
}

impl ProfileForm {
    fn changes_password(&self) -> bool {
        !self.new_password.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.changes_password() {
            if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
                return Err(ValidationError::NewPasswordTooShort(MIN_PASSWORD_LENGTH));
            }

            if self.current_password.is_empty() {
                return Err(ValidationError::MissingCurrentPassword);
            }
        }

        Ok(())
    }
}

/// Account settings: shows the profile and edits the name and password.
#[derive(Debug)]
pub struct SettingsScreen {
    services: Services,
    state: EditorState,
    name: String,
    email: String,
}

enum SaveError {
    Reauthentication(AppError),
    Update(AppError),
}

impl SettingsScreen {
    pub fn new(services: Services) -> Self {
        SettingsScreen {
            services,
            state: EditorState::Viewing,
            name: String::new(),
            email: String::new(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Outcome {
        let Some(identity) = self.services.identity.current_identity().await else {
            return Outcome::route(Route::Login);
        };

        let request = self.services.store.get_document(&self.services.users_collection, &identity.uid);
        match with_timeout(self.services.request_timeout, request).await {
            Ok(document) => {
                self.name = UserProfile::from_document(&document).name;
                self.email = identity.email;
                Outcome::none()
            }
            Err(AppError::NotFound) => {
                self.email = identity.email;
                Outcome::none()
            }
            Err(error) => {
                warn!(uid = identity.uid, "⚠️ Unable to fetch user data: {}", error);
                Outcome::notice(Notice::profile_fetch_failed(&error))
            }
        }
    }

    pub fn edit(&mut self) {
        if self.state == EditorState::Viewing {
            self.state = EditorState::Editing;
        }
    }

    pub fn cancel_edit(&mut self) {
        if self.state == EditorState::Editing {
            self.state = EditorState::Viewing;
        }
    }

    /// Saves the form. Outside of editing this only switches to editing, like the screen's single button.
    #[instrument(skip_all)]
    pub async fn save(&mut self, form: &ProfileForm) -> Outcome {
        if self.state != EditorState::Editing {
            self.edit();
            return Outcome::none();
        }

        let Some(identity) = self.services.identity.current_identity().await else {
            return Outcome::notice(Notice::profile_update_failed(&AppError::NotAuthenticated)).and_route(Route::Login);
        };

        if let Err(error) = form.validate() {
            return Outcome::notice(Notice::error(&error.to_string()));
        }

        self.state = EditorState::Submitting;
        let result = self.submit(&identity, form).await;

        match result {
            Ok(()) => {
                self.name = form.name.clone();
                self.state = EditorState::Viewing;
                info!(uid = identity.uid, "✅ Profile updated");
                Outcome::notice(Notice::success("Profile updated successfully"))
            }
            Err(SaveError::Reauthentication(error)) => {
                self.state = EditorState::Editing;
                Outcome::notice(Notice::reauthentication_failed(&error))
            }
            Err(SaveError::Update(error)) => {
                self.state = EditorState::Editing;
                warn!(uid = identity.uid, "⚠️ Profile update failed: {}", error);
                Outcome::notice(Notice::profile_update_failed(&error))
            }
        }
    }

    /// Verifies the current password before writing anything, then writes the name and changes
    /// the password. A failed password change restores the previous name.
    async fn submit(&self, identity: &Identity, form: &ProfileForm) -> Result<(), SaveError> {
        let timeout = self.services.request_timeout;

        if form.changes_password() {
            let verified = with_timeout(timeout, self.services.identity.reauthenticate(identity, &form.current_password))
                .await
                .map_err(SaveError::Reauthentication)?;
            if !verified {
                return Err(SaveError::Reauthentication(AppError::AuthInvalidCredential));
            }
        }

        self.write_name(identity, &form.name).await.map_err(SaveError::Update)?;

        if form.changes_password() {
            let change = with_timeout(timeout, self.services.identity.change_password(identity, &form.new_password)).await;
            if let Err(change_error) = change {
                if let Err(rollback_error) = self.write_name(identity, &self.name).await {
                    error!(uid = identity.uid, "❌ Unable to restore the previous name: {}", rollback_error);
                }
                return Err(SaveError::Update(change_error));
            }
        }

        Ok(())
    }

    async fn write_name(&self, identity: &Identity, name: &str) -> Result<(), AppError> {
        let fields = Document::new().with(NAME, name);
        let request = self.services.store.update_document(&self.services.users_collection, &identity.uid, &fields);
        with_timeout(self.services.request_timeout, request).await
    }

    #[instrument(skip(self))]
    pub async fn sign_out(&mut self) -> Outcome {
        if let Err(error) = with_timeout(self.services.request_timeout, self.services.identity.sign_out()).await {
            warn!("⚠️ Sign out failed: {}", error);
            return Outcome::notice(Notice::sign_out_failed(&error));
        }

        if let Err(error) = self.services.tokens.clear().await {
            warn!("⚠️ Unable to remove the stored user token: {}", error);
        }

        self.state = EditorState::Viewing;
        Outcome::route(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::IdentityProvider;
    use crate::providers::fakes::{FakeDocumentStore, FakeIdentityProvider};
    use crate::screens::testing::services;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use test_log::test;

    fn identity() -> FakeIdentityProvider {
        FakeIdentityProvider::new()
            .with_account("uid-1", "jane@example.com", "secret1")
            .signed_in_as("jane@example.com")
    }

    fn store() -> FakeDocumentStore {
        FakeDocumentStore::new().with_document("users", "uid-1", Document::new().with(NAME, "Jane").with("email", "jane@example.com"))
    }

    pub(super) fn form(name: &str, current_password: &str, new_password: &str) -> ProfileForm {
        ProfileForm {
            name: name.to_string(),
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        }
    }

    async fn editing(identity: FakeIdentityProvider, store: FakeDocumentStore) -> (SettingsScreen, Arc<FakeIdentityProvider>, Arc<FakeDocumentStore>) {
        let (services, identity, store) = services(identity, store);
        let mut screen = SettingsScreen::new(services);
        screen.load().await;
        screen.edit();
        (screen, identity, store)
    }

    fn stored_name(store: &FakeDocumentStore) -> Option<String> {
        store.document("users", "uid-1").and_then(|d| d.get_str(NAME).map(str::to_string))
    }

    #[test(tokio::test)]
    async fn load_shows_the_name_and_email() {
        let (services, _, _) = services(identity(), store());
        let mut screen = SettingsScreen::new(services);

        assert_eq!(screen.load().await, Outcome::none());
        assert_eq!(screen.name(), "Jane");
        assert_eq!(screen.email(), "jane@example.com");
        assert_eq!(screen.state(), EditorState::Viewing);
    }

    #[test(tokio::test)]
    async fn load_redirects_to_login_without_identity() {
        let (services, _, _) = services(FakeIdentityProvider::new(), store());
        let mut screen = SettingsScreen::new(services);

        assert_eq!(screen.load().await, Outcome::route(Route::Login));
    }

    #[test(tokio::test)]
    async fn save_outside_editing_starts_editing() {
        let (services, _, store) = services(identity(), store());
        let mut screen = SettingsScreen::new(services);

        let outcome = screen.save(&form("Janet", "", "")).await;

        assert_eq!(outcome, Outcome::none());
        assert_eq!(screen.state(), EditorState::Editing);
        assert!(store.calls().is_empty());
    }

    #[test(tokio::test)]
    async fn save_updates_the_name() {
        let (mut screen, _, store) = editing(identity(), store()).await;

        let outcome = screen.save(&form("Janet", "", "")).await;

        assert_eq!(outcome, Outcome::notice(Notice::success("Profile updated successfully")));
        assert_eq!(screen.state(), EditorState::Viewing);
        assert_eq!(screen.name(), "Janet");
        assert_eq!(stored_name(&store), Some("Janet".to_string()));
    }

    #[test(tokio::test)]
    async fn save_changes_the_password_after_reauthenticating() {
        let (mut screen, identity, _) = editing(identity(), store()).await;

        let outcome = screen.save(&form("Jane", "secret1", "newsecret")).await;

        assert_eq!(outcome, Outcome::notice(Notice::success("Profile updated successfully")));
        assert_eq!(identity.password_of("jane@example.com"), Some("newsecret".to_string()));
    }

    #[test(tokio::test)]
    async fn save_writes_nothing_when_the_current_password_is_wrong() {
        let (mut screen, identity, store) = editing(identity(), store()).await;

        let outcome = screen.save(&form("Janet", "wrong", "newsecret")).await;

        assert_eq!(outcome, Outcome::notice(Notice::error("Incorrect password. Please try again.")));
        assert_eq!(screen.state(), EditorState::Editing);
        assert_eq!(stored_name(&store), Some("Jane".to_string()));
        assert_eq!(identity.password_of("jane@example.com"), Some("secret1".to_string()));
    }

    #[test(tokio::test)]
    async fn save_restores_the_name_when_the_password_change_fails() {
        let (mut screen, _, store) = editing(identity().failing("change_password", AppError::AuthRequiresRecentLogin), store()).await;

        let outcome = screen.save(&form("Janet", "secret1", "newsecret")).await;

        assert_eq!(outcome, Outcome::notice(Notice::error("Please log in again to update your profile")));
        assert_eq!(screen.state(), EditorState::Editing);
        assert_eq!(screen.name(), "Jane");
        assert_eq!(stored_name(&store), Some("Jane".to_string()));
        assert_eq!(store.calls(), vec!["get_document", "update_document", "update_document"]);
    }

    #[test(tokio::test)]
    async fn save_reports_a_failed_name_write() {
        let (mut screen, identity, _) = editing(identity(), store().failing("update_document", AppError::Unknown("offline".to_string()))).await;

        let outcome = screen.save(&form("Janet", "secret1", "newsecret")).await;

        assert_eq!(outcome, Outcome::notice(Notice::error("Failed to update profile")));
        assert!(!identity.calls().contains(&"change_password"));
    }

    #[test(tokio::test)]
    async fn save_rejects_an_invalid_form_without_calls() {
        let (mut screen, identity, _) = editing(identity(), store()).await;

        let outcome = screen.save(&form("Jane", "", "newsecret")).await;

        assert_eq!(outcome, Outcome::notice(Notice::error("Please enter your current password")));
        assert_eq!(screen.state(), EditorState::Editing);
        assert!(identity.calls().is_empty());
    }

    #[test(tokio::test)]
    async fn sign_out_routes_to_login() {
        let (services, identity, _) = services(identity(), store());
        let tokens = services.tokens.clone();
        tokens.save("token-uid-1").await.unwrap();
        let mut screen = SettingsScreen::new(services);

        assert_eq!(screen.sign_out().await, Outcome::route(Route::Login));
        assert_eq!(identity.current_identity().await, None);
        assert_eq!(tokens.load().await.unwrap(), None);
    }

    #[test(tokio::test)]
    async fn sign_out_failure_is_reported() {
        let (services, _, _) = services(identity().failing("sign_out", AppError::Unknown("offline".to_string())), store());
        let mut screen = SettingsScreen::new(services);

        assert_eq!(screen.sign_out().await, Outcome::notice(Notice::error("Failed to sign out")));
    }
}
