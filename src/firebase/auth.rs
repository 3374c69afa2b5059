use crate::app_config::AppConfig;
use crate::domain::Identity;
use crate::error::AppError;
use crate::firebase::error_response::auth_error;
use crate::providers::IdentityProvider;
use crate::session::Session;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Identity provider backed by the Identity Toolkit REST API.
#[derive(Debug)]
pub struct FirebaseAuth {
    client: Client,
    base_url: String,
    session: Session,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePasswordRequest<'a> {
    id_token: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    id_token: String,
    local_id: String,
    email: Option<String>,
}

impl FirebaseAuth {
    pub fn new(client: Client, config: &AppConfig, session: Session) -> Self {
        FirebaseAuth {
            client,
            base_url: format!("{}/v1", config.firebase().auth_url().trim_end_matches('/')),
            session,
        }
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned + Send>(&self, endpoint: &str, body: &B) -> Result<T, AppError> {
        let response = self.client.post(format!("{}/accounts:{}", self.base_url, endpoint)).json(body).send().await?;

        if !response.status().is_success() {
            return Err(auth_error(response).await);
        }

        Ok(response.json::<T>().await?)
    }

    async fn password_request(&self, endpoint: &str, email: &str, password: &str) -> Result<Identity, AppError> {
        let request = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: AccountResponse = self.post(endpoint, &request).await?;

        Ok(Identity {
            uid: response.local_id,
            email: response.email.unwrap_or_else(|| email.to_string()),
            id_token: response.id_token,
        })
    }
}

#[async_trait]
impl IdentityProvider for FirebaseAuth {
    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AppError> {
        debug!("Signing in...");
        let identity = self.password_request("signInWithPassword", email, password).await?;
        self.session.set(identity.clone()).await;
        info!(uid = identity.uid, "🔑 Signing in... OK");
        Ok(identity)
    }

    #[instrument(skip(self, password))]
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AppError> {
        debug!("Creating account...");
        let identity = self.password_request("signUp", email, password).await?;
        self.session.set(identity.clone()).await;
        info!(uid = identity.uid, "🔑 Creating account... OK");
        Ok(identity)
    }

    #[instrument(skip_all, fields(uid = identity.uid.as_str()))]
    async fn reauthenticate(&self, identity: &Identity, password: &str) -> Result<bool, AppError> {
        match self.password_request("signInWithPassword", &identity.email, password).await {
            Ok(fresh) if fresh.uid == identity.uid => {
                self.session.refresh_token(fresh.id_token).await;
                Ok(true)
            }
            Ok(fresh) => {
                warn!(other_uid = fresh.uid, "⚠️ Reauthentication returned a different account");
                Ok(false)
            }
            Err(AppError::AuthInvalidCredential) => Ok(false),
            Err(error) => Err(error),
        }
    }

    #[instrument(skip_all, fields(uid = identity.uid.as_str()))]
    async fn change_password(&self, identity: &Identity, new_password: &str) -> Result<(), AppError> {
        let id_token = self.session.id_token().await.unwrap_or_else(|| identity.id_token.clone());
        let request = UpdatePasswordRequest {
            id_token: &id_token,
            password: new_password,
            return_secure_token: true,
        };
        let response: AccountResponse = self.post("update", &request).await?;
        self.session.refresh_token(response.id_token).await;
        info!("🔑 Changed password");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn sign_out(&self) -> Result<(), AppError> {
        if let Some(identity) = self.session.clear().await {
            info!(uid = identity.uid, "🔑 Signed out");
        }
        Ok(())
    }

    async fn current_identity(&self) -> Option<Identity> {
        self.session.current().await
    }
}
