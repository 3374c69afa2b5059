use crate::domain::{Document, Identity, ParkingSpot, Region, UserPosition};
use crate::error::AppError;
use crate::providers::{DocumentStore, IdentityProvider, LocationProvider, MapView, PermissionStatus};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct FakeIdentityProvider {
    accounts: Mutex<HashMap<String, (String, String)>>,
    current: Mutex<Option<Identity>>,
    failures: Mutex<HashMap<&'static str, AppError>>,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeIdentityProvider {
    pub fn new() -> Self {
        FakeIdentityProvider::default()
    }

    pub fn with_account(self, uid: &str, email: &str, password: &str) -> Self {
        self.accounts.lock().unwrap().insert(email.to_string(), (uid.to_string(), password.to_string()));
        self
    }

    pub fn signed_in_as(self, email: &str) -> Self {
        let uid = self.accounts.lock().unwrap()[email].0.clone();
        *self.current.lock().unwrap() = Some(identity(&uid, email));
        self
    }

    pub fn failing(self, operation: &'static str, error: AppError) -> Self {
        self.failures.lock().unwrap().insert(operation, error);
        self
    }

    pub fn password_of(&self, email: &str) -> Option<String> {
        self.accounts.lock().unwrap().get(email).map(|(_, password)| password.clone())
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(operation);
        match self.failures.lock().unwrap().get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

pub fn identity(uid: &str, email: &str) -> Identity {
    Identity {
        uid: uid.to_string(),
        email: email.to_string(),
        id_token: format!("token-{}", uid),
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AppError> {
        self.record("sign_in")?;
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(email) {
            Some((uid, stored)) if stored == password => {
                let identity = identity(uid, email);
                *self.current.lock().unwrap() = Some(identity.clone());
                Ok(identity)
            }
            _ => Err(AppError::AuthInvalidCredential),
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AppError> {
        self.record("sign_up")?;
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(AppError::AuthEmailInUse);
        }
        let uid = format!("uid-{}", accounts.len() + 1);
        accounts.insert(email.to_string(), (uid.clone(), password.to_string()));
        let identity = identity(&uid, email);
        *self.current.lock().unwrap() = Some(identity.clone());
        Ok(identity)
    }

    async fn reauthenticate(&self, identity: &Identity, password: &str) -> Result<bool, AppError> {
        self.record("reauthenticate")?;
        Ok(self.password_of(&identity.email).is_some_and(|stored| stored == password))
    }

    async fn change_password(&self, identity: &Identity, new_password: &str) -> Result<(), AppError> {
        self.record("change_password")?;
        if let Some(account) = self.accounts.lock().unwrap().get_mut(&identity.email) {
            account.1 = new_password.to_string();
        }
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        self.record("sign_out")?;
        *self.current.lock().unwrap() = None;
        Ok(())
    }

    async fn current_identity(&self) -> Option<Identity> {
        self.current.lock().unwrap().clone()
    }
}

#[derive(Debug, Default)]
pub struct FakeDocumentStore {
    documents: Mutex<HashMap<(String, String), Document>>,
    failures: Mutex<HashMap<&'static str, AppError>>,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeDocumentStore {
    pub fn new() -> Self {
        FakeDocumentStore::default()
    }

    pub fn with_document(self, collection: &str, id: &str, document: Document) -> Self {
        self.documents.lock().unwrap().insert((collection.to_string(), id.to_string()), document);
        self
    }

    pub fn failing(self, operation: &'static str, error: AppError) -> Self {
        self.failures.lock().unwrap().insert(operation, error);
        self
    }

    pub fn document(&self, collection: &str, id: &str) -> Option<Document> {
        self.documents.lock().unwrap().get(&(collection.to_string(), id.to_string())).cloned()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(operation);
        match self.failures.lock().unwrap().get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for FakeDocumentStore {
    async fn get_document(&self, collection: &str, id: &str) -> Result<Document, AppError> {
        self.record("get_document")?;
        self.document(collection, id).ok_or(AppError::NotFound)
    }

    async fn set_document(&self, collection: &str, id: &str, document: &Document) -> Result<(), AppError> {
        self.record("set_document")?;
        self.documents.lock().unwrap().insert((collection.to_string(), id.to_string()), document.clone());
        Ok(())
    }

    async fn update_document(&self, collection: &str, id: &str, fields: &Document) -> Result<(), AppError> {
        self.record("update_document")?;
        let mut documents = self.documents.lock().unwrap();
        let document = documents.get_mut(&(collection.to_string(), id.to_string())).ok_or(AppError::NotFound)?;
        for (name, value) in fields.iter() {
            document.insert(name.clone(), value.clone());
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeLocationProvider {
    permission: PermissionStatus,
    positions: Mutex<Vec<Result<UserPosition, AppError>>>,
}

impl FakeLocationProvider {
    /// Positions are handed out in order, the last one repeats.
    pub fn new(permission: PermissionStatus, positions: Vec<Result<UserPosition, AppError>>) -> Self {
        FakeLocationProvider {
            permission,
            positions: Mutex::new(positions),
        }
    }
}

#[async_trait]
impl LocationProvider for FakeLocationProvider {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn current_position(&self) -> Result<UserPosition, AppError> {
        let mut positions = self.positions.lock().unwrap();
        if positions.len() > 1 { positions.remove(0) } else { positions[0].clone() }
    }
}

#[derive(Debug, Default)]
pub struct RecordingMapView {
    pub renders: Mutex<Vec<(Region, Vec<String>)>>,
    pub animations: Mutex<Vec<(Region, Duration)>>,
}

impl MapView for RecordingMapView {
    fn render(&self, region: &Region, spots: &[ParkingSpot]) {
        let ids = spots.iter().map(|spot| spot.id().to_string()).collect();
        self.renders.lock().unwrap().push((*region, ids));
    }

    fn animate_to_region(&self, region: &Region, duration: Duration) {
        self.animations.lock().unwrap().push((*region, duration));
    }
}
