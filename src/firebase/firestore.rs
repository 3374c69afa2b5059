use crate::app_config::AppConfig;
use crate::domain::{Document, FieldValue};
use crate::error::AppError;
use crate::firebase::error_response::store_error;
use crate::providers::DocumentStore;
use crate::session::Session;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Document store backed by the Firestore REST API.
#[derive(Debug)]
pub struct Firestore {
    client: Client,
    documents_url: String,
    session: Session,
}

#[derive(Debug, Deserialize)]
struct DocumentResponse {
    #[serde(default)]
    fields: HashMap<String, Value>,
}

impl Firestore {
    pub fn new(client: Client, config: &AppConfig, session: Session) -> Self {
        Firestore {
            client,
            documents_url: format!(
                "{}/v1/projects/{}/databases/(default)/documents",
                config.firebase().firestore_url().trim_end_matches('/'),
                config.firebase().project_id()
            ),
            session,
        }
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.documents_url, collection, id)
    }

    async fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.id_token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, AppError> {
        let response = self.authorized(request).await.send().await?;
        if !response.status().is_success() {
            return Err(store_error(response).await);
        }
        Ok(response)
    }
}

#[async_trait]
impl DocumentStore for Firestore {
    #[instrument(skip(self))]
    async fn get_document(&self, collection: &str, id: &str) -> Result<Document, AppError> {
        let response = self.send(self.client.get(self.document_url(collection, id))).await?;
        let document = response.json::<DocumentResponse>().await?;
        Ok(decode_fields(document.fields))
    }

    #[instrument(skip(self, document))]
    async fn set_document(&self, collection: &str, id: &str, document: &Document) -> Result<(), AppError> {
        let request = self.client.patch(self.document_url(collection, id)).json(&encode_document(document));
        self.send(request).await?;
        debug!("Stored document with {} field(s)", document.len());
        Ok(())
    }

    #[instrument(skip(self, fields))]
    async fn update_document(&self, collection: &str, id: &str, fields: &Document) -> Result<(), AppError> {
        // An empty update mask would replace the whole document.
        if fields.is_empty() {
            debug!("Nothing to update");
            return Ok(());
        }

        let mut query: Vec<(&str, &str)> = fields.field_names().map(|name| ("updateMask.fieldPaths", name)).collect();
        query.push(("currentDocument.exists", "true"));

        let request = self.client.patch(self.document_url(collection, id)).query(&query).json(&encode_document(fields));
        self.send(request).await?;
        debug!("Updated {} field(s)", fields.len());
        Ok(())
    }
}

fn encode_document(document: &Document) -> Value {
    let fields: Map<String, Value> = document.iter().map(|(name, value)| (name.clone(), encode_value(value))).collect();
    json!({ "fields": fields })
}

fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::String(value) => json!({ "stringValue": value }),
        FieldValue::Integer(value) => json!({ "integerValue": value.to_string() }),
        FieldValue::Boolean(value) => json!({ "booleanValue": value }),
        FieldValue::Timestamp(value) => json!({ "timestampValue": value.to_rfc3339_opts(SecondsFormat::Millis, true) }),
    }
}

fn decode_fields(fields: HashMap<String, Value>) -> Document {
    let mut document = Document::new();
    for (name, value) in fields {
        match decode_value(&value) {
            Some(field_value) => {
                document.insert(name, field_value);
            }
            None => debug!("Skipping field '{}' of unsupported type: {}", name, value),
        }
    }
    document
}

fn decode_value(value: &Value) -> Option<FieldValue> {
    let (kind, inner) = value.as_object()?.iter().next()?;
    match kind.as_str() {
        "stringValue" => inner.as_str().map(FieldValue::from),
        "integerValue" => inner.as_str().and_then(|s| s.parse().ok()).or_else(|| inner.as_i64()).map(FieldValue::Integer),
        "booleanValue" => inner.as_bool().map(FieldValue::Boolean),
        "timestampValue" => inner
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| FieldValue::Timestamp(dt.with_timezone(&Utc))),
        _ => None,
    }
}
