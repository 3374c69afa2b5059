use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, FirebaseClientError> {
    let mut headers = header::HeaderMap::new();
    let mut api_key_value = HeaderValue::from_str(config.firebase().api_key())?;
    api_key_value.set_sensitive(true);
    headers.insert("x-goog-api-key", api_key_value);

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum FirebaseClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Firebase client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}
