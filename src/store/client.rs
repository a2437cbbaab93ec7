use reqwest::Client;
use serde::Serialize;

use crate::config::StoreConfig;

/// Best-effort REST sink over a Supabase-style API.
///
/// Writes and deletes that fail are logged and dropped; nothing in the
/// tracking pipeline depends on them succeeding, and there is no retry.
pub struct StoreClient {
    http: Client,
    base_url: String,
    service_key: String,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        }
    }

    pub async fn insert<T: Serialize>(&self, table: &str, row: &T) {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let result = self
            .http
            .post(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                log::warn!("insert into {} rejected: {}", table, response.status());
            }
            Ok(_) => {}
            Err(e) => log::warn!("insert into {} failed: {}", table, e),
        }
    }

    pub async fn delete(&self, table: &str, column: &str, value: &str) {
        let url = format!(
            "{}/rest/v1/{}?{}=eq.{}",
            self.base_url, table, column, value
        );
        let result = self
            .http
            .delete(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                log::warn!("delete from {} rejected: {}", table, response.status());
            }
            Ok(_) => {}
            Err(e) => log::warn!("delete from {} failed: {}", table, e),
        }
    }
}
