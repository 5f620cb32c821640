//! PostgREST remote store client.
//!
//! Talks to the Supabase REST surface: `POST /rest/v1/{table}` to insert,
//! `PATCH`/`DELETE` filtered by `?id=eq.{id}`, and `Prefer:
//! resolution=merge-duplicates` for upserts. The anon key rides along as
//! both the `apikey` header and a bearer token.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::{RemoteStore, RemoteStoreError, Table};
use crate::config::AdminConfig;

/// HTTP [`RemoteStore`] over PostgREST.
pub struct RestStore {
    client: Client,
    base: Url,
    anon_key: SecretString,
}

impl RestStore {
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            client: Client::new(),
            base: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    fn endpoint(&self, table: Table) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base.as_str().trim_end_matches('/'),
            table.name()
        )
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", self.anon_key.expose_secret())
            .header(
                "Authorization",
                format!("Bearer {}", self.anon_key.expose_secret()),
            )
    }
}

/// Map a non-success response to [`RemoteStoreError::Rejected`], keeping the
/// body verbatim.
async fn check(response: Response) -> Result<Response, RemoteStoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable response body>".to_owned());
    Err(RemoteStoreError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RemoteStore for RestStore {
    #[instrument(skip(self, row), fields(table = %table))]
    async fn insert(&self, table: Table, row: Value) -> Result<(), RemoteStoreError> {
        let response = self
            .request(Method::POST, self.endpoint(table))
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    #[instrument(skip(self, row), fields(table = %table, id = %id))]
    async fn update(&self, table: Table, id: &str, row: Value) -> Result<(), RemoteStoreError> {
        let url = format!("{}?id=eq.{id}", self.endpoint(table));
        let response = self
            .request(Method::PATCH, url)
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(table = %table, id = %id))]
    async fn delete(&self, table: Table, id: &str) -> Result<(), RemoteStoreError> {
        let url = format!("{}?id=eq.{id}", self.endpoint(table));
        let response = self
            .request(Method::DELETE, url)
            .header("Prefer", "return=minimal")
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    #[instrument(skip(self, row), fields(table = %table))]
    async fn upsert(&self, table: Table, row: Value) -> Result<(), RemoteStoreError> {
        let response = self
            .request(Method::POST, self.endpoint(table))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&row)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(table = %table))]
    async fn fetch_all(&self, table: Table) -> Result<Vec<Value>, RemoteStoreError> {
        let url = format!("{}?select=*", self.endpoint(table));
        let response = self.request(Method::GET, url).send().await?;
        let rows = check(response).await?.json().await?;
        Ok(rows)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> RestStore {
        RestStore::new(&AdminConfig {
            supabase_url: "https://example.supabase.co".parse().unwrap(),
            supabase_anon_key: SecretString::from("anon"),
            rebuild_hook_url: None,
            cache_dir: std::path::PathBuf::from("."),
        })
    }

    #[test]
    fn endpoints_land_under_rest_v1() {
        let store = store();
        assert_eq!(
            store.endpoint(Table::Products),
            "https://example.supabase.co/rest/v1/products"
        );
        assert_eq!(
            store.endpoint(Table::Settings),
            "https://example.supabase.co/rest/v1/settings"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let store = RestStore::new(&AdminConfig {
            supabase_url: "https://example.supabase.co/".parse().unwrap(),
            supabase_anon_key: SecretString::from("anon"),
            rebuild_hook_url: None,
            cache_dir: std::path::PathBuf::from("."),
        });
        assert_eq!(
            store.endpoint(Table::Addons),
            "https://example.supabase.co/rest/v1/addons"
        );
    }
}
