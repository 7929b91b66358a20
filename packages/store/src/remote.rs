//! # Remote store — PostgREST over HTTP
//!
//! [`RemoteStore`] is the [`EntityStore`] implementation used once real backend
//! credentials are configured. It talks to a Supabase project's PostgREST
//! interface with [`reqwest`]: one table per entity kind, plus `activity_log`.
//!
//! ## Requests
//!
//! | Operation | HTTP | Query |
//! |-----------|------|-------|
//! | `fetch_all` | `GET /rest/v1/<table>` | `select=*`, `order=created_at.<dir>` when the kind has an order, `<column>=eq.<value>` when filtered |
//! | `add` | `POST /rest/v1/<table>` | body `[fields]`, `Prefer: return=representation` |
//! | `update` | `PATCH /rest/v1/<table>` | `id=eq.<id>`, body `patch`, `Prefer: return=representation` |
//! | `delete` | `DELETE /rest/v1/<table>` | `id=eq.<id>` |
//!
//! Every request carries the anon key both as `apikey` and as a bearer token.
//!
//! ## Error handling
//!
//! Writes propagate failures as [`StoreError::Remote`] (carrying the PostgREST
//! `message`) or [`StoreError::Http`]. Reads never fail: the error is logged and
//! the matching sample collection is returned instead. Nothing is retried.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;

use crate::config::BackendConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{ActivityEntry, EntityKind, Order};
use crate::record::{Filter, Record};
use crate::repo::EntityStore;
use crate::sample;

const ACTIVITY_TABLE: &str = "activity_log";

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    #[serde(default)]
    details: Option<String>,
}

/// PostgREST-backed EntityStore.
#[derive(Clone, Debug)]
pub struct RemoteStore {
    client: Client,
    rest_url: String,
    anon_key: String,
}

impl RemoteStore {
    /// Build a client for the configured backend. Fails when the URL does not
    /// parse or the HTTP client cannot be initialised.
    pub fn new(config: &BackendConfig) -> StoreResult<Self> {
        let rest_url = config.rest_url();
        reqwest::Url::parse(&rest_url)
            .map_err(|e| StoreError::InvalidUrl(format!("{}: {}", rest_url, e)))?;
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            rest_url,
            anon_key: config.anon_key.trim().to_string(),
        })
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{}", self.rest_url, table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    async fn select(&self, kind: EntityKind, filter: Option<&Filter>) -> StoreResult<Vec<Record>> {
        let mut query = vec![("select".to_string(), "*".to_string())];
        if let Some(order) = kind.remote_order() {
            let dir = match order {
                Order::Ascending => "asc",
                Order::Descending => "desc",
            };
            query.push(("order".to_string(), format!("created_at.{}", dir)));
        }
        if let Some(filter) = filter {
            query.push((filter.column.clone(), format!("eq.{}", filter.value)));
        }

        let response = self
            .request(Method::GET, kind.table())
            .query(&query)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }
}

/// Turn a non-2xx response into [`StoreError::Remote`].
async fn check(response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<PostgrestError>(&body) {
        Ok(PostgrestError {
            message,
            details: Some(details),
        }) => format!("{} ({})", message, details),
        Ok(PostgrestError { message, .. }) => message,
        Err(_) if body.is_empty() => status.to_string(),
        Err(_) => body,
    };
    Err(StoreError::Remote {
        status: status.as_u16(),
        message,
    })
}

impl EntityStore for RemoteStore {
    async fn fetch_all(&self, kind: EntityKind, filter: Option<&Filter>) -> Vec<Record> {
        match self.select(kind, filter).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Failed to fetch {}, serving sample data: {}", kind, e);
                sample::filtered(kind, filter)
            }
        }
    }

    async fn add(&self, kind: EntityKind, fields: Record) -> StoreResult<Record> {
        let response = self
            .request(Method::POST, kind.table())
            .header("Prefer", "return=representation")
            .json(&[fields])
            .send()
            .await?;
        let rows: Vec<Record> = check(response).await?.json().await?;
        rows.into_iter().next().ok_or(StoreError::EmptyResponse)
    }

    async fn update(&self, kind: EntityKind, id: &str, patch: Record) -> StoreResult<Option<Record>> {
        let response = self
            .request(Method::PATCH, kind.table())
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await?;
        let rows: Vec<Record> = check(response).await?.json().await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> StoreResult<()> {
        let response = self
            .request(Method::DELETE, kind.table())
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn log_activity(&self, description: &str, user_name: &str) {
        let entry = ActivityEntry {
            description: description.to_string(),
            user_name: user_name.to_string(),
            created_at: None,
        };
        let result = match self
            .request(Method::POST, ACTIVITY_TABLE)
            .header("Prefer", "return=minimal")
            .json(&[entry])
            .send()
            .await
        {
            Ok(response) => check(response).await.map(|_| ()),
            Err(e) => Err(e.into()),
        };
        if let Err(e) = result {
            tracing::warn!("Failed to log activity: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn store_for(server: &MockServer) -> RemoteStore {
        RemoteStore::new(&BackendConfig::new(server.uri(), "test-key")).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_orders_and_authenticates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/clients"))
            .and(query_param("select", "*"))
            .and(query_param("order", "created_at.desc"))
            .and(header("apikey", "test-key"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "8f1c", "name": "Remote Client", "created_at": "2025-05-01T10:00:00Z" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let store = store_for(&server).await;
        let clients = store.fetch_all(EntityKind::Client, None).await;
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id(), Some("8f1c"));
    }

    #[tokio::test]
    async fn test_fetch_tasks_filtered_ascending() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/tasks"))
            .and(query_param("order", "created_at.asc"))
            .and(query_param("project_id", "eq.p-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let store = store_for(&server).await;
        let tasks = store
            .fetch_all(EntityKind::Task, Some(&Filter::eq("project_id", "p-1")))
            .await;
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_read_failure_serves_sample_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let store = store_for(&server).await;
        assert_eq!(store.fetch_all(EntityKind::Client, None).await.len(), 5);
        let scoped = store
            .fetch_all(EntityKind::Project, Some(&Filter::eq("client_id", "3")))
            .await;
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].get_str("name"), Some("StartupHub Landing Page"));
    }

    #[tokio::test]
    async fn test_add_returns_representation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/services"))
            .and(header("prefer", "return=representation"))
            .and(body_json(json!([{ "name": "Audit", "pricing": 2000 }])))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([
                { "id": "a1", "name": "Audit", "pricing": 2000, "created_at": "2025-05-01T10:00:00Z" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let store = store_for(&server).await;
        let added = store
            .add(
                EntityKind::Service,
                Record::new().with("name", "Audit").with("pricing", 2000),
            )
            .await
            .unwrap();
        assert_eq!(added.id(), Some("a1"));
        assert!(added.contains("created_at"));
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/clients"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": "23502",
                "message": "null value in column \"name\" violates not-null constraint",
                "details": null,
                "hint": null
            })))
            .mount(&server)
            .await;

        let store = store_for(&server).await;
        let err = store
            .add(EntityKind::Client, Record::new())
            .await
            .unwrap_err();
        match err {
            StoreError::Remote { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("not-null"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/projects"))
            .and(query_param("id", "eq.missing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let store = store_for(&server).await;
        let updated = store
            .update(EntityKind::Project, "missing", Record::new().with("progress", 50))
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/rest/v1/team_members"))
            .and(query_param("id", "eq.m1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(2)
            .mount(&server)
            .await;

        let store = store_for(&server).await;
        store.delete(EntityKind::TeamMember, "m1").await.unwrap();
        store.delete(EntityKind::TeamMember, "m1").await.unwrap();
    }

    #[tokio::test]
    async fn test_update_and_delete_failures_propagate() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/invoices"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "code": "23505",
                "message": "duplicate key value violates unique constraint",
                "details": "Key (invoice_number)=(INV-2025-001) already exists."
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/rest/v1/clients"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let store = store_for(&server).await;
        let err = store
            .update(
                EntityKind::Invoice,
                "i1",
                Record::new().with("invoice_number", "INV-2025-001"),
            )
            .await
            .unwrap_err();
        match err {
            StoreError::Remote { status, message } => {
                assert_eq!(status, 409);
                assert!(message.contains("already exists"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = store.delete(EntityKind::Client, "c1").await.unwrap_err();
        assert!(matches!(err, StoreError::Remote { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_activity_failure_is_swallowed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/activity_log"))
            .and(body_json(json!([{ "description": "Added client", "user_name": "Admin" }])))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let store = store_for(&server).await;
        store.log_activity("Added client", "Admin").await;
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = RemoteStore::new(&BackendConfig::new("not a url", "k")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidUrl(_)));
    }
}
