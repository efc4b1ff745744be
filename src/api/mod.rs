//! REST API surface of the task-manager service.
//!
//! The [`RecordApi`] trait is what the cleaner drives; [`client::RestClient`]
//! implements it over HTTP.

pub mod client;

use color_eyre::Result;
use serde::Deserialize;
use serde_json::Value;

use crate::constants;

/// A collection exposed by the API.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Resource {
    Users,
    Tasks,
}

impl Resource {
    /// Collection path, e.g. `/api/users`.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Resource::Users => constants::USERS_PATH,
            Resource::Tasks => constants::TASKS_PATH,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Users => write!(f, "users"),
            Resource::Tasks => write!(f, "tasks"),
        }
    }
}

/// Operations needed to empty a collection.
pub trait RecordApi {
    /// Fetches the identifiers of every record currently in `resource`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a collection.
    fn list_ids(&mut self, resource: Resource) -> Result<Vec<String>>;

    /// Deletes one record. The outcome reported by the server is not checked.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request could not be completed.
    fn delete(&mut self, resource: Resource, id: &str) -> Result<()>;
}

/// Body of a list request: `{"message": "...", "data": [...]}`.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub data: Vec<RecordRef>,
}

/// A record projected down to its identifier.
#[derive(Debug, Deserialize)]
pub struct RecordRef {
    #[serde(rename = "_id")]
    pub id: Value,
}

impl RecordRef {
    /// The identifier as a path-ready string; non-string ids use their JSON text.
    #[must_use]
    pub fn id_string(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl ListResponse {
    #[must_use]
    pub fn into_ids(self) -> Vec<String> {
        self.data.iter().map(RecordRef::id_string).collect()
    }
}

/// Query string selecting only identifiers: `filter={"_id":1}`, URL-encoded.
#[must_use]
pub fn id_filter_query() -> String {
    let filter = serde_json::json!({ "_id": 1 }).to_string();
    format!(
        "{}={}",
        constants::FILTER_PARAM,
        urlencoding::encode(&filter)
    )
}
