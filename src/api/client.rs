//! Blocking HTTP client for the task-manager API.

use std::time::Duration;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

use super::{id_filter_query, ListResponse, RecordApi, Resource};
use crate::constants;

/// [`RecordApi`] over one keep-alive HTTP connection.
pub struct RestClient {
    client: Client,
    base: Url,
}

impl RestClient {
    /// Builds a client for the API at `host:port`.
    ///
    /// `host` is normally a bare hostname. If it already carries an
    /// `http://` or `https://` scheme it is used as given, with `port` applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not form a valid URL or the
    /// underlying client cannot be built.
    pub fn new(host: &str, port: u16) -> Result<Self> {
        let base = base_url(host, port)?;
        let client = Client::builder()
            .timeout(Option::<Duration>::None)
            .pool_max_idle_per_host(constants::MAX_IDLE_PER_HOST)
            .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
            .build()
            .wrap_err(constants::ERR_HTTP_CLIENT_BUILD_FAILED)?;

        Ok(Self { client, base })
    }

    /// Base URL every request is resolved against.
    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Closes the pooled connection.
    pub fn close(self) {
        tracing::debug!(base = %self.base, "closing connection");
        drop(self.client);
    }

    fn list_url(&self, resource: Resource) -> Result<Url> {
        let mut url = self.base.join(resource.path())?;
        url.set_query(Some(&id_filter_query()));
        Ok(url)
    }

    fn record_url(&self, resource: Resource, id: &str) -> Result<Url> {
        let path = format!("{}/{}", resource.path(), urlencoding::encode(id));
        Ok(self.base.join(&path)?)
    }
}

impl RecordApi for RestClient {
    fn list_ids(&mut self, resource: Resource) -> Result<Vec<String>> {
        let url = self.list_url(resource)?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, constants::MIME_JSON)
            .send()
            .wrap_err_with(|| format!("{}: GET {url}", constants::ERR_LIST_REQUEST_FAILED))?;

        let status = response.status();
        let body = response
            .bytes()
            .wrap_err_with(|| format!("{}: GET {url}", constants::ERR_LIST_REQUEST_FAILED))?;
        let parsed: ListResponse = serde_json::from_slice(&body)
            .wrap_err_with(|| format!("{} ({status}): GET {url}", constants::ERR_LIST_BODY_INVALID))?;

        if !status.is_success() {
            tracing::warn!(
                %url,
                %status,
                message = parsed.message.as_deref().unwrap_or_default(),
                "list request returned non-success status"
            );
        }

        Ok(parsed.into_ids())
    }

    fn delete(&mut self, resource: Resource, id: &str) -> Result<()> {
        let url = self.record_url(resource, id)?;
        tracing::debug!(%url, "DELETE");

        let response = self
            .client
            .delete(url.clone())
            .send()
            .wrap_err_with(|| format!("{}: DELETE {url}", constants::ERR_DELETE_REQUEST_FAILED))?;
        let status = response.status();

        // Drain the body so the connection goes back to the pool.
        response
            .bytes()
            .wrap_err_with(|| format!("{}: DELETE {url}", constants::ERR_DELETE_REQUEST_FAILED))?;
        tracing::trace!(%url, %status, "deleted");

        Ok(())
    }
}

/// Builds `http://host:port/`, keeping an explicit scheme if `host` has one.
fn base_url(host: &str, port: u16) -> Result<Url> {
    let host = host.trim();
    let raw = if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    };

    let mut url =
        Url::parse(&raw).wrap_err_with(|| format!("{}: {host}", constants::ERR_INVALID_BASE_URL))?;
    if url.host_str().is_none() {
        return Err(eyre!("{}: {host}", constants::ERR_INVALID_BASE_URL));
    }
    url.set_port(Some(port))
        .map_err(|()| eyre!("{}: {host}", constants::ERR_INVALID_BASE_URL))?;
    url.set_path("/");
    Ok(url)
}
