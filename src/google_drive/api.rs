use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use reqwest::{header::AUTHORIZATION, Client};

use super::{types::*, utils::json_or_error};

pub const API_BASE_URI: &str = "https://www.googleapis.com";
const FILES_PATH: &str = "/drive/v3/files";

lazy_static::lazy_static! {
    static ref GET_FIELDS: String = DriveFile::fields().join(",");
    static ref LIST_FIELDS: String = format!("nextPageToken,files({})", GET_FIELDS.as_str());
}

/// Field selector sent with every `files.list` request.
pub fn list_fields() -> &'static str {
    LIST_FIELDS.as_str()
}

/// The two Drive v3 calls a listing needs.
///
/// [`DriveClient`] talks to the real service; anything else implementing this
/// (an in-memory fake, a recording proxy) can be handed to the fetcher and the
/// [`Pathfinder`](crate::Pathfinder) instead.
#[async_trait]
pub trait FilesApi: Send + Sync {
    /// Fetch one page of `files.list`. `page_token` is `None` for the first page.
    async fn list_page(
        &self,
        params: &ListParams,
        page_token: Option<&str>,
    ) -> anyhow::Result<ListResponse>;

    /// Fetch the metadata of a single file or folder.
    async fn get_file(&self, id: &str) -> anyhow::Result<DriveFile>;
}

#[derive(Debug, Clone)]
pub struct DriveClient {
    http: Client,
    access_token: String,
    base_uri: String,
}

impl DriveClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_uri(access_token, API_BASE_URI)
    }

    pub fn with_base_uri(access_token: impl Into<String>, base_uri: &str) -> Self {
        Self {
            http: Client::new(),
            access_token: access_token.into(),
            base_uri: base_uri.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let base_uri = config.api_base_uri.as_deref().unwrap_or(API_BASE_URI);
        Self::with_base_uri(config.access_token.as_str(), base_uri)
    }

    fn files_uri(&self) -> String {
        format!("{}{}", self.base_uri, FILES_PATH)
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

#[async_trait]
impl FilesApi for DriveClient {
    async fn list_page(
        &self,
        params: &ListParams,
        page_token: Option<&str>,
    ) -> anyhow::Result<ListResponse> {
        let uri = self.files_uri();
        debug!("GET {uri} q={:?} pageSize={}", params.query, params.page_size);

        let req = self
            .http
            .get(&uri)
            .header(AUTHORIZATION, self.auth_header())
            .query(&params.query_pairs());

        let req = match page_token {
            None => req,
            Some(t) => req.query(&[("pageToken", t)]),
        };

        let res = req
            .send()
            .await
            .with_context(|| format!("Could not send GET request to `{}`", uri))?;

        json_or_error(res).await
    }

    async fn get_file(&self, id: &str) -> anyhow::Result<DriveFile> {
        let uri = format!("{}/{}", self.files_uri(), id);
        debug!("GET {uri}");

        let res = self
            .http
            .get(&uri)
            .header(AUTHORIZATION, self.auth_header())
            .query(&[("fields", GET_FIELDS.as_str()), ("supportsAllDrives", "true")])
            .send()
            .await
            .with_context(|| format!("Could not send GET request to `{}`", uri))?;

        json_or_error(res).await
    }
}
