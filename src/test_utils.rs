//! In-memory stand-in for the Drive API used by the unit tests.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;

use crate::{DriveFile, FilesApi, ListParams, ListResponse, FOLDER};

#[derive(Debug, Clone)]
pub struct Request {
    pub query: String,
    pub order_by: String,
    pub page_size: i64,
    pub page_token: Option<String>,
}

/// Serves `files` in pages (the page token is the offset of the next page) and
/// answers `get_file` from `nodes`.
#[derive(Default)]
pub struct FakeDrive {
    files: Vec<DriveFile>,
    nodes: HashMap<String, DriveFile>,
    page_limit: Option<usize>,
    fail_on_page: Option<usize>,
    requests: Mutex<Vec<Request>>,
    gets: AtomicUsize,
}

impl FakeDrive {
    pub fn with_files(n: usize) -> Self {
        let files = (0..n)
            .map(|i| file(&format!("file-{i}"), &format!("name-{i}"), "text/plain"))
            .collect();
        Self::from_files(files)
    }

    pub fn from_files(files: Vec<DriveFile>) -> Self {
        Self {
            files,
            ..Default::default()
        }
    }

    /// Never return more than `n` files per page.
    pub fn page_limit(mut self, n: usize) -> Self {
        self.page_limit = Some(n);
        self
    }

    /// Fail the `n`th list request (zero based).
    pub fn fail_on_page(mut self, n: usize) -> Self {
        self.fail_on_page = Some(n);
        self
    }

    pub fn node(mut self, f: DriveFile) -> Self {
        self.nodes.insert(f.id.clone(), f);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FilesApi for FakeDrive {
    async fn list_page(
        &self,
        params: &ListParams,
        page_token: Option<&str>,
    ) -> anyhow::Result<ListResponse> {
        let page = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(Request {
                query: params.query.clone(),
                order_by: params.order_by.clone(),
                page_size: params.page_size,
                page_token: page_token.map(String::from),
            });
            requests.len() - 1
        };

        if self.fail_on_page == Some(page) {
            anyhow::bail!("injected failure on page {page}");
        }

        let offset = page_token.map(str::parse::<usize>).transpose()?.unwrap_or(0);
        let size = params.page_size as usize;
        let size = self.page_limit.map_or(size, |l| l.min(size));
        let end = (offset + size).min(self.files.len());

        Ok(ListResponse {
            next_page_token: (end < self.files.len()).then(|| end.to_string()),
            files: self.files[offset..end].to_vec(),
        })
    }

    async fn get_file(&self, id: &str) -> anyhow::Result<DriveFile> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.nodes
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("File not found: {id}"))
    }
}

pub fn file(id: &str, name: &str, mime_type: &str) -> DriveFile {
    DriveFile {
        id: id.to_string(),
        name: name.to_string(),
        md5_checksum: None,
        mime_type: mime_type.to_string(),
        size: None,
        modified_time: None,
        parents: vec![],
    }
}

pub fn folder(id: &str, name: &str, parents: &[&str]) -> DriveFile {
    DriveFile {
        parents: parents.iter().map(|p| p.to_string()).collect(),
        ..file(id, name, FOLDER)
    }
}
