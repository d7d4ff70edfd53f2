use async_stream::try_stream;
use futures::{Stream, TryStreamExt};
use log::{debug, info};

use crate::{DriveFile, FilesApi, ListError, ListParams, ListResponse};

/// Largest page `files.list` hands out in one round-trip.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Files shared beyond the owner (any visibility), not trashed, not folders.
pub const PUBLIC_FILES_FILTER: &str = "( ( visibility = 'anyoneCanFind' or visibility = 'anyoneWithLink' or visibility = 'domainCanFind' or visibility = 'domainWithLink' or visibility = 'limited' ) ) and trashed = false and ( mimeType != 'application/vnd.google-apps.folder' )";

/// Files and folders shared beyond the owner, not trashed.
pub const PUBLIC_FILTER: &str = "( ( visibility = 'anyoneCanFind' or visibility = 'anyoneWithLink' or visibility = 'domainCanFind' or visibility = 'domainWithLink' or visibility = 'limited' ) and trashed = false ) ";

/// Like [`PUBLIC_FILES_FILTER`], restricted to starred files.
pub const PUBLIC_STARRED_FILES_FILTER: &str = "( ( visibility = 'anyoneCanFind' or visibility = 'anyoneWithLink' or visibility = 'domainCanFind' or visibility = 'domainWithLink' or visibility = 'limited' ) ) and starred = true and trashed = false and ( mimeType != 'application/vnd.google-apps.folder' )";

/// Which filter expression a listing runs with.
///
/// Every variant but [`Selection::Query`] replaces the caller's query
/// outright; the two are never combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Query,
    PublicFiles,
    Public,
    PublicStarredFiles,
}

impl Selection {
    pub fn filter(self, query: &str) -> &str {
        match self {
            Self::Query => query,
            Self::PublicFiles => PUBLIC_FILES_FILTER,
            Self::Public => PUBLIC_FILTER,
            Self::PublicStarredFiles => PUBLIC_STARRED_FILES_FILTER,
        }
    }
}

impl TryFrom<i64> for Selection {
    type Error = ListError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Query),
            1 => Ok(Self::PublicFiles),
            2 => Ok(Self::Public),
            3 => Ok(Self::PublicStarredFiles),
            _ => Err(ListError::UnknownSelection(code)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListAllFilesArgs {
    pub query: String,
    pub sort_order: String,
    pub selection: Selection,
    /// Zero or negative means no cap.
    pub max_files: i64,
}

impl ListAllFilesArgs {
    fn limit(&self) -> Option<usize> {
        (self.max_files > 0).then(|| usize::try_from(self.max_files).unwrap_or(usize::MAX))
    }

    fn page_size(&self) -> i64 {
        if self.max_files > 0 && self.max_files < MAX_PAGE_SIZE {
            self.max_files
        } else {
            MAX_PAGE_SIZE
        }
    }

    pub fn params(&self) -> ListParams {
        ListParams::new(
            self.selection.filter(&self.query),
            &self.sort_order,
            self.page_size(),
        )
    }
}

/// Lazily walk the pages of a listing. A request is only sent when the next
/// page is pulled, so dropping the stream stops pagination.
pub fn pages<'a, A>(
    api: &'a A,
    params: &'a ListParams,
) -> impl Stream<Item = anyhow::Result<ListResponse>> + 'a
where
    A: FilesApi + ?Sized,
{
    let mut page_token: Option<String> = None;

    try_stream! {
        loop {
            let page = api.list_page(params, page_token.as_deref()).await?;
            let next = page.next_page_token.clone();
            debug!("Received page of {} files", page.files.len());

            yield page;

            match next.filter(|t| !t.is_empty()) {
                None => break,
                Some(t) => page_token = Some(t),
            };
        }
    }
}

/// Collect a listing, stopping once `max_files` records are in hand.
pub async fn list_all_files<A>(api: &A, args: &ListAllFilesArgs) -> anyhow::Result<Vec<DriveFile>>
where
    A: FilesApi + ?Sized,
{
    let params = args.params();
    let limit = args.limit();

    let stream = pages(api, &params);
    futures::pin_mut!(stream);

    let mut files = Vec::new();
    while let Some(page) = stream.try_next().await? {
        files.extend(page.files);

        if limit.is_some_and(|max| files.len() >= max) {
            break;
        }
    }

    // the last page may overshoot the cap
    if let Some(max) = limit {
        files.truncate(max);
    }

    info!("Listed {} files", files.len());
    Ok(files)
}
