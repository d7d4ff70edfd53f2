mod config;
mod drive_file;

pub use config::*;
pub use drive_file::*;

use serde::Deserialize;

use super::list_fields;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub files: Vec<DriveFile>,
}

/// Parameters of a `files.list` request that stay fixed across pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub query: String,
    pub fields: String,
    pub order_by: String,
    pub page_size: i64,
}

impl ListParams {
    pub fn new(query: &str, order_by: &str, page_size: i64) -> Self {
        Self {
            query: query.to_string(),
            fields: list_fields().to_string(),
            order_by: order_by.to_string(),
            page_size,
        }
    }

    /// Query string pairs, without the page token. Empty query and sort order
    /// are left out so the service applies its defaults.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("fields", self.fields.clone()),
            ("pageSize", self.page_size.to_string()),
            ("supportsAllDrives", "true".to_string()),
            ("includeItemsFromAllDrives", "true".to_string()),
        ];

        if !self.query.is_empty() {
            pairs.push(("q", self.query.clone()));
        }
        if !self.order_by.is_empty() {
            pairs.push(("orderBy", self.order_by.clone()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_skip_empty_filter_and_order() {
        let params = ListParams::new("", "", 1000);
        let keys = params
            .query_pairs()
            .into_iter()
            .map(|(k, _)| k)
            .collect::<Vec<_>>();
        assert_eq!(
            keys,
            ["fields", "pageSize", "supportsAllDrives", "includeItemsFromAllDrives"]
        );
    }

    #[test]
    fn query_pairs_carry_filter_and_order() {
        let params = ListParams::new("trashed = false", "modifiedTime desc", 30);
        let pairs = params.query_pairs();
        assert!(pairs.contains(&("q", "trashed = false".to_string())));
        assert!(pairs.contains(&("orderBy", "modifiedTime desc".to_string())));
        assert!(pairs.contains(&("pageSize", "30".to_string())));
    }

    #[test]
    fn list_response_without_files_or_token() -> anyhow::Result<()> {
        let res = serde_json::from_str::<ListResponse>("{}")?;
        assert!(res.files.is_empty());
        assert!(res.next_page_token.is_none());

        let res = serde_json::from_str::<ListResponse>(
            r#"{
                "nextPageToken": "abc",
                "files": [{ "id": "1", "name": "a", "mimeType": "text/plain" }]
            }"#,
        )?;
        assert_eq!(res.next_page_token.as_deref(), Some("abc"));
        assert_eq!(res.files.len(), 1);
        Ok(())
    }
}
