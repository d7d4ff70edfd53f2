use std::fmt;

use fievar::Fields;
use serde::Deserialize;

pub const FOLDER: &str = "application/vnd.google-apps.folder";
const GOOGLE_APPS: &str = "application/vnd.google-apps.";

#[derive(Debug, Clone, Deserialize, Fields)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "md5Checksum")]
    #[fievar(name = "md5Checksum")]
    pub md5_checksum: Option<String>,
    #[serde(rename = "mimeType")]
    #[fievar(name = "mimeType")]
    pub mime_type: String,
    pub size: Option<String>,
    #[serde(rename = "modifiedTime")]
    #[fievar(name = "modifiedTime")]
    pub modified_time: Option<String>,
    #[serde(default)]
    pub parents: Vec<String>,
}

impl DriveFile {
    /// Size in bytes. Drive sends it as a JSON string and leaves it out for
    /// folders and Google Workspace documents.
    pub fn size(&self) -> Option<u64> {
        self.size.as_deref().and_then(|s| s.parse::<u64>().ok())
    }

    pub fn is_dir(&self) -> bool {
        self.mime_type == FOLDER
    }

    /// Blob content, as opposed to a Google Workspace document. Only blobs
    /// carry an md5 checksum.
    pub fn is_binary(&self) -> bool {
        self.md5_checksum.is_some() || !self.mime_type.starts_with(GOOGLE_APPS)
    }

    pub fn kind(&self) -> FileKind {
        if self.is_dir() {
            FileKind::Dir
        } else if self.is_binary() {
            FileKind::Bin
        } else {
            FileKind::Doc
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Dir,
    Bin,
    Doc,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dir => write!(f, "dir"),
            Self::Bin => write!(f, "bin"),
            Self::Doc => write!(f, "doc"),
        }
    }
}
