pub type ListResult<T> = Result<T, ListError>;

#[derive(thiserror::Error, Debug)]
pub enum ListError {
    #[error("Failed to list files: {0:#}")]
    Fetch(anyhow::Error),
    #[error(transparent)]
    PathResolution(anyhow::Error),
    #[error("Unknown selection `{0}`, expected one of 0, 1, 2 or 3")]
    UnknownSelection(i64),
    #[error("Could not write file list: {0}")]
    Io(#[from] std::io::Error),
}
