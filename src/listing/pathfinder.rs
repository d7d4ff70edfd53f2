use std::collections::{HashMap, HashSet};

use anyhow::Context;
use async_trait::async_trait;
use log::debug;

use crate::{DriveFile, FilesApi};

/// Turns a file into its absolute path within its drive.
#[async_trait]
pub trait PathResolver: Send {
    async fn abs_path(&mut self, file: &DriveFile) -> anyhow::Result<String>;
}

/// Resolves paths by walking the first parent of each file up to the drive
/// root. Ancestors are cached, so siblings cost one lookup per folder.
pub struct Pathfinder<'a, A: ?Sized> {
    api: &'a A,
    parents: HashMap<String, DriveFile>,
}

impl<'a, A> Pathfinder<'a, A>
where
    A: FilesApi + ?Sized,
{
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            parents: HashMap::new(),
        }
    }

    async fn parent(&mut self, id: &str) -> anyhow::Result<DriveFile> {
        if let Some(f) = self.parents.get(id) {
            return Ok(f.clone());
        }

        debug!("Looking up parent `{id}`");
        let f = self
            .api
            .get_file(id)
            .await
            .with_context(|| format!("Could not get parent `{}`", id))?;
        self.parents.insert(id.to_string(), f.clone());

        Ok(f)
    }
}

#[async_trait]
impl<'a, A> PathResolver for Pathfinder<'a, A>
where
    A: FilesApi + ?Sized,
{
    async fn abs_path(&mut self, file: &DriveFile) -> anyhow::Result<String> {
        let mut names = vec![file.name.clone()];
        let mut next = file.parents.first().cloned();
        let mut seen = HashSet::new();

        while let Some(id) = next {
            if !seen.insert(id.clone()) {
                anyhow::bail!("Parent cycle at `{id}`");
            }

            let parent = self.parent(&id).await?;

            // the drive root has no parents and is not part of the path
            if parent.parents.is_empty() {
                break;
            }

            names.push(parent.name);
            next = parent.parents.into_iter().next();
        }

        names.reverse();
        Ok(names.join("/"))
    }
}
