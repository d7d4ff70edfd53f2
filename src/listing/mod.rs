mod fetch;
mod pathfinder;
mod print;

pub use fetch::*;
pub use pathfinder::*;
pub use print::*;

use std::io::Write;

use log::debug;

use crate::{FilesApi, ListError, ListResult};

#[derive(Debug, Clone, Default)]
pub struct ListFilesArgs {
    pub query: String,
    pub sort_order: String,
    /// Selection code, see [`Selection`].
    pub selection: i64,
    /// Zero or negative lists everything.
    pub max_files: i64,
    pub name_width: usize,
    pub skip_header: bool,
    pub size_in_bytes: bool,
    /// Replace names with their absolute path.
    pub abs_path: bool,
}

/// List files and print them as a table to `out`.
///
/// Nothing is written until every page is fetched and, with
/// [`ListFilesArgs::abs_path`], every path is resolved.
pub async fn list<A, R, W>(
    api: &A,
    resolver: &mut R,
    args: &ListFilesArgs,
    out: &mut W,
) -> ListResult<()>
where
    A: FilesApi + ?Sized,
    R: PathResolver + ?Sized,
    W: Write,
{
    let list_args = ListAllFilesArgs {
        query: args.query.clone(),
        sort_order: args.sort_order.clone(),
        selection: Selection::try_from(args.selection)?,
        max_files: args.max_files,
    };

    let mut files = list_all_files(api, &list_args)
        .await
        .map_err(ListError::Fetch)?;

    if args.abs_path {
        for f in files.iter_mut() {
            let path = resolver
                .abs_path(f)
                .await
                .map_err(ListError::PathResolution)?;
            debug!("{} -> {}", f.id, path);
            f.name = path;
        }
    }

    print_file_list(
        out,
        &PrintFileListArgs {
            files: &files,
            name_width: args.name_width,
            skip_header: args.skip_header,
            size_in_bytes: args.size_in_bytes,
        },
    )?;

    Ok(())
}
