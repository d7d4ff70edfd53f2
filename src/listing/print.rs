use std::{
    fmt::Display,
    io::{self, Write},
};

use chrono::{DateTime, Local, TimeZone};

use crate::DriveFile;

const HEADER: [&str; 5] = ["Id", "Name", "Type", "Size", "ModifiedTime"];
const COLUMN_PADDING: usize = 3;
const TRUNCATION_MARKER: &str = "...";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SIZE_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

pub struct PrintFileListArgs<'a> {
    pub files: &'a [DriveFile],
    /// Maximum characters of the name column, 0 for no limit.
    pub name_width: usize,
    pub skip_header: bool,
    pub size_in_bytes: bool,
}

/// Write `files` as an aligned table, in the order given. Times are shown in
/// the local time zone.
pub fn print_file_list<W: Write>(out: &mut W, args: &PrintFileListArgs) -> io::Result<()> {
    print_file_list_in(out, args, &Local)
}

fn print_file_list_in<W, Tz>(out: &mut W, args: &PrintFileListArgs, tz: &Tz) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut rows: Vec<[String; 5]> = Vec::with_capacity(args.files.len() + 1);

    if !args.skip_header {
        rows.push(HEADER.map(String::from));
    }

    rows.extend(args.files.iter().map(|f| {
        [
            f.id.clone(),
            truncate_name(&f.name, args.name_width),
            f.kind().to_string(),
            file_size(f, args.size_in_bytes),
            f.modified_time
                .as_deref()
                .map(|t| format_datetime(t, tz))
                .unwrap_or_default(),
        ]
    }));

    write_aligned(out, &rows)
}

/// Pad every column but the last to its widest cell plus [`COLUMN_PADDING`].
fn write_aligned<W: Write, const N: usize>(out: &mut W, rows: &[[String; N]]) -> io::Result<()> {
    let mut widths = [0usize; N];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i + 1 == N {
                writeln!(out, "{}", cell)?;
            } else {
                write!(out, "{:<width$}", cell, width = widths[i] + COLUMN_PADDING)?;
            }
        }
    }

    out.flush()
}

/// Cut `name` to `width` characters, ending in `...` when it was shortened.
/// A width of 0 leaves the name alone.
pub fn truncate_name(name: &str, width: usize) -> String {
    if width == 0 || name.chars().count() <= width {
        return name.to_string();
    }

    if width <= TRUNCATION_MARKER.len() {
        return name.chars().take(width).collect();
    }

    let mut truncated = name
        .chars()
        .take(width - TRUNCATION_MARKER.len())
        .collect::<String>();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

fn file_size(f: &DriveFile, in_bytes: bool) -> String {
    if f.is_dir() {
        return String::new();
    }

    format_size(f.size(), in_bytes)
}

/// Blank for unknown or zero sizes, otherwise either `<n> B` or a decimal
/// unit with one fraction digit.
pub fn format_size(bytes: Option<u64>, in_bytes: bool) -> String {
    let bytes = match bytes {
        None | Some(0) => return String::new(),
        Some(b) => b,
    };

    if in_bytes {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value > 1000.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    format!("{:.1} {}", value, SIZE_UNITS[unit])
}

/// Render an RFC 3339 timestamp in `tz`. Anything unparsable is shown as is.
pub fn format_datetime<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(tz).format(DATETIME_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}
