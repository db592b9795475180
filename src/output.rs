use crate::error::{ReportError, Result};
use crate::reports::GroupTable;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush().map_err(|source| ReportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Write `value` as pretty JSON. Serialization happens before the file is
/// touched, so a failure never leaves a partial document.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s).map_err(|source| ReportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Global the dashboard page reads when opened without a server.
pub const JS_GLOBAL: &str = "window.DASHBOARD_DATA";

/// Write `value` as a script assigning the pretty JSON to [`JS_GLOBAL`].
pub fn write_js<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let s = format!("{} = {};\n", JS_GLOBAL, serde_json::to_string_pretty(value)?);
    std::fs::write(path, s).map_err(|source| ReportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Export every table as `<dir>/<name>.csv`, creating `dir` if needed.
pub fn export_tables(dir: &Path, tables: &[GroupTable]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::OutputWrite {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut written = Vec::with_capacity(tables.len());
    for t in tables {
        let path = dir.join(format!("{}.csv", t.name));
        write_csv(&path, &t.rows)?;
        written.push(path);
    }
    Ok(written)
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
