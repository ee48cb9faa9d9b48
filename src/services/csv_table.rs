use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use crate::errors::{StoreError, StoreResult};

/// A row type stored in a flat CSV table with a fixed header.
pub trait TableRecord: Serialize + DeserializeOwned {
    /// Header row, in file order.
    const COLUMNS: &'static [&'static str];
}

/// One CSV file holding every record of an entity, in insertion order.
///
/// A missing file reads as an empty table. Saving always rewrites the whole
/// file through a temporary sibling that is renamed into place, so readers
/// see either the old contents or the new ones. There is no locking: two
/// writers racing on the same file both succeed and the later rename wins.
pub struct CsvTable<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for CsvTable<R> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: TableRecord> CsvTable<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    pub fn load(&self) -> StoreResult<Vec<R>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No table at {}, starting empty", self.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let headers = reader.headers().map_err(|e| self.malformed(e))?.clone();
        if !headers.iter().eq(R::COLUMNS.iter().copied()) {
            tracing::error!("Unexpected header in {}: {:?}", self.display(), headers);
            return Err(StoreError::Schema {
                path: self.display(),
                expected: R::COLUMNS.join(", "),
                found: headers.iter().collect::<Vec<_>>().join(", "),
            });
        }

        let records = reader
            .deserialize()
            .collect::<Result<Vec<R>, _>>()
            .map_err(|e| self.malformed(e))?;

        tracing::trace!("Loaded {} records from {}", records.len(), self.display());
        Ok(records)
    }

    pub fn save(&self, records: &[R]) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;

        let tmp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        {
            // Header goes out explicitly so an empty table still carries it
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file());
            writer.write_record(R::COLUMNS).map_err(|e| self.write_error(e))?;
            for record in records {
                writer.serialize(record).map_err(|e| self.write_error(e))?;
            }
            writer.flush().map_err(|e| self.io_error(e))?;
        }
        self.carry_permissions(tmp.as_file()).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::debug!("Wrote {} records to {}", records.len(), self.display());
        Ok(())
    }

    // The temp file starts owner-only; give it the mode of the file it
    // replaces, or a world-readable one for a brand new table.
    fn carry_permissions(&self, tmp: &File) -> io::Result<()> {
        match fs::metadata(&self.path) {
            Ok(meta) => tmp.set_permissions(meta.permissions()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => new_table_permissions(tmp),
            Err(e) => Err(e),
        }
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io { path: self.display(), source }
    }

    fn malformed(&self, source: csv::Error) -> StoreError {
        StoreError::Malformed { path: self.display(), source }
    }

    fn write_error(&self, source: csv::Error) -> StoreError {
        StoreError::Write { path: self.display(), source }
    }
}

#[cfg(unix)]
fn new_table_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_table_permissions(_file: &File) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Note")]
        note: Option<String>,
    }

    impl TableRecord for Row {
        const COLUMNS: &'static [&'static str] = &["Name", "Note"];
    }

    fn row(name: &str, note: Option<&str>) -> Row {
        Row { name: name.to_string(), note: note.map(str::to_string) }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let table: CsvTable<Row> = CsvTable::new(dir.path().join("rows.csv"));

        assert!(table.load().unwrap().is_empty());
        assert_eq!(table.columns(), &["Name", "Note"]);
        // loading never creates the file
        assert!(!table.path().exists());
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let table: CsvTable<Row> = CsvTable::new(dir.path().join("rows.csv"));

        let rows = vec![row("b", None), row("a", Some("x, y")), row("b", Some("dup"))];
        table.save(&rows).unwrap();

        assert_eq!(table.load().unwrap(), rows);
    }

    #[test]
    fn test_empty_save_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        let table: CsvTable<Row> = CsvTable::new(&path);

        table.save(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Note\n");
        assert!(table.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let table: CsvTable<Row> = CsvTable::new(dir.path().join("data/nested/rows.csv"));

        table.save(&[row("a", None)]).unwrap();

        assert_eq!(table.load().unwrap().len(), 1);
    }

    #[test]
    fn test_wrong_header_is_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        fs::write(&path, "Name,Comment\na,b\n").unwrap();

        let table: CsvTable<Row> = CsvTable::new(&path);
        assert!(matches!(table.load(), Err(StoreError::Schema { .. })));
    }

    #[test]
    fn test_zero_byte_file_is_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        fs::write(&path, "").unwrap();

        let table: CsvTable<Row> = CsvTable::new(&path);
        assert!(matches!(table.load(), Err(StoreError::Schema { .. })));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        fs::write(&path, "Name,Note\na,b,c\n").unwrap();

        let table: CsvTable<Row> = CsvTable::new(&path);
        assert!(matches!(table.load(), Err(StoreError::Malformed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        let table: CsvTable<Row> = CsvTable::new(&path);

        table.save(&[row("a", None)]).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o644);

        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
        table.save(&[row("a", None), row("b", None)]).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o640);
    }
}
