use super::BookStore;
use crate::book::AddressBook;
use crate::error::{Result, RolodexError};
use crate::model::{Birthday, Name, Phone, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const FORMAT_NAME: &str = "rolodex";
const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    format: String,
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "schema")]
enum StoredEntry {
    #[serde(rename = "record.v1")]
    RecordV1(RecordV1),
}

#[derive(Debug, Serialize, Deserialize)]
struct RecordV1 {
    key: String,
    name: String,
    phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<NaiveDate>,
}

impl From<&Record> for StoredEntry {
    fn from(record: &Record) -> Self {
        StoredEntry::RecordV1(RecordV1 {
            key: record.name().to_string(),
            name: record.name().to_string(),
            phones: record.phones().iter().map(Phone::to_string).collect(),
            birthday: record.birthday().map(Birthday::date),
        })
    }
}

impl StoredEntry {
    fn into_record(self, line: usize) -> Result<Record> {
        let corrupt = |reason: String| RolodexError::Corrupt { line, reason };
        match self {
            StoredEntry::RecordV1(entry) => {
                let name = Name::new(&entry.name).map_err(|e| corrupt(e.to_string()))?;
                if name.as_str() != entry.key {
                    return Err(corrupt(format!(
                        "key '{}' does not match name '{}'",
                        entry.key, name
                    )));
                }
                let phones = entry
                    .phones
                    .iter()
                    .map(|p| Phone::parse(p))
                    .collect::<Result<Vec<_>>>()
                    .map_err(|e| corrupt(e.to_string()))?;
                let birthday = entry.birthday.map(Birthday::from_date);
                Ok(Record::from_parts(name, phones, birthday))
            }
        }
    }
}

/// Single-file store for the address book.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RolodexError::Io)?;
            }
        }
        Ok(())
    }
}

fn check_header(line: &str) -> Result<()> {
    let header: Header = serde_json::from_str(line)
        .map_err(|e| RolodexError::UnsupportedFormat(format!("unreadable header: {}", e)))?;
    if header.format != FORMAT_NAME {
        return Err(RolodexError::UnsupportedFormat(format!(
            "unknown format '{}'",
            header.format
        )));
    }
    if header.version != FORMAT_VERSION {
        return Err(RolodexError::UnsupportedFormat(format!(
            "version {} (expected {})",
            header.version, FORMAT_VERSION
        )));
    }
    Ok(())
}

impl BookStore for FileStore {
    fn load(&self) -> Result<Option<AddressBook>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no backup file");
                return Ok(None);
            }
            Err(e) => return Err(RolodexError::Io(e)),
        };

        let mut book = AddressBook::new();
        let mut saw_header = false;

        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(RolodexError::Io)?;
            if line.trim().is_empty() {
                continue;
            }
            if !saw_header {
                check_header(&line)?;
                saw_header = true;
                continue;
            }
            let line_no = idx + 1;
            let entry: StoredEntry =
                serde_json::from_str(&line).map_err(|e| RolodexError::Corrupt {
                    line: line_no,
                    reason: e.to_string(),
                })?;
            let record = entry.into_record(line_no)?;
            if book.add_record(record).is_some() {
                debug!(line = line_no, "duplicate key replaced an earlier entry");
            }
        }

        info!(path = %self.path.display(), contacts = book.len(), "loaded address book");
        Ok(Some(book))
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let tmp = self.temp_path();

        {
            let file = File::create(&tmp).map_err(RolodexError::Io)?;
            let mut writer = BufWriter::new(file);

            let header = Header {
                format: FORMAT_NAME.to_string(),
                version: FORMAT_VERSION,
            };
            writeln!(writer, "{}", serde_json::to_string(&header)?)?;

            for record in book {
                let entry = StoredEntry::from(record);
                writeln!(writer, "{}", serde_json::to_string(&entry)?)?;
            }

            writer.flush().map_err(RolodexError::Io)?;
            writer.get_ref().sync_all().map_err(RolodexError::Io)?;
        }

        fs::rename(&tmp, &self.path).map_err(RolodexError::Io)?;
        info!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();

        let mut al = Record::new("Al", Some("1990.05.17")).unwrap();
        al.add_phone("5551234567");
        al.add_phone("5550000000");
        book.add_record(al);

        book.add_record(Record::new("Bo", None).unwrap());

        let mut cy = Record::new("Cy Young", None).unwrap();
        cy.add_phone("1234567890");
        cy.add_phone("1234567890");
        book.add_record(cy);

        book
    }

    #[test]
    fn missing_file_loads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("contacts.jsonl"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("contacts.jsonl"));
        let book = sample_book();

        store.save(&book).unwrap();
        let loaded = FileStore::new(store.path()).load().unwrap().unwrap();

        assert_eq!(loaded, book);
        let names: Vec<&str> = loaded.names().collect();
        assert_eq!(names, vec!["Al", "Bo", "Cy Young"]);
    }

    #[test]
    fn save_creates_parent_dirs_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("contacts.jsonl");
        let mut store = FileStore::new(&path);
        store.save(&sample_book()).unwrap();

        assert!(path.exists());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn one_line_per_contact_after_header() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("contacts.jsonl"));
        store.save(&sample_book()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], r#"{"format":"rolodex","version":1}"#);
        assert!(lines[1].contains(r#""schema":"record.v1""#));
        assert!(lines[1].contains(r#""birthday":"1990-05-17""#));
        assert!(!lines[2].contains("birthday"));
    }

    #[test]
    fn empty_book_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("contacts.jsonl"));
        store.save(&AddressBook::new()).unwrap();
        assert!(store.load().unwrap().unwrap().is_empty());
    }

    #[test]
    fn duplicate_keys_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.jsonl");
        fs::write(
            &path,
            concat!(
                "{\"format\":\"rolodex\",\"version\":1}\n",
                "{\"schema\":\"record.v1\",\"key\":\"Al\",\"name\":\"Al\",\"phones\":[\"1111111111\"]}\n",
                "{\"schema\":\"record.v1\",\"key\":\"Bo\",\"name\":\"Bo\",\"phones\":[]}\n",
                "{\"schema\":\"record.v1\",\"key\":\"Al\",\"name\":\"Al\",\"phones\":[\"2222222222\"]}\n",
            ),
        )
        .unwrap();

        let book = FileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.find("Al").unwrap().phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn unknown_version_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.jsonl");
        fs::write(&path, "{\"format\":\"rolodex\",\"version\":9}\n").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, RolodexError::UnsupportedFormat(_)));
    }

    #[test]
    fn invalid_phone_in_file_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.jsonl");
        fs::write(
            &path,
            concat!(
                "{\"format\":\"rolodex\",\"version\":1}\n",
                "{\"schema\":\"record.v1\",\"key\":\"Al\",\"name\":\"Al\",\"phones\":[\"12\"]}\n",
            ),
        )
        .unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, RolodexError::Corrupt { line: 2, .. }));
    }

    #[test]
    fn unknown_schema_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.jsonl");
        fs::write(
            &path,
            concat!(
                "{\"format\":\"rolodex\",\"version\":1}\n",
                "{\"schema\":\"record.v7\",\"key\":\"Al\"}\n",
            ),
        )
        .unwrap();

        assert!(matches!(
            FileStore::new(&path).load(),
            Err(RolodexError::Corrupt { line: 2, .. })
        ));
    }
}
