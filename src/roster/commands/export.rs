use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::Person;
use crate::store::RecordStore;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "Nombre,Apellidos,Edad";

/// Serializes people as CSV: the fixed header, then `name,surname,age` per person.
///
/// Fields are written verbatim. A comma inside a name is not quoted and will not survive a
/// re-import.
pub fn to_csv(people: &[Person]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + people.len() * 24);
    out.push_str(HEADER);
    out.push('\n');
    for person in people {
        out.push_str(&format!(
            "{},{},{}\n",
            person.name, person.surname, person.age
        ));
    }
    out
}

pub fn run<S: RecordStore>(store: &S) -> String {
    to_csv(store.people())
}

/// Appends `ext` unless the file name already ends with it (case-sensitive).
///
/// Trailing separators are dropped first, so `out/` becomes `out.csv`. A destination with no
/// file name at all (`.`, `..`, `/`) is an export error.
pub fn with_extension(path: &Path, ext: &str) -> Result<PathBuf> {
    let path: PathBuf = path.components().collect();
    let has_ext = match path.file_name() {
        Some(name) => name.to_string_lossy().ends_with(ext),
        None => {
            return Err(RosterError::Export {
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a file name"),
                path,
            })
        }
    };
    if has_ext {
        return Ok(path);
    }

    let mut raw = OsString::from(path.as_os_str());
    raw.push(ext);
    Ok(PathBuf::from(raw))
}

/// Writes the whole store to `path`, adding `ext` to the name when missing.
pub fn run_file<S: RecordStore>(store: &S, path: &Path, ext: &str) -> Result<CmdResult> {
    let path = with_extension(path, ext)?;
    fs::write(&path, run(store)).map_err(|source| RosterError::Export {
        path: path.clone(),
        source,
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Data exported: {} people to {}",
        store.len(),
        path.display()
    )));
    Ok(result.with_written_path(path))
}
