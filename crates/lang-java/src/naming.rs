//! Class names for script files.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("file name `{0}` yields an empty class name")]
    EmptyName(String),

    #[error("path `{0}` has no file name")]
    NoFileName(String),
}

/// Derive a class name from a script file name.
///
/// The directory prefix is dropped, then `extension` if the name ends with
/// it, otherwise everything from the first `.`. The first character is
/// upper-cased and any remaining `.` becomes `_`.
///
/// # Examples
/// ```ignore
/// generate_name_by_file_name("dir/my.script.kts", ".kts") => Ok("My_script")
/// generate_name_by_file_name("foo.txt", ".kts") => Ok("Foo")
/// ```
pub fn generate_name_by_file_name(file_name: &str, extension: &str) -> Result<String, NamingError> {
    let base = match file_name.rfind('/') {
        Some(pos) => &file_name[pos + 1..],
        None => file_name,
    };
    let stem = match base.strip_suffix(extension) {
        Some(stem) => stem,
        None => base.split('.').next().unwrap_or(base),
    };

    let mut chars = stem.chars();
    let Some(first) = chars.next() else {
        return Err(NamingError::EmptyName(file_name.to_string()));
    };
    let name: String = first.to_uppercase().chain(chars).collect();
    Ok(name.replace('.', "_"))
}

pub fn script_class_name(path: &Path, extension: &str) -> Result<String, NamingError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| NamingError::NoFileName(path.display().to_string()))?;
    generate_name_by_file_name(file_name, extension)
}
