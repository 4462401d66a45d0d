//! Persistence helpers.
//!
//! Two forms are offered for any serialisable value, a
//! [`crate::SymbolTable`] included: readable JSON through `serde_json`, and a
//! compact `bincode` encoding wrapped in standard base64 so it can travel as
//! text. I/O and encoding failures are surfaced unchanged; file helpers
//! attach the path.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised while persisting or restoring a value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PersistError {
    /// Reading from or writing to the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The value could not be encoded or decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The value could not be encoded or decoded in the compact binary form.
    #[error("binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    /// Text expected to hold base64 did not decode.
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A file-based operation failed.
    #[error("persistence error in '{}': {source}", path.display())]
    File {
        /// File being read or written.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: Box<PersistError>,
    },
}

impl PersistError {
    fn in_file(path: &Path, source: impl Into<Self>) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: Box::new(source.into()),
        }
    }
}

/// Serialises `value` as compact JSON into `writer`.
///
/// # Errors
///
/// Returns [`PersistError::Json`] when encoding or writing fails.
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<(), PersistError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer(writer, value)?;
    Ok(())
}

/// Serialises `value` as compact JSON into the file at `path`, replacing any
/// previous contents.
///
/// # Errors
///
/// Returns [`PersistError::File`] wrapping the I/O or JSON failure.
pub fn to_file<P, T>(path: P, value: &T) -> Result<(), PersistError>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let file = path.as_ref();
    let handle = File::create(file).map_err(|e| PersistError::in_file(file, e))?;
    let mut writer = BufWriter::new(handle);
    to_writer(&mut writer, value).map_err(|e| PersistError::in_file(file, e))?;
    writer.flush().map_err(|e| PersistError::in_file(file, e))?;
    tracing::debug!(path = %file.display(), "persisted value");
    Ok(())
}

/// Deserialises a value from JSON read out of `reader`.
///
/// The whole stream is consumed before decoding.
///
/// # Errors
///
/// Returns [`PersistError::Io`] when reading fails and
/// [`PersistError::Json`] when the input is not valid for `T`.
pub fn from_reader<R, T>(mut reader: R) -> Result<T, PersistError>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(serde_json::from_slice(&buf)?)
}

/// Deserialises a value from the JSON file at `path`.
///
/// # Errors
///
/// Returns [`PersistError::File`] wrapping the I/O or JSON failure.
pub fn from_file<P, T>(path: P) -> Result<T, PersistError>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let file = path.as_ref();
    let handle = File::open(file).map_err(|e| PersistError::in_file(file, e))?;
    from_reader(BufReader::new(handle)).map_err(|e| PersistError::in_file(file, e))
}

/// Serialises `value` into a JSON string.
///
/// # Errors
///
/// Returns [`PersistError::Json`] when encoding fails.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, PersistError> {
    Ok(serde_json::to_string(value)?)
}

/// Deserialises a value from a JSON string.
///
/// # Errors
///
/// Returns [`PersistError::Json`] when the input is not valid for `T`.
pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, PersistError> {
    Ok(serde_json::from_str(input)?)
}


/// Encodes `value` with `bincode` and returns it as standard base64.
///
/// # Examples
///
/// ```
/// use autoconfig::{SymbolTable, persist};
///
/// let table: SymbolTable = [("port", 8080_i64)].into_iter().collect();
/// let text = persist::to_base64_string(&table)?;
/// let restored: SymbolTable = persist::from_base64_str(&text)?;
/// assert_eq!(restored, table);
/// # Ok::<_, autoconfig::PersistError>(())
/// ```
///
/// # Errors
///
/// Returns [`PersistError::Binary`] when encoding fails.
pub fn to_base64_string<T: Serialize + ?Sized>(value: &T) -> Result<String, PersistError> {
    let bytes = bincode::serialize(value)?;
    Ok(STANDARD.encode(bytes))
}

/// Decodes a value previously produced by [`to_base64_string`].
///
/// Surrounding whitespace, such as a trailing newline, is ignored.
///
/// # Errors
///
/// Returns [`PersistError::Base64`] when `input` is not valid base64 and
/// [`PersistError::Binary`] when the decoded bytes are not valid for `T`.
pub fn from_base64_str<T: DeserializeOwned>(input: &str) -> Result<T, PersistError> {
    let bytes = STANDARD.decode(input.trim())?;
    Ok(bincode::deserialize(&bytes)?)
}

/// Writes the base64 form of `value` into `writer`.
///
/// # Errors
///
/// Returns [`PersistError::Binary`] when encoding fails and
/// [`PersistError::Io`] when writing fails.
pub fn to_base64_writer<W, T>(mut writer: W, value: &T) -> Result<(), PersistError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let text = to_base64_string(value)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Reads the base64 form of a value out of `reader`.
///
/// # Errors
///
/// Returns [`PersistError::Io`] when reading fails or the input is not
/// UTF-8, otherwise as for [`from_base64_str`].
pub fn from_base64_reader<R, T>(mut reader: R) -> Result<T, PersistError>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_base64_str(&text)
}

/// Writes the base64 form of `value` to the file at `path`, replacing any
/// previous contents.
///
/// # Errors
///
/// Returns [`PersistError::File`] wrapping the underlying failure.
pub fn to_base64_file<P, T>(path: P, value: &T) -> Result<(), PersistError>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let file = path.as_ref();
    let handle = File::create(file).map_err(|e| PersistError::in_file(file, e))?;
    let mut writer = BufWriter::new(handle);
    to_base64_writer(&mut writer, value).map_err(|e| PersistError::in_file(file, e))?;
    writer.flush().map_err(|e| PersistError::in_file(file, e))?;
    tracing::debug!(path = %file.display(), "persisted base64 value");
    Ok(())
}

/// Reads the base64 form of a value from the file at `path`.
///
/// # Errors
///
/// Returns [`PersistError::File`] wrapping the underlying failure.
pub fn from_base64_file<P, T>(path: P) -> Result<T, PersistError>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let file = path.as_ref();
    let handle = File::open(file).map_err(|e| PersistError::in_file(file, e))?;
    from_base64_reader(BufReader::new(handle)).map_err(|e| PersistError::in_file(file, e))
}
