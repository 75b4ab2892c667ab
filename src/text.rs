use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// UTF-8 byte-order mark, as emitted by editors that save "UTF-8 with BOM".
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Error, Debug)]
pub enum TextError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// The complete content of the target file, decoded once at the start of a run.
///
/// A UTF-8 byte-order mark is stripped on read and re-emitted on write, so a
/// patch run never changes the file's encoding markers. Files without a BOM
/// round-trip byte-identically as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    had_bom: bool,
}

impl SourceText {
    /// Read and decode a file, remembering whether it carried a BOM.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, TextError> {
        let bytes = fs::read(path)?;
        let (had_bom, payload) = match bytes.strip_prefix(UTF8_BOM) {
            Some(rest) => (true, rest.to_vec()),
            None => (false, bytes),
        };
        Ok(Self {
            text: String::from_utf8(payload)?,
            had_bom,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn had_bom(&self) -> bool {
        self.had_bom
    }

    /// New value with replaced text, keeping the encoding marker state.
    pub fn with_text(&self, text: String) -> Self {
        Self {
            text,
            had_bom: self.had_bom,
        }
    }

    /// Write the text back, re-emitting the BOM if one was present on read.
    ///
    /// The whole new content replaces the whole old content in one atomic
    /// rename; there is no partial write to observe.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), TextError> {
        let path = path.as_ref();

        let mut content = Vec::with_capacity(UTF8_BOM.len() + self.text.len());
        if self.had_bom {
            content.extend_from_slice(UTF8_BOM);
        }
        content.extend_from_slice(self.text.as_bytes());

        atomic_write(path, &content)?;

        // Bump mtime so downstream build tools notice the change
        let now = filetime::FileTime::now();
        filetime::set_file_mtime(path, now)?;

        Ok(())
    }
}

/// Atomic file write: tempfile + fsync + rename.
///
/// This ensures crash safety - either the full write succeeds or nothing changes.
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), TextError> {
    // Create tempfile in same directory to ensure same filesystem
    let parent = path.parent().ok_or_else(|| {
        TextError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Path has no parent directory",
        ))
    })?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;

    temp.write_all(content)?;

    // Flush to disk (fsync)
    temp.as_file().sync_all()?;

    // Atomic rename
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_strips_bom() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("bom.cs");
        fs::write(&file_path, b"\xEF\xBB\xBFhello").unwrap();

        let source = SourceText::read(&file_path).unwrap();
        assert_eq!(source.as_str(), "hello");
        assert!(source.had_bom());
    }

    #[test]
    fn test_read_without_bom() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("plain.cs");
        fs::write(&file_path, b"hello").unwrap();

        let source = SourceText::read(&file_path).unwrap();
        assert_eq!(source.as_str(), "hello");
        assert!(!source.had_bom());
    }

    #[test]
    fn test_write_reemits_bom() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("bom.cs");
        fs::write(&file_path, b"\xEF\xBB\xBFhello").unwrap();

        let source = SourceText::read(&file_path).unwrap();
        source.with_text("goodbye".to_string()).write(&file_path).unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b"\xEF\xBB\xBFgoodbye");
    }

    #[test]
    fn test_bom_round_trip_is_byte_identical() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("bom.cs");
        let original = b"\xEF\xBB\xBFline1\nline2\n".to_vec();
        fs::write(&file_path, &original).unwrap();

        let source = SourceText::read(&file_path).unwrap();
        source.write(&file_path).unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), original);
    }

    #[test]
    fn test_write_without_bom_adds_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("plain.cs");
        fs::write(&file_path, b"hello").unwrap();

        let source = SourceText::read(&file_path).unwrap();
        source.with_text("goodbye".to_string()).write(&file_path).unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b"goodbye");
    }

    #[test]
    fn test_read_invalid_utf8_is_decode_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("latin1.cs");
        // 0xE9 is 'é' in Latin-1, not valid UTF-8 on its own
        fs::write(&file_path, b"caf\xE9").unwrap();

        let result = SourceText::read(&file_path);
        assert!(matches!(result, Err(TextError::Decode(_))));
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = SourceText::read(temp_dir.path().join("missing.cs"));
        assert!(matches!(result, Err(TextError::Io(_))));
    }

    #[test]
    fn test_atomic_write_replaces_whole_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, b"a much longer original content").unwrap();

        atomic_write(&file_path, b"short").unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b"short");
    }
}
