use crate::error::Error;
use crate::strings_file::format_line;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sequential writer for one language's strings file.
///
/// Each entry is written straight to the file with no buffering, so lines
/// written before a later failure stay on disk. Nothing is rolled back.
#[derive(Debug)]
pub struct StringsWriter {
    file: File,
    path: PathBuf,
    lines_written: usize,
}

impl StringsWriter {
    /// Create `dir` if needed and open `dir/file_name`, discarding any previous content.
    pub fn create(dir: &Path, file_name: &str) -> Result<Self, Error> {
        std::fs::create_dir_all(dir).map_err(|source| Error::OutputWrite {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(file_name);
        let file = File::create(&path).map_err(|source| Error::OutputWrite {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            file,
            path,
            lines_written: 0,
        })
    }

    /// Append `"KEY" = "VALUE";` with quotes in the value escaped.
    pub fn write_entry(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.file
            .write_all(format_line(key, value).as_bytes())
            .map_err(|source| Error::OutputWrite {
                path: self.path.clone(),
                source,
            })?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }
}
