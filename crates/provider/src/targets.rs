//! Single-destination output targets.

use folio_traits::OutputTarget;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// An output target backed by one file path. The file is created (or
/// truncated) when the writer is acquired, not before.
#[derive(Debug)]
pub struct FileTarget {
    path: PathBuf,
    name: String,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl OutputTarget for FileTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&mut self) -> io::Result<Box<dyn Write + Send>> {
        let file = File::create(&self.path)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// An output target wrapping a caller-supplied writer.
///
/// The writer can be acquired once; a second `open` is an error.
pub struct WriterTarget {
    name: String,
    writer: Option<Box<dyn Write + Send>>,
}

impl WriterTarget {
    pub fn new(name: impl Into<String>, writer: Box<dyn Write + Send>) -> Self {
        Self { name: name.into(), writer: Some(writer) }
    }
}

impl OutputTarget for WriterTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&mut self) -> io::Result<Box<dyn Write + Send>> {
        self.writer.take().ok_or_else(|| {
            io::Error::other(format!("writer '{}' was already acquired", self.name))
        })
    }
}

/// An output target bound to the process's standard output.
#[derive(Debug, Default)]
pub struct StdoutTarget;

impl StdoutTarget {
    pub fn new() -> Self {
        Self
    }
}

impl OutputTarget for StdoutTarget {
    fn name(&self) -> &str {
        "stdout"
    }

    fn open(&mut self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }
}
