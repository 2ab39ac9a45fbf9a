//! In-memory output provider.
//!
//! Buffers every artifact in memory under a tree of named scopes. Always
//! available (no filesystem), safe for concurrent operations, and the
//! provider of choice for tests and for gathered rendering targets.

use folio_traits::{OutputProvider, OutputTarget, ProviderError};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, RwLock};

type SharedBuffer = Arc<Mutex<Vec<u8>>>;

#[derive(Debug, Default)]
struct MemoryDir {
    outputs: RwLock<BTreeMap<String, SharedBuffer>>,
    children: RwLock<BTreeMap<String, Arc<MemoryDir>>>,
}

/// An output provider that stores artifacts in memory.
///
/// Cloning the provider yields a second handle onto the same buffers, which
/// lets a test keep reading what a consumed pipeline handle wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutputProvider {
    dir: Arc<MemoryDir>,
    /// Slash-terminated scope prefix, part of every target's identity.
    prefix: String,
}

impl MemoryOutputProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned(name: &str) -> ProviderError {
        ProviderError::CreateFailed {
            path: name.to_string(),
            message: "output store lock poisoned".to_string(),
        }
    }

    fn check_name(name: &str) -> Result<(), ProviderError> {
        if name.is_empty() || name.contains('/') {
            return Err(ProviderError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    /// Reads one artifact by its slash-separated path (`"guide/intro.html"`).
    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        let mut dir = Arc::clone(&self.dir);
        let mut segments = path.split('/').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                let outputs = dir.outputs.read().ok()?;
                let buffer = outputs.get(segment)?;
                return Some(buffer.lock().ok()?.clone());
            }
            let next = {
                let children = dir.children.read().ok()?;
                Arc::clone(children.get(segment)?)
            };
            dir = next;
        }
        None
    }

    /// All artifacts, flattened to slash-separated paths.
    pub fn outputs(&self) -> BTreeMap<String, Vec<u8>> {
        let mut collected = BTreeMap::new();
        Self::collect(&self.dir, "", &mut collected);
        collected
    }

    fn collect(dir: &MemoryDir, prefix: &str, into: &mut BTreeMap<String, Vec<u8>>) {
        if let Ok(outputs) = dir.outputs.read() {
            for (name, buffer) in outputs.iter() {
                if let Ok(bytes) = buffer.lock() {
                    into.insert(format!("{}{}", prefix, name), bytes.clone());
                }
            }
        }
        if let Ok(children) = dir.children.read() {
            for (name, child) in children.iter() {
                Self::collect(child, &format!("{}{}/", prefix, name), into);
            }
        }
    }
}

impl OutputProvider for MemoryOutputProvider {
    fn new_output(&self, name: &str) -> Result<Box<dyn OutputTarget>, ProviderError> {
        Self::check_name(name)?;
        let mut outputs = self.dir.outputs.write().map_err(|_| Self::poisoned(name))?;
        let buffer = Arc::clone(outputs.entry(name.to_string()).or_default());
        Ok(Box::new(MemoryTarget { name: format!("{}{}", self.prefix, name), buffer }))
    }

    fn new_child(&self, name: &str) -> Result<Box<dyn OutputProvider>, ProviderError> {
        Self::check_name(name)?;
        let mut children = self.dir.children.write().map_err(|_| Self::poisoned(name))?;
        let child = Arc::clone(children.entry(name.to_string()).or_default());
        Ok(Box::new(MemoryOutputProvider {
            dir: child,
            prefix: format!("{}{}/", self.prefix, name),
        }))
    }

    fn name(&self) -> &'static str {
        "MemoryOutputProvider"
    }
}

struct MemoryTarget {
    name: String,
    buffer: SharedBuffer,
}

impl OutputTarget for MemoryTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&mut self) -> io::Result<Box<dyn Write + Send>> {
        // Opening truncates, matching file semantics.
        self.buffer
            .lock()
            .map_err(|_| io::Error::other("output buffer lock poisoned"))?
            .clear();
        Ok(Box::new(MemoryWriter { buffer: Arc::clone(&self.buffer) }))
    }
}

struct MemoryWriter {
    buffer: SharedBuffer,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| io::Error::other("output buffer lock poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
