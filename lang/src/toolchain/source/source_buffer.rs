use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Map(#[from] mmap_rs::Error),

    #[error("file is too large to map: {0} bytes")]
    TooLarge(u64),
}

enum SourceBufferKind<'a> {
    File { buffer: mmap_rs::Mmap },
    Memory { bytes: &'a [u8] },
    Owned { bytes: Vec<u8> },
}

// Keeps source and a file name in the same object, so they provide the same lifetimes.
pub struct SourceBuffer<'a> {
    kind: SourceBufferKind<'a>,
    file_name: String,
}

impl<'a> SourceBuffer<'a> {
    // Does nothing to check if the input file is valid utf8, the lexer reports bad sequences.
    pub fn new_from_file(file_path: &Path) -> Result<SourceBuffer<'static>, SourceError> {
        let file = File::open(file_path)?;
        let len = File::metadata(&file)?.len();
        let file_name = file_path.display().to_string();

        // Zero-length mappings are rejected by the OS.
        if len == 0 {
            let kind = SourceBufferKind::Owned { bytes: Vec::new() };
            return Ok(SourceBuffer { kind, file_name });
        }

        let size = usize::try_from(len).map_err(|_| SourceError::TooLarge(len))?;
        let buffer = unsafe { mmap_rs::MmapOptions::new(size)?.with_file(&file, 0).map()? };
        tracing::debug!(file = file_name.as_str(), bytes = size, "mapped source file");
        Ok(SourceBuffer { kind: SourceBufferKind::File { buffer }, file_name })
    }

    /// Reads all of `reader` into an owned buffer, for standard input.
    pub fn new_from_reader(
        mut reader: impl Read,
        name: &str,
    ) -> Result<SourceBuffer<'static>, SourceError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(SourceBuffer { kind: SourceBufferKind::Owned { bytes }, file_name: String::from(name) })
    }

    pub fn new_from_string(string: &'a str, name: &str) -> SourceBuffer<'a> {
        let file_name = String::from(name);
        SourceBuffer { kind: SourceBufferKind::Memory { bytes: string.as_bytes() }, file_name }
    }

    pub fn code(&self) -> &[u8] {
        match &self.kind {
            SourceBufferKind::File { buffer } => buffer.as_slice(),
            SourceBufferKind::Memory { bytes } => *bytes,
            SourceBufferKind::Owned { bytes } => bytes.as_slice(),
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }
}
