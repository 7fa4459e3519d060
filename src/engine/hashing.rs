//! File hashing utilities: hash-only and copy-while-hashing, both in a single streaming pass.

use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::RunError;
use crate::types::DigestAlgo;
use crate::utils::config::HashingConsts;

/// Running digest for one file. Implements [`Write`] so it can sit behind a [`TeeWriter`].
pub enum FileDigest {
    Sha1(Sha1),
    Blake3(Box<blake3::Hasher>),
}

impl FileDigest {
    pub fn new(algo: DigestAlgo) -> Self {
        match algo {
            DigestAlgo::Sha1 => FileDigest::Sha1(Sha1::new()),
            DigestAlgo::Blake3 => FileDigest::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            FileDigest::Sha1(h) => Digest::update(h, data),
            FileDigest::Blake3(h) => {
                h.update(data);
            }
        }
    }

    /// Lowercase hex of the final digest.
    pub fn finalize_hex(self) -> String {
        match self {
            FileDigest::Sha1(h) => hex::encode(h.finalize()),
            FileDigest::Blake3(h) => h.finalize().to_hex().to_string(),
        }
    }
}

impl Write for FileDigest {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Which sink of a [`TeeWriter`] returned an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeeSide {
    Primary,
    Secondary,
}

/// Fan-out sink: every buffer goes to `primary` and then to `secondary`.
/// The side of the last failed write or flush is kept in [`failed_side`](Self::failed_side).
pub struct TeeWriter<A, B> {
    primary: A,
    secondary: B,
    failed: Option<TeeSide>,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self {
            primary,
            secondary,
            failed: None,
        }
    }

    pub fn failed_side(&self) -> Option<TeeSide> {
        self.failed
    }

    pub fn into_inner(self) -> (A, B) {
        (self.primary, self.secondary)
    }

    fn mark<T>(&mut self, side: TeeSide, res: io::Result<T>) -> io::Result<T> {
        if res.is_err() {
            self.failed = Some(side);
        }
        res
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let res = self.primary.write_all(buf);
        self.mark(TeeSide::Primary, res)?;
        let res = self.secondary.write_all(buf);
        self.mark(TeeSide::Secondary, res)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let res = self.primary.flush();
        self.mark(TeeSide::Primary, res)?;
        let res = self.secondary.flush();
        self.mark(TeeSide::Secondary, res)
    }
}

/// Read `reader` to EOF in fixed chunks, writing each chunk to `sink`. Returns bytes moved.
pub fn stream_into<R: Read, W: Write>(reader: &mut R, sink: &mut W) -> io::Result<u64> {
    let mut buffer = vec![0u8; HashingConsts::READ_CHUNK_SIZE];
    let mut total = 0_u64;
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        sink.write_all(&buffer[..n])?;
        total += n as u64;
    }
    Ok(total)
}

/// Hash the file at `path`. Open and read failures are both fatal.
pub fn hash_file(path: &Path, algo: DigestAlgo) -> crate::Result<String> {
    const OP: &str = "hash";
    let mut file = File::open(path).map_err(|e| RunError::file_io(OP, path, e))?;
    let mut digest = FileDigest::new(algo);
    stream_into(&mut file, &mut digest).map_err(|e| RunError::file_io(OP, path, e))?;
    Ok(digest.finalize_hex())
}

/// Copy `src` to `dest` (created or truncated) and hash the bytes in the same read loop.
/// Returns `(bytes_written, hex_digest)`. Both handles close on every return path.
pub fn copy_and_hash(src: &Path, dest: &Path, algo: DigestAlgo) -> crate::Result<(u64, String)> {
    const OP: &str = "copy";
    let mut source = File::open(src).map_err(|e| RunError::file_io(OP, src, e))?;
    let target = File::create(dest).map_err(|e| RunError::file_io(OP, dest, e))?;

    let mut tee = TeeWriter::new(target, FileDigest::new(algo));
    let streamed = stream_into(&mut source, &mut tee).and_then(|n| tee.flush().map(|()| n));
    let bytes = streamed.map_err(|e| match tee.failed_side() {
        Some(TeeSide::Primary) => RunError::file_io(OP, dest, e),
        _ => RunError::file_io(OP, src, e),
    })?;

    let (_target, digest) = tee.into_inner();
    Ok((bytes, digest.finalize_hex()))
}
