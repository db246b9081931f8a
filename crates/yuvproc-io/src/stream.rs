//! Byte stream plumbing for headerless raw video.
//!
//! - [`read_frame`] - Fill a frame buffer, tolerating partial reads
//! - [`open_input`], [`open_output`] - File or stdio endpoints
//! - [`probe_frame_count`] - How many whole frames a file holds
//!
//! Raw YUV streams carry no header, so a frame ends exactly where the
//! configured geometry says it does. A pipe may hand back fewer bytes per
//! `read` than asked for; [`read_frame`] keeps reading until the buffer is
//! full or the stream ends.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use tracing::{debug, warn};

/// Reads until `buf` is full or the stream ends.
///
/// Returns the number of bytes stored. A value below `buf.len()` means the
/// stream ended inside (or before) this frame.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use yuvproc_io::read_frame;
///
/// let mut input = Cursor::new(vec![1u8; 10]);
/// let mut frame = [0u8; 24];
/// assert_eq!(read_frame(&mut input, &mut frame).unwrap(), 10);
/// ```
pub fn read_frame<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Opens `path` for reading, or stdin when `path` is `None`.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "opening input file");
            Ok(Box::new(BufReader::new(File::open(path)?)))
        }
        None => {
            debug!("reading frames from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Creates `path` for writing, or stdout when `path` is `None`.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "creating output file");
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => {
            debug!("writing frames to stdout");
            Ok(Box::new(BufWriter::new(io::stdout().lock())))
        }
    }
}

/// Number of frames to process from `path`.
///
/// - `path == None` (stdin): `limit` unchanged, `None` meaning unbounded
/// - file: `min(file_len / frame_size, limit)`, where a missing or zero
///   limit means every whole frame in the file
/// - missing or unreadable file: `Some(0)`
pub fn probe_frame_count(path: Option<&Path>, frame_size: usize, limit: Option<usize>) -> Option<usize> {
    let Some(path) = path else {
        return limit;
    };
    let file_len = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot stat input file");
            return Some(0);
        }
    };
    if frame_size == 0 {
        return Some(0);
    }
    let total = usize::try_from(file_len / frame_size as u64).unwrap_or(usize::MAX);
    match limit {
        None | Some(0) => Some(total),
        Some(n) => Some(total.min(n)),
    }
}
