use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::InputError;

pub fn is_gz(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Read a file as text, transparently decompressing `.gz`.
///
/// Invalid UTF-8 is replaced rather than rejected; PDF extractors routinely
/// emit stray bytes.
pub fn read_text_maybe_gz(path: &Path) -> Result<String, InputError> {
    let io_err = |source| InputError::Io {
        path: path.display().to_string(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut bytes = Vec::new();
    if is_gz(path) {
        MultiGzDecoder::new(BufReader::new(file))
            .read_to_end(&mut bytes)
            .map_err(io_err)?;
    } else {
        BufReader::new(file).read_to_end(&mut bytes).map_err(io_err)?;
    }
    Ok(decode_lossy(bytes, &path.display().to_string()))
}

pub fn read_stdin() -> Result<String, InputError> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(|source| InputError::Io {
            path: "<stdin>".to_string(),
            source,
        })?;
    Ok(decode_lossy(bytes, "<stdin>"))
}

fn decode_lossy(bytes: Vec<u8>, origin: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(source = origin, "input is not valid UTF-8; replacing invalid bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
