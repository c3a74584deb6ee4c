//! Input texts for construction: files from disk and synthetic strings.

use std::{fs, path::Path};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{Error, Result};

pub const DNA_ALPHABET: &[u8] = b"ACGT";

/// Reads the whole file at `path`. The bytes are the text, trailing newlines included.
pub fn load_text_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();

    let text = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("loaded {} bytes from '{}'", text.len(), path.display());

    Ok(text)
}

/// The degenerate input: every pair of suffixes shares a prefix as long as the shorter one.
pub fn repeated_symbol_text(symbol: u8, len: usize) -> Vec<u8> {
    vec![symbol; len]
}

/// Uniformly random symbols drawn from `alphabet`, reproducible through `seed`.
pub fn random_text(len: usize, alphabet: &[u8], seed: u64) -> Result<Vec<u8>> {
    if alphabet.is_empty() {
        return if len == 0 {
            Ok(Vec::new())
        } else {
            Err(Error::EmptyAlphabet)
        };
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    Ok((0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect())
}
