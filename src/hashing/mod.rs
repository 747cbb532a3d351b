//! BLAKE3 fingerprints used to correlate the events of one analysis run.

use crate::content::ArticleContent;

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// Fingerprints only key log events; a collision merges two runs in a log search and
/// nothing else.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let bytes: [u8; 8] = hash.as_bytes()[0..8]
        .try_into()
        .expect("BLAKE3 always produces at least 8 bytes");
    u64::from_le_bytes(bytes)
}

/// Fingerprint of a single article's title and body.
pub fn content_fingerprint(article: &ArticleContent) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(article.title.as_bytes());
    hasher.update(&[0]);
    hasher.update(article.raw_text.as_bytes());
    let bytes: [u8; 8] = hasher.finalize().as_bytes()[0..8]
        .try_into()
        .expect("BLAKE3 always produces at least 8 bytes");
    u64::from_le_bytes(bytes)
}

/// Run id for a (subject, reference) pair. Order-sensitive: swapping the roles is a
/// different run.
pub fn run_fingerprint(subject: &ArticleContent, reference: &ArticleContent) -> u64 {
    let mut buf = [0u8; 16];
    buf[..8].copy_from_slice(&content_fingerprint(subject).to_le_bytes());
    buf[8..].copy_from_slice(&content_fingerprint(reference).to_le_bytes());
    hash_to_u64(&buf)
}
