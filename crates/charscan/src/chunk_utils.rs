use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks.
///
/// Chunk boundaries ignore UTF-8 structure on purpose: a multi-byte code
/// point may straddle two chunks, which is exactly what a scanner fed from a
/// slow source has to cope with.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    if payload.is_empty() {
        return Vec::new();
    }
    let chunk_size = payload.len().div_ceil(parts);
    payload.chunks(chunk_size).collect()
}
