//! Fixed-size batching of input comments.

/// Maximum number of comments sent to the model in one chunk call.
pub const CHUNK_SIZE: usize = 100;

/// Split `comments` into ordered chunks of at most `size` items.
///
/// Every comment lands in exactly one chunk and original order is kept, so
/// concatenating the chunks reproduces the input. Only the final chunk can be
/// shorter than `size`. An empty input yields no chunks. A `size` of zero is
/// treated as one.
#[must_use]
pub fn chunk_comments<T>(comments: &[T], size: usize) -> Vec<&[T]> {
    comments.chunks(size.max(1)).collect()
}
