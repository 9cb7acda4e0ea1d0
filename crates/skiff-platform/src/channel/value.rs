use std::io::Read;

/// Upper bound on a single channel value read.
pub const MAX_CHANNEL_BYTES: usize = 8192;

/// Reads at most [`MAX_CHANNEL_BYTES`] from `reader` and cleans the result.
///
/// Anything beyond the bound is dropped.
pub fn read_bounded<R: Read>(reader: R) -> std::io::Result<String> {
    let mut buf = Vec::with_capacity(256);
    reader.take(MAX_CHANNEL_BYTES as u64).read_to_end(&mut buf)?;
    Ok(clean_value(&buf))
}

/// Cuts a raw value at the first NUL and strips trailing line endings.
pub fn clean_value(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    let text = String::from_utf8_lossy(&raw[..end]);
    text.trim_end_matches(['\n', '\r']).to_string()
}
