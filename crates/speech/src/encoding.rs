//! Text conversion for wide-character provider APIs.

/// Converts UTF-8 text into a NUL-terminated UTF-16 buffer.
///
/// Every Rust string is valid Unicode, so the conversion itself is lossless.
/// Text containing an interior NUL is rejected because the provider would
/// silently cut the utterance short at that point.
pub fn to_wide(text: &str) -> Option<Vec<u16>> {
    if text.contains('\0') {
        return None;
    }

    let mut wide: Vec<u16> = text.encode_utf16().collect();
    wide.push(0);
    Some(wide)
}
