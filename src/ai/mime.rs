/// Sniff the content type of an uploaded image from its magic bytes.
///
/// Only JPEG and PNG uploads are accepted; anything else is `None`.
pub fn detect_image_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("image/png"),
        _ => None,
    }
}
