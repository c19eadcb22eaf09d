//! Content sniffing
//!
//! Classifies a file from its first few hundred bytes. Unreadable paths are
//! neither binary nor images.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::metadata::get_ext;
use crate::options::InspectOptions;

/// Image formats recognised by [`image_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Webp,
    Tiff,
    Ico,
    Svg,
}

const MAGIC: &[(&[u8], ImageFormat)] = &[
    (b"\x89PNG\r\n\x1a\n", ImageFormat::Png),
    (b"\xff\xd8\xff", ImageFormat::Jpeg),
    (b"GIF87a", ImageFormat::Gif),
    (b"GIF89a", ImageFormat::Gif),
    (b"BM", ImageFormat::Bmp),
    (b"II*\x00", ImageFormat::Tiff),
    (b"MM\x00*", ImageFormat::Tiff),
    (b"\x00\x00\x01\x00", ImageFormat::Ico),
];

fn read_prefix(path: &Path, len: usize) -> io::Result<Vec<u8>> {
    let mut head = Vec::with_capacity(len);
    File::open(path)?.take(len as u64).read_to_end(&mut head)?;
    Ok(head)
}

/// Binary when the prefix holds a NUL byte or is not UTF-8 text.
pub fn is_binary(path: impl AsRef<Path>) -> bool {
    is_binary_with(path, &InspectOptions::default())
}

pub fn is_binary_with(path: impl AsRef<Path>, options: &InspectOptions) -> bool {
    match read_prefix(path.as_ref(), options.prefix_len) {
        Ok(head) => looks_binary(&head),
        Err(_) => false,
    }
}

fn looks_binary(head: &[u8]) -> bool {
    if head.contains(&0) {
        return true;
    }
    // A multi-byte character cut off by the prefix length is still text.
    match std::str::from_utf8(head) {
        Ok(_) => false,
        Err(e) => e.error_len().is_some(),
    }
}

pub fn is_image(path: impl AsRef<Path>) -> bool {
    image_format(path).is_some()
}

pub fn image_format(path: impl AsRef<Path>) -> Option<ImageFormat> {
    image_format_with(path, &InspectOptions::default())
}

/// Detect an image by its magic bytes. Text formats listed in
/// `options.text_image_extensions` are accepted when the prefix holds an
/// `<svg` tag.
pub fn image_format_with(path: impl AsRef<Path>, options: &InspectOptions) -> Option<ImageFormat> {
    let path = path.as_ref();
    let head = read_prefix(path, options.prefix_len).ok()?;

    if let Some(format) = sniff_magic(&head) {
        return Some(format);
    }

    let ext = get_ext(path);
    let text_image = options
        .text_image_extensions
        .iter()
        .any(|known| known.eq_ignore_ascii_case(&ext));
    if text_image && String::from_utf8_lossy(&head).contains("<svg") {
        return Some(ImageFormat::Svg);
    }
    None
}

fn sniff_magic(head: &[u8]) -> Option<ImageFormat> {
    if head.len() >= 12 && &head[..4] == b"RIFF" && &head[8..12] == b"WEBP" {
        return Some(ImageFormat::Webp);
    }
    MAGIC
        .iter()
        .find(|(magic, _)| head.starts_with(magic))
        .map(|(_, format)| *format)
}
