//! Photo attachments carried inside wishes as `data:` URIs.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

use anyhow::{bail, Context};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use eframe::egui::{self, load::Bytes};
use tracing::warn;

/// Largest photo accepted from disk.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Reads an image file and embeds it as `data:<mime>;base64,<payload>`.
pub fn attach_image(path: &Path) -> anyhow::Result<String> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let Some(mime) = mime_for_extension(ext) else {
        bail!("unsupported image type: {}", path.display());
    };
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if bytes.len() > MAX_IMAGE_BYTES {
        bail!(
            "{} is {} bytes, the limit is {MAX_IMAGE_BYTES}",
            path.display(),
            bytes.len()
        );
    }
    Ok(encode_data_uri(mime, &bytes))
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub fn decode_data_uri(uri: &str) -> anyhow::Result<Vec<u8>> {
    let Some(rest) = uri.strip_prefix("data:") else {
        bail!("not a data URI");
    };
    let Some((header, payload)) = rest.split_once(',') else {
        bail!("data URI has no payload");
    };
    if !header.ends_with(";base64") {
        bail!("data URI is not base64 encoded");
    }
    STANDARD
        .decode(payload.trim())
        .context("invalid base64 payload")
}

/// Decoded attachment bytes keyed by a stable id, so a data URI is decoded
/// once rather than on every repaint.
#[derive(Default)]
pub struct ImageCache {
    decoded: HashMap<String, Option<Bytes>>,
}

impl ImageCache {
    pub fn image(&mut self, key: &str, data_uri: &str) -> Option<egui::Image<'static>> {
        let bytes = self
            .decoded
            .entry(key.to_owned())
            .or_insert_with(|| match decode_data_uri(data_uri) {
                Ok(bytes) => Some(Bytes::from(bytes)),
                Err(err) => {
                    warn!(key, error = %err, "skipping undecodable attachment");
                    None
                }
            })
            .clone()?;
        Some(egui::Image::from_bytes(texture_uri(key), bytes))
    }

    pub fn forget(&mut self, ctx: &egui::Context, key: &str) {
        if self.decoded.remove(key).is_some() {
            ctx.forget_image(&texture_uri(key));
        }
    }
}

/// Cache key for a stored wish's photo. Ids may repeat, so the payload is
/// part of the key.
pub fn wish_image_key(id: &str, data_uri: &str) -> String {
    let mut hasher = DefaultHasher::new();
    data_uri.hash(&mut hasher);
    format!("wish/{id}/{:016x}", hasher.finish())
}

fn texture_uri(key: &str) -> String {
    format!("bytes://{key}")
}
