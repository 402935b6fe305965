use super::types::{Attachment, ContainerError};
use crate::services::config::EMBEDDINGS_PREFIX;
use std::io::{Cursor, Read};

/// Collect every attachment stored under `word/embeddings/`, in archive order.
pub fn read_attachments(data: &[u8]) -> Result<Vec<Attachment>, ContainerError> {
    read_attachments_with_prefix(data, EMBEDDINGS_PREFIX)
}

/// Collect every file entry whose path starts with `prefix`, in archive order.
///
/// The whole container is opened in memory. Any entry that cannot be
/// decompressed fails the call; no partial list is returned.
pub fn read_attachments_with_prefix(
    data: &[u8],
    prefix: &str,
) -> Result<Vec<Attachment>, ContainerError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| ContainerError::Format(e.to_string()))?;

    let mut attachments = Vec::new();
    for i in 0..archive.len() {
        // Only entries under the prefix are opened; others may be unreadable
        let path = match archive.name_for_index(i) {
            Some(name) if name.starts_with(prefix) && !name.ends_with('/') => name.to_string(),
            _ => continue,
        };

        let mut entry = archive.by_index(i).map_err(|e| ContainerError::Entry {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let mut buf = Vec::new();
        entry
            .read_to_end(&mut buf)
            .map_err(|e| ContainerError::Entry {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        log::debug!("Found attachment '{}' ({} bytes)", path, buf.len());
        attachments.push(Attachment::from_entry(&path, buf));
    }

    Ok(attachments)
}
