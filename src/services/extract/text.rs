//! Line-oriented text attachments.

use encoding_rs::{Encoding, UTF_8};

/// Decode bytes as UTF-8, dropping invalid sequences instead of failing.
///
/// A leading UTF-8 BOM is stripped. No replacement characters are inserted.
pub fn decode_text(data: &[u8]) -> String {
    let body = match Encoding::for_bom(data) {
        Some((encoding, bom_len)) if encoding == UTF_8 => &data[bom_len..],
        _ => data,
    };

    let mut text = String::with_capacity(body.len());
    for chunk in body.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Whether decoded text contains any of the qualifying sentinels.
pub fn has_sentinel<S: AsRef<str>>(text: &str, sentinels: &[S]) -> bool {
    sentinels.iter().any(|s| text.contains(s.as_ref()))
}

/// Collect every non-empty trimmed line after the first `marker` line.
///
/// The marker line itself is skipped; a later marker line is skipped too.
/// The section runs to the end of the text.
pub fn extract_text_commands(text: &str, marker: &str) -> Vec<String> {
    let mut commands = Vec::new();
    let mut in_command_section = false;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.contains(marker) {
            in_command_section = true;
            continue;
        }
        if in_command_section && !trimmed.is_empty() {
            commands.push(trimmed.to_string());
        }
    }

    commands
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
