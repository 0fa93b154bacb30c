//! Canonical GitHub URL construction for repo files.
//!
//! Every collected or referenced file is identified by the URL it
//! would have on GitHub: the fixed base address, the percent-encoded
//! relative folder path, a `/`, and the percent-encoded file name.
//! Both the collector and the reconciler build identifiers through
//! [`source_url`], so the two sides always agree on the construction
//! rule.

use std::path::{Component, Path};

/// Base address every file identifier is rooted at.
pub const GITHUB_URL: &str = "https://github.com/awsdocs/aws-doc-sdk-examples/tree/master/";

/// Byte kept verbatim in a URL path segment per RFC 3986.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Percent-encode one path segment. Unreserved bytes pass through,
/// everything else (including non-ASCII UTF-8 bytes) becomes `%XX`.
fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if is_unreserved(byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

/// Build the full URL for a file on GitHub.
///
/// `folder` is the path of the folder that contains the file, relative
/// to where the scan started. `file_name` may itself contain `/` (or
/// platform `\`) separators when it comes from a metadata entry; its
/// intermediate segments are merged into the folder path, with `.` and
/// `..` segments resolved the way URL joining resolves them.
pub fn source_url(folder: &Path, file_name: &str) -> String {
    let mut segments: Vec<String> = Vec::new();
    for component in folder.components() {
        match component {
            Component::Normal(part) => {
                segments.push(encode_segment(&part.to_string_lossy()));
            }
            Component::ParentDir => {
                segments.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    let mut parts: Vec<&str> = file_name.split(['/', '\\']).collect();
    let last = parts.pop().unwrap_or_default();
    for part in parts {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(encode_segment(part)),
        }
    }

    let folder_url = segments.join("/");
    format!("{GITHUB_URL}{folder_url}/{}", encode_segment(last))
}
