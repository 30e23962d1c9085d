use crate::SyncError;
use std::fmt;

pub const DEFAULT_MARKER: &str = "HCLOUD-REPLACE";

/// Name of the token pair delimiting the managed region of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    name: String,
}

impl Marker {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn start_token(&self) -> String {
        format!("##START {} ##", self.name)
    }

    #[must_use]
    pub fn end_token(&self) -> String {
        format!("##END {} ##", self.name)
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

/// Whether the managed region was newly appended or an existing one was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Inserted,
    Replaced,
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted => f.write_str("inserted"),
            Self::Replaced => f.write_str("replaced"),
        }
    }
}

/// Result of applying a block to a file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub content: String,
    pub mode: EditMode,
}

/// Put `block` into the region delimited by `marker` inside `original`.
///
/// If the start token is present, everything from its first occurrence
/// through the last end token after it is replaced, so several stale
/// regions collapse into one. Otherwise a new region is appended.
/// Text outside the region is left untouched.
///
/// # Errors
///
/// Returns `SyncError::Marker` if a start token has no end token after it.
pub fn apply(marker: &Marker, original: &str, block: &str) -> crate::Result<Edit> {
    let start_token = marker.start_token();
    let end_token = marker.end_token();

    let Some(start_pos) = original.find(&start_token) else {
        let mut content = String::with_capacity(
            original.len() + start_token.len() + block.len() + end_token.len() + 5,
        );
        content.push_str(original);
        content.push_str("\n\n");
        content.push_str(&start_token);
        content.push_str("\n\n");
        content.push_str(block);
        content.push_str(&end_token);
        content.push('\n');
        return Ok(Edit { content, mode: EditMode::Inserted });
    };

    let remaining = original
        .get(start_pos..)
        .ok_or_else(|| SyncError::Marker(format!("Invalid boundary for {start_token}")))?;
    let Some(end_rel) = remaining.rfind(&end_token) else {
        return Err(SyncError::Marker(format!(
            "Found {start_token} but no {end_token} after it"
        )));
    };

    let end_with_marker = start_pos
        .checked_add(end_rel)
        .and_then(|pos| pos.checked_add(end_token.len()))
        .ok_or_else(|| SyncError::Marker("End marker position overflow".to_string()))?;

    let prefix = original
        .get(..start_pos)
        .ok_or_else(|| SyncError::Marker(format!("Invalid boundary for {start_token}")))?;
    let suffix = original
        .get(end_with_marker..)
        .ok_or_else(|| SyncError::Marker(format!("Invalid boundary for {end_token}")))?;

    Ok(Edit {
        content: format!("{prefix}{start_token}\n\n{block}{end_token}{suffix}"),
        mode: EditMode::Replaced,
    })
}
