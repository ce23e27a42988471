use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The edit primitive: replace the first literal occurrence of `search`.
///
/// Each replacement is a full read-modify-write of its file. There is no
/// grammar awareness and no fuzzy matching; a search literal that is not
/// present verbatim leaves the file untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "Replacement does nothing until apply() is called"]
pub struct Replacement {
    /// File to rewrite in place
    pub file: PathBuf,
    /// Literal text to look for
    pub search: String,
    /// Literal text written in place of the first match
    pub replace: String,
    /// Treat a file that already contains `replace` as done
    pub skip_if_applied: bool,
}

#[derive(Error, Debug)]
pub enum EditError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EditError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        EditError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Kind of the underlying I/O failure.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            EditError::Io { source, .. } => source.kind(),
        }
    }
}

/// Result of one replacement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "EditResult should be checked for replaced/no-op"]
pub enum EditResult {
    /// The first occurrence of the search text was replaced
    Replaced { file: PathBuf, byte_offset: usize },
    /// The replacement text was already present; nothing changed
    AlreadyApplied { file: PathBuf },
    /// The search text was absent; nothing changed
    NotFound { file: PathBuf },
}

impl EditResult {
    pub fn changed(&self) -> bool {
        matches!(self, EditResult::Replaced { .. })
    }
}

/// Outcome of rewriting an in-memory buffer, before it touches disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    Replaced(usize),
    AlreadyApplied,
    NotFound,
}

impl Replacement {
    pub fn new(
        file: impl Into<PathBuf>,
        search: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            search: search.into(),
            replace: replace.into(),
            skip_if_applied: false,
        }
    }

    /// Skip the pass when the file already holds the replacement text.
    pub fn skip_if_applied(mut self) -> Self {
        self.skip_if_applied = true;
        self
    }

    /// Rewrite `content` in memory.
    ///
    /// Returns the new content (identical to the input unless a replacement
    /// happened) and what was done.
    pub fn rewrite(&self, content: &str) -> (String, Rewrite) {
        if self.skip_if_applied && !self.replace.is_empty() && content.contains(&self.replace) {
            return (content.to_string(), Rewrite::AlreadyApplied);
        }

        match replace_first(content, &self.search, &self.replace) {
            Some((rewritten, offset)) => (rewritten, Rewrite::Replaced(offset)),
            None => (content.to_string(), Rewrite::NotFound),
        }
    }

    /// Read the file, rewrite it, and write it back.
    ///
    /// The file is written back even when nothing matched. The write goes
    /// straight to the target path: no backup, no temp file, no lock.
    pub fn apply(&self) -> Result<EditResult, EditError> {
        let original =
            fs::read_to_string(&self.file).map_err(|e| EditError::io(&self.file, e))?;

        let (content, rewrite) = self.rewrite(&original);

        fs::write(&self.file, content.as_bytes()).map_err(|e| EditError::io(&self.file, e))?;

        let file = self.file.clone();
        Ok(match rewrite {
            Rewrite::Replaced(byte_offset) => {
                debug!(
                    "replaced {} bytes at offset {} in {}",
                    self.search.len(),
                    byte_offset,
                    self.file.display()
                );
                EditResult::Replaced { file, byte_offset }
            }
            Rewrite::AlreadyApplied => {
                debug!("{} already contains the replacement", self.file.display());
                EditResult::AlreadyApplied { file }
            }
            Rewrite::NotFound => {
                warn!(
                    "search text not found in {}; file left unchanged",
                    self.file.display()
                );
                EditResult::NotFound { file }
            }
        })
    }
}

/// Replace the first occurrence of `search` in `content`.
///
/// Returns `None` when `search` is empty or absent.
pub fn replace_first(content: &str, search: &str, replace: &str) -> Option<(String, usize)> {
    if search.is_empty() {
        return None;
    }
    let start = content.find(search)?;
    let end = start + search.len();

    let mut out = String::with_capacity(content.len() - search.len() + replace.len());
    out.push_str(&content[..start]);
    out.push_str(replace);
    out.push_str(&content[end..]);
    Some((out, start))
}
