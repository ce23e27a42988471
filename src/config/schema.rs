use std::fmt;

/// A literal two-step patch: each anchor gains its extension when applied.
///
/// The import extension is joined to its anchor with a single newline; the
/// function extension with a blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSpec {
    pub anchor_import: &'static str,
    pub extra_import: &'static str,
    pub anchor_function: &'static str,
    pub extra_function: &'static str,
}

impl PatchSpec {
    /// `anchor_import` followed by its extension, as it appears once applied.
    pub fn extended_import(&self) -> String {
        format!("{}\n{}", self.anchor_import, self.extra_import)
    }

    /// `anchor_function` followed by its extension, as it appears once applied.
    pub fn extended_function(&self) -> String {
        format!("{}\n\n{}", self.anchor_function, self.extra_function)
    }
}

/// Direction of a patch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Apply,
    Revert,
}

impl Mode {
    /// Map the CLI's `--rollback` flag onto a mode.
    pub fn from_rollback(rollback: bool) -> Self {
        if rollback {
            Mode::Revert
        } else {
            Mode::Apply
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Apply => write!(f, "apply"),
            Mode::Revert => write!(f, "revert"),
        }
    }
}
