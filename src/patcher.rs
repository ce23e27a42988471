//! Apply and revert a [`PatchSpec`] against one target file.
//!
//! Both directions run two independent passes, import block first, then
//! function block. Every pass re-reads the file and writes it back whole.
//! Nothing is backed up and nothing is locked: an interruption between a
//! read and its write, or a concurrent run against the same file, can lose
//! content.

use crate::config::{Mode, PatchSpec};
use crate::edit::{EditError, EditResult, Replacement};
use log::debug;
use std::fmt;
use std::path::Path;

/// The only failure a patch run has: reading or writing the target.
pub type PatchError = EditError;

/// Which block of the target a pass edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Import,
    Function,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Import => write!(f, "import"),
            Step::Function => write!(f, "function"),
        }
    }
}

/// Outcome of one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub result: EditResult,
}

/// The two passes for `mode`, in execution order.
pub fn plan(path: &Path, spec: &PatchSpec, mode: Mode) -> Vec<(Step, Replacement)> {
    let import = (spec.anchor_import.to_string(), spec.extended_import());
    let function = (spec.anchor_function.to_string(), spec.extended_function());

    [(Step::Import, import), (Step::Function, function)]
        .into_iter()
        .map(|(step, (anchor, extended))| {
            let replacement = match mode {
                // The bare anchor stays a prefix of the extended form, so a
                // second apply has to recognise its own output.
                Mode::Apply => Replacement::new(path, anchor, extended).skip_if_applied(),
                Mode::Revert => Replacement::new(path, extended, anchor),
            };
            (step, replacement)
        })
        .collect()
}

/// Insert both extensions after their anchors.
pub fn apply(path: &Path, spec: &PatchSpec) -> Result<Vec<StepReport>, PatchError> {
    run(path, spec, Mode::Apply)
}

/// Strip both extensions, restoring the bare anchors.
pub fn revert(path: &Path, spec: &PatchSpec) -> Result<Vec<StepReport>, PatchError> {
    run(path, spec, Mode::Revert)
}

/// Run both passes for `mode`, stopping at the first I/O error.
pub fn run(path: &Path, spec: &PatchSpec, mode: Mode) -> Result<Vec<StepReport>, PatchError> {
    let mut reports = Vec::with_capacity(2);

    for (step, replacement) in plan(path, spec, mode) {
        let result = replacement.apply()?;
        debug!("{mode} {step}: {result:?}");
        reports.push(StepReport { step, result });
    }

    Ok(reports)
}
