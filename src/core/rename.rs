//! Renaming a batch of files.
//!
//! Each path is handled on its own: missing files, names that are already
//! valid and declined overwrites are skipped, failed renames are reported,
//! and the batch always goes on with the next path.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::converter::NameConverter;
use crate::encoding;
use crate::error::Error;
use crate::io;
use crate::prompt::{PromptEngine, YesNoPrompt};

pub const DRY_RUN_BANNER: &str = "This is a dry run, files will not be renamed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    AlreadyValid,
    NoValidCharacters,
    OverwriteDeclined,
    NoAnswer,
}

#[derive(Debug)]
pub enum RenameOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    Simulated { from: PathBuf, to: PathBuf },
    Skipped(SkipReason),
    Failed(Error),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RenameSummary {
    fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed { .. } | RenameOutcome::Simulated { .. } => self.renamed += 1,
            RenameOutcome::Skipped(_) => self.skipped += 1,
            RenameOutcome::Failed(_) => self.failed += 1,
        }
    }
}

pub struct Renamer<R, W> {
    converter: NameConverter,
    prompt: PromptEngine<R, W>,
    simulate: bool,
}

impl<R: BufRead, W: Write> Renamer<R, W> {
    pub fn new(converter: NameConverter, prompt: PromptEngine<R, W>, simulate: bool) -> Self {
        Self {
            converter,
            prompt,
            simulate,
        }
    }

    pub fn run<P: AsRef<Path>>(&mut self, paths: &[P]) -> RenameSummary {
        if self.simulate {
            self.prompt.message(DRY_RUN_BANNER);
            self.prompt.message(&"-".repeat(DRY_RUN_BANNER.len()));
        }

        let mut summary = RenameSummary::default();
        for path in paths {
            let outcome = self.process(path.as_ref());
            summary.record(&outcome);
        }
        summary
    }

    pub fn process(&mut self, source: &Path) -> RenameOutcome {
        if !io::entry_exists(source) {
            self.prompt.message(&format!(
                "There is no file `{}'. (Skipped.)",
                source.display()
            ));
            return RenameOutcome::Skipped(SkipReason::NotFound);
        }

        // `..` and `/` have no base name to fix.
        let name = match source.file_name() {
            Some(file_name) => encoding::decode_file_name(file_name),
            None => Default::default(),
        };
        if !self.converter.is_invalid(&name) {
            self.prompt.message(&format!(
                "`{}' already is a valid filename. (Skipped.)",
                source.display()
            ));
            return RenameOutcome::Skipped(SkipReason::AlreadyValid);
        }

        let converted = self.converter.sanitize_base_name(&name);
        if converted.is_empty() {
            self.prompt.message(&format!(
                "`{}' has no valid characters left. (Skipped.)",
                source.display()
            ));
            return RenameOutcome::Skipped(SkipReason::NoValidCharacters);
        }
        // The parent keeps its OS bytes; only the base name is replaced.
        let target = source.with_file_name(converted);

        if io::entry_exists(&target) {
            let question = YesNoPrompt::new(format!(
                "File `{}' already exists. Overwrite?",
                target.display()
            ));
            match self.prompt.yes_no(&question) {
                Ok(true) => {}
                Ok(false) => return RenameOutcome::Skipped(SkipReason::OverwriteDeclined),
                Err(err) => {
                    self.prompt.message("");
                    self.prompt.message(&format!("{}. (Skipped.)", err));
                    return RenameOutcome::Skipped(SkipReason::NoAnswer);
                }
            }
        }

        self.prompt.message(&format!(
            "Moving from `{}' to `{}'.",
            source.display(),
            target.display()
        ));

        if self.simulate {
            return RenameOutcome::Simulated {
                from: source.to_path_buf(),
                to: target,
            };
        }

        match io::rename_file(source, &target) {
            Ok(()) => RenameOutcome::Renamed {
                from: source.to_path_buf(),
                to: target,
            },
            Err(err) => {
                self.prompt.message(&format!(
                    "Could not rename `{}' to `{}': {}. (Skipped.)",
                    source.display(),
                    target.display(),
                    err
                ));
                RenameOutcome::Failed(err)
            }
        }
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }
}
