//! One organizer run: scan, group by artist, preview, confirm, move.

use std::path::Path;

use crate::classify::MoveAction;
use crate::config::{Settings, SingleAlbumPolicy};
use crate::console::Console;
use crate::error::OrganizeError;
use crate::executor::{execute, relative_display};
use crate::file_utils::FileSystem;
use crate::folder::FolderRecord;
use crate::logger::Logger;
use crate::plan::{build_plan, MovePlan};
use crate::registry::ArtistRegistry;
use crate::report::{RunReport, RunStatus};

const CHOICE_MOVE_ALL: &str = "1";
const CHOICE_KEEP_SINGLES: &str = "2";

pub struct Organizer<'a> {
    fs: &'a dyn FileSystem,
    console: &'a mut dyn Console,
    logger: &'a Logger,
    settings: &'a Settings,
}

impl<'a> Organizer<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        console: &'a mut dyn Console,
        logger: &'a Logger,
        settings: &'a Settings,
    ) -> Self {
        Self {
            fs,
            console,
            logger,
            settings,
        }
    }

    /// Run against `root`. Only an invalid root is an error; per-folder
    /// failures end up in the report.
    pub fn run(&mut self, root: &Path) -> anyhow::Result<RunReport> {
        if !self.fs.is_dir(root) {
            return Err(OrganizeError::InvalidRoot(root.to_path_buf()).into());
        }
        let mut report = RunReport::new(root, self.settings.dry_run);

        self.logger.info(&format!("Scanning: {}\n", root.display()));
        self.logger
            .progress("Finding folders with 'Artist - Album' pattern at all depths...\n");

        let records = self.scan(root);
        report.found = records.len();
        if records.is_empty() {
            return Ok(self.finish(report, RunStatus::NothingFound));
        }
        self.logger
            .info(&format!("Found {} folders to organize\n", records.len()));

        let registry = ArtistRegistry::from_records(&records);
        self.logger.debug(&format!(
            "{} artists after collapsing collaborations",
            registry.len()
        ));
        for identity in registry.iter() {
            self.logger.debug(&format!(
                "  {} ({} album(s))",
                identity.canonical_display_name,
                identity.albums.len()
            ));
        }

        let move_singles = self.resolve_single_album_policy(&registry)?;
        let plan = build_plan(&records, &registry, move_singles, root);
        report.record_plan(&plan);
        self.preview(&plan, root);

        if plan.is_empty() {
            return Ok(self.finish(report, RunStatus::NothingToMove));
        }
        if self.settings.dry_run {
            return Ok(self.finish(report, RunStatus::DryRun));
        }
        if !self.settings.assume_yes
            && !self
                .console
                .ask_yes_no("Proceed with moving folders? (y/n): ")?
        {
            return Ok(self.finish(report, RunStatus::Cancelled));
        }

        self.logger.progress("\nProcessing...\n");
        let outcomes = execute(&plan.moves, self.fs, root, self.logger);
        report.record_outcomes(&outcomes);
        Ok(self.finish(report, RunStatus::Completed))
    }

    fn scan(&self, root: &Path) -> Vec<FolderRecord> {
        self.fs
            .list_directories_recursive(root)
            .iter()
            .filter_map(|path| FolderRecord::from_path(path))
            .collect()
    }

    /// Whether single-album artists get moved. Only asks when there are any.
    fn resolve_single_album_policy(&mut self, registry: &ArtistRegistry) -> anyhow::Result<bool> {
        let singles = registry.single_album_artist_count();
        if singles == 0 {
            return Ok(true);
        }
        self.logger
            .info(&format!("{} artist(s) have only one album\n", singles));

        match self.settings.single_albums {
            SingleAlbumPolicy::MoveAll => Ok(true),
            SingleAlbumPolicy::KeepSingles => Ok(false),
            SingleAlbumPolicy::Ask => {
                self.console.print("Choose an option:");
                self.console.print("1. Move all folders to artist subfolders");
                self.console.print(
                    "2. Move only artists with multiple albums (keep single-album artists as-is)",
                );
                self.console.print("");
                let choice = self.console.ask_choice(
                    "Enter your choice (1 or 2): ",
                    &[CHOICE_MOVE_ALL, CHOICE_KEEP_SINGLES],
                )?;
                Ok(choice == CHOICE_MOVE_ALL)
            }
        }
    }

    fn preview(&self, plan: &MovePlan, root: &Path) {
        for decision in &plan.skipped {
            self.logger
                .skipped(&decision.record.folder_name, decision.action.reason());
        }

        if !plan.moves.is_empty() {
            self.logger.info("");
            self.logger.rule();
            self.logger.info("FOLDERS THAT WILL BE MOVED:");
            self.logger.rule();
            self.logger.info("");
            for decision in &plan.moves {
                let Some(destination) = decision.destination.as_deref() else {
                    continue;
                };
                self.logger.move_planned(
                    &relative_display(&decision.record.path, root),
                    &relative_display(destination, root),
                );
            }
        }

        self.logger.info("");
        self.logger.rule();
        self.logger
            .info(&format!("Total folders to move: {}", plan.moves.len()));
        let already_organized = plan.skipped_count(MoveAction::SkipAlreadyOrganized);
        if already_organized > 0 {
            self.logger.info(&format!(
                "Already organized (will skip): {}",
                already_organized
            ));
        }
        self.logger.rule();
        self.logger.info("");
    }

    fn finish(&self, report: RunReport, status: RunStatus) -> RunReport {
        let report = report.finish(status);
        match status {
            RunStatus::Completed => {
                self.logger.run_summary(&report);
                self.logger.success(status.message());
            }
            _ => {
                self.logger.info(status.message());
                self.logger.run_summary(&report);
            }
        }
        report
    }
}
