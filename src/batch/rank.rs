//! Ranking tasks over persona-described document collections.
//!
//! A task is a directory holding a `persona.txt`, the PDFs to rank
//! (either directly or under `input/`), and optionally a `keywords.txt`
//! overriding the built-in boost vocabulary. The report is written to
//! `output/ranking.json` inside the task directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::analyze::collect_sections;
use crate::error::{Error, Result};
use crate::model::RankingReport;
use crate::output::{to_json, JsonFormat};
use crate::parser::{DocumentParser, ParseOptions};
use crate::rank::{Embedder, KeywordBooster, SectionRanker};

/// Persona file expected in each task directory.
pub const PERSONA_FILE: &str = "persona.txt";

/// Optional vocabulary override next to the persona.
pub const KEYWORDS_FILE: &str = "keywords.txt";

/// Input subdirectory holding a task's PDFs.
const INPUT_DIR: &str = "input";

/// Output subdirectory receiving the report.
const OUTPUT_DIR: &str = "output";

/// Report file name.
const REPORT_FILE: &str = "ranking.json";

/// One discovered ranking task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTask {
    /// Task directory
    pub root: PathBuf,
    /// Directory scanned for PDFs
    pub input_dir: PathBuf,
    /// Directory receiving the report
    pub output_dir: PathBuf,
    /// Path to the persona file
    pub persona_path: PathBuf,
}

impl RankTask {
    /// Task name for diagnostics: the directory's file name.
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.root.display().to_string())
    }
}

/// Discover ranking tasks under `root`.
///
/// A root that itself contains `persona.txt` is a single task. Otherwise
/// each subdirectory with a `persona.txt` becomes one task, in sorted
/// order; subdirectories without one are logged and skipped.
pub fn discover_tasks(root: &Path) -> Result<Vec<RankTask>> {
    if root.join(PERSONA_FILE).is_file() {
        return Ok(vec![task_at(root)]);
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();

    let mut tasks = Vec::new();
    for dir in dirs {
        if dir.join(PERSONA_FILE).is_file() {
            tasks.push(task_at(&dir));
        } else {
            log::warn!("Skipping {}: no {}", dir.display(), PERSONA_FILE);
        }
    }

    Ok(tasks)
}

fn task_at(root: &Path) -> RankTask {
    let input = root.join(INPUT_DIR);
    let input_dir = if input.is_dir() {
        input
    } else {
        root.to_path_buf()
    };

    RankTask {
        root: root.to_path_buf(),
        input_dir,
        output_dir: root.join(OUTPUT_DIR),
        persona_path: root.join(PERSONA_FILE),
    }
}

/// Run every discovered task, skipping those that fail. Returns the
/// number of tasks that completed.
pub fn process_tasks(root: &Path, embedder: &dyn Embedder, format: JsonFormat) -> Result<usize> {
    let tasks = discover_tasks(root)?;
    let mut completed = 0;

    for task in &tasks {
        match run_task(task, embedder, format) {
            Ok(()) => completed += 1,
            Err(e) => log::warn!("Task {} failed: {}", task.name(), e),
        }
    }

    Ok(completed)
}

/// Run one ranking task end to end and write its report.
pub fn run_task(task: &RankTask, embedder: &dyn Embedder, format: JsonFormat) -> Result<()> {
    let persona = fs::read_to_string(&task.persona_path)?.trim().to_string();

    let pdfs = super::pdf_files(&task.input_dir)?;
    if pdfs.is_empty() {
        return Err(Error::MissingInput(format!(
            "no PDF files in {}",
            task.input_dir.display()
        )));
    }

    let booster = load_booster(&task.root)?;

    let input_documents: Vec<String> = pdfs
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();

    let mut sections = Vec::new();
    for path in &pdfs {
        let parsed = DocumentParser::open_with_options(path, ParseOptions::new().lenient())
            .and_then(|parser| parser.parse());
        match parsed {
            Ok(document) => sections.extend(collect_sections(&document)),
            Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
        }
    }

    let ranker = SectionRanker::with_booster(embedder, booster);
    let ranked = ranker.rank(&persona, sections);
    let report = RankingReport::new(input_documents, &persona, &ranked);

    fs::create_dir_all(&task.output_dir)?;
    let report_path = task.output_dir.join(REPORT_FILE);
    fs::write(&report_path, to_json(&report, format)?)?;

    log::info!("Task {} -> {}", task.name(), report_path.display());
    Ok(())
}

/// The vocabulary override if the task ships one, the built-in
/// financial vocabulary otherwise.
fn load_booster(task_root: &Path) -> Result<KeywordBooster> {
    let path = task_root.join(KEYWORDS_FILE);
    if path.is_file() {
        let text = fs::read_to_string(&path)?;
        Ok(KeywordBooster::from_lines(&text))
    } else {
        Ok(KeywordBooster::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_single_task_at_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("persona.txt"), "Analyst").unwrap();

        let tasks = discover_tasks(dir.path()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].root, dir.path());
        // No input/ subdirectory: PDFs are read from the task root
        assert_eq!(tasks[0].input_dir, dir.path());
    }

    #[test]
    fn test_discover_subdirectory_tasks_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["case_b", "case_a", "stray"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("case_a/persona.txt"), "A").unwrap();
        fs::write(dir.path().join("case_b/persona.txt"), "B").unwrap();
        fs::create_dir(dir.path().join("case_a/input")).unwrap();

        let tasks = discover_tasks(dir.path()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name(), "case_a");
        assert_eq!(tasks[1].name(), "case_b");
        // input/ is preferred when present
        assert_eq!(tasks[0].input_dir, dir.path().join("case_a/input"));
        assert_eq!(tasks[1].input_dir, dir.path().join("case_b"));
    }

    #[test]
    fn test_run_task_without_pdfs_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("persona.txt"), "Analyst").unwrap();

        let tasks = discover_tasks(dir.path()).unwrap();
        let embedder = crate::rank::HashEmbedder::new();
        let err = run_task(&tasks[0], &embedder, JsonFormat::Pretty).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }
}
