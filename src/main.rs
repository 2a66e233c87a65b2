mod cli;

use clap::Parser;
use snippet_eval::analyze::{self, StaticEvaluator};
use snippet_eval::config;
use snippet_eval::error::EvalError;
use snippet_eval::pipeline::{self, FixedGrades, GradeOutput, LibraryInput};
use snippet_eval::report::{self, StaticEntry};
use snippet_eval::snippet;
use snippet_eval::types::config::EvalConfig;
use snippet_eval::types::report::EvaluationReport;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_document(path: &Path) -> Result<String, EvalError> {
    if !path.exists() {
        return Err(EvalError::PathNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

fn snippet_files(path: &Path) -> Result<Vec<PathBuf>, EvalError> {
    if !path.exists() {
        return Err(EvalError::PathNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| EvalError::Io(e.into()))?;
        let is_txt = entry.path().extension().is_some_and(|ext| ext == "txt");
        if entry.file_type().is_file() && is_txt {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn grade(score: f64, explanation: Option<&String>) -> GradeOutput {
    GradeOutput {
        score,
        explanation: explanation.cloned().unwrap_or_default(),
    }
}

fn emit_reports(
    reports: &[EvaluationReport],
    format: cli::ReportFormat,
    cfg: &EvalConfig,
    quiet: bool,
    compare: bool,
) -> Result<(), EvalError> {
    let settings = cfg.report();
    if settings.console && !quiet {
        println!("{}", report::render(reports, format.into())?);
    }
    for path in report::write_reports(reports, &settings, compare)? {
        debug!(path = %path.display(), "report file");
    }
    Ok(())
}

fn run() -> Result<i32, EvalError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let cfg = match config::load_config(&cwd, cli.config.as_deref())? {
        Some(cfg) => cfg,
        None => {
            warn!(dir = %cwd.display(), "no snippet-eval.toml found, using defaults");
            EvalConfig::default()
        }
    };

    match cli.command {
        cli::Commands::Static(cmd) => {
            let predicate_set = cmd
                .predicate_set
                .map(Into::into)
                .unwrap_or_else(|| cfg.predicate_set());
            let evaluator = StaticEvaluator::new(predicate_set);

            let files = snippet_files(&cmd.path)?;
            if files.is_empty() {
                warn!(path = %cmd.path.display(), "no snippet files found");
                return Ok(exit_code::WARNINGS);
            }

            let mut entries = Vec::with_capacity(files.len());
            for file in &files {
                let document = fs::read_to_string(file)?;
                entries.push(StaticEntry {
                    path: file.display().to_string(),
                    snippets: snippet::split(&document).len(),
                    analysis: evaluator.run_text_analysis(&document)?,
                });
            }
            if !cli.quiet {
                println!("{}", report::render_static(&entries, cmd.format.into())?);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Flags(cmd) => {
            let document = read_document(&cmd.file)?;
            let flagged = analyze::flag_snippets(&document, cmd.only)
                .into_iter()
                .filter(|snippet| !snippet.flags.is_empty())
                .collect::<Vec<_>>();

            if flagged.is_empty() {
                println!("flags: none");
                return Ok(exit_code::SUCCESS);
            }

            for snippet in &flagged {
                let ids = snippet
                    .flags
                    .iter()
                    .map(|predicate| predicate.id())
                    .collect::<Vec<_>>();
                println!("[{}] {}: {}", snippet.index, snippet.title, ids.join(", "));
            }
            Ok(exit_code::WARNINGS)
        }
        cli::Commands::Score(cmd) => {
            let document = read_document(&cmd.snippets)?;
            let grader = FixedGrades {
                question: grade(cmd.question, Some(&cmd.question_explanation)),
                llm: grade(cmd.llm, Some(&cmd.llm_explanation)),
            };
            let input = LibraryInput {
                library: &cmd.library,
                document: &document,
                grader: &grader,
            };
            let evaluated = pipeline::evaluate_library(&input, &cfg)?;
            emit_reports(&[evaluated], cmd.format, &cfg, cli.quiet, false)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Compare(cmd) => {
            let documents = cmd
                .snippets
                .iter()
                .map(|path| read_document(path))
                .collect::<Result<Vec<_>, _>>()?;
            let graders = [0, 1].map(|i| FixedGrades {
                question: grade(cmd.question[i], cmd.question_explanation.get(i)),
                llm: grade(cmd.llm[i], cmd.llm_explanation.get(i)),
            });
            let first = LibraryInput {
                library: &cmd.first,
                document: &documents[0],
                grader: &graders[0],
            };
            let second = LibraryInput {
                library: &cmd.second,
                document: &documents[1],
                grader: &graders[1],
            };
            let evaluated = pipeline::compare_libraries(&first, &second, &cfg)?;
            emit_reports(&evaluated, cmd.format, &cfg, cli.quiet, true)?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
