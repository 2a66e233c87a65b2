use crate::error::{EvalError, Result};
use crate::types::config::EvalConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "snippet-eval.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".snippet-eval/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/snippet-eval/config.toml";

/// Loads and validates the layered configuration for `root`. Returns `None`
/// when neither `explicit` nor a project config file exists.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<EvalConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<EvalConfig>> {
    let project_path = match explicit {
        Some(path) if !path.exists() => {
            return Err(EvalError::PathNotFound(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => root.join(DEFAULT_CONFIG_FILE),
    };
    if !project_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: EvalConfig = merged.try_into()?;
    cfg.validate()?;
    debug!(path = %project_path.display(), "loaded configuration");
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| EvalError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    // A weight table is replaced whole so layers cannot mix
                    // partial weight sets.
                    Some(existing) if key == "weights" => *existing = value,
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::dimensions::PredicateSet;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_project_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_rejects_missing_explicit_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config_with_global(dir.path(), Some(&missing), None)
            .expect_err("explicit path must exist");
        assert!(matches!(err, EvalError::PathNotFound(_)));
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[report]
folder_path = "global-results"
human_readable = true

[weights]
question = 0.2
llm = 0.2
formatting = 0.2
metadata = 0.2
initialization = 0.2
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[report]
folder_path = "results"

[weights]
question = 0.8
llm = 0.05
formatting = 0.05
metadata = 0.05
initialization = 0.05
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".snippet-eval")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[metrics]
predicate_set = "legacy"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let report = cfg.report();
        assert_eq!(report.folder_path, Some(PathBuf::from("results")));
        assert!(report.human_readable);
        assert_eq!(cfg.weights().get("question"), Some(&0.8));
        assert_eq!(cfg.predicate_set(), PredicateSet::Legacy);
    }

    #[test]
    fn load_config_replaces_weight_table_instead_of_merging_keys() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(
            &global_path,
            "[weights]\nquestion = 0.5\nllm = 0.5\nformatting = 0.0\nmetadata = 0.0\ninitialization = 0.0\n",
        )
        .expect("global config should write");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[weights]\nquestion = 1.0\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None, Some(&global_path))
            .expect_err("partial project weights must not inherit global keys");
        assert!(err.to_string().contains("missing key(s)"));
    }

    #[test]
    fn load_config_uses_explicit_file_in_place_of_project_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        let explicit = root.path().join("custom.toml");
        fs::write(&explicit, "[report]\nconsole = false\n").expect("explicit config should write");

        let cfg = load_config_with_global(root.path(), Some(&explicit), None)
            .expect("load should succeed")
            .expect("explicit config should load");
        assert!(!cfg.report().console);
    }

    #[test]
    fn load_config_reports_parse_errors_with_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[weights\n").expect("write");

        let err = load_config_with_global(root.path(), None, None).expect_err("invalid toml");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
