// envprobe: API key environment diagnostics
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::file::{ensure_config_file, example_path, read_toml};
use super::{AppConfig, ConfigLoader, ENV_PREFIX, load};
use crate::error::ConfigError;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, "DEBUG");
    assert_eq!(config.listen_host, "0.0.0.0");
    assert_eq!(config.listen_port, 8080);
    assert_eq!(config.project_name, "MoneyPrinterTurbo");
    assert_eq!(config.project_version, "1.2.6");
    assert!(!config.ui.hide_log);
    assert!(config.app.pexels_api_keys.is_empty());
}

#[test]
fn test_api_keys_accept_string_or_list() {
    let config = AppConfig::parse(
        r#"
[app]
pexels_api_keys = ["p-one", "p-two"]
pixabay_api_keys = "x-single"
"#,
    )
    .unwrap();

    assert_eq!(config.app.pexels_api_keys, ["p-one", "p-two"]);
    assert_eq!(config.app.pixabay_api_keys, ["x-single"]);
}

#[test]
fn test_empty_key_string_means_no_keys() {
    let config = AppConfig::parse("[app]\npexels_api_keys = \"\"\n").unwrap();
    assert!(config.app.pexels_api_keys.is_empty());
}

#[test]
fn test_unknown_keys_are_kept_or_ignored() {
    let config = AppConfig::parse(
        r#"
video_source = "pexels"

[app]
llm_provider = "openai"
max_concurrent_tasks = 5
moonshot_api_key = "moonshot-secret-key"

[pexels]
anything = true
"#,
    )
    .unwrap();

    assert_eq!(config.app.llm_provider, "openai");
    assert_eq!(
        config.app.extra.get("max_concurrent_tasks"),
        Some(&serde_json::json!(5))
    );
    assert!(config.app.extra.contains_key("moonshot_api_key"));
}

#[test]
fn test_format_options_masks_secrets() {
    let config = AppConfig::parse(
        r#"
listen_port = 9000

[app]
pexels_api_keys = ["pexels-0000-1111", "short"]
openai_api_key = "sk-abcdefghijkl"
moonshot_api_key = "moonshot-secret-key"
llm_provider = "openai"

[azure]
speech_key = "azure-speech-key-123"
"#,
    )
    .unwrap();

    let options = config.format_options();
    let find = |key: &str| {
        options
            .iter()
            .find(|line| line.starts_with(&format!("{key} ")))
            .map(|line| line.rsplit(" = ").next().unwrap_or_default().to_string())
    };

    assert_eq!(find("app.pexels_api_keys").as_deref(), Some("pexe********1111, ***"));
    assert_eq!(find("app.openai_api_key").as_deref(), Some("sk-a*******ijkl"));
    assert_eq!(find("app.moonshot_api_key").as_deref(), Some("moon***********-key"));
    assert_eq!(find("azure.speech_key").as_deref(), Some("azur************-123"));
    assert_eq!(find("app.llm_provider").as_deref(), Some("openai"));
    assert_eq!(find("listen_port").as_deref(), Some("9000"));

    let keys: Vec<_> = options
        .iter()
        .map(|line| line.split_whitespace().next().unwrap_or_default())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let err = AppConfig::parse("[app\nllm_provider = 1").unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>();
    assert!(
        matches!(config_err, Some(ConfigError::ParseError { path, .. }) if path == "<string>"),
        "unexpected error: {err:#}"
    );
}

#[test]
fn test_env_overrides_take_precedence() {
    let env = [
        ("ENVPROBE_APP__LLM_PROVIDER", "deepseek"),
        ("ENVPROBE_LISTEN_PORT", "9100"),
        ("UNRELATED_VAR", "ignored"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let config = ConfigLoader::new()
        .add_toml_str("listen_port = 8000\n[app]\nllm_provider = \"openai\"\n")
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env)
        .build()
        .unwrap();

    assert_eq!(config.app.llm_provider, "deepseek");
    assert_eq!(config.listen_port, 9100);
}

#[test]
fn test_env_key_list_override_splits_on_commas() {
    let env = [
        ("ENVPROBE_APP__PEXELS_API_KEYS", "p-one,p-two"),
        ("ENVPROBE_APP__PIXABAY_API_KEYS", "x-single"),
        ("ENVPROBE_APP__LLM_PROVIDER", "openai,azure"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let config = ConfigLoader::new()
        .add_toml_str("[app]\npexels_api_keys = \"file-key\"\n")
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env)
        .build()
        .unwrap();

    assert_eq!(config.app.pexels_api_keys, ["p-one", "p-two"]);
    assert_eq!(config.app.pixabay_api_keys, ["x-single"]);
    assert_eq!(config.app.llm_provider, "openai,azure");
}

#[test]
fn test_env_key_list_override_empty_means_no_keys() {
    let env = [("ENVPROBE_APP__PEXELS_API_KEYS", "")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let config = ConfigLoader::new()
        .add_toml_str("[app]\npexels_api_keys = [\"file-key\"]\n")
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env)
        .build()
        .unwrap();

    assert!(config.app.pexels_api_keys.is_empty());
}

#[test]
fn test_config_loader_format_loaded_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[app]\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(&path)
        .unwrap()
        .add_toml_str("[ui]\nhide_log = true");

    let files = loader.format_loaded_files();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0], format!("1. [file] {}", path.display()));
    assert_eq!(files[1], "2. [string] <string>");
}

#[test]
fn test_read_toml_strips_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, b"\xEF\xBB\xBFproject_name = \"Bom\"\n").unwrap();

    assert_eq!(read_toml(&path).unwrap(), "project_name = \"Bom\"\n");

    let config = ConfigLoader::new().add_toml_file(&path).unwrap().build().unwrap();
    assert_eq!(config.project_name, "Bom");
    assert_eq!(config.config_file, path);
}

#[test]
fn test_read_toml_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_toml(&dir.path().join("config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_ensure_config_file_copies_example() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    std::fs::write(example_path(&config_file), "project_version = \"9.9.9\"\n").unwrap();

    ensure_config_file(&config_file).unwrap();

    assert!(config_file.is_file());
    assert_eq!(load(&config_file).unwrap().project_version, "9.9.9");
}

#[test]
fn test_ensure_config_file_keeps_existing() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    std::fs::write(&config_file, "project_version = \"1.0.0\"\n").unwrap();
    std::fs::write(example_path(&config_file), "project_version = \"9.9.9\"\n").unwrap();

    ensure_config_file(&config_file).unwrap();

    assert_eq!(load(&config_file).unwrap().project_version, "1.0.0");
}

#[test]
fn test_directory_config_path_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    std::fs::create_dir(&config_file).unwrap();

    let err = load(&config_file).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::IsDirectory(_))
    ));
    assert!(config_file.is_dir(), "directory must be left in place");
}

#[test]
fn test_missing_config_without_example_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(&dir.path().join("config.toml")).unwrap_err();
    assert!(err.to_string().starts_with("config file not found: "));
}
