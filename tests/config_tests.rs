use pretty_assertions::assert_eq;
use slidesmith::config::{self, Config};

const FULL_CONFIG: &str = r#"
genai:
  base_url: "https://generativelanguage.googleapis.com"
  api_key: "secret-key"
  image_model: "gemini-3-pro-image-preview"
  text_model: "gemini-2.0-flash"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"
"#;

#[test]
fn test_full_config_parses() {
    let config: Config = serde_yaml::from_str(FULL_CONFIG).unwrap();

    assert_eq!(config.genai.api_key, "secret-key");
    assert_eq!(config.genai.image_model, "gemini-3-pro-image-preview");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.logs.level, "debug");
}

#[test]
fn test_minimal_config_gets_defaults() {
    let config: Config = serde_yaml::from_str(
        r#"
genai:
  api_key: "secret-key"
server: {}
"#,
    )
    .unwrap();

    assert_eq!(
        config.genai.base_url,
        "https://generativelanguage.googleapis.com"
    );
    assert_eq!(config.genai.image_model, "gemini-3-pro-image-preview");
    assert_eq!(config.genai.text_model, "gemini-2.0-flash");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.logs.level, "info");
}

#[tokio::test]
async fn test_load_reads_file_from_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, FULL_CONFIG).await.unwrap();

    // SAFETY: the only test in this binary that touches the environment.
    unsafe { std::env::set_var("CONFIG_PATH", &path) };
    let config = config::load().await.unwrap();
    unsafe { std::env::remove_var("CONFIG_PATH") };

    assert_eq!(config.genai.api_key, "secret-key");
    assert_eq!(config.server.port, 9000);
}
