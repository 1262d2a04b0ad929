//! Configuration load/save and validation tests

use promptable::config::Config;

#[tokio::test]
async fn config_round_trips_through_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("promptable.toml");

    let mut config = Config::default();
    config.prompt.question = "Proceed with caution?".to_string();
    config.prompt.confirm_label = "Proceed".to_string();
    config.ui.theme = "light".to_string();

    config.save_to_file(&path).await.expect("save");
    let loaded = Config::load_from_file(&path).await.expect("load");

    assert_eq!(loaded.prompt.question, "Proceed with caution?");
    assert_eq!(loaded.prompt.confirm_label, "Proceed");
    assert_eq!(loaded.ui.theme, "light");
}

#[tokio::test]
async fn partial_config_files_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("promptable.toml");

    tokio::fs::write(&path, "[prompt]\nconfirm_label = \"Do it\"\n")
        .await
        .expect("write");

    let loaded = Config::load_from_file(&path).await.expect("load");
    assert_eq!(loaded.prompt.confirm_label, "Do it");
    assert_eq!(loaded.prompt.cancel_label, "Cancel");
    assert_eq!(loaded.app.name, "Promptable");
}

#[test]
fn validation_rejects_empty_question() {
    let mut config = Config::default();
    config.prompt.question = "   ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_zero_tick_rate() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}
