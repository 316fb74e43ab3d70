use squirrelhaven::config::Config;
use squirrelhaven::text::TextCatalog;

#[tokio::test]
async fn loads_text_document_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("text.json");
    std::fs::write(
        &path,
        r#"{"socialHub":{"feed":{"title":"Acorn Wall","timeAgo":"{time} back"}}}"#,
    )
    .unwrap();

    let texts = TextCatalog::load(&path).await;
    assert!(texts.is_loaded());
    assert_eq!(texts.text("socialHub.feed.title"), "Acorn Wall");
    assert_eq!(
        texts.text_with("socialHub.feed.timeAgo", &[("time", &"3h")]),
        "3h back"
    );
    assert_eq!(texts.text("socialHub.feed.missing"), "socialHub.feed.missing");
}

#[tokio::test]
async fn missing_or_broken_documents_fall_back_to_paths() {
    let dir = tempfile::tempdir().unwrap();
    let missing = TextCatalog::load(dir.path().join("nope.json")).await;
    assert!(!missing.is_loaded());
    assert_eq!(missing.text("hero.title"), "hero.title");

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    let texts = TextCatalog::load(&broken).await;
    assert!(!texts.is_loaded());
    assert_eq!(texts.text_with("a.b", &[("x", &1)]), "a.b");
}

#[tokio::test]
async fn default_config_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let path = path.to_string_lossy().to_string();
    Config::create_default(&path).await.unwrap();
    let config = Config::load(&path).await.unwrap();
    assert_eq!(config.care.squirrel_name, "Nutkin");
    assert_eq!(config.games.tick_ms, 1000);
    assert_eq!(config.text.path, "data/text.json");
}

#[tokio::test]
async fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[games]\ntarget_spawn_chance = 2.0\n").unwrap();
    let err = Config::load(&path.to_string_lossy()).await.unwrap_err();
    assert!(err.to_string().contains("target_spawn_chance"), "{}", err);
}

#[test]
fn bundled_document_covers_the_session_copy() {
    let texts = TextCatalog::builtin();
    for path in [
        "hero.title",
        "care.fed",
        "care.levelUp",
        "games.started",
        "eggs.unlocked",
        "socialHub.messages.noteSent",
        "socialHub.profile.experience",
        "footer.copyright",
    ] {
        assert_ne!(texts.text(path), path, "missing {}", path);
    }
}

#[tokio::test]
async fn single_key_sections_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[care]\ndecay_interval_secs = 5\n\n[logging]\nfile = \"x.log\"\n").unwrap();
    let config = Config::load(&path.to_string_lossy()).await.unwrap();
    assert_eq!(config.care.decay_interval_secs, 5);
    assert_eq!(config.care.squirrel_name, "Nutkin");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file.as_deref(), Some("x.log"));
}
