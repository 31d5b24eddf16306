use broadcaster::config::{Cli, Settings};

fn empty_cli() -> Cli {
    Cli {
        config: None,
        to_number: None,
        to_name: None,
        template: None,
        channel: None,
        log_delay_secs: None,
        params: Vec::new(),
    }
}

#[test]
fn defaults_apply_without_sources() {
    let settings = Settings::load(&empty_cli()).unwrap();
    assert_eq!(settings.base_url, "https://api.mekari.com");
    assert_eq!(settings.request_timeout_secs, 30);
    assert_eq!(settings.log_delay_secs, 10);
    assert_eq!(settings.language_code, "id");
    assert!(settings.client_id.is_empty());
}

#[test]
fn file_values_and_cli_overrides_are_layered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broadcaster.toml");
    std::fs::write(
        &path,
        "client_id = \"cid\"\nclient_secret = \"secret\"\nto_number = \"628111\"\nlog_delay_secs = 3\n",
    )
    .unwrap();

    let mut cli = empty_cli();
    cli.config = Some(path.to_str().unwrap().to_string());
    cli.to_number = Some("628222".into());
    cli.template = Some("tmpl-9".into());

    let settings = Settings::load(&cli).unwrap();
    assert_eq!(settings.client_id, "cid");
    assert_eq!(settings.client_secret, "secret");
    // CLI wins over the file for the recipient.
    assert_eq!(settings.to_number, "628222");
    assert_eq!(settings.message_template_id, "tmpl-9");
    assert_eq!(settings.log_delay_secs, 3);
    assert_eq!(settings.base_url, "https://api.mekari.com");
}
