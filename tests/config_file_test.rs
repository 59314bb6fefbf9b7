use anyhow::Result;
use candle_orders::core::form::MSG_ORDER_CREATED;
use candle_orders::domain::model::NotificationKind;
use candle_orders::utils::validation::Validate;
use candle_orders::{FileConfig, HttpCatalog, MondayGateway, OrderEngine, OrderInput};
use httpmock::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_file_config_driven_submission() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/fragrance");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([{"name": "Vanilla"}]));
    });

    let board_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2")
            .header("Authorization", "file-config-key")
            .header("API-Version", "2023-04")
            .body_contains("New Order for Jane Doe");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"data": {"create_item": {"id": "1"}}}));
    });

    std::env::set_var("FILE_CONFIG_TEST_KEY", "file-config-key");

    let mut config_file = NamedTempFile::new()?;
    write!(
        config_file,
        r#"
[board]
id = 7302640219
group = "topics"

[catalog]
endpoint = "{}"

[api]
endpoint = "{}"
key = "${{FILE_CONFIG_TEST_KEY}}"
"#,
        server.url("/fragrance"),
        server.url("/v2"),
    )?;

    let config = FileConfig::from_file(config_file.path())?;
    config.validate()?;

    let engine = OrderEngine::new(
        HttpCatalog::new(config.clone()),
        MondayGateway::new(config),
    );
    let notification = engine
        .run(OrderInput {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            quantity: 5,
            fragrances: vec!["Vanilla".to_string()],
        })
        .await?;

    std::env::remove_var("FILE_CONFIG_TEST_KEY");

    board_mock.assert();
    assert_eq!(notification.kind, NotificationKind::Positive);
    assert_eq!(notification.message, MSG_ORDER_CREATED);
    Ok(())
}

#[test]
fn test_file_config_rejects_bad_endpoint() {
    let config = FileConfig::from_toml_str(
        r#"
[board]
id = 7302640219
group = "topics"

[catalog]
endpoint = "not a url"

[api]
endpoint = "https://api.monday.com/v2"
"#,
    )
    .unwrap();

    assert!(config.validate().is_err());
}
