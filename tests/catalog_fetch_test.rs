use candle_orders::core::catalog::load_catalog;
use candle_orders::{CliConfig, HttpCatalog};
use httpmock::prelude::*;

fn test_config(server: &MockServer) -> CliConfig {
    CliConfig {
        catalog_endpoint: server.url("/fragrance"),
        api_endpoint: server.url("/v2"),
        api_version: "2023-04".to_string(),
        api_key: String::new(),
        board_id: 7302640219,
        group_id: "topics".to_string(),
        config: None,
        first_name: String::new(),
        last_name: String::new(),
        quantity: 0,
        fragrances: vec![],
        verbose: false,
    }
}

#[tokio::test]
async fn test_catalog_options_mirror_record_names() {
    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/fragrance");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"name": "Vanilla"},
                {"name": "Rose", "family": "floral"}
            ]));
    });

    let source = HttpCatalog::new(test_config(&server));
    let catalog = load_catalog(&source).await;

    catalog_mock.assert();
    assert_eq!(catalog.len(), 2);
    for option in &catalog {
        assert_eq!(option.value, option.name);
        assert_eq!(option.label, option.name);
    }
}

#[tokio::test]
async fn test_catalog_fetch_failure_leaves_catalog_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/fragrance");
        then.status(500);
    });

    let source = HttpCatalog::new(test_config(&server));
    let catalog = load_catalog(&source).await;

    assert!(catalog.is_empty());
}

#[tokio::test]
async fn test_catalog_parse_failure_leaves_catalog_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/fragrance");
        then.status(200).body("<html>not json</html>");
    });

    let source = HttpCatalog::new(test_config(&server));
    let catalog = load_catalog(&source).await;

    assert!(catalog.is_empty());
}
