//! Tests for provider construction and dispatch

use super::*;
use crate::test_utils::test_helpers::TEST_CATALOG;

#[test]
fn test_default_config_builds_graphql_provider() {
    let provider = Provider::from_config(&ProviderConfig::default()).unwrap();
    match provider {
        Provider::Graphql(client) => assert_eq!(client.endpoint(), "http://localhost:4000/graphql"),
        other => panic!("Expected GraphQL provider, got {:?}", other),
    }
}

#[test]
fn test_blank_endpoint_not_configured() {
    let config = ProviderConfig {
        endpoint: "   ".to_string(),
        ..ProviderConfig::default()
    };
    let err = Provider::from_config(&config).unwrap_err();
    assert!(matches!(err, ProviderError::NotConfigured(ref m) if m.contains("endpoint")));
}

#[test]
fn test_catalog_without_path_not_configured() {
    let config = ProviderConfig {
        kind: ProviderKind::Catalog,
        ..ProviderConfig::default()
    };
    let err = Provider::from_config(&config).unwrap_err();
    assert!(matches!(err, ProviderError::NotConfigured(ref m) if m.contains("catalog_path")));
}

#[test]
fn test_catalog_provider_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foods.toml");
    std::fs::write(&path, TEST_CATALOG).unwrap();

    let config = ProviderConfig {
        kind: ProviderKind::Catalog,
        catalog_path: Some(path),
        limit: 1,
        ..ProviderConfig::default()
    };
    let provider = Provider::from_config(&config).unwrap();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    let items = runtime.block_on(provider.search("egg")).unwrap();
    assert_eq!(items.len(), 1);

    let detail = runtime.block_on(provider.fetch_detail("Eggplant")).unwrap();
    assert_eq!(detail.food_name, "Eggplant");
}
