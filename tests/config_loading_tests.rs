//! Integration tests for YAML configuration loading

use std::io::Write;

use acta::prelude::*;

const FULL_CONFIG: &str = r#"
resources:
  - name: posts
    queries:
      - verb: search
        on: collection
    mutations:
      - verb: archive
  - name: comments
    only: [show, index]
  - name: users
    except: [destroy]
"#;

#[test]
fn test_from_yaml_str_parses_a_full_config() {
    let config = RouterConfig::from_yaml_str(FULL_CONFIG).unwrap();

    assert_eq!(config.resources.len(), 3);
    assert_eq!(config.resources[0].name, "posts");
    assert_eq!(config.resources[0].queries[0].verb, "search");
    assert_eq!(config.resources[0].queries[0].on, Cardinality::Collection);
    assert_eq!(config.resources[1].filter.only, Some(vec!["show".to_string(), "index".to_string()]));
    assert_eq!(config.resources[2].filter.except, vec!["destroy".to_string()]);
}

#[test]
fn test_a_bare_resource_name_is_a_complete_declaration() {
    let config = RouterConfig::from_yaml_str("resources:\n  - name: tags\n").unwrap();

    let tags = config.resources[0].build();
    assert_eq!(tags.actions().len(), 5);
}

#[test]
fn test_declared_actions_default_to_member_cardinality() {
    let yaml = r#"
resources:
  - name: posts
    mutations:
      - verb: archive
"#;
    let config = RouterConfig::from_yaml_str(yaml).unwrap();

    assert_eq!(config.resources[0].mutations[0].on, Cardinality::Member);
    let posts = config.resources[0].build();
    assert!(posts.actions().iter().any(|a| a.name() == "archive_post"));
}

#[test]
fn test_empty_only_list_disables_autogeneration() {
    let yaml = r#"
resources:
  - name: posts
    only: []
    mutations:
      - verb: archive
"#;
    let config = RouterConfig::from_yaml_str(yaml).unwrap();

    let posts = config.resources[0].build();
    let names: Vec<&str> = posts.actions().iter().map(|a| a.name()).collect();
    assert_eq!(names, ["archive_post"]);
}

#[test]
fn test_config_round_trips_through_yaml() {
    let config = RouterConfig::default_config();

    let yaml = serde_yaml::to_string(&config).unwrap();
    let reloaded = RouterConfig::from_yaml_str(&yaml).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_merge_concatenates_resources_in_order() {
    let first = RouterConfig::from_yaml_str("resources:\n  - name: posts\n").unwrap();
    let second = RouterConfig::from_yaml_str("resources:\n  - name: comments\n").unwrap();

    let merged = RouterConfig::merge(vec![first, second]);
    let names: Vec<&str> = merged.resources.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["posts", "comments"]);
}

#[test]
fn test_merge_of_nothing_is_empty() {
    let merged = RouterConfig::merge(Vec::new());

    assert!(merged.resources.is_empty());
}

#[test]
fn test_from_yaml_file_reads_a_config_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FULL_CONFIG.as_bytes()).unwrap();

    let config = RouterConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.resources.len(), 3);
}

#[test]
fn test_missing_config_file_is_reported_with_its_path() {
    let err = RouterConfig::from_yaml_file("/nonexistent/router.yaml").unwrap_err();

    assert!(matches!(err, ConfigError::FileNotFound { .. }));
    assert!(err.to_string().contains("/nonexistent/router.yaml"));
}

#[test]
fn test_invalid_yaml_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"resources: [name: {{").unwrap();

    let err = RouterConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_build_registry_catalogs_every_configured_resource() {
    let config = RouterConfig::from_yaml_str(FULL_CONFIG).unwrap();
    let registry = config.build_registry();

    // posts: 5 autogenerated + search + archive, comments: 2, users: 4
    assert_eq!(registry.len(), 13);
    assert!(registry.resolve("search_posts").is_ok());
    assert!(registry.resolve("archive_post").is_ok());
    assert!(registry.resolve("destroy_user").is_err());
}

#[test]
fn test_configured_and_programmatic_registries_agree() {
    let yaml = r#"
resources:
  - name: posts
    only: [show]
    mutations:
      - verb: archive
"#;
    let from_config = RouterConfig::from_yaml_str(yaml).unwrap().build_registry();

    let mut by_hand = ActionRegistry::new();
    let mut posts = ResourceActions::with_filter("posts", ActionFilter::only(["show"]));
    posts.mutation("archive", Cardinality::Member);
    by_hand.register(posts);

    assert_eq!(from_config.manifest(), by_hand.manifest());
}
