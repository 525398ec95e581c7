//! Integration tests for the scanning and symbol-table layers
//!
//! These tests exercise discovery, registry building, and the static method
//! scan against the fixture projects.

use std::path::{Path, PathBuf};

use unwired::analysis::MethodLocator;
use unwired::config::Config;
use unwired::discovery::FileFinder;
use unwired::registry::{ClassRegistry, RegistryBuilder};
use unwired::scanner::MethodScanner;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn build_registry(config: &Config, project: &Path) -> (Vec<unwired::discovery::SourceFile>, ClassRegistry) {
    let finder = FileFinder::new(config);
    let files = finder
        .find_files(&project.join(&config.handlers_dir))
        .expect("Failed to discover handler files");

    let mut builder = RegistryBuilder::new();
    for file in &files {
        builder.process_file(file).expect("Failed to parse handler file");
    }
    (files, builder.build())
}

#[test]
fn test_registry_from_project_fixture() {
    let project = fixtures_path().join("project");
    let config = Config::default();
    let (_, registry) = build_registry(&config, &project);

    assert!(registry.contains("App\\Http\\Controllers\\HomeController"));
    assert!(registry.contains("App\\Http\\Controllers\\Billing\\InvoiceController"));
    // Misnamed.php declares SomethingElse, which is registered under its
    // declared name, never under the path-derived one
    assert!(registry.contains("App\\Http\\Controllers\\SomethingElse"));
    assert!(!registry.contains("App\\Http\\Controllers\\Misnamed"));
}

#[test]
fn test_static_set_contents() {
    let project = fixtures_path().join("project");
    let config = Config::default();
    let (files, registry) = build_registry(&config, &project);

    let app_root = project.join(&config.app_root).canonicalize().unwrap();
    let scanner = MethodScanner::new(&config);
    let records = scanner.scan(&files, &registry, &app_root);

    let mut keys: Vec<(String, String)> = records
        .iter()
        .map(|r| (r.class.clone(), r.method.clone()))
        .collect();
    keys.sort();

    assert_eq!(
        keys,
        vec![
            (
                "App\\Http\\Controllers\\Billing\\InvoiceController".to_string(),
                "archive".to_string()
            ),
            (
                "App\\Http\\Controllers\\Billing\\InvoiceController".to_string(),
                "show".to_string()
            ),
            (
                "App\\Http\\Controllers\\HomeController".to_string(),
                "about".to_string()
            ),
            (
                "App\\Http\\Controllers\\HomeController".to_string(),
                "index".to_string()
            ),
        ]
    );

    // Constructors and private helpers never make it into the static set
    assert!(!records.iter().any(|r| r.method == "__construct"));
    assert!(!records.iter().any(|r| r.method == "formatTotal"));
    // The stray function file and the misnamed class contribute nothing
    assert!(!records.iter().any(|r| r.method == "format_currency"));
    assert!(!records.iter().any(|r| r.method == "orphanLooking"));
}

#[test]
fn test_inherited_methods_excluded_from_derived_class() {
    let project = fixtures_path().join("inherit");
    let config = Config::default();
    let (files, registry) = build_registry(&config, &project);

    let user = registry
        .get("App\\Http\\Controllers\\UserController")
        .expect("UserController should be in the registry");
    assert_eq!(user.parent.as_deref(), Some("BaseController"));

    // respond() is visible on UserController at runtime, but it is declared
    // on BaseController; identity is by declaring class
    let user_methods: Vec<_> = user
        .self_declared_public_methods()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(user_methods, vec!["index"]);

    let app_root = project.join(&config.app_root).canonicalize().unwrap();
    let records = MethodScanner::new(&config).scan(&files, &registry, &app_root);

    assert!(records
        .iter()
        .any(|r| r.class == "App\\Http\\Controllers\\BaseController" && r.method == "respond"));
    assert!(!records
        .iter()
        .any(|r| r.class == "App\\Http\\Controllers\\UserController" && r.method == "respond"));
}

#[test]
fn test_locator_on_fixture_file() {
    let file = fixtures_path().join("billing/app/Http/Controllers/Billing/InvoiceController.php");
    let locator = MethodLocator::new();

    assert_eq!(locator.locate(&file, "show"), Some(12));
    assert_eq!(locator.locate(&file, "archive"), Some(17));
    assert_eq!(locator.locate(&file, "neverDeclared"), None);
}

#[test]
fn test_scan_is_order_insensitive() {
    let project = fixtures_path().join("project");
    let config = Config::default();
    let (mut files, registry) = build_registry(&config, &project);

    let app_root = project.join(&config.app_root).canonicalize().unwrap();
    let scanner = MethodScanner::new(&config);

    let forward = scanner.scan(&files, &registry, &app_root);
    files.reverse();
    let backward = scanner.scan(&files, &registry, &app_root);

    let as_set = |records: &[unwired::HandlerRecord]| {
        let mut keys: Vec<(String, String)> = records
            .iter()
            .map(|r| (r.class.clone(), r.method.clone()))
            .collect();
        keys.sort();
        keys
    };
    assert_eq!(as_set(&forward), as_set(&backward));
}
