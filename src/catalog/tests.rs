use std::collections::BTreeMap;
use std::fs;

use crate::catalog::{CatalogConfig, CatalogError, SolutionCatalog};
use crate::expression::parse;
use crate::utils::Multiset;

fn small_config() -> CatalogConfig {
    CatalogConfig {
        max_value: 5,
        size: 3,
        ..CatalogConfig::default()
    }
}

#[test]
fn test_build_small_catalog() {
    let config = small_config();
    let catalog = SolutionCatalog::build(&config);
    assert!(!catalog.is_empty());
    assert!(!catalog.contains(0));

    for (&target, exprs) in catalog.entries() {
        assert!(config.accepts_target(target));
        assert!(!exprs.is_empty());
        for expr in exprs {
            let numbers = Multiset::from_text(expr);
            assert_eq!(numbers.len(), 3);
            assert!(numbers.as_slice().iter().all(|n| (1..=5).contains(n)));

            let value = parse(expr).ok().and_then(|e| e.evaluate().ok());
            assert!(value.is_some_and(|v| (v - target as f64).abs() <= 1e-9));
        }
    }
}

#[test]
fn test_build_keeps_one_entry_per_multiset() {
    let catalog = SolutionCatalog::build(&small_config());
    // 1 + 1 + 1 = 3 is reachable from many multisets, each contributing once
    let exprs = catalog.expressions(3);
    let mut seen: Vec<Multiset> = exprs.iter().map(|e| Multiset::from_text(e)).collect();
    let total = seen.len();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), total);
    assert!(total > 1);
}

#[test]
fn test_build_default_catalog_contains_twenty_four() {
    let catalog = SolutionCatalog::build(&CatalogConfig::default());
    assert!(catalog.contains(24));
    assert!(catalog.reachable_targets().iter().all(|t| (0..=100).contains(t)));
    assert!(
        catalog
            .expressions(24)
            .iter()
            .any(|e| Multiset::from_text(e) == Multiset::new(vec![2, 3, 4, 5]))
    );
}

#[test]
fn test_expressions_for_missing_target() {
    let catalog = SolutionCatalog::build(&small_config());
    assert!(catalog.expressions(-1).is_empty());
    assert!(catalog.expressions(101).is_empty());
}

#[test]
fn test_from_entries_drops_empty_targets() {
    let mut entries = BTreeMap::new();
    entries.insert(5, vec!["2 + 3".to_string()]);
    entries.insert(7, Vec::new());
    let catalog = SolutionCatalog::from_entries(entries);
    assert_eq!(catalog.reachable_targets(), &[5]);
    assert!(!catalog.contains(7));
}

#[test]
fn test_reachable_in_half_open_range() {
    let mut entries = BTreeMap::new();
    for target in [2, 5, 9, 40] {
        entries.insert(target, vec![target.to_string()]);
    }
    let catalog = SolutionCatalog::from_entries(entries);
    assert_eq!(catalog.reachable_in(0, 100), &[2, 5, 9, 40]);
    assert_eq!(catalog.reachable_in(5, 40), &[5, 9]);
    assert_eq!(catalog.reachable_in(10, 40), &[] as &[i64]);
    assert_eq!(catalog.reachable_in(50, 10), &[] as &[i64]);
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let path = dir.path().join("nested").join("solutions.json");
        let catalog = SolutionCatalog::build(&small_config());
        assert!(catalog.save(&path).is_ok());

        let loaded = SolutionCatalog::load(&path);
        assert!(loaded.is_ok());
        if let Ok(loaded) = loaded {
            assert_eq!(loaded, catalog);
        }
    }
}

#[test]
fn test_stored_format_is_keyed_by_target() {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let path = dir.path().join("solutions.json");
        let mut entries = BTreeMap::new();
        entries.insert(24, vec!["4 * (5 + 3 - 2)".to_string()]);
        assert!(SolutionCatalog::from_entries(entries).save(&path).is_ok());

        let text = fs::read_to_string(&path).unwrap_or_default();
        assert_eq!(text, r#"{"24":["4 * (5 + 3 - 2)"]}"#);
    }
}

#[test]
fn test_load_or_build_prefers_existing_file() {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let path = dir.path().join("solutions.json");
        assert!(fs::write(&path, r#"{"24": ["(1 + 3) * (2 + 4)"]}"#).is_ok());

        let catalog = SolutionCatalog::load_or_build(&path, &small_config());
        assert!(catalog.is_ok());
        if let Ok(catalog) = catalog {
            assert_eq!(catalog.reachable_targets(), &[24]);
            assert_eq!(catalog.expressions(24), &["(1 + 3) * (2 + 4)".to_string()]);
        }
    }
}

#[test]
fn test_load_or_build_creates_missing_file() {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let path = dir.path().join("solutions.json");
        let catalog = SolutionCatalog::load_or_build(&path, &small_config());
        assert!(catalog.is_ok());
        assert!(path.exists());
        if let (Ok(catalog), Ok(reloaded)) = (catalog, SolutionCatalog::load(&path)) {
            assert_eq!(catalog, reloaded);
        }
    }
}

#[test]
fn test_corrupt_cache_is_rebuilt() {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let path = dir.path().join("solutions.json");
        assert!(fs::write(&path, "{ not json").is_ok());

        assert!(matches!(
            SolutionCatalog::load(&path),
            Err(CatalogError::Format { .. })
        ));

        let catalog = SolutionCatalog::load_or_build(&path, &small_config());
        assert!(catalog.is_ok());
        if let Ok(catalog) = catalog {
            assert_eq!(catalog, SolutionCatalog::build(&small_config()));
        }
        assert!(SolutionCatalog::load(&path).is_ok());
    }
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let result = SolutionCatalog::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
