//! End-to-end checks through the public API: build a catalog on disk, scan
//! it, and assert on the report and its JSON manifest form.

use folio_check::{catalog, loader, validate};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A catalog with two valid works, one schema violation, and one work
/// referencing an asset that doesn't exist.
fn setup_catalog(root: &Path) -> (PathBuf, PathBuf) {
    let content = root.join("content/works");
    let public = root.join("public");

    write_file(&public.join("images/first-light.jpg"), "fake image");
    write_file(&public.join("images/tide-studies.jpg"), "fake image");

    write_file(
        &content.join("first-light.mdx"),
        r#"---
title: "First Light"
slug: "first-light"
year: 2024
medium: ["Ink", "Gouache"]
dimensions: "10x10 in"
featured: true
order: 1
images:
  - src: "/images/first-light.jpg"
    alt: "First Light, full view"
descriptionShort: "Sunrise over the harbor"
---

A quiet study of dawn color.
"#,
    );

    write_file(
        &content.join("tide-studies.mdx"),
        r#"---
title: "Tide Studies"
slug: "tide-studies"
year: 2023
order: 2
images:
  - src: "/images/tide-studies.jpg"
    alt: "Tide Studies triptych"
---
"#,
    );

    write_file(
        &content.join("undated.mdx"),
        r#"---
title: "Undated"
slug: "undated"
year: 1850
order: 3
images:
  - src: "/images/first-light.jpg"
    alt: "Reused plate"
---
"#,
    );

    write_file(
        &content.join("lost-plate.mdx"),
        r#"---
title: "Lost Plate"
slug: "lost-plate"
year: 2020
order: 4
images:
  - src: "/images/lost-plate.jpg"
    alt: "Lost Plate"
---
"#,
    );

    (content, public)
}

#[test]
fn scan_reports_each_kind_of_problem_once() {
    let tmp = TempDir::new().unwrap();
    let (content, public) = setup_catalog(tmp.path());

    let catalog = catalog::scan(&content, &public).unwrap();
    assert_eq!(catalog.works.len(), 4);
    assert!(!catalog.is_clean());
    assert_eq!(catalog.problem_count(), 2);

    let by_path = |p: &str| catalog.works.iter().find(|w| w.path == p).unwrap();

    assert!(by_path("first-light.mdx").problems.is_empty());
    assert!(by_path("tide-studies.mdx").problems.is_empty());
    assert!(by_path("undated.mdx").problems[0].contains("out of range"));
    assert!(by_path("lost-plate.mdx").problems[0].contains("missing asset"));
}

#[test]
fn scan_orders_works_by_order_field() {
    let tmp = TempDir::new().unwrap();
    let (content, public) = setup_catalog(tmp.path());

    let catalog = catalog::scan(&content, &public).unwrap();
    let slugs: Vec<&str> = catalog
        .works
        .iter()
        .filter_map(|w| w.artwork.as_ref())
        .map(|a| a.slug.as_str())
        .collect();
    assert_eq!(
        slugs,
        vec!["first-light", "tide-studies", "undated", "lost-plate"]
    );
}

#[test]
fn manifest_json_round_trips_key_fields() {
    let tmp = TempDir::new().unwrap();
    let (content, public) = setup_catalog(tmp.path());

    let catalog = catalog::scan(&content, &public).unwrap();
    let json = serde_json::to_string_pretty(&catalog).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let works = value["works"].as_array().unwrap();
    assert_eq!(works.len(), 4);
    assert_eq!(works[0]["artwork"]["slug"], "first-light");
    assert_eq!(
        works[0]["artwork"]["description_short"],
        "Sunrise over the harbor"
    );
    // Clean works serialize without a problems key at all.
    assert!(works[0].get("problems").is_none());
}

#[test]
fn load_then_validate_single_file() {
    let tmp = TempDir::new().unwrap();
    let (content, _public) = setup_catalog(tmp.path());

    let artwork = loader::load(&content.join("first-light.mdx")).unwrap();
    assert_eq!(artwork.title, "First Light");
    assert!(artwork.images[0].src.ends_with("first-light.jpg"));
    assert!(validate::validate(&artwork).is_ok());

    let undated = loader::load(&content.join("undated.mdx")).unwrap();
    assert!(validate::validate(&undated).is_err());
}
