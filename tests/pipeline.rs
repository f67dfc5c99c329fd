//! End-to-end pipeline tests: load → edit → save → reload → render.
//!
//! Drives the library the way the CLI does, against a temp store.

use sitelab::config::SiteConfig;
use sitelab::field::Field;
use sitelab::preview::PreviewNode;
use sitelab::tier::Tier;
use sitelab::{generate, preview, store};
use tempfile::TempDir;

#[test]
fn fresh_store_starts_from_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("site.json");

    let config = store::load(&path);
    assert_eq!(config, SiteConfig::default());

    // First save materializes the blob; a reload is identical.
    store::save(&path, &config).unwrap();
    assert_eq!(store::load(&path), config);
}

#[test]
fn edit_save_reload_export() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("site.json");

    let config = store::load(&path)
        .with(Field::BannerTitle, "Test")
        .with(Field::ImageCount, "2");
    store::save(&path, &config).unwrap();

    let reloaded = store::load(&path);
    assert_eq!(reloaded, config);

    let doc = generate::render(&reloaded, Tier::Advanced);
    assert!(doc.contains("class=\"gallery\""));
    assert_eq!(doc.matches("<img").count(), 2);
    assert!(doc.contains("<h1>Test</h1>"));
}

#[test]
fn export_and_preview_agree_on_structure() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("site.json");

    let config = store::load(&path).with(Field::ImageCount, "3");
    store::save(&path, &config).unwrap();

    let reloaded = store::load(&path);
    let doc = generate::render(&reloaded, Tier::Advanced);
    let tree = preview::render_preview(&reloaded, Tier::Advanced);

    // Same structural hooks on both paths.
    for class in ["top-bar", "main-banner", "info-box", "gallery"] {
        assert!(doc.contains(class));
        assert!(tree.find_class(class).is_some(), "preview missing {class}");
    }
    let PreviewNode::Element { children, .. } = tree.find_class("gallery").unwrap() else {
        panic!("gallery is an element");
    };
    assert_eq!(children.len(), 3);
    assert_eq!(doc.matches("<img").count(), 3);
}

#[test]
fn tier_drop_simplifies_preview_but_not_export_or_store() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("site.json");

    // An advanced-tier session styles the page heavily.
    let config = store::load(&path)
        .with(Field::BannerHeight, "999")
        .with(Field::InfoShadow, "10px 10px 0px #000");
    store::save(&path, &config).unwrap();

    // A later basic-tier session still exports everything...
    let reloaded = store::load(&path);
    let doc = generate::render(&reloaded, Tier::Basic);
    assert!(doc.contains("height: 999px"));
    assert!(doc.contains("box-shadow: 10px 10px 0px #000"));

    // ...while its preview collapses to the baseline...
    let tree = preview::render_preview(&reloaded, Tier::Basic);
    let banner = tree.find_class("main-banner").unwrap();
    let info = tree.find_class("info-box").unwrap();
    assert_eq!(banner.style("height"), Some("auto"));
    assert_eq!(info.style("box-shadow"), Some("none"));

    // ...and the stored values survive for the next advanced session.
    assert_eq!(store::load(&path).banner_height, "999");
}

#[test]
fn corrupt_store_recovers_and_keeps_working() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("site.json");

    std::fs::write(&path, "definitely not json").unwrap();

    let config = store::load(&path);
    assert_eq!(config, SiteConfig::default());

    // The recovered record renders and persists normally.
    let doc = generate::render(&config, Tier::Basic);
    assert!(doc.starts_with("<!DOCTYPE html>"));
    store::save(&path, &config).unwrap();
    assert_eq!(store::load(&path), SiteConfig::default());
}
