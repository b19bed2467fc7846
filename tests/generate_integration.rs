//! End-to-end runs of the generator against a scratch directory

use std::fs;
use std::path::PathBuf;

use storeshots::{FontPaths, GeneratorConfig, ShotKind};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("storeshots-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn missing_fonts() -> FontPaths {
    FontPaths {
        sans: PathBuf::from("/nonexistent/SFNS.ttf"),
        mono: PathBuf::from("/nonexistent/SFNSMono.ttf"),
        rounded: PathBuf::from("/nonexistent/SFNSRounded.ttf"),
    }
}

#[cfg(feature = "system-fonts")]
#[test]
fn writes_five_named_images() {
    if storeshots::FontBook::from_system().is_err() {
        println!("No system fonts available; skipping.");
        return;
    }
    let dir = scratch_dir("all");
    let config = GeneratorConfig {
        output_dir: dir.clone(),
        fonts: missing_fonts(),
        ..Default::default()
    };

    let mut created = Vec::new();
    let report = storeshots::generate(&config, |shot| created.push(shot.file_name.clone()))
        .expect("generate");

    let expected: Vec<_> = ShotKind::ALL.iter().map(|k| k.file_name().to_string()).collect();
    assert_eq!(created, expected);

    let mut on_disk: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    on_disk.sort();
    assert_eq!(on_disk, expected);

    for record in &report.shots {
        let bytes = fs::read(&record.path).unwrap();
        assert_eq!(bytes.len(), record.bytes);
        assert_eq!(storeshots::digest_hex(&bytes), record.sha256);
        let img = image::load_from_memory(&bytes).expect("decodable");
        assert_eq!((img.width(), img.height()), (1284, 2778));
    }

    let report_path = dir.join("report.json");
    report.write_json(&report_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["shots"].as_array().unwrap().len(), 5);
    assert_eq!(json["shots"][1]["kind"], "camera");

    fs::remove_dir_all(&dir).ok();
}

#[cfg(feature = "system-fonts")]
#[test]
fn only_builds_selected() {
    if storeshots::FontBook::from_system().is_err() {
        return;
    }
    let dir = scratch_dir("only");
    let config = GeneratorConfig {
        output_dir: dir.clone(),
        fonts: missing_fonts(),
        only: vec![ShotKind::Display],
        ..Default::default()
    };
    let report = storeshots::generate(&config, |_| {}).unwrap();
    assert_eq!(report.shots.len(), 1);
    assert!(dir.join("05_display_test.png").is_file());
    assert!(!dir.join("01_results.png").exists());
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_fonts_abort_without_fallback() {
    let dir = scratch_dir("nofonts");
    let config = GeneratorConfig {
        output_dir: dir.clone(),
        fonts: missing_fonts(),
        system_fallback: false,
        ..Default::default()
    };
    let mut called = false;
    let err = storeshots::generate(&config, |_| called = true).unwrap_err();
    assert!(matches!(err, storeshots::Error::FontNotFound { .. }));
    assert!(err.to_string().contains("/nonexistent/SFNS.ttf"));
    assert!(!called);
    assert!(!dir.exists());
}
