// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Loading `GeneratorConfig` from YAML files.

#![cfg(feature = "config-loaders")]

use fixgen::{ConfigError, Generator, GeneratorConfig, TypeCatalog};
use std::io::Write;
use std::sync::Arc;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config("max_depth: 5\nmax_collection_size: 8\nseed: 1234\n");
    let config = GeneratorConfig::from_file(file.path()).expect("config");
    assert_eq!(
        config,
        GeneratorConfig::default()
            .max_depth(5)
            .max_collection_size(8)
            .seed(1234)
    );

    let gen = Generator::with_config(Arc::new(TypeCatalog::new()), config).expect("generator");
    assert_eq!(gen.config().max_depth, 5);
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = write_config("seed: 9\n");
    let config = GeneratorConfig::from_file(file.path()).expect("config");
    assert_eq!(config.max_depth, 3);
    assert_eq!(config.max_collection_size, 3);
    assert_eq!(config.seed, Some(9));
}

#[test]
fn test_invalid_files() {
    let zero_depth = write_config("max_depth: 0\n");
    assert!(matches!(
        GeneratorConfig::from_file(zero_depth.path()),
        Err(ConfigError::Invalid(_))
    ));

    let malformed = write_config("max_depth: [1, 2\n");
    assert!(matches!(
        GeneratorConfig::from_file(malformed.path()),
        Err(ConfigError::Yaml(_))
    ));

    let dir = tempfile::tempdir().expect("temp dir");
    assert!(matches!(
        GeneratorConfig::from_file(dir.path().join("absent.yaml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_round_trip_through_yaml() {
    let config = GeneratorConfig::default().max_depth(2).seed(5);
    let yaml = serde_yaml::to_string(&config).expect("serialize");
    assert_eq!(GeneratorConfig::from_yaml_str(&yaml).expect("parse"), config);
}
