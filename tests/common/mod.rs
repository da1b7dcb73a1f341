#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use effectgraph_installer::Payload;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn cmd() -> Command {
    cargo_bin_cmd!("install-effectgraph")
}

/// Relative path -> bytes for every regular file below `root`.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).expect("under root").to_path_buf();
            (rel, fs::read(e.path()).expect("read file"))
        })
        .collect()
}

/// Relative path -> bytes for every file entry of the embedded archive.
pub fn expected_tree() -> BTreeMap<PathBuf, Vec<u8>> {
    Payload::embedded()
        .expect("embedded payload decodes")
        .entries()
        .expect("embedded payload is a valid archive")
        .into_iter()
        .filter(|e| !e.is_dir)
        .map(|e| (e.path, e.data))
        .collect()
}
