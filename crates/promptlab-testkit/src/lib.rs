//! Test utilities for promptlab
//!
//! This crate provides shared testing utilities used across the promptlab workspace.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This ensures all test temporary files are centralized in a single location
/// that is gitignored and easy to clean up manually if needed.
///
/// # Returns
///
/// A `TempDir` instance that automatically cleans up on drop.
/// The directory is created at `.tmp/<random-name>` relative to the project root.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use promptlab_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("draft.md");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    // Create unique subdirectory within .tmp/
    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
///
/// Use this variant when you need proper error handling instead of panics.
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// A complete template document with one text field and two placeholders
///
/// The body references `{{topic}}` (declared) and `{{missing}}` (undeclared),
/// which makes this fixture useful for both substitution and coverage tests.
pub fn blog_post_document() -> &'static str {
    r#"---
title: Blog Post
fields:
- name: topic
  label: Topic
  type: text
---
Write about {{topic}} in a friendly tone. {{missing}} stays.
"#
}

/// A template document exercising every optional field key
pub fn full_document() -> &'static str {
    r#"---
title: Release Notes
description: Announcement draft
fields:
- name: version
  label: Version
  type: text
  required: true
  default: 1.0.0
- name: channel
  label: Channel
  type: select
  options:
  - stable
  - beta
- name: highlights
  label: Highlights
  type: textarea
---
# Release {{version}} ({{channel}})

{{highlights}}
"#
}

/// Writes a template document into `dir` and returns its path
///
/// # Panics
///
/// Panics if the file cannot be written. Intended for test setup only.
pub fn write_document(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).expect("Failed to write template document");
    path
}
