use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use titlepatch_core::{SilentProgress, patch_directory};
use titlepatch_shared::{FileOutcome, PatchOptions, TitlePatchError};

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tp-it-{}", uuid::Uuid::now_v7()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.path().is_file())
        .map(|e| {
            (
                e.file_name().to_string_lossy().into_owned(),
                std::fs::read(e.path()).unwrap(),
            )
        })
        .collect()
}

fn seed(dir: &Path) {
    std::fs::write(
        dir.join("foo.md"),
        "# Top\n## Example.run() method\nSome text.\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("test-method.md"),
        "## asdf.testMethod() method\n\n## Parameters\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("titled.md"),
        "---\ntitle: Already here\n---\n\n## Something else\n",
    )
    .unwrap();
    std::fs::write(dir.join("plain.md"), "# Only H1\n\nNo subheadings.\n").unwrap();
    std::fs::write(dir.join("notes.txt"), "## Not markdown\n").unwrap();
}

#[test]
fn second_run_changes_nothing() {
    let tmp = temp_dir();
    seed(&tmp);

    let first = patch_directory(&tmp, &PatchOptions::default(), &SilentProgress).unwrap();
    assert_eq!(first.patched(), 2);
    let after_first = snapshot(&tmp);

    let second = patch_directory(&tmp, &PatchOptions::default(), &SilentProgress).unwrap();
    assert_eq!(second.patched(), 0);
    assert_eq!(second.already_patched(), 3);
    assert_eq!(snapshot(&tmp), after_first);

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn untouched_files_keep_their_bytes() {
    let tmp = temp_dir();
    seed(&tmp);
    let before = snapshot(&tmp);

    patch_directory(&tmp, &PatchOptions::default(), &SilentProgress).unwrap();
    let after = snapshot(&tmp);

    for name in ["titled.md", "plain.md", "notes.txt"] {
        assert_eq!(before[name], after[name], "{name} was modified");
    }

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn patched_files_keep_original_body() {
    let tmp = temp_dir();
    seed(&tmp);
    let before = snapshot(&tmp);

    let report = patch_directory(&tmp, &PatchOptions::default(), &SilentProgress).unwrap();

    for entry in &report.files {
        let FileOutcome::Patched { title } = &entry.outcome else {
            continue;
        };
        let content = std::fs::read_to_string(tmp.join(&entry.name)).unwrap();
        let header = format!("---\ntitle: {title}\n---\n\n");
        let body = content.strip_prefix(header.as_str()).expect("header first");
        assert_eq!(body.as_bytes(), before[&entry.name].as_slice());
    }

    let content = std::fs::read_to_string(tmp.join("test-method.md")).unwrap();
    assert!(content.starts_with("---\ntitle: asdf.testMethod() method\n---\n\n"));

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn report_lists_markdown_files_only() {
    let tmp = temp_dir();
    seed(&tmp);

    let report = patch_directory(&tmp, &PatchOptions::default(), &SilentProgress).unwrap();
    let names: Vec<&str> = report.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["foo.md", "plain.md", "test-method.md", "titled.md"]);
    assert_eq!(report.no_heading(), 1);

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn missing_directory_fails() {
    let missing = std::env::temp_dir().join(format!("tp-it-missing-{}", uuid::Uuid::now_v7()));
    let err = patch_directory(&missing, &PatchOptions::default(), &SilentProgress).unwrap_err();
    assert!(matches!(err, TitlePatchError::Io { .. }));
    assert!(err.to_string().contains("tp-it-missing-"));
}
