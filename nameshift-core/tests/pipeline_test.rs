use nameshift_core::{
    transform_operation, CompiledTransform, ModuleRegistry, Reporter, TransformOptions,
    TransformPipeline, TransformSummary, Verb,
};
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn quiet_reporter() -> Reporter {
    Reporter::new(false, false, false)
}

fn expression_pipeline(exprs: &[&str]) -> TransformPipeline {
    let mut registry = ModuleRegistry::new();
    registry.load("case").unwrap();
    let exprs: Vec<String> = exprs.iter().map(|e| (*e).to_string()).collect();
    let transform = CompiledTransform::compile(&exprs, &registry).unwrap();
    // Inputs below are absolute paths, so scope expressions to the base name.
    TransformPipeline::new(Box::new(transform), None, true)
}

fn make_files(dir: &TempDir, names: &[&str]) -> Vec<OsString> {
    names
        .iter()
        .map(|name| {
            let path = dir.path().join(name);
            fs::write(&path, *name).unwrap();
            path.into_os_string()
        })
        .collect()
}

#[test]
fn test_counter_prefix_renames_in_input_order() {
    let dir = TempDir::new().unwrap();
    let inputs = make_files(&dir, &["file1.txt", "file2.txt"]);
    let mut pipeline = expression_pipeline(&["s/^/{n}. /"]);
    let options = TransformOptions {
        verb: Verb::Move,
        force: false,
        dry_run: false,
    };

    let summary =
        transform_operation(&inputs, &mut pipeline, &options, &quiet_reporter()).unwrap();

    assert_eq!(summary.renamed, 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("1. file1.txt")).unwrap(),
        "file1.txt"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("2. file2.txt")).unwrap(),
        "file2.txt"
    );
    assert!(!dir.path().join("file1.txt").exists());
}

#[test]
fn test_existing_destination_skipped_without_force() {
    let dir = TempDir::new().unwrap();
    let inputs = make_files(&dir, &["file1.txt"]);
    fs::write(dir.path().join("1. file1.txt"), "occupied").unwrap();
    let mut pipeline = expression_pipeline(&["s/^/{n}. /"]);
    let options = TransformOptions {
        verb: Verb::Move,
        force: false,
        dry_run: false,
    };

    let summary =
        transform_operation(&inputs, &mut pipeline, &options, &quiet_reporter()).unwrap();

    assert_eq!(
        summary,
        TransformSummary {
            renamed: 0,
            unchanged: 0,
            skipped: 1,
            failed: 0,
        }
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("file1.txt")).unwrap(),
        "file1.txt"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("1. file1.txt")).unwrap(),
        "occupied"
    );
}

#[test]
fn test_force_overwrites_existing_destination() {
    let dir = TempDir::new().unwrap();
    let inputs = make_files(&dir, &["file1.txt"]);
    fs::write(dir.path().join("1. file1.txt"), "occupied").unwrap();
    let mut pipeline = expression_pipeline(&["s/^/{n}. /"]);
    let options = TransformOptions {
        verb: Verb::Move,
        force: true,
        dry_run: false,
    };

    let summary =
        transform_operation(&inputs, &mut pipeline, &options, &quiet_reporter()).unwrap();

    assert_eq!(summary.renamed, 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("1. file1.txt")).unwrap(),
        "file1.txt"
    );
}

#[test]
fn test_identity_transform_causes_zero_actions() {
    let dir = TempDir::new().unwrap();
    let inputs = make_files(&dir, &["a.txt", "b.txt"]);
    let mut pipeline = expression_pipeline(&["s/zzz/yyy/"]);
    let options = TransformOptions {
        verb: Verb::Move,
        force: false,
        dry_run: false,
    };

    let summary =
        transform_operation(&inputs, &mut pipeline, &options, &quiet_reporter()).unwrap();

    assert_eq!(
        summary,
        TransformSummary {
            renamed: 0,
            unchanged: 2,
            skipped: 0,
            failed: 0,
        }
    );
    assert!(dir.path().join("a.txt").exists());
    assert!(dir.path().join("b.txt").exists());
}

#[test]
fn test_dry_run_never_mutates() {
    let dir = TempDir::new().unwrap();
    let inputs = make_files(&dir, &["file1.txt"]);
    let mut pipeline = expression_pipeline(&["upper"]);
    let options = TransformOptions {
        verb: Verb::Move,
        force: false,
        dry_run: true,
    };

    let summary =
        transform_operation(&inputs, &mut pipeline, &options, &quiet_reporter()).unwrap();

    assert_eq!(summary.renamed, 1);
    assert!(dir.path().join("file1.txt").exists());
    assert!(!dir.path().join("FILE1.TXT").exists());
}

#[test]
fn test_copy_verb_keeps_sources() {
    let dir = TempDir::new().unwrap();
    let inputs = make_files(&dir, &["notes.txt"]);
    let mut pipeline = expression_pipeline(&["s/notes/archive/"]);
    let options = TransformOptions {
        verb: Verb::Copy,
        force: false,
        dry_run: false,
    };

    let summary =
        transform_operation(&inputs, &mut pipeline, &options, &quiet_reporter()).unwrap();

    assert_eq!(summary.renamed, 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
        "notes.txt"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("archive.txt")).unwrap(),
        "notes.txt"
    );
}

#[cfg(unix)]
#[test]
fn test_undecodable_input_aborts_the_run() {
    use std::os::unix::ffi::OsStringExt;

    let dir = TempDir::new().unwrap();
    let mut inputs = make_files(&dir, &["ok.txt"]);
    // An input that the strict UTF-8 decode rejects aborts the whole run
    // rather than being skipped.
    let mut bytes = dir.path().join("bad").into_os_string().into_vec();
    bytes.push(0xFF);
    inputs.push(OsString::from_vec(bytes));

    let mut pipeline = expression_pipeline(&["upper"]);
    let options = TransformOptions {
        verb: Verb::Move,
        force: false,
        dry_run: true,
    };
    assert!(transform_operation(&inputs, &mut pipeline, &options, &quiet_reporter()).is_err());
}

#[test]
fn test_sources_in_subdirectories_keep_their_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let path = dir.path().join("sub").join("file.txt");
    fs::write(&path, "x").unwrap();
    let inputs = vec![path.into_os_string()];

    let mut pipeline = expression_pipeline(&["upper"]);
    let options = TransformOptions {
        verb: Verb::Move,
        force: false,
        dry_run: false,
    };

    transform_operation(&inputs, &mut pipeline, &options, &quiet_reporter()).unwrap();

    assert!(dir.path().join("sub").join("FILE.TXT").exists());
    let unexpected: Vec<PathBuf> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|p| p.is_file())
        .collect();
    assert!(unexpected.is_empty(), "file escaped its directory: {unexpected:?}");
}
