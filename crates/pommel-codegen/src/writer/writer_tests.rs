#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

fn artifact(package: &str, type_name: &str, contents: &str) -> Artifact {
    Artifact {
        package: package.into(),
        type_name: type_name.into(),
        file_name: format!("{type_name}.java"),
        contents: contents.into(),
    }
}

#[test]
fn write_artifacts___new_files___written_under_package_dirs() {
    let dir = TempDir::new().unwrap();
    let artifacts = vec![
        artifact("com.example", "A_SoloModule", "class A {}\n"),
        artifact("com.example.inner", "B_SoloModule", "class B {}\n"),
    ];

    let report = write_artifacts(&artifacts, dir.path()).unwrap();

    assert_eq!(report.written.len(), 2);
    assert!(report.unchanged.is_empty());
    let written = fs::read_to_string(dir.path().join("com/example/inner/B_SoloModule.java")).unwrap();
    assert_eq!(written, "class B {}\n");
}

#[test]
fn write_artifacts___identical_contents___left_unchanged() {
    let dir = TempDir::new().unwrap();
    let artifacts = vec![artifact("com.example", "A_SoloModule", "class A {}\n")];
    write_artifacts(&artifacts, dir.path()).unwrap();

    let report = write_artifacts(&artifacts, dir.path()).unwrap();

    assert!(report.written.is_empty());
    assert_eq!(
        report.unchanged,
        vec![dir.path().join("com/example/A_SoloModule.java")]
    );
}

#[test]
fn write_artifacts___changed_contents___rewritten() {
    let dir = TempDir::new().unwrap();
    write_artifacts(&[artifact("p", "A_SoloModule", "old\n")], dir.path()).unwrap();

    let report = write_artifacts(&[artifact("p", "A_SoloModule", "new\n")], dir.path()).unwrap();

    assert_eq!(report.written.len(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("p/A_SoloModule.java")).unwrap(),
        "new\n"
    );
}

#[test]
fn write_artifacts___root_is_a_file___reports_create_dir_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let result = write_artifacts(&[artifact("p", "A_SoloModule", "x\n")], &blocker);

    assert!(matches!(result, Err(CodegenError::CreateDir { .. })));
}
