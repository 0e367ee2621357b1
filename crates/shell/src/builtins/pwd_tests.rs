use super::*;
use serial_test::serial;

#[test]
#[serial]
fn prints_current_directory_with_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(&mut out, &mut err);
    assert_eq!(code, 0);
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.ends_with('\n'));
    assert_eq!(printed.trim_end(), dir.path().canonicalize().unwrap().display().to_string());
}
