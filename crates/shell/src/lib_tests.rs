use super::*;

#[test]
fn run_line_executes_a_simple_pipeline() {
    let mut shell = Shell::new();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run_line(&mut shell, "echo hi", &mut out, &mut err).unwrap();
    assert_eq!(status, Some(0));
    assert_eq!(String::from_utf8(out).unwrap(), "hi \n");
}

#[test]
fn run_line_on_blank_input_returns_none() {
    let mut shell = Shell::new();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run_line(&mut shell, "   ", &mut out, &mut err).unwrap();
    assert_eq!(status, None);
}

#[test]
fn run_line_surfaces_parse_errors() {
    let mut shell = Shell::new();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run_line(&mut shell, "echo hi |", &mut out, &mut err);
    assert!(matches!(result, Err(ParseError::PipeWithoutCommand)));
}

#[test]
fn exit_clears_the_running_flag() {
    let mut shell = Shell::new();
    let mut out = Vec::new();
    let mut err = Vec::new();
    run_line(&mut shell, "exit", &mut out, &mut err).unwrap();
    assert!(!shell.running);
}
