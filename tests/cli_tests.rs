//! End-to-end tests for the `minipas` command-line driver.
//!
//! These drive `cli::execute` and `cli::commands` directly (no subprocess) and check the report
//! written to the output sink and the exit code.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use minipas::cli::commands::{self, MAX_SOURCE_SIZE};
use minipas::cli::{self, Cli, ExitCode};
use minipas::{FrontendConfig, Locale};

/// A scratch file under the system temp dir, removed on drop.
struct ScratchFile(PathBuf);

impl ScratchFile {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("minipas-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn run_parse(path: &Path, config: FrontendConfig) -> (ExitCode, String) {
    let source = commands::read_source(path).unwrap();
    let mut out = Vec::new();
    let code = commands::parse_source(&path.display().to_string(), &source, &config, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

/// Parse command-line arguments the way `minipas` would see them.
fn cli_for(args: &[&dyn AsRef<OsStr>]) -> Cli {
    let args: Vec<OsString> = std::iter::once(OsString::from("minipas"))
        .chain(args.iter().map(|arg| arg.as_ref().to_os_string()))
        .collect();
    Cli::try_parse_from(args).unwrap()
}

fn first_line(source: &str) -> String {
    let mut out = Vec::new();
    commands::check_source(source, &FrontendConfig::default(), &mut out).unwrap();
    String::from_utf8(out).unwrap().lines().next().unwrap_or_default().to_string()
}

#[test]
fn test_valid_corpus_program_is_accepted() {
    let (code, report) = run_parse(Path::new("tests/parse_corpus/minimal.pas"), FrontendConfig::default());
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(
        report,
        "The program is correct.\nProgram\n  Keyword: program\n  Program name: empty\n  Block\n    Statement list\n"
    );
}

#[test]
fn test_syntax_error_exits_with_failure() {
    let file = ScratchFile::new("bad.pas", "program p;\nbegin\n  x := 1\n  y := 2\nend.\n");
    let (code, report) = run_parse(file.path(), FrontendConfig::default());
    assert_eq!(code, ExitCode::FAILURE);
    assert_eq!(
        report,
        "error: expected 'end' (at line 4, column 3, found 'y')\nThe program has syntax errors.\n"
    );
}

#[test]
fn test_chinese_error_report() {
    let file = ScratchFile::new("bad_zh.pas", "program p; begin x := 1 end");
    let (code, report) = run_parse(file.path(), FrontendConfig::new().with_locale(Locale::Zh));
    assert_eq!(code, ExitCode::FAILURE);
    assert_eq!(
        report,
        "错误：程序必须以点号结束（在行 1, 列 28，遇到 ''）\n该程序有语法错误。\n"
    );
}

#[test]
fn test_rejected_report_lines() {
    assert_eq!(
        first_line("program p; begin if (a) then x := 1 end."),
        "error: a parenthesized condition must contain a relational operator (at line 1, column 23, found ')')"
    );
    assert_eq!(
        first_line("program p; begin 3 := x end."),
        "error: a statement cannot start with a number; the assignment target is likely malformed (at line 1, column 18, found '3')"
    );
    assert_eq!(
        first_line("program p; begin x := 1 end. extra"),
        "error: unexpected content after the end of the program (at line 1, column 30, found 'extra')"
    );
    assert_eq!(
        first_line("program p; begin while x do x := 1 end."),
        "error: condition is missing a relational operator (at line 1, column 26, found 'do')"
    );
}

#[test]
fn test_execute_writes_output_file() {
    let input = ScratchFile::new("exec_in.pas", "program p; begin break end.");
    let output = ScratchFile::new("exec_out.txt", "");
    let cli = cli_for(&[&input.path(), &"--output", &output.path(), &"--indent", &"1"]);

    let code = cli::execute(cli).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(
        fs::read_to_string(output.path()).unwrap(),
        "The program is correct.\nProgram\n Keyword: program\n Program name: p\n Block\n  Statement list\n   Break statement\n"
    );
}

#[test]
fn test_lex_mode() {
    let input = ScratchFile::new("lex_in.pas", "{c}\nx<>1");
    let output = ScratchFile::new("lex_out.txt", "");
    let cli = cli_for(&[&input.path(), &"--lex", &"-o", &output.path()]);

    assert_eq!(cli::execute(cli).unwrap(), ExitCode::SUCCESS);
    assert_eq!(
        fs::read_to_string(output.path()).unwrap(),
        "2:1 identifier 'x'\n2:2 operator '<>'\n2:4 number '1'\n2:5 end-of-input ''\n"
    );
}

#[test]
fn test_missing_input_is_a_cli_error() {
    let err = commands::read_source(Path::new("no/such/input.txt")).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("no/such/input.txt"));
}

#[test]
fn test_missing_input_leaves_output_file_untouched() {
    let output = ScratchFile::new("keep_out.txt", "previous report\n");
    let cli = cli_for(&[&"does/not/exist.pas", &"-o", &output.path()]);

    let err = cli::execute(cli).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert_eq!(fs::read_to_string(output.path()).unwrap(), "previous report\n");
}

#[test]
fn test_oversized_input_is_rejected() {
    let file = ScratchFile::new("huge.pas", "");
    fs::OpenOptions::new()
        .write(true)
        .open(file.path())
        .unwrap()
        .set_len(MAX_SOURCE_SIZE + 1)
        .unwrap();

    let err = commands::read_source(file.path()).unwrap_err();
    assert!(err.message.contains("too large"), "unexpected message: {}", err.message);

    let output = ScratchFile::new("huge_out.txt", "previous report\n");
    let cli = cli_for(&[&file.path(), &"-o", &output.path()]);
    assert!(cli::execute(cli).is_err());
    assert_eq!(fs::read_to_string(output.path()).unwrap(), "previous report\n");
}
