use std::io::Write;
use std::process::{Command, Stdio};

fn judge(input: &str) -> (String, Option<i32>) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cyk-judge"))
        .env_remove("CYK_MAX_WORD_LEN")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    (String::from_utf8(output.stdout).unwrap(), output.status.code())
}

const AB_INSTANCE: &str = "S SAB ab\nS -> AB\nA -> a\nB -> b\n# -> #\nab\n#\n";

#[test]
fn test_reports_every_instance() {
    let input = format!("{}\n{}", AB_INSTANCE, AB_INSTANCE.replace("ab\n#", "ba\n#"));
    let (stdout, status) = judge(&input);
    assert_eq!(
        stdout,
        "Instancia 1\nab e uma palavra valida\n\nInstancia 2\nba nao e uma palavra valida\n\n"
    );
    assert_eq!(status, Some(0));
}

#[test]
fn test_stops_at_first_error() {
    let input = format!("{}S\n{}", AB_INSTANCE, AB_INSTANCE);
    let (stdout, status) = judge(&input);
    assert_eq!(stdout, "Instancia 1\nab e uma palavra valida\n\n");
    assert_eq!(status, Some(1));
}

#[test]
fn test_empty_input() {
    assert_eq!(judge(""), (String::new(), Some(0)));
}
