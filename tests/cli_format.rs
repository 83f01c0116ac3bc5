mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn format_reads_reply_file() {
    let ctx = TestContext::new();
    let reply = ctx.write_file("reply.txt", "- pose1\n- pose2\nplain line");

    ctx.cli()
        .arg("format")
        .arg(&reply)
        .assert()
        .success()
        .stdout("<ul><br><li>pose1</li><br><li>pose2</li><br></ul><br>plain line\n");
}

#[test]
fn format_reads_stdin_when_no_file_given() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("format")
        .write_stdin("Intro\n* Child pose")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Intro<br><ul><br><li>Child pose</li>"))
        .stdout(predicate::str::contains("</ul>"));
}

#[test]
fn format_escapes_markup_by_default() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("format")
        .write_stdin("- <b>Warrior</b>")
        .assert()
        .success()
        .stdout(predicate::str::contains("<li>&lt;b&gt;Warrior&lt;&#x2f;b&gt;</li>"));
}

#[test]
fn format_raw_keeps_markup() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["format", "--raw"])
        .write_stdin("- <b>Warrior</b>")
        .assert()
        .success()
        .stdout(predicate::str::contains("<li><b>Warrior</b></li>"));
}

#[test]
fn format_missing_file_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["format", "no-such-reply.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
