mod common;

use common::TestEnv;

#[test]
fn card_sample_batch() {
    TestEnv::new()
        .cmd()
        .arg("card")
        .write_stdin("3\n5\n1 1 2 3 3\n4\n7 7 7 7\n3\n1 2 10\n")
        .assert()
        .success()
        .stdout("3\n0\n2\n");
}

#[test]
fn card_tokens_may_share_a_line() {
    TestEnv::new()
        .cmd()
        .arg("card")
        .write_stdin("2 0 6 10 9 10 9 10 1")
        .assert()
        .success()
        .stdout("0\n3\n");
}

#[test]
fn falsealarm_sample_batch() {
    TestEnv::new()
        .cmd()
        .arg("falsealarm")
        .write_stdin("4\n4 2\n1 0 0 1\n3 1\n1 1 1\n4 2\n0 1 1 0\n3 0\n0 0 0\n")
        .assert()
        .success()
        .stdout("NO\nNO\nYES\nYES\n");
}

#[test]
fn falsealarm_long_press_covers_gap() {
    TestEnv::new()
        .cmd()
        .arg("falsealarm")
        .write_stdin("1\n6 4\n0 1 0 0 1 0\n")
        .assert()
        .success()
        .stdout("YES\n");
}

#[test]
fn zero_trials_print_nothing() {
    TestEnv::new()
        .cmd()
        .arg("card")
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout("");
}
