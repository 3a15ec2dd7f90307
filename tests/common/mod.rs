use assert_cmd::Command;

pub fn spendlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env_remove("SPENDLOG_ROOT");
    cmd
}
