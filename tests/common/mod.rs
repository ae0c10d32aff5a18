use assert_cmd::Command;

pub fn figmd_cmd() -> Command {
    let mut cmd = Command::cargo_bin("figmd").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
