use assert_cmd::{Command, cargo::cargo_bin_cmd};

pub fn hash_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("hashgroup");
    cmd.arg("hash");
    cmd
}

// Each integration test file is compiled as its own crate; not every crate
// parses stdout, so this helper is intentionally unused in some of them.
#[allow(dead_code)]
pub fn parse_stdout(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout should be valid JSON")
}
