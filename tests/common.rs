use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub fn vaultscan() -> Command {
    let mut cmd = cargo_bin_cmd!("vaultscan");
    // Keep the ambient environment from redirecting the vault root
    cmd.env_remove("VAULT_PATH");
    cmd
}

#[allow(dead_code)]
pub fn write_note(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
