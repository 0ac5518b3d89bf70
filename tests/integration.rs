use std::{fs, path::PathBuf, process::Command};

fn run_bin(args: &[&str]) {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_driftsim"));

    let output = Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command");

    let stdout_str =
        std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

    assert!(
        output.status.success(),
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );
}

#[test]
fn config_workflow() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("config_workflow");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let config_path = test_dir.join("config.toml");
    let config_contents = String::new()
        + "[model]\n"
        + "n_pop = 100\n"
        + "sel_coeff = 0.001\n"
        + "mu_a_to_b = 0.0\n"
        + "mu_b_to_a = 0.0\n"
        + "\n"
        + "[init]\n"
        + "freq_a = 0.01\n"
        + "\n"
        + "[batch]\n"
        + "n_runs = 200\n"
        + "max_gens = 100000\n";

    fs::write(&config_path, config_contents).expect("failed to write config file");

    let config_path_str = config_path
        .to_str()
        .expect("failed to convert config path to string");

    run_bin(&["--config", config_path_str, "--seed", "1"]);

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn preset_workflow() {
    run_bin(&["--preset", "nearly-neutral", "--seed", "1"]);
    run_bin(&["--preset", "deleterious", "--seed", "1"]);
}

#[test]
fn invalid_config_fails() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("invalid_config");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let config_path = test_dir.join("config.toml");
    let config_contents = String::new()
        + "[model]\n"
        + "n_pop = 100\n"
        + "sel_coeff = 0.0\n"
        + "mu_a_to_b = 1.5\n"
        + "mu_b_to_a = 0.0\n"
        + "\n"
        + "[init]\n"
        + "freq_a = 0.5\n"
        + "\n"
        + "[batch]\n"
        + "n_runs = 10\n"
        + "max_gens = 100\n";

    fs::write(&config_path, config_contents).expect("failed to write config file");

    let bin = PathBuf::from(env!("CARGO_BIN_EXE_driftsim"));
    let output = Command::new(bin)
        .args(["--config", config_path.to_str().unwrap()])
        .output()
        .expect("failed to execute command");

    assert!(!output.status.success());

    fs::remove_dir_all(&test_dir).ok();
}
