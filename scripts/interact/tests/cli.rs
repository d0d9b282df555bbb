use std::process::Command;

// The banner and usage hints print even with nothing configured, since the
// interaction calls are not wired into main.
#[test]
fn banner_and_usage_print_without_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_interact"))
        .env_remove("STARKNET_PRIVATE_KEY")
        .env_remove("STARKNET_ACCOUNT_ADDRESS")
        .env_remove("TOKEN_CONTRACT_ADDRESS")
        .env_remove("LAUNCHPAD_CONTRACT_ADDRESS")
        .env_remove("FACTORY_CONTRACT_ADDRESS")
        .output()
        .expect("failed to run interact binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ZumpFun Contract Interaction Script"));
    assert!(stdout.contains("To use this script:"));
    assert!(stdout.contains("Uncomment the functions you need"));
}
