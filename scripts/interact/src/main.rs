// scripts/interact/src/main.rs

use anyhow::Result;
use common::load_config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env (STARKNET_* credentials and contract addresses)
    let _cfg = load_config();

    println!("ZumpFun Contract Interaction Script");
    println!("{}", "=".repeat(50));

    // Add your interactions here:
    // common::interact_with_token(&_cfg).await?;
    // common::interact_with_launchpad(&_cfg).await?;

    println!();
    println!("To use this script:");
    println!("   1. Configure the variables in .env");
    println!("   2. Uncomment the functions you need");
    println!("   3. Run: cargo run -p interact");

    Ok(())
}
