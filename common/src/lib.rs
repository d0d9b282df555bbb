// common/src/lib.rs
use anyhow::Result;
use dotenv::dotenv;
use starknet::{
    accounts::{ExecutionEncoding, SingleOwnerAccount},
    core::{chain_id, types::Felt},
    providers::{jsonrpc::HttpTransport, JsonRpcClient, Url},
    signers::{LocalWallet, SigningKey},
};
use std::env;

// ─────────────────── Configuration ───────────────────

/// Which Starknet environment the script targets.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Network {
    Testnet,
    Mainnet,
}

impl Network {
    pub fn chain_id(self) -> Felt {
        match self {
            Network::Testnet => chain_id::SEPOLIA,
            Network::Mainnet => chain_id::MAINNET,
        }
    }

    /// Default public JSON-RPC endpoint, unless STARKNET_RPC_URL overrides it.
    pub fn default_rpc_url(self) -> &'static str {
        match self {
            Network::Testnet => "https://starknet-sepolia.public.blastapi.io/rpc/v0_7",
            Network::Mainnet => "https://starknet-mainnet.public.blastapi.io/rpc/v0_7",
        }
    }
}

// Switch to Mainnet for production
pub const NETWORK: Network = Network::Testnet;

pub struct Config {
    pub network: Network,
    pub rpc_url: String,
    pub token_contract: Option<String>,
    pub launchpad_contract: Option<String>,
    pub factory_contract: Option<String>,
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

pub fn load_config() -> Config {
    dotenv().ok();
    Config {
        network: NETWORK,
        rpc_url: env_opt("STARKNET_RPC_URL")
            .unwrap_or_else(|| NETWORK.default_rpc_url().to_string()),
        token_contract: env_opt("TOKEN_CONTRACT_ADDRESS"),
        launchpad_contract: env_opt("LAUNCHPAD_CONTRACT_ADDRESS"),
        factory_contract: env_opt("FACTORY_CONTRACT_ADDRESS"),
    }
}

// ─────────────────── Account ───────────────────

pub type StarknetAccount = SingleOwnerAccount<JsonRpcClient<HttpTransport>, LocalWallet>;

/// Credentials from STARKNET_PRIVATE_KEY / STARKNET_ACCOUNT_ADDRESS, if both are set.
fn credentials() -> Option<(String, String)> {
    let private_key = env_opt("STARKNET_PRIVATE_KEY");
    let address = env_opt("STARKNET_ACCOUNT_ADDRESS");
    match (private_key, address) {
        (Some(k), Some(a)) => Some((k, a)),
        _ => None,
    }
}

pub fn provider(cfg: &Config) -> JsonRpcClient<HttpTransport> {
    let url = Url::parse(&cfg.rpc_url).expect("STARKNET_RPC_URL must be a valid URL");
    JsonRpcClient::new(HttpTransport::new(url))
}

/// Build the signing account from the environment, bound to the configured
/// network. No network call happens here. Missing credentials end the
/// process; a non-hex private key panics.
pub async fn get_account(cfg: &Config) -> StarknetAccount {
    let Some((private_key, address)) = credentials() else {
        eprintln!("Error: set STARKNET_PRIVATE_KEY and STARKNET_ACCOUNT_ADDRESS in .env");
        std::process::exit(1);
    };

    let secret = Felt::from_hex(&private_key).expect("STARKNET_PRIVATE_KEY must be valid hex");
    let address = Felt::from_hex(&address).expect("STARKNET_ACCOUNT_ADDRESS must be valid hex");
    let signer = LocalWallet::from(SigningKey::from_secret_scalar(secret));

    SingleOwnerAccount::new(
        provider(cfg),
        signer,
        address,
        cfg.network.chain_id(),
        ExecutionEncoding::New,
    )
}

// ─────────────────── Token Flow ───────────────────

pub async fn interact_with_token(cfg: &Config) -> Result<()> {
    let account = get_account(cfg).await;

    let Some(addr) = cfg.token_contract.as_deref() else {
        eprintln!("Error: set TOKEN_CONTRACT_ADDRESS in .env");
        return Ok(());
    };

    println!("Interacting with token contract: {addr}");

    // Read the ERC-20 metadata once the calls below are enabled:
    // let contract_address = Felt::from_hex(addr)?;
    // let name = account
    //     .provider()
    //     .call(
    //         FunctionCall {
    //             contract_address,
    //             entry_point_selector: selector!("name"),
    //             calldata: vec![],
    //         },
    //         BlockId::Tag(BlockTag::Latest),
    //     )
    //     .await?;
    // let symbol = ... selector!("symbol") ...
    // let total_supply = ... selector!("total_supply") ...
    // println!("Token: {name:?} ({symbol:?}) - Supply: {total_supply:?}");
    let _ = account;

    println!("Interaction script configured");
    println!("Uncomment the calls above and adapt them as needed");
    Ok(())
}

// ─────────────────── Launchpad Flow ───────────────────

pub async fn interact_with_launchpad(cfg: &Config) -> Result<()> {
    let account = get_account(cfg).await;

    let Some(addr) = cfg.launchpad_contract.as_deref() else {
        eprintln!("Error: set LAUNCHPAD_CONTRACT_ADDRESS in .env");
        return Ok(());
    };

    println!("Interacting with launchpad contract: {addr}");

    // Example: read the price of a token once the calls below are enabled:
    // let contract_address = Felt::from_hex(addr)?;
    // let token_address = Felt::from_hex("0x...")?;
    // let price = account
    //     .provider()
    //     .call(
    //         FunctionCall {
    //             contract_address,
    //             entry_point_selector: selector!("get_price"),
    //             calldata: vec![token_address],
    //         },
    //         BlockId::Tag(BlockTag::Latest),
    //     )
    //     .await?;
    // println!("Token price: {price:?}");
    let _ = account;

    println!("Interaction script configured");
    println!("Uncomment the calls above and adapt them as needed");
    Ok(())
}
