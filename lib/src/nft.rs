use soroban_sdk::{contractclient, Address, Env};

/// Consumed surface of the zombie NFT collaborator contract.
///
/// `transfer` carries a unit amount so multi-unit assets batch through the
/// same call; single-unit assets always pass 1. `level` drives the staking
/// boost table.
#[contractclient(name = "ZombieClient")]
pub trait ZombieNft {
    fn owner_of(env: Env, token_id: u64) -> Address;

    fn level(env: Env, token_id: u64) -> u32;

    fn transfer(env: Env, from: Address, to: Address, token_id: u64, amount: u32);
}
