use soroban_sdk::{contractclient, Address, Env};

/// Consumed surface of the rent resolver: pointer -> payment token address
/// plus the per-token rent fee table.
#[contractclient(name = "ResolverClient")]
pub trait PaymentResolver {
    fn get_payment_token(env: Env, pointer: u32) -> Address;

    fn get_rent_fee(env: Env, token: Address) -> u32;
}
