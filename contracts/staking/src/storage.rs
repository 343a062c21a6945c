use soroban_sdk::{contracttype, Address, Env, Vec};
use undead_lib::Stake;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    /// Fungible token staked and paid out.
    Token,
    /// Zombie NFT contract consulted for boost eligibility.
    Zombies,
    MaxApr,
    MonthIntervals,
    IntervalCoefficients,
    BoostCoefficients,
    StakeCounter,
    /// Sum of shares over all unclaimed stakes.
    TotalShares,
    /// Sum of principals over all unclaimed stakes, in whole tokens.
    TotalStaked,
    Stake(u64),
}

/* ---------------- CONFIG ---------------- */

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).unwrap()
}

pub fn set_zombies(env: &Env, zombies: &Address) {
    env.storage().instance().set(&DataKey::Zombies, zombies);
}

pub fn get_zombies(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Zombies).unwrap()
}

pub fn set_max_apr(env: &Env, max_apr: u32) {
    env.storage().instance().set(&DataKey::MaxApr, &max_apr);
}

pub fn get_max_apr(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::MaxApr).unwrap()
}

pub fn set_month_intervals(env: &Env, intervals: &Vec<u32>) {
    env.storage()
        .instance()
        .set(&DataKey::MonthIntervals, intervals);
}

pub fn get_month_intervals(env: &Env) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&DataKey::MonthIntervals)
        .unwrap()
}

pub fn set_interval_coefficients(env: &Env, coefficients: &Vec<u32>) {
    env.storage()
        .instance()
        .set(&DataKey::IntervalCoefficients, coefficients);
}

pub fn get_interval_coefficients(env: &Env) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&DataKey::IntervalCoefficients)
        .unwrap()
}

pub fn set_boost_coefficients(env: &Env, coefficients: &Vec<u32>) {
    env.storage()
        .instance()
        .set(&DataKey::BoostCoefficients, coefficients);
}

pub fn get_boost_coefficients(env: &Env) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&DataKey::BoostCoefficients)
        .unwrap()
}

/* ---------------- TOTALS ---------------- */

/// Allocate the next stake id; global, starting at 1.
pub fn next_stake_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::StakeCounter)
        .unwrap_or(0)
        + 1;
    env.storage().instance().set(&DataKey::StakeCounter, &id);
    id
}

pub fn get_total_shares(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

pub fn add_total_shares(env: &Env, delta: i128) {
    let total = get_total_shares(env) + delta;
    env.storage().instance().set(&DataKey::TotalShares, &total);
}

pub fn get_total_staked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalStaked)
        .unwrap_or(0)
}

pub fn add_total_staked(env: &Env, delta: i128) {
    let total = get_total_staked(env) + delta;
    env.storage().instance().set(&DataKey::TotalStaked, &total);
}

/* ---------------- STAKES ---------------- */

pub fn set_stake(env: &Env, stake_id: u64, stake: &Stake) {
    env.storage()
        .persistent()
        .set(&DataKey::Stake(stake_id), stake);
}

pub fn get_stake(env: &Env, stake_id: u64) -> Option<Stake> {
    env.storage().persistent().get(&DataKey::Stake(stake_id))
}
