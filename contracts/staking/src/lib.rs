#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env, Symbol, Vec};
use undead_lib::{
    rights, validation, Stake, ZombieClient, APR_DENOMINATOR, BASE_BOOST_COEFFICIENT,
    SECONDS_PER_MONTH, TOKEN_UNIT,
};

mod storage;

use storage::*;

#[contract]
pub struct Staking;

#[contractimpl]
impl Staking {
    /// Initialize with the deploy-time configuration. The multiplier tables
    /// are read-only afterwards.
    ///
    /// `month_intervals` and `interval_coefficients` are indexed together;
    /// `boost_coefficients` is indexed by zombie level. `max_apr` is in
    /// basis points of annual yield.
    pub fn init(
        env: Env,
        admin: Address,
        token: Address,
        zombies: Address,
        max_apr: u32,
        month_intervals: Vec<u32>,
        interval_coefficients: Vec<u32>,
        boost_coefficients: Vec<u32>,
    ) {
        if env.storage().instance().has(&DataKey::Initialized) {
            panic!("Contract already initialized");
        }
        admin.require_auth();

        if month_intervals.len() != interval_coefficients.len() {
            panic!("Staking::length mismatch");
        }
        if month_intervals.len() == 0 {
            panic!("Staking::no intervals");
        }
        if boost_coefficients.len() == 0 {
            panic!("Staking::no boost coefficients");
        }

        rights::init_rights(&env, &admin);
        set_token(&env, &token);
        set_zombies(&env, &zombies);
        set_max_apr(&env, max_apr);
        set_month_intervals(&env, &month_intervals);
        set_interval_coefficients(&env, &interval_coefficients);
        set_boost_coefficients(&env, &boost_coefficients);

        env.storage().instance().set(&DataKey::Initialized, &true);
    }

    /// Deposit `amount` whole tokens locked for the chosen interval, with
    /// the base 1x boost.
    pub fn stake(env: Env, staker: Address, amount: i128, interval: u32) -> u64 {
        staker.require_auth();
        Self::add_stake(&env, &staker, amount, interval, 0, BASE_BOOST_COEFFICIENT)
    }

    /// Deposit with a boost taken from the level of an owned zombie.
    pub fn stake_by_zombie_owner(
        env: Env,
        staker: Address,
        amount: i128,
        interval: u32,
        zombie_id: u64,
    ) -> u64 {
        staker.require_auth();

        let zombies = ZombieClient::new(&env, &get_zombies(&env));
        if zombies.owner_of(&zombie_id) != staker {
            panic!("Staking::not zombie owner");
        }

        let boosts = get_boost_coefficients(&env);
        let level = zombies.level(&zombie_id);
        if level >= boosts.len() {
            panic!("Staking::invalid level");
        }

        Self::add_stake(
            &env,
            &staker,
            amount,
            interval,
            zombie_id,
            boosts.get_unchecked(level),
        )
    }

    /// Pay out principal plus the pool reward for a matured stake. The stake
    /// amount is zeroed and the share totals reduced before the transfer, so
    /// a repeated claim always fails.
    pub fn claim(env: Env, staker: Address, stake_id: u64) -> i128 {
        staker.require_auth();

        let mut stake = get_stake(&env, stake_id).expect("Staking::stake not found");
        if stake.staker != staker {
            panic!("Staking::not staker");
        }
        if stake.amount == 0 {
            panic!("already claimed");
        }
        if env.ledger().timestamp() < stake.locked_until {
            panic!("Staking::stake is locked");
        }

        let reward = Self::reward_of(env.clone(), stake_id);
        let total_amount = stake.amount * TOKEN_UNIT + reward;

        // effects before the transfer
        add_total_shares(&env, -stake.shares);
        add_total_staked(&env, -stake.amount);
        stake.amount = 0;
        set_stake(&env, stake_id, &stake);

        token::Client::new(&env, &get_token(&env)).transfer(
            &env.current_contract_address(),
            &staker,
            &total_amount,
        );

        env.events().publish(
            (Symbol::new(&env, "stake_claimed"),),
            (staker, stake_id, total_amount),
        );

        total_amount
    }

    /// Reward a claim of `stake_id` would pay right now, in token smallest
    /// units: the stake's share of the pool surplus, capped by the maximum
    /// APR over the lock interval. Zero once claimed.
    pub fn reward_of(env: Env, stake_id: u64) -> i128 {
        let stake = get_stake(&env, stake_id).expect("Staking::stake not found");
        if stake.amount == 0 {
            return 0;
        }

        let total_shares = get_total_shares(&env);
        if total_shares == 0 {
            return 0;
        }

        // pool surplus: custody balance not backing principals
        let balance = token::Client::new(&env, &get_token(&env))
            .balance(&env.current_contract_address());
        let pool = balance - get_total_staked(&env) * TOKEN_UNIT;
        if pool <= 0 {
            return 0;
        }

        let uncapped = pool * stake.shares / total_shares;
        let months = get_month_intervals(&env).get_unchecked(stake.interval) as i128;
        let cap =
            months * stake.amount * TOKEN_UNIT * (get_max_apr(&env) as i128) / APR_DENOMINATOR;

        uncapped.min(cap)
    }

    pub fn get_stake(env: Env, stake_id: u64) -> Option<Stake> {
        get_stake(&env, stake_id)
    }

    pub fn get_month_intervals(env: Env) -> Vec<u32> {
        get_month_intervals(&env)
    }

    pub fn get_interval_coefficients(env: Env) -> Vec<u32> {
        get_interval_coefficients(&env)
    }

    pub fn get_boost_coefficients(env: Env) -> Vec<u32> {
        get_boost_coefficients(&env)
    }

    pub fn get_max_apr(env: Env) -> u32 {
        get_max_apr(&env)
    }

    fn add_stake(
        env: &Env,
        staker: &Address,
        amount: i128,
        interval: u32,
        zombie_id: u64,
        boost_coefficient: u32,
    ) -> u64 {
        if validation::validate_positive_amount(amount).is_err() {
            panic!("Staking::amount is zero");
        }

        let intervals = get_month_intervals(env);
        if interval >= intervals.len() {
            panic!("Staking::invalid interval");
        }

        let coefficient = get_interval_coefficients(env).get_unchecked(interval) as i128;
        let shares = match amount
            .checked_mul(coefficient)
            .and_then(|v| v.checked_mul(boost_coefficient as i128))
        {
            Some(v) => v,
            None => panic!("Staking::amount too large"),
        };
        let principal = match amount.checked_mul(TOKEN_UNIT) {
            Some(v) => v,
            None => panic!("Staking::amount too large"),
        };
        let locked_until = env.ledger().timestamp()
            + (intervals.get_unchecked(interval) as u64) * SECONDS_PER_MONTH;

        let stake_id = next_stake_id(env);
        let stake = Stake {
            staker: staker.clone(),
            amount,
            interval,
            shares,
            locked_until,
            zombie_id,
            boost_coefficient,
        };

        set_stake(env, stake_id, &stake);
        add_total_shares(env, shares);
        add_total_staked(env, amount);

        token::Client::new(env, &get_token(env)).transfer(
            staker,
            &env.current_contract_address(),
            &principal,
        );

        env.events().publish(
            (Symbol::new(env, "stake_added"),),
            (staker.clone(), stake_id, zombie_id, boost_coefficient, shares),
        );

        stake_id
    }
}
