#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env, Symbol, Vec};
use undead_lib::{
    price, rights, ClaimOrder, ContractError, LendOrder, Lending, RentOrder, Renting,
    ResolverClient, StopOrder, TokenStandard, ZombieClient, TOKEN_UNIT,
};

mod storage;

use storage::*;

#[contract]
pub struct RentRegistry;

#[contractimpl]
impl RentRegistry {
    /// Initialize with the admin, the payment resolver and the fee
    /// beneficiary wallet. Fee rates live on the resolver.
    pub fn init(env: Env, admin: Address, resolver: Address, beneficiary: Address) {
        if env.storage().instance().has(&DataKey::Initialized) {
            panic!("Contract already initialized");
        }
        admin.require_auth();

        rights::init_rights(&env, &admin);
        set_resolver(&env, &resolver);
        set_beneficiary(&env, &beneficiary);

        env.storage().instance().set(&DataKey::Initialized, &true);
    }

    pub fn add_admin(env: Env, caller: Address, subject: Address) {
        if rights::add_admin(&env, &caller, &subject).is_err() {
            panic!("ReNFT::not admin");
        }
    }

    pub fn remove_admin(env: Env, caller: Address, subject: Address) {
        match rights::remove_admin(&env, &caller, &subject) {
            Ok(()) => (),
            Err(ContractError::InvalidInput) => panic!("ReNFT::cannot remove last admin"),
            Err(_) => panic!("ReNFT::not admin"),
        }
    }

    /// Create lendings for every order, pulling custody of each asset into
    /// the registry. The whole batch is validated before any custody moves;
    /// a failure anywhere reverts the entire call.
    pub fn lend(env: Env, lender: Address, orders: Vec<LendOrder>) -> Vec<u64> {
        lender.require_auth();
        if orders.len() == 0 {
            panic!("ReNFT::no orders");
        }

        for order in orders.iter() {
            if order.lend_amount == 0 {
                panic!("ReNFT::lend amount is zero");
            }
            if order.standard == TokenStandard::Single && order.lend_amount != 1 {
                panic!("ReNFT::invalid lend amount");
            }
            if order.max_rent_duration == 0 {
                panic!("ReNFT::duration is zero");
            }
            if order.daily_rent_price == 0 {
                panic!("ReNFT::price is zero");
            }
            if order.payment_token == 0 {
                panic!("ReNFT::missing payment token");
            }
        }

        let mut lending_ids = Vec::new(&env);
        for order in orders.iter() {
            let lending_id = next_lending_id(&env, &order.nft, order.token_id);
            let lending = Lending {
                lender_address: lender.clone(),
                standard: order.standard,
                lend_amount: order.lend_amount,
                available_amount: order.lend_amount,
                max_rent_duration: order.max_rent_duration,
                daily_rent_price: order.daily_rent_price,
                payment_token: order.payment_token,
                will_auto_renew: order.will_auto_renew,
            };
            set_lending(&env, &order.nft, order.token_id, lending_id, &lending);

            ZombieClient::new(&env, &order.nft).transfer(
                &lender,
                &env.current_contract_address(),
                &order.token_id,
                &order.lend_amount,
            );

            env.events().publish(
                (Symbol::new(&env, "lend"),),
                (
                    order.nft.clone(),
                    order.token_id,
                    lending_id,
                    lender.clone(),
                    order.lend_amount,
                    order.max_rent_duration,
                    order.daily_rent_price,
                    order.payment_token,
                    order.will_auto_renew,
                ),
            );

            lending_ids.push_back(lending_id);
        }

        lending_ids
    }

    /// Rent units out of existing lendings, prepaying the full gross rent
    /// for the requested duration. The prepayment is held in custody until
    /// the lender claims it at maturity; it is never refunded.
    pub fn rent(env: Env, renter: Address, orders: Vec<RentOrder>) -> Vec<u64> {
        renter.require_auth();
        if orders.len() == 0 {
            panic!("ReNFT::no orders");
        }

        for order in orders.iter() {
            if order.rent_duration == 0 {
                panic!("ReNFT::duration is zero");
            }
            if order.rent_amount == 0 {
                panic!("ReNFT::rent amount is zero");
            }
        }

        let resolver = ResolverClient::new(&env, &get_resolver(&env));
        let now = env.ledger().timestamp();

        let mut renting_ids = Vec::new(&env);
        for order in orders.iter() {
            let mut lending = get_lending(&env, &order.nft, order.token_id, order.lending_id)
                .expect("ReNFT::lending doesn't exist");

            if lending.lender_address == renter {
                panic!("ReNFT::cant rent own nft");
            }
            if order.rent_duration > lending.max_rent_duration {
                panic!("ReNFT::rent duration exceeds allowed max");
            }
            if order.rent_amount > lending.available_amount {
                panic!("ReNFT::invalid rent amount");
            }

            let payment = resolver.get_payment_token(&lending.payment_token);
            let paid = price::rent_in_units(lending.daily_rent_price, order.rent_duration, TOKEN_UNIT)
                * (order.rent_amount as i128);

            let renting_id = next_renting_id(&env, &order.nft, order.token_id);
            let renting = Renting {
                renter_address: renter.clone(),
                lending_id: order.lending_id,
                rent_amount: order.rent_amount,
                rent_duration: order.rent_duration,
                rented_at: now,
                paid_amount: paid,
            };

            lending.available_amount -= order.rent_amount;
            set_lending(&env, &order.nft, order.token_id, order.lending_id, &lending);
            set_renting(&env, &order.nft, order.token_id, renting_id, &renting);

            // insufficient balance surfaces as the token contract's failure
            token::Client::new(&env, &payment).transfer(
                &renter,
                &env.current_contract_address(),
                &paid,
            );

            env.events().publish(
                (Symbol::new(&env, "rent"),),
                (
                    order.nft.clone(),
                    order.token_id,
                    order.lending_id,
                    renting_id,
                    renter.clone(),
                    order.rent_amount,
                    order.rent_duration,
                    now,
                    paid,
                ),
            );

            renting_ids.push_back(renting_id);
        }

        renting_ids
    }

    /// Pay out matured rentings to the lender, net of the protocol fee. The
    /// renting record is removed and availability restored before any token
    /// leaves custody. A lending with auto-renew off is delisted once all
    /// its units are back.
    pub fn claim_rent(env: Env, caller: Address, orders: Vec<ClaimOrder>) {
        caller.require_auth();
        if orders.len() == 0 {
            panic!("ReNFT::no orders");
        }

        let resolver = ResolverClient::new(&env, &get_resolver(&env));
        let beneficiary = get_beneficiary(&env);
        let now = env.ledger().timestamp();

        for order in orders.iter() {
            let mut lending = get_lending(&env, &order.nft, order.token_id, order.lending_id)
                .expect("ReNFT::lending doesn't exist");
            let renting = get_renting(&env, &order.nft, order.token_id, order.renting_id)
                .expect("ReNFT::renting doesn't exist");

            if renting.lending_id != order.lending_id {
                panic!("ReNFT::renting doesn't exist");
            }
            if lending.lender_address != caller {
                panic!("ReNFT::not lender");
            }
            if now < renting.return_at() {
                panic!("ReNFT::return date not passed");
            }

            let payment = resolver.get_payment_token(&lending.payment_token);
            let fee = renting.paid_amount * (resolver.get_rent_fee(&payment) as i128) / 10_000;
            let payout = renting.paid_amount - fee;

            // effects first: a re-entered claim must find the renting gone
            remove_renting(&env, &order.nft, order.token_id, order.renting_id);
            lending.available_amount += renting.rent_amount;
            let delist = !lending.will_auto_renew
                && lending.available_amount == lending.lend_amount;
            if delist {
                remove_lending(&env, &order.nft, order.token_id, order.lending_id);
            } else {
                set_lending(&env, &order.nft, order.token_id, order.lending_id, &lending);
            }

            let token_client = token::Client::new(&env, &payment);
            token_client.transfer(
                &env.current_contract_address(),
                &lending.lender_address,
                &payout,
            );
            if fee > 0 {
                token_client.transfer(&env.current_contract_address(), &beneficiary, &fee);
            }

            if delist {
                ZombieClient::new(&env, &order.nft).transfer(
                    &env.current_contract_address(),
                    &lending.lender_address,
                    &order.token_id,
                    &lending.lend_amount,
                );
                env.events().publish(
                    (Symbol::new(&env, "stop_lend"),),
                    (order.nft.clone(), order.token_id, order.lending_id),
                );
            }

            env.events().publish(
                (Symbol::new(&env, "rent_claimed"),),
                (
                    order.nft.clone(),
                    order.token_id,
                    order.renting_id,
                    payout,
                    fee,
                ),
            );
        }
    }

    /// Delist lendings and return custody to the lender. Fails while any
    /// unit of a lending is still rented out.
    pub fn stop_lend(env: Env, caller: Address, orders: Vec<StopOrder>) {
        caller.require_auth();
        if orders.len() == 0 {
            panic!("ReNFT::no orders");
        }

        for order in orders.iter() {
            let lending = get_lending(&env, &order.nft, order.token_id, order.lending_id)
                .expect("ReNFT::lending doesn't exist");

            if lending.lender_address != caller {
                panic!("ReNFT::not lender");
            }
            if lending.available_amount != lending.lend_amount {
                panic!("ReNFT::actively rented");
            }

            remove_lending(&env, &order.nft, order.token_id, order.lending_id);

            ZombieClient::new(&env, &order.nft).transfer(
                &env.current_contract_address(),
                &caller,
                &order.token_id,
                &lending.lend_amount,
            );

            env.events().publish(
                (Symbol::new(&env, "stop_lend"),),
                (order.nft.clone(), order.token_id, order.lending_id),
            );
        }
    }

    pub fn get_lending(env: Env, nft: Address, token_id: u64, lending_id: u64) -> Option<Lending> {
        get_lending(&env, &nft, token_id, lending_id)
    }

    pub fn get_renting(env: Env, nft: Address, token_id: u64, renting_id: u64) -> Option<Renting> {
        get_renting(&env, &nft, token_id, renting_id)
    }
}
