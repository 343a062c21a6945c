//! Admin-rights set shared by the contracts.
//!
//! Each contract keeps its own set of admin addresses in instance storage;
//! operations that reconfigure a contract verify membership per call.

use soroban_sdk::{Address, Env, Symbol, Vec};

use crate::{errors::ContractError, RIGHTS_KEY};

fn read_admins(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, RIGHTS_KEY))
        .unwrap_or(Vec::new(env))
}

fn write_admins(env: &Env, admins: &Vec<Address>) {
    env.storage()
        .instance()
        .set(&Symbol::new(env, RIGHTS_KEY), admins);
}

/// Seed the set with the deploy-time admin. Callable once, from `init`.
pub fn init_rights(env: &Env, admin: &Address) {
    let mut admins = Vec::new(env);
    admins.push_back(admin.clone());
    write_admins(env, &admins);
}

pub fn is_admin(env: &Env, subject: &Address) -> bool {
    read_admins(env).contains(subject)
}

pub fn verify_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if !is_admin(env, caller) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Grant rights to `subject`. Requires an existing admin's auth.
pub fn add_admin(env: &Env, caller: &Address, subject: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    verify_admin(env, caller)?;
    let mut admins = read_admins(env);
    if !admins.contains(subject) {
        admins.push_back(subject.clone());
        write_admins(env, &admins);
    }
    Ok(())
}

/// Revoke rights from `subject`. Requires an existing admin's auth. The set
/// can never be emptied, otherwise admin-gated configuration would be
/// permanently locked.
pub fn remove_admin(env: &Env, caller: &Address, subject: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    verify_admin(env, caller)?;
    let mut admins = read_admins(env);
    if let Some(index) = admins.first_index_of(subject) {
        if admins.len() == 1 {
            return Err(ContractError::InvalidInput);
        }
        admins.remove_unchecked(index);
        write_admins(env, &admins);
    }
    Ok(())
}
