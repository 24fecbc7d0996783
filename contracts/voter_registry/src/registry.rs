//! Storage layout for the voter registry.
//!
//! Global settings (owner, registration gate, voter count) live in instance
//! storage; each registered voter is a persistent `(VOTER, address)` entry so
//! membership checks touch a single key.

use common::ttl;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

pub(crate) const OWNER: Symbol = symbol_short!("OWNER");
pub(crate) const INITIALIZED: Symbol = symbol_short!("INIT");
const REG_OPEN: Symbol = symbol_short!("REG_OPEN");
const VOTER_CNT: Symbol = symbol_short!("VOTER_CNT");
const VOTER: Symbol = symbol_short!("VOTER");

fn voter_key(voter: &Address) -> (Symbol, Address) {
    (VOTER, voter.clone())
}

// ── Owner & gate ─────────────────────────────────────────────────────────────

pub(crate) fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
    env.storage().instance().set(&INITIALIZED, &true);
}

pub(crate) fn owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub(crate) fn set_registration_open(env: &Env, open: bool) {
    env.storage().instance().set(&REG_OPEN, &open);
    ttl::extend_instance(env);
}

/// Registration is closed until the registry has been initialized.
pub(crate) fn is_registration_open(env: &Env) -> bool {
    env.storage().instance().get(&REG_OPEN).unwrap_or(false)
}

// ── Membership ───────────────────────────────────────────────────────────────

pub(crate) fn is_registered(env: &Env, voter: &Address) -> bool {
    env.storage().persistent().has(&voter_key(voter))
}

pub(crate) fn add_voter(env: &Env, voter: &Address) {
    let key = voter_key(voter);
    env.storage().persistent().set(&key, &true);
    ttl::extend_persistent(env, &key);

    let count = voter_count(env).saturating_add(1);
    env.storage().instance().set(&VOTER_CNT, &count);
    ttl::extend_instance(env);
}

pub(crate) fn remove_voter(env: &Env, voter: &Address) {
    env.storage().persistent().remove(&voter_key(voter));

    let count = voter_count(env).saturating_sub(1);
    env.storage().instance().set(&VOTER_CNT, &count);
    ttl::extend_instance(env);
}

pub(crate) fn voter_count(env: &Env) -> u32 {
    env.storage().instance().get(&VOTER_CNT).unwrap_or(0u32)
}
