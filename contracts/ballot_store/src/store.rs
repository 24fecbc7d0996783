//! Ballot records and id allocation.

use common::{ttl, Ballot};
use soroban_sdk::{symbol_short, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

const BALLOT_CTR: Symbol = symbol_short!("BAL_CTR");
const BALLOT: Symbol = symbol_short!("BALLOT");

fn ballot_key(id: u64) -> (Symbol, u64) {
    (BALLOT, id)
}

// ── Id counter ───────────────────────────────────────────────────────────────

/// Highest id handed out so far; 0 before the first ballot.
pub(crate) fn last_id(env: &Env) -> u64 {
    env.storage().instance().get(&BALLOT_CTR).unwrap_or(0u64)
}

/// Id the next successful creation will receive, or `None` once exhausted.
///
/// Peeking does not advance the counter; call [`commit_id`] after the ballot
/// has been validated so rejected creations leave no gap.
pub(crate) fn peek_next_id(env: &Env) -> Option<u64> {
    last_id(env).checked_add(1)
}

pub(crate) fn commit_id(env: &Env, id: u64) {
    env.storage().instance().set(&BALLOT_CTR, &id);
    ttl::extend_instance(env);
}

// ── Records ──────────────────────────────────────────────────────────────────

pub(crate) fn store(env: &Env, ballot: &Ballot) {
    let key = ballot_key(ballot.id);
    env.storage().persistent().set(&key, ballot);
    ttl::extend_persistent(env, &key);
}

pub(crate) fn load(env: &Env, id: u64) -> Option<Ballot> {
    env.storage().persistent().get(&ballot_key(id))
}

pub(crate) fn remove(env: &Env, id: u64) {
    env.storage().persistent().remove(&ballot_key(id));
    ttl::extend_instance(env);
}
