//! Vote records keyed by `(ballot_id, voter)`.
//!
//! A record is written once and never updated or removed, including after
//! its ballot has been closed.

use common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const VOTE: Symbol = symbol_short!("VOTE");

/// A cast vote.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    /// Index into the ballot's option list at the time of casting.
    pub option_index: u32,
    /// Ledger timestamp of the cast.
    pub cast_at: u64,
}

fn vote_key(ballot_id: u64, voter: &Address) -> (Symbol, u64, Address) {
    (VOTE, ballot_id, voter.clone())
}

pub(crate) fn store(env: &Env, ballot_id: u64, voter: &Address, record: &VoteRecord) {
    let key = vote_key(ballot_id, voter);
    env.storage().persistent().set(&key, record);
    ttl::extend_persistent(env, &key);
    ttl::extend_instance(env);
}

pub(crate) fn load(env: &Env, ballot_id: u64, voter: &Address) -> Option<VoteRecord> {
    env.storage().persistent().get(&vote_key(ballot_id, voter))
}

pub(crate) fn has_voted(env: &Env, ballot_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&vote_key(ballot_id, voter))
}
