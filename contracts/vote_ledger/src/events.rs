//! Structured event publishing for the vote ledger.

#![allow(deprecated)] // events().publish -> #[contractevent] not yet migrated

use soroban_sdk::{symbol_short, Address, Env};

use crate::config::LedgerConfig;

pub fn publish_initialized(env: &Env, config: &LedgerConfig) {
    env.events().publish(
        (symbol_short!("LDG_INIT"),),
        (config.registry.clone(), config.ballots.clone()),
    );
}

pub fn publish_vote_cast(env: &Env, ballot_id: u64, voter: &Address, option_index: u32) {
    env.events().publish(
        (symbol_short!("VOTE_CAST"), ballot_id),
        (voter.clone(), option_index),
    );
}
