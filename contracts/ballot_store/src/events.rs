//! Structured event publishing for the ballot store.

#![allow(deprecated)] // events().publish -> #[contractevent] not yet migrated

use common::Ballot;
use soroban_sdk::{symbol_short, Address, Env};

pub fn publish_ballot_created(env: &Env, ballot: &Ballot) {
    env.events().publish(
        (symbol_short!("BAL_NEW"), ballot.id),
        (
            ballot.creator.clone(),
            ballot.title.clone(),
            ballot.options.len(),
        ),
    );
}

pub fn publish_ballot_closed(env: &Env, ballot_id: u64, caller: &Address) {
    env.events()
        .publish((symbol_short!("BAL_CLOSE"), ballot_id), caller.clone());
}
