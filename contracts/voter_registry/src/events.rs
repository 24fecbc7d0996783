//! Structured event publishing for the voter registry.

#![allow(deprecated)] // events().publish -> #[contractevent] not yet migrated

use soroban_sdk::{symbol_short, Address, Env};

pub fn publish_voter_registered(env: &Env, voter: &Address) {
    env.events()
        .publish((symbol_short!("VOTER_REG"),), voter.clone());
}

pub fn publish_voter_unregistered(env: &Env, voter: &Address) {
    env.events()
        .publish((symbol_short!("VOTER_UNR"),), voter.clone());
}

/// Emits `REG_OPEN` or `REG_CLOSE` with the owner that flipped the gate.
pub fn publish_registration_toggled(env: &Env, caller: &Address, open: bool) {
    let topic = if open {
        symbol_short!("REG_OPEN")
    } else {
        symbol_short!("REG_CLOSE")
    };
    env.events().publish((topic, caller.clone()), open);
}
