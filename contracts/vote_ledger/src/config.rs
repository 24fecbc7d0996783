use common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const CONFIG: Symbol = symbol_short!("CONFIG");

/// Addresses of the contracts the ledger consults before recording a vote.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Voter registry answering `is_registered`.
    pub registry: Address,
    /// Ballot store answering `get_ballot`.
    pub ballots: Address,
}

pub(crate) fn store(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&CONFIG, config);
    ttl::extend_instance(env);
}

pub(crate) fn load(env: &Env) -> Option<LedgerConfig> {
    env.storage().instance().get(&CONFIG)
}
