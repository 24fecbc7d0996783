//! Read-only collaborator interfaces consumed by the vote ledger.
//!
//! Each trait mirrors the matching view function exported by the registry or
//! the ballot store. `#[contractclient]` turns them into typed clients
//! (`VoterRegistryClient`, `BallotStoreClient`) that perform cross-contract
//! calls, so the ledger depends on these signatures and not on the other
//! contracts' crates.

use soroban_sdk::{contractclient, Address, Env};

use crate::Ballot;

#[contractclient(name = "VoterRegistryClient")]
pub trait VoterRegistryInterface {
    /// Whether `voter` is currently registered.
    fn is_registered(env: Env, voter: Address) -> bool;
}

#[contractclient(name = "BallotStoreClient")]
pub trait BallotStoreInterface {
    /// The ballot stored under `ballot_id`, absent once closed.
    fn get_ballot(env: Env, ballot_id: u64) -> Option<Ballot>;
}
