#![no_std]

//! # Vote Ledger
//!
//! Records at most one vote per `(ballot, voter)` pair. Before a vote is
//! written the ledger asks two collaborator contracts, bound by the
//! constructor when the ledger is deployed:
//!
//! - the ballot store, for the ballot and its option list;
//! - the voter registry, for the voter's eligibility.
//!
//! `cast_vote` evaluates its checks in a fixed order so the reported error is
//! deterministic:
//!
//! ```text
//! ballot exists ──► voter registered ──► option in range ──► not yet voted ──► record
//!  BallotNotFound   VoterNotRegistered     InvalidOption        AlreadyVoted
//! ```
//!
//! Votes are never updated or deleted. Closing a ballot leaves its votes in
//! place as a historical record; the closed id can no longer receive votes
//! and is never reissued by the ballot store.

pub mod config;
pub mod events;
pub mod votes;

use common::{BallotStoreClient, VoterRegistryClient};
use soroban_sdk::{contract, contractimpl, log, Address, Env};

use config::LedgerConfig;
use votes::VoteRecord;

// ── Error codes ───────────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    BallotNotFound = 20,
    VoterNotRegistered = 30,
    InvalidOption = 31,
    AlreadyVoted = 32,
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct VoteLedgerContract;

#[contractimpl]
impl VoteLedgerContract {
    /// Bind the ledger to the registry and ballot store it consults.
    ///
    /// Runs once, atomically with deployment, so the binding cannot be
    /// claimed by a later caller.
    pub fn __constructor(env: Env, registry: Address, ballots: Address) {
        let cfg = LedgerConfig { registry, ballots };
        config::store(&env, &cfg);
        events::publish_initialized(&env, &cfg);
    }

    /// Cast `voter`'s vote for option `option_index` on ballot `ballot_id`.
    ///
    /// `voter` must authorise the call. See the module docs for the order in
    /// which the eligibility checks run.
    pub fn cast_vote(
        env: Env,
        ballot_id: u64,
        voter: Address,
        option_index: u32,
    ) -> Result<(), ContractError> {
        let cfg = Self::config(&env)?;
        voter.require_auth();

        let Some(ballot) = BallotStoreClient::new(&env, &cfg.ballots).get_ballot(&ballot_id) else {
            log!(&env, "cast_vote rejected: ballot not found", ballot_id);
            return Err(ContractError::BallotNotFound);
        };

        if !VoterRegistryClient::new(&env, &cfg.registry).is_registered(&voter) {
            log!(&env, "cast_vote rejected: voter not registered", ballot_id, voter);
            return Err(ContractError::VoterNotRegistered);
        }

        if !ballot.has_option(option_index) {
            log!(&env, "cast_vote rejected: option out of range", ballot_id, option_index);
            return Err(ContractError::InvalidOption);
        }

        if votes::has_voted(&env, ballot_id, &voter) {
            log!(&env, "cast_vote rejected: already voted", ballot_id, voter);
            return Err(ContractError::AlreadyVoted);
        }

        let record = VoteRecord {
            option_index,
            cast_at: env.ledger().timestamp(),
        };
        votes::store(&env, ballot_id, &voter, &record);
        events::publish_vote_cast(&env, ballot_id, &voter, option_index);

        Ok(())
    }

    // ── View functions ────────────────────────────────────────────────────────

    /// The option `voter` chose on `ballot_id`.
    ///
    /// Absent both when the voter never voted and when the ballot never
    /// existed; the two cases are not distinguished.
    pub fn get_vote(env: Env, ballot_id: u64, voter: Address) -> Option<u32> {
        votes::load(&env, ballot_id, &voter).map(|r| r.option_index)
    }

    pub fn get_vote_record(env: Env, ballot_id: u64, voter: Address) -> Option<VoteRecord> {
        votes::load(&env, ballot_id, &voter)
    }

    pub fn has_voted(env: Env, ballot_id: u64, voter: Address) -> bool {
        votes::has_voted(&env, ballot_id, &voter)
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, ContractError> {
        Self::config(&env)
    }

    fn config(env: &Env) -> Result<LedgerConfig, ContractError> {
        config::load(env).ok_or_else(|| {
            log!(env, "vote ledger has no collaborator config");
            ContractError::NotInitialized
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
