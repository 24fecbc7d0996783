#![no_std]

//! # Ballot Store
//!
//! Holds ballots keyed by a sequential id. A ballot carries a title, between
//! `MIN_BALLOT_OPTIONS` and `MAX_BALLOT_OPTIONS` ordered options, and the
//! creator who alone may close it.
//!
//! Closing deletes the record: a ballot is open exactly while it can be
//! loaded. Ids start at 1, are consumed only by successful creations, and are
//! never reissued after a ballot is closed.

pub mod events;
pub mod store;

use common::{check_option_count, Ballot, OptionCountCheck};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

// ── Error codes ───────────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    Unauthorized = 3,
    BallotNotFound = 20,
    TooManyOptions = 21,
    InvalidOptionCount = 22,
    BallotIdOverflow = 23,
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct BallotStoreContract;

#[contractimpl]
impl BallotStoreContract {
    /// Create a ballot and return its id.
    ///
    /// `creator` must authorise the call and becomes the only address able to
    /// close the ballot. A rejected creation does not consume an id.
    pub fn create_ballot(
        env: Env,
        title: String,
        options: Vec<String>,
        creator: Address,
    ) -> Result<u64, ContractError> {
        creator.require_auth();

        match check_option_count(options.len()) {
            OptionCountCheck::Ok => {}
            OptionCountCheck::TooMany => {
                log!(&env, "create_ballot rejected: too many options", options.len());
                return Err(ContractError::TooManyOptions);
            }
            OptionCountCheck::Empty => {
                log!(&env, "create_ballot rejected: no options");
                return Err(ContractError::InvalidOptionCount);
            }
        }

        let Some(id) = store::peek_next_id(&env) else {
            log!(&env, "create_ballot rejected: ballot ids exhausted");
            return Err(ContractError::BallotIdOverflow);
        };
        let ballot = Ballot {
            id,
            title,
            options,
            creator,
        };

        store::store(&env, &ballot);
        store::commit_id(&env, id);
        events::publish_ballot_created(&env, &ballot);

        Ok(id)
    }

    /// Close (delete) a ballot. Only its creator may do so.
    pub fn close_ballot(env: Env, ballot_id: u64, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();

        let Some(ballot) = store::load(&env, ballot_id) else {
            log!(&env, "close_ballot rejected: ballot not found", ballot_id);
            return Err(ContractError::BallotNotFound);
        };
        if caller != ballot.creator {
            log!(&env, "close_ballot rejected: caller is not creator", ballot_id);
            return Err(ContractError::Unauthorized);
        }

        store::remove(&env, ballot_id);
        events::publish_ballot_closed(&env, ballot_id, &caller);

        Ok(())
    }

    // ── View functions ────────────────────────────────────────────────────────

    pub fn get_ballot(env: Env, ballot_id: u64) -> Option<Ballot> {
        store::load(&env, ballot_id)
    }

    /// The ballot's options in order. The returned vector is a copy.
    pub fn get_options(env: Env, ballot_id: u64) -> Result<Vec<String>, ContractError> {
        store::load(&env, ballot_id)
            .map(|b| b.options)
            .ok_or(ContractError::BallotNotFound)
    }

    /// Highest id assigned so far (0 before the first ballot).
    pub fn last_ballot_id(env: Env) -> u64 {
        store::last_id(&env)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
