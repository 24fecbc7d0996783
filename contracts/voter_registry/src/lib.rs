#![no_std]

//! # Voter Registry
//!
//! Tracks which identities may vote and whether new registrations are
//! currently accepted.
//!
//! - Anyone may register or unregister an explicit `voter` address; the
//!   registry does not require the voter to be the caller.
//! - Only the owner fixed at initialization may open or close registration.
//! - Closing registration blocks new registrations only. Unregistration and
//!   voting are unaffected.
//!
//! The vote ledger consults [`VoterRegistryContract::is_registered`] through
//! `common::VoterRegistryClient` before accepting a vote.

pub mod events;
pub mod registry;

use soroban_sdk::{contract, contractimpl, log, Address, Env};

// ── Error codes ───────────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    RegistrationClosed = 10,
    AlreadyRegistered = 11,
    NotRegistered = 12,
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct VoterRegistryContract;

#[contractimpl]
impl VoterRegistryContract {
    /// Set the registry owner and open registration.
    ///
    /// `owner` must authorise the call. The owner is immutable afterwards and
    /// does not need to be a registered voter.
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        if registry::is_initialized(&env) {
            log!(&env, "initialize rejected: already initialized", owner);
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();

        registry::set_owner(&env, &owner);
        registry::set_registration_open(&env, true);

        Ok(())
    }

    // ── Membership ────────────────────────────────────────────────────────────

    /// Add `voter` to the registry.
    ///
    /// Rejected with `RegistrationClosed` while the gate is closed, then with
    /// `AlreadyRegistered` for a voter already present.
    pub fn register_voter(env: Env, voter: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;

        if !registry::is_registration_open(&env) {
            log!(&env, "register_voter rejected: registration closed", voter);
            return Err(ContractError::RegistrationClosed);
        }
        if registry::is_registered(&env, &voter) {
            log!(&env, "register_voter rejected: already registered", voter);
            return Err(ContractError::AlreadyRegistered);
        }

        registry::add_voter(&env, &voter);
        events::publish_voter_registered(&env, &voter);

        Ok(())
    }

    /// Remove `voter` from the registry, whether or not registration is open.
    pub fn unregister_voter(env: Env, voter: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;

        if !registry::is_registered(&env, &voter) {
            log!(&env, "unregister_voter rejected: not registered", voter);
            return Err(ContractError::NotRegistered);
        }

        registry::remove_voter(&env, &voter);
        events::publish_voter_unregistered(&env, &voter);

        Ok(())
    }

    // ── Registration gate ─────────────────────────────────────────────────────

    /// Stop accepting new registrations. Idempotent; owner only.
    pub fn close_registration(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::set_gate(&env, &caller, false)
    }

    /// Resume accepting new registrations. Idempotent; owner only.
    pub fn open_registration(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::set_gate(&env, &caller, true)
    }

    // ── View functions ────────────────────────────────────────────────────────

    pub fn is_registered(env: Env, voter: Address) -> bool {
        registry::is_registered(&env, &voter)
    }

    pub fn is_registration_open(env: Env) -> bool {
        registry::is_registration_open(&env)
    }

    /// Number of voters currently registered.
    pub fn voter_count(env: Env) -> u32 {
        registry::voter_count(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        registry::owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        registry::is_initialized(&env)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn set_gate(env: &Env, caller: &Address, open: bool) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_owner(env, caller)?;

        registry::set_registration_open(env, open);
        events::publish_registration_toggled(env, caller, open);

        Ok(())
    }

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !registry::is_initialized(env) {
            log!(env, "registry call rejected: not initialized");
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let Some(owner) = registry::owner(env) else {
            log!(env, "registration gate change rejected: not initialized");
            return Err(ContractError::NotInitialized);
        };
        if *caller != owner {
            log!(env, "registration gate change rejected: not owner", caller.clone());
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
