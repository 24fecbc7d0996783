//! Shared types and collaborator interfaces for the voting contract suite.
//!
//! This crate provides:
//! - [`Ballot`]: the ballot record exchanged between the ballot store and
//!   the vote ledger, plus the option-count bounds every ballot honours.
//! - [`interfaces`]: `#[contractclient]` traits describing the read-only
//!   surface the vote ledger consumes from the registry and the ballot store.
//! - [`ttl`]: storage time-to-live constants and helpers.
//!
//! The crate is a plain library: it exports no contract functions of its own,
//! so linking it into several contracts never produces duplicate WASM exports.
//!
//! ## Error codes
//!
//! Each contract defines its own `ContractError`, but the numeric codes are
//! allocated from disjoint ranges so a code identifies its meaning across
//! contract boundaries:
//!
//! | Range | Owner          | Codes                                              |
//! |-------|----------------|----------------------------------------------------|
//! | 1–9   | shared         | 1 NotInitialized, 2 AlreadyInitialized, 3 Unauthorized |
//! | 10–19 | voter registry | 10 RegistrationClosed, 11 AlreadyRegistered, 12 NotRegistered |
//! | 20–29 | ballot store   | 20 BallotNotFound, 21 TooManyOptions, 22 InvalidOptionCount, 23 BallotIdOverflow |
//! | 30–39 | vote ledger    | 30 VoterNotRegistered, 31 InvalidOption, 32 AlreadyVoted |
//!
//! The vote ledger reports a missing ballot with the ballot store's code 20.

#![no_std]

pub mod ballot;
pub mod interfaces;
pub mod ttl;

pub use ballot::*;
pub use interfaces::*;
