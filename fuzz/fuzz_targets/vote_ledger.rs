#![no_main]

use std::collections::HashMap;

use arbitrary::Arbitrary;
use ballot_store::{BallotStoreContract, BallotStoreContractClient};
use common::{MAX_BALLOT_OPTIONS, MIN_BALLOT_OPTIONS};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, String, Vec};
use vote_ledger::{VoteLedgerContract, VoteLedgerContractClient};
use voter_registry::{VoterRegistryContract, VoterRegistryContractClient};

/// Actions covering every mutating entry point of the three contracts.
///
/// Users and ballot ids are small so sequences keep hitting the same state.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Register { user: u8 },
    Unregister { user: u8 },
    SetGate { by_owner: bool, open: bool },
    CreateBallot { creator: u8, options: u8 },
    CloseBallot { ballot: u8, caller: u8 },
    Cast { ballot: u8, user: u8, option: u8 },
}

const USERS: usize = 4;

fuzz_target!(|actions: std::vec::Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let registry_id = env.register(VoterRegistryContract, ());
    let ballots_id = env.register(BallotStoreContract, ());
    let ledger_id = env.register(VoteLedgerContract, (registry_id.clone(), ballots_id.clone()));

    let registry = VoterRegistryContractClient::new(&env, &registry_id);
    let ballots = BallotStoreContractClient::new(&env, &ballots_id);
    let ledger = VoteLedgerContractClient::new(&env, &ledger_id);

    if registry.try_initialize(&owner).is_err() {
        return;
    }

    let users: std::vec::Vec<Address> = (0..USERS).map(|_| Address::generate(&env)).collect();

    // Every vote the ledger has accepted, keyed by (ballot, user index).
    let mut recorded: HashMap<(u64, usize), u32> = HashMap::new();
    let mut last_id = 0u64;

    for action in actions.into_iter().take(64) {
        match action {
            FuzzAction::Register { user } => {
                let _ = registry.try_register_voter(&users[user as usize % USERS]);
            }
            FuzzAction::Unregister { user } => {
                let _ = registry.try_unregister_voter(&users[user as usize % USERS]);
            }
            FuzzAction::SetGate { by_owner, open } => {
                let caller = if by_owner { owner.clone() } else { users[0].clone() };
                let was_open = registry.is_registration_open();
                let ok = if open {
                    registry.try_open_registration(&caller).is_ok()
                } else {
                    registry.try_close_registration(&caller).is_ok()
                };
                assert_eq!(ok, by_owner, "INVARIANT VIOLATION: gate moved by non-owner");
                let expected = if by_owner { open } else { was_open };
                assert_eq!(registry.is_registration_open(), expected);
            }
            FuzzAction::CreateBallot { creator, options } => {
                let count = u32::from(options % 16);
                let mut labels = Vec::new(&env);
                for i in 0..count {
                    labels.push_back(String::from_str(&env, if i % 2 == 0 { "A" } else { "B" }));
                }
                let result = ballots.try_create_ballot(
                    &String::from_str(&env, "Fuzz"),
                    &labels,
                    &users[creator as usize % USERS],
                );
                let valid = (MIN_BALLOT_OPTIONS..=MAX_BALLOT_OPTIONS).contains(&count);
                assert_eq!(result.is_ok(), valid, "INVARIANT VIOLATION: option bound");
                if let Ok(Ok(id)) = result {
                    assert_eq!(id, last_id + 1, "INVARIANT VIOLATION: ballot id not sequential");
                    last_id = id;
                }
            }
            FuzzAction::CloseBallot { ballot, caller } => {
                let id = u64::from(ballot % 8);
                let caller = &users[caller as usize % USERS];
                let creator = ballots.get_ballot(&id).map(|b| b.creator);
                let ok = ballots.try_close_ballot(&id, caller).is_ok();
                assert_eq!(
                    ok,
                    creator.as_ref() == Some(caller),
                    "INVARIANT VIOLATION: close allowed for non-creator"
                );
            }
            FuzzAction::Cast { ballot, user, option } => {
                let id = u64::from(ballot % 8);
                let index = user as usize % USERS;
                let voter = &users[index];
                let option = u32::from(option % 12);

                let eligible = registry.is_registered(voter);
                let in_range = ballots
                    .get_ballot(&id)
                    .map(|b| option < b.options.len())
                    .unwrap_or(false);
                let fresh = !recorded.contains_key(&(id, index));

                let ok = ledger.try_cast_vote(&id, voter, &option).is_ok();
                assert_eq!(
                    ok,
                    eligible && in_range && fresh,
                    "INVARIANT VIOLATION: cast accepted={} eligible={} in_range={} fresh={}",
                    ok,
                    eligible,
                    in_range,
                    fresh
                );
                if ok {
                    recorded.insert((id, index), option);
                }
            }
        }

        // ── Post-action invariant checks ──
        assert_eq!(ballots.last_ballot_id(), last_id, "INVARIANT VIOLATION: counter drifted");
        for ((id, index), option) in &recorded {
            assert_eq!(
                ledger.get_vote(id, &users[*index]),
                Some(*option),
                "INVARIANT VIOLATION: recorded vote changed"
            );
        }
    }
});
