//! # State Space Explorer
//!
//! Executes voting action sequences against the deployed contracts and
//! verifies state and transition invariants after every step.
//!
//! ## Reference model
//!
//! Alongside the contracts the explorer drives a small in-memory model of the
//! voting rules. Before each action the model predicts the outcome (success or
//! the exact contract error code); any disagreement with what the contracts
//! return is reported as a violation. The model only advances on actions the
//! contracts accepted, so one divergence does not cascade.
//!
//! ## Complexity
//!
//! Each step snapshots every issued ballot id for every tracked user, so a run
//! is O(S × B × U) contract reads for S steps, B issued ballots and U users.
//! Keep `max_steps` and the user pool small.

extern crate std;

use soroban_sdk::Address;
use std::string::String;
use std::vec::Vec;

use ballot_store::ContractError as BallotError;
use common::MAX_BALLOT_OPTIONS;
use vote_ledger::ContractError as LedgerError;
use voter_registry::ContractError as RegistryError;

use super::generators::VotingAction;
use super::invariants::{InvariantSet, TransitionInvariantSet};
use super::{ActionOutcome, TestRunSummary, VotingSnapshot, VotingTestHarness};

// ── Explorer Configuration ───────────────────────────────────────────────────

/// Configuration for state-space exploration.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Maximum number of actions to execute in a single exploration run.
    pub max_steps: usize,
    /// Whether to halt on the first invariant violation (fail-fast).
    pub fail_fast: bool,
    /// Whether to record snapshots for later analysis.
    pub record_snapshots: bool,
    /// Whether to compare every outcome against the reference model.
    pub check_model: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_steps: 100,
            fail_fast: true,
            record_snapshots: false,
            check_model: true,
        }
    }
}

// ── Exploration Result ───────────────────────────────────────────────────────

/// Full result of an exploration run.
#[derive(Debug)]
pub struct ExplorationResult {
    pub summary: TestRunSummary,
    pub snapshots: Vec<VotingSnapshot>,
    pub action_log: Vec<(VotingAction, ActionOutcome)>,
}

impl ExplorationResult {
    pub fn passed(&self) -> bool {
        self.summary.passed()
    }

    /// Outcomes of every logged `cast_vote` action.
    pub fn cast_outcomes(&self) -> impl Iterator<Item = &ActionOutcome> {
        self.action_log
            .iter()
            .filter(|(a, _)| matches!(a, VotingAction::CastVote { .. }))
            .map(|(_, o)| o)
    }
}

// ── Reference Model ──────────────────────────────────────────────────────────

/// Plain-Rust model of the voting rules.
#[derive(Debug, Clone)]
pub struct ReferenceModel {
    owner: Address,
    registration_open: bool,
    registered: Vec<Address>,
    last_ballot_id: u64,
    /// `(id, option_count, creator)` for open ballots.
    ballots: Vec<(u64, u32, Address)>,
    /// `(ballot_id, voter)` pairs that have voted.
    votes: Vec<(u64, Address)>,
}

/// An action with user indices resolved to addresses.
#[derive(Debug, Clone)]
enum Resolved {
    Register(Address),
    Unregister(Address),
    SetGate { caller: Address, open: bool },
    Create { creator: Address, option_count: u32 },
    Close { ballot_id: u64, caller: Address },
    Cast { ballot_id: u64, voter: Address, option_index: u32 },
}

impl ReferenceModel {
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            registration_open: true,
            registered: Vec::new(),
            last_ballot_id: 0,
            ballots: Vec::new(),
            votes: Vec::new(),
        }
    }

    pub fn last_ballot_id(&self) -> u64 {
        self.last_ballot_id
    }

    fn is_registered(&self, voter: &Address) -> bool {
        self.registered.contains(voter)
    }

    fn ballot(&self, id: u64) -> Option<&(u64, u32, Address)> {
        self.ballots.iter().find(|(b, _, _)| *b == id)
    }

    /// The outcome the contracts should produce: `Ok(())` or an error code.
    fn predict(&self, action: &Resolved) -> Result<(), u32> {
        match action {
            Resolved::Register(voter) => {
                if !self.registration_open {
                    Err(RegistryError::RegistrationClosed as u32)
                } else if self.is_registered(voter) {
                    Err(RegistryError::AlreadyRegistered as u32)
                } else {
                    Ok(())
                }
            }
            Resolved::Unregister(voter) => {
                if self.is_registered(voter) {
                    Ok(())
                } else {
                    Err(RegistryError::NotRegistered as u32)
                }
            }
            Resolved::SetGate { caller, .. } => {
                if *caller == self.owner {
                    Ok(())
                } else {
                    Err(RegistryError::Unauthorized as u32)
                }
            }
            Resolved::Create { option_count, .. } => {
                if *option_count > MAX_BALLOT_OPTIONS {
                    Err(BallotError::TooManyOptions as u32)
                } else if *option_count == 0 {
                    Err(BallotError::InvalidOptionCount as u32)
                } else {
                    Ok(())
                }
            }
            Resolved::Close { ballot_id, caller } => match self.ballot(*ballot_id) {
                None => Err(BallotError::BallotNotFound as u32),
                Some((_, _, creator)) if creator != caller => Err(BallotError::Unauthorized as u32),
                Some(_) => Ok(()),
            },
            Resolved::Cast {
                ballot_id,
                voter,
                option_index,
            } => {
                let (_, option_count, _) = self
                    .ballot(*ballot_id)
                    .ok_or(LedgerError::BallotNotFound as u32)?;
                if !self.is_registered(voter) {
                    Err(LedgerError::VoterNotRegistered as u32)
                } else if option_index >= option_count {
                    Err(LedgerError::InvalidOption as u32)
                } else if self.votes.iter().any(|(b, v)| b == ballot_id && v == voter) {
                    Err(LedgerError::AlreadyVoted as u32)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Advance the model past an accepted action.
    fn apply(&mut self, action: &Resolved) {
        match action {
            Resolved::Register(voter) => self.registered.push(voter.clone()),
            Resolved::Unregister(voter) => self.registered.retain(|v| v != voter),
            Resolved::SetGate { open, .. } => self.registration_open = *open,
            Resolved::Create {
                creator,
                option_count,
            } => {
                self.last_ballot_id += 1;
                self.ballots
                    .push((self.last_ballot_id, *option_count, creator.clone()));
            }
            Resolved::Close { ballot_id, .. } => self.ballots.retain(|(b, _, _)| b != ballot_id),
            Resolved::Cast {
                ballot_id, voter, ..
            } => self.votes.push((*ballot_id, voter.clone())),
        }
    }
}

// ── State Space Explorer ─────────────────────────────────────────────────────

/// Executes action sequences against the voting contracts, checking
/// invariants after every transition.
pub struct StateExplorer<'a> {
    harness: &'a VotingTestHarness<'a>,
    invariants: InvariantSet,
    transitions: TransitionInvariantSet,
    config: ExplorerConfig,
    users: Vec<Address>,
    model: ReferenceModel,
}

impl<'a> StateExplorer<'a> {
    /// Create an explorer for the given harness and user pool.
    ///
    /// The harness must be freshly deployed: the reference model starts from
    /// an empty ballot store and an open, empty registry.
    pub fn new(
        harness: &'a VotingTestHarness<'a>,
        invariants: InvariantSet,
        transitions: TransitionInvariantSet,
        config: ExplorerConfig,
        users: Vec<Address>,
    ) -> Self {
        let model = ReferenceModel::new(harness.owner.clone());
        Self {
            harness,
            invariants,
            transitions,
            config,
            users,
            model,
        }
    }

    /// Create an explorer with default configuration and built-in invariants.
    pub fn with_defaults(harness: &'a VotingTestHarness<'a>, users: Vec<Address>) -> Self {
        Self::new(
            harness,
            InvariantSet::voting_defaults(),
            TransitionInvariantSet::voting_defaults(),
            ExplorerConfig::default(),
            users,
        )
    }

    pub fn model(&self) -> &ReferenceModel {
        &self.model
    }

    /// Execute a sequence of actions, checking invariants after each.
    pub fn explore(&mut self, actions: &[VotingAction]) -> ExplorationResult {
        let mut summary = TestRunSummary::new();
        let mut snapshots = Vec::new();
        let mut action_log = Vec::new();

        let mut before = self.harness.snapshot(&self.users);
        if self.config.record_snapshots {
            snapshots.push(before.clone());
        }

        let steps = actions.len().min(self.config.max_steps);

        for action in actions.iter().take(steps) {
            let resolved = self.resolve(action);
            let predicted = self.model.predict(&resolved);
            let outcome = self.execute(&resolved);

            summary
                .entry_points_hit
                .insert(action.entry_point().into());
            summary.actions_executed += 1;
            summary.transitions_observed += 1;
            match outcome {
                ActionOutcome::Ok => summary.accepted += 1,
                ActionOutcome::ExpectedError(_) => summary.rejected += 1,
                ActionOutcome::UnexpectedError(_) => {}
            }

            let mut violations = Vec::new();

            if self.config.check_model {
                let agrees = matches!(
                    (&predicted, &outcome),
                    (Ok(()), ActionOutcome::Ok)
                ) || matches!(
                    (&predicted, &outcome),
                    (Err(code), ActionOutcome::ExpectedError(got)) if code == got
                );
                if !agrees {
                    violations.push((
                        String::from("reference model"),
                        std::format!("expected {:?}, contracts returned {:?}", predicted, outcome),
                    ));
                }
            }
            if outcome == ActionOutcome::Ok {
                self.model.apply(&resolved);
            }
            if self.config.check_model
                && self.harness.ballots.last_ballot_id() != self.model.last_ballot_id()
            {
                violations.push((
                    String::from("reference model"),
                    std::format!(
                        "ballot counter {} but model issued {}",
                        self.harness.ballots.last_ballot_id(),
                        self.model.last_ballot_id()
                    ),
                ));
            }

            action_log.push((action.clone(), outcome));

            let after = self.harness.snapshot(&self.users);
            violations.extend(self.invariants.check_all(&after));
            violations.extend(self.transitions.check_all(&before, &after));
            summary.invariant_checks += 1;

            let failed = !violations.is_empty();
            for (name, msg) in violations {
                summary.invariant_violations.push(std::format!(
                    "After action #{} ({:?}): [{}] {}",
                    summary.actions_executed,
                    action,
                    name,
                    msg
                ));
            }

            if self.config.record_snapshots {
                snapshots.push(after.clone());
            }
            if failed && self.config.fail_fast {
                break;
            }
            before = after;
        }

        ExplorationResult {
            summary,
            snapshots,
            action_log,
        }
    }

    fn user(&self, index: usize) -> Address {
        self.users[index % self.users.len()].clone()
    }

    fn resolve(&self, action: &VotingAction) -> Resolved {
        match action {
            VotingAction::RegisterVoter { user_index } => Resolved::Register(self.user(*user_index)),
            VotingAction::UnregisterVoter { user_index } => {
                Resolved::Unregister(self.user(*user_index))
            }
            VotingAction::OpenRegistration {
                as_owner,
                user_index,
            } => Resolved::SetGate {
                caller: self.gate_caller(*as_owner, *user_index),
                open: true,
            },
            VotingAction::CloseRegistration {
                as_owner,
                user_index,
            } => Resolved::SetGate {
                caller: self.gate_caller(*as_owner, *user_index),
                open: false,
            },
            VotingAction::CreateBallot {
                creator_index,
                option_count,
            } => Resolved::Create {
                creator: self.user(*creator_index),
                option_count: *option_count,
            },
            VotingAction::CloseBallot {
                ballot_id,
                caller_index,
            } => Resolved::Close {
                ballot_id: *ballot_id,
                caller: self.user(*caller_index),
            },
            VotingAction::CastVote {
                ballot_id,
                user_index,
                option_index,
            } => Resolved::Cast {
                ballot_id: *ballot_id,
                voter: self.user(*user_index),
                option_index: *option_index,
            },
        }
    }

    fn gate_caller(&self, as_owner: bool, user_index: usize) -> Address {
        if as_owner {
            self.harness.owner.clone()
        } else {
            self.user(user_index)
        }
    }

    fn execute(&self, action: &Resolved) -> ActionOutcome {
        let h = self.harness;
        match action {
            Resolved::Register(voter) => {
                classify(h.registry.try_register_voter(voter), |e: RegistryError| e as u32)
            }
            Resolved::Unregister(voter) => {
                classify(h.registry.try_unregister_voter(voter), |e: RegistryError| e as u32)
            }
            Resolved::SetGate { caller, open: true } => {
                classify(h.registry.try_open_registration(caller), |e: RegistryError| e as u32)
            }
            Resolved::SetGate {
                caller,
                open: false,
            } => classify(h.registry.try_close_registration(caller), |e: RegistryError| e as u32),
            Resolved::Create {
                creator,
                option_count,
            } => classify(
                h.ballots.try_create_ballot(
                    &h.title("Explored"),
                    &h.option_list(*option_count),
                    creator,
                ),
                |e: BallotError| e as u32,
            ),
            Resolved::Close { ballot_id, caller } => {
                classify(h.ballots.try_close_ballot(ballot_id, caller), |e: BallotError| e as u32)
            }
            Resolved::Cast {
                ballot_id,
                voter,
                option_index,
            } => classify(
                h.ledger.try_cast_vote(ballot_id, voter, option_index),
                |e: LedgerError| e as u32,
            ),
        }
    }
}

/// Map a `try_*` client result onto an `ActionOutcome`.
fn classify<T, E, I: core::fmt::Debug>(
    result: Result<T, Result<E, I>>,
    code: impl FnOnce(E) -> u32,
) -> ActionOutcome {
    match result {
        Ok(_) => ActionOutcome::Ok,
        Err(Ok(e)) => ActionOutcome::ExpectedError(code(e)),
        Err(Err(e)) => ActionOutcome::UnexpectedError(std::format!("{:?}", e)),
    }
}

/// Every entry point an explorer action can reach, for coverage calculation.
pub const VOTING_ENTRY_POINTS: &[&str] = &[
    "register_voter",
    "unregister_voter",
    "open_registration",
    "close_registration",
    "create_ballot",
    "close_ballot",
    "cast_vote",
];
