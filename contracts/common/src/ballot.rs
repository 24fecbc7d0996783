use soroban_sdk::{contracttype, Address, String, Vec};

/// Fewest options a ballot may carry.
pub const MIN_BALLOT_OPTIONS: u32 = 1;
/// Most options a ballot may carry.
pub const MAX_BALLOT_OPTIONS: u32 = 10;

/// A ballot as stored by the ballot store.
///
/// There is no status field: a ballot that can be loaded is open, and
/// closing it removes the record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ballot {
    pub id: u64,
    pub title: String,
    /// Ordered choices; an option's position is its identifier.
    pub options: Vec<String>,
    pub creator: Address,
}

impl Ballot {
    /// Whether `option_index` names one of this ballot's options.
    pub fn has_option(&self, option_index: u32) -> bool {
        option_index < self.options.len()
    }
}

/// Outcome of checking an option list against the ballot bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptionCountCheck {
    Ok,
    Empty,
    TooMany,
}

/// Classify an option count against [`MIN_BALLOT_OPTIONS`] and
/// [`MAX_BALLOT_OPTIONS`].
pub fn check_option_count(count: u32) -> OptionCountCheck {
    if count > MAX_BALLOT_OPTIONS {
        OptionCountCheck::TooMany
    } else if count < MIN_BALLOT_OPTIONS {
        OptionCountCheck::Empty
    } else {
        OptionCountCheck::Ok
    }
}
