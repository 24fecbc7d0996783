use soroban_sdk::{Env, IntoVal, Val};

// ~30 days / ~60 days at 5s per ledger
pub const PERSISTENT_TTL_THRESHOLD: u32 = 518_400;
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 1_036_800;

// ~60 days / ~120 days
pub const INSTANCE_TTL_THRESHOLD: u32 = 1_036_800;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 2_073_600;

/// Extend the TTL of a persistent entry that was just written.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

/// Extend the TTL of the calling contract's instance storage.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}
