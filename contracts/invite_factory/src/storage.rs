use soroban_sdk::{Address, BytesN, Env, contracttype};

// Entries live ~30 days past their last touch and are bumped to ~120 days on
// every read or write. The instance entry follows the same schedule.
pub const BUMP_THRESHOLD: u32 = 518_400;
pub const BUMP_AMOUNT: u32 = 2_073_600;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    // Factory keys
    FactoryAdmin,
    CollectionWasm,
    PaymentToken,
    CollectionCount,
    CollectionAddress(u32),
    CollectionRecord(u32),

    // Collection keys
    Collection,
    TotalSupply,
    Invite(BytesN<32>),
    InviteCid(BytesN<32>),
    Minted(Address, BytesN<32>),
    Owner(u32),
    Balance(Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
}

pub fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
}
