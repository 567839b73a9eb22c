use soroban_sdk::{Address, BytesN, Env, String, Vec, contracttype};

/// Parameters fixed when a collection is cloned.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CloneConfig {
    pub placeholder_uri: String,
    pub supply_cap: u32,
    pub base_uri: String,
}

/// Immutable state of one collection, written once by `init`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CollectionState {
    pub owner: Address,
    pub name: String,
    pub symbol: String,
    pub placeholder_uri: String,
    pub base_uri: String,
    pub supply_cap: u32,
    pub payment_token: Address,
}

/// Admission rule stored under an invite key.
///
/// `admission` is either [`crate::merkle::ALL`] or a merkle root over the
/// allowlist. `limit` is the cumulative quantity one claimant may mint.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct InviteConfig {
    pub admission: BytesN<32>,
    pub start: u64,
    pub price: i128, // in payment token units, never negative
    pub limit: u32,
}

impl InviteConfig {
    /// What an unset key reads as. `limit = 0` blocks every mint.
    pub fn zero(env: &Env) -> Self {
        InviteConfig {
            admission: BytesN::from_array(env, &[0u8; 32]),
            start: 0,
            price: 0,
            limit: 0,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MintRequest {
    pub key: BytesN<32>,
    pub proof: Vec<BytesN<32>>,
    /// Credit the items to this account instead of the caller.
    pub account: Option<Address>,
}

/// Factory bookkeeping for a deployed collection.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CollectionRecord {
    pub address: Address,
    pub owner: Address,
    pub name: String,
    pub symbol: String,
    pub supply_cap: u32,
    pub created_at: u64,
}
