use soroban_sdk::{BytesN, Env, String};

use crate::error::ContractError;
use crate::events;
use crate::storage::{DataKey, extend_persistent};
use crate::types::InviteConfig;

/// Invite table of the current collection instance. Callers are expected to
/// have checked owner authorization before `set`.
pub struct InviteRegistry;

impl InviteRegistry {
    /// Replaces whatever was stored under `key`, content id included. There
    /// is no delete; an invite is disabled by writing `limit = 0` or a
    /// far-future `start`.
    ///
    /// `cid` is opaque to the contract. It names the off-chain document
    /// describing the invite (typically the allowlist the root commits to).
    pub fn set(
        env: &Env,
        key: &BytesN<32>,
        cid: &String,
        config: &InviteConfig,
    ) -> Result<(), ContractError> {
        if config.price < 0 {
            return Err(ContractError::InvalidPrice);
        }

        let config_key = DataKey::Invite(key.clone());
        env.storage().persistent().set(&config_key, config);
        extend_persistent(env, &config_key);

        let cid_key = DataKey::InviteCid(key.clone());
        env.storage().persistent().set(&cid_key, cid);
        extend_persistent(env, &cid_key);

        events::emit_invite_set(env, key.clone(), cid.clone(), config);
        Ok(())
    }

    pub fn get(env: &Env, key: &BytesN<32>) -> InviteConfig {
        let config_key = DataKey::Invite(key.clone());
        match env.storage().persistent().get(&config_key) {
            Some(config) => {
                extend_persistent(env, &config_key);
                config
            }
            None => InviteConfig::zero(env),
        }
    }

    pub fn cid(env: &Env, key: &BytesN<32>) -> Option<String> {
        let cid_key = DataKey::InviteCid(key.clone());
        let cid = env.storage().persistent().get(&cid_key);
        if cid.is_some() {
            extend_persistent(env, &cid_key);
        }
        cid
    }
}
