use soroban_sdk::{Address, Env, Vec};

use crate::error::ContractError;
use crate::storage::{DataKey, extend_persistent};

/// Append-only ownership table. Ids start at 1 and are never reused.
pub struct ItemLedger;

impl ItemLedger {
    pub fn total_supply(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    /// Assigns the next `count` ids to `owner` and returns them in order.
    ///
    /// Only the minting engine calls this, after the supply cap check has
    /// passed, so `total_supply + count` cannot overflow.
    pub fn assign_next(env: &Env, owner: &Address, count: u32) -> Vec<u32> {
        let total_supply = Self::total_supply(env);
        let first = total_supply + 1;

        let mut ids = Vec::new(env);
        for id in first..first + count {
            let key = DataKey::Owner(id);
            env.storage().persistent().set(&key, owner);
            extend_persistent(env, &key);
            ids.push_back(id);
        }

        let balance_key = DataKey::Balance(owner.clone());
        let balance = Self::balance_of(env, owner);
        env.storage()
            .persistent()
            .set(&balance_key, &(balance + count));
        extend_persistent(env, &balance_key);

        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(total_supply + count));

        ids
    }

    pub fn owner_of(env: &Env, token_id: u32) -> Result<Address, ContractError> {
        let key = DataKey::Owner(token_id);
        let owner = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::TokenNotFound)?;
        extend_persistent(env, &key);
        Ok(owner)
    }

    pub fn balance_of(env: &Env, owner: &Address) -> u32 {
        let key = DataKey::Balance(owner.clone());
        match env.storage().persistent().get(&key) {
            Some(balance) => {
                extend_persistent(env, &key);
                balance
            }
            None => 0,
        }
    }
}
