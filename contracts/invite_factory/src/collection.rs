use crate::engine::MintingEngine;
use crate::error::ContractError;
use crate::events;
use crate::ledger::ItemLedger;
use crate::registry::InviteRegistry;
use crate::storage::{DataKey, extend_instance};
use crate::types::{CloneConfig, CollectionState, InviteConfig, MintRequest};
use soroban_sdk::{
    Address, BytesN, Env, String, Vec, contract, contractimpl, panic_with_error, token,
};

#[contract]
pub struct InviteCollection;

#[contractimpl]
impl InviteCollection {
    /// One-shot setup, called by the factory in the same invocation that
    /// deploys the instance.
    pub fn init(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        config: CloneConfig,
        payment_token: Address,
    ) {
        if env.storage().instance().has(&DataKey::Collection) {
            panic_with_error!(&env, ContractError::AlreadyInitialized);
        }

        let state = CollectionState {
            owner,
            name,
            symbol,
            placeholder_uri: config.placeholder_uri,
            base_uri: config.base_uri,
            supply_cap: config.supply_cap,
            payment_token,
        };
        env.storage().instance().set(&DataKey::Collection, &state);
        env.storage().instance().set(&DataKey::TotalSupply, &0u32);
        extend_instance(&env);
    }

    /// Publishes or replaces the invite under `key`. Owner only.
    pub fn set_invite(
        env: Env,
        key: BytesN<32>,
        cid: String,
        config: InviteConfig,
    ) -> Result<(), ContractError> {
        let state = load_state(&env)?;
        state.owner.require_auth();

        InviteRegistry::set(&env, &key, &cid, &config)?;
        extend_instance(&env);
        Ok(())
    }

    pub fn invite(env: Env, key: BytesN<32>) -> InviteConfig {
        InviteRegistry::get(&env, &key)
    }

    pub fn invite_cid(env: Env, key: BytesN<32>) -> Option<String> {
        InviteRegistry::cid(&env, &key)
    }

    /// Mints `quantity` items under the invite named in `request`.
    ///
    /// `payment` is pulled from `caller` in the collection's payment token and
    /// must equal `price * quantity` exactly. Items go to `request.account`
    /// when set, otherwise to `caller`.
    pub fn mint(
        env: Env,
        caller: Address,
        request: MintRequest,
        quantity: u32,
        payment: i128,
    ) -> Result<Vec<u32>, ContractError> {
        caller.require_auth();
        let state = load_state(&env)?;

        let ids = MintingEngine::mint(&env, &state, &caller, &request, quantity, payment)?;
        extend_instance(&env);
        Ok(ids)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, ContractError> {
        ItemLedger::owner_of(&env, token_id)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        ItemLedger::balance_of(&env, &owner)
    }

    pub fn minted(env: Env, claimant: Address, key: BytesN<32>) -> u32 {
        MintingEngine::minted(&env, &claimant, &key)
    }

    pub fn total_supply(env: Env) -> u32 {
        ItemLedger::total_supply(&env)
    }

    pub fn collection(env: Env) -> Result<CollectionState, ContractError> {
        load_state(&env)
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        Ok(load_state(&env)?.owner)
    }

    pub fn name(env: Env) -> Result<String, ContractError> {
        Ok(load_state(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, ContractError> {
        Ok(load_state(&env)?.symbol)
    }

    pub fn supply_cap(env: Env) -> Result<u32, ContractError> {
        Ok(load_state(&env)?.supply_cap)
    }

    /// Sends every collected payment to `to`. Owner only.
    pub fn withdraw(env: Env, to: Address) -> Result<i128, ContractError> {
        let state = load_state(&env)?;
        state.owner.require_auth();

        let client = token::Client::new(&env, &state.payment_token);
        let here = env.current_contract_address();
        let amount = client.balance(&here);
        if amount <= 0 {
            return Err(ContractError::NothingToWithdraw);
        }

        client.transfer(&here, &to, &amount);
        events::emit_withdraw(&env, to, amount);
        extend_instance(&env);

        Ok(amount)
    }
}

fn load_state(env: &Env) -> Result<CollectionState, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Collection)
        .ok_or(ContractError::NotInitialized)
}
