use soroban_sdk::{Address, BytesN, Env, Vec, token};

use crate::error::ContractError;
use crate::events;
use crate::ledger::ItemLedger;
use crate::merkle::MerkleVerifier;
use crate::registry::InviteRegistry;
use crate::storage::{DataKey, extend_persistent};
use crate::types::{CollectionState, MintRequest};

/// Everything `apply` needs, produced only once every check has passed.
struct MintPlan {
    payer: Address,
    claimant: Address,
    key: BytesN<32>,
    quantity: u32,
    payment: i128,
    minted_after: u32,
}

/// Admission and accounting for a single mint call.
///
/// `check` reads state and never writes; `apply` writes and never fails on
/// its own, so a rejected request leaves counters, ledger and balances
/// exactly as they were.
pub struct MintingEngine;

impl MintingEngine {
    pub fn mint(
        env: &Env,
        collection: &CollectionState,
        caller: &Address,
        request: &MintRequest,
        quantity: u32,
        payment: i128,
    ) -> Result<Vec<u32>, ContractError> {
        let plan = Self::check(env, collection, caller, request, quantity, payment)?;
        Ok(Self::apply(env, collection, plan))
    }

    /// Cumulative quantity `claimant` has minted under `key`.
    pub fn minted(env: &Env, claimant: &Address, key: &BytesN<32>) -> u32 {
        let minted_key = DataKey::Minted(claimant.clone(), key.clone());
        match env.storage().persistent().get(&minted_key) {
            Some(minted) => {
                extend_persistent(env, &minted_key);
                minted
            }
            None => 0,
        }
    }

    fn check(
        env: &Env,
        collection: &CollectionState,
        caller: &Address,
        request: &MintRequest,
        quantity: u32,
        payment: i128,
    ) -> Result<MintPlan, ContractError> {
        let claimant = request.account.clone().unwrap_or_else(|| caller.clone());

        if quantity == 0 {
            return Err(ContractError::InvalidQuantity);
        }

        let invite = InviteRegistry::get(env, &request.key);
        if env.ledger().timestamp() < invite.start {
            return Err(ContractError::InviteNotStarted);
        }

        if !MerkleVerifier::verify(env, &invite.admission, &claimant, &request.proof) {
            return Err(ContractError::InvalidProof);
        }

        let already = Self::minted(env, &claimant, &request.key);
        let minted_after = match already.checked_add(quantity) {
            Some(total) if total <= invite.limit => total,
            _ => return Err(ContractError::LimitExceeded),
        };

        match ItemLedger::total_supply(env).checked_add(quantity) {
            Some(total) if total <= collection.supply_cap => {}
            _ => return Err(ContractError::SoldOut),
        }

        let required = invite
            .price
            .checked_mul(i128::from(quantity))
            .ok_or(ContractError::ArithmeticOverflow)?;
        if payment != required {
            return Err(ContractError::WrongAmount);
        }

        Ok(MintPlan {
            payer: caller.clone(),
            claimant,
            key: request.key.clone(),
            quantity,
            payment,
            minted_after,
        })
    }

    fn apply(env: &Env, collection: &CollectionState, plan: MintPlan) -> Vec<u32> {
        if plan.payment > 0 {
            token::Client::new(env, &collection.payment_token).transfer(
                &plan.payer,
                &env.current_contract_address(),
                &plan.payment,
            );
        }

        let ids = ItemLedger::assign_next(env, &plan.claimant, plan.quantity);

        let minted_key = DataKey::Minted(plan.claimant.clone(), plan.key);
        env.storage().persistent().set(&minted_key, &plan.minted_after);
        extend_persistent(env, &minted_key);

        // quantity > 0, so the first id is always present
        let first_id = ids.first().unwrap_or_default();
        events::emit_mint(env, plan.payer, plan.claimant, first_id, plan.quantity);

        ids
    }
}
