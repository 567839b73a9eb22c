use crate::collection::InviteCollectionClient;
use crate::error::ContractError;
use crate::events;
use crate::storage::{DataKey, extend_instance};
use crate::types::{CloneConfig, CollectionRecord};
use soroban_sdk::{Address, BytesN, Env, String, contract, contractimpl, panic_with_error};

#[contract]
pub struct CollectionFactory;

#[contractimpl]
impl CollectionFactory {
    /// `collection_wasm` is the uploaded hash every clone is deployed from.
    /// `payment_token` is the asset clones collect mint payments in.
    pub fn initialize(
        env: Env,
        admin: Address,
        collection_wasm: BytesN<32>,
        payment_token: Address,
    ) {
        if env.storage().instance().has(&DataKey::FactoryAdmin) {
            panic_with_error!(&env, ContractError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::FactoryAdmin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::CollectionWasm, &collection_wasm);
        env.storage()
            .instance()
            .set(&DataKey::PaymentToken, &payment_token);
        env.storage()
            .instance()
            .set(&DataKey::CollectionCount, &0u32);
        extend_instance(&env);
    }

    /// Deploys a fresh collection instance owned by `owner`.
    ///
    /// Every clone is its own contract, so its invites, counters and ledger
    /// live in storage no other collection can reach.
    pub fn clone_collection(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        config: CloneConfig,
    ) -> Result<Address, ContractError> {
        owner.require_auth();

        let wasm_hash: BytesN<32> = env
            .storage()
            .instance()
            .get(&DataKey::CollectionWasm)
            .ok_or(ContractError::NotInitialized)?;
        let payment_token: Address = env
            .storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(ContractError::NotInitialized)?;
        let collection_id = Self::collection_count(env.clone());
        let next_count = collection_id
            .checked_add(1)
            .ok_or(ContractError::ArithmeticOverflow)?;

        let collection_address = env
            .deployer()
            .with_current_contract(salt_for(&env, collection_id))
            .deploy_v2(wasm_hash, ());

        InviteCollectionClient::new(&env, &collection_address).init(
            &owner,
            &name,
            &symbol,
            &config,
            &payment_token,
        );

        let record = CollectionRecord {
            address: collection_address.clone(),
            owner: owner.clone(),
            name,
            symbol,
            supply_cap: config.supply_cap,
            created_at: env.ledger().timestamp(),
        };

        env.storage().instance().set(
            &DataKey::CollectionAddress(collection_id),
            &collection_address,
        );
        env.storage()
            .instance()
            .set(&DataKey::CollectionRecord(collection_id), &record);
        env.storage()
            .instance()
            .set(&DataKey::CollectionCount, &next_count);
        extend_instance(&env);

        events::emit_collection_created(&env, owner, collection_address.clone(), collection_id);

        Ok(collection_address)
    }

    pub fn collection_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::CollectionCount)
            .unwrap_or(0)
    }

    pub fn collection_address(env: Env, id: u32) -> Option<Address> {
        env.storage()
            .instance()
            .get(&DataKey::CollectionAddress(id))
    }

    pub fn collection_record(env: Env, id: u32) -> Option<CollectionRecord> {
        env.storage().instance().get(&DataKey::CollectionRecord(id))
    }

    pub fn admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&DataKey::FactoryAdmin)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        let admin = Self::admin(env.clone())?;
        admin.require_auth();
        env.storage()
            .instance()
            .set(&DataKey::FactoryAdmin, &new_admin);
        Ok(())
    }

    /// Points future clones at new collection code. Existing clones keep
    /// running the code they were deployed with.
    pub fn set_collection_wasm(env: Env, collection_wasm: BytesN<32>) -> Result<(), ContractError> {
        let admin = Self::admin(env.clone())?;
        admin.require_auth();
        env.storage()
            .instance()
            .set(&DataKey::CollectionWasm, &collection_wasm);
        Ok(())
    }
}

fn salt_for(env: &Env, collection_id: u32) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&collection_id.to_be_bytes());
    BytesN::from_array(env, &salt)
}
