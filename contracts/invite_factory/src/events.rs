use soroban_sdk::{Address, BytesN, Env, String, contractevent};

use crate::types::InviteConfig;

#[contractevent]
#[derive(Clone, Debug)]
pub struct Created {
    pub owner: Address,
    pub collection: Address,
    pub id: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct InviteSet {
    pub key: BytesN<32>,
    pub cid: String,
    pub admission: BytesN<32>,
    pub start: u64,
    pub price: i128,
    pub limit: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Mint {
    pub payer: Address,
    pub to: Address,
    pub first_id: u32,
    pub quantity: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Withdraw {
    pub to: Address,
    pub amount: i128,
}

pub fn emit_collection_created(
    env: &Env,
    owner: Address,
    collection_address: Address,
    collection_id: u32,
) {
    Created {
        owner,
        collection: collection_address,
        id: collection_id,
    }
    .publish(env);
}

pub fn emit_invite_set(env: &Env, key: BytesN<32>, cid: String, config: &InviteConfig) {
    InviteSet {
        key,
        cid,
        admission: config.admission.clone(),
        start: config.start,
        price: config.price,
        limit: config.limit,
    }
    .publish(env);
}

pub fn emit_mint(env: &Env, payer: Address, to: Address, first_id: u32, quantity: u32) {
    Mint {
        payer,
        to,
        first_id,
        quantity,
    }
    .publish(env);
}

pub fn emit_withdraw(env: &Env, to: Address, amount: i128) {
    Withdraw { to, amount }.publish(env);
}
