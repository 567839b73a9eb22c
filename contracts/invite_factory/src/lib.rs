#![no_std]
use soroban_sdk::contractmeta;

contractmeta!(key = "Description", val = "Invite-gated collection factory");

pub mod collection;
pub mod engine;
pub mod error;
pub mod events;
pub mod factory;
pub mod ledger;
pub mod merkle;
pub mod registry;
pub mod storage;
pub mod types;

pub use crate::collection::InviteCollection;
pub use crate::factory::CollectionFactory;
