//! Weights for pallet-flash-token.
//!
//! Estimated from the storage accesses of each dispatchable. Regenerate from
//! `benchmarking.rs` with `frame-omni-bencher` once reference hardware is available.

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, RuntimeDbWeight, Weight},
};

/// Weight functions needed for pallet-flash-token.
pub trait WeightInfo {
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn add_admin() -> Weight;
    fn remove_admin() -> Weight;
    fn pause_transfers() -> Weight;
    fn unpause_transfers() -> Weight;
    fn pause_minting() -> Weight;
    fn unpause_minting() -> Weight;
    fn update_burn_rate() -> Weight;
    fn update_fee_rate() -> Weight;
}

/// Reads: `TransfersPaused`, `FeeWallet`, `BurnRate`, `FeeRate`, `TotalSupply`,
/// `Balances` (sender, receiver, fee wallet). Writes: `TotalSupply`, three `Balances`.
fn transfer_weight(db: RuntimeDbWeight) -> Weight {
    Weight::from_parts(30_000_000, 3_593).saturating_add(db.reads_writes(8, 4))
}

/// `transfer` plus one `Allowances` read and write.
fn transfer_from_weight(db: RuntimeDbWeight) -> Weight {
    Weight::from_parts(38_000_000, 6_196).saturating_add(db.reads_writes(9, 5))
}

/// Reads: `Owner`, `Admins`, `MintingPaused`, `TotalSupply`, `Balances`.
/// Writes: `TotalSupply`, `Balances`.
fn mint_weight(db: RuntimeDbWeight) -> Weight {
    Weight::from_parts(20_000_000, 3_593).saturating_add(db.reads_writes(5, 2))
}

fn burn_weight(db: RuntimeDbWeight) -> Weight {
    Weight::from_parts(18_000_000, 3_593).saturating_add(db.reads_writes(2, 2))
}

fn approve_weight(db: RuntimeDbWeight) -> Weight {
    Weight::from_parts(12_000_000, 0).saturating_add(db.writes(1))
}

/// Owner check plus one admin-set access.
fn admin_set_weight(db: RuntimeDbWeight) -> Weight {
    Weight::from_parts(12_000_000, 1_533).saturating_add(db.reads_writes(2, 1))
}

/// Owner check plus one policy write.
fn policy_weight(db: RuntimeDbWeight) -> Weight {
    Weight::from_parts(9_000_000, 1_533).saturating_add(db.reads_writes(1, 1))
}

/// Weights for pallet-flash-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn transfer() -> Weight {
        transfer_weight(T::DbWeight::get())
    }
    fn approve() -> Weight {
        approve_weight(T::DbWeight::get())
    }
    fn transfer_from() -> Weight {
        transfer_from_weight(T::DbWeight::get())
    }
    fn mint() -> Weight {
        mint_weight(T::DbWeight::get())
    }
    fn burn() -> Weight {
        burn_weight(T::DbWeight::get())
    }
    fn add_admin() -> Weight {
        admin_set_weight(T::DbWeight::get())
    }
    fn remove_admin() -> Weight {
        admin_set_weight(T::DbWeight::get())
    }
    fn pause_transfers() -> Weight {
        policy_weight(T::DbWeight::get())
    }
    fn unpause_transfers() -> Weight {
        policy_weight(T::DbWeight::get())
    }
    fn pause_minting() -> Weight {
        policy_weight(T::DbWeight::get())
    }
    fn unpause_minting() -> Weight {
        policy_weight(T::DbWeight::get())
    }
    fn update_burn_rate() -> Weight {
        policy_weight(T::DbWeight::get())
    }
    fn update_fee_rate() -> Weight {
        policy_weight(T::DbWeight::get())
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn transfer() -> Weight {
        transfer_weight(RocksDbWeight::get())
    }
    fn approve() -> Weight {
        approve_weight(RocksDbWeight::get())
    }
    fn transfer_from() -> Weight {
        transfer_from_weight(RocksDbWeight::get())
    }
    fn mint() -> Weight {
        mint_weight(RocksDbWeight::get())
    }
    fn burn() -> Weight {
        burn_weight(RocksDbWeight::get())
    }
    fn add_admin() -> Weight {
        admin_set_weight(RocksDbWeight::get())
    }
    fn remove_admin() -> Weight {
        admin_set_weight(RocksDbWeight::get())
    }
    fn pause_transfers() -> Weight {
        policy_weight(RocksDbWeight::get())
    }
    fn unpause_transfers() -> Weight {
        policy_weight(RocksDbWeight::get())
    }
    fn pause_minting() -> Weight {
        policy_weight(RocksDbWeight::get())
    }
    fn unpause_minting() -> Weight {
        policy_weight(RocksDbWeight::get())
    }
    fn update_burn_rate() -> Weight {
        policy_weight(RocksDbWeight::get())
    }
    fn update_fee_rate() -> Weight {
        policy_weight(RocksDbWeight::get())
    }
}
