//! Weights for pallet-ledger-token.
//!
//! Placeholder figures until the benchmarks in `benchmarking.rs` are run
//! against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn transfer_with_memo(m: u32) -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn increase_approval() -> Weight;
    fn decrease_approval() -> Weight;
    fn owner_transfer() -> Weight;
    fn burn() -> Weight;
    fn transfer_ownership() -> Weight;
    fn set_admin() -> Weight;
    fn set_account_frozen() -> Weight;
    fn set_transfers_frozen() -> Weight;
    fn approve_and_call(e: u32) -> Weight;
    fn deposit() -> Weight;
}

/// Weights for the ledger when wired into a runtime.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Frozen(sender), TransfersFrozen, Balances x2. Writes: Balances x2.
    fn transfer() -> Weight {
        Weight::from_parts(25_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn transfer_with_memo(m: u32) -> Weight {
        Self::transfer().saturating_add(Weight::from_parts(1_000, 0).saturating_mul(m.into()))
    }
    // Adds Frozen(spender), Owner, Admins, Allowances read + Allowances write.
    fn transfer_from() -> Weight {
        Weight::from_parts(32_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn approve() -> Weight {
        Weight::from_parts(15_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn increase_approval() -> Weight {
        Weight::from_parts(15_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn decrease_approval() -> Weight {
        Self::increase_approval()
    }
    fn owner_transfer() -> Weight {
        Weight::from_parts(22_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn burn() -> Weight {
        Weight::from_parts(20_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn set_admin() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn set_account_frozen() -> Weight {
        Self::set_admin()
    }
    fn set_transfers_frozen() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn approve_and_call(e: u32) -> Weight {
        Self::approve().saturating_add(Weight::from_parts(1_000, 0).saturating_mul(e.into()))
    }
    fn deposit() -> Weight {
        Weight::from_parts(5_000_000, 0)
    }
}

// For tests and mock runtimes.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn transfer_with_memo(_m: u32) -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn approve() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn increase_approval() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn decrease_approval() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn owner_transfer() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn burn() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn set_admin() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn set_account_frozen() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn set_transfers_frozen() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn approve_and_call(_e: u32) -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn deposit() -> Weight {
        Weight::from_parts(10_000, 0)
    }
}
