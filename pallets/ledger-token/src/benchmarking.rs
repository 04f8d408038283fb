//! Benchmarking setup for pallet-ledger-token

use super::*;

#[allow(unused)]
use crate::Pallet as LedgerToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const BALANCE: u128 = 10_000_000;

/// Makes `who` the owner, holding the whole supply.
fn setup_owner<T: Config>(who: &T::AccountId) {
    Owner::<T>::put(who);
    Balances::<T>::insert(who, BALANCE);
    TotalSupply::<T>::put(BALANCE);
}

/// A funded non-owner account.
fn funded<T: Config>(name: &'static str) -> T::AccountId {
    let owner: T::AccountId = account("owner", 0, 0);
    let who: T::AccountId = account(name, 0, 1);
    setup_owner::<T>(&owner);
    Balances::<T>::insert(&owner, BALANCE / 2);
    Balances::<T>::insert(&who, BALANCE / 2);
    who
}

#[benchmarks]
mod benchmarks {
    use super::*;

    // Worst case: the global freeze is on and the caller is a granted admin.
    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        setup_owner::<T>(&caller);
        TransfersFrozen::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), 1_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000);
    }

    #[benchmark]
    fn transfer_with_memo(m: Linear<0, { T::MaxMemoLength::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        setup_owner::<T>(&caller);
        let memo: BoundedVec<u8, T::MaxMemoLength> =
            sp_std::vec![7u8; m as usize].try_into().expect("length within bound");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), 1_000, memo);

        assert_eq!(Balances::<T>::get(&recipient), 1_000);
    }

    #[benchmark]
    fn transfer_from() {
        let holder = funded::<T>("holder");
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 2);
        Allowances::<T>::insert(&holder, &spender, 5_000);
        Admins::<T>::insert(&spender, true);
        TransfersFrozen::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), holder.clone(), recipient.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&holder, &spender), 4_000);
        assert_eq!(Balances::<T>::get(&recipient), 1_000);
    }

    #[benchmark]
    fn approve() {
        let caller = funded::<T>("caller");
        let spender: T::AccountId = account("spender", 0, 2);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000);
    }

    #[benchmark]
    fn increase_approval() {
        let caller = funded::<T>("caller");
        let spender: T::AccountId = account("spender", 0, 2);
        Allowances::<T>::insert(&caller, &spender, 1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 500);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_500);
    }

    #[benchmark]
    fn decrease_approval() {
        let caller = funded::<T>("caller");
        let spender: T::AccountId = account("spender", 0, 2);
        Allowances::<T>::insert(&caller, &spender, 1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 400);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 600);
    }

    #[benchmark]
    fn owner_transfer() {
        let owner: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        setup_owner::<T>(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), recipient.clone(), 1_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000);
    }

    #[benchmark]
    fn burn() {
        let owner: T::AccountId = whitelisted_caller();
        setup_owner::<T>(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), 1_000);

        assert_eq!(TotalSupply::<T>::get(), BALANCE - 1_000);
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("new_owner", 0, 0);
        setup_owner::<T>(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn set_admin() {
        let owner: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        setup_owner::<T>(&owner);

        #[block]
        {
            LedgerToken::<T>::grant_admin(RawOrigin::Signed(owner).into(), target.clone())
                .expect("owner may grant admin");
        }

        assert_eq!(Admins::<T>::get(&target), true);
    }

    #[benchmark]
    fn set_account_frozen() {
        let owner: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        setup_owner::<T>(&owner);

        #[block]
        {
            LedgerToken::<T>::freeze_account(RawOrigin::Signed(owner).into(), target.clone())
                .expect("owner may freeze");
        }

        assert_eq!(Frozen::<T>::get(&target), true);
    }

    #[benchmark]
    fn set_transfers_frozen() {
        let owner: T::AccountId = whitelisted_caller();
        setup_owner::<T>(&owner);

        #[block]
        {
            LedgerToken::<T>::freeze_all(RawOrigin::Signed(owner).into())
                .expect("owner may freeze all");
        }

        assert_eq!(TransfersFrozen::<T>::get(), true);
    }

    // The receiver hook is runtime-provided; this measures the ledger side only.
    #[benchmark]
    fn approve_and_call(e: Linear<0, { T::MaxExtraDataLength::get() }>) {
        let caller = funded::<T>("caller");
        let spender: T::AccountId = account("spender", 0, 2);
        let extra: BoundedVec<u8, T::MaxExtraDataLength> =
            sp_std::vec![1u8; e as usize].try_into().expect("length within bound");

        #[block]
        {
            LedgerToken::<T>::do_approve(&caller, &spender, 1_000).expect("funded caller");
            let _ = T::ApprovalReceiver::receive_approval(&spender, &caller, 1_000, &extra);
        }

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000);
    }

    #[benchmark]
    fn deposit() {
        let caller: T::AccountId = whitelisted_caller();

        #[block]
        {
            let _ = LedgerToken::<T>::deposit(RawOrigin::Signed(caller).into(), 1);
        }
    }

    impl_benchmark_test_suite!(LedgerToken, crate::mock::new_test_ext(), crate::mock::Test);
}
