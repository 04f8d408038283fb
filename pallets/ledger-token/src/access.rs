//! Owner, admin and freeze guards.
//!
//! Privileged dispatchables call [`Pallet::ensure_owner`] first; transfer
//! paths call [`Pallet::ensure_transfer_permitted`] before reading balances.

use frame_support::{dispatch::DispatchResult, ensure};
use frame_system::{ensure_signed, pallet_prelude::OriginFor};
use sp_runtime::{traits::TrailingZeroInput, DispatchError};

use crate::{
    pallet::{Admins, Frozen, Owner, TransfersFrozen},
    Config, Error, Event, Pallet, LOG_TARGET,
};
use codec::Decode;

impl<T: Config> Pallet<T> {
    /// The account decoded from an all-zero byte stream.
    ///
    /// Never valid as a target; also the sink reported by burn events.
    pub fn null_account() -> T::AccountId {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes())
            .expect("infinite length input; no invalid inputs for type; qed")
    }

    pub(crate) fn ensure_not_null(who: &T::AccountId) -> Result<(), Error<T>> {
        ensure!(*who != Self::null_account(), Error::<T>::InvalidArgument);
        Ok(())
    }

    pub fn is_owner(who: &T::AccountId) -> bool {
        Owner::<T>::get().as_ref() == Some(who)
    }

    /// The owner is always an admin.
    pub fn is_admin(who: &T::AccountId) -> bool {
        Self::is_owner(who) || Admins::<T>::get(who)
    }

    /// Resolves a signed origin and requires it to be the owner.
    pub(crate) fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Self::is_owner(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    /// A transfer out of `sender` initiated by `caller` is allowed iff
    /// `sender` is not frozen and either transfers are not globally frozen or
    /// `caller` is an admin.
    pub fn ensure_transfer_permitted(
        sender: &T::AccountId,
        caller: &T::AccountId,
    ) -> Result<(), Error<T>> {
        ensure!(!Frozen::<T>::get(sender), Error::<T>::AccountFrozen);
        ensure!(
            !TransfersFrozen::<T>::get() || Self::is_admin(caller),
            Error::<T>::TransfersSuspended
        );
        Ok(())
    }

    pub(crate) fn do_transfer_ownership(
        current: T::AccountId,
        new_owner: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_not_null(&new_owner)?;
        ensure!(new_owner != current, Error::<T>::InvalidArgument);

        Owner::<T>::put(&new_owner);
        log::info!(target: LOG_TARGET, "Ownership transferred to {new_owner:?}");
        Self::deposit_event(Event::OwnershipTransferred { previous: current, new: new_owner });
        Ok(())
    }

    /// Idempotent: granting an admin or revoking a non-admin still succeeds.
    pub(crate) fn do_set_admin(target: T::AccountId, admin: bool) -> DispatchResult {
        Self::ensure_not_null(&target)?;

        if admin {
            Admins::<T>::insert(&target, true);
            log::debug!(target: LOG_TARGET, "Admin granted to {target:?}");
            Self::deposit_event(Event::AdminGranted { account: target });
        } else {
            Admins::<T>::remove(&target);
            log::debug!(target: LOG_TARGET, "Admin revoked from {target:?}");
            Self::deposit_event(Event::AdminRevoked { account: target });
        }
        Ok(())
    }

    pub(crate) fn do_set_account_frozen(target: T::AccountId, frozen: bool) -> DispatchResult {
        Self::ensure_not_null(&target)?;

        if frozen {
            Frozen::<T>::insert(&target, true);
        } else {
            Frozen::<T>::remove(&target);
        }
        log::debug!(target: LOG_TARGET, "Account {target:?} frozen: {frozen}");
        Self::deposit_event(Event::FrozenFunds { target, frozen });
        Ok(())
    }

    pub(crate) fn do_set_transfers_frozen(frozen: bool) -> DispatchResult {
        TransfersFrozen::<T>::put(frozen);
        log::debug!(target: LOG_TARGET, "Global transfer freeze: {frozen}");
        Self::deposit_event(Event::TransfersFrozen { frozen });
        Ok(())
    }
}
