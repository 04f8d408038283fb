//! Balance and allowance bookkeeping.
//!
//! Each `do_*` function reads what it needs, validates every precondition and
//! computes all new values before the first storage write.

use frame_support::{dispatch::DispatchResult, ensure};
use sp_runtime::RuntimeDebug;

use crate::{
    pallet::{Allowances, Balances, TotalSupply},
    safe_math, Call, Config, Error, Event, Pallet, LOG_TARGET,
};

/// How a call reported a failed precondition before every operation moved to
/// typed errors.
///
/// All calls now fail with an [`Error`]. Integrations written against the
/// boolean-returning variant should treat any error from a `ReturnsFalse`
/// call as that `false`.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum FailureStyle {
    /// The call aborted and reverted.
    Aborts,
    /// The call completed and reported `false`.
    ReturnsFalse,
}

impl<T: Config> Call<T> {
    pub fn failure_style(&self) -> FailureStyle {
        match self {
            Call::owner_transfer { .. } => FailureStyle::ReturnsFalse,
            _ => FailureStyle::Aborts,
        }
    }
}

impl<T: Config> Pallet<T> {
    fn write_balance(who: &T::AccountId, amount: u128) {
        if amount == 0 {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, amount);
        }
    }

    fn write_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        if amount == 0 {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }

    /// Moves `amount` from `from` to `to` with no authorization checks.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let from_balance = Balances::<T>::get(from);
        ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);
        if from == to {
            return Ok(());
        }

        let new_from = safe_math::subtract(from_balance, amount).map_err(Error::<T>::from)?;
        let new_to = safe_math::add(Balances::<T>::get(to), amount).map_err(Error::<T>::from)?;

        Self::write_balance(from, new_from);
        Self::write_balance(to, new_to);
        Ok(())
    }

    pub fn do_transfer(sender: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_transfer_permitted(sender, sender)?;
        Self::ensure_not_null(to)?;

        Self::move_balance(sender, to, amount)?;
        Self::deposit_event(Event::Transfer { from: sender.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Delegated transfer: `spender` moves `amount` from `from` to `to` and the
    /// allowance drops by exactly `amount`.
    pub fn do_transfer_from(
        spender: &T::AccountId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        Self::ensure_transfer_permitted(from, spender)?;
        ensure!(!Self::is_frozen(spender), Error::<T>::AccountFrozen);
        Self::ensure_not_null(from)?;
        Self::ensure_not_null(to)?;

        ensure!(Balances::<T>::get(from) >= amount, Error::<T>::InsufficientBalance);
        let allowance = Allowances::<T>::get(from, spender);
        ensure!(allowance >= amount, Error::<T>::InsufficientAllowance);
        let remaining = safe_math::subtract(allowance, amount).map_err(Error::<T>::from)?;

        Self::move_balance(from, to, amount)?;
        Self::write_allowance(from, spender, remaining);
        Self::deposit_event(Event::Transfer { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Sets the allowance outright.
    ///
    /// A non-zero amount is only accepted while the current allowance is zero,
    /// so a spender can never combine an old and a new allowance. The amount
    /// may not exceed the owner's current balance.
    pub fn do_approve(owner: &T::AccountId, spender: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_null(spender)?;
        ensure!(
            amount == 0 || Allowances::<T>::get(owner, spender) == 0,
            Error::<T>::AllowanceNotCleared
        );
        ensure!(amount <= Balances::<T>::get(owner), Error::<T>::InsufficientBalance);

        Self::write_allowance(owner, spender, amount);
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
        Ok(())
    }

    pub fn do_increase_approval(
        owner: &T::AccountId,
        spender: &T::AccountId,
        delta: u128,
    ) -> DispatchResult {
        Self::ensure_not_null(spender)?;
        let amount = safe_math::add(Allowances::<T>::get(owner, spender), delta)
            .map_err(Error::<T>::from)?;

        Self::write_allowance(owner, spender, amount);
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
        Ok(())
    }

    /// Decreases past zero clamp to zero instead of failing.
    pub fn do_decrease_approval(
        owner: &T::AccountId,
        spender: &T::AccountId,
        delta: u128,
    ) -> DispatchResult {
        Self::ensure_not_null(spender)?;
        let current = Allowances::<T>::get(owner, spender);
        let amount = if delta > current {
            0
        } else {
            safe_math::subtract(current, delta).map_err(Error::<T>::from)?
        };

        Self::write_allowance(owner, spender, amount);
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
        Ok(())
    }

    /// Moves funds out of the owner's own balance, ignoring freezes.
    pub fn do_owner_transfer(owner: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_null(to)?;
        ensure!(amount > 0, Error::<T>::InvalidArgument);

        Self::move_balance(owner, to, amount)?;
        Self::deposit_event(Event::Transfer { from: owner.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Destroys `amount` held by `from`. The only way supply ever decreases.
    pub fn do_burn(from: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(amount > 0, Error::<T>::InvalidArgument);
        let balance = Balances::<T>::get(from);
        ensure!(balance >= amount, Error::<T>::InsufficientBalance);

        let new_balance = safe_math::subtract(balance, amount).map_err(Error::<T>::from)?;
        let new_supply =
            safe_math::subtract(TotalSupply::<T>::get(), amount).map_err(Error::<T>::from)?;

        Self::write_balance(from, new_balance);
        TotalSupply::<T>::put(new_supply);

        log::debug!(target: LOG_TARGET, "Burned {amount} from {from:?}, supply now {new_supply}");
        Self::deposit_event(Event::Transfer {
            from: from.clone(),
            to: Self::null_account(),
            amount,
        });
        Self::deposit_event(Event::Burn { from: from.clone(), amount });
        Ok(())
    }

    /// Checks the ledger's storage invariants:
    /// - balances sum to the total supply
    /// - zero balances are not stored
    /// - a non-zero supply always has an owner
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::DispatchError> {
        let mut sum: u128 = 0;
        for (_, balance) in Balances::<T>::iter() {
            ensure!(balance > 0, "Zero balance kept in storage");
            sum = safe_math::add(sum, balance).map_err(|_| "Sum of balances overflows")?;
        }
        let supply = TotalSupply::<T>::get();
        ensure!(sum == supply, "Sum of balances differs from total supply");
        ensure!(
            supply == 0 || crate::pallet::Owner::<T>::get().is_some(),
            "Non-zero supply without an owner"
        );
        Ok(())
    }
}
