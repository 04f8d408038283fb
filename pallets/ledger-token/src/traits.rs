//! Capabilities the ledger consumes from the surrounding runtime.

use frame_support::dispatch::DispatchResult;

/// Hook invoked by `approve_and_call` once the allowance has been written.
///
/// Implementors decide which principals are callable (contracts, pallet
/// accounts, ...). A principal without the hook makes `approve_and_call`
/// fail, and an `Err` from [`receive_approval`](Self::receive_approval)
/// reverts the whole call including the allowance change.
pub trait ApprovalReceiver<AccountId> {
    /// Whether `spender` exposes an approval hook at all.
    fn is_receiver(spender: &AccountId) -> bool;

    /// Notifies `spender` that `from` approved it for `amount`.
    fn receive_approval(
        spender: &AccountId,
        from: &AccountId,
        amount: u128,
        extra: &[u8],
    ) -> DispatchResult;
}

/// No principal is callable.
impl<AccountId> ApprovalReceiver<AccountId> for () {
    fn is_receiver(_spender: &AccountId) -> bool {
        false
    }

    fn receive_approval(
        _spender: &AccountId,
        _from: &AccountId,
        _amount: u128,
        _extra: &[u8],
    ) -> DispatchResult {
        Err(sp_runtime::DispatchError::Unavailable)
    }
}
