#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are deprecated upstream but remain the public read surface of this pallet
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Ledger Token Pallet
//!
//! A single fungible token with an owner, an admin set, per-account and global
//! freeze switches, ERC-20 style allowances and owner-only burns.
//!
//! The whole supply is minted once at genesis into the owner's balance; no
//! further mint path exists. Every dispatchable validates all of its
//! preconditions before touching storage, and every amount update goes through
//! [`safe_math`].

use codec::DecodeAll;
use frame_support::{dispatch::DispatchResult, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::ArithmeticError;
use sp_std::prelude::*;

pub use ledger::FailureStyle;
pub use pallet::*;
pub use traits::ApprovalReceiver;
pub use weights::WeightInfo;

mod access;
mod ledger;
pub mod safe_math;
pub mod traits;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "pallet-ledger-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Principals that can be notified by `approve_and_call`.
        type ApprovalReceiver: ApprovalReceiver<Self::AccountId>;

        /// Maximum length of the memo attached to `transfer_with_memo`.
        #[pallet::constant]
        type MaxMemoLength: Get<u32>;

        /// Maximum length of the payload forwarded by `approve_and_call`.
        #[pallet::constant]
        type MaxExtraDataLength: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Ledger Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "LDG")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals (e.g., 18 for ETH-style)
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Only decreases after genesis.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances. Zero balances are not stored.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Amount `spender` (second key) may still move out of `owner` (first key).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Ledger owner. Set at genesis and only replaced by the owner itself.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Explicitly granted admins. The owner is an admin without an entry here.
    #[pallet::storage]
    pub type Admins<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Frozen accounts (cannot send transfers)
    #[pallet::storage]
    #[pallet::getter(fn is_frozen)]
    pub type Frozen<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Global freeze. While set, only admins may initiate transfers.
    #[pallet::storage]
    #[pallet::getter(fn transfers_frozen)]
    pub type TransfersFrozen<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved between accounts. Burns report the null account as `to`.
        Transfer { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Tokens moved with an attached memo (emitted after the plain `Transfer`)
        TransferWithMemo {
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
            memo: BoundedVec<u8, T::MaxMemoLength>,
        },
        /// Allowance of `spender` over `owner`'s balance is now `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Tokens destroyed, total supply reduced by `amount`
        Burn { from: T::AccountId, amount: u128 },
        /// Account frozen or unfrozen
        FrozenFunds { target: T::AccountId, frozen: bool },
        /// Ownership handed over
        OwnershipTransferred { previous: T::AccountId, new: T::AccountId },
        AdminGranted { account: T::AccountId },
        AdminRevoked { account: T::AccountId },
        /// Global transfer freeze switched on or off
        TransfersFrozen { frozen: bool },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// An amount update would exceed the integer range.
        ArithmeticOverflow,
        /// An amount update would go below zero.
        ArithmeticUnderflow,
        DivisionByZero,
        /// The caller does not hold the required role.
        Unauthorized,
        /// Null, zero or self-referential argument.
        InvalidArgument,
        InsufficientBalance,
        InsufficientAllowance,
        AccountFrozen,
        /// Transfers are globally frozen and the caller is not an admin.
        TransfersSuspended,
        /// Encoded call data is shorter or longer than the call it names.
        PayloadSizeMismatch,
        /// A non-zero allowance can only be set when the current one is zero.
        AllowanceNotCleared,
        /// The spender exposes no approval hook.
        ReceiverNotCallable,
        /// The ledger does not accept direct deposits.
        DepositsRejected,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)
        }

        /// Same as `transfer`, additionally emitting `TransferWithMemo`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_with_memo(memo.len() as u32))]
        pub fn transfer_with_memo(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: u128,
            memo: BoundedVec<u8, T::MaxMemoLength>,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)?;
            Self::deposit_event(Event::TransferWithMemo { from: sender, to, amount, memo });
            Ok(())
        }

        /// Moves `amount` from `from` to `to` out of the caller's allowance.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::do_transfer_from(&spender, &from, &to, amount)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(&owner, &spender, amount)
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::increase_approval())]
        pub fn increase_approval(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_increase_approval(&owner, &spender, delta)
        }

        /// Lowers the allowance by `delta`, stopping at zero.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::decrease_approval())]
        pub fn decrease_approval(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_decrease_approval(&owner, &spender, delta)
        }

        /// Owner-only reallocation out of the owner's own balance.
        ///
        /// Historically this reported a zero amount or a short balance as a
        /// `false` return instead of aborting; see [`FailureStyle`].
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::owner_transfer())]
        pub fn owner_transfer(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            Self::do_owner_transfer(&owner, &to, amount)
        }

        /// Burns `amount` from the owner's own balance.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            Self::do_burn(&owner, amount)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn_from(origin: OriginFor<T>, from: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_not_null(&from)?;
            Self::do_burn(&from, amount)
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            Self::do_transfer_ownership(owner, new_owner)
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::set_admin())]
        pub fn grant_admin(origin: OriginFor<T>, target: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_set_admin(target, true)
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::set_admin())]
        pub fn revoke_admin(origin: OriginFor<T>, target: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_set_admin(target, false)
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::set_account_frozen())]
        pub fn freeze_account(origin: OriginFor<T>, target: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_set_account_frozen(target, true)
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::set_account_frozen())]
        pub fn unfreeze_account(origin: OriginFor<T>, target: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_set_account_frozen(target, false)
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::set_transfers_frozen())]
        pub fn freeze_all(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_set_transfers_frozen(true)
        }

        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::set_transfers_frozen())]
        pub fn unfreeze_all(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_set_transfers_frozen(false)
        }

        /// Approves `spender` for `amount`, then notifies it through
        /// [`Config::ApprovalReceiver`].
        ///
        /// The notification is the last step. If the spender has no hook or the
        /// hook fails, the approval is reverted with the rest of the call.
        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::approve_and_call(extra.len() as u32))]
        pub fn approve_and_call(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
            extra: BoundedVec<u8, T::MaxExtraDataLength>,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(T::ApprovalReceiver::is_receiver(&spender), Error::<T>::ReceiverNotCallable);
            Self::do_approve(&owner, &spender, amount)?;
            T::ApprovalReceiver::receive_approval(&spender, &owner, amount, &extra).inspect_err(
                |e| {
                    log::warn!(
                        target: LOG_TARGET,
                        "approval receiver rejected notification: {e:?}"
                    )
                },
            )
        }

        /// The ledger has no deposit path; every attempt is refused.
        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::deposit())]
        pub fn deposit(origin: OriginFor<T>, _amount: u128) -> DispatchResult {
            ensure_signed(origin)?;
            Err(Error::<T>::DepositsRejected.into())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Owner receiving the whole initial supply. Nothing is minted without one.
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Initial supply in whole units, scaled by `10^decimals` at build
        pub base_supply: u128,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref owner) = self.owner {
                let supply = safe_math::scale_by_decimals(self.base_supply, self.decimals)
                    .expect("Initial supply overflows u128");
                Owner::<T>::put(owner);
                if supply > 0 {
                    Balances::<T>::insert(owner, supply);
                }
                TotalSupply::<T>::put(supply);
                log::info!(
                    target: LOG_TARGET,
                    "Genesis: minted {supply} base units ({} decimals) to owner",
                    self.decimals
                );
            }
        }
    }
}

impl<T> From<ArithmeticError> for Error<T> {
    fn from(e: ArithmeticError) -> Self {
        match e {
            ArithmeticError::Overflow => Error::ArithmeticOverflow,
            ArithmeticError::Underflow => Error::ArithmeticUnderflow,
            ArithmeticError::DivisionByZero => Error::DivisionByZero,
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Decodes a SCALE-encoded ledger call, rejecting input that is cut short
    /// or carries trailing bytes.
    pub fn decode_call(encoded: &[u8]) -> Result<Call<T>, Error<T>> {
        Call::<T>::decode_all(&mut &encoded[..]).map_err(|_| Error::<T>::PayloadSizeMismatch)
    }
}
