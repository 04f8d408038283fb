use crate as pallet_ledger_token;
use core::cell::RefCell;
use frame_support::{
    derive_impl,
    dispatch::DispatchResult,
    parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, DispatchError,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        LedgerToken: pallet_ledger_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

/// Genesis owner; receives the whole initial supply.
pub const OWNER: u64 = 1;
/// Account that accepts `approve_and_call` notifications.
pub const RECEIVER: u64 = 100;
/// Account that exposes a hook but always rejects.
pub const REJECTING_RECEIVER: u64 = 101;

/// Whole units minted at genesis.
pub const BASE_SUPPLY: u128 = 1_000_000;
pub const DECIMALS: u8 = 6;
pub const INITIAL_SUPPLY: u128 = BASE_SUPPLY * 1_000_000;

parameter_types! {
    pub const MaxMemoLength: u32 = 32;
    pub const MaxExtraDataLength: u32 = 64;
}

/// A notification seen by [`MockReceiver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub spender: u64,
    pub from: u64,
    pub amount: u128,
    pub extra: Vec<u8>,
    /// Allowance already stored when the hook ran.
    pub observed_allowance: u128,
}

thread_local! {
    static NOTIFICATIONS: RefCell<Vec<Notification>> = const { RefCell::new(Vec::new()) };
}

pub fn notifications() -> Vec<Notification> {
    NOTIFICATIONS.with(|n| n.borrow().clone())
}

pub struct MockReceiver;
impl pallet_ledger_token::ApprovalReceiver<u64> for MockReceiver {
    fn is_receiver(spender: &u64) -> bool {
        matches!(*spender, RECEIVER | REJECTING_RECEIVER)
    }

    fn receive_approval(spender: &u64, from: &u64, amount: u128, extra: &[u8]) -> DispatchResult {
        if *spender == REJECTING_RECEIVER {
            return Err(DispatchError::Other("receiver rejected approval"));
        }
        let observed_allowance = LedgerToken::allowance(from, spender);
        NOTIFICATIONS.with(|n| {
            n.borrow_mut().push(Notification {
                spender: *spender,
                from: *from,
                amount,
                extra: extra.to_vec(),
                observed_allowance,
            })
        });
        Ok(())
    }
}

impl pallet_ledger_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type ApprovalReceiver = MockReceiver;
    type MaxMemoLength = MaxMemoLength;
    type MaxExtraDataLength = MaxExtraDataLength;
    type WeightInfo = ();
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(Some(OWNER), BASE_SUPPLY, DECIMALS)
}

pub fn build_ext(owner: Option<u64>, base_supply: u128, decimals: u8) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_ledger_token::GenesisConfig::<Test> {
        owner,
        token_name: b"Test Token".to_vec(),
        token_symbol: b"TST".to_vec(),
        decimals,
        base_supply,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    NOTIFICATIONS.with(|n| n.borrow_mut().clear());

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1 onwards.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Sum of every stored balance.
pub fn sum_of_balances() -> u128 {
    crate::Balances::<Test>::iter_values().sum()
}
