use crate as pallet_flash_token;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        FlashToken: pallet_flash_token,
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

impl pallet_flash_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

/// The null account of a `u64` runtime.
pub const NULL: u64 = 0;
/// Creates the ledger at genesis: owner and holder of the initial supply.
pub const CREATOR: u64 = 1;
/// Admin from genesis.
pub const ADMIN: u64 = 2;
pub const ALICE: u64 = 3;
pub const BOB: u64 = 4;
pub const CHARLIE: u64 = 5;
pub const FEE_WALLET: u64 = 9;

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_flash_token::GenesisConfig::<Test> {
        owner: Some(CREATOR),
        fee_wallet: Some(FEE_WALLET),
        admins: vec![ADMIN],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1 on.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Events deposited by the flash-token pallet, oldest first.
pub fn flash_events() -> Vec<pallet_flash_token::Event<Test>> {
    System::events()
        .into_iter()
        .filter_map(|record| match record.event {
            RuntimeEvent::FlashToken(event) => Some(event),
            _ => None,
        })
        .collect()
}
