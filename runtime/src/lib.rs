#![cfg_attr(not(feature = "std"), no_std)]

//! Minimal runtime hosting the flash-token ledger next to `frame_system`.

use frame_support::{construct_runtime, derive_impl};
use sp_runtime::{
    generic,
    traits::{BlakeTwo256, IdentifyAccount, Verify},
    MultiAddress, MultiSignature,
};


/// Alias to 512-bit hash when used in the context of a transaction signature on the chain.
pub type Signature = MultiSignature;

/// Some way of identifying an account on the chain.
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;

pub type BlockNumber = u32;

/// The address format for describing accounts.
pub type Address = MultiAddress<AccountId, ()>;

pub type Header = generic::Header<BlockNumber, BlakeTwo256>;

/// The extensions checked for every signed transaction.
pub type TxExtension = (
    frame_system::CheckNonZeroSender<Runtime>,
    frame_system::CheckSpecVersion<Runtime>,
    frame_system::CheckTxVersion<Runtime>,
    frame_system::CheckGenesis<Runtime>,
    frame_system::CheckEra<Runtime>,
    frame_system::CheckNonce<Runtime>,
    frame_system::CheckWeight<Runtime>,
);

pub type UncheckedExtrinsic =
    generic::UncheckedExtrinsic<Address, RuntimeCall, Signature, TxExtension>;

pub type Block = generic::Block<Header, UncheckedExtrinsic>;

construct_runtime!(
    pub enum Runtime {
        System: frame_system,
        FlashToken: pallet_flash_token,
    }
);

#[derive_impl(frame_system::config_preludes::SolochainDefaultConfig)]
impl frame_system::Config for Runtime {
    type Block = Block;
}

impl pallet_flash_token::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = pallet_flash_token::weights::SubstrateWeight<Runtime>;
}
