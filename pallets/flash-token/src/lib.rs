#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are deprecated upstream but still form the read-only surface of this pallet.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Flash Token Pallet
//!
//! A single-asset ledger that burns and collects a fee on every transfer.
//!
//! Every transfer of `value` debits the sender by the full `value`, destroys
//! `floor(value * burn_rate / 100)`, sends `floor(value * fee_rate / 100)` to the
//! fee wallet and credits the receiver with the rest. Burn and fee rates are each
//! capped at [`MAX_RATE`] percent but are not capped jointly, so up to 20% of a
//! transfer can be withheld from the receiver.
//!
//! Roles:
//! - the owner, fixed at genesis, controls pause flags, rates and the admin set;
//! - admins (and the owner) may mint.
//!
//! Every transfer deposits a `Burned` event, including when the burned amount is
//! zero. `approve` overwrites the previous allowance, so the usual approve race
//! applies: a spender watching the pool can use both the old and the new
//! allowance. Clients should approve zero first when lowering a non-zero allowance.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, storage::with_storage_layer};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use transfer::TransferSplit;
pub use weights::WeightInfo;

mod ledger;
mod policy;
mod roles;
mod supply;
mod transfer;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::flash-token";

/// Token name.
pub const TOKEN_NAME: &[u8] = b"Flash USDT";
/// Token symbol.
pub const TOKEN_SYMBOL: &[u8] = b"$Tether";
/// Number of decimals of the smallest unit.
pub const DECIMALS: u8 = 18;
/// Supply credited to the owner at genesis: 100 million whole tokens.
pub const INITIAL_SUPPLY: u128 = 100_000_000 * 10u128.pow(DECIMALS as u32);
/// Highest accepted burn or fee rate, in whole percent.
pub const MAX_RATE: u8 = 10;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Weight information for the dispatchables of this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::type_value]
    pub fn DefaultBurnRate() -> u8 {
        2
    }

    #[pallet::type_value]
    pub fn DefaultFeeRate() -> u8 {
        1
    }

    /// Total token supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Remaining amount a spender (second key) may move out of an owner's (first key) balance
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

    /// Ledger owner, set once at genesis
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Accounts explicitly granted admin rights (the owner is an admin implicitly)
    #[pallet::storage]
    pub type Admins<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

    /// Receiver of every transfer fee, set once at genesis
    #[pallet::storage]
    #[pallet::getter(fn fee_wallet)]
    pub type FeeWallet<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_transfer_paused)]
    pub type TransfersPaused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_mint_paused)]
    pub type MintingPaused<T> = StorageValue<_, bool, ValueQuery>;

    /// Percentage of every transfer that is destroyed
    #[pallet::storage]
    #[pallet::getter(fn burn_rate)]
    pub type BurnRate<T> = StorageValue<_, u8, ValueQuery, DefaultBurnRate>;

    /// Percentage of every transfer that goes to the fee wallet
    #[pallet::storage]
    #[pallet::getter(fn fee_rate)]
    pub type FeeRate<T> = StorageValue<_, u8, ValueQuery, DefaultFeeRate>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred; `amount` is what `to` received after burn and fee
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance of `spender` over `owner`'s balance set to `amount`
        Approved { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens destroyed, either by a transfer or by the holder
        Burned { from: T::AccountId, amount: u128 },
        /// Transfer fee credited to the fee wallet
        FeeCollected { from: T::AccountId, amount: u128 },
        AdminAdded { admin: T::AccountId },
        AdminRemoved { admin: T::AccountId },
        TransfersPaused,
        TransfersUnpaused,
        MintingPaused,
        MintingUnpaused,
        BurnRateUpdated { rate: u8 },
        FeeRateUpdated { rate: u8 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller lacks the owner or admin role
        Unauthorized,
        InsufficientBalance,
        /// Spender's allowance is below the requested value
        AllowanceTooLow,
        ZeroAddressTransfer,
        ZeroAddressMint,
        ZeroAddressFeeWallet,
        /// The null account cannot be granted a role
        InvalidAddress,
        NotAnAdmin,
        /// Rate above `MAX_RATE`
        RateTooHigh,
        TransferPaused,
        MintPaused,
        Overflow,
        Underflow,
        /// Owner and fee wallet have not been configured
        NotInitialized,
        AlreadyInitialized,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::extra_constants]
    impl<T: Config> Pallet<T> {
        #[allow(non_snake_case)]
        fn MaxRate() -> u8 {
            MAX_RATE
        }

        #[allow(non_snake_case)]
        fn InitialSupply() -> u128 {
            INITIAL_SUPPLY
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Move `value` from the caller to `to`, burning and collecting the fee on the way.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, value: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_transfers_active()?;
            Self::do_transfer(&sender, &to, value)
        }

        /// Let `spender` move up to `value` out of the caller's balance, replacing any
        /// previous allowance.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, value: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(&owner, &spender, value);
            Ok(())
        }

        /// Move `value` from `from` to `to` on the strength of the caller's allowance.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            value: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_transfers_active()?;
            Self::do_transfer_from(&spender, &from, &to, value)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::do_mint(&to, amount)
        }

        /// Destroy `amount` of the caller's own tokens. Available while paused.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_burn(&who, amount)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::add_admin())]
        pub fn add_admin(origin: OriginFor<T>, admin: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_add_admin(admin)
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::remove_admin())]
        pub fn remove_admin(origin: OriginFor<T>, admin: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_remove_admin(admin)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::pause_transfers())]
        pub fn pause_transfers(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::set_transfers_paused(true);
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::unpause_transfers())]
        pub fn unpause_transfers(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::set_transfers_paused(false);
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::pause_minting())]
        pub fn pause_minting(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::set_minting_paused(true);
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::unpause_minting())]
        pub fn unpause_minting(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::set_minting_paused(false);
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::update_burn_rate())]
        pub fn update_burn_rate(origin: OriginFor<T>, rate: u8) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_update_burn_rate(rate)
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::update_fee_rate())]
        pub fn update_fee_rate(origin: OriginFor<T>, rate: u8) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_update_fee_rate(rate)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Creator of the ledger: becomes owner and receives the initial supply
        pub owner: Option<T::AccountId>,
        /// Account receiving every transfer fee
        pub fee_wallet: Option<T::AccountId>,
        /// Accounts allowed to mint from genesis on
        pub admins: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            match (&self.owner, &self.fee_wallet) {
                (Some(owner), Some(fee_wallet)) => {
                    Pallet::<T>::initialize(owner, fee_wallet)
                        .expect("Invalid flash-token genesis (null owner or fee wallet)");
                }
                (None, None) => {
                    assert!(self.admins.is_empty(), "Genesis admins require an owner");
                    return;
                }
                _ => panic!("Genesis owner and fee_wallet must be set together"),
            }

            for admin in &self.admins {
                assert!(!Pallet::<T>::is_null(admin), "Genesis admin must not be the null account");
                Admins::<T>::insert(admin, ());
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn token_name() -> &'static [u8] {
        TOKEN_NAME
    }

    pub fn token_symbol() -> &'static [u8] {
        TOKEN_SYMBOL
    }

    pub fn decimals() -> u8 {
        DECIMALS
    }

    /// Record `creator` as owner, fix the fee wallet and credit the initial supply to
    /// the creator.
    pub fn initialize(creator: &T::AccountId, fee_wallet: &T::AccountId) -> DispatchResult {
        ensure!(!Self::is_null(fee_wallet), Error::<T>::ZeroAddressFeeWallet);
        ensure!(!Self::is_null(creator), Error::<T>::InvalidAddress);
        ensure!(Owner::<T>::get().is_none(), Error::<T>::AlreadyInitialized);

        with_storage_layer(|| -> DispatchResult {
            Owner::<T>::put(creator);
            FeeWallet::<T>::put(fee_wallet);
            Self::increase_supply(INITIAL_SUPPLY)?;
            Self::credit(creator, INITIAL_SUPPLY)
        })?;

        log::info!(
            target: LOG_TARGET,
            "Ledger created by {creator:?}, fee wallet {fee_wallet:?}, supply {INITIAL_SUPPLY}"
        );
        Ok(())
    }

    /// Check the ledger invariants: balances sum to the total supply, the null account
    /// holds nothing and both rates are within bounds.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("Sum of balances overflows u128")?;
        ensure!(sum == TotalSupply::<T>::get(), "Total supply differs from the sum of balances");
        ensure!(
            Balances::<T>::get(Self::null_account()) == 0,
            "Null account holds a balance"
        );
        ensure!(BurnRate::<T>::get() <= MAX_RATE, "Burn rate above MAX_RATE");
        ensure!(FeeRate::<T>::get() <= MAX_RATE, "Fee rate above MAX_RATE");
        Ok(())
    }
}
