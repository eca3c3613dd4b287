//! Benchmarking setup for pallet-flash-token

use super::*;

#[allow(unused)]
use crate::Pallet as FlashToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;

/// Install `whitelisted_caller` as owner and configure a fee wallet.
fn setup_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = whitelisted_caller();
    Owner::<T>::put(&owner);
    FeeWallet::<T>::put(account::<T::AccountId>("fee_wallet", 0, SEED));
    owner
}

/// Credit `amount` to `who`, keeping the total supply in step.
fn fund<T: Config>(who: &T::AccountId, amount: u128) {
    Balances::<T>::mutate(who, |balance| *balance = balance.saturating_add(amount));
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller = setup_owner::<T>();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        fund::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), 1_000_000);

        // 2% burned, 1% fee
        assert_eq!(Balances::<T>::get(&recipient), 970_000);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let holder = setup_owner::<T>();
        let spender: T::AccountId = account("spender", 0, SEED);
        let recipient: T::AccountId = account("recipient", 0, SEED);
        fund::<T>(&holder, 10_000_000);
        Allowances::<T>::insert(&holder, &spender, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), holder.clone(), recipient.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&holder, &spender), 0);
        assert_eq!(Balances::<T>::get(&recipient), 970_000);
    }

    #[benchmark]
    fn mint() {
        let admin: T::AccountId = account("admin", 0, SEED);
        let recipient: T::AccountId = account("recipient", 0, SEED);
        setup_owner::<T>();
        Admins::<T>::insert(&admin, ());

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller, 10_000_000);
        let supply_before = TotalSupply::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(TotalSupply::<T>::get(), supply_before - 1_000_000);
    }

    #[benchmark]
    fn add_admin() {
        let owner = setup_owner::<T>();
        let admin: T::AccountId = account("admin", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), admin.clone());

        assert!(Admins::<T>::contains_key(&admin));
    }

    #[benchmark]
    fn remove_admin() {
        let owner = setup_owner::<T>();
        let admin: T::AccountId = account("admin", 0, SEED);
        Admins::<T>::insert(&admin, ());

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), admin.clone());

        assert!(!Admins::<T>::contains_key(&admin));
    }

    #[benchmark]
    fn pause_transfers() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(TransfersPaused::<T>::get());
    }

    #[benchmark]
    fn unpause_transfers() {
        let owner = setup_owner::<T>();
        TransfersPaused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(!TransfersPaused::<T>::get());
    }

    #[benchmark]
    fn pause_minting() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(MintingPaused::<T>::get());
    }

    #[benchmark]
    fn unpause_minting() {
        let owner = setup_owner::<T>();
        MintingPaused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(!MintingPaused::<T>::get());
    }

    #[benchmark]
    fn update_burn_rate() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), MAX_RATE);

        assert_eq!(BurnRate::<T>::get(), MAX_RATE);
    }

    #[benchmark]
    fn update_fee_rate() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), MAX_RATE);

        assert_eq!(FeeRate::<T>::get(), MAX_RATE);
    }

    impl_benchmark_test_suite!(FlashToken, crate::mock::new_test_ext(), crate::mock::Test);
}
