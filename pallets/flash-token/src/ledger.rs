//! Balance, allowance and supply bookkeeping.
//!
//! `credit` and `debit` are the only writers of [`Balances`]; the supply helpers are
//! the only writers of [`TotalSupply`]. All of them use `try_mutate`, so a failing
//! call leaves storage untouched.

use codec::Decode;
use frame_support::{dispatch::DispatchResult, ensure};
use sp_runtime::traits::TrailingZeroInput;

use crate::{Allowances, Balances, Config, Error, Event, Pallet, TotalSupply};

impl<T: Config> Pallet<T> {
    /// The all-zero account. It never holds a balance.
    pub fn null_account() -> T::AccountId {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes())
            .expect("infinite length input; no invalid inputs for type; qed")
    }

    pub fn is_null(who: &T::AccountId) -> bool {
        *who == Self::null_account()
    }

    pub(crate) fn credit(who: &T::AccountId, amount: u128) -> DispatchResult {
        Balances::<T>::try_mutate(who, |balance| -> DispatchResult {
            *balance = balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })
    }

    pub(crate) fn debit(who: &T::AccountId, amount: u128) -> DispatchResult {
        Balances::<T>::try_mutate(who, |balance| -> DispatchResult {
            *balance = balance.checked_sub(amount).ok_or(Error::<T>::Underflow)?;
            Ok(())
        })
    }

    pub(crate) fn increase_supply(amount: u128) -> DispatchResult {
        TotalSupply::<T>::try_mutate(|supply| -> DispatchResult {
            *supply = supply.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })
    }

    pub(crate) fn decrease_supply(amount: u128) -> DispatchResult {
        TotalSupply::<T>::try_mutate(|supply| -> DispatchResult {
            *supply = supply.checked_sub(amount).ok_or(Error::<T>::Underflow)?;
            Ok(())
        })
    }

    pub(crate) fn do_approve(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        Allowances::<T>::insert(owner, spender, amount);
        Self::deposit_event(Event::Approved {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
    }

    /// Spend `amount` of the allowance `owner` granted to `spender`.
    pub(crate) fn consume_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        Allowances::<T>::try_mutate(owner, spender, |remaining| -> DispatchResult {
            ensure!(*remaining >= amount, Error::<T>::AllowanceTooLow);
            *remaining -= amount;
            Ok(())
        })
    }
}
