//! Fee-and-burn transfer engine.

use frame_support::{dispatch::DispatchResult, ensure, storage::with_storage_layer};
use sp_runtime::{PerThing, Percent};

use crate::{BurnRate, Config, Error, Event, FeeRate, FeeWallet, Pallet, LOG_TARGET, MAX_RATE};

/// How the nominal value of a transfer is divided.
///
/// `burn` and `fee` are floored independently, so the rounding remainder stays in
/// `net`. With both rates at [`MAX_RATE`] the receiver gets 80% of the value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransferSplit {
    /// Destroyed amount.
    pub burn: u128,
    /// Amount credited to the fee wallet.
    pub fee: u128,
    /// Amount credited to the receiver.
    pub net: u128,
}

impl TransferSplit {
    /// Split `value` using whole-percent rates. Rates above [`MAX_RATE`] are clamped.
    pub fn compute(value: u128, burn_rate: u8, fee_rate: u8) -> Self {
        let burn = Percent::from_percent(burn_rate.min(MAX_RATE)).mul_floor(value);
        let fee = Percent::from_percent(fee_rate.min(MAX_RATE)).mul_floor(value);
        let net = value - burn - fee;
        Self { burn, fee, net }
    }
}

impl<T: Config> Pallet<T> {
    /// Move `value` out of `from`: the receiver gets the net amount, the fee wallet the
    /// fee, and the burned part leaves the total supply.
    ///
    /// Events are deposited only after every balance write succeeded.
    pub(crate) fn do_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        value: u128,
    ) -> DispatchResult {
        ensure!(Self::balance_of(from) >= value, Error::<T>::InsufficientBalance);
        ensure!(!Self::is_null(to), Error::<T>::ZeroAddressTransfer);
        let fee_wallet = FeeWallet::<T>::get().ok_or(Error::<T>::NotInitialized)?;

        let split = TransferSplit::compute(value, BurnRate::<T>::get(), FeeRate::<T>::get());

        with_storage_layer(|| -> DispatchResult {
            Self::debit(from, value)?;
            Self::credit(to, split.net)?;
            Self::decrease_supply(split.burn)?;
            if split.fee > 0 {
                Self::credit(&fee_wallet, split.fee)?;
            }
            Ok(())
        })?;

        log::debug!(
            target: LOG_TARGET,
            "Transfer {from:?} -> {to:?}: value {value}, net {}, burn {}, fee {}",
            split.net,
            split.burn,
            split.fee
        );

        if split.fee > 0 {
            Self::deposit_event(Event::FeeCollected { from: from.clone(), amount: split.fee });
        }
        Self::deposit_event(Event::Transferred {
            from: from.clone(),
            to: to.clone(),
            amount: split.net,
        });
        Self::deposit_event(Event::Burned { from: from.clone(), amount: split.burn });
        Ok(())
    }

    /// Spend `value` of `spender`'s allowance over `from`, then transfer. The allowance
    /// is charged the full nominal value and restored if the transfer fails.
    pub(crate) fn do_transfer_from(
        spender: &T::AccountId,
        from: &T::AccountId,
        to: &T::AccountId,
        value: u128,
    ) -> DispatchResult {
        with_storage_layer(|| -> DispatchResult {
            Self::consume_allowance(from, spender, value)?;
            Self::do_transfer(from, to, value)
        })
    }
}
