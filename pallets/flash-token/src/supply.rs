//! Minting and self-burning.

use frame_support::{dispatch::DispatchResult, ensure, storage::with_storage_layer};

use crate::{Config, Error, Event, Pallet, LOG_TARGET};

impl<T: Config> Pallet<T> {
    pub(crate) fn do_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_minting_active()?;
        ensure!(!Self::is_null(to), Error::<T>::ZeroAddressMint);

        with_storage_layer(|| -> DispatchResult {
            Self::increase_supply(amount)?;
            Self::credit(to, amount)
        })?;

        log::debug!(target: LOG_TARGET, "Minted {amount} to {to:?}");
        Self::deposit_event(Event::Minted { to: to.clone(), amount });
        Ok(())
    }

    /// Burning ignores both pause flags.
    pub(crate) fn do_burn(from: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(Self::balance_of(from) >= amount, Error::<T>::InsufficientBalance);

        with_storage_layer(|| -> DispatchResult {
            Self::debit(from, amount)?;
            Self::decrease_supply(amount)
        })?;

        log::debug!(target: LOG_TARGET, "Burned {amount} from {from:?}");
        Self::deposit_event(Event::Burned { from: from.clone(), amount });
        Ok(())
    }
}
