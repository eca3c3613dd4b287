//! Pause flags and rate parameters.

use frame_support::{dispatch::DispatchResult, ensure};

use crate::{
    BurnRate, Config, Error, Event, FeeRate, MintingPaused, Pallet, TransfersPaused, LOG_TARGET,
    MAX_RATE,
};

impl<T: Config> Pallet<T> {
    pub(crate) fn ensure_transfers_active() -> DispatchResult {
        ensure!(!TransfersPaused::<T>::get(), Error::<T>::TransferPaused);
        Ok(())
    }

    pub(crate) fn ensure_minting_active() -> DispatchResult {
        ensure!(!MintingPaused::<T>::get(), Error::<T>::MintPaused);
        Ok(())
    }

    /// Unconditional write: setting the current value again still deposits the event.
    pub(crate) fn set_transfers_paused(paused: bool) {
        TransfersPaused::<T>::put(paused);
        log::debug!(target: LOG_TARGET, "Transfers paused: {paused}");
        Self::deposit_event(if paused { Event::TransfersPaused } else { Event::TransfersUnpaused });
    }

    pub(crate) fn set_minting_paused(paused: bool) {
        MintingPaused::<T>::put(paused);
        log::debug!(target: LOG_TARGET, "Minting paused: {paused}");
        Self::deposit_event(if paused { Event::MintingPaused } else { Event::MintingUnpaused });
    }

    pub(crate) fn do_update_burn_rate(rate: u8) -> DispatchResult {
        ensure!(rate <= MAX_RATE, Error::<T>::RateTooHigh);
        BurnRate::<T>::put(rate);
        log::debug!(target: LOG_TARGET, "Burn rate set to {rate}%");
        Self::deposit_event(Event::BurnRateUpdated { rate });
        Ok(())
    }

    pub(crate) fn do_update_fee_rate(rate: u8) -> DispatchResult {
        ensure!(rate <= MAX_RATE, Error::<T>::RateTooHigh);
        FeeRate::<T>::put(rate);
        log::debug!(target: LOG_TARGET, "Fee rate set to {rate}%");
        Self::deposit_event(Event::FeeRateUpdated { rate });
        Ok(())
    }
}
