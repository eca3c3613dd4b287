//! Owner and admin set.

use frame_support::{dispatch::DispatchResult, ensure};
use frame_system::{ensure_signed, pallet_prelude::OriginFor};
use sp_runtime::DispatchError;

use crate::{Admins, Config, Error, Event, Owner, Pallet, LOG_TARGET};

impl<T: Config> Pallet<T> {
    pub fn is_owner(who: &T::AccountId) -> bool {
        Owner::<T>::get().as_ref() == Some(who)
    }

    /// True for the owner and for every account in the admin set.
    pub fn is_admin(who: &T::AccountId) -> bool {
        Self::is_owner(who) || Admins::<T>::contains_key(who)
    }

    /// Resolve a signed origin to the owner account.
    pub(crate) fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Self::is_owner(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    /// Resolve a signed origin to an admin (or owner) account.
    pub(crate) fn ensure_admin(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Self::is_admin(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    pub(crate) fn do_add_admin(admin: T::AccountId) -> DispatchResult {
        ensure!(!Self::is_null(&admin), Error::<T>::InvalidAddress);

        // Re-adding an existing admin is accepted and announced again.
        Admins::<T>::insert(&admin, ());
        log::debug!(target: LOG_TARGET, "Admin added: {admin:?}");
        Self::deposit_event(Event::AdminAdded { admin });
        Ok(())
    }

    /// Remove `admin` from the admin set. The owner's implicit admin right cannot be
    /// removed.
    pub(crate) fn do_remove_admin(admin: T::AccountId) -> DispatchResult {
        ensure!(Admins::<T>::contains_key(&admin), Error::<T>::NotAnAdmin);

        Admins::<T>::remove(&admin);
        log::debug!(target: LOG_TARGET, "Admin removed: {admin:?}");
        Self::deposit_event(Event::AdminRemoved { admin });
        Ok(())
    }
}
