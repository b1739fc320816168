use super::*;
use frame_support::{
	ensure,
	pallet_prelude::DispatchResult,
	traits::{Currency, ExistenceRequirement, Get},
};
use sp_runtime::{
	traits::{AccountIdConversion, CheckedAdd, Zero},
	ArithmeticError,
};

impl<T: Config> Pallet<T> {
	/// Account holding every stake and filing fee.
	pub fn custody_account() -> T::AccountId {
		T::PalletId::get().into_account_truncating()
	}

	pub fn custody_balance() -> BalanceOf<T> {
		T::Currency::free_balance(&Self::custody_account())
	}

	pub fn arbitrator(who: &T::AccountId) -> Option<ArbitratorOf<T>> {
		Arbitrators::<T>::get(who)
	}

	pub fn arbitrator_count() -> u32 {
		ArbitratorCount::<T>::get()
	}

	pub(crate) fn do_register(who: T::AccountId, stake: BalanceOf<T>) -> DispatchResult {
		ensure!(
			stake >= T::MinArbitratorStake::get() && stake <= T::MaxArbitratorStake::get(),
			Error::<T>::InsufficientStake
		);
		ensure!(!Arbitrators::<T>::contains_key(&who), Error::<T>::AlreadyRegistered);
		let count = ArbitratorCount::<T>::get().checked_add(1).ok_or(ArithmeticError::Overflow)?;

		Self::transfer_to_custody(&who, stake)?;

		Arbitrators::<T>::insert(&who, ArbitratorInfo::new(stake));
		ArbitratorCount::<T>::put(count);

		log::info!(target: LOG_TARGET, "arbitrator {:?} registered with stake {:?}", who, stake);
		Self::deposit_event(Event::ArbitratorRegistered { who, stake });
		Ok(())
	}

	pub(crate) fn do_top_up(who: T::AccountId, additional_stake: BalanceOf<T>) -> DispatchResult {
		let mut arbitrator = Arbitrators::<T>::get(&who).ok_or(Error::<T>::NotFound)?;
		ensure!(arbitrator.is_active, Error::<T>::Unauthorized);
		ensure!(!additional_stake.is_zero(), Error::<T>::InsufficientStake);
		let total = arbitrator.stake.checked_add(&additional_stake).ok_or(ArithmeticError::Overflow)?;

		Self::transfer_to_custody(&who, additional_stake)?;

		arbitrator.stake = total;
		Arbitrators::<T>::insert(&who, arbitrator);

		Self::deposit_event(Event::StakeToppedUp { who, amount: additional_stake, total });
		Ok(())
	}

	pub(crate) fn do_withdraw(who: T::AccountId) -> DispatchResult {
		let mut arbitrator = Arbitrators::<T>::get(&who).ok_or(Error::<T>::NotFound)?;
		ensure!(arbitrator.is_active, Error::<T>::Unauthorized);
		let amount = arbitrator.stake;

		Self::transfer_from_custody(&who, amount)?;

		// The record stays so that reputation survives withdrawal.
		arbitrator.stake = Zero::zero();
		arbitrator.is_active = false;
		Arbitrators::<T>::insert(&who, arbitrator);

		log::info!(target: LOG_TARGET, "arbitrator {:?} withdrew {:?}", who, amount);
		Self::deposit_event(Event::ArbitratorWithdrawn { who, amount });
		Ok(())
	}

	pub(crate) fn record_vote_cast(who: &T::AccountId) {
		Arbitrators::<T>::mutate(who, |maybe_arbitrator| {
			if let Some(arbitrator) = maybe_arbitrator {
				arbitrator.total_votes = arbitrator.total_votes.saturating_add(1);
			}
		});
	}

	/// Applies the outcome of a resolved dispute to one of its voters.
	pub(crate) fn record_vote_outcome(who: &T::AccountId, correct: bool) {
		Arbitrators::<T>::mutate(who, |maybe_arbitrator| {
			if let Some(arbitrator) = maybe_arbitrator {
				if correct {
					arbitrator.correct_votes = arbitrator.correct_votes.saturating_add(1);
				}
			}
		});
		let delta = if correct {
			T::ArbitratorReputationReward::get() as i16
		} else {
			-(T::ArbitratorReputationPenalty::get() as i16)
		};
		Self::adjust_reputation(who, delta);
	}

	/// No-op for unknown accounts.
	pub fn adjust_reputation(who: &T::AccountId, delta: i16) {
		Arbitrators::<T>::mutate(who, |maybe_arbitrator| {
			if let Some(arbitrator) = maybe_arbitrator {
				arbitrator.adjust_reputation(delta);
			}
		});
	}

	pub(crate) fn transfer_to_custody(from: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
		T::Currency::transfer(
			from,
			&Self::custody_account(),
			amount,
			ExistenceRequirement::KeepAlive,
		)
		.map_err(|e| {
			log::debug!(target: LOG_TARGET, "transfer into custody from {:?} failed: {:?}", from, e);
			Error::<T>::TransferFailed
		})?;
		Ok(())
	}

	pub(crate) fn transfer_from_custody(to: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
		T::Currency::transfer(
			&Self::custody_account(),
			to,
			amount,
			ExistenceRequirement::AllowDeath,
		)
		.map_err(|e| {
			log::debug!(target: LOG_TARGET, "transfer out of custody to {:?} failed: {:?}", to, e);
			Error::<T>::TransferFailed
		})?;
		Ok(())
	}
}
