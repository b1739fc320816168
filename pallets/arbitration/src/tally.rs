use super::*;
use frame_support::{ensure, pallet_prelude::DispatchResult, traits::Get};
use sp_runtime::{
	traits::{CheckedAdd, Saturating, Zero},
	ArithmeticError,
};

impl<T: Config> Pallet<T> {
	pub fn vote(id: DisputeId, who: &T::AccountId) -> Option<VoteRecordOf<T>> {
		Votes::<T>::get(id, who)
	}

	pub(crate) fn do_cast_vote(
		who: T::AccountId,
		id: DisputeId,
		choice: u8,
		stake: BalanceOf<T>,
	) -> DispatchResult {
		let mut dispute = Disputes::<T>::get(id).ok_or(Error::<T>::NotFound)?;
		ensure!(Self::accepts_votes(&dispute), Error::<T>::VotingEnded);
		let arbitrator = Arbitrators::<T>::get(&who)
			.filter(|arbitrator| arbitrator.is_active)
			.ok_or(Error::<T>::Unauthorized)?;
		let choice = VoteChoice::try_from(choice).map_err(|_| Error::<T>::InvalidVote)?;
		ensure!(!stake.is_zero() && stake <= arbitrator.stake, Error::<T>::InsufficientStake);
		ensure!(!Votes::<T>::contains_key(id, &who), Error::<T>::InvalidVote);
		ensure!(!dispute.is_party(&who), Error::<T>::Unauthorized);
		ensure!(
			dispute.total_votes() < T::MaxVotesPerDispute::get(),
			Error::<T>::TooManyVotes
		);

		match choice {
			VoteChoice::ForUser => {
				dispute.stake_for_user =
					dispute.stake_for_user.checked_add(&stake).ok_or(ArithmeticError::Overflow)?;
				dispute.votes_for_user = dispute.votes_for_user.saturating_add(1);
			},
			VoteChoice::ForNode => {
				dispute.stake_for_node =
					dispute.stake_for_node.checked_add(&stake).ok_or(ArithmeticError::Overflow)?;
				dispute.votes_for_node = dispute.votes_for_node.saturating_add(1);
			},
		}

		let cast_at = frame_system::Pallet::<T>::block_number();
		Votes::<T>::insert(id, &who, VoteRecord { choice, stake, cast_at });
		Disputes::<T>::insert(id, dispute);
		Self::record_vote_cast(&who);

		log::debug!(target: LOG_TARGET, "{:?} voted {:?} on dispute {} with {:?}", who, choice, id, stake);
		Self::deposit_event(Event::VoteCast { id, arbitrator: who, choice, stake });
		Ok(())
	}

	pub(crate) fn do_resolve(id: DisputeId) -> DispatchResult {
		let mut dispute = Disputes::<T>::get(id).ok_or(Error::<T>::NotFound)?;
		ensure!(dispute.status.is_pending(), Error::<T>::AlreadyResolved);
		ensure!(
			frame_system::Pallet::<T>::block_number() > dispute.voting_end,
			Error::<T>::VotingEnded
		);
		ensure!(
			dispute.total_votes() >= T::QuorumThreshold::get(),
			Error::<T>::InvalidDispute
		);

		let winner = dispute.winning_side();
		// The refund is the only fallible step, so it goes before any write.
		match winner {
			VoteChoice::ForUser => {
				Self::transfer_from_custody(&dispute.complainant, dispute.refund_amount)?;
				T::NodePenalties::penalize(&dispute.accused_node);
			},
			VoteChoice::ForNode => T::NodePenalties::reward(&dispute.accused_node),
		}
		T::NodePenalties::on_dispute_closed(&dispute.accused_node);

		dispute.status = winner.outcome();
		let (stake_for_user, stake_for_node) = (dispute.stake_for_user, dispute.stake_for_node);
		Disputes::<T>::insert(id, dispute);

		let (rewarded, penalized) = Self::reconcile_arbitrators(id, winner);

		log::info!(
			target: LOG_TARGET,
			"dispute {} resolved {:?}, {:?} for user against {:?} for node",
			id,
			winner.outcome(),
			stake_for_user,
			stake_for_node
		);
		Self::deposit_event(Event::DisputeResolved {
			id,
			status: winner.outcome(),
			stake_for_user,
			stake_for_node,
		});
		Self::deposit_event(Event::ArbitratorsReconciled { id, rewarded, penalized });
		Ok(())
	}

	/// Returns how many voters sided with and against the outcome.
	fn reconcile_arbitrators(id: DisputeId, winner: VoteChoice) -> (u32, u32) {
		let mut rewarded = 0u32;
		let mut penalized = 0u32;
		for (arbitrator, vote) in Votes::<T>::iter_prefix(id) {
			let correct = vote.choice == winner;
			Self::record_vote_outcome(&arbitrator, correct);
			if correct {
				rewarded.saturating_inc();
			} else {
				penalized.saturating_inc();
			}
		}
		(rewarded, penalized)
	}
}
