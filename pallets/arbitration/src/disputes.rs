use super::*;
use frame_support::{
	ensure,
	pallet_prelude::{DispatchError, DispatchResult},
	traits::Get,
	BoundedVec,
};
use sp_runtime::{
	traits::{Saturating, Zero},
	ArithmeticError,
};
use sp_std::vec::Vec;

impl<T: Config> Pallet<T> {
	pub fn dispute(id: DisputeId) -> Option<DisputeOf<T>> {
		Disputes::<T>::get(id)
	}

	pub fn last_dispute_id() -> DisputeId {
		LastDisputeId::<T>::get()
	}

	/// Whether the dispute exists and still accepts votes.
	pub fn is_dispute_active(id: DisputeId) -> bool {
		Disputes::<T>::get(id).map_or(false, |dispute| Self::accepts_votes(&dispute))
	}

	pub(crate) fn accepts_votes(dispute: &DisputeOf<T>) -> bool {
		dispute.status.is_pending() &&
			frame_system::Pallet::<T>::block_number() <= dispute.voting_end
	}

	pub(crate) fn do_file_dispute(
		complainant: T::AccountId,
		accused_node: T::AccountId,
		complaint_type: u8,
		file_hash: Vec<u8>,
		description: Vec<u8>,
		evidence_hash: Vec<u8>,
		refund_amount: BalanceOf<T>,
	) -> Result<DisputeId, DispatchError> {
		let complaint_type =
			ComplaintType::try_from(complaint_type).map_err(|_| Error::<T>::InvalidDispute)?;
		ensure!(accused_node != complainant, Error::<T>::InvalidDispute);
		ensure!(refund_amount <= T::MaxRefundAmount::get(), Error::<T>::InvalidDispute);
		ensure!(!file_hash.is_empty() && !evidence_hash.is_empty(), Error::<T>::InvalidDispute);
		// The minimum counts characters, the storage bound counts bytes.
		let description_chars = sp_std::str::from_utf8(&description)
			.map(|text| text.chars().count())
			.map_err(|_| Error::<T>::InvalidDispute)?;
		ensure!(
			description_chars >= T::MinDescriptionLength::get() as usize,
			Error::<T>::InvalidDispute
		);
		let file_hash: BoundedVec<u8, T::MaxHashLength> =
			file_hash.try_into().map_err(|_| Error::<T>::InvalidDispute)?;
		let evidence_hash: BoundedVec<u8, T::MaxHashLength> =
			evidence_hash.try_into().map_err(|_| Error::<T>::InvalidDispute)?;
		let description: BoundedVec<u8, T::MaxDescriptionLength> =
			description.try_into().map_err(|_| Error::<T>::InvalidDispute)?;

		let id = LastDisputeId::<T>::get().checked_add(1).ok_or(ArithmeticError::Overflow)?;

		Self::transfer_to_custody(&complainant, T::FilingFee::get())?;

		let now = frame_system::Pallet::<T>::block_number();
		let voting_end = now.saturating_add(T::VotingPeriod::get());
		let dispute = Dispute {
			complainant: complainant.clone(),
			accused_node: accused_node.clone(),
			complaint_type,
			file_hash,
			description,
			evidence_hash,
			status: DisputeStatus::Pending,
			created_at: now,
			voting_end,
			votes_for_user: 0,
			votes_for_node: 0,
			stake_for_user: Zero::zero(),
			stake_for_node: Zero::zero(),
			refund_amount,
		};
		Disputes::<T>::insert(id, dispute);
		LastDisputeId::<T>::put(id);
		T::NodePenalties::on_dispute_filed(&accused_node);

		log::info!(
			target: LOG_TARGET,
			"dispute {} filed by {:?} against {:?}, voting until {:?}",
			id,
			complainant,
			accused_node,
			voting_end
		);
		Self::deposit_event(Event::DisputeFiled {
			id,
			complainant,
			accused_node,
			complaint_type,
			refund_amount,
			voting_end,
		});
		Ok(id)
	}

	pub(crate) fn do_cancel_dispute(who: T::AccountId, id: DisputeId) -> DispatchResult {
		let mut dispute = Disputes::<T>::get(id).ok_or(Error::<T>::NotFound)?;
		ensure!(dispute.complainant == who, Error::<T>::Unauthorized);
		ensure!(dispute.status.is_pending(), Error::<T>::AlreadyResolved);

		// The other half of the fee stays in custody.
		let refund = T::FilingFee::get() / BalanceOf::<T>::from(2u32);
		Self::transfer_from_custody(&who, refund)?;

		dispute.status = DisputeStatus::Cancelled;
		let accused_node = dispute.accused_node.clone();
		Disputes::<T>::insert(id, dispute);
		T::NodePenalties::on_dispute_closed(&accused_node);

		log::info!(target: LOG_TARGET, "dispute {} cancelled by its complainant", id);
		Self::deposit_event(Event::DisputeCancelled { id, complainant: who, refund });
		Ok(())
	}
}
