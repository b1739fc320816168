//! Benchmarking setup for pallet-arbitration
#![cfg(feature = "runtime-benchmarks")]

use super::*;
use crate::Pallet as Arbitration;
use frame_benchmarking::v2::*;
use frame_support::traits::{Currency, Get};
use frame_system::{pallet_prelude::BlockNumberFor, RawOrigin};
use sp_runtime::traits::Saturating;
use sp_std::{vec, vec::Vec};

const SEED: u32 = 0;

/// Create an account holding enough to stake, file and pay out refunds several times over
fn funded_account<T: Config>(name: &'static str, index: u32) -> T::AccountId {
	let who: T::AccountId = account(name, index, SEED);
	let balance = T::MaxArbitratorStake::get()
		.saturating_add(T::MaxRefundAmount::get())
		.saturating_add(T::FilingFee::get())
		.saturating_mul(10u32.into());
	T::Currency::make_free_balance_be(&who, balance);
	who
}

fn registered_arbitrator<T: Config>(index: u32) -> Result<T::AccountId, BenchmarkError> {
	let who = funded_account::<T>("arbitrator", index);
	Arbitration::<T>::do_register(who.clone(), T::MinArbitratorStake::get())?;
	Ok(who)
}

/// Longest accepted hashes and description, so that the stored dispute has its maximum size
fn dispute_input<T: Config>() -> (Vec<u8>, Vec<u8>, Vec<u8>) {
	let hash_len = T::MaxHashLength::get() as usize;
	(
		vec![0xab; hash_len],
		vec![b'd'; T::MaxDescriptionLength::get() as usize],
		vec![0xcd; hash_len],
	)
}

fn filed_dispute<T: Config>() -> Result<(T::AccountId, DisputeId), BenchmarkError> {
	let complainant = funded_account::<T>("complainant", 0);
	let node: T::AccountId = account("node", 0, SEED);
	let (file_hash, description, evidence_hash) = dispute_input::<T>();
	let id = Arbitration::<T>::do_file_dispute(
		complainant.clone(),
		node,
		1,
		file_hash,
		description,
		evidence_hash,
		T::MaxRefundAmount::get(),
	)?;
	Ok((complainant, id))
}

#[benchmarks]
mod benchmarks {
	use super::*;

	#[benchmark]
	fn register_arbitrator() -> Result<(), BenchmarkError> {
		let caller = funded_account::<T>("arbitrator", 0);
		let stake = T::MinArbitratorStake::get();

		#[extrinsic_call]
		_(RawOrigin::Signed(caller.clone()), stake);

		assert_eq!(Arbitrators::<T>::get(&caller).map(|info| info.stake), Some(stake));
		Ok(())
	}

	#[benchmark]
	fn top_up_stake() -> Result<(), BenchmarkError> {
		let caller = registered_arbitrator::<T>(0)?;
		let additional = T::MinArbitratorStake::get();

		#[extrinsic_call]
		_(RawOrigin::Signed(caller.clone()), additional);

		assert_eq!(
			Arbitrators::<T>::get(&caller).map(|info| info.stake),
			Some(T::MinArbitratorStake::get().saturating_add(additional))
		);
		Ok(())
	}

	#[benchmark]
	fn withdraw_arbitrator() -> Result<(), BenchmarkError> {
		let caller = registered_arbitrator::<T>(0)?;

		#[extrinsic_call]
		_(RawOrigin::Signed(caller.clone()));

		assert_eq!(Arbitrators::<T>::get(&caller).map(|info| info.is_active), Some(false));
		Ok(())
	}

	#[benchmark]
	fn file_dispute() -> Result<(), BenchmarkError> {
		let caller = funded_account::<T>("complainant", 0);
		let node: T::AccountId = account("node", 0, SEED);
		let (file_hash, description, evidence_hash) = dispute_input::<T>();

		#[extrinsic_call]
		_(
			RawOrigin::Signed(caller),
			node,
			1,
			file_hash,
			description,
			evidence_hash,
			T::MaxRefundAmount::get(),
		);

		assert_eq!(LastDisputeId::<T>::get(), 1);
		Ok(())
	}

	#[benchmark]
	fn cancel_dispute() -> Result<(), BenchmarkError> {
		let (complainant, id) = filed_dispute::<T>()?;

		#[extrinsic_call]
		_(RawOrigin::Signed(complainant), id);

		assert_eq!(
			Disputes::<T>::get(id).map(|dispute| dispute.status),
			Some(DisputeStatus::Cancelled)
		);
		Ok(())
	}

	#[benchmark]
	fn cast_vote() -> Result<(), BenchmarkError> {
		let (_, id) = filed_dispute::<T>()?;
		let caller = registered_arbitrator::<T>(0)?;

		#[extrinsic_call]
		_(RawOrigin::Signed(caller.clone()), id, 1, T::MinArbitratorStake::get());

		assert!(Votes::<T>::contains_key(id, &caller));
		Ok(())
	}

	// Every voter backs the user, so resolution also pays the refund.
	#[benchmark]
	fn resolve_dispute(
		v: Linear<{ T::QuorumThreshold::get() }, { T::MaxVotesPerDispute::get() }>,
	) -> Result<(), BenchmarkError> {
		let (_, id) = filed_dispute::<T>()?;
		for i in 0..v {
			let voter = registered_arbitrator::<T>(i)?;
			Arbitration::<T>::do_cast_vote(voter, id, 1, T::MinArbitratorStake::get())?;
		}
		let voting_end = Disputes::<T>::get(id)
			.map(|dispute| dispute.voting_end)
			.ok_or(BenchmarkError::Stop("dispute was not stored"))?;
		frame_system::Pallet::<T>::set_block_number(
			voting_end.saturating_add(BlockNumberFor::<T>::from(1u32)),
		);
		// Voter stakes alone may not cover the refund.
		let _ = T::Currency::deposit_creating(
			&Arbitration::<T>::custody_account(),
			T::MaxRefundAmount::get(),
		);
		let caller = funded_account::<T>("caller", 0);

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), id);

		assert_eq!(
			Disputes::<T>::get(id).map(|dispute| dispute.status),
			Some(DisputeStatus::ResolvedForUser)
		);
		Ok(())
	}

	impl_benchmark_test_suite!(Arbitration, crate::mock::new_test_ext(), crate::mock::Test);
}
