//! # Node Penalties Pallet
//!
//! ## Overview
//!
//! Keeps a per-node record of disputes, penalties and reputation for storage and
//! compute nodes accused through the arbitration pallet.
//!
//! The pallet has no dispatchables. It is driven through the [`NodePenaltyLedger`]
//! trait by the pallet that owns the dispute lifecycle, and it is the only writer
//! of its own storage.
//!
//! A node without a record reads as [`NodePenalty::default`]: no penalties, no
//! disputes and full reputation.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod traits;
pub use traits::NodePenaltyLedger;

mod types;
pub use types::*;

#[cfg(test)]
mod mock;


pub const LOG_TARGET: &str = "runtime::node-penalties";

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use frame_support::pallet_prelude::*;
	use frame_support::traits::StorageVersion;

	const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

	#[pallet::pallet]
	#[pallet::storage_version(STORAGE_VERSION)]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// Reputation a node loses when a dispute is resolved against it.
		#[pallet::constant]
		type PenaltyReputationLoss: Get<u8>;

		/// Reputation a node gains when a dispute is resolved in its favour.
		#[pallet::constant]
		type RewardReputationGain: Get<u8>;
	}

	/// Penalty record of every node that has ever been accused.
	#[pallet::storage]
	pub type NodeRecords<T: Config> =
		StorageMap<_, Blake2_128Concat, T::AccountId, NodePenalty, OptionQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// A dispute was filed against a node.
		DisputeOpened { node: T::AccountId, active_disputes: u32 },
		/// A dispute against a node was resolved or cancelled.
		DisputeClosed { node: T::AccountId, active_disputes: u32 },
		/// A node lost a dispute.
		NodePenalized { node: T::AccountId, penalty_count: u32, reputation: u8 },
		/// A node won a dispute.
		NodeRewarded { node: T::AccountId, reputation: u8 },
	}

	impl<T: Config> Pallet<T> {
		/// Record of `node`, falling back to the default record when absent.
		pub fn node_penalty(node: &T::AccountId) -> NodePenalty {
			NodeRecords::<T>::get(node).unwrap_or_default()
		}

		fn update(node: &T::AccountId, f: impl FnOnce(&mut NodePenalty)) -> NodePenalty {
			NodeRecords::<T>::mutate(node, |maybe_record| {
				let record = maybe_record.get_or_insert_with(NodePenalty::default);
				f(record);
				*record
			})
		}
	}

	impl<T: Config> NodePenaltyLedger<T::AccountId> for Pallet<T> {
		fn on_dispute_filed(node: &T::AccountId) {
			let record = Self::update(node, NodePenalty::open_dispute);
			log::debug!(
				target: LOG_TARGET,
				"dispute opened against {:?}, {} active",
				node,
				record.active_disputes
			);
			Self::deposit_event(Event::DisputeOpened {
				node: node.clone(),
				active_disputes: record.active_disputes,
			});
		}

		fn on_dispute_closed(node: &T::AccountId) {
			// Only ever paired with `on_dispute_filed`, so the record exists.
			let Some(record) = NodeRecords::<T>::mutate_exists(node, |maybe_record| {
				maybe_record.as_mut().map(|record| {
					record.close_dispute();
					*record
				})
			}) else {
				log::warn!(target: LOG_TARGET, "closing dispute for unknown node {:?}", node);
				return;
			};

			Self::deposit_event(Event::DisputeClosed {
				node: node.clone(),
				active_disputes: record.active_disputes,
			});
		}

		fn penalize(node: &T::AccountId) {
			let record = Self::update(node, |record| record.penalize(T::PenaltyReputationLoss::get()));
			log::debug!(
				target: LOG_TARGET,
				"node {:?} penalized, reputation {}",
				node,
				record.reputation
			);
			Self::deposit_event(Event::NodePenalized {
				node: node.clone(),
				penalty_count: record.penalty_count,
				reputation: record.reputation,
			});
		}

		fn reward(node: &T::AccountId) {
			let record = Self::update(node, |record| record.reward(T::RewardReputationGain::get()));
			Self::deposit_event(Event::NodeRewarded {
				node: node.clone(),
				reputation: record.reputation,
			});
		}

		fn penalty_record(node: &T::AccountId) -> NodePenalty {
			Self::node_penalty(node)
		}
	}
}
