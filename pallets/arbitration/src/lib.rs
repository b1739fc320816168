//! # Arbitration Pallet
//!
//! ## Overview
//!
//! Resolves disputes between users and the storage or compute nodes serving them. A panel
//! of staked arbitrators votes on each dispute, committing part of their stake to one
//! side. Once the voting window has closed and a quorum has voted, the side carrying more
//! committed stake wins.
//!
//! ### Goals
//!
//! * Let anyone stake into custody and become an arbitrator.
//! * Let users file a dispute against a node for a fee and an optional refund.
//! * Weigh votes by committed stake, not by head count.
//! * Refund the user and penalize the node when the user wins, reward the node otherwise.
//! * Track how often each arbitrator sides with the final outcome.
//!
//! ## Interface
//!
//! ### Dispatchable Functions
//!
//! - `register_arbitrator`: Stake into custody and join the arbitrator registry.
//! - `top_up_stake`: Add to an active arbitrator's stake.
//! - `withdraw_arbitrator`: Retire from the registry and get the stake back.
//! - `file_dispute`: Open a dispute against a node, paying the filing fee.
//! - `cancel_dispute`: Complainant abandons a pending dispute for half the fee back.
//! - `cast_vote`: Arbitrator backs one side of an open dispute with part of their stake.
//! - `resolve_dispute`: Close a dispute whose voting window has ended and met quorum.
//!
//! Node reputation and dispute counters live in `pallet-node-penalties` and are only
//! touched through the [`NodePenaltyLedger`] trait.
//!
//! Please refer to the [`Call`] enum and its associated variants for documentation on each
//! function.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

mod types;
pub use types::*;

mod disputes;
mod registry;
mod tally;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub use pallet_node_penalties::NodePenaltyLedger;

pub const LOG_TARGET: &str = "runtime::arbitration";

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use frame_support::{
		pallet_prelude::*,
		traits::{Currency, StorageVersion},
		PalletId,
	};
	use frame_system::pallet_prelude::*;
	use sp_runtime::traits::Zero;
	use sp_std::vec::Vec;

	const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

	#[pallet::pallet]
	#[pallet::storage_version(STORAGE_VERSION)]
	pub struct Pallet<T>(_);

	pub type BalanceOf<T> =
		<<T as Config>::Currency as Currency<<T as frame_system::Config>::AccountId>>::Balance;

	pub type ArbitratorOf<T> = ArbitratorInfo<BalanceOf<T>>;

	pub type DisputeOf<T> = Dispute<
		<T as frame_system::Config>::AccountId,
		BalanceOf<T>,
		BlockNumberFor<T>,
		BoundedVec<u8, <T as Config>::MaxHashLength>,
		BoundedVec<u8, <T as Config>::MaxDescriptionLength>,
	>;

	pub type VoteRecordOf<T> = VoteRecord<BalanceOf<T>, BlockNumberFor<T>>;

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// Moves stakes, fees and refunds in and out of custody.
		type Currency: Currency<Self::AccountId>;

		/// Penalty and reputation bookkeeping for accused nodes.
		type NodePenalties: NodePenaltyLedger<Self::AccountId>;

		/// The pallet's id, used for deriving the custody account.
		#[pallet::constant]
		type PalletId: Get<PalletId>;

		/// Smallest stake accepted at registration.
		#[pallet::constant]
		type MinArbitratorStake: Get<BalanceOf<Self>>;

		/// Largest stake accepted at registration.
		#[pallet::constant]
		type MaxArbitratorStake: Get<BalanceOf<Self>>;

		/// Charged to the complainant on filing. Half of it is returned on cancellation.
		#[pallet::constant]
		type FilingFee: Get<BalanceOf<Self>>;

		#[pallet::constant]
		type MaxRefundAmount: Get<BalanceOf<Self>>;

		/// Number of blocks after filing during which votes are accepted.
		#[pallet::constant]
		type VotingPeriod: Get<BlockNumberFor<Self>>;

		/// Minimum number of votes before a dispute can be resolved.
		#[pallet::constant]
		type QuorumThreshold: Get<u32>;

		#[pallet::constant]
		type MinDescriptionLength: Get<u32>;

		#[pallet::constant]
		type MaxDescriptionLength: Get<u32>;

		/// Maximum length of a file or evidence hash.
		#[pallet::constant]
		type MaxHashLength: Get<u32>;

		/// Maximum number of arbitrators voting on a single dispute.
		#[pallet::constant]
		type MaxVotesPerDispute: Get<u32>;

		/// Reputation gained by an arbitrator who voted with the outcome.
		#[pallet::constant]
		type ArbitratorReputationReward: Get<u8>;

		/// Reputation lost by an arbitrator who voted against the outcome.
		#[pallet::constant]
		type ArbitratorReputationPenalty: Get<u8>;

		/// Weight information for extrinsics in this pallet.
		type WeightInfo: WeightInfo;
	}

	#[pallet::storage]
	pub type Arbitrators<T: Config> =
		StorageMap<_, Blake2_128Concat, T::AccountId, ArbitratorOf<T>, OptionQuery>;

	/// Registrations ever accepted. Not decremented on withdrawal.
	#[pallet::storage]
	pub type ArbitratorCount<T: Config> = StorageValue<_, u32, ValueQuery>;

	#[pallet::storage]
	pub type Disputes<T: Config> =
		StorageMap<_, Twox64Concat, DisputeId, DisputeOf<T>, OptionQuery>;

	/// Id of the most recently filed dispute, zero before the first filing.
	#[pallet::storage]
	pub type LastDisputeId<T: Config> = StorageValue<_, DisputeId, ValueQuery>;

	/// At most one vote per (dispute, arbitrator).
	#[pallet::storage]
	pub type Votes<T: Config> = StorageDoubleMap<
		_,
		Twox64Concat,
		DisputeId,
		Blake2_128Concat,
		T::AccountId,
		VoteRecordOf<T>,
		OptionQuery,
	>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// An account staked into custody and joined the registry.
		ArbitratorRegistered { who: T::AccountId, stake: BalanceOf<T> },
		/// An arbitrator added to their stake.
		StakeToppedUp { who: T::AccountId, amount: BalanceOf<T>, total: BalanceOf<T> },
		/// An arbitrator retired and got their stake back.
		ArbitratorWithdrawn { who: T::AccountId, amount: BalanceOf<T> },
		/// A dispute was filed and is open to voting until `voting_end`.
		DisputeFiled {
			id: DisputeId,
			complainant: T::AccountId,
			accused_node: T::AccountId,
			complaint_type: ComplaintType,
			refund_amount: BalanceOf<T>,
			voting_end: BlockNumberFor<T>,
		},
		/// The complainant abandoned a pending dispute.
		DisputeCancelled { id: DisputeId, complainant: T::AccountId, refund: BalanceOf<T> },
		VoteCast { id: DisputeId, arbitrator: T::AccountId, choice: VoteChoice, stake: BalanceOf<T> },
		/// A dispute reached its terminal outcome.
		DisputeResolved {
			id: DisputeId,
			status: DisputeStatus,
			stake_for_user: BalanceOf<T>,
			stake_for_node: BalanceOf<T>,
		},
		/// Voters on a resolved dispute had their reputation adjusted.
		ArbitratorsReconciled { id: DisputeId, rewarded: u32, penalized: u32 },
	}

	#[pallet::error]
	pub enum Error<T> {
		/// The dispute or arbitrator does not exist.
		NotFound,
		/// The caller lacks the required role or is a party to the dispute.
		Unauthorized,
		/// Malformed filing input, or the dispute has not reached quorum.
		InvalidDispute,
		/// The dispute is no longer pending.
		AlreadyResolved,
		/// Unknown vote choice, or the arbitrator already voted on this dispute.
		InvalidVote,
		/// The voting window does not fit the operation: closed for a vote, still open for
		/// resolution.
		VotingEnded,
		/// Stake outside the accepted range or above the arbitrator's balance.
		InsufficientStake,
		/// The currency rejected a transfer.
		TransferFailed,
		/// The caller already has a registry record.
		AlreadyRegistered,
		/// The dispute already has the maximum number of voters.
		TooManyVotes,
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
		fn integrity_test() {
			assert!(
				T::MinArbitratorStake::get() <= T::MaxArbitratorStake::get(),
				"MinArbitratorStake must not exceed MaxArbitratorStake"
			);
			assert!(T::QuorumThreshold::get() > 0, "QuorumThreshold must be positive");
			assert!(
				T::QuorumThreshold::get() <= T::MaxVotesPerDispute::get(),
				"QuorumThreshold must be reachable within MaxVotesPerDispute"
			);
			assert!(
				T::MinDescriptionLength::get() <= T::MaxDescriptionLength::get(),
				"MinDescriptionLength must not exceed MaxDescriptionLength"
			);
			assert!(!T::VotingPeriod::get().is_zero(), "VotingPeriod must be positive");
		}
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Stake `stake` into custody and become an arbitrator.
		///
		/// The origin must be Signed and must not already have a registry record.
		///
		/// Emits `ArbitratorRegistered` event when successful.
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::register_arbitrator())]
		pub fn register_arbitrator(origin: OriginFor<T>, stake: BalanceOf<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_register(who, stake)
		}

		/// Add `additional_stake` to the caller's stake.
		///
		/// The origin must be an active arbitrator.
		///
		/// Emits `StakeToppedUp` event when successful.
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::top_up_stake())]
		pub fn top_up_stake(
			origin: OriginFor<T>,
			additional_stake: BalanceOf<T>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_top_up(who, additional_stake)
		}

		/// Retire from the registry and get the full stake back.
		///
		/// Outstanding votes on pending disputes are not checked.
		///
		/// Emits `ArbitratorWithdrawn` event when successful.
		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::withdraw_arbitrator())]
		pub fn withdraw_arbitrator(origin: OriginFor<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_withdraw(who)
		}

		/// File a dispute against `accused_node`.
		///
		/// Parameters:
		/// - `complaint_type`: code of a [`ComplaintType`], starting at 1
		/// - `file_hash`: hash of the file the complaint is about
		/// - `description`: free text, at least `MinDescriptionLength` bytes
		/// - `evidence_hash`: hash of the off-chain evidence bundle
		/// - `refund_amount`: paid to the caller if the dispute is resolved in their favour
		///
		/// The filing fee moves into custody.
		///
		/// Emits `DisputeFiled` event when successful.
		#[pallet::call_index(3)]
		#[pallet::weight(T::WeightInfo::file_dispute())]
		pub fn file_dispute(
			origin: OriginFor<T>,
			accused_node: T::AccountId,
			complaint_type: u8,
			file_hash: Vec<u8>,
			description: Vec<u8>,
			evidence_hash: Vec<u8>,
			refund_amount: BalanceOf<T>,
		) -> DispatchResult {
			let complainant = ensure_signed(origin)?;
			Self::do_file_dispute(
				complainant,
				accused_node,
				complaint_type,
				file_hash,
				description,
				evidence_hash,
				refund_amount,
			)
			.map(|_| ())
		}

		/// Abandon a pending dispute. Only the complainant may call this, at any point
		/// while the dispute is pending.
		///
		/// Half of the filing fee is returned.
		///
		/// Emits `DisputeCancelled` event when successful.
		#[pallet::call_index(4)]
		#[pallet::weight(T::WeightInfo::cancel_dispute())]
		pub fn cancel_dispute(origin: OriginFor<T>, dispute_id: DisputeId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_cancel_dispute(who, dispute_id)
		}

		/// Back one side of an open dispute with `stake_to_use` of the caller's stake.
		///
		/// Parameters:
		/// - `choice`: code of a [`VoteChoice`], 1 for the user and 2 for the node
		///
		/// The origin must be an active arbitrator who is not a party to the dispute
		/// and has not voted on it yet.
		///
		/// Emits `VoteCast` event when successful.
		#[pallet::call_index(5)]
		#[pallet::weight(T::WeightInfo::cast_vote())]
		pub fn cast_vote(
			origin: OriginFor<T>,
			dispute_id: DisputeId,
			choice: u8,
			stake_to_use: BalanceOf<T>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_cast_vote(who, dispute_id, choice, stake_to_use)
		}

		/// Close a pending dispute whose voting window has ended and that met quorum.
		///
		/// Any signed account may trigger resolution.
		///
		/// Emits `DisputeResolved` and `ArbitratorsReconciled` events when successful.
		#[pallet::call_index(6)]
		#[pallet::weight(T::WeightInfo::resolve_dispute(T::MaxVotesPerDispute::get()))]
		pub fn resolve_dispute(origin: OriginFor<T>, dispute_id: DisputeId) -> DispatchResult {
			ensure_signed(origin)?;
			Self::do_resolve(dispute_id)
		}
	}
}
