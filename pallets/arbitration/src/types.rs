use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::RuntimeDebug;
use scale_info::TypeInfo;

pub use pallet_node_penalties::MAX_REPUTATION;

/// Sequential identifier of a dispute, starting at 1.
pub type DisputeId = u64;

/// What the complainant says went wrong.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum ComplaintType {
	/// The node could not serve a pinned file.
	FileUnavailable,
	/// The node served content that does not match the file hash.
	DataCorrupted,
	/// The node was offline for the paid service period.
	ServiceDowntime,
	/// The node charged more than the agreed price.
	Overcharged,
}

impl TryFrom<u8> for ComplaintType {
	type Error = ();

	fn try_from(code: u8) -> Result<Self, Self::Error> {
		match code {
			1 => Ok(ComplaintType::FileUnavailable),
			2 => Ok(ComplaintType::DataCorrupted),
			3 => Ok(ComplaintType::ServiceDowntime),
			4 => Ok(ComplaintType::Overcharged),
			_ => Err(()),
		}
	}
}

/// Lifecycle of a dispute. Every state except `Pending` is terminal.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum DisputeStatus {
	Pending,
	ResolvedForUser,
	ResolvedForNode,
	Cancelled,
}

impl DisputeStatus {
	pub fn is_pending(&self) -> bool {
		matches!(self, DisputeStatus::Pending)
	}
}

/// Side an arbitrator backs with their stake.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum VoteChoice {
	ForUser,
	ForNode,
}

impl VoteChoice {
	/// Terminal status reached when this side carries the stake-weighted vote.
	pub fn outcome(&self) -> DisputeStatus {
		match self {
			VoteChoice::ForUser => DisputeStatus::ResolvedForUser,
			VoteChoice::ForNode => DisputeStatus::ResolvedForNode,
		}
	}
}

impl TryFrom<u8> for VoteChoice {
	type Error = ();

	fn try_from(code: u8) -> Result<Self, Self::Error> {
		match code {
			1 => Ok(VoteChoice::ForUser),
			2 => Ok(VoteChoice::ForNode),
			_ => Err(()),
		}
	}
}

#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct ArbitratorInfo<Balance> {
	/// Balance held in custody for this arbitrator.
	pub stake: Balance,
	/// Reputation in `0..=MAX_REPUTATION`.
	pub reputation: u8,
	pub is_active: bool,
	pub total_votes: u32,
	/// Votes that matched the final outcome of their dispute.
	pub correct_votes: u32,
}

impl<Balance> ArbitratorInfo<Balance> {
	pub fn new(stake: Balance) -> Self {
		Self { stake, reputation: MAX_REPUTATION, is_active: true, total_votes: 0, correct_votes: 0 }
	}

	/// Applies `delta` and clamps the result to `0..=MAX_REPUTATION`.
	pub fn adjust_reputation(&mut self, delta: i16) {
		let adjusted = (self.reputation as i16).saturating_add(delta);
		self.reputation = adjusted.clamp(0, MAX_REPUTATION as i16) as u8;
	}
}

#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct Dispute<AccountId, Balance, BlockNumber, HashBytes, Text> {
	pub complainant: AccountId,
	pub accused_node: AccountId,
	pub complaint_type: ComplaintType,
	pub file_hash: HashBytes,
	pub description: Text,
	pub evidence_hash: HashBytes,
	pub status: DisputeStatus,
	pub created_at: BlockNumber,
	/// Last block at which votes are accepted.
	pub voting_end: BlockNumber,
	pub votes_for_user: u32,
	pub votes_for_node: u32,
	pub stake_for_user: Balance,
	pub stake_for_node: Balance,
	/// Paid out of custody to the complainant if the user side wins.
	pub refund_amount: Balance,
}

impl<AccountId, Balance, BlockNumber, HashBytes, Text>
	Dispute<AccountId, Balance, BlockNumber, HashBytes, Text>
{
	pub fn total_votes(&self) -> u32 {
		self.votes_for_user.saturating_add(self.votes_for_node)
	}

	/// Whether `who` is a party to the dispute and so cannot arbitrate it.
	pub fn is_party(&self, who: &AccountId) -> bool
	where
		AccountId: PartialEq,
	{
		&self.complainant == who || &self.accused_node == who
	}
}

impl<AccountId, Balance: PartialOrd, BlockNumber, HashBytes, Text>
	Dispute<AccountId, Balance, BlockNumber, HashBytes, Text>
{
	/// Stake-weighted winner. A tie goes to the node.
	pub fn winning_side(&self) -> VoteChoice {
		if self.stake_for_user > self.stake_for_node {
			VoteChoice::ForUser
		} else {
			VoteChoice::ForNode
		}
	}
}

#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct VoteRecord<Balance, BlockNumber> {
	pub choice: VoteChoice,
	pub stake: Balance,
	pub cast_at: BlockNumber,
}
