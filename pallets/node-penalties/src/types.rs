use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::RuntimeDebug;
use scale_info::TypeInfo;

/// Upper bound of every reputation score kept by the arbitration pallets.
pub const MAX_REPUTATION: u8 = 100;

/// Dispute and penalty bookkeeping for a single service node.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct NodePenalty {
	/// Disputes lost by the node.
	pub penalty_count: u32,
	/// Disputes filed against the node that are still pending.
	pub active_disputes: u32,
	/// Disputes ever filed against the node.
	pub total_disputes: u32,
	/// Reputation in `0..=MAX_REPUTATION`.
	pub reputation: u8,
}

// A node nobody has complained about yet.
impl Default for NodePenalty {
	fn default() -> Self {
		Self { penalty_count: 0, active_disputes: 0, total_disputes: 0, reputation: MAX_REPUTATION }
	}
}

impl NodePenalty {
	pub fn open_dispute(&mut self) {
		self.active_disputes = self.active_disputes.saturating_add(1);
		self.total_disputes = self.total_disputes.saturating_add(1);
	}

	/// Floors at zero, a close without a matching open is a no-op.
	pub fn close_dispute(&mut self) {
		self.active_disputes = self.active_disputes.saturating_sub(1);
	}

	pub fn penalize(&mut self, loss: u8) {
		self.penalty_count = self.penalty_count.saturating_add(1);
		self.reputation = self.reputation.saturating_sub(loss);
	}

	pub fn reward(&mut self, gain: u8) {
		self.reputation = self.reputation.saturating_add(gain).min(MAX_REPUTATION);
	}
}
