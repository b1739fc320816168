use crate::NodePenalty;

/// Bookkeeping the dispute engine performs against accused nodes.
pub trait NodePenaltyLedger<AccountId> {
	/// Creates the record on first use, then counts the new dispute as active.
	fn on_dispute_filed(node: &AccountId);

	/// Called exactly once per dispute, on resolution or cancellation.
	fn on_dispute_closed(node: &AccountId);

	/// The node lost a dispute.
	fn penalize(node: &AccountId);

	/// The node won a dispute.
	fn reward(node: &AccountId);

	/// Current record, or the default record if none exists.
	fn penalty_record(node: &AccountId) -> NodePenalty;
}
