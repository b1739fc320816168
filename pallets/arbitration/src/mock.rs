use crate as pallet_arbitration;
use frame_support::{
	derive_impl, parameter_types,
	traits::{ConstU32, ConstU64, ConstU8},
	PalletId,
};
use sp_runtime::BuildStorage;

pub type AccountId = u64;
pub type Balance = u64;

// Test configuration constants
pub const INITIAL_BALANCE: Balance = 10_000_000;
pub const MIN_STAKE: Balance = 1_000;
pub const MAX_STAKE: Balance = 1_000_000;
pub const FILING_FEE: Balance = 100;
pub const MAX_REFUND: Balance = 100_000;
pub const VOTING_PERIOD: u64 = 144;
pub const QUORUM: u32 = 3;
pub const MAX_VOTES: u32 = 16;

// Test accounts. Accounts 1 to 10 are endowed at genesis.
pub const USER: AccountId = 1;
pub const NODE: AccountId = 2;
pub const ARB_1: AccountId = 3;
pub const ARB_2: AccountId = 4;
pub const ARB_3: AccountId = 5;
pub const ARB_4: AccountId = 6;
pub const OUTSIDER: AccountId = 10;
/// Never endowed.
pub const PAUPER: AccountId = 99;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
	pub enum Test {
		System: frame_system,
		Balances: pallet_balances,
		NodePenalties: pallet_node_penalties,
		Arbitration: pallet_arbitration,
	}
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
	type Block = Block;
	type AccountData = pallet_balances::AccountData<Balance>;
}

parameter_types! {
	pub const ExistentialDeposit: Balance = 1;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
	type Balance = Balance;
	type AccountStore = System;
	type ExistentialDeposit = ExistentialDeposit;
}

impl pallet_node_penalties::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type PenaltyReputationLoss = ConstU8<10>;
	type RewardReputationGain = ConstU8<5>;
}

parameter_types! {
	pub const ArbitrationPalletId: PalletId = PalletId(*b"py/arbit");
}

impl pallet_arbitration::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Currency = Balances;
	type NodePenalties = NodePenalties;
	type PalletId = ArbitrationPalletId;
	type MinArbitratorStake = ConstU64<MIN_STAKE>;
	type MaxArbitratorStake = ConstU64<MAX_STAKE>;
	type FilingFee = ConstU64<FILING_FEE>;
	type MaxRefundAmount = ConstU64<MAX_REFUND>;
	type VotingPeriod = ConstU64<VOTING_PERIOD>;
	type QuorumThreshold = ConstU32<QUORUM>;
	type MinDescriptionLength = ConstU32<10>;
	type MaxDescriptionLength = ConstU32<256>;
	type MaxHashLength = ConstU32<64>;
	type MaxVotesPerDispute = ConstU32<MAX_VOTES>;
	type ArbitratorReputationReward = ConstU8<5>;
	type ArbitratorReputationPenalty = ConstU8<10>;
	type WeightInfo = ();
}

pub fn custody() -> AccountId {
	Arbitration::custody_account()
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
	let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

	pallet_balances::GenesisConfig::<Test> {
		balances: (1..=10).map(|who| (who, INITIAL_BALANCE)).collect(),
	}
	.assimilate_storage(&mut t)
	.unwrap();

	let mut ext = sp_io::TestExternalities::new(t);
	ext.execute_with(|| System::set_block_number(1));
	ext
}
