#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet_arbitration.
pub trait WeightInfo {
    fn register_arbitrator() -> Weight;
    fn top_up_stake() -> Weight;
    fn withdraw_arbitrator() -> Weight;
    fn file_dispute() -> Weight;
    fn cancel_dispute() -> Weight;
    fn cast_vote() -> Weight;
    fn resolve_dispute(v: u32) -> Weight;
}

/// Default weights for pallet_arbitration
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Arbitrators, ArbitratorCount, caller and custody accounts.
    fn register_arbitrator() -> Weight {
        Weight::from_parts(35_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(4))
    }

    fn top_up_stake() -> Weight {
        Weight::from_parts(30_000, 0)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }

    fn withdraw_arbitrator() -> Weight {
        Weight::from_parts(30_000, 0)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }

    // LastDisputeId, NodeRecords, caller and custody accounts.
    fn file_dispute() -> Weight {
        Weight::from_parts(45_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(5))
    }

    fn cancel_dispute() -> Weight {
        Weight::from_parts(35_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(4))
    }

    // Disputes, Arbitrators, Votes.
    fn cast_vote() -> Weight {
        Weight::from_parts(25_000, 0)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }

    // One vote and one arbitrator record per voter.
    fn resolve_dispute(v: u32) -> Weight {
        Weight::from_parts(50_000, 0)
            .saturating_add(Weight::from_parts(8_000, 0).saturating_mul(v as u64))
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(v as u64)))
            .saturating_add(T::DbWeight::get().writes(4))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(v as u64)))
    }
}

impl WeightInfo for () {
    fn register_arbitrator() -> Weight {
        Weight::from_parts(35_000, 0)
    }

    fn top_up_stake() -> Weight {
        Weight::from_parts(30_000, 0)
    }

    fn withdraw_arbitrator() -> Weight {
        Weight::from_parts(30_000, 0)
    }

    fn file_dispute() -> Weight {
        Weight::from_parts(45_000, 0)
    }

    fn cancel_dispute() -> Weight {
        Weight::from_parts(35_000, 0)
    }

    fn cast_vote() -> Weight {
        Weight::from_parts(25_000, 0)
    }

    fn resolve_dispute(v: u32) -> Weight {
        Weight::from_parts(50_000, 0)
            .saturating_add(Weight::from_parts(8_000, 0).saturating_mul(v as u64))
    }
}
