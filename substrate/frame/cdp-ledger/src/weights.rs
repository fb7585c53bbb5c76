// This file is part of Substrate.

// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Weights for `pallet_cdp_ledger`.
//!
//! Storage access counts are exact. Execution times are hand-written placeholder estimates and
//! have not been benchmarked on reference hardware.
// TODO: regenerate with `frame-omni-bencher` on reference hardware once the benchmarks in
// `benchmarking.rs` have been run.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use frame_support::{
	traits::Get,
	weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for `pallet_cdp_ledger`.
pub trait WeightInfo {
	fn grant_authorization() -> Weight;
	fn revoke_authorization() -> Weight;
	fn approve_delegate() -> Weight;
	fn revoke_delegate() -> Weight;
	fn register_collateral_type() -> Weight;
	fn set_global_parameter() -> Weight;
	fn set_collateral_parameter() -> Weight;
	fn disable_system() -> Weight;
	fn adjust_position() -> Weight;
	fn adjust_free_collateral() -> Weight;
	fn transfer_free_collateral() -> Weight;
	fn transfer_internal_coin() -> Weight;
	fn transfer_position() -> Weight;
	fn confiscate_position() -> Weight;
	fn settle_debt() -> Weight;
	fn create_unbacked_debt() -> Weight;
	fn apply_rate_multiplier() -> Weight;
}

/// Placeholder weights for `pallet_cdp_ledger`, pending a benchmark run.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:1), `CdpLedger::ContractEnabled` (r:1 w:0)
	fn grant_authorization() -> Weight {
		Weight::from_parts(12_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:1), `CdpLedger::ContractEnabled` (r:1 w:0)
	fn revoke_authorization() -> Weight {
		Weight::from_parts(12_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::Delegations` (r:0 w:1)
	fn approve_delegate() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::Delegations` (r:0 w:1)
	fn revoke_delegate() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:1)
	fn register_collateral_type() -> Weight {
		Weight::from_parts(14_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::ContractEnabled` (r:1 w:0), `CdpLedger::GlobalDebtCeiling` (r:0 w:1)
	fn set_global_parameter() -> Weight {
		Weight::from_parts(13_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::ContractEnabled` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:1)
	fn set_collateral_parameter() -> Weight {
		Weight::from_parts(16_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::ContractEnabled` (r:0 w:1)
	fn disable_system() -> Weight {
		Weight::from_parts(10_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(1_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::ContractEnabled` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:1), `CdpLedger::Positions` (r:1 w:1), `CdpLedger::GlobalDebt` (r:1 w:1), `CdpLedger::GlobalDebtCeiling` (r:1 w:0), `CdpLedger::Delegations` (r:3 w:0), `CdpLedger::TokenCollateral` (r:1 w:1), `CdpLedger::CoinBalance` (r:1 w:1)
	fn adjust_position() -> Weight {
		Weight::from_parts(48_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(10_u64))
			.saturating_add(T::DbWeight::get().writes(5_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:0), `CdpLedger::TokenCollateral` (r:1 w:1)
	fn adjust_free_collateral() -> Weight {
		Weight::from_parts(18_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::CollateralTypes` (r:1 w:0), `CdpLedger::Delegations` (r:1 w:0), `CdpLedger::TokenCollateral` (r:2 w:2)
	fn transfer_free_collateral() -> Weight {
		Weight::from_parts(22_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	/// Storage: `CdpLedger::Delegations` (r:1 w:0), `CdpLedger::CoinBalance` (r:2 w:2)
	fn transfer_internal_coin() -> Weight {
		Weight::from_parts(20_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	/// Storage: `CdpLedger::CollateralTypes` (r:1 w:0), `CdpLedger::Delegations` (r:2 w:0), `CdpLedger::Positions` (r:2 w:2)
	fn transfer_position() -> Weight {
		Weight::from_parts(34_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:1), `CdpLedger::Positions` (r:1 w:1), `CdpLedger::TokenCollateral` (r:1 w:1), `CdpLedger::DebtBalance` (r:1 w:1), `CdpLedger::GlobalUnbackedDebt` (r:1 w:1)
	fn confiscate_position() -> Weight {
		Weight::from_parts(36_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(6_u64))
			.saturating_add(T::DbWeight::get().writes(5_u64))
	}
	/// Storage: `CdpLedger::DebtBalance` (r:1 w:1), `CdpLedger::CoinBalance` (r:1 w:1), `CdpLedger::GlobalUnbackedDebt` (r:1 w:1), `CdpLedger::GlobalDebt` (r:1 w:1)
	fn settle_debt() -> Weight {
		Weight::from_parts(24_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(4_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::DebtBalance` (r:1 w:1), `CdpLedger::CoinBalance` (r:1 w:1), `CdpLedger::GlobalUnbackedDebt` (r:1 w:1), `CdpLedger::GlobalDebt` (r:1 w:1)
	fn create_unbacked_debt() -> Weight {
		Weight::from_parts(26_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(4_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::ContractEnabled` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:1), `CdpLedger::CoinBalance` (r:1 w:1), `CdpLedger::GlobalDebt` (r:1 w:1)
	fn apply_rate_multiplier() -> Weight {
		Weight::from_parts(27_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
}

// For backwards compatibility and tests.
impl WeightInfo for () {
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:1), `CdpLedger::ContractEnabled` (r:1 w:0)
	fn grant_authorization() -> Weight {
		Weight::from_parts(12_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:1), `CdpLedger::ContractEnabled` (r:1 w:0)
	fn revoke_authorization() -> Weight {
		Weight::from_parts(12_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::Delegations` (r:0 w:1)
	fn approve_delegate() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::Delegations` (r:0 w:1)
	fn revoke_delegate() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:1)
	fn register_collateral_type() -> Weight {
		Weight::from_parts(14_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::ContractEnabled` (r:1 w:0), `CdpLedger::GlobalDebtCeiling` (r:0 w:1)
	fn set_global_parameter() -> Weight {
		Weight::from_parts(13_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::ContractEnabled` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:1)
	fn set_collateral_parameter() -> Weight {
		Weight::from_parts(16_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::ContractEnabled` (r:0 w:1)
	fn disable_system() -> Weight {
		Weight::from_parts(10_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(1_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::ContractEnabled` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:1), `CdpLedger::Positions` (r:1 w:1), `CdpLedger::GlobalDebt` (r:1 w:1), `CdpLedger::GlobalDebtCeiling` (r:1 w:0), `CdpLedger::Delegations` (r:3 w:0), `CdpLedger::TokenCollateral` (r:1 w:1), `CdpLedger::CoinBalance` (r:1 w:1)
	fn adjust_position() -> Weight {
		Weight::from_parts(48_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(10_u64))
			.saturating_add(RocksDbWeight::get().writes(5_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:0), `CdpLedger::TokenCollateral` (r:1 w:1)
	fn adjust_free_collateral() -> Weight {
		Weight::from_parts(18_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	/// Storage: `CdpLedger::CollateralTypes` (r:1 w:0), `CdpLedger::Delegations` (r:1 w:0), `CdpLedger::TokenCollateral` (r:2 w:2)
	fn transfer_free_collateral() -> Weight {
		Weight::from_parts(22_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	/// Storage: `CdpLedger::Delegations` (r:1 w:0), `CdpLedger::CoinBalance` (r:2 w:2)
	fn transfer_internal_coin() -> Weight {
		Weight::from_parts(20_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	/// Storage: `CdpLedger::CollateralTypes` (r:1 w:0), `CdpLedger::Delegations` (r:2 w:0), `CdpLedger::Positions` (r:2 w:2)
	fn transfer_position() -> Weight {
		Weight::from_parts(34_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:1), `CdpLedger::Positions` (r:1 w:1), `CdpLedger::TokenCollateral` (r:1 w:1), `CdpLedger::DebtBalance` (r:1 w:1), `CdpLedger::GlobalUnbackedDebt` (r:1 w:1)
	fn confiscate_position() -> Weight {
		Weight::from_parts(36_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(6_u64))
			.saturating_add(RocksDbWeight::get().writes(5_u64))
	}
	/// Storage: `CdpLedger::DebtBalance` (r:1 w:1), `CdpLedger::CoinBalance` (r:1 w:1), `CdpLedger::GlobalUnbackedDebt` (r:1 w:1), `CdpLedger::GlobalDebt` (r:1 w:1)
	fn settle_debt() -> Weight {
		Weight::from_parts(24_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::DebtBalance` (r:1 w:1), `CdpLedger::CoinBalance` (r:1 w:1), `CdpLedger::GlobalUnbackedDebt` (r:1 w:1), `CdpLedger::GlobalDebt` (r:1 w:1)
	fn create_unbacked_debt() -> Weight {
		Weight::from_parts(26_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
	}
	/// Storage: `CdpLedger::AuthorizedAccounts` (r:1 w:0), `CdpLedger::ContractEnabled` (r:1 w:0), `CdpLedger::CollateralTypes` (r:1 w:1), `CdpLedger::CoinBalance` (r:1 w:1), `CdpLedger::GlobalDebt` (r:1 w:1)
	fn apply_rate_multiplier() -> Weight {
		Weight::from_parts(27_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
}
