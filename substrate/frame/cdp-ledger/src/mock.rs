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


//! Test environment for the CDP ledger pallet.

use crate::{self as pallet_cdp_ledger, math, ParameterName, SignedAmount};
use frame_support::{construct_runtime, derive_impl};
use sp_core::U256;
use sp_runtime::BuildStorage;

pub type AccountId = u64;
pub type CollateralTypeId = [u8; 8];

/// Authorized in genesis.
pub const ADMIN: AccountId = 1;
pub const ALICE: AccountId = 2;
pub const BOB: AccountId = 3;
pub const CHARLIE: AccountId = 4;

/// Registered in genesis by default.
pub const T_A: CollateralTypeId = *b"T-A\0\0\0\0\0";
/// Never registered unless a test does so.
pub const T_B: CollateralTypeId = *b"T-B\0\0\0\0\0";

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
	pub enum Test {
		System: frame_system,
		Ledger: pallet_cdp_ledger,
	}
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
	type Block = Block;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct BenchmarkCollateralTypes;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<CollateralTypeId> for BenchmarkCollateralTypes {
	fn collateral_type_id(seed: u32) -> CollateralTypeId {
		let mut id = *b"BNCH\0\0\0\0";
		id[4..].copy_from_slice(&seed.to_be_bytes());
		id
	}
}

impl pallet_cdp_ledger::Config for Test {
	type CollateralTypeId = CollateralTypeId;
	type WeightInfo = ();
	#[cfg(feature = "runtime-benchmarks")]
	type BenchmarkHelper = BenchmarkCollateralTypes;
}

/// `n` whole units at wad precision.
pub fn wad(n: u128) -> U256 {
	U256::from(n) * math::wad()
}

/// `n` whole units at ray precision.
pub fn ray(n: u128) -> U256 {
	U256::from(n) * math::ray()
}

/// `n` whole units at rad precision.
pub fn rad(n: u128) -> U256 {
	U256::from(n) * math::rad()
}

/// `n` whole units at wad precision, signed.
pub fn delta(n: i128) -> SignedAmount {
	math::mul_signed(math::wad(), SignedAmount::from_i128(n)).unwrap()
}

pub fn name(name: &str) -> ParameterName {
	name.as_bytes().to_vec().try_into().unwrap()
}

pub struct ExtBuilder {
	global_debt_ceiling: U256,
	collateral_types: Vec<(CollateralTypeId, U256, U256, U256, U256)>,
}

impl Default for ExtBuilder {
	fn default() -> Self {
		Self {
			global_debt_ceiling: rad(10_000),
			// `T_A` at a price of one, generous ceiling and no floor.
			collateral_types: vec![(T_A, ray(1), ray(1), rad(10_000), U256::zero())],
		}
	}
}

impl ExtBuilder {
	pub fn global_debt_ceiling(mut self, ceiling: U256) -> Self {
		self.global_debt_ceiling = ceiling;
		self
	}

	pub fn no_collateral_types(mut self) -> Self {
		self.collateral_types.clear();
		self
	}

	/// Replace the genesis parameters of `T_A`.
	pub fn collateral(
		mut self,
		safety_price: U256,
		liquidation_price: U256,
		debt_ceiling: U256,
		debt_floor: U256,
	) -> Self {
		self.collateral_types =
			vec![(T_A, safety_price, liquidation_price, debt_ceiling, debt_floor)];
		self
	}

	pub fn build(self) -> sp_io::TestExternalities {
		let mut storage = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
		pallet_cdp_ledger::GenesisConfig::<Test> {
			authorized_accounts: vec![ADMIN],
			global_debt_ceiling: self.global_debt_ceiling,
			collateral_types: self.collateral_types,
		}
		.assimilate_storage(&mut storage)
		.unwrap();

		let mut ext: sp_io::TestExternalities = storage.into();
		ext.execute_with(|| System::set_block_number(1));
		ext
	}

	pub fn build_and_execute(self, test: impl FnOnce()) {
		self.build().execute_with(|| {
			test();
			Ledger::do_try_state().expect("ledger invariants hold after every test");
		})
	}
}

#[cfg(feature = "runtime-benchmarks")]
pub fn new_bench_ext() -> sp_io::TestExternalities {
	ExtBuilder::default().no_collateral_types().build()
}
