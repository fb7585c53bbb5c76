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

//! Records held by the ledger and the parameters that can be set on them.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{traits::ConstU32, BoundedVec};
use scale_info::TypeInfo;
use sp_core::U256;

/// Name of a governable parameter, as submitted to the dispatchables.
pub type ParameterName = BoundedVec<u8, ConstU32<32>>;

/// Risk and economic parameters of one collateral type, plus the raw debt issued against it.
#[derive(
	Encode, Decode, DecodeWithMemTracking, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, Debug, Default,
)]
pub struct CollateralType {
	/// Total raw debt (wad) generated by all positions of this type.
	pub debt_amount: U256,
	/// Interest multiplier (ray). Zero until the type is registered.
	pub accumulated_rate: U256,
	/// Collateral price (ray) with the safety margin applied; bounds new debt.
	pub safety_price: U256,
	/// Collateral price (ray) below which a position may be confiscated.
	pub liquidation_price: U256,
	/// Maximum rate-adjusted debt (rad) against this type.
	pub debt_ceiling: U256,
	/// Minimum rate-adjusted debt (rad) of a position that has any debt.
	pub debt_floor: U256,
}

impl CollateralType {
	/// Whether the type has been registered. Registration sets a non-zero accumulated rate.
	pub fn is_initialized(&self) -> bool {
		!self.accumulated_rate.is_zero()
	}
}

/// Collateral locked and debt generated by one owner for one collateral type.
#[derive(
	Encode, Decode, DecodeWithMemTracking, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, Debug, Default,
)]
pub struct Position {
	/// Pledged collateral (wad).
	pub locked_collateral: U256,
	/// Raw debt (wad), before scaling by the accumulated rate.
	pub generated_debt: U256,
}

impl Position {
	/// Whether the position holds neither collateral nor debt.
	pub fn is_empty(&self) -> bool {
		self.locked_collateral.is_zero() && self.generated_debt.is_zero()
	}
}

/// Parameters that apply to the whole ledger.
#[derive(
	Encode, Decode, DecodeWithMemTracking, MaxEncodedLen, TypeInfo, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum GlobalParameter {
	/// Cap (rad) on the total debt issued by the ledger.
	GlobalDebtCeiling,
}

impl GlobalParameter {
	/// The name under which the parameter is set.
	pub fn name(&self) -> &'static [u8] {
		match self {
			Self::GlobalDebtCeiling => b"global_debt_ceiling",
		}
	}
}

impl TryFrom<&[u8]> for GlobalParameter {
	type Error = ();

	fn try_from(name: &[u8]) -> Result<Self, Self::Error> {
		match name {
			b"global_debt_ceiling" => Ok(Self::GlobalDebtCeiling),
			_ => Err(()),
		}
	}
}

/// Parameters that apply to a single collateral type.
#[derive(
	Encode, Decode, DecodeWithMemTracking, MaxEncodedLen, TypeInfo, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum CollateralParameter {
	/// Collateral price (ray) used to check positions on adjustment.
	SafetyPrice,
	/// Collateral price (ray) used to decide whether a position can be liquidated.
	LiquidationPrice,
	/// Maximum rate-adjusted debt (rad) against the type.
	DebtCeiling,
	/// Minimum rate-adjusted debt (rad) of a position that has any debt.
	DebtFloor,
}

impl TryFrom<&[u8]> for CollateralParameter {
	type Error = ();

	fn try_from(name: &[u8]) -> Result<Self, Self::Error> {
		match name {
			b"safety_price" => Ok(Self::SafetyPrice),
			b"liquidation_price" => Ok(Self::LiquidationPrice),
			b"debt_ceiling" => Ok(Self::DebtCeiling),
			b"debt_floor" => Ok(Self::DebtFloor),
			_ => Err(()),
		}
	}
}

impl CollateralParameter {
	/// The name under which the parameter is set.
	pub fn name(&self) -> &'static [u8] {
		match self {
			Self::SafetyPrice => b"safety_price",
			Self::LiquidationPrice => b"liquidation_price",
			Self::DebtCeiling => b"debt_ceiling",
			Self::DebtFloor => b"debt_floor",
		}
	}

	pub(crate) fn apply(self, collateral: &mut CollateralType, value: U256) {
		match self {
			Self::SafetyPrice => collateral.safety_price = value,
			Self::LiquidationPrice => collateral.liquidation_price = value,
			Self::DebtCeiling => collateral.debt_ceiling = value,
			Self::DebtFloor => collateral.debt_floor = value,
		}
	}
}
