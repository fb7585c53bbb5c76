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

//! Interface used by the modules that surround the ledger.

use crate::{
	math::SignedAmount,
	types::{CollateralParameter, CollateralType, GlobalParameter, Position},
};
use sp_core::U256;
use sp_runtime::DispatchResult;

/// Access to the CDP ledger for price feeds, liquidation, rate policy, shortfall coverage and
/// token bridges.
///
/// Every mutating method takes the account acting on the ledger and applies the same
/// authorization and invariant checks as the corresponding dispatchable. Each call either
/// commits in full or leaves no trace, also when invoked from within another pallet's call.
pub trait CdpLedger<AccountId> {
	/// Key identifying a collateral type.
	type CollateralTypeId;

	/// Set a ledger-wide parameter. `who` must be authorized.
	fn set_global_parameter(
		who: &AccountId,
		parameter: GlobalParameter,
		value: U256,
	) -> DispatchResult;

	/// Set a parameter of a registered collateral type. `who` must be authorized.
	fn set_collateral_parameter(
		who: &AccountId,
		collateral_type: Self::CollateralTypeId,
		parameter: CollateralParameter,
		value: U256,
	) -> DispatchResult;

	/// Reflect an external deposit (positive) or withdrawal (negative) of collateral.
	fn adjust_free_collateral(
		who: &AccountId,
		collateral_type: Self::CollateralTypeId,
		account: &AccountId,
		delta: SignedAmount,
	) -> DispatchResult;

	/// Move free collateral from `source` to `destination`. `who` must be allowed to modify
	/// `source`.
	fn transfer_free_collateral(
		who: &AccountId,
		collateral_type: Self::CollateralTypeId,
		source: &AccountId,
		destination: &AccountId,
		amount: U256,
	) -> DispatchResult;

	/// Move internal coin from `source` to `destination`. `who` must be allowed to modify
	/// `source`.
	fn transfer_internal_coin(
		who: &AccountId,
		source: &AccountId,
		destination: &AccountId,
		amount: U256,
	) -> DispatchResult;

	/// Burn `amount` of the coin of `who` against the same amount of its unbacked debt.
	fn settle_debt(who: &AccountId, amount: U256) -> DispatchResult;

	/// Seize collateral and debt from a position, moving the debt into unbacked debt.
	fn confiscate_position(
		who: &AccountId,
		collateral_type: Self::CollateralTypeId,
		position_owner: &AccountId,
		collateral_target: &AccountId,
		debt_target: &AccountId,
		delta_collateral: SignedAmount,
		delta_debt: SignedAmount,
	) -> DispatchResult;

	/// Mint coin that is not backed by collateral, recording the matching unbacked debt.
	fn create_unbacked_debt(
		who: &AccountId,
		debt_target: &AccountId,
		coin_target: &AccountId,
		amount: U256,
	) -> DispatchResult;

	/// Apply a precomputed change of the accumulated rate of a collateral type.
	fn apply_rate_multiplier(
		who: &AccountId,
		collateral_type: Self::CollateralTypeId,
		surplus_target: &AccountId,
		multiplier: SignedAmount,
	) -> DispatchResult;

	/// Current state of a collateral type. Unregistered types read as all zero.
	fn collateral_type(collateral_type: &Self::CollateralTypeId) -> CollateralType;

	/// Current state of a position. Positions never written read as all zero.
	fn position(collateral_type: &Self::CollateralTypeId, owner: &AccountId) -> Position;

	/// Whether the position's rate-adjusted debt exceeds its collateral valued at the
	/// liquidation price.
	fn can_be_liquidated(collateral_type: &Self::CollateralTypeId, owner: &AccountId) -> bool;
}
