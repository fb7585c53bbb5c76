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

//! # CDP Ledger Pallet
//!
//! The accounting core of a collateralized-debt-position (CDP) stablecoin.
//!
//! ## Pallet API
//!
//! See the [`pallet`] module for more information about the interfaces this pallet exposes,
//! including its configuration trait, dispatchables, storage items, events and errors.
//! Other pallets use the ledger through the [`CdpLedger`] trait.
//!
//! ## Overview
//!
//! The ledger is the single source of truth for collateral, debt and internal coin. It records,
//! per collateral type, how much debt has been issued, and per position how much collateral is
//! locked and how much debt was generated against it. Price feeds, liquidation auctions, interest
//! policy and token bridges live elsewhere and talk to the ledger through a narrow, authorization
//! gated interface.
//!
//! ### Key Concepts
//!
//! * **Scales**: amounts are [`U256`] fixed-point numbers. Collateral and raw debt use wad
//!   (`10^18`), rates and prices use ray (`10^27`), rate-adjusted debt and coin use rad (`10^45`).
//!   All arithmetic goes through the checked helpers in [`math`].
//!
//! * **[`CollateralType`]**: registered once through [`Pallet::register_collateral_type`], which
//!   sets its accumulated rate to one ray. A type with a zero rate is not registered.
//!
//! * **[`Position`]**: locked collateral and generated debt of one owner for one collateral type.
//!   Positions have no constructor; a position never written reads as all zero.
//!
//! * **Free collateral**: collateral owned by an account but not locked in a position
//!   ([`TokenCollateral`]).
//!
//! * **Internal coin** ([`CoinBalance`]) and **unbacked debt** ([`DebtBalance`]): rad balances
//!   per account. Unbacked debt records system losses, not user debt.
//!
//! * **Authorized accounts**: accounts allowed to run administrative operations
//!   ([`AuthorizedAccounts`]).
//!
//! * **Delegation**: an owner may allow other accounts to modify its positions and balances
//!   ([`Delegations`]).
//!
//! ### Position Adjustment
//!
//! [`Pallet::adjust_position`] is the only way for users to create or destroy debt. A single call
//! moves value between up to three principals: the position owner, the account whose free
//! collateral is locked or released, and the account that receives or repays coin. Each of them
//! has to consent only when the call could harm them, so anyone can top up collateral or repay
//! debt on behalf of an owner.
//!
//! The checks run in a fixed order and each has its own error:
//!
//! 1. the ledger is enabled ([`Error::SystemDisabled`]),
//! 2. the collateral type is registered ([`Error::CollateralTypeNotInitialized`]),
//! 3. new debt stays below the type and global ceilings ([`Error::DebtCeilingExceeded`]),
//! 4. a risk increasing change leaves the position safe ([`Error::PositionUnsafe`]),
//! 5. the owner consents to risk increasing changes ([`Error::NotAllowedToModifyPosition`]),
//! 6. the collateral source consents to locking its collateral
//!    ([`Error::NotAllowedToModifyCollateralSource`]),
//! 7. the debt recipient consents to repaying with its coin
//!    ([`Error::NotAllowedToModifyDebtRecipient`]),
//! 8. the resulting debt is zero or above the debt floor ([`Error::DustPosition`]).
//!
//! ### Atomicity
//!
//! Every operation computes its complete new state before writing anything, and dispatchables
//! run in a storage transaction. An operation either commits all of its writes and deposits
//! exactly one event, or fails with a single error and changes nothing. The [`CdpLedger`] trait
//! methods open their own storage layer, so the same holds when they are called from inside
//! another pallet's dispatchable.
//!
//! ### Invariants
//!
//! The following hold after every committed operation and are checked by `try_state`:
//!
//! * [`GlobalDebt`] equals the sum of all [`CoinBalance`]s.
//! * [`GlobalUnbackedDebt`] equals the sum of all [`DebtBalance`]s.
//! * [`GlobalDebt`] equals the rate-adjusted debt of all collateral types plus
//!   [`GlobalUnbackedDebt`].
//! * The debt amount of a collateral type equals the debt generated by its positions.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod math;
pub mod traits;
pub mod types;
pub mod weights;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[cfg(test)]
mod mock;


pub use math::SignedAmount;
pub use pallet::*;
pub use traits::CdpLedger;
pub use types::{CollateralParameter, CollateralType, GlobalParameter, ParameterName, Position};
pub use weights::WeightInfo;

use frame_support::{dispatch::DispatchResult, ensure, storage::with_storage_layer};
use sp_core::U256;
use sp_runtime::{ArithmeticError, DispatchError};

/// Log target for this pallet.
pub(crate) const LOG_TARGET: &str = "runtime::cdp-ledger";

/// Helper trait for benchmarking setup.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<CollateralTypeId> {
	/// A distinct collateral type identifier for every `seed`.
	fn collateral_type_id(seed: u32) -> CollateralTypeId;
}

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use alloc::vec::Vec;
	use frame_support::{pallet_prelude::*, DefaultNoBound};
	use frame_system::pallet_prelude::*;

	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// Identifier of a collateral type, typically a short symbolic name.
		type CollateralTypeId: Parameter + Member + MaxEncodedLen + MaybeSerializeDeserialize;

		/// A type representing the weights required by the dispatchables of this pallet.
		type WeightInfo: WeightInfo;

		/// Helper type for benchmarking.
		#[cfg(feature = "runtime-benchmarks")]
		type BenchmarkHelper: BenchmarkHelper<Self::CollateralTypeId>;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	/// Accounts allowed to run administrative operations.
	#[pallet::storage]
	pub type AuthorizedAccounts<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, ()>;

	/// `(owner, delegate)` pairs: `delegate` may modify the positions and balances of `owner`.
	#[pallet::storage]
	pub type Delegations<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		Blake2_128Concat,
		T::AccountId,
		(),
	>;

	/// Registered collateral types. Unregistered identifiers read as all zero.
	#[pallet::storage]
	pub type CollateralTypes<T: Config> =
		StorageMap<_, Blake2_128Concat, T::CollateralTypeId, CollateralType, ValueQuery>;

	/// Positions by collateral type and owner.
	#[pallet::storage]
	pub type Positions<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		T::CollateralTypeId,
		Blake2_128Concat,
		T::AccountId,
		Position,
		ValueQuery,
	>;

	/// Free collateral (wad) by collateral type and account.
	#[pallet::storage]
	pub type TokenCollateral<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		T::CollateralTypeId,
		Blake2_128Concat,
		T::AccountId,
		U256,
		ValueQuery,
	>;

	/// Internal coin (rad) by account.
	#[pallet::storage]
	pub type CoinBalance<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, U256, ValueQuery>;

	/// Unbacked debt (rad) attributed to an account.
	#[pallet::storage]
	pub type DebtBalance<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, U256, ValueQuery>;

	/// Total debt issued (rad), backed or not.
	#[pallet::storage]
	pub type GlobalDebt<T: Config> = StorageValue<_, U256, ValueQuery>;

	/// Total unbacked debt (rad).
	#[pallet::storage]
	pub type GlobalUnbackedDebt<T: Config> = StorageValue<_, U256, ValueQuery>;

	/// Cap (rad) on [`GlobalDebt`] for operations that issue new debt.
	#[pallet::storage]
	pub type GlobalDebtCeiling<T: Config> = StorageValue<_, U256, ValueQuery>;

	#[pallet::type_value]
	pub fn DefaultContractEnabled<T: Config>() -> bool {
		true
	}

	/// Whether administrative operations and position adjustments are allowed.
	///
	/// Cleared once by [`Pallet::disable_system`] and never set again.
	#[pallet::storage]
	pub type ContractEnabled<T: Config> =
		StorageValue<_, bool, ValueQuery, DefaultContractEnabled<T>>;

	#[pallet::genesis_config]
	#[derive(DefaultNoBound)]
	pub struct GenesisConfig<T: Config> {
		/// Accounts allowed to run administrative operations.
		pub authorized_accounts: Vec<T::AccountId>,
		/// Initial global debt ceiling (rad).
		pub global_debt_ceiling: U256,
		/// Collateral types to register:
		/// `(id, safety_price, liquidation_price, debt_ceiling, debt_floor)`.
		pub collateral_types: Vec<(T::CollateralTypeId, U256, U256, U256, U256)>,
	}

	#[pallet::genesis_build]
	impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
		fn build(&self) {
			for account in &self.authorized_accounts {
				AuthorizedAccounts::<T>::insert(account, ());
			}
			GlobalDebtCeiling::<T>::put(self.global_debt_ceiling);
			for (id, safety_price, liquidation_price, debt_ceiling, debt_floor) in
				&self.collateral_types
			{
				assert!(
					!CollateralTypes::<T>::get(id).is_initialized(),
					"collateral type registered twice in genesis"
				);
				CollateralTypes::<T>::insert(
					id,
					CollateralType {
						debt_amount: U256::zero(),
						accumulated_rate: math::ray(),
						safety_price: *safety_price,
						liquidation_price: *liquidation_price,
						debt_ceiling: *debt_ceiling,
						debt_floor: *debt_floor,
					},
				);
			}
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// An account was added to the authorized accounts.
		AuthorizationGranted { account: T::AccountId },
		/// An account was removed from the authorized accounts.
		AuthorizationRevoked { account: T::AccountId },
		/// `owner` allowed `delegate` to modify its positions and balances.
		DelegateApproved { owner: T::AccountId, delegate: T::AccountId },
		/// `owner` withdrew the rights of `delegate`.
		DelegateRevoked { owner: T::AccountId, delegate: T::AccountId },
		/// A collateral type was registered with an accumulated rate of one ray.
		CollateralTypeRegistered { collateral_type: T::CollateralTypeId },
		/// A ledger-wide parameter was updated.
		GlobalParameterSet { parameter: GlobalParameter, value: U256 },
		/// A parameter of a collateral type was updated.
		CollateralParameterSet {
			collateral_type: T::CollateralTypeId,
			parameter: CollateralParameter,
			value: U256,
		},
		/// The ledger was permanently disabled.
		SystemDisabled,
		/// Free collateral of an account was adjusted by an authorized account.
		FreeCollateralAdjusted {
			collateral_type: T::CollateralTypeId,
			account: T::AccountId,
			delta: SignedAmount,
			balance: U256,
		},
		/// Free collateral moved between two accounts.
		FreeCollateralTransferred {
			collateral_type: T::CollateralTypeId,
			source: T::AccountId,
			destination: T::AccountId,
			amount: U256,
			source_balance: U256,
			destination_balance: U256,
		},
		/// Internal coin moved between two accounts.
		InternalCoinTransferred {
			source: T::AccountId,
			destination: T::AccountId,
			amount: U256,
			source_balance: U256,
			destination_balance: U256,
		},
		/// Collateral and debt of a position were adjusted.
		PositionAdjusted {
			collateral_type: T::CollateralTypeId,
			position_owner: T::AccountId,
			collateral_source: T::AccountId,
			debt_recipient: T::AccountId,
			delta_collateral: SignedAmount,
			delta_debt: SignedAmount,
			/// Locked collateral of the position after the adjustment.
			locked_collateral: U256,
			/// Generated debt of the position after the adjustment.
			generated_debt: U256,
			/// Debt amount of the collateral type after the adjustment.
			debt_amount: U256,
			/// Global debt after the adjustment.
			global_debt: U256,
		},
		/// Collateral and debt moved from one position to another.
		PositionTransferred {
			collateral_type: T::CollateralTypeId,
			source: T::AccountId,
			destination: T::AccountId,
			delta_collateral: SignedAmount,
			delta_debt: SignedAmount,
			source_position: Position,
			destination_position: Position,
		},
		/// Collateral and debt were seized from a position.
		PositionConfiscated {
			collateral_type: T::CollateralTypeId,
			position_owner: T::AccountId,
			collateral_target: T::AccountId,
			debt_target: T::AccountId,
			delta_collateral: SignedAmount,
			delta_debt: SignedAmount,
			locked_collateral: U256,
			generated_debt: U256,
			global_unbacked_debt: U256,
		},
		/// Internal coin was netted against unbacked debt.
		DebtSettled {
			account: T::AccountId,
			amount: U256,
			coin_balance: U256,
			debt_balance: U256,
			global_debt: U256,
			global_unbacked_debt: U256,
		},
		/// Coin was minted against unbacked debt.
		UnbackedDebtCreated {
			debt_target: T::AccountId,
			coin_target: T::AccountId,
			amount: U256,
			debt_balance: U256,
			coin_balance: U256,
			global_debt: U256,
			global_unbacked_debt: U256,
		},
		/// The accumulated rate of a collateral type changed and the surplus was credited.
		RateMultiplierApplied {
			collateral_type: T::CollateralTypeId,
			surplus_target: T::AccountId,
			multiplier: SignedAmount,
			accumulated_rate: U256,
			surplus: SignedAmount,
			global_debt: U256,
		},
	}

	#[pallet::error]
	pub enum Error<T> {
		/// The caller is not an authorized account.
		NotAuthorized,
		/// The caller may not increase the risk of this position.
		NotAllowedToModifyPosition,
		/// The caller may not lock the free collateral of the collateral source.
		NotAllowedToModifyCollateralSource,
		/// The caller may not use the coin of the debt recipient to repay debt.
		NotAllowedToModifyDebtRecipient,
		/// The caller may not move funds out of the source account or position.
		NotAllowedToModifySource,
		/// The caller may not move funds into the destination position.
		NotAllowedToModifyDestination,
		/// The ledger has been disabled.
		SystemDisabled,
		/// The collateral type has not been registered.
		CollateralTypeNotInitialized,
		/// The collateral type is already registered.
		CollateralTypeAlreadyInitialized,
		/// No parameter with the given name exists.
		UnknownParameter,
		/// New debt would exceed the collateral type or global debt ceiling.
		DebtCeilingExceeded,
		/// The position's debt would exceed its collateral valued at the safety price.
		PositionUnsafe,
		/// The position's debt would be non-zero but below the debt floor.
		DustPosition,
		/// The source position would be left unsafe.
		SourcePositionUnsafe,
		/// The destination position would be left unsafe.
		DestinationPositionUnsafe,
		/// The source position would be left with dust debt.
		SourceDustPosition,
		/// The destination position would be left with dust debt.
		DestinationDustPosition,
		/// An account balance is too low for the requested debit.
		InsufficientBalance,
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
		#[cfg(feature = "try-runtime")]
		fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
			Self::do_try_state()
		}
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Add `account` to the authorized accounts.
		///
		/// The caller must be authorized and the ledger enabled. Granting twice is not an error.
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::grant_authorization())]
		pub fn grant_authorization(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_grant_authorization(&who, account)
		}

		/// Remove `account` from the authorized accounts.
		///
		/// The caller must be authorized and the ledger enabled. Revoking twice is not an error.
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::revoke_authorization())]
		pub fn revoke_authorization(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_revoke_authorization(&who, account)
		}

		/// Allow `delegate` to modify the caller's positions and balances.
		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::approve_delegate())]
		pub fn approve_delegate(origin: OriginFor<T>, delegate: T::AccountId) -> DispatchResult {
			let owner = ensure_signed(origin)?;
			Delegations::<T>::insert(&owner, &delegate, ());
			Self::deposit_event(Event::DelegateApproved { owner, delegate });
			Ok(())
		}

		/// Withdraw the rights granted to `delegate` by the caller.
		#[pallet::call_index(3)]
		#[pallet::weight(T::WeightInfo::revoke_delegate())]
		pub fn revoke_delegate(origin: OriginFor<T>, delegate: T::AccountId) -> DispatchResult {
			let owner = ensure_signed(origin)?;
			Delegations::<T>::remove(&owner, &delegate);
			Self::deposit_event(Event::DelegateRevoked { owner, delegate });
			Ok(())
		}

		/// Register a new collateral type with an accumulated rate of one ray and all other
		/// fields zero.
		///
		/// ## Errors
		///
		/// - [`Error::NotAuthorized`]: the caller is not authorized.
		/// - [`Error::CollateralTypeAlreadyInitialized`]: the type is already registered.
		#[pallet::call_index(4)]
		#[pallet::weight(T::WeightInfo::register_collateral_type())]
		pub fn register_collateral_type(
			origin: OriginFor<T>,
			collateral_type: T::CollateralTypeId,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_register_collateral_type(&who, collateral_type)
		}

		/// Set a ledger-wide parameter by name. The only recognized name is
		/// `global_debt_ceiling`.
		#[pallet::call_index(5)]
		#[pallet::weight(T::WeightInfo::set_global_parameter())]
		pub fn set_global_parameter(
			origin: OriginFor<T>,
			name: ParameterName,
			value: U256,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_set_global_parameter(&who, &name, value)
		}

		/// Set a parameter of a registered collateral type by name. Recognized names are
		/// `safety_price`, `liquidation_price`, `debt_ceiling` and `debt_floor`.
		#[pallet::call_index(6)]
		#[pallet::weight(T::WeightInfo::set_collateral_parameter())]
		pub fn set_collateral_parameter(
			origin: OriginFor<T>,
			collateral_type: T::CollateralTypeId,
			name: ParameterName,
			value: U256,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_set_collateral_parameter(&who, collateral_type, &name, value)
		}

		/// Permanently disable the ledger.
		#[pallet::call_index(7)]
		#[pallet::weight(T::WeightInfo::disable_system())]
		pub fn disable_system(origin: OriginFor<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_disable_system(&who)
		}

		/// Lock or release collateral and generate or repay debt on a position.
		///
		/// ## Details
		///
		/// `delta_collateral` is taken from (or returned to) the free collateral of
		/// `collateral_source`; `delta_debt` scaled by the accumulated rate is credited to (or
		/// taken from) the coin balance of `debt_recipient`. See the
		/// [crate level docs](crate#position-adjustment) for the checks and their order.
		#[pallet::call_index(8)]
		#[pallet::weight(T::WeightInfo::adjust_position())]
		pub fn adjust_position(
			origin: OriginFor<T>,
			collateral_type: T::CollateralTypeId,
			position_owner: T::AccountId,
			collateral_source: T::AccountId,
			debt_recipient: T::AccountId,
			delta_collateral: SignedAmount,
			delta_debt: SignedAmount,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_adjust_position(
				&who,
				collateral_type,
				position_owner,
				collateral_source,
				debt_recipient,
				delta_collateral,
				delta_debt,
			)
		}

		/// Add `delta` to the free collateral of `account`. Authorized accounts only.
		#[pallet::call_index(9)]
		#[pallet::weight(T::WeightInfo::adjust_free_collateral())]
		pub fn adjust_free_collateral(
			origin: OriginFor<T>,
			collateral_type: T::CollateralTypeId,
			account: T::AccountId,
			delta: SignedAmount,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_adjust_free_collateral(&who, collateral_type, account, delta)
		}

		/// Move free collateral from `source` to `destination`.
		#[pallet::call_index(10)]
		#[pallet::weight(T::WeightInfo::transfer_free_collateral())]
		pub fn transfer_free_collateral(
			origin: OriginFor<T>,
			collateral_type: T::CollateralTypeId,
			source: T::AccountId,
			destination: T::AccountId,
			amount: U256,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_transfer_free_collateral(&who, collateral_type, source, destination, amount)
		}

		/// Move internal coin from `source` to `destination`.
		#[pallet::call_index(11)]
		#[pallet::weight(T::WeightInfo::transfer_internal_coin())]
		pub fn transfer_internal_coin(
			origin: OriginFor<T>,
			source: T::AccountId,
			destination: T::AccountId,
			amount: U256,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_transfer_internal_coin(&who, source, destination, amount)
		}

		/// Move collateral and debt from the `source` position to the `destination` position of
		/// the same collateral type. Both owners must consent and both positions must end up
		/// safe and free of dust.
		#[pallet::call_index(12)]
		#[pallet::weight(T::WeightInfo::transfer_position())]
		pub fn transfer_position(
			origin: OriginFor<T>,
			collateral_type: T::CollateralTypeId,
			source: T::AccountId,
			destination: T::AccountId,
			delta_collateral: SignedAmount,
			delta_debt: SignedAmount,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_transfer_position(
				&who,
				collateral_type,
				source,
				destination,
				delta_collateral,
				delta_debt,
			)
		}

		/// Seize collateral and debt from a position without any safety, ceiling or consent
		/// check. Authorized accounts only.
		///
		/// The seized collateral is credited to `collateral_target`; the seized debt, scaled by
		/// the accumulated rate, becomes unbacked debt of `debt_target`.
		#[pallet::call_index(13)]
		#[pallet::weight(T::WeightInfo::confiscate_position())]
		pub fn confiscate_position(
			origin: OriginFor<T>,
			collateral_type: T::CollateralTypeId,
			position_owner: T::AccountId,
			collateral_target: T::AccountId,
			debt_target: T::AccountId,
			delta_collateral: SignedAmount,
			delta_debt: SignedAmount,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_confiscate_position(
				&who,
				collateral_type,
				position_owner,
				collateral_target,
				debt_target,
				delta_collateral,
				delta_debt,
			)
		}

		/// Burn `amount` of the caller's coin against the same amount of its unbacked debt.
		#[pallet::call_index(14)]
		#[pallet::weight(T::WeightInfo::settle_debt())]
		pub fn settle_debt(origin: OriginFor<T>, amount: U256) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_settle_debt(who, amount)
		}

		/// Mint `amount` of coin to `coin_target`, recording the same amount of unbacked debt
		/// against `debt_target`. Authorized accounts only.
		#[pallet::call_index(15)]
		#[pallet::weight(T::WeightInfo::create_unbacked_debt())]
		pub fn create_unbacked_debt(
			origin: OriginFor<T>,
			debt_target: T::AccountId,
			coin_target: T::AccountId,
			amount: U256,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_create_unbacked_debt(&who, debt_target, coin_target, amount)
		}

		/// Add `multiplier` to the accumulated rate of a collateral type and credit the
		/// resulting surplus to `surplus_target`. Authorized accounts only.
		#[pallet::call_index(16)]
		#[pallet::weight(T::WeightInfo::apply_rate_multiplier())]
		pub fn apply_rate_multiplier(
			origin: OriginFor<T>,
			collateral_type: T::CollateralTypeId,
			surplus_target: T::AccountId,
			multiplier: SignedAmount,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_apply_rate_multiplier(&who, collateral_type, surplus_target, multiplier)
		}
	}
}

impl<T: Config> Pallet<T> {
	/// Whether `actor` may modify the positions and balances of `owner`.
	pub fn can_modify(owner: &T::AccountId, actor: &T::AccountId) -> bool {
		owner == actor || Delegations::<T>::contains_key(owner, actor)
	}

	/// Rate-adjusted debt (rad) of a position.
	pub fn issued_debt(
		collateral_type: &T::CollateralTypeId,
		owner: &T::AccountId,
	) -> Result<U256, ArithmeticError> {
		let collateral = CollateralTypes::<T>::get(collateral_type);
		let position = Positions::<T>::get(collateral_type, owner);
		math::mul(position.generated_debt, collateral.accumulated_rate)
	}

	/// Whether the position's debt is covered by its collateral valued at the safety price.
	pub fn is_safe(collateral_type: &T::CollateralTypeId, owner: &T::AccountId) -> bool {
		let collateral = CollateralTypes::<T>::get(collateral_type);
		let position = Positions::<T>::get(collateral_type, owner);
		Self::is_within_safety_price(&collateral, &position).unwrap_or(false)
	}

	fn ensure_authorized(who: &T::AccountId) -> DispatchResult {
		ensure!(AuthorizedAccounts::<T>::contains_key(who), Error::<T>::NotAuthorized);
		Ok(())
	}

	fn ensure_enabled() -> DispatchResult {
		ensure!(ContractEnabled::<T>::get(), Error::<T>::SystemDisabled);
		Ok(())
	}

	fn initialized_collateral_type(
		collateral_type: &T::CollateralTypeId,
	) -> Result<CollateralType, DispatchError> {
		let collateral = CollateralTypes::<T>::get(collateral_type);
		ensure!(collateral.is_initialized(), Error::<T>::CollateralTypeNotInitialized);
		Ok(collateral)
	}

	/// Account balances report a shortfall as [`Error::InsufficientBalance`] rather than as an
	/// arithmetic underflow.
	fn balance_error(error: ArithmeticError) -> DispatchError {
		match error {
			ArithmeticError::Underflow => Error::<T>::InsufficientBalance.into(),
			error => error.into(),
		}
	}

	fn is_within_safety_price(
		collateral: &CollateralType,
		position: &Position,
	) -> Result<bool, ArithmeticError> {
		let debt = math::mul(position.generated_debt, collateral.accumulated_rate)?;
		let limit = math::mul(position.locked_collateral, collateral.safety_price)?;
		Ok(debt <= limit)
	}

	fn is_above_debt_floor(
		collateral: &CollateralType,
		position: &Position,
	) -> Result<bool, ArithmeticError> {
		if position.generated_debt.is_zero() {
			return Ok(true)
		}
		let debt = math::mul(position.generated_debt, collateral.accumulated_rate)?;
		Ok(debt >= collateral.debt_floor)
	}

	pub(crate) fn do_grant_authorization(who: &T::AccountId, account: T::AccountId) -> DispatchResult {
		Self::ensure_authorized(who)?;
		Self::ensure_enabled()?;
		AuthorizedAccounts::<T>::insert(&account, ());
		log::debug!(target: LOG_TARGET, "{:?} authorized {:?}", who, account);
		Self::deposit_event(Event::AuthorizationGranted { account });
		Ok(())
	}

	pub(crate) fn do_revoke_authorization(
		who: &T::AccountId,
		account: T::AccountId,
	) -> DispatchResult {
		Self::ensure_authorized(who)?;
		Self::ensure_enabled()?;
		AuthorizedAccounts::<T>::remove(&account);
		log::debug!(target: LOG_TARGET, "{:?} revoked authorization of {:?}", who, account);
		Self::deposit_event(Event::AuthorizationRevoked { account });
		Ok(())
	}

	pub(crate) fn do_register_collateral_type(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
	) -> DispatchResult {
		Self::ensure_authorized(who)?;
		CollateralTypes::<T>::try_mutate(&collateral_type, |collateral| -> DispatchResult {
			ensure!(!collateral.is_initialized(), Error::<T>::CollateralTypeAlreadyInitialized);
			*collateral = CollateralType { accumulated_rate: math::ray(), ..Default::default() };
			Ok(())
		})?;
		log::debug!(target: LOG_TARGET, "registered collateral type {:?}", collateral_type);
		Self::deposit_event(Event::CollateralTypeRegistered { collateral_type });
		Ok(())
	}

	pub(crate) fn do_set_global_parameter(
		who: &T::AccountId,
		name: &[u8],
		value: U256,
	) -> DispatchResult {
		Self::ensure_authorized(who)?;
		Self::ensure_enabled()?;
		let parameter =
			GlobalParameter::try_from(name).map_err(|_| Error::<T>::UnknownParameter)?;
		match parameter {
			GlobalParameter::GlobalDebtCeiling => GlobalDebtCeiling::<T>::put(value),
		}
		log::debug!(target: LOG_TARGET, "set {:?} to {:?}", parameter, value);
		Self::deposit_event(Event::GlobalParameterSet { parameter, value });
		Ok(())
	}

	pub(crate) fn do_set_collateral_parameter(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		name: &[u8],
		value: U256,
	) -> DispatchResult {
		Self::ensure_authorized(who)?;
		Self::ensure_enabled()?;
		let parameter =
			CollateralParameter::try_from(name).map_err(|_| Error::<T>::UnknownParameter)?;
		let mut collateral = Self::initialized_collateral_type(&collateral_type)?;
		parameter.apply(&mut collateral, value);
		CollateralTypes::<T>::insert(&collateral_type, collateral);
		log::debug!(
			target: LOG_TARGET,
			"set {:?} of {:?} to {:?}",
			parameter,
			collateral_type,
			value
		);
		Self::deposit_event(Event::CollateralParameterSet { collateral_type, parameter, value });
		Ok(())
	}

	pub(crate) fn do_disable_system(who: &T::AccountId) -> DispatchResult {
		Self::ensure_authorized(who)?;
		ContractEnabled::<T>::put(false);
		log::warn!(target: LOG_TARGET, "ledger disabled by {:?}", who);
		Self::deposit_event(Event::SystemDisabled);
		Ok(())
	}

	pub(crate) fn do_adjust_position(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		position_owner: T::AccountId,
		collateral_source: T::AccountId,
		debt_recipient: T::AccountId,
		delta_collateral: SignedAmount,
		delta_debt: SignedAmount,
	) -> DispatchResult {
		Self::ensure_enabled()?;
		let mut collateral = Self::initialized_collateral_type(&collateral_type)?;

		let mut position = Positions::<T>::get(&collateral_type, &position_owner);
		position.locked_collateral = math::add_signed(position.locked_collateral, delta_collateral)?;
		position.generated_debt = math::add_signed(position.generated_debt, delta_debt)?;
		collateral.debt_amount = math::add_signed(collateral.debt_amount, delta_debt)?;

		let issued_debt_delta = math::mul_signed(collateral.accumulated_rate, delta_debt)?;
		let global_debt = math::add_signed(GlobalDebt::<T>::get(), issued_debt_delta)?;

		if delta_debt.is_positive() {
			let type_debt = math::mul(collateral.debt_amount, collateral.accumulated_rate)?;
			ensure!(
				type_debt <= collateral.debt_ceiling && global_debt <= GlobalDebtCeiling::<T>::get(),
				Error::<T>::DebtCeilingExceeded
			);
		}

		// Repaying debt or adding collateral can only make the position safer.
		let risk_reducing = !delta_debt.is_positive() && !delta_collateral.is_negative();
		if !risk_reducing {
			ensure!(
				Self::is_within_safety_price(&collateral, &position)?,
				Error::<T>::PositionUnsafe
			);
			ensure!(
				Self::can_modify(&position_owner, who),
				Error::<T>::NotAllowedToModifyPosition
			);
		}
		ensure!(
			!delta_collateral.is_positive() || Self::can_modify(&collateral_source, who),
			Error::<T>::NotAllowedToModifyCollateralSource
		);
		ensure!(
			!delta_debt.is_negative() || Self::can_modify(&debt_recipient, who),
			Error::<T>::NotAllowedToModifyDebtRecipient
		);
		ensure!(Self::is_above_debt_floor(&collateral, &position)?, Error::<T>::DustPosition);

		let token_collateral = math::sub_signed(
			TokenCollateral::<T>::get(&collateral_type, &collateral_source),
			delta_collateral,
		)
		.map_err(Self::balance_error)?;
		let coin_balance =
			math::add_signed(CoinBalance::<T>::get(&debt_recipient), issued_debt_delta)
				.map_err(Self::balance_error)?;

		TokenCollateral::<T>::insert(&collateral_type, &collateral_source, token_collateral);
		CoinBalance::<T>::insert(&debt_recipient, coin_balance);
		Positions::<T>::insert(&collateral_type, &position_owner, &position);
		CollateralTypes::<T>::insert(&collateral_type, &collateral);
		GlobalDebt::<T>::put(global_debt);

		log::debug!(
			target: LOG_TARGET,
			"adjusted position {:?}/{:?}: collateral {:?}, debt {:?}",
			collateral_type,
			position_owner,
			position.locked_collateral,
			position.generated_debt,
		);
		Self::deposit_event(Event::PositionAdjusted {
			collateral_type,
			position_owner,
			collateral_source,
			debt_recipient,
			delta_collateral,
			delta_debt,
			locked_collateral: position.locked_collateral,
			generated_debt: position.generated_debt,
			debt_amount: collateral.debt_amount,
			global_debt,
		});
		Ok(())
	}

	pub(crate) fn do_adjust_free_collateral(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		account: T::AccountId,
		delta: SignedAmount,
	) -> DispatchResult {
		Self::ensure_authorized(who)?;
		Self::initialized_collateral_type(&collateral_type)?;
		let balance = math::add_signed(TokenCollateral::<T>::get(&collateral_type, &account), delta)
			.map_err(Self::balance_error)?;
		TokenCollateral::<T>::insert(&collateral_type, &account, balance);
		Self::deposit_event(Event::FreeCollateralAdjusted { collateral_type, account, delta, balance });
		Ok(())
	}

	pub(crate) fn do_transfer_free_collateral(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		source: T::AccountId,
		destination: T::AccountId,
		amount: U256,
	) -> DispatchResult {
		ensure!(Self::can_modify(&source, who), Error::<T>::NotAllowedToModifySource);
		Self::initialized_collateral_type(&collateral_type)?;

		let source_balance = math::sub(TokenCollateral::<T>::get(&collateral_type, &source), amount)
			.map_err(Self::balance_error)?;
		let destination_balance = if source == destination {
			source_balance
		} else {
			TokenCollateral::<T>::get(&collateral_type, &destination)
		};
		let destination_balance = math::add(destination_balance, amount)?;

		TokenCollateral::<T>::insert(&collateral_type, &source, source_balance);
		TokenCollateral::<T>::insert(&collateral_type, &destination, destination_balance);
		Self::deposit_event(Event::FreeCollateralTransferred {
			collateral_type,
			source,
			destination,
			amount,
			source_balance,
			destination_balance,
		});
		Ok(())
	}

	pub(crate) fn do_transfer_internal_coin(
		who: &T::AccountId,
		source: T::AccountId,
		destination: T::AccountId,
		amount: U256,
	) -> DispatchResult {
		ensure!(Self::can_modify(&source, who), Error::<T>::NotAllowedToModifySource);

		let source_balance =
			math::sub(CoinBalance::<T>::get(&source), amount).map_err(Self::balance_error)?;
		let destination_balance = if source == destination {
			source_balance
		} else {
			CoinBalance::<T>::get(&destination)
		};
		let destination_balance = math::add(destination_balance, amount)?;

		CoinBalance::<T>::insert(&source, source_balance);
		CoinBalance::<T>::insert(&destination, destination_balance);
		Self::deposit_event(Event::InternalCoinTransferred {
			source,
			destination,
			amount,
			source_balance,
			destination_balance,
		});
		Ok(())
	}

	pub(crate) fn do_transfer_position(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		source: T::AccountId,
		destination: T::AccountId,
		delta_collateral: SignedAmount,
		delta_debt: SignedAmount,
	) -> DispatchResult {
		let collateral = Self::initialized_collateral_type(&collateral_type)?;
		ensure!(Self::can_modify(&source, who), Error::<T>::NotAllowedToModifySource);
		ensure!(Self::can_modify(&destination, who), Error::<T>::NotAllowedToModifyDestination);

		let mut source_position = Positions::<T>::get(&collateral_type, &source);
		source_position.locked_collateral =
			math::sub_signed(source_position.locked_collateral, delta_collateral)?;
		source_position.generated_debt =
			math::sub_signed(source_position.generated_debt, delta_debt)?;

		let mut destination_position = if source == destination {
			source_position.clone()
		} else {
			Positions::<T>::get(&collateral_type, &destination)
		};
		destination_position.locked_collateral =
			math::add_signed(destination_position.locked_collateral, delta_collateral)?;
		destination_position.generated_debt =
			math::add_signed(destination_position.generated_debt, delta_debt)?;
		if source == destination {
			source_position = destination_position.clone();
		}

		ensure!(
			Self::is_within_safety_price(&collateral, &source_position)?,
			Error::<T>::SourcePositionUnsafe
		);
		ensure!(
			Self::is_within_safety_price(&collateral, &destination_position)?,
			Error::<T>::DestinationPositionUnsafe
		);
		ensure!(
			Self::is_above_debt_floor(&collateral, &source_position)?,
			Error::<T>::SourceDustPosition
		);
		ensure!(
			Self::is_above_debt_floor(&collateral, &destination_position)?,
			Error::<T>::DestinationDustPosition
		);

		Positions::<T>::insert(&collateral_type, &source, &source_position);
		Positions::<T>::insert(&collateral_type, &destination, &destination_position);

		log::debug!(
			target: LOG_TARGET,
			"moved {:?} collateral and {:?} debt of {:?} from {:?} to {:?}",
			delta_collateral,
			delta_debt,
			collateral_type,
			source,
			destination,
		);
		Self::deposit_event(Event::PositionTransferred {
			collateral_type,
			source,
			destination,
			delta_collateral,
			delta_debt,
			source_position,
			destination_position,
		});
		Ok(())
	}

	pub(crate) fn do_confiscate_position(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		position_owner: T::AccountId,
		collateral_target: T::AccountId,
		debt_target: T::AccountId,
		delta_collateral: SignedAmount,
		delta_debt: SignedAmount,
	) -> DispatchResult {
		Self::ensure_authorized(who)?;
		let mut collateral = Self::initialized_collateral_type(&collateral_type)?;

		let mut position = Positions::<T>::get(&collateral_type, &position_owner);
		position.locked_collateral = math::add_signed(position.locked_collateral, delta_collateral)?;
		position.generated_debt = math::add_signed(position.generated_debt, delta_debt)?;
		collateral.debt_amount = math::add_signed(collateral.debt_amount, delta_debt)?;

		let issued_debt_delta = math::mul_signed(collateral.accumulated_rate, delta_debt)?;
		let token_collateral = math::sub_signed(
			TokenCollateral::<T>::get(&collateral_type, &collateral_target),
			delta_collateral,
		)
		.map_err(Self::balance_error)?;
		let debt_balance = math::sub_signed(DebtBalance::<T>::get(&debt_target), issued_debt_delta)
			.map_err(Self::balance_error)?;
		let global_unbacked_debt =
			math::sub_signed(GlobalUnbackedDebt::<T>::get(), issued_debt_delta)?;

		Positions::<T>::insert(&collateral_type, &position_owner, &position);
		CollateralTypes::<T>::insert(&collateral_type, &collateral);
		TokenCollateral::<T>::insert(&collateral_type, &collateral_target, token_collateral);
		DebtBalance::<T>::insert(&debt_target, debt_balance);
		GlobalUnbackedDebt::<T>::put(global_unbacked_debt);

		log::debug!(
			target: LOG_TARGET,
			"confiscated {:?} collateral and {:?} debt from {:?}/{:?}",
			delta_collateral,
			delta_debt,
			collateral_type,
			position_owner,
		);
		Self::deposit_event(Event::PositionConfiscated {
			collateral_type,
			position_owner,
			collateral_target,
			debt_target,
			delta_collateral,
			delta_debt,
			locked_collateral: position.locked_collateral,
			generated_debt: position.generated_debt,
			global_unbacked_debt,
		});
		Ok(())
	}

	pub(crate) fn do_settle_debt(who: T::AccountId, amount: U256) -> DispatchResult {
		let debt_balance =
			math::sub(DebtBalance::<T>::get(&who), amount).map_err(Self::balance_error)?;
		let coin_balance =
			math::sub(CoinBalance::<T>::get(&who), amount).map_err(Self::balance_error)?;
		let global_unbacked_debt = math::sub(GlobalUnbackedDebt::<T>::get(), amount)?;
		let global_debt = math::sub(GlobalDebt::<T>::get(), amount)?;

		DebtBalance::<T>::insert(&who, debt_balance);
		CoinBalance::<T>::insert(&who, coin_balance);
		GlobalUnbackedDebt::<T>::put(global_unbacked_debt);
		GlobalDebt::<T>::put(global_debt);

		Self::deposit_event(Event::DebtSettled {
			account: who,
			amount,
			coin_balance,
			debt_balance,
			global_debt,
			global_unbacked_debt,
		});
		Ok(())
	}

	pub(crate) fn do_create_unbacked_debt(
		who: &T::AccountId,
		debt_target: T::AccountId,
		coin_target: T::AccountId,
		amount: U256,
	) -> DispatchResult {
		Self::ensure_authorized(who)?;

		let debt_balance = math::add(DebtBalance::<T>::get(&debt_target), amount)?;
		let coin_balance = math::add(CoinBalance::<T>::get(&coin_target), amount)?;
		let global_unbacked_debt = math::add(GlobalUnbackedDebt::<T>::get(), amount)?;
		let global_debt = math::add(GlobalDebt::<T>::get(), amount)?;

		DebtBalance::<T>::insert(&debt_target, debt_balance);
		CoinBalance::<T>::insert(&coin_target, coin_balance);
		GlobalUnbackedDebt::<T>::put(global_unbacked_debt);
		GlobalDebt::<T>::put(global_debt);

		log::debug!(
			target: LOG_TARGET,
			"{:?} created {:?} unbacked debt for {:?}",
			who,
			amount,
			debt_target,
		);
		Self::deposit_event(Event::UnbackedDebtCreated {
			debt_target,
			coin_target,
			amount,
			debt_balance,
			coin_balance,
			global_debt,
			global_unbacked_debt,
		});
		Ok(())
	}

	pub(crate) fn do_apply_rate_multiplier(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		surplus_target: T::AccountId,
		multiplier: SignedAmount,
	) -> DispatchResult {
		Self::ensure_authorized(who)?;
		Self::ensure_enabled()?;
		let mut collateral = Self::initialized_collateral_type(&collateral_type)?;

		collateral.accumulated_rate = math::add_signed(collateral.accumulated_rate, multiplier)?;
		// A zero rate would make the type indistinguishable from an unregistered one.
		ensure!(!collateral.accumulated_rate.is_zero(), ArithmeticError::Underflow);
		let surplus = math::mul_signed(collateral.debt_amount, multiplier)?;
		let coin_balance = math::add_signed(CoinBalance::<T>::get(&surplus_target), surplus)
			.map_err(Self::balance_error)?;
		let global_debt = math::add_signed(GlobalDebt::<T>::get(), surplus)?;

		CollateralTypes::<T>::insert(&collateral_type, &collateral);
		CoinBalance::<T>::insert(&surplus_target, coin_balance);
		GlobalDebt::<T>::put(global_debt);

		if multiplier.is_negative() {
			log::warn!(
				target: LOG_TARGET,
				"accumulated rate of {:?} decreased to {:?}",
				collateral_type,
				collateral.accumulated_rate,
			);
		} else {
			log::debug!(
				target: LOG_TARGET,
				"accumulated rate of {:?} is now {:?}",
				collateral_type,
				collateral.accumulated_rate,
			);
		}
		Self::deposit_event(Event::RateMultiplierApplied {
			collateral_type,
			surplus_target,
			multiplier,
			accumulated_rate: collateral.accumulated_rate,
			surplus,
			global_debt,
		});
		Ok(())
	}
}

impl<T: Config> CdpLedger<T::AccountId> for Pallet<T> {
	type CollateralTypeId = T::CollateralTypeId;

	fn set_global_parameter(
		who: &T::AccountId,
		parameter: GlobalParameter,
		value: U256,
	) -> DispatchResult {
		with_storage_layer(|| Self::do_set_global_parameter(who, parameter.name(), value))
	}

	fn set_collateral_parameter(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		parameter: CollateralParameter,
		value: U256,
	) -> DispatchResult {
		with_storage_layer(|| {
			Self::do_set_collateral_parameter(who, collateral_type, parameter.name(), value)
		})
	}

	fn adjust_free_collateral(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		account: &T::AccountId,
		delta: SignedAmount,
	) -> DispatchResult {
		with_storage_layer(|| {
			Self::do_adjust_free_collateral(who, collateral_type, account.clone(), delta)
		})
	}

	fn transfer_free_collateral(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		source: &T::AccountId,
		destination: &T::AccountId,
		amount: U256,
	) -> DispatchResult {
		with_storage_layer(|| {
			Self::do_transfer_free_collateral(
				who,
				collateral_type,
				source.clone(),
				destination.clone(),
				amount,
			)
		})
	}

	fn transfer_internal_coin(
		who: &T::AccountId,
		source: &T::AccountId,
		destination: &T::AccountId,
		amount: U256,
	) -> DispatchResult {
		with_storage_layer(|| {
			Self::do_transfer_internal_coin(who, source.clone(), destination.clone(), amount)
		})
	}

	fn settle_debt(who: &T::AccountId, amount: U256) -> DispatchResult {
		with_storage_layer(|| Self::do_settle_debt(who.clone(), amount))
	}

	fn confiscate_position(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		position_owner: &T::AccountId,
		collateral_target: &T::AccountId,
		debt_target: &T::AccountId,
		delta_collateral: SignedAmount,
		delta_debt: SignedAmount,
	) -> DispatchResult {
		with_storage_layer(|| {
			Self::do_confiscate_position(
				who,
				collateral_type,
				position_owner.clone(),
				collateral_target.clone(),
				debt_target.clone(),
				delta_collateral,
				delta_debt,
			)
		})
	}

	fn create_unbacked_debt(
		who: &T::AccountId,
		debt_target: &T::AccountId,
		coin_target: &T::AccountId,
		amount: U256,
	) -> DispatchResult {
		with_storage_layer(|| {
			Self::do_create_unbacked_debt(who, debt_target.clone(), coin_target.clone(), amount)
		})
	}

	fn apply_rate_multiplier(
		who: &T::AccountId,
		collateral_type: T::CollateralTypeId,
		surplus_target: &T::AccountId,
		multiplier: SignedAmount,
	) -> DispatchResult {
		with_storage_layer(|| {
			Self::do_apply_rate_multiplier(
				who,
				collateral_type,
				surplus_target.clone(),
				multiplier,
			)
		})
	}

	fn collateral_type(collateral_type: &T::CollateralTypeId) -> CollateralType {
		CollateralTypes::<T>::get(collateral_type)
	}

	fn position(collateral_type: &T::CollateralTypeId, owner: &T::AccountId) -> Position {
		Positions::<T>::get(collateral_type, owner)
	}

	fn can_be_liquidated(collateral_type: &T::CollateralTypeId, owner: &T::AccountId) -> bool {
		let collateral = CollateralTypes::<T>::get(collateral_type);
		let position = Positions::<T>::get(collateral_type, owner);
		let Ok(debt) = math::mul(position.generated_debt, collateral.accumulated_rate) else {
			return true
		};
		match math::mul(position.locked_collateral, collateral.liquidation_price) {
			Ok(value) => debt > value,
			Err(_) => false,
		}
	}
}

#[cfg(any(feature = "try-runtime", test))]
impl<T: Config> Pallet<T> {
	/// Ensure the correctness of the state of this pallet.
	///
	/// This should be valid before and after each state transition of this pallet.
	pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
		Self::try_state_balances()?;
		Self::try_state_collateral_types()?;
		Ok(())
	}

	/// # Invariants
	///
	/// * [`GlobalDebt`] equals the sum of all [`CoinBalance`]s.
	/// * [`GlobalUnbackedDebt`] equals the sum of all [`DebtBalance`]s.
	fn try_state_balances() -> Result<(), sp_runtime::TryRuntimeError> {
		let coin = CoinBalance::<T>::iter_values().try_fold(U256::zero(), math::add)?;
		ensure!(coin == GlobalDebt::<T>::get(), "`GlobalDebt` must equal the sum of `CoinBalance`");

		let unbacked = DebtBalance::<T>::iter_values().try_fold(U256::zero(), math::add)?;
		ensure!(
			unbacked == GlobalUnbackedDebt::<T>::get(),
			"`GlobalUnbackedDebt` must equal the sum of `DebtBalance`"
		);
		Ok(())
	}

	/// # Invariants
	///
	/// * The debt amount of every collateral type equals the debt generated by its positions.
	/// * [`GlobalDebt`] equals the rate-adjusted debt of all collateral types plus
	///   [`GlobalUnbackedDebt`].
	fn try_state_collateral_types() -> Result<(), sp_runtime::TryRuntimeError> {
		let mut issued = U256::zero();
		for (id, collateral) in CollateralTypes::<T>::iter() {
			let generated = Positions::<T>::iter_prefix_values(&id)
				.map(|position| position.generated_debt)
				.try_fold(U256::zero(), math::add)?;
			ensure!(
				generated == collateral.debt_amount,
				"the debt amount of a collateral type must equal the debt of its positions"
			);
			issued = math::add(
				issued,
				math::mul(collateral.debt_amount, collateral.accumulated_rate)?,
			)?;
		}
		ensure!(
			math::add(issued, GlobalUnbackedDebt::<T>::get())? == GlobalDebt::<T>::get(),
			"`GlobalDebt` must equal issued debt plus `GlobalUnbackedDebt`"
		);
		Ok(())
	}
}
