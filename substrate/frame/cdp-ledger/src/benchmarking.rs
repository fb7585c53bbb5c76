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


//! Benchmarks for the CDP ledger pallet.

use super::*;
use crate::Pallet;
use frame_benchmarking::v2::*;
use frame_support::BoundedVec;
use frame_system::RawOrigin;

fn assert_last_event<T: Config>(generic_event: Event<T>) {
	frame_system::Pallet::<T>::assert_last_event(generic_event.into());
}

fn wad(n: u64) -> U256 {
	U256::from(n) * math::wad()
}

fn authorized_caller<T: Config>() -> T::AccountId {
	let caller: T::AccountId = whitelisted_caller();
	AuthorizedAccounts::<T>::insert(&caller, ());
	caller
}

/// A registered collateral type priced at one with no effective debt limits.
fn collateral_type<T: Config>() -> T::CollateralTypeId {
	let id = T::BenchmarkHelper::collateral_type_id(0);
	CollateralTypes::<T>::insert(
		&id,
		CollateralType {
			accumulated_rate: math::ray(),
			safety_price: math::ray(),
			liquidation_price: math::ray(),
			debt_ceiling: U256::MAX,
			..Default::default()
		},
	);
	GlobalDebtCeiling::<T>::put(U256::MAX);
	id
}

fn open_position<T: Config>(
	id: &T::CollateralTypeId,
	owner: &T::AccountId,
	collateral: U256,
	debt: U256,
) -> Result<(), BenchmarkError> {
	TokenCollateral::<T>::insert(id, owner, collateral);
	Pallet::<T>::do_adjust_position(
		owner,
		id.clone(),
		owner.clone(),
		owner.clone(),
		owner.clone(),
		SignedAmount::positive(collateral),
		SignedAmount::positive(debt),
	)?;
	Ok(())
}

#[benchmarks]
mod benchmarks {
	use super::*;

	#[benchmark]
	fn grant_authorization() {
		let caller = authorized_caller::<T>();
		let account: T::AccountId = account("account", 0, 0);

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), account.clone());

		assert_last_event::<T>(Event::AuthorizationGranted { account });
	}

	#[benchmark]
	fn revoke_authorization() {
		let caller = authorized_caller::<T>();
		let account: T::AccountId = account("account", 0, 0);
		AuthorizedAccounts::<T>::insert(&account, ());

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), account.clone());

		assert_last_event::<T>(Event::AuthorizationRevoked { account });
	}

	#[benchmark]
	fn approve_delegate() {
		let owner: T::AccountId = whitelisted_caller();
		let delegate: T::AccountId = account("delegate", 0, 0);

		#[extrinsic_call]
		_(RawOrigin::Signed(owner.clone()), delegate.clone());

		assert_last_event::<T>(Event::DelegateApproved { owner, delegate });
	}

	#[benchmark]
	fn revoke_delegate() {
		let owner: T::AccountId = whitelisted_caller();
		let delegate: T::AccountId = account("delegate", 0, 0);
		Delegations::<T>::insert(&owner, &delegate, ());

		#[extrinsic_call]
		_(RawOrigin::Signed(owner.clone()), delegate.clone());

		assert_last_event::<T>(Event::DelegateRevoked { owner, delegate });
	}

	#[benchmark]
	fn register_collateral_type() {
		let caller = authorized_caller::<T>();
		let id = T::BenchmarkHelper::collateral_type_id(1);

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), id.clone());

		assert_last_event::<T>(Event::CollateralTypeRegistered { collateral_type: id });
	}

	#[benchmark]
	fn set_global_parameter() {
		let caller = authorized_caller::<T>();
		let parameter = GlobalParameter::GlobalDebtCeiling;
		let name = BoundedVec::truncate_from(parameter.name().to_vec());
		let value = wad(1) * math::ray();

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), name, value);

		assert_last_event::<T>(Event::GlobalParameterSet { parameter, value });
	}

	#[benchmark]
	fn set_collateral_parameter() {
		let caller = authorized_caller::<T>();
		let id = collateral_type::<T>();
		let parameter = CollateralParameter::DebtFloor;
		let name = BoundedVec::truncate_from(parameter.name().to_vec());
		let value = wad(1) * math::ray();

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), id.clone(), name, value);

		assert_last_event::<T>(Event::CollateralParameterSet {
			collateral_type: id,
			parameter,
			value,
		});
	}

	#[benchmark]
	fn disable_system() {
		let caller = authorized_caller::<T>();

		#[extrinsic_call]
		_(RawOrigin::Signed(caller));

		assert!(!ContractEnabled::<T>::get());
	}

	#[benchmark]
	fn adjust_position() {
		let caller: T::AccountId = whitelisted_caller();
		let id = collateral_type::<T>();
		// Collateral comes from a delegating account so every consent path is read.
		let source: T::AccountId = account("source", 0, 0);
		let recipient: T::AccountId = account("recipient", 0, 0);
		Delegations::<T>::insert(&source, &caller, ());
		TokenCollateral::<T>::insert(&id, &source, wad(100));

		#[extrinsic_call]
		_(
			RawOrigin::Signed(caller.clone()),
			id.clone(),
			caller.clone(),
			source,
			recipient.clone(),
			SignedAmount::positive(wad(100)),
			SignedAmount::positive(wad(50)),
		);

		assert_eq!(
			Positions::<T>::get(&id, &caller),
			Position { locked_collateral: wad(100), generated_debt: wad(50) }
		);
		assert_eq!(CoinBalance::<T>::get(&recipient), wad(50) * math::ray());
	}

	#[benchmark]
	fn adjust_free_collateral() {
		let caller = authorized_caller::<T>();
		let id = collateral_type::<T>();
		let account: T::AccountId = account("account", 0, 0);

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), id.clone(), account.clone(), SignedAmount::positive(wad(1)));

		assert_eq!(TokenCollateral::<T>::get(&id, &account), wad(1));
	}

	#[benchmark]
	fn transfer_free_collateral() {
		let caller: T::AccountId = whitelisted_caller();
		let id = collateral_type::<T>();
		let destination: T::AccountId = account("destination", 0, 0);
		TokenCollateral::<T>::insert(&id, &caller, wad(10));

		#[extrinsic_call]
		_(RawOrigin::Signed(caller.clone()), id.clone(), caller.clone(), destination.clone(), wad(4));

		assert_eq!(TokenCollateral::<T>::get(&id, &caller), wad(6));
		assert_eq!(TokenCollateral::<T>::get(&id, &destination), wad(4));
	}

	#[benchmark]
	fn transfer_internal_coin() -> Result<(), BenchmarkError> {
		let caller = authorized_caller::<T>();
		let destination: T::AccountId = account("destination", 0, 0);
		let amount = wad(10) * math::ray();
		Pallet::<T>::do_create_unbacked_debt(&caller, caller.clone(), caller.clone(), amount)?;

		#[extrinsic_call]
		_(RawOrigin::Signed(caller.clone()), caller.clone(), destination.clone(), amount);

		assert_eq!(CoinBalance::<T>::get(&destination), amount);
		Ok(())
	}

	#[benchmark]
	fn transfer_position() -> Result<(), BenchmarkError> {
		let caller: T::AccountId = whitelisted_caller();
		let id = collateral_type::<T>();
		let destination: T::AccountId = account("destination", 0, 0);
		Delegations::<T>::insert(&destination, &caller, ());
		open_position::<T>(&id, &caller, wad(100), wad(50))?;

		#[extrinsic_call]
		_(
			RawOrigin::Signed(caller.clone()),
			id.clone(),
			caller.clone(),
			destination.clone(),
			SignedAmount::positive(wad(50)),
			SignedAmount::positive(wad(25)),
		);

		assert_eq!(
			Positions::<T>::get(&id, &destination),
			Position { locked_collateral: wad(50), generated_debt: wad(25) }
		);
		Ok(())
	}

	#[benchmark]
	fn confiscate_position() -> Result<(), BenchmarkError> {
		let caller = authorized_caller::<T>();
		let id = collateral_type::<T>();
		let owner: T::AccountId = account("owner", 0, 0);
		let target: T::AccountId = account("target", 0, 0);
		open_position::<T>(&id, &owner, wad(100), wad(50))?;

		#[extrinsic_call]
		_(
			RawOrigin::Signed(caller),
			id.clone(),
			owner.clone(),
			target.clone(),
			target.clone(),
			SignedAmount::negative(wad(100)),
			SignedAmount::negative(wad(50)),
		);

		assert!(Positions::<T>::get(&id, &owner).is_empty());
		assert_eq!(DebtBalance::<T>::get(&target), wad(50) * math::ray());
		Ok(())
	}

	#[benchmark]
	fn settle_debt() -> Result<(), BenchmarkError> {
		let caller = authorized_caller::<T>();
		let amount = wad(10) * math::ray();
		Pallet::<T>::do_create_unbacked_debt(&caller, caller.clone(), caller.clone(), amount)?;

		#[extrinsic_call]
		_(RawOrigin::Signed(caller.clone()), amount);

		assert_eq!(GlobalUnbackedDebt::<T>::get(), U256::zero());
		Ok(())
	}

	#[benchmark]
	fn create_unbacked_debt() {
		let caller = authorized_caller::<T>();
		let debt_target: T::AccountId = account("debt", 0, 0);
		let coin_target: T::AccountId = account("coin", 0, 0);
		let amount = wad(10) * math::ray();

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), debt_target.clone(), coin_target.clone(), amount);

		assert_eq!(DebtBalance::<T>::get(&debt_target), amount);
		assert_eq!(CoinBalance::<T>::get(&coin_target), amount);
	}

	#[benchmark]
	fn apply_rate_multiplier() -> Result<(), BenchmarkError> {
		let caller = authorized_caller::<T>();
		let id = collateral_type::<T>();
		let owner: T::AccountId = account("owner", 0, 0);
		let surplus_target: T::AccountId = account("surplus", 0, 0);
		open_position::<T>(&id, &owner, wad(100), wad(50))?;

		#[extrinsic_call]
		_(
			RawOrigin::Signed(caller),
			id.clone(),
			surplus_target.clone(),
			SignedAmount::positive(math::ray() / 10),
		);

		assert_eq!(CoinBalance::<T>::get(&surplus_target), wad(5) * math::ray());
		Ok(())
	}

	impl_benchmark_test_suite!(Pallet, crate::mock::new_bench_ext(), crate::mock::Test);
}
