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

//! Checked fixed-point arithmetic over the three ledger scales.
//!
//! Every amount held by the ledger is an unsigned [`U256`] in one of three scales:
//!
//! * **wad** (`10^18`): collateral and raw debt units.
//! * **ray** (`10^27`): accumulated rates and prices.
//! * **rad** (`10^45`, wad × ray): rate-adjusted debt and internal coin.
//!
//! Adjustments are expressed as [`SignedAmount`]s. None of the functions in this module wrap:
//! a result that is not representable is reported as [`ArithmeticError::Overflow`] or
//! [`ArithmeticError::Underflow`].

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use core::ops::Neg;
use scale_info::TypeInfo;
use sp_core::U256;
use sp_runtime::ArithmeticError;

/// One unit at wad precision.
pub fn wad() -> U256 {
	U256::exp10(18)
}

/// One unit at ray precision.
pub fn ray() -> U256 {
	U256::exp10(27)
}

/// One unit at rad precision.
pub fn rad() -> U256 {
	U256::exp10(45)
}

/// A signed adjustment of an unsigned ledger amount.
///
/// Stored as a direction plus a [`U256`] magnitude. Zero never carries a negative sign, so two
/// zero amounts always compare equal.
#[derive(Encode, MaxEncodedLen, TypeInfo, Clone, Copy, Debug, Default)]
pub struct SignedAmount {
	negative: bool,
	magnitude: U256,
}

impl SignedAmount {
	/// The zero adjustment.
	pub fn zero() -> Self {
		Self::default()
	}

	/// An increase by `magnitude`.
	pub fn positive(magnitude: U256) -> Self {
		Self { negative: false, magnitude }
	}

	/// A decrease by `magnitude`.
	pub fn negative(magnitude: U256) -> Self {
		Self { negative: !magnitude.is_zero(), magnitude }
	}

	fn with_sign(negative: bool, magnitude: U256) -> Self {
		if negative {
			Self::negative(magnitude)
		} else {
			Self::positive(magnitude)
		}
	}

	/// Lift a native signed integer.
	pub fn from_i128(value: i128) -> Self {
		Self::with_sign(value < 0, U256::from(value.unsigned_abs()))
	}

	/// The absolute value.
	pub fn magnitude(&self) -> U256 {
		self.magnitude
	}

	/// Whether the adjustment changes nothing.
	pub fn is_zero(&self) -> bool {
		self.magnitude.is_zero()
	}

	/// Whether the adjustment is a strict decrease.
	pub fn is_negative(&self) -> bool {
		self.negative && !self.magnitude.is_zero()
	}

	/// Whether the adjustment is a strict increase.
	pub fn is_positive(&self) -> bool {
		!self.negative && !self.magnitude.is_zero()
	}
}

// Normalizes a negative zero on the wire to the canonical zero.
impl Decode for SignedAmount {
	fn decode<I: codec::Input>(input: &mut I) -> Result<Self, codec::Error> {
		let negative = bool::decode(input)?;
		let magnitude = U256::decode(input)?;
		Ok(Self::with_sign(negative, magnitude))
	}
}

impl DecodeWithMemTracking for SignedAmount {}

impl PartialEq for SignedAmount {
	fn eq(&self, other: &Self) -> bool {
		self.magnitude == other.magnitude && self.is_negative() == other.is_negative()
	}
}

impl Eq for SignedAmount {}

impl Neg for SignedAmount {
	type Output = Self;

	fn neg(self) -> Self {
		Self::with_sign(!self.is_negative(), self.magnitude)
	}
}

impl From<U256> for SignedAmount {
	fn from(magnitude: U256) -> Self {
		Self::positive(magnitude)
	}
}

/// `x + y` for two unsigned amounts.
pub fn add(x: U256, y: U256) -> Result<U256, ArithmeticError> {
	x.checked_add(y).ok_or(ArithmeticError::Overflow)
}

/// `x - y` for two unsigned amounts.
pub fn sub(x: U256, y: U256) -> Result<U256, ArithmeticError> {
	x.checked_sub(y).ok_or(ArithmeticError::Underflow)
}

/// `x * y` for two unsigned amounts.
pub fn mul(x: U256, y: U256) -> Result<U256, ArithmeticError> {
	x.checked_mul(y).ok_or(ArithmeticError::Overflow)
}

/// Apply the signed adjustment `y` to the unsigned amount `x`.
///
/// A negative `y` can only ever decrease `x`; if it would take `x` below zero the result is
/// [`ArithmeticError::Underflow`].
pub fn add_signed(x: U256, y: SignedAmount) -> Result<U256, ArithmeticError> {
	if y.is_negative() {
		sub(x, y.magnitude)
	} else {
		add(x, y.magnitude)
	}
}

/// Remove the signed adjustment `y` from the unsigned amount `x`.
pub fn sub_signed(x: U256, y: SignedAmount) -> Result<U256, ArithmeticError> {
	add_signed(x, -y)
}

/// `x + y` for two signed amounts.
pub fn signed_add(x: SignedAmount, y: SignedAmount) -> Result<SignedAmount, ArithmeticError> {
	if x.is_negative() == y.is_negative() {
		let magnitude = add(x.magnitude, y.magnitude).map_err(|_| {
			if x.is_negative() {
				ArithmeticError::Underflow
			} else {
				ArithmeticError::Overflow
			}
		})?;
		return Ok(SignedAmount::with_sign(x.is_negative(), magnitude))
	}

	if x.magnitude >= y.magnitude {
		Ok(SignedAmount::with_sign(x.is_negative(), sub(x.magnitude, y.magnitude)?))
	} else {
		Ok(SignedAmount::with_sign(y.is_negative(), sub(y.magnitude, x.magnitude)?))
	}
}

/// `x - y` for two signed amounts.
pub fn signed_sub(x: SignedAmount, y: SignedAmount) -> Result<SignedAmount, ArithmeticError> {
	signed_add(x, -y)
}

/// Scale the signed amount `y` by the unsigned factor `x`, keeping the sign of `y`.
pub fn mul_signed(x: U256, y: SignedAmount) -> Result<SignedAmount, ArithmeticError> {
	let magnitude = x.checked_mul(y.magnitude).ok_or(if y.is_negative() {
		ArithmeticError::Underflow
	} else {
		ArithmeticError::Overflow
	})?;
	Ok(SignedAmount::with_sign(y.is_negative(), magnitude))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn s(value: i128) -> SignedAmount {
		SignedAmount::from_i128(value)
	}

	#[test]
	fn scales_are_consistent() {
		assert_eq!(mul(wad(), ray()), Ok(rad()));
		assert_eq!(ray(), U256::from(1_000_000_000_000_000_000_000_000_000u128));
	}

	#[test]
	fn zero_is_never_negative() {
		assert_eq!(SignedAmount::negative(U256::zero()), SignedAmount::zero());
		assert_eq!(-SignedAmount::zero(), SignedAmount::zero());
		assert!(!SignedAmount::negative(U256::zero()).is_negative());
		assert!(!SignedAmount::zero().is_positive());
	}

	#[test]
	fn decoding_normalizes_negative_zero() {
		let decoded = SignedAmount::decode(&mut &(true, U256::zero()).encode()[..]).unwrap();
		assert_eq!(decoded, SignedAmount::zero());
		assert!(!decoded.is_negative());
		assert_eq!(decoded.encode(), SignedAmount::zero().encode());

		let decoded = SignedAmount::decode(&mut &(true, U256::from(5)).encode()[..]).unwrap();
		assert!(decoded.is_negative());
		assert_eq!(decoded, s(-5));
		assert_eq!(decoded.encode(), (true, U256::from(5)).encode());
	}

	#[test]
	fn unsigned_operations_are_checked() {
		assert_eq!(add(U256::MAX, U256::one()), Err(ArithmeticError::Overflow));
		assert_eq!(sub(U256::zero(), U256::one()), Err(ArithmeticError::Underflow));
		assert_eq!(mul(U256::MAX, U256::from(2)), Err(ArithmeticError::Overflow));
		assert_eq!(add(U256::from(2), U256::from(3)), Ok(U256::from(5)));
		assert_eq!(sub(U256::from(3), U256::from(3)), Ok(U256::zero()));
		assert_eq!(mul(U256::zero(), U256::MAX), Ok(U256::zero()));
	}

	#[test]
	fn adding_a_large_negative_does_not_wrap() {
		assert_eq!(add_signed(U256::from(10), s(-11)), Err(ArithmeticError::Underflow));
		assert_eq!(
			add_signed(U256::from(10), SignedAmount::negative(U256::MAX)),
			Err(ArithmeticError::Underflow)
		);
		assert_eq!(add_signed(U256::from(10), s(-10)), Ok(U256::zero()));
		assert_eq!(add_signed(U256::MAX, s(1)), Err(ArithmeticError::Overflow));
	}

	#[test]
	fn sub_signed_moves_in_the_opposite_direction() {
		assert_eq!(sub_signed(U256::from(10), s(4)), Ok(U256::from(6)));
		assert_eq!(sub_signed(U256::from(10), s(-4)), Ok(U256::from(14)));
		assert_eq!(sub_signed(U256::from(3), s(4)), Err(ArithmeticError::Underflow));
		assert_eq!(sub_signed(U256::MAX, s(-1)), Err(ArithmeticError::Overflow));
	}

	#[test]
	fn signed_addition_handles_mixed_signs() {
		assert_eq!(signed_add(s(5), s(-7)), Ok(s(-2)));
		assert_eq!(signed_add(s(-5), s(7)), Ok(s(2)));
		assert_eq!(signed_add(s(-5), s(-7)), Ok(s(-12)));
		assert_eq!(signed_add(s(5), s(-5)), Ok(SignedAmount::zero()));
		assert_eq!(signed_sub(s(5), s(7)), Ok(s(-2)));
		assert_eq!(signed_sub(s(-5), s(-5)), Ok(SignedAmount::zero()));
		assert_eq!(
			signed_add(SignedAmount::positive(U256::MAX), s(1)),
			Err(ArithmeticError::Overflow)
		);
		assert_eq!(
			signed_add(SignedAmount::negative(U256::MAX), s(-1)),
			Err(ArithmeticError::Underflow)
		);
	}

	#[test]
	fn signed_multiplication_keeps_sign() {
		assert_eq!(mul_signed(U256::from(3), s(-4)), Ok(s(-12)));
		assert_eq!(mul_signed(U256::from(3), s(4)), Ok(s(12)));
		assert_eq!(mul_signed(U256::zero(), s(-4)), Ok(SignedAmount::zero()));
		assert_eq!(
			mul_signed(U256::MAX, s(-2)),
			Err(ArithmeticError::Underflow)
		);
		assert_eq!(mul_signed(U256::MAX, s(2)), Err(ArithmeticError::Overflow));
	}
}
