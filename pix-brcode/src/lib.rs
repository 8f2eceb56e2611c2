// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

#![deny(missing_docs)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! This crate provides data structures to represent Pix BR Codes, the EMV
//! merchant-presented payment payloads used by Brazil's instant payment
//! system, and functions to create, serialize and parse them. The serialized
//! form is the "Pix copia e cola" string that payment apps accept directly
//! and that is usually shown to payers as a QR code.
//!
//! ## Contents
//!  * For constructing payment codes use the [`PixCodeBuilder`] or, with the
//!    `std` feature, the helpers in [`utils`]
//!  * For serializing a [`PixCode`] use its [`Display`] implementation
//!  * For parsing and verifying a payload use the [`FromStr`] implementation
//!    of [`PixCode`]
//!
//! ## Features
//!  * `std` - enabled by default. Pulls in the [`utils`] module and the
//!    `std::error::Error` implementations for the error types. Without it the
//!    crate only relies on `core` and `alloc`.
//!  * `serde` - serializes a [`PixCode`] as its payload string and
//!    deserializes it through the parser.
//!
//! [`FromStr`]: core::str::FromStr

extern crate alloc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

mod de;
mod ser;

pub mod crc;
pub mod tb;
#[cfg(feature = "std")]
pub mod utils;

mod prelude {
	pub use alloc::string::{String, ToString};
	pub use alloc::borrow::ToOwned;
}

use crate::prelude::*;

use core::fmt::{self, Display, Formatter};

pub use crate::de::{ParseError, ParseOrSemanticError, SemanticError};

/// The field ids and constant values making up a BR Code payload.
pub mod constants {
	/// Id of the payload format indicator field, always the first field.
	pub const TAG_PAYLOAD_FORMAT_INDICATOR: u8 = 0;
	/// Id of the merchant account information container carrying the Pix data.
	pub const TAG_MERCHANT_ACCOUNT_INFORMATION: u8 = 26;
	/// Id of the merchant category code field.
	pub const TAG_MERCHANT_CATEGORY_CODE: u8 = 52;
	/// Id of the transaction currency field.
	pub const TAG_TRANSACTION_CURRENCY: u8 = 53;
	/// Id of the optional transaction amount field.
	pub const TAG_TRANSACTION_AMOUNT: u8 = 54;
	/// Id of the country code field.
	pub const TAG_COUNTRY_CODE: u8 = 58;
	/// Id of the merchant name field.
	pub const TAG_MERCHANT_NAME: u8 = 59;
	/// Id of the merchant city field.
	pub const TAG_MERCHANT_CITY: u8 = 60;
	/// Id of the additional data field template carrying the reference label.
	pub const TAG_ADDITIONAL_DATA_FIELD_TEMPLATE: u8 = 62;
	/// Id of the CRC field sealing the payload, always the last field.
	pub const TAG_CRC: u8 = 63;

	/// Id of the globally unique identifier inside the merchant account
	/// information container.
	pub const SUBTAG_GUI: u8 = 0;
	/// Id of the Pix key inside the merchant account information container.
	pub const SUBTAG_PIX_KEY: u8 = 1;
	/// Id of the free text description inside the merchant account
	/// information container.
	pub const SUBTAG_DESCRIPTION: u8 = 2;
	/// Id of the reference label inside the additional data field template.
	pub const SUBTAG_REFERENCE_LABEL: u8 = 5;

	/// The only payload format version this crate understands.
	pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";
	/// The globally unique identifier of the Pix scheme. Readers compare it
	/// case-insensitively.
	pub const PIX_GUI: &str = "br.gov.bcb.pix";
	/// ISO 4217 numeric code of the Brazilian real.
	pub const CURRENCY_BRL: &str = "986";
	/// ISO 3166-1 alpha-2 code carried in the country field.
	pub const COUNTRY_CODE_BR: &str = "BR";
	/// The reference label used when no transaction id is tracked.
	pub const REFERENCE_LABEL_NONE: &str = "***";
}

/// Names the payload field a [`CreationError`] refers to.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Field {
	/// The merchant's Pix key.
	PixKey,
	/// The merchant name.
	MerchantName,
	/// The merchant city.
	MerchantCity,
	/// The free text description.
	Description,
	/// The transaction id carried as the reference label.
	TransactionId,
	/// The merchant category code.
	MerchantCategoryCode,
	/// The merchant account information container as a whole.
	MerchantAccountInformation,
}

impl Display for Field {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(match *self {
			Field::PixKey => "pix key",
			Field::MerchantName => "merchant name",
			Field::MerchantCity => "merchant city",
			Field::Description => "description",
			Field::TransactionId => "transaction id",
			Field::MerchantCategoryCode => "merchant category code",
			Field::MerchantAccountInformation => "merchant account information",
		})
	}
}

/// Errors that indicate that a payment code could not be constructed from the
/// supplied data.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum CreationError {
	/// A required field was empty.
	FieldEmpty(Field),
	/// A field exceeded its maximum byte length. Fields are rejected rather
	/// than truncated.
	FieldTooLong(Field),
	/// The amount was negative, not finite, beyond [`Amount::MAX`] or not
	/// representable with two decimal places.
	InvalidAmount,
	/// A field contained a character the payload format does not allow.
	InvalidCharacter(Field),
}

impl Display for CreationError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			CreationError::FieldEmpty(field) => write!(f, "The supplied {} was empty", field),
			CreationError::FieldTooLong(field) => {
				write!(f, "The supplied {} was longer than its maximum", field)
			},
			CreationError::InvalidAmount => f.write_str(
				"The supplied amount was negative, not finite or not representable in centavos",
			),
			CreationError::InvalidCharacter(field) => {
				write!(f, "The supplied {} contained an invalid character", field)
			},
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for CreationError {}

fn check_field(value: &str, max_len: usize, field: Field) -> Result<(), CreationError> {
	if value.is_empty() {
		Err(CreationError::FieldEmpty(field))
	} else if value.len() > max_len {
		Err(CreationError::FieldTooLong(field))
	} else if value.chars().any(char::is_control) {
		Err(CreationError::InvalidCharacter(field))
	} else {
		Ok(())
	}
}

/// The merchant's registered Pix key, an e-mail address, phone number, tax id
/// or random UUID alias under which the payee receives the payment.
///
/// # Invariants
/// The key is between 1 and 77 __bytes__ long and contains no control
/// characters.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct PixKey(String);

impl PixKey {
	/// Creates a new `PixKey` if `key` is between 1 and 77 __bytes__ long and
	/// free of control characters, returns a [`CreationError`] otherwise.
	///
	/// Please note that single characters may use more than one byte due to
	/// UTF8 encoding.
	pub fn new(key: String) -> Result<PixKey, CreationError> {
		check_field(&key, 77, Field::PixKey)?;
		Ok(PixKey(key))
	}

	/// Returns the underlying key `String`.
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl Display for PixKey {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// The payee's name as registered with their bank.
///
/// # Invariants
/// The name is between 1 and 25 __bytes__ long and contains no control
/// characters.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct MerchantName(String);

impl MerchantName {
	/// Creates a new `MerchantName` if `name` is between 1 and 25 __bytes__
	/// long and free of control characters, returns a [`CreationError`]
	/// otherwise.
	pub fn new(name: String) -> Result<MerchantName, CreationError> {
		check_field(&name, 25, Field::MerchantName)?;
		Ok(MerchantName(name))
	}

	/// Returns the underlying name `String`.
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl Display for MerchantName {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// The payee's city, uppercase ASCII without accents by convention.
///
/// # Invariants
/// The city is between 1 and 15 __bytes__ long and contains no control
/// characters. The uppercase convention is not enforced.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct MerchantCity(String);

impl MerchantCity {
	/// Creates a new `MerchantCity` if `city` is between 1 and 15 __bytes__
	/// long and free of control characters, returns a [`CreationError`]
	/// otherwise.
	pub fn new(city: String) -> Result<MerchantCity, CreationError> {
		check_field(&city, 15, Field::MerchantCity)?;
		Ok(MerchantCity(city))
	}

	/// Returns the underlying city `String`.
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl Display for MerchantCity {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A free text note shown to the payer along with the payment details.
///
/// # Invariants
/// The description is between 1 and 72 __bytes__ long and contains no control
/// characters. The upper bound keeps the merchant account information
/// container within its 99 byte limit next to the scheme identifier and the
/// shortest possible key; [`PixCodeBuilder::build`] checks the aggregate
/// against the actual key.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Description(String);

impl Description {
	/// Creates a new `Description` if `description` is between 1 and 72
	/// __bytes__ long and free of control characters, returns a
	/// [`CreationError`] otherwise.
	///
	/// Please note that single characters may use more than one byte due to
	/// UTF8 encoding.
	pub fn new(description: String) -> Result<Description, CreationError> {
		check_field(&description, 72, Field::Description)?;
		Ok(Description(description))
	}

	/// Returns the underlying description `String`.
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl Display for Description {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// The caller supplied transaction id, carried in the payload as the
/// reference label and echoed back by the payer's bank for conciliation.
///
/// # Invariants
/// The label is either the literal `"***"`, meaning that no id is tracked,
/// or between 1 and 25 ASCII alphanumeric characters.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TransactionId(String);

impl TransactionId {
	/// Creates a new `TransactionId` if `label` is `"***"` or between 1 and
	/// 25 ASCII alphanumeric characters, returns a [`CreationError`]
	/// otherwise.
	pub fn new(label: String) -> Result<TransactionId, CreationError> {
		if label == constants::REFERENCE_LABEL_NONE {
			return Ok(TransactionId(label));
		}
		if label.is_empty() {
			Err(CreationError::FieldEmpty(Field::TransactionId))
		} else if label.len() > 25 {
			Err(CreationError::FieldTooLong(Field::TransactionId))
		} else if !label.bytes().all(|b| b.is_ascii_alphanumeric()) {
			Err(CreationError::InvalidCharacter(Field::TransactionId))
		} else {
			Ok(TransactionId(label))
		}
	}

	/// Returns the `"***"` label standing in for an untracked transaction.
	pub fn none() -> TransactionId {
		TransactionId(constants::REFERENCE_LABEL_NONE.to_owned())
	}

	/// Whether this label is the `"***"` marker rather than an actual id.
	pub fn is_none(&self) -> bool {
		self.0 == constants::REFERENCE_LABEL_NONE
	}

	/// Returns the underlying label `String`.
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl Display for TransactionId {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A four digit ISO 18245 merchant category code, serialized with leading
/// zeros.
///
/// # Invariants
/// The code is at most `9999`.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct MerchantCategoryCode(u16);

impl MerchantCategoryCode {
	/// Creates a new `MerchantCategoryCode` if `code` has at most four
	/// digits, returns [`CreationError::FieldTooLong`] otherwise.
	pub fn new(code: u16) -> Result<MerchantCategoryCode, CreationError> {
		if code > 9999 {
			Err(CreationError::FieldTooLong(Field::MerchantCategoryCode))
		} else {
			Ok(MerchantCategoryCode(code))
		}
	}

	/// Returns the numeric category code.
	pub fn code(&self) -> u16 {
		self.0
	}
}

/// The generic `0000` code used when no specific category is tracked.
impl Default for MerchantCategoryCode {
	fn default() -> Self {
		MerchantCategoryCode(0)
	}
}

impl Display for MerchantCategoryCode {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{:04}", self.0)
	}
}

/// A positive amount of Brazilian reais, stored as a number of centavos to
/// keep floating point artifacts out of the payload.
///
/// # Invariants
/// The amount is at most [`Amount::MAX`] so that its serialized form stays
/// within the thirteen characters the transaction amount field allows.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Amount(u64);

impl Amount {
	/// The largest representable amount, `9999999999.99` reais.
	pub const MAX: Amount = Amount(999_999_999_999);

	/// Creates an `Amount` from a number of centavos (hundredths of a real).
	pub fn from_centavos(centavos: u64) -> Result<Amount, CreationError> {
		if centavos > Amount::MAX.0 {
			return Err(CreationError::InvalidAmount);
		}
		Ok(Amount(centavos))
	}

	/// Creates an `Amount` from a value denominated in reais, e.g. `37.5`
	/// for R$ 37,50.
	///
	/// Fails with [`CreationError::InvalidAmount`] if `value` is negative,
	/// not finite, beyond [`Amount::MAX`] or carries precision below one
	/// centavo, which a two decimal payload field cannot represent.
	pub fn from_reais(value: f64) -> Result<Amount, CreationError> {
		if !value.is_finite() || value.is_sign_negative() {
			return Err(CreationError::InvalidAmount);
		}
		let rounded = libm::round(value * 100.0);
		if rounded > Amount::MAX.0 as f64 {
			return Err(CreationError::InvalidAmount);
		}
		let centavos = rounded as u64;
		// The conversion is only exact if the centavos map back to the same
		// float the caller passed in.
		if centavos as f64 / 100.0 != value {
			return Err(CreationError::InvalidAmount);
		}
		Ok(Amount(centavos))
	}

	/// Returns the amount in centavos.
	pub fn centavos(&self) -> u64 {
		self.0
	}
}

impl Display for Amount {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
	}
}

/// Represents a syntactically and semantically correct Pix BR Code.
///
/// There are three ways to construct a `PixCode`:
///  1. using [`PixCodeBuilder`]
///  2. using [`str::parse::<PixCode>(&str)`](core::str::FromStr)
///  3. using [`utils::create_pix_code`] (with the `std` feature)
///
/// Its [`Display`] implementation produces the "copia e cola" payload string.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct PixCode {
	pix_key: PixKey,
	merchant_name: MerchantName,
	merchant_city: MerchantCity,
	merchant_category_code: MerchantCategoryCode,
	amount: Option<Amount>,
	description: Option<Description>,
	transaction_id: TransactionId,
}

impl PixCode {
	/// Returns the payee's Pix key.
	pub fn pix_key(&self) -> &PixKey {
		&self.pix_key
	}

	/// Returns the merchant name.
	pub fn merchant_name(&self) -> &MerchantName {
		&self.merchant_name
	}

	/// Returns the merchant city.
	pub fn merchant_city(&self) -> &MerchantCity {
		&self.merchant_city
	}

	/// Returns the merchant category code.
	pub fn merchant_category_code(&self) -> MerchantCategoryCode {
		self.merchant_category_code
	}

	/// Returns the amount to charge, if the code asks for a specific one.
	/// Codes without an amount let the payer enter it.
	pub fn amount(&self) -> Option<Amount> {
		self.amount
	}

	/// Returns the free text description shown to the payer, if any.
	pub fn description(&self) -> Option<&Description> {
		self.description.as_ref()
	}

	/// Returns the transaction id carried as the reference label.
	pub fn transaction_id(&self) -> &TransactionId {
		&self.transaction_id
	}
}

/// Builder for [`PixCode`]s. Fallible setters stash their error away and
/// surface it from [`PixCodeBuilder::build`], so a code can be assembled in
/// one expression:
///
/// ```
/// use pix_brcode::PixCodeBuilder;
///
/// let code = PixCodeBuilder::new()
/// 	.pix_key("fulano@example.com".into())
/// 	.merchant_name("Fulano de Tal".into())
/// 	.merchant_city("SAO PAULO".into())
/// 	.amount_reais(37.5)
/// 	.transaction_id("ABC123".into())
/// 	.build()
/// 	.unwrap();
///
/// assert!(code.to_string().starts_with("000201"));
/// assert_eq!(code.amount().map(|a| a.centavos()), Some(3750));
/// ```
///
/// # Type parameters
/// The three parameters signal whether the builder already carries the
/// corresponding required field:
///  * `K`: the Pix key is set
///  * `N`: the merchant name is set
///  * `C`: the merchant city is set
///
/// `build` only becomes available once all three are [`tb::True`].
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PixCodeBuilder<K: tb::Bool, N: tb::Bool, C: tb::Bool> {
	pix_key: Option<PixKey>,
	merchant_name: Option<MerchantName>,
	merchant_city: Option<MerchantCity>,
	merchant_category_code: MerchantCategoryCode,
	amount: Option<Amount>,
	description: Option<Description>,
	transaction_id: TransactionId,
	error: Option<CreationError>,

	phantom_k: core::marker::PhantomData<K>,
	phantom_n: core::marker::PhantomData<N>,
	phantom_c: core::marker::PhantomData<C>,
}

impl PixCodeBuilder<tb::False, tb::False, tb::False> {
	/// Construct new, empty `PixCodeBuilder`. All necessary fields have to be
	/// filled first before `PixCodeBuilder::build(self)` becomes available.
	pub fn new() -> Self {
		PixCodeBuilder {
			pix_key: None,
			merchant_name: None,
			merchant_city: None,
			merchant_category_code: MerchantCategoryCode::default(),
			amount: None,
			description: None,
			transaction_id: TransactionId::none(),
			error: None,

			phantom_k: core::marker::PhantomData,
			phantom_n: core::marker::PhantomData,
			phantom_c: core::marker::PhantomData,
		}
	}
}

impl<K: tb::Bool, N: tb::Bool, C: tb::Bool> PixCodeBuilder<K, N, C> {
	/// Helper function to set the completeness flags.
	fn set_flags<KN: tb::Bool, NN: tb::Bool, CN: tb::Bool>(self) -> PixCodeBuilder<KN, NN, CN> {
		PixCodeBuilder::<KN, NN, CN> {
			pix_key: self.pix_key,
			merchant_name: self.merchant_name,
			merchant_city: self.merchant_city,
			merchant_category_code: self.merchant_category_code,
			amount: self.amount,
			description: self.description,
			transaction_id: self.transaction_id,
			error: self.error,

			phantom_k: core::marker::PhantomData,
			phantom_n: core::marker::PhantomData,
			phantom_c: core::marker::PhantomData,
		}
	}

	/// Sets the amount to charge. An amount of zero stands for "let the payer
	/// enter the amount" and leaves the transaction amount field out of the
	/// payload.
	pub fn amount(mut self, amount: Amount) -> Self {
		if amount.centavos() == 0 {
			self.amount = None;
		} else {
			self.amount = Some(amount);
		}
		self
	}

	/// Sets the amount to charge from a value in reais, see
	/// [`Amount::from_reais`]. An amount of zero leaves the transaction
	/// amount field out of the payload.
	pub fn amount_reais(mut self, value: f64) -> Self {
		match Amount::from_reais(value) {
			Ok(a) => return self.amount(a),
			Err(e) => self.error = Some(e),
		}
		self
	}

	/// Sets the free text description carried next to the key.
	pub fn description(mut self, description: String) -> Self {
		match Description::new(description) {
			Ok(d) => self.description = Some(d),
			Err(e) => self.error = Some(e),
		}
		self
	}

	/// Sets the transaction id carried as the reference label. Codes start
	/// out with the untracked `"***"` label.
	pub fn transaction_id(mut self, transaction_id: String) -> Self {
		match TransactionId::new(transaction_id) {
			Ok(t) => self.transaction_id = t,
			Err(e) => self.error = Some(e),
		}
		self
	}

	/// Sets the merchant category code. Codes start out with the generic
	/// `0000`.
	pub fn merchant_category_code(mut self, code: u16) -> Self {
		match MerchantCategoryCode::new(code) {
			Ok(c) => self.merchant_category_code = c,
			Err(e) => self.error = Some(e),
		}
		self
	}
}

impl<N: tb::Bool, C: tb::Bool> PixCodeBuilder<tb::False, N, C> {
	/// Sets the payee's Pix key. This function is only available if no key
	/// was set yet.
	pub fn pix_key(mut self, key: String) -> PixCodeBuilder<tb::True, N, C> {
		match PixKey::new(key) {
			Ok(k) => self.pix_key = Some(k),
			Err(e) => self.error = Some(e),
		}
		self.set_flags()
	}
}

impl<K: tb::Bool, C: tb::Bool> PixCodeBuilder<K, tb::False, C> {
	/// Sets the merchant name. This function is only available if no name was
	/// set yet.
	pub fn merchant_name(mut self, name: String) -> PixCodeBuilder<K, tb::True, C> {
		match MerchantName::new(name) {
			Ok(n) => self.merchant_name = Some(n),
			Err(e) => self.error = Some(e),
		}
		self.set_flags()
	}
}

impl<K: tb::Bool, N: tb::Bool> PixCodeBuilder<K, N, tb::False> {
	/// Sets the merchant city. This function is only available if no city was
	/// set yet.
	pub fn merchant_city(mut self, city: String) -> PixCodeBuilder<K, N, tb::True> {
		match MerchantCity::new(city) {
			Ok(c) => self.merchant_city = Some(c),
			Err(e) => self.error = Some(e),
		}
		self.set_flags()
	}
}

impl PixCodeBuilder<tb::True, tb::True, tb::True> {
	/// Builds a `PixCode` if no [`CreationError`] occurred while setting any
	/// of the fields.
	pub fn build(self) -> Result<PixCode, CreationError> {
		// If an error occurred at any time before, return it now
		if let Some(e) = self.error {
			return Err(e);
		}

		let pix_key = self.pix_key.expect("ensured to be Some(k) by type K");
		let merchant_name = self.merchant_name.expect("ensured to be Some(n) by type N");
		let merchant_city = self.merchant_city.expect("ensured to be Some(c) by type C");

		// Field 26 nests the scheme identifier, the key and the optional
		// description, each behind its own two digit id and length. The
		// container value sits behind a two digit length itself and therefore
		// must not exceed 99 bytes.
		let mut account_information_len = 4 + constants::PIX_GUI.len() + 4 + pix_key.0.len();
		if let Some(ref description) = self.description {
			account_information_len += 4 + description.0.len();
		}
		if account_information_len > 99 {
			return Err(CreationError::FieldTooLong(Field::MerchantAccountInformation));
		}

		Ok(PixCode {
			pix_key,
			merchant_name,
			merchant_city,
			merchant_category_code: self.merchant_category_code,
			amount: self.amount,
			description: self.description,
			transaction_id: self.transaction_id,
		})
	}
}

#[cfg(feature = "serde")]
impl Serialize for PixCode {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.to_string().as_str())
	}
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for PixCode {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<PixCode, D::Error> {
		let string = String::deserialize(deserializer)?;
		string.parse::<PixCode>().map_err(|e| D::Error::custom(alloc::format!("{:?}", e)))
	}
}
