// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Parsing and verification of serialized payloads.
//!
//! Parsing happens in two passes: a syntactic walk over the `id + length +
//! value` entries which also verifies the checksum, and a semantic pass
//! mapping the collected values onto a [`PixCode`] through the same
//! validation the builder applies. Unknown field ids are skipped, the
//! mandated field order is enforced regardless.

#[cfg(feature = "std")]
use std::error;

use core::fmt;
use core::fmt::{Display, Formatter};
use core::str::FromStr;

use crate::prelude::*;
use crate::{constants, crc, Amount, CreationError, PixCode, PixCodeBuilder};

/// Errors raised while walking the byte layer of a payload.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ParseError {
	/// A field id contained a byte that is not an ASCII digit.
	MalformedFieldId,
	/// A length prefix contained a byte that is not an ASCII digit.
	MalformedLength,
	/// A declared length overran the end of its payload or cut a UTF8
	/// character in half.
	TruncatedField,
	/// Field ids were not strictly ascending. Duplicates fail this check as
	/// well.
	FieldOutOfOrder,
	/// The payload ended without a checksum field.
	MissingChecksum,
	/// The checksum field did not carry exactly four uppercase hex digits.
	MalformedChecksum,
	/// The checksum did not match the payload content.
	ChecksumMismatch,
	/// Data followed the checksum field, which must be the final one.
	TrailingData,
}

/// Errors raised by a syntactically well formed payload whose content does
/// not describe a valid Pix BR Code.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SemanticError {
	/// The payload format indicator field was missing.
	MissingPayloadFormatIndicator,
	/// The payload format indicator announced a version other than `"01"`.
	UnsupportedVersion,
	/// The merchant account information container or its scheme identifier
	/// was missing.
	MissingMerchantAccountInformation,
	/// The scheme identifier was not the Pix one, compared case
	/// insensitively.
	UnsupportedScheme,
	/// The merchant account information carried no Pix key.
	MissingPixKey,
	/// The merchant category code field was missing.
	MissingMerchantCategoryCode,
	/// The merchant category code was not four ASCII digits.
	InvalidMerchantCategoryCode,
	/// The transaction currency field was missing.
	MissingCurrency,
	/// The transaction currency was not `"986"` (BRL).
	UnsupportedCurrency,
	/// The country code field was missing.
	MissingCountry,
	/// The country code was not `"BR"`.
	UnsupportedCountry,
	/// The merchant name field was missing.
	MissingMerchantName,
	/// The merchant city field was missing.
	MissingMerchantCity,
	/// The additional data field template carried no reference label.
	MissingReferenceLabel,
	/// A field value violated the bounds enforced at creation time.
	Creation(CreationError),
}

/// Top level error for [`PixCode::from_str`](core::str::FromStr).
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ParseOrSemanticError {
	/// The payload couldn't be decoded.
	ParseError(ParseError),
	/// The payload could be decoded but does not describe a valid Pix BR
	/// Code.
	SemanticError(SemanticError),
}

impl Display for ParseError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			ParseError::MalformedFieldId => {
				f.write_str("A field id contained a byte that is not an ASCII digit")
			},
			ParseError::MalformedLength => {
				f.write_str("A length prefix contained a byte that is not an ASCII digit")
			},
			ParseError::TruncatedField => {
				f.write_str("A declared field length overran the end of the payload")
			},
			ParseError::FieldOutOfOrder => f.write_str("Field ids were not strictly ascending"),
			ParseError::MissingChecksum => {
				f.write_str("The payload ended without a checksum field")
			},
			ParseError::MalformedChecksum => {
				f.write_str("The checksum field did not carry four uppercase hex digits")
			},
			ParseError::ChecksumMismatch => {
				f.write_str("The checksum did not match the payload content")
			},
			ParseError::TrailingData => f.write_str("Data followed the checksum field"),
		}
	}
}

impl Display for SemanticError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			SemanticError::MissingPayloadFormatIndicator => {
				f.write_str("No payload format indicator field")
			},
			SemanticError::UnsupportedVersion => f.write_str("Unsupported payload format version"),
			SemanticError::MissingMerchantAccountInformation => {
				f.write_str("No merchant account information or scheme identifier")
			},
			SemanticError::UnsupportedScheme => f.write_str("Not a payload of the Pix scheme"),
			SemanticError::MissingPixKey => f.write_str("No Pix key"),
			SemanticError::MissingMerchantCategoryCode => {
				f.write_str("No merchant category code field")
			},
			SemanticError::InvalidMerchantCategoryCode => {
				f.write_str("The merchant category code was not four ASCII digits")
			},
			SemanticError::MissingCurrency => f.write_str("No transaction currency field"),
			SemanticError::UnsupportedCurrency => {
				f.write_str("The transaction currency was not BRL")
			},
			SemanticError::MissingCountry => f.write_str("No country code field"),
			SemanticError::UnsupportedCountry => f.write_str("The country code was not BR"),
			SemanticError::MissingMerchantName => f.write_str("No merchant name field"),
			SemanticError::MissingMerchantCity => f.write_str("No merchant city field"),
			SemanticError::MissingReferenceLabel => f.write_str("No reference label"),
			SemanticError::Creation(ref e) => write!(f, "{}", e),
		}
	}
}

impl Display for ParseOrSemanticError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			ParseOrSemanticError::ParseError(ref e) => e.fmt(f),
			ParseOrSemanticError::SemanticError(ref e) => e.fmt(f),
		}
	}
}

#[cfg(feature = "std")]
impl error::Error for ParseError {}

#[cfg(feature = "std")]
impl error::Error for SemanticError {}

#[cfg(feature = "std")]
impl error::Error for ParseOrSemanticError {}

impl From<CreationError> for SemanticError {
	fn from(e: CreationError) -> Self {
		SemanticError::Creation(e)
	}
}

impl From<ParseError> for ParseOrSemanticError {
	fn from(e: ParseError) -> Self {
		ParseOrSemanticError::ParseError(e)
	}
}

impl From<SemanticError> for ParseOrSemanticError {
	fn from(e: SemanticError) -> Self {
		ParseOrSemanticError::SemanticError(e)
	}
}

/// One decoded `id + length + value` entry.
struct RawField<'a> {
	id: u8,
	value: &'a str,
}

/// Decodes the two ASCII digits starting at byte `at`, failing with `err` on
/// any other byte.
fn two_digits(payload: &str, at: usize, err: ParseError) -> Result<u8, ParseError> {
	let bytes = payload.as_bytes();
	if at + 2 > bytes.len() {
		return Err(ParseError::TruncatedField);
	}
	let (a, b) = (bytes[at], bytes[at + 1]);
	if !a.is_ascii_digit() || !b.is_ascii_digit() {
		return Err(err);
	}
	Ok((a - b'0') * 10 + (b - b'0'))
}

/// Walks the `id + length + value` entries of a payload or of a container
/// value, enforcing strictly ascending ids.
struct FieldReader<'a> {
	payload: &'a str,
	pos: usize,
	last_id: Option<u8>,
}

impl<'a> FieldReader<'a> {
	fn new(payload: &'a str) -> Self {
		FieldReader { payload, pos: 0, last_id: None }
	}

	fn at_end(&self) -> bool {
		self.pos == self.payload.len()
	}

	fn next_field(&mut self) -> Result<RawField<'a>, ParseError> {
		let id = two_digits(self.payload, self.pos, ParseError::MalformedFieldId)?;
		let len = two_digits(self.payload, self.pos + 2, ParseError::MalformedLength)? as usize;
		let start = self.pos + 4;
		if start + len > self.payload.len() {
			return Err(ParseError::TruncatedField);
		}
		// A declared length that cuts a UTF8 character in half counted the
		// wrong number of bytes.
		let value = self.payload.get(start..start + len).ok_or(ParseError::TruncatedField)?;
		if let Some(last) = self.last_id {
			if id <= last {
				return Err(ParseError::FieldOutOfOrder);
			}
		}
		self.last_id = Some(id);
		self.pos = start + len;
		Ok(RawField { id, value })
	}
}

/// The field values of one payload after the syntactic pass, still unchecked.
#[derive(Default)]
struct RawPixFields<'a> {
	payload_format_indicator: Option<&'a str>,
	gui: Option<&'a str>,
	pix_key: Option<&'a str>,
	description: Option<&'a str>,
	merchant_category_code: Option<&'a str>,
	currency: Option<&'a str>,
	amount: Option<&'a str>,
	country: Option<&'a str>,
	merchant_name: Option<&'a str>,
	merchant_city: Option<&'a str>,
	reference_label: Option<&'a str>,
}

fn parse_account_information<'a>(
	value: &'a str, fields: &mut RawPixFields<'a>,
) -> Result<(), ParseError> {
	let mut reader = FieldReader::new(value);
	while !reader.at_end() {
		let sub = reader.next_field()?;
		match sub.id {
			constants::SUBTAG_GUI => fields.gui = Some(sub.value),
			constants::SUBTAG_PIX_KEY => fields.pix_key = Some(sub.value),
			constants::SUBTAG_DESCRIPTION => fields.description = Some(sub.value),
			_ => {},
		}
	}
	Ok(())
}

fn parse_additional_data<'a>(
	value: &'a str, fields: &mut RawPixFields<'a>,
) -> Result<(), ParseError> {
	let mut reader = FieldReader::new(value);
	while !reader.at_end() {
		let sub = reader.next_field()?;
		if sub.id == constants::SUBTAG_REFERENCE_LABEL {
			fields.reference_label = Some(sub.value);
		}
	}
	Ok(())
}

/// Walks all fields of `payload`, verifies the terminal checksum and collects
/// the known field values.
fn parse_raw(payload: &str) -> Result<RawPixFields<'_>, ParseError> {
	let mut reader = FieldReader::new(payload);
	let mut fields = RawPixFields::default();
	loop {
		if reader.at_end() {
			return Err(ParseError::MissingChecksum);
		}
		let field = reader.next_field()?;
		if field.id == constants::TAG_CRC {
			if field.value.len() != 4
				|| !field.value.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
			{
				return Err(ParseError::MalformedChecksum);
			}
			if !reader.at_end() {
				return Err(ParseError::TrailingData);
			}
			// The checksum covers everything up to and including its own id
			// and length prefix.
			let covered = &payload[..payload.len() - 4];
			let expected = crc::checksum(covered.as_bytes());
			let actual = u16::from_str_radix(field.value, 16)
				.map_err(|_| ParseError::MalformedChecksum)?;
			if actual != expected {
				return Err(ParseError::ChecksumMismatch);
			}
			return Ok(fields);
		}
		match field.id {
			constants::TAG_PAYLOAD_FORMAT_INDICATOR => {
				fields.payload_format_indicator = Some(field.value)
			},
			constants::TAG_MERCHANT_ACCOUNT_INFORMATION => {
				parse_account_information(field.value, &mut fields)?
			},
			constants::TAG_MERCHANT_CATEGORY_CODE => {
				fields.merchant_category_code = Some(field.value)
			},
			constants::TAG_TRANSACTION_CURRENCY => fields.currency = Some(field.value),
			constants::TAG_TRANSACTION_AMOUNT => fields.amount = Some(field.value),
			constants::TAG_COUNTRY_CODE => fields.country = Some(field.value),
			constants::TAG_MERCHANT_NAME => fields.merchant_name = Some(field.value),
			constants::TAG_MERCHANT_CITY => fields.merchant_city = Some(field.value),
			constants::TAG_ADDITIONAL_DATA_FIELD_TEMPLATE => {
				parse_additional_data(field.value, &mut fields)?
			},
			// Unknown ids are skipped, the ordering rule applies regardless.
			_ => {},
		}
	}
}

/// Amounts serialize as a plain decimal with exactly two fraction digits, a
/// `.` separator and no leading zeros, `"0.00"` through `"9999999999.99"`.
fn parse_amount(value: &str) -> Result<Amount, SemanticError> {
	const INVALID: SemanticError = SemanticError::Creation(CreationError::InvalidAmount);

	let (integer, fraction) = value.split_once('.').ok_or(INVALID)?;
	if integer.is_empty() || integer.len() > 10 || !integer.bytes().all(|b| b.is_ascii_digit()) {
		return Err(INVALID);
	}
	if integer.len() > 1 && integer.starts_with('0') {
		return Err(INVALID);
	}
	if fraction.len() != 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
		return Err(INVALID);
	}
	let reais = integer.parse::<u64>().map_err(|_| INVALID)?;
	let centavos = fraction.parse::<u64>().map_err(|_| INVALID)?;
	Amount::from_centavos(reais * 100 + centavos).map_err(SemanticError::Creation)
}

fn parse_category_code(value: &str) -> Result<u16, SemanticError> {
	if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
		return Err(SemanticError::InvalidMerchantCategoryCode);
	}
	value.parse::<u16>().map_err(|_| SemanticError::InvalidMerchantCategoryCode)
}

fn pix_code_from_raw(fields: &RawPixFields) -> Result<PixCode, SemanticError> {
	let version = fields
		.payload_format_indicator
		.ok_or(SemanticError::MissingPayloadFormatIndicator)?;
	if version != constants::PAYLOAD_FORMAT_INDICATOR {
		return Err(SemanticError::UnsupportedVersion);
	}

	let gui = fields.gui.ok_or(SemanticError::MissingMerchantAccountInformation)?;
	if !gui.eq_ignore_ascii_case(constants::PIX_GUI) {
		return Err(SemanticError::UnsupportedScheme);
	}
	let pix_key = fields.pix_key.ok_or(SemanticError::MissingPixKey)?;

	let category = fields
		.merchant_category_code
		.ok_or(SemanticError::MissingMerchantCategoryCode)?;
	let category = parse_category_code(category)?;

	let currency = fields.currency.ok_or(SemanticError::MissingCurrency)?;
	if currency != constants::CURRENCY_BRL {
		return Err(SemanticError::UnsupportedCurrency);
	}
	let country = fields.country.ok_or(SemanticError::MissingCountry)?;
	if country != constants::COUNTRY_CODE_BR {
		return Err(SemanticError::UnsupportedCountry);
	}

	let merchant_name = fields.merchant_name.ok_or(SemanticError::MissingMerchantName)?;
	let merchant_city = fields.merchant_city.ok_or(SemanticError::MissingMerchantCity)?;
	let reference_label = fields.reference_label.ok_or(SemanticError::MissingReferenceLabel)?;

	// Creation errors of the builder, e.g. an over-length merchant name,
	// surface as `SemanticError::Creation`.
	let mut builder = PixCodeBuilder::new()
		.pix_key(pix_key.to_owned())
		.merchant_name(merchant_name.to_owned())
		.merchant_city(merchant_city.to_owned())
		.merchant_category_code(category)
		.transaction_id(reference_label.to_owned());
	if let Some(description) = fields.description {
		builder = builder.description(description.to_owned());
	}
	if let Some(amount) = fields.amount {
		builder = builder.amount(parse_amount(amount)?);
	}
	builder.build().map_err(SemanticError::Creation)
}

impl FromStr for PixCode {
	type Err = ParseOrSemanticError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let fields = parse_raw(s)?;
		Ok(pix_code_from_raw(&fields)?)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::Field;

	const REFERENCE_PAYLOAD: &str =
		"00020126580014br.gov.bcb.pix0136123e4567-e12b-12d1-a456-426655440000\
		5204000053039865802BR5913Fulano de Tal6008BRASILIA62070503***63041D3D";

	/// Appends the checksum field to `body` so tests can craft payloads.
	fn sealed(body: &str) -> String {
		let mut payload = String::from(body);
		payload.push_str("6304");
		let checksum = crc::checksum(payload.as_bytes());
		format!("{}{:04X}", payload, checksum)
	}

	fn reference_body() -> &'static str {
		&REFERENCE_PAYLOAD[..REFERENCE_PAYLOAD.len() - 8]
	}

	#[test]
	fn test_parses_reference_payload() {
		let code: PixCode = REFERENCE_PAYLOAD.parse().unwrap();
		assert_eq!(code.pix_key().to_string(), "123e4567-e12b-12d1-a456-426655440000");
		assert_eq!(code.merchant_name().to_string(), "Fulano de Tal");
		assert_eq!(code.merchant_city().to_string(), "BRASILIA");
		assert_eq!(code.merchant_category_code().code(), 0);
		assert_eq!(code.amount(), None);
		assert_eq!(code.description(), None);
		assert!(code.transaction_id().is_none());
	}

	#[test]
	fn test_reference_payload_round_trips() {
		let code: PixCode = REFERENCE_PAYLOAD.parse().unwrap();
		assert_eq!(code.to_string(), REFERENCE_PAYLOAD);
	}

	#[test]
	fn test_sealed_matches_reference() {
		assert_eq!(sealed(reference_body()), REFERENCE_PAYLOAD);
	}

	#[test]
	fn test_rejects_checksum_mismatch() {
		let mut tampered = String::from(&REFERENCE_PAYLOAD[..REFERENCE_PAYLOAD.len() - 1]);
		tampered.push('E');
		assert_eq!(
			tampered.parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::ChecksumMismatch))
		);

		// Corrupting the body without fixing up the checksum must fail too.
		let tampered = REFERENCE_PAYLOAD.replace("Fulano", "Fulana");
		assert_eq!(
			tampered.parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::ChecksumMismatch))
		);
	}

	#[test]
	fn test_rejects_malformed_checksum() {
		let lowercase = REFERENCE_PAYLOAD.replace("1D3D", "1d3d");
		assert_eq!(
			lowercase.parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::MalformedChecksum))
		);

		let mut short = String::from(reference_body());
		short.push_str("6303ABC");
		assert_eq!(
			short.parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::MalformedChecksum))
		);
	}

	#[test]
	fn test_rejects_trailing_data() {
		let mut trailing = String::from(REFERENCE_PAYLOAD);
		trailing.push('0');
		assert_eq!(
			trailing.parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::TrailingData))
		);
	}

	#[test]
	fn test_rejects_truncation() {
		assert_eq!(
			REFERENCE_PAYLOAD[..20].parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::TruncatedField))
		);
		assert_eq!(
			REFERENCE_PAYLOAD[..REFERENCE_PAYLOAD.len() - 1].parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::TruncatedField))
		);
		assert_eq!(
			"".parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::MissingChecksum))
		);
	}

	#[test]
	fn test_rejects_malformed_prefixes() {
		assert_eq!(
			"xx0201".parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::MalformedFieldId))
		);
		assert_eq!(
			"00xx01".parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::MalformedLength))
		);
	}

	#[test]
	fn test_rejects_out_of_order_fields() {
		assert_eq!(
			sealed("000201530398652040000").parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::FieldOutOfOrder))
		);
		// Duplicates are out of order as well.
		assert_eq!(
			sealed("000201000201").parse::<PixCode>(),
			Err(ParseOrSemanticError::ParseError(ParseError::FieldOutOfOrder))
		);
	}

	#[test]
	fn test_skips_unknown_fields() {
		// A point of initiation method field (id 01) is not part of this
		// profile but must not break parsing.
		let body = format!("{}{}{}", &reference_body()[..6], "010212", &reference_body()[6..]);
		let code: PixCode = sealed(&body).parse().unwrap();
		assert_eq!(code, REFERENCE_PAYLOAD.parse().unwrap());
	}

	#[test]
	fn test_skips_unknown_subfields() {
		let account = "0014br.gov.bcb.pix0136123e4567-e12b-12d1-a456-4266554400000303xyz";
		let body = format!(
			"00020126{:02}{}5204000053039865802BR5913Fulano de Tal6008BRASILIA62070503***",
			account.len(),
			account
		);
		let code: PixCode = sealed(&body).parse().unwrap();
		assert_eq!(code.pix_key().to_string(), "123e4567-e12b-12d1-a456-426655440000");
	}

	#[test]
	fn test_scheme_identifier_case_insensitive() {
		let account = "0014BR.GOV.BCB.PIX0136123e4567-e12b-12d1-a456-426655440000";
		let body = format!(
			"00020126{:02}{}5204000053039865802BR5913Fulano de Tal6008BRASILIA62070503***",
			account.len(),
			account
		);
		let code: PixCode = sealed(&body).parse().unwrap();
		assert_eq!(code.pix_key().to_string(), "123e4567-e12b-12d1-a456-426655440000");
	}

	#[test]
	fn test_semantic_missing_fields() {
		assert_eq!(
			sealed("000201").parse::<PixCode>(),
			Err(ParseOrSemanticError::SemanticError(
				SemanticError::MissingMerchantAccountInformation
			))
		);

		let no_indicator = &reference_body()[6..];
		assert_eq!(
			sealed(no_indicator).parse::<PixCode>(),
			Err(ParseOrSemanticError::SemanticError(
				SemanticError::MissingPayloadFormatIndicator
			))
		);

		let no_name = reference_body().replace("5913Fulano de Tal", "");
		assert_eq!(
			sealed(&no_name).parse::<PixCode>(),
			Err(ParseOrSemanticError::SemanticError(SemanticError::MissingMerchantName))
		);

		let no_label = reference_body().replace("62070503***", "");
		assert_eq!(
			sealed(&no_label).parse::<PixCode>(),
			Err(ParseOrSemanticError::SemanticError(SemanticError::MissingReferenceLabel))
		);
	}

	#[test]
	fn test_semantic_unsupported_constants() {
		let wrong_version = reference_body().replace("000201", "000202");
		assert_eq!(
			sealed(&wrong_version).parse::<PixCode>(),
			Err(ParseOrSemanticError::SemanticError(SemanticError::UnsupportedVersion))
		);

		let wrong_currency = reference_body().replace("5303986", "5303840");
		assert_eq!(
			sealed(&wrong_currency).parse::<PixCode>(),
			Err(ParseOrSemanticError::SemanticError(SemanticError::UnsupportedCurrency))
		);

		let wrong_country = reference_body().replace("5802BR", "5802US");
		assert_eq!(
			sealed(&wrong_country).parse::<PixCode>(),
			Err(ParseOrSemanticError::SemanticError(SemanticError::UnsupportedCountry))
		);

		let account = "0016br.gov.bcb.wrong0136123e4567-e12b-12d1-a456-426655440000";
		let body = format!(
			"00020126{:02}{}5204000053039865802BR5913Fulano de Tal6008BRASILIA62070503***",
			account.len(),
			account
		);
		assert_eq!(
			sealed(&body).parse::<PixCode>(),
			Err(ParseOrSemanticError::SemanticError(SemanticError::UnsupportedScheme))
		);
	}

	#[test]
	fn test_semantic_bounds_violations() {
		let long_name = reference_body()
			.replace("5913Fulano de Tal", "5930Fulano de Tal e Sua Banda xxxx");
		assert_eq!(
			sealed(&long_name).parse::<PixCode>(),
			Err(ParseOrSemanticError::SemanticError(SemanticError::Creation(
				CreationError::FieldTooLong(Field::MerchantName)
			)))
		);
	}

	#[test]
	fn test_amount_grammar() {
		assert_eq!(parse_amount("37.50").unwrap().centavos(), 3750);
		assert_eq!(parse_amount("0.05").unwrap().centavos(), 5);
		assert_eq!(parse_amount("9999999999.99").unwrap(), Amount::MAX);

		const INVALID: SemanticError = SemanticError::Creation(CreationError::InvalidAmount);
		assert_eq!(parse_amount("37.5"), Err(INVALID));
		assert_eq!(parse_amount("37"), Err(INVALID));
		assert_eq!(parse_amount("07.50"), Err(INVALID));
		assert_eq!(parse_amount(".50"), Err(INVALID));
		assert_eq!(parse_amount("37.505"), Err(INVALID));
		assert_eq!(parse_amount("3x.50"), Err(INVALID));
		assert_eq!(parse_amount("-1.00"), Err(INVALID));
		assert_eq!(parse_amount(""), Err(INVALID));
	}

	#[test]
	fn test_amount_field_parsed() {
		let with_amount = reference_body().replace("5802BR", "540537.505802BR");
		let code: PixCode = sealed(&with_amount).parse().unwrap();
		assert_eq!(code.amount().map(|a| a.centavos()), Some(3750));

		// A zero amount normalizes to "payer enters the amount".
		let with_zero = reference_body().replace("5802BR", "54040.005802BR");
		let code: PixCode = sealed(&with_zero).parse().unwrap();
		assert_eq!(code.amount(), None);
	}

	#[test]
	fn test_category_code_parsed() {
		let with_category = reference_body().replace("52040000", "52045812");
		let code: PixCode = sealed(&with_category).parse().unwrap();
		assert_eq!(code.merchant_category_code().code(), 5812);

		let bad_category = reference_body().replace("52040000", "520400x0");
		assert_eq!(
			sealed(&bad_category).parse::<PixCode>(),
			Err(ParseOrSemanticError::SemanticError(
				SemanticError::InvalidMerchantCategoryCode
			))
		);
	}
}
