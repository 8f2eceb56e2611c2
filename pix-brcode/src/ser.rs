// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Serialization of [`PixCode`]s into their "copia e cola" payload form: a
//! sequence of `id + length + value` entries, each prefix two ASCII digits,
//! sealed by the CRC field.

use core::fmt;
use core::fmt::{Display, Formatter};

use crate::prelude::*;
use crate::{constants, crc, PixCode};

/// Appends `n` as two zero padded decimal digits.
fn push_two_digits(out: &mut String, n: u8) {
	debug_assert!(n < 100);
	out.push(char::from(b'0' + n / 10));
	out.push(char::from(b'0' + n % 10));
}

/// Appends one `id + length + value` entry. The length prefix counts value
/// __bytes__, which the field types and the builder cap at 99.
fn push_field(out: &mut String, id: u8, value: &str) {
	debug_assert!(value.len() <= 99);
	push_two_digits(out, id);
	push_two_digits(out, value.len() as u8);
	out.push_str(value);
}

impl PixCode {
	/// The value of the merchant account information container: the Pix
	/// scheme identifier, the key and the optional description as nested
	/// entries.
	fn merchant_account_information(&self) -> String {
		let mut value = String::new();
		push_field(&mut value, constants::SUBTAG_GUI, constants::PIX_GUI);
		push_field(&mut value, constants::SUBTAG_PIX_KEY, &self.pix_key.0);
		if let Some(ref description) = self.description {
			push_field(&mut value, constants::SUBTAG_DESCRIPTION, &description.0);
		}
		value
	}

	/// Serializes every field up to and including the id and length of the
	/// terminal CRC field. These are exactly the bytes its checksum covers.
	fn checksummed_body(&self) -> String {
		let mut body = String::with_capacity(160);
		push_field(
			&mut body,
			constants::TAG_PAYLOAD_FORMAT_INDICATOR,
			constants::PAYLOAD_FORMAT_INDICATOR,
		);
		push_field(
			&mut body,
			constants::TAG_MERCHANT_ACCOUNT_INFORMATION,
			&self.merchant_account_information(),
		);
		push_field(
			&mut body,
			constants::TAG_MERCHANT_CATEGORY_CODE,
			&self.merchant_category_code.to_string(),
		);
		push_field(&mut body, constants::TAG_TRANSACTION_CURRENCY, constants::CURRENCY_BRL);
		if let Some(amount) = self.amount {
			push_field(&mut body, constants::TAG_TRANSACTION_AMOUNT, &amount.to_string());
		}
		push_field(&mut body, constants::TAG_COUNTRY_CODE, constants::COUNTRY_CODE_BR);
		push_field(&mut body, constants::TAG_MERCHANT_NAME, &self.merchant_name.0);
		push_field(&mut body, constants::TAG_MERCHANT_CITY, &self.merchant_city.0);

		let mut additional_data = String::new();
		push_field(&mut additional_data, constants::SUBTAG_REFERENCE_LABEL, &self.transaction_id.0);
		push_field(&mut body, constants::TAG_ADDITIONAL_DATA_FIELD_TEMPLATE, &additional_data);

		push_two_digits(&mut body, constants::TAG_CRC);
		push_two_digits(&mut body, 4);
		body
	}
}

impl Display for PixCode {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let body = self.checksummed_body();
		write!(f, "{}{:04X}", body, crc::checksum(body.as_bytes()))
	}
}

#[cfg(test)]
mod test {
	use super::{push_field, push_two_digits};
	use crate::prelude::*;
	use crate::PixCodeBuilder;

	#[test]
	fn test_push_two_digits_pads() {
		let mut out = String::new();
		push_two_digits(&mut out, 0);
		push_two_digits(&mut out, 7);
		push_two_digits(&mut out, 63);
		assert_eq!(out, "000763");
	}

	#[test]
	fn test_push_field_counts_bytes() {
		let mut out = String::new();
		push_field(&mut out, 0, "br.gov.bcb.pix");
		assert_eq!(out, "0014br.gov.bcb.pix");

		// Two digit lengths count bytes, not characters.
		let mut out = String::new();
		push_field(&mut out, 59, "Café");
		assert_eq!(out, "5905Café");
	}

	#[test]
	fn test_serializes_reference_payload() {
		let code = PixCodeBuilder::new()
			.pix_key("123e4567-e12b-12d1-a456-426655440000".to_owned())
			.merchant_name("Fulano de Tal".to_owned())
			.merchant_city("BRASILIA".to_owned())
			.build()
			.unwrap();
		assert_eq!(
			code.to_string(),
			"00020126580014br.gov.bcb.pix0136123e4567-e12b-12d1-a456-426655440000\
			5204000053039865802BR5913Fulano de Tal6008BRASILIA62070503***63041D3D"
		);
	}

	#[test]
	fn test_amount_serialized_with_two_decimals() {
		let code = PixCodeBuilder::new()
			.pix_key("123e4567-e89b-12d3-a456-426655440000".to_owned())
			.merchant_name("Fulano de Tal".to_owned())
			.merchant_city("SAO PAULO".to_owned())
			.amount_reais(37.5)
			.transaction_id("ABC123".to_owned())
			.build()
			.unwrap();
		let payload = code.to_string();
		assert!(payload.starts_with("000201"));
		assert!(payload.contains("5303986"));
		assert!(payload.contains("540537.50"));
		assert!(payload.contains("62100506ABC123"));
	}

	#[test]
	fn test_description_nested_in_account_information() {
		let code = PixCodeBuilder::new()
			.pix_key("pix@example.com".to_owned())
			.merchant_name("Loja do Ze".to_owned())
			.merchant_city("SAO PAULO".to_owned())
			.description("Pedido 123".to_owned())
			.build()
			.unwrap();
		assert!(code
			.to_string()
			.contains("26510014br.gov.bcb.pix0115pix@example.com0210Pedido 123"));
	}
}
