// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Convenient utilities to create a Pix BR Code.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::{CreationError, PixCode, PixCodeBuilder, TransactionId};

/// Utility to build a [`PixCode`] from the values a checkout typically has at
/// hand, without driving [`PixCodeBuilder`] directly.
///
/// `amount` is denominated in reais, so `37.50` charges 37 reais and 50
/// centavos. An amount of zero leaves the field out entirely and the payer
/// enters the amount themselves. Amounts which are negative, not finite or
/// carry precision below one centavo are rejected.
///
/// `transaction_id` becomes the reference label of the payload. Pass
/// [`REFERENCE_LABEL_NONE`] when there is no reconciliation id to carry.
///
/// [`REFERENCE_LABEL_NONE`]: crate::constants::REFERENCE_LABEL_NONE
pub fn create_pix_code(
	pix_key: String, merchant_name: String, merchant_city: String, amount: f64,
	transaction_id: String,
) -> Result<PixCode, CreationError> {
	PixCodeBuilder::new()
		.pix_key(pix_key)
		.merchant_name(merchant_name)
		.merchant_city(merchant_city)
		.amount_reais(amount)
		.transaction_id(transaction_id)
		.build()
}

/// Utility to derive a fresh reference label from the current time.
///
/// The label is the UTC timestamp as `YYYYMMDDHHMMSS` followed by the first
/// five bytes of the SHA256 digest of that timestamp in lowercase hex, 24
/// characters in total. Labels generated within the same second collide, so
/// this fits receipts and reconciliation rather than uniqueness guarantees.
pub fn timestamped_transaction_id() -> TransactionId {
	timestamped_transaction_id_at(Utc::now())
}

/// Derives the reference label [`timestamped_transaction_id`] would produce
/// at the given instant.
pub fn timestamped_transaction_id_at(when: DateTime<Utc>) -> TransactionId {
	let stamp = when.format("%Y%m%d%H%M%S").to_string();
	let digest = Sha256::digest(stamp.as_bytes());
	let label = format!("{}{}", stamp, hex::encode(&digest[..5]));
	TransactionId::new(label).expect("a timestamp and hex digits are always a valid label")
}
