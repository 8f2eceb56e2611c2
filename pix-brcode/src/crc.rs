// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! The CRC-16/CCITT-FALSE variant sealing every BR Code payload.
//!
//! The checksum is computed over all payload bytes up to and including the
//! literal `"6304"` id and length of the CRC field itself, and is serialized
//! as four uppercase hexadecimal digits.

/// Computes the CRC-16/CCITT-FALSE checksum of `data`: polynomial `0x1021`,
/// initial value `0xFFFF`, most significant bit first, no reflection and no
/// final xor. The check value over the bytes `"123456789"` is `0x29B1`.
pub fn checksum(data: &[u8]) -> u16 {
	let mut crc: u16 = 0xFFFF;
	for byte in data {
		crc ^= (*byte as u16) << 8;
		for _ in 0..8 {
			crc = if crc & 0x8000 != 0 { (crc << 1) ^ 0x1021 } else { crc << 1 };
		}
	}
	crc
}

#[cfg(test)]
mod test {
	use super::checksum;

	#[test]
	fn test_check_value() {
		// The standard check input for CRC-16/CCITT-FALSE.
		assert_eq!(checksum(b"123456789"), 0x29B1);
	}

	#[test]
	fn test_degenerate_inputs() {
		assert_eq!(checksum(b""), 0xFFFF);
		assert_eq!(checksum(b"A"), 0xB915);
		assert_eq!(checksum(b"6304"), 0x6007);
	}

	#[test]
	fn test_reference_payload() {
		// The central bank's reference static payload, checksummed through
		// the trailing "6304".
		let body = "00020126580014br.gov.bcb.pix0136123e4567-e12b-12d1-a456-426655440000\
			5204000053039865802BR5913Fulano de Tal6008BRASILIA62070503***6304";
		assert_eq!(checksum(body.as_bytes()), 0x1D3D);
	}
}
