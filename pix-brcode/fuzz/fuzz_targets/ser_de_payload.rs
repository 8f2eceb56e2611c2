// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

use pix_brcode::PixCode;

#[inline]
pub fn do_test(data: &[u8]) {
	let payload = match std::str::from_utf8(data) {
		Ok(payload) => payload,
		Err(_) => return,
	};
	if let Ok(code) = payload.parse::<PixCode>() {
		// Parsing accepts payloads differing from our own rendition, e.g. in
		// scheme identifier case or extra fields, so one reserialization must
		// reach a fixed point.
		let reserialized = code.to_string();
		let reparsed: PixCode =
			reserialized.parse().expect("failed parsing our own serialization");
		assert_eq!(reparsed, code);
		assert_eq!(reparsed.to_string(), reserialized);
	}
}

#[cfg(feature = "afl")]
#[macro_use]
extern crate afl;
#[cfg(feature = "afl")]
fn main() {
	fuzz!(|data| {
		do_test(data);
	});
}

#[cfg(feature = "honggfuzz")]
#[macro_use]
extern crate honggfuzz;
#[cfg(feature = "honggfuzz")]
fn main() {
	loop {
		fuzz!(|data| {
			do_test(data);
		});
	}
}

#[cfg(not(any(feature = "afl", feature = "honggfuzz")))]
fn main() {
	use std::io::Read;

	let mut data = Vec::with_capacity(8192);
	std::io::stdin().read_to_end(&mut data).unwrap();
	do_test(&data);
}
