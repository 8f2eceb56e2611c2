// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Type level booleans tracking the completeness of a
//! [`PixCodeBuilder`](crate::PixCodeBuilder).

/// Marker trait implemented by the two type level booleans [`True`] and
/// [`False`].
pub trait Bool {}

/// Used to indicate that a required builder field is present.
pub struct True {}

/// Used to indicate that a required builder field is not present yet.
pub struct False {}

impl Bool for True {}
impl Bool for False {}
