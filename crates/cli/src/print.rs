// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::fmt::Display;

pub fn format_word<E: Display>(word: &[E]) -> String {
    let symbols: Vec<String> = word.iter().map(|s| s.to_string()).collect();
    format!("[{}]", symbols.join(", "))
}
