// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use store_functions::store_functions;

struct Shop;

#[store_functions]
impl Default for Shop {
    fn default() -> Self {
        Shop
    }
}

fn main() {}
