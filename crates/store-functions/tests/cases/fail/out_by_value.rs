// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use store_functions::store_functions;

struct Shop;

#[store_functions]
impl Shop {
    #[function]
    fn count_orders(&self, #[out] total: i32) -> i32 {
        total
    }
}

fn main() {}
