// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use store_functions::store_functions;

struct Shop;

#[store_functions]
impl Shop {
    #[function_details(schema = "sales")]
    fn order_total(&self, customer_id: i32) -> i32 {
        customer_id
    }
}

fn main() {}
