// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use store_functions::StoreType;

#[derive(StoreType)]
struct CustomerId(i32);

fn main() {}
