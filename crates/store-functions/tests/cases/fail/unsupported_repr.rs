// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use store_functions::StoreType;

#[derive(StoreType)]
#[repr(u32)]
enum Status {
    Active = 1,
    Closed = 2
}

fn main() {}
