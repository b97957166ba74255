// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use store_functions::{StoreType, prelude::*};

#[derive(StoreType)]
#[store_type(name = "Client")]
pub struct Customer {
    pub id:      uuid::Uuid,
    #[column(name = "FullName")]
    pub name:    Option<String>,
    pub created: chrono::DateTime<chrono::Utc>,
    pub status:  Status
}

#[derive(Clone, Copy, StoreType)]
#[repr(i16)]
pub enum Status {
    Active = 1,
    Closed = 5
}

#[derive(StoreType)]
pub struct Page<T> {
    pub item: T
}

fn main() {
    let TypeRef::Structural(desc) = Customer::describe() else {
        panic!("expected struct");
    };
    assert_eq!(desc.name, "Client");
    assert_eq!(desc.members.len(), 4);

    let TypeRef::Enum(desc) = Status::describe() else {
        panic!("expected enum");
    };
    assert_eq!(desc.members[1].value, 5);

    let _ = Page::<i32>::describe();
}
