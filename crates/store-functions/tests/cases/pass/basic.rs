// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use store_functions::{StoreType, prelude::*, store_functions};

#[derive(StoreType)]
pub struct Customer {
    pub id:   i32,
    pub name: String
}

pub struct ShopContext;

#[store_functions]
impl ShopContext {
    #[function(name = "GetActiveCustomers")]
    pub fn active_customers(&self) -> Query<Customer> {
        Query::new()
    }

    #[inline]
    pub fn plain(&self) -> i32 {
        1
    }
}

fn main() {
    let mut model = DbModel::new("Shop", ProviderManifest::sql_server());
    model.add_entity_from::<Customer>("Customers").unwrap();
    FunctionsConvention::default()
        .apply::<ShopContext, _>(&mut model)
        .unwrap();
    assert_eq!(ShopContext.plain(), 1);
}
