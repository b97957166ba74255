// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use store_functions::{StoreType, prelude::*, store_functions};

#[derive(StoreType)]
pub struct Totals {
    #[column(name = "Total")]
    pub total: i64
}

pub struct Reports;

#[store_functions(name = "ReportFunctions", rename_all = "PascalCase")]
impl Reports {
    #[function]
    #[function_details(
        schema = "reporting",
        composable = false,
        built_in = false,
        parameter_semantics = "allow_implicit_promotion"
    )]
    #[result(column = "Total", store_type = "bigint")]
    pub fn totals(
        &self,
        #[parameter(name = "Code", store_type = "nchar", length = 3, fixed_length)] code: &str,
        #[parameter(precision = 18, scale = 2)] limit: rust_decimal::Decimal,
        #[out] count: &mut i32,
        #[out]
        #[parameter(ty = "i64")]
        sum: OutputParameter
    ) -> Vec<Totals> {
        let _ = (code, limit, count, sum);
        Vec::new()
    }

    #[function]
    #[result(ty = "Totals")]
    #[result(ty = "i32", column = "Id")]
    pub fn everything(&self) {}

    #[function]
    pub fn by_context(ctx: &Self, n: i32) -> Query<i32> {
        let _ = (ctx, n);
        Query::new()
    }
}

fn main() {
    assert_eq!(Reports::container_name(), "ReportFunctions");
    assert_eq!(Reports::functions().len(), 3);
}
