// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end tests: `#[store_functions]` containers applied to a model.

use rust_decimal::Decimal;
use store_functions::{
    ConventionConfig, ConventionError, FunctionContainer, StoreType,
    metadata::{EdmType, ParameterMode},
    prelude::*,
    store_functions
};

#[derive(Debug, StoreType)]
pub struct Customer {
    pub id:     i32,
    #[column(name = "FullName")]
    pub name:   String,
    pub region: Option<String>
}

#[derive(Debug, StoreType)]
pub struct OrderStats {
    pub order_count: i32,
    #[column(name = "Total")]
    pub total:       Decimal
}

#[derive(Debug, StoreType)]
pub struct Unmapped {
    pub value: i32
}

#[derive(Debug, Clone, Copy, StoreType)]
#[repr(u8)]
pub enum Status {
    Active = 1,
    Closed = 2
}

pub struct ShopContext;

#[store_functions(rename_all = "PascalCase")]
impl ShopContext {
    #[function(name = "GetActiveCustomers")]
    pub fn active_customers(&self, region: &str) -> Query<Customer> {
        let _ = region;
        Query::new()
    }

    #[function]
    #[function_details(schema = "sales", aggregate)]
    pub fn order_total(&self, customer_id: i32) -> Decimal {
        let _ = customer_id;
        Decimal::ZERO
    }

    #[function]
    pub fn customer_stats(
        &self,
        #[parameter(store_type = "nchar", length = 3, fixed_length)] code: &str
    ) -> Query<OrderStats> {
        let _ = code;
        Query::new()
    }

    #[function]
    pub fn recent_customers(&self, days: i32) -> Vec<Customer> {
        let _ = days;
        Vec::new()
    }

    #[function]
    #[result(ty = "Customer")]
    #[result(ty = "OrderStats")]
    pub fn customers_and_stats(&self) {}

    #[function]
    pub fn customers_with_status(&self, status: Status) -> Option<i32> {
        let _ = status;
        None
    }

    #[function]
    pub fn count_orders(
        &self,
        customer_id: i32,
        #[out]
        #[parameter(ty = "i32")]
        count: OutputParameter
    ) -> i32 {
        let _ = (customer_id, count);
        0
    }

    pub fn helper(&self) -> i32 {
        42
    }
}

pub struct Reports;

#[store_functions(name = "ReportFunctions")]
impl Reports {
    #[function(name = "TopCustomerIds")]
    pub fn top_customer_ids(ctx: &Self, count: i32) -> Query<i32> {
        let _ = (ctx, count);
        Query::new()
    }
}

pub struct Clashing;

#[store_functions]
impl Clashing {
    #[function(name = "Lookup")]
    pub fn first(&self) -> i32 {
        1
    }

    #[function(name = "Lookup")]
    pub fn second(&self) -> i32 {
        2
    }
}

pub struct PartlyBroken;

#[store_functions]
impl PartlyBroken {
    #[function(name = "Fine")]
    pub fn fine(&self) -> i32 {
        1
    }

    #[function(name = "Broken")]
    pub fn broken(&self) -> Query<Unmapped> {
        Query::new()
    }
}

pub struct AlsoTotals;

#[store_functions]
impl AlsoTotals {
    #[function(name = "OrderTotal")]
    #[function_details(schema = "sales")]
    pub fn total(&self) -> Decimal {
        Decimal::ZERO
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn model() -> DbModel {
    init_tracing();
    let mut model = DbModel::new("Shop", ProviderManifest::sql_server());
    model
        .add_entity_from::<Customer>("Customers")
        .unwrap()
        .add_complex_type_from::<OrderStats>()
        .unwrap()
        .add_enum_type_from::<Status>()
        .unwrap();
    model
}

fn shop() -> DbModel {
    let mut model = model();
    FunctionsConvention::default()
        .apply::<ShopContext, _>(&mut model)
        .unwrap();
    model
}

fn store_type_name(usage: &store_functions::metadata::TypeUsage) -> &str {
    &usage.store_type().unwrap().name
}

#[test]
fn container_lists_annotated_methods_only() {
    assert_eq!(ShopContext::container_name(), "ShopContext");
    assert_eq!(Reports::container_name(), "ReportFunctions");

    let names: Vec<_> = ShopContext::functions()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(
        names,
        [
            "active_customers",
            "order_total",
            "customer_stats",
            "recent_customers",
            "customers_and_stats",
            "customers_with_status",
            "count_orders"
        ]
    );
    assert_eq!(ShopContext.helper(), 42);
}

#[test]
fn rename_all_names_unnamed_functions() {
    let functions = ShopContext::functions();
    let named: Vec<_> = functions
        .iter()
        .map(|m| m.function.as_ref().and_then(|f| f.name.as_deref()))
        .collect();
    assert_eq!(named[0], Some("GetActiveCustomers"));
    assert_eq!(named[1], Some("OrderTotal"));
}

#[test]
fn composable_entity_function() {
    let model = shop();
    let name = QualifiedName::new("dbo", "GetActiveCustomers");

    let function = model.store_function(&name).unwrap();
    assert!(function.is_composable);
    assert!(!function.is_aggregate);
    assert!(!function.is_niladic);
    assert_eq!(function.namespace, "CodeFirstDatabaseSchema");
    assert_eq!(function.parameters.len(), 1);
    assert_eq!(function.parameters[0].name, "region");
    assert_eq!(function.parameters[0].mode, ParameterMode::In);
    assert_eq!(store_type_name(&function.parameters[0].type_usage), "nvarchar");

    let row = function.return_parameter().unwrap().type_usage.row_element().unwrap();
    assert_eq!(row.column_names(), ["id", "FullName", "region"]);
    assert!(row.member("region").unwrap().type_usage.facets.nullable);

    let import = model.function_import("GetActiveCustomers").unwrap();
    assert!(import.is_composable);
    assert_eq!(import.container, "Shop");
    assert_eq!(import.entity_sets, [Some("Customers".to_string())]);
    assert_eq!(import.return_parameters[0].name, "ReturnType");
    let element = import.return_parameters[0].type_usage.element().unwrap();
    assert_eq!(element.edm_type, EdmType::Entity("Customer".to_string()));

    let mapping = model.function_import_mapping("GetActiveCustomers").unwrap();
    assert!(mapping.is_composable());
    assert_eq!(mapping.store_function(), &name);
    let FunctionImportMapping::Composable {
        result_mapping, ..
    } = mapping
    else {
        panic!("expected composable mapping");
    };
    assert!(result_mapping.is_none());
}

#[test]
fn scalar_aggregate_in_schema() {
    let model = shop();
    let function = model
        .store_function(&QualifiedName::new("sales", "OrderTotal"))
        .unwrap();
    assert!(function.is_aggregate);
    let ret = function.return_parameter().unwrap();
    assert_eq!(ret.mode, ParameterMode::ReturnValue);
    assert_eq!(store_type_name(&ret.type_usage), "decimal");
    assert!(model.function_import("OrderTotal").is_none());
}

#[test]
fn composable_complex_function_maps_members() {
    let model = shop();
    let function = model
        .store_function(&QualifiedName::new("dbo", "CustomerStats"))
        .unwrap();
    let code = &function.parameters[0];
    assert_eq!(store_type_name(&code.type_usage), "nchar");
    assert_eq!(code.type_usage.facets.max_length, Some(3));
    assert_eq!(code.type_usage.facets.fixed_length, Some(true));

    let row = function.return_parameter().unwrap().type_usage.row_element().unwrap();
    assert_eq!(row.column_names(), ["order_count", "Total"]);

    let import = model.function_import("CustomerStats").unwrap();
    assert_eq!(import.entity_sets, [None]);

    let FunctionImportMapping::Composable {
        result_mapping: Some(mapping),
        ..
    } = model.function_import_mapping("CustomerStats").unwrap()
    else {
        panic!("expected structural result mapping");
    };
    assert_eq!(mapping.type_name, "OrderStats");
    assert_eq!(mapping.column_for("total"), Some("Total"));
    assert_eq!(mapping.column_for("order_count"), Some("order_count"));
}

#[test]
fn materialized_rows_are_non_composable() {
    let model = shop();
    let function = model
        .store_function(&QualifiedName::new("dbo", "RecentCustomers"))
        .unwrap();
    assert!(!function.is_composable);
    assert!(function.return_parameters.is_empty());

    let import = model.function_import("RecentCustomers").unwrap();
    assert!(!import.is_composable);
    assert_eq!(import.entity_sets, [Some("Customers".to_string())]);

    let mapping = model.function_import_mapping("RecentCustomers").unwrap();
    assert!(!mapping.is_composable());
}

#[test]
fn multiple_result_sets() {
    let model = shop();
    let function = model
        .store_function(&QualifiedName::new("dbo", "CustomersAndStats"))
        .unwrap();
    assert!(!function.is_composable);
    assert!(function.parameters.is_empty());

    let import = model.function_import("CustomersAndStats").unwrap();
    let names: Vec<_> = import
        .return_parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["ReturnType", "ReturnType1"]);
    assert_eq!(import.entity_sets, [Some("Customers".to_string()), None]);
}

#[test]
fn enum_parameter_uses_underlying_store_type() {
    let model = shop();
    let function = model
        .store_function(&QualifiedName::new("dbo", "CustomersWithStatus"))
        .unwrap();
    assert_eq!(store_type_name(&function.parameters[0].type_usage), "tinyint");

    let ret = function.return_parameter().unwrap();
    assert_eq!(store_type_name(&ret.type_usage), "int");
    assert!(ret.type_usage.facets.nullable);
}

#[test]
fn output_placeholder_takes_annotated_type() {
    let model = shop();
    let function = model
        .store_function(&QualifiedName::new("dbo", "CountOrders"))
        .unwrap();
    let modes: Vec<_> = function.parameters.iter().map(|p| p.mode).collect();
    assert_eq!(modes, [ParameterMode::In, ParameterMode::Out]);
    assert_eq!(store_type_name(&function.parameters[1].type_usage), "int");
}

#[test]
fn extension_context_is_not_a_parameter() {
    let mut model = model();
    let names = FunctionsConvention::default()
        .apply::<Reports, _>(&mut model)
        .unwrap();
    assert_eq!(names, [QualifiedName::new("dbo", "TopCustomerIds")]);

    let function = model.store_function(&names[0]).unwrap();
    assert_eq!(function.parameters.len(), 1);
    assert_eq!(function.parameters[0].name, "count");
    let row = function.return_parameter().unwrap().type_usage.row_element().unwrap();
    assert_eq!(row.column_names(), ["value"]);
}

#[test]
fn configured_schema_and_column() {
    let mut model = model();
    let config = ConventionConfig::default()
        .with_default_schema("reporting")
        .with_result_column_name("Result");
    FunctionsConvention::new(config)
        .apply::<Reports, _>(&mut model)
        .unwrap();

    let function = model
        .store_function(&QualifiedName::new("reporting", "TopCustomerIds"))
        .unwrap();
    let row = function.return_parameter().unwrap().type_usage.row_element().unwrap();
    assert_eq!(row.column_names(), ["Result"]);
}

#[test]
fn duplicate_names_within_container_fail() {
    let mut model = model();
    let err = FunctionsConvention::default()
        .apply::<Clashing, _>(&mut model)
        .unwrap_err();
    assert_eq!(
        err,
        ConventionError::DuplicateFunction {
            schema: "dbo".to_string(),
            name:   "Lookup".to_string()
        }
    );
    assert_eq!(model.store_functions().count(), 0);
}

#[test]
fn duplicate_names_across_containers_fail() {
    let mut model = shop();
    let before = model.store_functions().count();
    let err = FunctionsConvention::default()
        .apply::<AlsoTotals, _>(&mut model)
        .unwrap_err();
    assert!(matches!(err, ConventionError::DuplicateFunction { .. }));
    assert_eq!(model.store_functions().count(), before);
}

#[test]
fn failing_method_registers_nothing() {
    let mut model = model();
    let err = FunctionsConvention::default()
        .apply::<PartlyBroken, _>(&mut model)
        .unwrap_err();
    assert_eq!(
        err,
        ConventionError::UnsupportedStructuralType {
            type_name: "Unmapped".to_string()
        }
    );
    assert!(model.store_function(&QualifiedName::new("dbo", "Fine")).is_none());
    assert_eq!(model.function_import_mappings().len(), 0);
}

#[test]
fn postgres_manifest() {
    let mut model = DbModel::new("Shop", ProviderManifest::postgres());
    model.add_entity_from::<Customer>("customers").unwrap();
    FunctionsConvention::default()
        .apply::<Reports, _>(&mut model)
        .unwrap();

    let function = model
        .store_function(&QualifiedName::new("dbo", "TopCustomerIds"))
        .unwrap();
    assert_eq!(store_type_name(&function.parameters[0].type_usage), "integer");
}
