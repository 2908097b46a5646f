use crate::api::models::{Currency, Product, RecordId, Tax};
use crate::core::filters::StatusFilter;
use crate::core::resource::{Column, Resource};

crate::list_filters! {
    ProductFilters {
        category_id: RecordId => "categoryId",
        warehouse_id: RecordId => "warehouseId",
        status: String => "status",
    }
}

pub struct Products;

impl Resource for Products {
    type Record = Product;
    type Filters = ProductFilters;

    const NAME: &'static str = "product";
    const PLURAL: &'static str = "products";
    const PATH: &'static str = "/products";
    const SUPPORTS_SYNC: bool = true;
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Code", "code"),
        Column::new("Name", "name"),
        Column::new("Price", "price"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &Product) -> &RecordId {
        &record.id
    }
}

pub struct Taxes;

impl Resource for Taxes {
    type Record = Tax;
    type Filters = StatusFilter;

    const NAME: &'static str = "tax";
    const PLURAL: &'static str = "taxes";
    const PATH: &'static str = "/taxes";
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("Rate (%)", "rate"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &Tax) -> &RecordId {
        &record.id
    }
}

pub struct Currencies;

impl Resource for Currencies {
    type Record = Currency;
    type Filters = StatusFilter;

    const NAME: &'static str = "currency";
    const PLURAL: &'static str = "currencies";
    const PATH: &'static str = "/currencies";
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Code", "code"),
        Column::new("Name", "name"),
        Column::new("Symbol", "symbol"),
        Column::new("Rate", "exchangeRate"),
    ];

    fn record_id(record: &Currency) -> &RecordId {
        &record.id
    }
}
