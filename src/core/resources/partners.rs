use crate::api::models::{Client, PaymentMethod, PaymentTerm, RecordId, Supplier};
use crate::core::filters::StatusFilter;
use crate::core::resource::{Column, Resource};

crate::list_filters! {
    ClientFilters {
        zone_id: RecordId => "zoneId",
        user_id: RecordId => "userId",
        status: String => "status",
    }
}

pub struct Clients;

impl Resource for Clients {
    type Record = Client;
    type Filters = ClientFilters;

    const NAME: &'static str = "client";
    const PLURAL: &'static str = "clients";
    const PATH: &'static str = "/clients";
    const SUPPORTS_SYNC: bool = true;
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("Tax ID", "taxId"),
        Column::new("Email", "email"),
        Column::new("Zone", "zoneId"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &Client) -> &RecordId {
        &record.id
    }
}

pub struct Suppliers;

impl Resource for Suppliers {
    type Record = Supplier;
    type Filters = StatusFilter;

    const NAME: &'static str = "supplier";
    const PLURAL: &'static str = "suppliers";
    const PATH: &'static str = "/suppliers";
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("Tax ID", "taxId"),
        Column::new("Phone", "phone"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &Supplier) -> &RecordId {
        &record.id
    }
}

pub struct PaymentMethods;

impl Resource for PaymentMethods {
    type Record = PaymentMethod;
    type Filters = StatusFilter;

    const NAME: &'static str = "payment method";
    const PLURAL: &'static str = "payment methods";
    const PATH: &'static str = "/payment-methods";
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("Description", "description"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &PaymentMethod) -> &RecordId {
        &record.id
    }
}

pub struct PaymentTerms;

impl Resource for PaymentTerms {
    type Record = PaymentTerm;
    type Filters = StatusFilter;

    const NAME: &'static str = "payment term";
    const PLURAL: &'static str = "payment terms";
    const PATH: &'static str = "/payment-terms";
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("Days", "days"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &PaymentTerm) -> &RecordId {
        &record.id
    }
}
