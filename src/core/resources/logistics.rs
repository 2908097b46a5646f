use crate::api::models::{RecordId, Visit, Warehouse, Zone};
use crate::core::filters::StatusFilter;
use crate::core::resource::{Column, Resource};
use chrono::NaiveDate;

crate::list_filters! {
    WarehouseFilters {
        company_id: RecordId => "companyId",
        status: String => "status",
    }
}

pub struct Warehouses;

impl Resource for Warehouses {
    type Record = Warehouse;
    type Filters = WarehouseFilters;

    const NAME: &'static str = "warehouse";
    const PLURAL: &'static str = "warehouses";
    const PATH: &'static str = "/warehouses";
    const PRUNE_ON_DELETE: bool = true;
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Code", "code"),
        Column::new("Name", "name"),
        Column::new("Address", "address"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &Warehouse) -> &RecordId {
        &record.id
    }
}

pub struct Zones;

impl Resource for Zones {
    type Record = Zone;
    type Filters = StatusFilter;

    const NAME: &'static str = "zone";
    const PLURAL: &'static str = "zones";
    const PATH: &'static str = "/zones";
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("Description", "description"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &Zone) -> &RecordId {
        &record.id
    }
}

crate::list_filters! {
    /// `from`/`to` bound the visit date, inclusive.
    VisitFilters {
        client_id: RecordId => "clientId",
        user_id: RecordId => "userId",
        from: NaiveDate => "from",
        to: NaiveDate => "to",
        status: String => "status",
    }
}

pub struct Visits;

impl Resource for Visits {
    type Record = Visit;
    type Filters = VisitFilters;

    const NAME: &'static str = "visit";
    const PLURAL: &'static str = "visits";
    const PATH: &'static str = "/visits";
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Client", "clientId"),
        Column::new("User", "userId"),
        Column::new("Scheduled", "scheduledAt"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &Visit) -> &RecordId {
        &record.id
    }
}
