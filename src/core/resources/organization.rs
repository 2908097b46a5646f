use crate::api::models::{Company, Organization, RecordId, User};
use crate::core::filters::StatusFilter;
use crate::core::resource::{Column, Resource};

pub struct Organizations;

impl Resource for Organizations {
    type Record = Organization;
    type Filters = StatusFilter;

    const NAME: &'static str = "organization";
    const PLURAL: &'static str = "organizations";
    const PATH: &'static str = "/organizations";
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("Tax ID", "taxId"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &Organization) -> &RecordId {
        &record.id
    }
}

crate::list_filters! {
    CompanyFilters {
        organization_id: RecordId => "organizationId",
        status: String => "status",
    }
}

pub struct Companies;

impl Resource for Companies {
    type Record = Company;
    type Filters = CompanyFilters;

    const NAME: &'static str = "company";
    const PLURAL: &'static str = "companies";
    const PATH: &'static str = "/companies";
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("Organization", "organizationId"),
        Column::new("Tax ID", "taxId"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &Company) -> &RecordId {
        &record.id
    }
}

crate::list_filters! {
    UserFilters {
        role: String => "role",
        status: String => "status",
    }
}

pub struct Users;

impl Resource for Users {
    type Record = User;
    type Filters = UserFilters;

    const NAME: &'static str = "user";
    const PLURAL: &'static str = "users";
    const PATH: &'static str = "/users";
    const COLUMNS: &'static [Column] = &[
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("Email", "email"),
        Column::new("Role", "role"),
        Column::new("Status", "status"),
    ];

    fn record_id(record: &User) -> &RecordId {
        &record.id
    }
}
