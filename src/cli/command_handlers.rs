use crate::api::models::RecordId;
use crate::cli::main_types::{ConfigCommands, ListArgs, OutputFormat, ResourceAction};
use crate::core::context::RequestContext;
use crate::core::filters::split_filter_arg;
use crate::core::list_state::ResourceList;
use crate::core::query_state::{QueryState, SortOrder};
use crate::core::resource::Resource;
use crate::core::services::config_service::ConfigService;
use crate::core::services::traits::{CrudService, GetService};
use crate::display::{PageSummary, TableDisplay, render_json};
use crate::error::{AppError, CliError};
use crate::utils::logging::print_verbose;
use crate::utils::validation::parse_json_payload;
use std::path::PathBuf;

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        config_path: Option<PathBuf>,
        has_token: bool,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Attempting config show command using ConfigService");

                println!("Current Configuration:");
                println!("=====================");
                for (field, value) in config_service.entries() {
                    println!(
                        "{:<16}{}",
                        format!("{}:", field),
                        value.unwrap_or_else(|| "(not set)".to_string())
                    );
                }
                println!(
                    "{:<16}{}",
                    "token:",
                    if has_token { "set" } else { "(not set)" }
                );
                Ok(())
            }
            ConfigCommands::Set {
                url,
                timeout,
                items_per_page,
                company,
            } => {
                let updates = [
                    ("url", url),
                    ("timeout", timeout),
                    ("items-per-page", items_per_page),
                    ("company", company),
                ];
                if updates.iter().all(|(_, value)| value.is_none()) {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "Nothing to set. Pass --url, --timeout, --items-per-page or --company"
                            .to_string(),
                    )));
                }

                for (field, value) in updates.iter() {
                    if let Some(value) = value {
                        config_service.set_field(field, value)?;
                        println!("✅ Set {} to: {}", field, value);
                    }
                }

                config_service.save_config(config_path)?;
                print_verbose(verbose, "Configuration saved");
                Ok(())
            }
        }
    }
}

/// Runs one resource subcommand against a service.
pub struct ResourceHandler {
    default_items_per_page: u32,
    display: TableDisplay,
    verbose: bool,
}

impl ResourceHandler {
    pub fn new(default_items_per_page: u32, verbose: bool) -> Self {
        Self {
            default_items_per_page,
            display: TableDisplay::new(),
            verbose,
        }
    }

    pub async fn handle<R, S>(
        &self,
        action: ResourceAction,
        service: S,
        context: RequestContext,
    ) -> Result<(), AppError>
    where
        R: Resource,
        S: CrudService<R::Record, R::Filters> + Clone,
    {
        match action {
            ResourceAction::List(args) => {
                let list = ResourceList::<R, S>::new(service, context);
                self.list(&list, args).await
            }
            ResourceAction::Get { id, format } => {
                let id = RecordId::new(id);
                print_verbose(self.verbose, &format!("Fetching {} {}", R::NAME, id));
                let record = GetService::<R::Record>::get(&service, &context, &id).await?;
                match format {
                    OutputFormat::Table => println!("{}", self.display.render_record(&record)?),
                    OutputFormat::Json => println!("{}", render_json(&record)?),
                }
                Ok(())
            }
            ResourceAction::Create { data } => {
                let payload = parse_json_payload(&data)?;
                let list = ResourceList::<R, S>::new(service, context);
                match list.create(&payload).await {
                    Some(record) => {
                        println!("✅ Created {} {}", R::NAME, R::record_id(&record));
                        println!("{}", self.display.render_record(&record)?);
                        Ok(())
                    }
                    None => Err(Self::failure(&list, "Create", R::NAME)),
                }
            }
            ResourceAction::Update { id, data } => {
                let payload = parse_json_payload(&data)?;
                let id = RecordId::new(id);
                let list = ResourceList::<R, S>::new(service, context);
                match list.update(&id, &payload).await {
                    Some(record) => {
                        println!("✅ Updated {} {}", R::NAME, id);
                        println!("{}", self.display.render_record(&record)?);
                        Ok(())
                    }
                    None => Err(Self::failure(&list, "Update", R::NAME)),
                }
            }
            ResourceAction::Delete { id } => {
                let id = RecordId::new(id);
                let list = ResourceList::<R, S>::new(service, context);
                if list.delete(&id).await {
                    println!("✅ Deleted {} {}", R::NAME, id);
                    Ok(())
                } else {
                    Err(Self::failure(&list, "Delete", R::NAME))
                }
            }
            ResourceAction::Sync => {
                let list = ResourceList::<R, S>::new(service, context);
                if list.sync_remote().await {
                    println!("✅ Synced {}", R::PLURAL);
                    Ok(())
                } else {
                    Err(Self::failure(&list, "Sync", R::PLURAL))
                }
            }
        }
    }

    fn failure<R, S>(list: &ResourceList<R, S>, operation: &str, label: &str) -> AppError
    where
        R: Resource,
        S: CrudService<R::Record, R::Filters>,
    {
        AppError::Cli(CliError::OperationFailed {
            operation: format!("{} {}", operation, label),
            message: list
                .error()
                .unwrap_or_else(|| format!("Failed to {} {}", operation.to_lowercase(), label)),
        })
    }

    /// Apply list flags to the query. Filters go before the page since a
    /// filter change returns to page 1.
    fn apply_args<R, S>(&self, list: &ResourceList<R, S>, args: &ListArgs) -> Result<(), AppError>
    where
        R: Resource,
        S: CrudService<R::Record, R::Filters>,
    {
        list.set_items_per_page(args.items_per_page.unwrap_or(self.default_items_per_page))?;
        if let Some(search) = &args.search {
            list.set_search(search.clone());
        }
        if let Some(order) = &args.order {
            list.set_order(Some(order.parse::<SortOrder>()?));
        }
        for raw in &args.filter {
            let (key, value) = split_filter_arg(raw)?;
            list.set_filter(key, value)?;
        }
        list.set_page(args.page)?;
        Ok(())
    }

    async fn list<R, S>(&self, list: &ResourceList<R, S>, args: ListArgs) -> Result<(), AppError>
    where
        R: Resource,
        S: CrudService<R::Record, R::Filters>,
    {
        self.apply_args(list, &args)?;
        let query: QueryState<R::Filters> = list.query();
        print_verbose(
            self.verbose,
            &format!("Listing {} with {}", R::PLURAL, query.to_params().encode()),
        );

        let mut records = Vec::new();
        loop {
            list.refresh_if_stale().await;
            if let Some(message) = list.error() {
                return Err(AppError::Cli(CliError::OperationFailed {
                    operation: format!("List {}", R::PLURAL),
                    message,
                }));
            }
            records.extend(list.items());
            if !args.all || !list.next_page() {
                break;
            }
        }

        let snapshot = list.snapshot();
        match args.format {
            OutputFormat::Json => println!("{}", render_json(&records)?),
            OutputFormat::Table => {
                if !records.is_empty() {
                    println!("{}", self.display.render_records(R::COLUMNS, &records)?);
                }
                let summary = PageSummary {
                    shown: records.len(),
                    total: snapshot.total,
                    page: snapshot.page,
                    total_pages: snapshot.total_pages,
                };
                println!("{}", self.display.render_summary(R::PLURAL, &summary));
            }
        }
        Ok(())
    }
}
