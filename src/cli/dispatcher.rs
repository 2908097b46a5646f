use crate::api::client::ApiClient;
use crate::cli::command_handlers::{ConfigHandler, ResourceHandler};
use crate::cli::main_types::{Commands, ResourceAction};
use crate::core::resource::Resource;
use crate::core::resources::{
    Clients, Companies, Currencies, Organizations, PaymentMethods, PaymentTerms, Products,
    Suppliers, Taxes, Users, Visits, Warehouses, Zones,
};
use crate::core::services::config_service::ConfigService;
use crate::core::services::resource_service::ResourceService;
use crate::error::{AppError, ConfigError};
use crate::storage::config::Config;
use crate::storage::credentials::resolve_context;
use crate::utils::logging::print_verbose;
use crate::utils::validation::validate_url;
use std::path::PathBuf;
use std::sync::Arc;

/// Values given on the command line that override config and environment
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub url: Option<String>,
    pub token: Option<String>,
    pub company: Option<String>,
}

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    overrides: Overrides,
    verbose: bool,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        overrides: Overrides,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            config_path,
            overrides,
            verbose,
        }
    }

    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Config { command } => {
                let mut service = ConfigService::new(self.config.clone());
                let has_token = resolve_context(self.overrides.token.clone(), None, None)
                    .is_authenticated();
                ConfigHandler::new().handle(
                    command,
                    &mut service,
                    self.config_path.clone(),
                    has_token,
                    self.verbose,
                )
            }
            Commands::Organizations { action } => self.run::<Organizations>(action).await,
            Commands::Companies { action } => self.run::<Companies>(action).await,
            Commands::Users { action } => self.run::<Users>(action).await,
            Commands::Clients { action } => self.run::<Clients>(action).await,
            Commands::Suppliers { action } => self.run::<Suppliers>(action).await,
            Commands::Products { action } => self.run::<Products>(action).await,
            Commands::Taxes { action } => self.run::<Taxes>(action).await,
            Commands::Currencies { action } => self.run::<Currencies>(action).await,
            Commands::PaymentMethods { action } => self.run::<PaymentMethods>(action).await,
            Commands::PaymentTerms { action } => self.run::<PaymentTerms>(action).await,
            Commands::Warehouses { action } => self.run::<Warehouses>(action).await,
            Commands::Zones { action } => self.run::<Zones>(action).await,
            Commands::Visits { action } => self.run::<Visits>(action).await,
        }
    }

    /// Base URL with priority flag > ERP_ADMIN_URL > config file.
    fn resolve_url(&self) -> Result<String, AppError> {
        let url = self
            .overrides
            .url
            .clone()
            .filter(|u| !u.is_empty())
            .or_else(|| self.config.get_url())
            .ok_or_else(|| ConfigError::MissingField {
                field: "url".to_string(),
                hint: "Run 'erp-admin config set --url <URL>' or set ERP_ADMIN_URL".to_string(),
            })?;
        validate_url(&url)?;
        Ok(url)
    }

    fn build_client(&self) -> Result<ApiClient, AppError> {
        let url = self.resolve_url()?;
        self.log_verbose(&format!("Using API at {}", url));
        Ok(ApiClient::with_timeout(url, self.config.effective_timeout())?)
    }

    async fn run<R: Resource>(&self, action: ResourceAction) -> Result<(), AppError> {
        let client = Arc::new(self.build_client()?);
        let context = resolve_context(
            self.overrides.token.clone(),
            self.overrides.company.clone(),
            self.config.company_id.clone(),
        );
        if !context.is_authenticated() {
            log::warn!("No access token configured; requests are sent unauthenticated");
        }
        self.log_verbose(&format!("Request context: {:?}", context));

        let handler = ResourceHandler::new(self.config.effective_items_per_page(), self.verbose);
        handler
            .handle::<R, _>(action, ResourceService::<R>::new(client), context)
            .await
    }
}
