//! Pokemon Team Builder MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp) that
//! exposes catalog browsing, roster management, and team analytics as tools.

use std::sync::{Arc, Mutex};

use pokemon_team_builder::catalog::{fetch_catalog, find_by_name, load_catalog_file};
use pokemon_team_builder::interface::*;
use pokemon_team_builder::{
    AppConfig, CatalogEntry, FileStore, RosterManager, TypeSelector,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing::error;

#[derive(Debug, Clone)]
pub struct TeamBuilderService {
    tool_router: ToolRouter<TeamBuilderService>,
    catalog: Arc<Vec<CatalogEntry>>,
    manager: Arc<Mutex<RosterManager<FileStore>>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    #[schemars(description = "Case-insensitive name substring to search for (empty for all)")]
    pub query: String,
    #[schemars(description = "Type tag to filter by, or 'all' for no type filter")]
    pub type_filter: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PokemonNameRequest {
    #[schemars(description = "Name of the Pokemon")]
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TeamNameRequest {
    #[schemars(description = "Name of the saved team")]
    pub name: String,
}

#[tool_router]
impl TeamBuilderService {
    pub fn new(catalog: Vec<CatalogEntry>, manager: RosterManager<FileStore>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            catalog: Arc::new(catalog),
            manager: Arc::new(Mutex::new(manager)),
        }
    }

    #[tool(description = "Search the Pokemon catalog by name and type")]
    async fn search_pokemon(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        let selector = TypeSelector::parse(&request.type_filter);
        let text = search_results_display(&self.catalog, &request.query, &selector);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "List the type tags available as search filters")]
    async fn list_types(&self) -> Result<CallToolResult, McpError> {
        let text = type_options_display(&self.catalog);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "View full details of a Pokemon: stats, evolution chain, moves")]
    async fn view_pokemon(
        &self,
        Parameters(request): Parameters<PokemonNameRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = match find_by_name(&self.catalog, &request.name) {
            Some(entry) => entry_details_display(entry),
            None => format!("'{}' was not found in the catalog.", request.name),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Add a Pokemon to your team (maximum 6, no duplicates)")]
    async fn add_to_team(
        &self,
        Parameters(request): Parameters<PokemonNameRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut manager = self.manager.lock().unwrap();
        let text = handle_add_command(&mut manager, &self.catalog, &request.name);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Remove a Pokemon from your team")]
    async fn remove_from_team(
        &self,
        Parameters(request): Parameters<PokemonNameRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut manager = self.manager.lock().unwrap();
        let text = handle_remove_command(&mut manager, &request.name);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Remove every Pokemon from your team")]
    async fn clear_team(&self) -> Result<CallToolResult, McpError> {
        let mut manager = self.manager.lock().unwrap();
        let text = handle_clear_command(&mut manager);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Show your team, its average stats, and its type weaknesses")]
    async fn team_status(&self) -> Result<CallToolResult, McpError> {
        let manager = self.manager.lock().unwrap();
        let text = team_status_display(&manager);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Save the current team under a name")]
    async fn save_team(
        &self,
        Parameters(request): Parameters<TeamNameRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut manager = self.manager.lock().unwrap();
        let text = handle_save_command(&mut manager, &request.name);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Replace the current team with a saved team")]
    async fn load_team(
        &self,
        Parameters(request): Parameters<TeamNameRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut manager = self.manager.lock().unwrap();
        let text = handle_load_command(&mut manager, &request.name);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Delete a saved team")]
    async fn delete_team(
        &self,
        Parameters(request): Parameters<TeamNameRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut manager = self.manager.lock().unwrap();
        let text = handle_delete_command(&mut manager, &request.name);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "List all saved teams with their members and save dates")]
    async fn list_saved_teams(&self) -> Result<CallToolResult, McpError> {
        let manager = self.manager.lock().unwrap();
        let text = saved_teams_display(&manager);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for TeamBuilderService {}

/// Fetch the catalog per the configuration, degrading to an empty catalog so
/// the roster tools stay usable when the data source is unreachable.
async fn startup_catalog(config: &AppConfig) -> Vec<CatalogEntry> {
    let result = match &config.catalog_endpoint {
        Some(endpoint) => fetch_catalog(endpoint).await,
        None => load_catalog_file(&config.catalog_file),
    };

    match result {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("failed to load Pokemon catalog: {}", e);
            eprintln!("Failed to load Pokemon data: {}. Starting with an empty catalog.", e);
            Vec::new()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    eprintln!("Pokemon Team Builder MCP Server starting...");

    let config = AppConfig::load()?;
    let catalog = startup_catalog(&config).await;
    let manager = RosterManager::new(FileStore::new(&config.storage_dir));

    let service = TeamBuilderService::new(catalog, manager);
    let transport = (stdin(), stdout());

    eprintln!("Starting MCP server with transport...");
    let server = service.serve(transport).await?;

    eprintln!("Server running, waiting for shutdown...");
    let quit_reason = server.waiting().await?;

    eprintln!("Pokemon Team Builder MCP Server exiting: {:?}", quit_reason);
    Ok(())
}
