// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::AnalyticsRepository,
    models::analytics::CashOutflowMode,
    services::{AnalyticsService, ChatService, InvoiceService},
};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_VANNA_URL: &str = "http://localhost:8000";

// Configurações lidas do ambiente (.env opcional)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub vanna_api_base_url: String,
    pub cash_outflow_mode: CashOutflowMode,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separado do `env` para poder testar sem mexer em variáveis globais
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS inválido: '{}'", raw))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().with_context(|| format!("PORT inválida: '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        let vanna_api_base_url =
            lookup("VANNA_API_BASE_URL").unwrap_or_else(|| DEFAULT_VANNA_URL.to_string());

        let cash_outflow_mode = match lookup("CASH_OUTFLOW_MODE") {
            Some(raw) => raw.parse::<CashOutflowMode>().context("CASH_OUTFLOW_MODE inválido")?,
            None => CashOutflowMode::default(),
        };

        Ok(Self {
            database_url,
            database_max_connections,
            port,
            vanna_api_base_url,
            cash_outflow_mode,
        })
    }
}

pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    // Conecta ao banco de dados, usando '?' para propagar erros
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await
        .context("Falha ao conectar ao banco de dados")?;

    tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
    Ok(db_pool)
}

#[derive(Clone)]
pub struct AppState {
    pub analytics_service: AnalyticsService,
    pub invoice_service: InvoiceService,
    pub chat_service: ChatService,
    pub cash_outflow_mode: CashOutflowMode,
}

impl AppState {
    pub fn new(db_pool: PgPool, config: &Config) -> anyhow::Result<Self> {
        // --- Monta o gráfico de dependências ---
        let repo = Arc::new(AnalyticsRepository::new(db_pool));

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Falha ao criar o cliente HTTP")?;

        Ok(Self {
            analytics_service: AnalyticsService::new(repo.clone()),
            invoice_service: InvoiceService::new(repo),
            chat_service: ChatService::new(http_client, config.vanna_api_base_url.clone()),
            cash_outflow_mode: config.cash_outflow_mode,
        })
    }
}
