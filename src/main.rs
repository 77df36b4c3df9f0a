use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use ara_mes::config::environment::EnvironmentConfig;
use ara_mes::database::{create_pool, run_migrations};
use ara_mes::routes::create_router;
use ara_mes::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carrega variáveis de ambiente
    dotenv().ok();

    // Configura logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🍇 ARA MES - Rastreio de Recebimento de Frutas");
    info!("==============================================");

    let config = EnvironmentConfig::from_env();

    // Inicializa o banco
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    if let Err(e) = run_migrations(&pool).await {
        error!("❌ Erro aplicando migrações: {}", e);
        return Err(anyhow::anyhow!("Erro de migração: {}", e));
    }
    info!("✅ Migrações aplicadas");

    let addr: SocketAddr = config.server_url().parse()?;

    let app_state = AppState::new(pool, config);
    let app = create_router(app_state);

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  / - Informações do serviço");
    info!("🔑 Autenticação:");
    info!("   POST /api/auth/login - Login");
    info!("   POST /api/auth/logout - Logout");
    info!("   GET  /api/auth/me - Usuário atual");
    info!("📝 Apontamentos:");
    info!("   GET  /api/apontamento - Listar apontamentos (filtros: data, cor, cabecal, limite)");
    info!("   POST /api/apontamento - Criar apontamento");
    info!("   GET  /api/apontamento/:id - Buscar apontamento");
    info!("   PUT  /api/apontamento/:id - Atualizar apontamento");
    info!("   DELETE /api/apontamento/:id - Remover apontamento");
    info!("⚖️ Amostras de peso:");
    info!("   GET  /api/amostras-peso - Listar amostras (filtro: data)");
    info!("   POST /api/amostras-peso - Registrar lote de pesos");
    info!("   DELETE /api/amostras-peso/:id - Remover amostra");
    info!("🗂️ Cadastros:");
    info!("   GET|POST /api/cadastros/cabecais - Cabeçais");
    info!("   POST /api/cadastros/valvulas - Criar válvula");
    info!("   GET  /api/cadastros/valvulas/:cabecal_id - Válvulas do cabeçal");
    info!("   GET|POST /api/cadastros/variedades - Variedades");
    info!("   GET|POST /api/cadastros/linhas-producao - Linhas de produção");
    info!("   GET|POST /api/cadastros/posicoes - Posições");
    info!("   GET|POST /api/cadastros/embaladeiras - Embaladeiras");
    info!("📦 Simulação de packing:");
    info!("   POST /api/simulacao/packing - Registrar uso");
    info!("   DELETE /api/simulacao/packing/:apontamento_id - Remover uso");
    info!("📊 Dashboards:");
    info!("   GET  /dashboard/primario - Pesos, recebimento por cor e histograma por hora");
    info!("   GET  /dashboard/secundario - Contagens distintas por hora e totais do dia");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Erro do servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, desligando servidor...");
        },
        _ = terminate => {
            info!("🛑 SIGTERM recebido, desligando servidor...");
        },
    }
}
