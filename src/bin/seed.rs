//! Seed do banco: usuário administrador e dados de exemplo.
//!
//! Idempotente: roda quantas vezes for preciso sem duplicar registros.

use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

use ara_mes::database::{create_pool, run_migrations};
use ara_mes::models::cor::CorContentor;
use ara_mes::models::usuario::PerfilUsuario;
use ara_mes::repositories::cadastro_repository::CadastroRepository;
use ara_mes::repositories::usuario_repository::UsuarioRepository;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🌱 Iniciando seed...");

    let pool = create_pool(None).await?;
    run_migrations(&pool).await?;

    // Usuário padrão
    let usuarios = UsuarioRepository::new(pool.clone());
    match usuarios.find_by_email("admin@ara.com").await? {
        Some(usuario) => info!("Usuário já existe: {}", usuario.email),
        None => {
            let hash = bcrypt::hash("admin123", bcrypt::DEFAULT_COST)?;
            let usuario = usuarios
                .create(
                    "admin@ara.com",
                    &hash,
                    "Administrador",
                    PerfilUsuario::Diretor,
                )
                .await?;
            info!("Usuário criado: {}", usuario.email);
        }
    }

    // Dados de exemplo
    let existentes =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cabecais WHERE nome = $1")
            .bind("Cabeçal 1")
            .fetch_one(&pool)
            .await?;

    if existentes == 0 {
        let cadastros = CadastroRepository::new(pool.clone());

        let cabecal = cadastros
            .criar_cabecal("Cabeçal 1", Some("Cabeçal principal"))
            .await?;
        cadastros
            .criar_valvula(
                "Válvula 1",
                Some("Válvula do cabeçal 1"),
                CorContentor::Vermelho,
                cabecal.id,
            )
            .await?;
        cadastros
            .criar_variedade("Thompson Seedless", Some("Variedade de uva sem semente"))
            .await?;

        info!("Dados de exemplo criados");
    } else {
        info!("Dados de exemplo já existem");
    }

    info!("✅ Seed concluído!");
    Ok(())
}
