use chrono::{Duration, Utc};
use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::dto::dashboard_dto::{DashboardPrimario, DashboardSecundario};
use crate::repositories::dashboard_repository::{DashboardRepository, TotalPorCorRow};
use crate::services::dashboard_service::{self, ApontamentoAgrupavel, PesoApontamento, TotaisPorCor};
use crate::utils::errors::AppError;
use crate::utils::tempo;

pub struct DashboardController {
    repository: DashboardRepository,
    fuso_horario_offset: i32,
    expediente_inicio: u32,
    expediente_fim: u32,
}

impl DashboardController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: DashboardRepository::new(pool),
            fuso_horario_offset: config.fuso_horario_offset,
            expediente_inicio: config.expediente_inicio,
            expediente_fim: config.expediente_fim,
        }
    }

    /// Painel principal: peso estimado, total de contentores, tabela
    /// por cor com a sobra de ontem e a série por hora do expediente.
    pub async fn primario(&self) -> Result<DashboardPrimario, AppError> {
        let agora = Utc::now();
        let inicio_hoje = tempo::inicio_do_dia_local(agora, self.fuso_horario_offset);
        let inicio_ontem = inicio_hoje - Duration::days(1);

        let pesos: Vec<PesoApontamento> = self
            .repository
            .pesos_do_dia(inicio_hoje)
            .await?
            .into_iter()
            .map(|linha| PesoApontamento {
                quantidade_containers: linha.quantidade_containers,
                quantidade_usada: linha.quantidade_usada,
                num_amostras: linha.num_amostras,
                soma_pesos: linha.soma_pesos,
            })
            .collect();
        let peso = dashboard_service::peso_total_do_dia(&pesos);

        let total_contentores = self.repository.somar_containers(inicio_hoje).await?;

        let recebido_hoje = em_mapa(self.repository.recebido_por_cor(inicio_hoje, None).await?);
        let usado_hoje = em_mapa(self.repository.usado_por_cor(inicio_hoje).await?);
        let recebido_ontem = em_mapa(
            self.repository
                .recebido_por_cor(inicio_ontem, Some(inicio_hoje))
                .await?,
        );
        // TODO: gravar a data de consumo no packing para apurar o uso de
        // ontem; sem ela a sobra do dia anterior considera uso zero
        let usado_ontem = TotaisPorCor::new();

        let contentores_por_cor = dashboard_service::tabela_por_cor(
            &recebido_hoje,
            &usado_hoje,
            &recebido_ontem,
            &usado_ontem,
        );

        let registros = self.repository.apontamentos_do_dia(inicio_hoje).await?;
        let hora_atual = tempo::hora_local(agora, self.fuso_horario_offset);
        let pares: Vec<(u32, i64)> = registros
            .iter()
            .map(|linha| {
                (
                    tempo::hora_local(linha.created_at, self.fuso_horario_offset),
                    linha.quantidade_containers as i64,
                )
            })
            .collect();
        let contentores_por_hora = dashboard_service::contentores_por_hora(
            &pares,
            hora_atual,
            self.expediente_inicio,
            self.expediente_fim,
        );

        Ok(DashboardPrimario {
            data: tempo::data_local(agora, self.fuso_horario_offset),
            peso,
            total_contentores,
            contentores_por_cor,
            contentores_por_hora,
        })
    }

    /// Painel secundário: séries de valores distintos por hora e os
    /// totais do dia inteiro.
    pub async fn secundario(&self) -> Result<DashboardSecundario, AppError> {
        let agora = Utc::now();
        let inicio_hoje = tempo::inicio_do_dia_local(agora, self.fuso_horario_offset);

        let registros: Vec<ApontamentoAgrupavel> = self
            .repository
            .apontamentos_do_dia(inicio_hoje)
            .await?
            .into_iter()
            .map(|linha| ApontamentoAgrupavel {
                hora_local: tempo::hora_local(linha.created_at, self.fuso_horario_offset),
                numero_carroca: linha.numero_carroca,
                numero_pallet: linha.numero_pallet,
                cabecal_nome: linha.cabecal_nome,
                valvula_nome: linha.valvula_nome,
                quantidade_containers: linha.quantidade_containers,
            })
            .collect();

        let hora_atual = tempo::hora_local(agora, self.fuso_horario_offset);
        let series = dashboard_service::series_por_hora(
            &registros,
            hora_atual,
            self.expediente_inicio,
            self.expediente_fim,
        );
        let totais_do_dia = dashboard_service::totais_do_dia(&registros);

        Ok(DashboardSecundario {
            data: tempo::data_local(agora, self.fuso_horario_offset),
            carrocas_por_hora: series.carrocas,
            pallets_por_hora: series.pallets,
            cabecais_por_hora: series.cabecais,
            valvulas_por_hora: series.valvulas,
            contentores_por_hora: series.contentores,
            totais_do_dia,
        })
    }
}

fn em_mapa(linhas: Vec<TotalPorCorRow>) -> TotaisPorCor {
    linhas
        .into_iter()
        .map(|linha| (linha.cor, linha.total))
        .collect()
}
