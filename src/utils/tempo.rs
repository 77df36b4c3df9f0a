//! Fuso horário e janelas de tempo
//!
//! Os painéis fecham o dia à meia-noite de um fuso fixo (Brasília por
//! padrão), independente do fuso do servidor. Tudo que é "hoje",
//! "ontem" ou "hora local" passa por aqui.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};

/// Offset fixo a partir das horas configuradas. Valores fora da faixa
/// de um dia caem para UTC.
fn offset_fixo(offset_horas: i32) -> FixedOffset {
    FixedOffset::east_opt(offset_horas * 3600)
        .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap())
}

/// Instante UTC em que começa o dia local que contém `agora`
pub fn inicio_do_dia_local(agora: DateTime<Utc>, offset_horas: i32) -> DateTime<Utc> {
    let offset = offset_fixo(offset_horas);
    let meia_noite = agora
        .with_timezone(&offset)
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    offset
        .from_local_datetime(&meia_noite)
        .unwrap()
        .with_timezone(&Utc)
}

/// Intervalo UTC semiaberto `[inicio, fim)` do dia local `data`
pub fn limites_do_dia(data: NaiveDate, offset_horas: i32) -> (DateTime<Utc>, DateTime<Utc>) {
    let offset = offset_fixo(offset_horas);
    let meia_noite = data.and_hms_opt(0, 0, 0).unwrap();
    let inicio = offset
        .from_local_datetime(&meia_noite)
        .unwrap()
        .with_timezone(&Utc);
    (inicio, inicio + Duration::days(1))
}

/// Data do calendário local que contém `agora`
pub fn data_local(agora: DateTime<Utc>, offset_horas: i32) -> NaiveDate {
    agora.with_timezone(&offset_fixo(offset_horas)).date_naive()
}

/// Hora do dia (0..=23) de `instante` no fuso local
pub fn hora_local(instante: DateTime<Utc>, offset_horas: i32) -> u32 {
    instante.with_timezone(&offset_fixo(offset_horas)).hour()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(ano: i32, mes: u32, dia: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(ano, mes, dia, h, m, 0).unwrap()
    }

    #[test]
    fn hora_local_desloca_pelo_offset() {
        // 14:00 UTC em Brasília (UTC-3) são 11:00
        assert_eq!(hora_local(utc(2025, 8, 14, 14, 0), -3), 11);
        // 01:00 UTC ainda é 22:00 do dia anterior
        assert_eq!(hora_local(utc(2025, 8, 15, 1, 0), -3), 22);
    }

    #[test]
    fn inicio_do_dia_cruza_meia_noite_utc() {
        // 01:30 UTC do dia 15 ainda pertence ao dia 14 local; o dia
        // local começa às 03:00 UTC do dia 14
        let inicio = inicio_do_dia_local(utc(2025, 8, 15, 1, 30), -3);
        assert_eq!(inicio, utc(2025, 8, 14, 3, 0));

        let data = data_local(utc(2025, 8, 15, 1, 30), -3);
        assert_eq!(data, NaiveDate::from_ymd_opt(2025, 8, 14).unwrap());
    }

    #[test]
    fn limites_do_dia_cobrem_24_horas() {
        let data = NaiveDate::from_ymd_opt(2025, 8, 14).unwrap();
        let (inicio, fim) = limites_do_dia(data, -3);
        assert_eq!(inicio, utc(2025, 8, 14, 3, 0));
        assert_eq!(fim, utc(2025, 8, 15, 3, 0));
    }

    #[test]
    fn offset_invalido_cai_para_utc() {
        assert_eq!(hora_local(utc(2025, 8, 14, 14, 0), 99), 14);
    }
}
