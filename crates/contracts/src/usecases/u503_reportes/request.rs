use chrono::{Datelike, NaiveDate};

use crate::shared::api::query_string;
use crate::shared::error::ApiError;

pub const REPORTE_GENERADO: &str = "Reporte generado exitosamente";
pub const ERROR_REPORTE: &str = "Error al generar el reporte. Intente de nuevo.";
pub const ERROR_INVENTARIO: &str = "No se pudo generar el reporte de inventario.";

/// Number of years offered by the weekly report, starting five years back
pub const YEAR_OPTIONS: i32 = 8;
pub const MAX_WEEK: u32 = 53;

/// A PDF report of the reporting service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRequest {
    Diario(NaiveDate),
    Semanal { anio: i32, semana: u32 },
    InventarioProceso,
}

impl ReportRequest {
    /// Path on the reporting service
    pub fn path(&self) -> &'static str {
        match self {
            ReportRequest::Diario(_) => "/inyeccion/avance-dia",
            ReportRequest::Semanal { .. } => "/inyeccion/avance-semana",
            ReportRequest::InventarioProceso => "/inyeccion/inventario-proceso",
        }
    }

    pub fn query(&self) -> String {
        match self {
            ReportRequest::Diario(dia) => {
                query_string(&[("dia", dia.format("%Y-%m-%d").to_string())])
            }
            ReportRequest::Semanal { anio, semana } => {
                query_string(&[("anio", anio.to_string()), ("semana", semana.to_string())])
            }
            ReportRequest::InventarioProceso => String::new(),
        }
    }

    pub fn path_and_query(&self) -> String {
        format!("{}{}", self.path(), self.query())
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportRequest::Diario(_) => "Reporte Diario de Avances",
            ReportRequest::Semanal { .. } => "Reporte Semanal de Avances",
            ReportRequest::InventarioProceso => "Reporte de Inventario en Proceso",
        }
    }

    /// Suggested name for the downloaded file
    pub fn file_name(&self) -> String {
        match self {
            ReportRequest::Diario(dia) => format!("Reporte_Diario_{}.pdf", dia.format("%Y-%m-%d")),
            ReportRequest::Semanal { anio, semana } => {
                format!("Reporte_Semanal_{}_S{:02}.pdf", anio, semana)
            }
            ReportRequest::InventarioProceso => "Reporte_Inventario_Proceso.pdf".to_string(),
        }
    }

    /// Notification for a failed generation; a 404 means there was nothing to report
    pub fn error_message(&self, error: &ApiError) -> &'static str {
        match (self, error.is_not_found()) {
            (ReportRequest::InventarioProceso, _) => ERROR_INVENTARIO,
            (ReportRequest::Diario(_), true) => {
                "No se encontraron datos para generar el reporte en esta fecha."
            }
            (ReportRequest::Semanal { .. }, true) => {
                "No se encontraron datos para el año y semana seleccionados."
            }
            _ => ERROR_REPORTE,
        }
    }
}

/// Week of the year counting partial weeks, with weeks starting on Sunday
pub fn week_number(date: NaiveDate) -> u32 {
    let jan1_weekday = date
        .with_ordinal(1)
        .map(|jan1| jan1.weekday().num_days_from_sunday())
        .unwrap_or(0);
    (date.ordinal0() + jan1_weekday + 1).div_ceil(7)
}

/// Years offered by the weekly report selector
pub fn year_options(current_year: i32) -> Vec<i32> {
    (0..YEAR_OPTIONS).map(|i| current_year - 5 + i).collect()
}

pub fn week_options() -> Vec<u32> {
    (1..=MAX_WEEK).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_report_paths() {
        let diario = ReportRequest::Diario(date(2025, 3, 7));
        assert_eq!(diario.path_and_query(), "/inyeccion/avance-dia?dia=2025-03-07");

        let semanal = ReportRequest::Semanal { anio: 2024, semana: 9 };
        assert_eq!(
            semanal.path_and_query(),
            "/inyeccion/avance-semana?anio=2024&semana=9"
        );
        assert_eq!(semanal.file_name(), "Reporte_Semanal_2024_S09.pdf");

        assert_eq!(
            ReportRequest::InventarioProceso.path_and_query(),
            "/inyeccion/inventario-proceso"
        );
    }

    #[test]
    fn test_error_messages() {
        let semanal = ReportRequest::Semanal { anio: 2024, semana: 9 };
        assert_eq!(
            semanal.error_message(&ApiError::NotFound),
            "No se encontraron datos para el año y semana seleccionados."
        );
        assert_eq!(
            semanal.error_message(&ApiError::Network("offline".into())),
            ERROR_REPORTE
        );
        assert_eq!(
            ReportRequest::InventarioProceso.error_message(&ApiError::NotFound),
            ERROR_INVENTARIO
        );
    }

    #[test]
    fn test_week_number() {
        // 2025-01-01 is a Wednesday
        assert_eq!(week_number(date(2025, 1, 1)), 1);
        assert_eq!(week_number(date(2025, 1, 4)), 1);
        assert_eq!(week_number(date(2025, 1, 5)), 2);
        assert_eq!(week_number(date(2025, 12, 31)), 53);
        // 2023-01-01 is a Sunday
        assert_eq!(week_number(date(2023, 1, 7)), 1);
        assert_eq!(week_number(date(2023, 1, 8)), 2);
    }

    #[test]
    fn test_selector_options() {
        assert_eq!(
            year_options(2025),
            vec![2020, 2021, 2022, 2023, 2024, 2025, 2026, 2027]
        );
        assert_eq!(week_options().len(), 53);
    }
}
