pub mod request;

pub use request::{week_number, week_options, year_options, ReportRequest, REPORTE_GENERADO};

use crate::usecases::common::UseCaseMetadata;

pub struct Reportes;

impl UseCaseMetadata for Reportes {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "reportes"
    }

    fn display_name() -> &'static str {
        "Reportes de inyección"
    }
}
