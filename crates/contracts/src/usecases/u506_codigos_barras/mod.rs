pub mod workflow;

pub use workflow::{guardar_en_dbf, registros_dbf, seleccionar_combinacion, CodigosFila, CodigosGateway};

use crate::usecases::common::UseCaseMetadata;

pub struct CodigosBarras;

impl UseCaseMetadata for CodigosBarras {
    fn usecase_index() -> &'static str {
        "u506"
    }

    fn usecase_name() -> &'static str {
        "codigos_barras"
    }

    fn display_name() -> &'static str {
        "Códigos de barras"
    }

    fn description() -> &'static str {
        "Consulta de códigos de barras por producto y exportación al DBF"
    }
}
