pub mod grouping;
pub mod workflow;

pub use grouping::{agrupar_por_corrida, build_detalle, GrupoCorrida};
pub use workflow::{buscar, confirmacion_sobreescritura, guardar, PaqueteBusqueda, PaquetesGateway};

use crate::usecases::common::UseCaseMetadata;

pub struct Paquetes;

impl UseCaseMetadata for Paquetes {
    fn usecase_index() -> &'static str {
        "u504"
    }

    fn usecase_name() -> &'static str {
        "paquetes"
    }

    fn display_name() -> &'static str {
        "Paquetes"
    }

    fn description() -> &'static str {
        "Consulta y guardado de paquetes de suelas por corrida"
    }
}
