pub mod state;
pub mod workflow;

pub use state::{VerificacionState, VerificacionStats, VERIFICACION_PAGE_SIZE};
pub use workflow::{
    carga_notice, cargar_lotes, verificacion_notice, verificar, VerificacionGateway, VerificacionResultado,
};

use crate::usecases::common::UseCaseMetadata;

pub struct VerificacionLotes;

impl UseCaseMetadata for VerificacionLotes {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "verificacion_lotes"
    }

    fn display_name() -> &'static str {
        "Verificar lotes"
    }

    fn description() -> &'static str {
        "Cruce de lotes no vendidos contra las facturas y marcado como vendidos"
    }
}
