pub mod events;
pub mod request;
pub mod workflow;

pub use events::{CapturaError, CapturaStage};
pub use request::{CapturaRequest, CapturaValida, RegistrarAvanceData};
pub use workflow::{registrar_avance, AvanceRegistrado, CapturaGateway, CapturaOutcome};

use crate::usecases::common::UseCaseMetadata;

pub struct CapturaAvance;

impl UseCaseMetadata for CapturaAvance {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "captura_avance"
    }

    fn display_name() -> &'static str {
        "Captura de avances"
    }

    fn description() -> &'static str {
        "Registro del avance de un lote por departamento con código de barras"
    }
}
