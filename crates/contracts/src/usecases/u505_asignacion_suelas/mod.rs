pub mod fila;
pub mod workflow;

pub use fila::{cargar_corrida, resolver_producto, ProductoFila, ProductoGateway};
pub use workflow::{buscar_suela, filas_completas, guardar_todo, SuelaFila, SuelasGateway};

use crate::usecases::common::UseCaseMetadata;

pub struct AsignacionSuelas;

impl UseCaseMetadata for AsignacionSuelas {
    fn usecase_index() -> &'static str {
        "u505"
    }

    fn usecase_name() -> &'static str {
        "asignacion_suelas"
    }

    fn display_name() -> &'static str {
        "Suelas"
    }

    fn description() -> &'static str {
        "Asignación de suelas a productos por estilo, corrida y combinación"
    }
}
