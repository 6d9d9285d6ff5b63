use thiserror::Error;

use crate::shared::error::ApiError;

/// Stage of one capture submission, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturaStage {
    Idle,
    ResolvingProgram,
    CheckingEligibility,
    Registering,
    Refreshing,
}

impl CapturaStage {
    /// Fallback message for an unexplained failure in this stage
    pub fn failure_message(&self) -> &'static str {
        match self {
            CapturaStage::ResolvingProgram => "No se encontró información del programa para este lote.",
            CapturaStage::CheckingEligibility => {
                "Este lote no puede avanzar o ya fue registrado en este proceso."
            }
            _ => "Error al registrar el avance.",
        }
    }
}

/// Why a capture did not register an advance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapturaError {
    #[error("Ingrese un código de barras")]
    CodigoVacio,

    #[error("Seleccione un proceso")]
    SinProceso,

    #[error("El código de lote debe ser numérico")]
    CodigoNoNumerico,

    #[error("No se encontró información del programa para este lote.")]
    ProgramaNoEncontrado,

    /// Backend refused the advance; carries its explanation verbatim
    #[error("{0}")]
    NoPuedeAvanzar(String),

    #[error("{}", .error.user_message(.stage.failure_message()))]
    Remote { stage: CapturaStage, error: ApiError },
}

impl CapturaError {
    /// Local validation failures never reach the backend
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CapturaError::CodigoVacio | CapturaError::SinProceso | CapturaError::CodigoNoNumerico
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message() {
        let err = CapturaError::Remote {
            stage: CapturaStage::Registering,
            error: ApiError::from_status(500, Some("Lote cerrado".into())),
        };
        assert_eq!(err.to_string(), "Lote cerrado");

        let err = CapturaError::Remote {
            stage: CapturaStage::CheckingEligibility,
            error: ApiError::Network("offline".into()),
        };
        assert_eq!(
            err.to_string(),
            "Este lote no puede avanzar o ya fue registrado en este proceso."
        );
    }
}
