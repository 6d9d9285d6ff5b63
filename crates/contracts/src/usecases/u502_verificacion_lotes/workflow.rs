//! Batch check of unsold lots against the invoicing records.
//!
//! Pending lots go to the backend in one request; whatever comes back as sold is persisted
//! with a second call. The screen merges the result into its checked set afterwards.
//! Nothing is sent when there is nothing pending.

use async_trait::async_trait;

use crate::domain::a009_lote::{LoteInfo, LotesData};
use crate::shared::api::ApiResponse;
use crate::shared::error::ApiError;
use crate::shared::notice::Notice;

pub const NADA_PENDIENTE: &str = "No hay lotes pendientes de verificar.";
pub const NINGUNO_VENDIDO: &str = "No se encontraron nuevos lotes vendidos.";
pub const ERROR_VERIFICACION: &str = "Error durante la verificación.";
pub const ERROR_CARGA: &str = "Error al cargar lotes.";

#[async_trait(?Send)]
pub trait VerificacionGateway {
    async fn lotes_no_vendidos(&self) -> Result<Vec<LoteInfo>, ApiError>;

    /// Returns the subset of `data.lotes` found in the invoices
    async fn verificar_lotes_vendidos(&self, data: &LotesData) -> Result<Vec<LoteInfo>, ApiError>;

    async fn update_lotes_vendidos(&self, data: &LotesData) -> Result<ApiResponse, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificacionResultado {
    /// No call was made
    NadaPendiente,
    NingunoVendido,
    /// Lots confirmed sold and persisted
    Vendidos(Vec<LoteInfo>),
}

impl VerificacionResultado {
    pub fn notice(&self) -> Notice {
        match self {
            VerificacionResultado::NadaPendiente => Notice::info(NADA_PENDIENTE),
            VerificacionResultado::NingunoVendido => Notice::success(NINGUNO_VENDIDO),
            VerificacionResultado::Vendidos(lotes) => Notice::success(format!(
                "{} nuevos lotes vendidos encontrados y actualizados en la base de datos.",
                lotes.len()
            )),
        }
    }
}

/// Fetches the unsold lots. The caller loads them into its current state.
pub async fn cargar_lotes<G: VerificacionGateway + ?Sized>(
    gateway: &G,
) -> Result<Vec<LoteInfo>, ApiError> {
    let result = gateway.lotes_no_vendidos().await;
    match &result {
        Ok(lotes) => log::debug!("verificación: {} lotes cargados", lotes.len()),
        Err(e) => log::error!("verificación: carga fallida: {}", e),
    }
    result
}

pub fn carga_notice(result: &Result<Vec<LoteInfo>, ApiError>) -> Notice {
    match result {
        Ok(lotes) => Notice::success(format!("{} lotes cargados.", lotes.len())),
        Err(e) => Notice::error(e.user_message(ERROR_CARGA)),
    }
}

/// Verifies `pendientes` and persists the ones found sold.
///
/// Nothing is merged here. The caller applies the result to the state it holds once the
/// calls are done, see [`aplicar`](super::state::VerificacionState::aplicar).
pub async fn verificar<G: VerificacionGateway + ?Sized>(
    gateway: &G,
    pendientes: Vec<LoteInfo>,
) -> Result<VerificacionResultado, ApiError> {
    if pendientes.is_empty() {
        return Ok(VerificacionResultado::NadaPendiente);
    }

    log::debug!("verificación: {} lotes a verificar", pendientes.len());
    let vendidos = gateway
        .verificar_lotes_vendidos(&LotesData { lotes: pendientes })
        .await?;
    if vendidos.is_empty() {
        return Ok(VerificacionResultado::NingunoVendido);
    }

    gateway
        .update_lotes_vendidos(&LotesData {
            lotes: vendidos.clone(),
        })
        .await?;
    log::debug!("verificación: {} vendidos", vendidos.len());
    Ok(VerificacionResultado::Vendidos(vendidos))
}

/// Notice for a finished verification, success or not
pub fn verificacion_notice(result: &Result<VerificacionResultado, ApiError>) -> Notice {
    match result {
        Ok(resultado) => resultado.notice(),
        Err(e) => Notice::error(e.user_message(ERROR_VERIFICACION)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u502_verificacion_lotes::state::VerificacionState;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeGateway {
        no_vendidos: Vec<LoteInfo>,
        vendidos: Vec<LoteInfo>,
        update_falla: bool,
        verificados: RefCell<Vec<Vec<LoteInfo>>>,
        actualizados: RefCell<Vec<Vec<LoteInfo>>>,
    }

    #[async_trait(?Send)]
    impl VerificacionGateway for FakeGateway {
        async fn lotes_no_vendidos(&self) -> Result<Vec<LoteInfo>, ApiError> {
            Ok(self.no_vendidos.clone())
        }

        async fn verificar_lotes_vendidos(&self, data: &LotesData) -> Result<Vec<LoteInfo>, ApiError> {
            self.verificados.borrow_mut().push(data.lotes.clone());
            Ok(self
                .vendidos
                .iter()
                .filter(|l| data.lotes.contains(l))
                .copied()
                .collect())
        }

        async fn update_lotes_vendidos(&self, data: &LotesData) -> Result<ApiResponse, ApiError> {
            if self.update_falla {
                return Err(ApiError::Network("offline".into()));
            }
            self.actualizados.borrow_mut().push(data.lotes.clone());
            Ok(ApiResponse {
                success: true,
                message: String::new(),
            })
        }
    }

    fn gateway() -> FakeGateway {
        FakeGateway {
            no_vendidos: vec![LoteInfo::new(1, 2024), LoteInfo::new(2, 2024)],
            vendidos: vec![LoteInfo::new(1, 2024)],
            ..Default::default()
        }
    }

    fn loaded(gateway: &FakeGateway) -> VerificacionState {
        let mut state = VerificacionState::default();
        state.load(gateway.no_vendidos.clone());
        state
    }

    #[tokio::test]
    async fn test_load_notice() {
        let gateway = gateway();
        let result = cargar_lotes(&gateway).await;
        assert_eq!(carga_notice(&result), Notice::success("2 lotes cargados."));

        let failed: Result<Vec<LoteInfo>, ApiError> = Err(ApiError::Network("offline".into()));
        assert_eq!(carga_notice(&failed), Notice::error(ERROR_CARGA));
    }

    #[tokio::test]
    async fn test_batch_verification_merges_confirmed_lots() {
        let gateway = gateway();
        let mut state = loaded(&gateway);

        let result = verificar(&gateway, state.pending()).await;
        assert_eq!(
            result,
            Ok(VerificacionResultado::Vendidos(vec![LoteInfo::new(1, 2024)]))
        );
        assert_eq!(
            verificacion_notice(&result),
            Notice::success("1 nuevos lotes vendidos encontrados y actualizados en la base de datos.")
        );
        assert!(state.checked().is_empty());
        if let Ok(resultado) = &result {
            assert_eq!(state.aplicar(resultado), 1);
        }
        assert_eq!(state.checked(), &[LoteInfo::new(1, 2024)]);
        assert_eq!(
            *gateway.actualizados.borrow(),
            vec![vec![LoteInfo::new(1, 2024)]]
        );

        // second run only sends what is still pending
        let result = verificar(&gateway, state.pending()).await;
        assert_eq!(result, Ok(VerificacionResultado::NingunoVendido));
        assert_eq!(
            gateway.verificados.borrow()[1],
            vec![LoteInfo::new(2, 2024)]
        );
        assert_eq!(state.checked(), &[LoteInfo::new(1, 2024)]);
    }

    #[tokio::test]
    async fn test_edits_during_verification_survive_the_merge() {
        let gateway = gateway();
        let state = RefCell::new(loaded(&gateway));

        let pendientes = state.borrow().pending();
        let en_curso = verificar(&gateway, pendientes);
        // the operator searches before the request resolves
        state.borrow_mut().set_search("2024");
        let resultado = en_curso.await.unwrap();
        state.borrow_mut().aplicar(&resultado);

        let state = state.into_inner();
        assert_eq!(state.search(), "2024");
        assert_eq!(state.checked(), &[LoteInfo::new(1, 2024)]);
    }

    #[tokio::test]
    async fn test_nothing_pending_makes_no_call() {
        let gateway = gateway();
        let state = VerificacionState::default();
        let result = verificar(&gateway, state.pending()).await;
        assert_eq!(result, Ok(VerificacionResultado::NadaPendiente));
        assert_eq!(verificacion_notice(&result), Notice::info(NADA_PENDIENTE));
        assert!(gateway.verificados.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_update_is_an_error() {
        let mut gateway = gateway();
        gateway.update_falla = true;
        let state = loaded(&gateway);

        let result = verificar(&gateway, state.pending()).await;
        assert!(result.is_err());
        assert_eq!(verificacion_notice(&result), Notice::error(ERROR_VERIFICACION));
        assert!(gateway.actualizados.borrow().is_empty());
    }
}
