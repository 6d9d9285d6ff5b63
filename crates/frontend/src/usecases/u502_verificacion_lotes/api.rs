use crate::shared::api_utils::{get_json, post_json_for, put_json};
use async_trait::async_trait;
use contracts::domain::a009_lote::{DetaFactRecord, LoteInfo, LotesData};
use contracts::shared::api::ApiResponse;
use contracts::shared::error::ApiError;
use contracts::usecases::u502_verificacion_lotes::VerificacionGateway;

pub struct VerificacionApi;

#[async_trait(?Send)]
impl VerificacionGateway for VerificacionApi {
    async fn lotes_no_vendidos(&self) -> Result<Vec<LoteInfo>, ApiError> {
        get_json("/inyeccion/lotes-no-vendidos").await
    }

    async fn verificar_lotes_vendidos(&self, data: &LotesData) -> Result<Vec<LoteInfo>, ApiError> {
        post_json_for("/inyeccion/verificar-lotes-vendidos", data).await
    }

    async fn update_lotes_vendidos(&self, data: &LotesData) -> Result<ApiResponse, ApiError> {
        put_json("/inyeccion/lotes-vendidos", data).await
    }
}

/// Invoice detail rows of `DETAFACT.DBF`
pub async fn detafact() -> Result<Vec<DetaFactRecord>, ApiError> {
    get_json("/inyeccion/detafact").await
}
