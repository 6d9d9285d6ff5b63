use crate::shared::api_utils::{get_json, post_json, segment};
use async_trait::async_trait;
use chrono::NaiveDate;
use contracts::domain::a009_lote::{
    Departamento, InfoPrograma, LoteDiaInfo, LoteSnapshot, OrdenDepartamentoResponse,
    PuedeAvanzarResponse,
};
use contracts::shared::api::ApiResponse;
use contracts::shared::error::ApiError;
use contracts::usecases::u501_captura_avance::{CapturaGateway, RegistrarAvanceData};

/// Injection endpoints of the business backend
pub struct CapturaApi;

#[async_trait(?Send)]
impl CapturaGateway for CapturaApi {
    async fn info_programa(&self, lote: i32, year: i32) -> Result<Vec<InfoPrograma>, ApiError> {
        get_json(&format!("/inyeccion/programa/{}/{}", lote, year)).await
    }

    async fn orden_departamento(
        &self,
        departamento: Departamento,
    ) -> Result<OrdenDepartamentoResponse, ApiError> {
        get_json(&format!("/inyeccion/orden-departamento/{}", departamento.value())).await
    }

    async fn puede_avanzar(
        &self,
        lote: &str,
        programa: i32,
        orden: i32,
    ) -> Result<PuedeAvanzarResponse, ApiError> {
        get_json(&format!(
            "/inyeccion/puede-avanzar/{}/{}/{}",
            segment(lote),
            programa,
            orden
        ))
        .await
    }

    async fn registrar_avance(&self, data: &RegistrarAvanceData) -> Result<ApiResponse, ApiError> {
        post_json("/inyeccion/registrar-avance", data).await
    }

    async fn info_lote(&self, lote: i32, year: i32) -> Result<Vec<LoteSnapshot>, ApiError> {
        get_json(&format!("/inyeccion/lote/{}/{}", lote, year)).await
    }
}

/// Lots advanced on `fecha` in `departamento`
pub async fn lotes_dia(fecha: NaiveDate, departamento: Departamento) -> Result<Vec<LoteDiaInfo>, ApiError> {
    get_json(&format!(
        "/inyeccion/lotes-dia/{}/{}",
        fecha.format("%Y-%m-%d"),
        departamento.value()
    ))
    .await
}
