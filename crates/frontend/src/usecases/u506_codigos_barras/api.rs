use crate::shared::api_utils::{get_json, post_json};
use crate::usecases::u505_asignacion_suelas::api::SuelasApi;
use async_trait::async_trait;
use contracts::domain::a011_suela::{CombinacionInfo, CorridaInfo, ProductoInfo};
use contracts::domain::a012_codigo_barras::{CodigosBarrasResponse, GuardarDbfRequest};
use contracts::shared::api::ApiResponse;
use contracts::shared::error::ApiError;
use contracts::usecases::u505_asignacion_suelas::ProductoGateway;
use contracts::usecases::u506_codigos_barras::CodigosGateway;

pub struct CodigosApi;

#[async_trait(?Send)]
impl ProductoGateway for CodigosApi {
    async fn corrida_info(&self, corrida: i32) -> Result<CorridaInfo, ApiError> {
        SuelasApi.corrida_info(corrida).await
    }

    async fn combinaciones(
        &self,
        estilo: i32,
        corrida: i32,
    ) -> Result<Vec<CombinacionInfo>, ApiError> {
        SuelasApi.combinaciones(estilo, corrida).await
    }

    async fn producto(
        &self,
        estilo: i32,
        corrida: i32,
        combinacion: i32,
    ) -> Result<ProductoInfo, ApiError> {
        SuelasApi.producto(estilo, corrida, combinacion).await
    }
}

#[async_trait(?Send)]
impl CodigosGateway for CodigosApi {
    async fn codigos_barras(&self, producto: i32) -> Result<CodigosBarrasResponse, ApiError> {
        get_json(&format!("/codigos-barras/{}", producto)).await
    }

    async fn guardar_dbf(&self, data: &GuardarDbfRequest) -> Result<ApiResponse, ApiError> {
        post_json("/codigos-barras/guardar-dbf", data).await
    }
}
