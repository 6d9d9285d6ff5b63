use crate::shared::api_utils::{get_json, post_json};
use async_trait::async_trait;
use contracts::domain::a011_suela::{
    CombinacionInfo, CombinacionProdCreateData, CorridaInfo, ProductoInfo, SuelaInfo,
};
use contracts::shared::api::ApiResponse;
use contracts::shared::error::ApiError;
use contracts::usecases::u505_asignacion_suelas::{ProductoGateway, SuelasGateway};

/// Sole endpoints; the product lookups are shared with the barcode grid
pub struct SuelasApi;

#[async_trait(?Send)]
impl ProductoGateway for SuelasApi {
    async fn corrida_info(&self, corrida: i32) -> Result<CorridaInfo, ApiError> {
        get_json(&format!("/suelas/corridas/{}", corrida)).await
    }

    async fn combinaciones(
        &self,
        estilo: i32,
        corrida: i32,
    ) -> Result<Vec<CombinacionInfo>, ApiError> {
        get_json(&format!("/suelas/combinaciones/{}/{}", estilo, corrida)).await
    }

    async fn producto(
        &self,
        estilo: i32,
        corrida: i32,
        combinacion: i32,
    ) -> Result<ProductoInfo, ApiError> {
        get_json(&format!("/suelas/productos/{}/{}/{}", estilo, corrida, combinacion)).await
    }
}

#[async_trait(?Send)]
impl SuelasGateway for SuelasApi {
    async fn suela_info(&self, suela: i32) -> Result<SuelaInfo, ApiError> {
        get_json(&format!("/suelas/{}", suela)).await
    }

    async fn create_combinacion_prod(
        &self,
        data: &CombinacionProdCreateData,
    ) -> Result<ApiResponse, ApiError> {
        post_json("/suelas/combinaciones-prod", data).await
    }
}
