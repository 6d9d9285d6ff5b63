use crate::shared::api_utils::{delete, get_json, post_json};
use async_trait::async_trait;
use contracts::domain::a010_paquete::{PaqueteAgregado, PaqueteCreateData};
use contracts::shared::api::ApiResponse;
use contracts::shared::error::ApiError;
use contracts::usecases::u504_paquetes::PaquetesGateway;

pub struct PaquetesApi;

#[async_trait(?Send)]
impl PaquetesGateway for PaquetesApi {
    async fn paquete_detalle(
        &self,
        periodo: i32,
        paquete: i32,
    ) -> Result<Vec<PaqueteAgregado>, ApiError> {
        get_json(&format!("/paquetes/{}/{}", periodo, paquete)).await
    }

    async fn delete_paquete(&self, paquete: i32) -> Result<ApiResponse, ApiError> {
        delete(&format!("/paquetes/{}", paquete)).await
    }

    async fn create_paquete(&self, data: &PaqueteCreateData) -> Result<ApiResponse, ApiError> {
        post_json("/paquetes", data).await
    }
}
