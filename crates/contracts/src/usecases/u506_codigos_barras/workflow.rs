//! Barcode grid: resolve each row's product and export its barcodes to the legacy DBF.

use async_trait::async_trait;

use crate::domain::a012_codigo_barras::{CodigoInfo, CodigosBarrasResponse, GuardarDbfRequest, RegistroDbf};
use crate::shared::api::ApiResponse;
use crate::shared::error::ApiError;
use crate::shared::notice::Notice;
use crate::usecases::u505_asignacion_suelas::fila::{resolver_producto, ProductoFila, ProductoGateway};

pub const ERROR_CODIGOS: &str = "Error al buscar el producto o sus códigos.";
pub const SIN_REGISTROS: &str = "No hay registros válidos para guardar.";
pub const ERROR_GUARDADO: &str = "Error al guardar.";

#[async_trait(?Send)]
pub trait CodigosGateway: ProductoGateway {
    async fn codigos_barras(&self, producto: i32) -> Result<CodigosBarrasResponse, ApiError>;

    async fn guardar_dbf(&self, data: &GuardarDbfRequest) -> Result<ApiResponse, ApiError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodigosFila {
    pub producto: ProductoFila,
    pub codigos: Vec<CodigoInfo>,
}

impl CodigosFila {
    /// DBF lines of this row; empty until estilo, corrida and combinacion are set
    pub fn registros(&self) -> Vec<RegistroDbf> {
        let fila = &self.producto;
        let Some(combinacion) = fila.combinacion.filter(|_| fila.is_identified()) else {
            return Vec::new();
        };
        self.codigos
            .iter()
            .filter(|c| !c.codigo.trim().is_empty())
            .map(|c| RegistroDbf {
                estilo: fila.estilo.trim().to_string(),
                combinacion: combinacion.to_string(),
                descripcion_combinacion: fila.combinacion_descripcion.clone(),
                corrida: fila.corrida.trim().to_string(),
                descripcion_corrida: fila.descripcion_corrida.clone(),
                punto: c.talla.clone(),
                codigo_barras: c.codigo.clone(),
            })
            .collect()
    }
}

/// Every exportable line of the grid, in row order
pub fn registros_dbf(filas: &[CodigosFila]) -> Vec<RegistroDbf> {
    filas.iter().flat_map(CodigosFila::registros).collect()
}

/// Selects a combination, then loads the barcodes of the product it resolves to.
/// Any failure leaves the row without product and barcodes.
pub async fn seleccionar_combinacion<G: CodigosGateway + ?Sized>(
    gateway: &G,
    fila: &mut CodigosFila,
    combinacion: i32,
) -> Result<(), Notice> {
    fila.codigos.clear();
    let producto = resolver_producto(gateway, &mut fila.producto, combinacion).await?;
    match gateway.codigos_barras(producto).await {
        Ok(response) => {
            fila.codigos = response.codigos;
            Ok(())
        }
        Err(e) => {
            log::warn!("codigos: producto {}: {}", producto, e);
            fila.producto.producto = None;
            Err(Notice::error(e.user_message(ERROR_CODIGOS)))
        }
    }
}

/// Posts the grid's barcodes. The success notice is the backend's own message.
pub async fn guardar_en_dbf<G: CodigosGateway + ?Sized>(gateway: &G, filas: &[CodigosFila]) -> Notice {
    let registros = registros_dbf(filas);
    if registros.is_empty() {
        return Notice::error(SIN_REGISTROS);
    }
    let count = registros.len();
    match gateway.guardar_dbf(&GuardarDbfRequest { registros }).await {
        Ok(response) => {
            log::debug!("codigos: {} registros enviados", count);
            Notice::success(response.message)
        }
        Err(e) => {
            log::error!("codigos: guardado fallido: {}", e);
            Notice::error(e.user_message(ERROR_GUARDADO))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a011_suela::{CombinacionInfo, CorridaInfo, ProductoInfo};
    use crate::usecases::u505_asignacion_suelas::fila::tests::{fila, FakeCatalogo};
    use crate::usecases::u505_asignacion_suelas::fila::PRODUCTO_NO_ENCONTRADO;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeGateway {
        posted: RefCell<Vec<GuardarDbfRequest>>,
    }

    #[async_trait(?Send)]
    impl ProductoGateway for FakeGateway {
        async fn corrida_info(&self, corrida: i32) -> Result<CorridaInfo, ApiError> {
            FakeCatalogo.corrida_info(corrida).await
        }

        async fn combinaciones(
            &self,
            estilo: i32,
            corrida: i32,
        ) -> Result<Vec<CombinacionInfo>, ApiError> {
            FakeCatalogo.combinaciones(estilo, corrida).await
        }

        async fn producto(
            &self,
            estilo: i32,
            corrida: i32,
            combinacion: i32,
        ) -> Result<ProductoInfo, ApiError> {
            FakeCatalogo.producto(estilo, corrida, combinacion).await
        }
    }

    #[async_trait(?Send)]
    impl CodigosGateway for FakeGateway {
        async fn codigos_barras(&self, _producto: i32) -> Result<CodigosBarrasResponse, ApiError> {
            Ok(CodigosBarrasResponse {
                codigos: vec![
                    CodigoInfo {
                        codigo: "7501000000251".into(),
                        punto: 1,
                        talla: "25".into(),
                    },
                    CodigoInfo {
                        codigo: String::new(),
                        punto: 2,
                        talla: "26".into(),
                    },
                ],
            })
        }

        async fn guardar_dbf(&self, data: &GuardarDbfRequest) -> Result<ApiResponse, ApiError> {
            self.posted.borrow_mut().push(data.clone());
            Ok(ApiResponse {
                success: true,
                message: format!("{} registros guardados", data.registros.len()),
            })
        }
    }

    async fn fila_resuelta(gateway: &FakeGateway, combinacion: i32) -> (CodigosFila, Result<(), Notice>) {
        let mut f = CodigosFila {
            producto: fila("101", "94"),
            codigos: Vec::new(),
        };
        crate::usecases::u505_asignacion_suelas::fila::cargar_corrida(gateway, &mut f.producto)
            .await
            .unwrap();
        let result = seleccionar_combinacion(gateway, &mut f, combinacion).await;
        (f, result)
    }

    #[tokio::test]
    async fn test_export_drops_rows_without_code() {
        let gateway = FakeGateway::default();
        let (f, result) = fila_resuelta(&gateway, 3).await;
        assert_eq!(result, Ok(()));
        assert_eq!(f.codigos.len(), 2);

        let registros = registros_dbf(&[f.clone(), CodigosFila::default()]);
        assert_eq!(registros.len(), 1);
        assert_eq!(registros[0].punto, "25");
        assert_eq!(registros[0].combinacion, "3");
        assert_eq!(registros[0].descripcion_combinacion, "Negro/Blanco");
        assert_eq!(registros[0].descripcion_corrida, "25-30");

        assert_eq!(
            guardar_en_dbf(&gateway, &[f]).await,
            Notice::success("1 registros guardados")
        );
        assert_eq!(gateway.posted.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_product_clears_codes() {
        let gateway = FakeGateway::default();
        let (f, result) = fila_resuelta(&gateway, 4).await;
        assert_eq!(result, Err(Notice::error(PRODUCTO_NO_ENCONTRADO)));
        assert!(f.codigos.is_empty());

        assert_eq!(guardar_en_dbf(&gateway, &[f]).await, Notice::error(SIN_REGISTROS));
        assert!(gateway.posted.borrow().is_empty());
    }
}
