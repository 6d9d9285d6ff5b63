//! Sole assignment grid: each complete row links a product to a sole.

use async_trait::async_trait;

use super::fila::{ProductoFila, ProductoGateway};
use crate::domain::a011_suela::{CombinacionProdCreateData, SuelaInfo, DESCRIPCION_NO_DISPONIBLE, SUELA_NO_ENCONTRADA};
use crate::shared::api::ApiResponse;
use crate::shared::error::ApiError;
use crate::shared::notice::Notice;

pub const SUELA_NO_ENCONTRADA_AVISO: &str = "Suela no encontrada";
pub const SIN_FILAS_COMPLETAS: &str = "No hay filas completas para guardar";
pub const COMBINACIONES_GUARDADAS: &str = "Combinaciones guardadas exitosamente";
pub const ERROR_GUARDADO: &str = "Error al guardar las combinaciones";

#[async_trait(?Send)]
pub trait SuelasGateway: ProductoGateway {
    async fn suela_info(&self, suela: i32) -> Result<SuelaInfo, ApiError>;

    async fn create_combinacion_prod(
        &self,
        data: &CombinacionProdCreateData,
    ) -> Result<ApiResponse, ApiError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuelaFila {
    pub producto: ProductoFila,
    pub suela: String,
    pub descripcion_suela: String,
}

impl SuelaFila {
    /// Body to save, once every field is filled in
    pub fn create_data(&self) -> Option<CombinacionProdCreateData> {
        if !self.producto.is_identified() {
            return None;
        }
        Some(CombinacionProdCreateData {
            producto: self.producto.producto?,
            estilo_cliente: self.producto.estilo.trim().to_string(),
            suela: self.suela.trim().parse().ok()?,
        })
    }
}

/// Bodies of the rows ready to be saved, in grid order
pub fn filas_completas(filas: &[SuelaFila]) -> Vec<CombinacionProdCreateData> {
    filas.iter().filter_map(SuelaFila::create_data).collect()
}

/// Looks up the description of the typed sole
pub async fn buscar_suela<G: SuelasGateway + ?Sized>(
    gateway: &G,
    fila: &mut SuelaFila,
) -> Result<(), Notice> {
    let Ok(suela) = fila.suela.trim().parse::<i32>() else {
        return Ok(());
    };
    match gateway.suela_info(suela).await {
        Ok(info) if !info.descripcion_suela.trim().is_empty() => {
            fila.descripcion_suela = info.descripcion_suela;
            Ok(())
        }
        Ok(_) => {
            fila.descripcion_suela = DESCRIPCION_NO_DISPONIBLE.to_string();
            Ok(())
        }
        Err(e) => {
            log::warn!("suelas: suela {}: {}", suela, e);
            fila.descripcion_suela = SUELA_NO_ENCONTRADA.to_string();
            Err(Notice::error(SUELA_NO_ENCONTRADA_AVISO))
        }
    }
}

/// Saves every complete row. On success the grid should be cleared.
pub async fn guardar_todo<G: SuelasGateway + ?Sized>(gateway: &G, filas: &[SuelaFila]) -> Notice {
    let bodies = filas_completas(filas);
    if bodies.is_empty() {
        return Notice::error(SIN_FILAS_COMPLETAS);
    }
    for body in &bodies {
        if let Err(e) = gateway.create_combinacion_prod(body).await {
            log::error!("suelas: producto {} suela {}: {}", body.producto, body.suela, e);
            return Notice::error(e.user_message(ERROR_GUARDADO));
        }
    }
    log::debug!("suelas: {} combinaciones guardadas", bodies.len());
    Notice::success(COMBINACIONES_GUARDADAS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a011_suela::{CombinacionInfo, CorridaInfo, ProductoInfo};
    use crate::usecases::u505_asignacion_suelas::fila::tests::{fila, FakeCatalogo};
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeGateway {
        saved: RefCell<Vec<CombinacionProdCreateData>>,
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
    impl SuelasGateway for FakeGateway {
        async fn suela_info(&self, suela: i32) -> Result<SuelaInfo, ApiError> {
            match suela {
                7 => Ok(SuelaInfo {
                    descripcion_suela: "Tractor".into(),
                }),
                _ => Err(ApiError::NotFound),
            }
        }

        async fn create_combinacion_prod(
            &self,
            data: &CombinacionProdCreateData,
        ) -> Result<ApiResponse, ApiError> {
            self.saved.borrow_mut().push(data.clone());
            Ok(ApiResponse::default())
        }
    }

    fn completa() -> SuelaFila {
        let mut producto = fila("101", "94");
        producto.combinacion = Some(3);
        producto.producto = Some(9001);
        SuelaFila {
            producto,
            suela: "7".into(),
            descripcion_suela: String::new(),
        }
    }

    #[test]
    fn test_only_complete_rows_are_saved() {
        let mut sin_producto = completa();
        sin_producto.producto.producto = None;
        let mut sin_suela = completa();
        sin_suela.suela.clear();

        let bodies = filas_completas(&[sin_producto, completa(), sin_suela]);
        assert_eq!(
            bodies,
            vec![CombinacionProdCreateData {
                producto: 9001,
                estilo_cliente: "101".into(),
                suela: 7,
            }]
        );
    }

    #[tokio::test]
    async fn test_buscar_suela() {
        let gateway = FakeGateway::default();
        let mut f = completa();
        buscar_suela(&gateway, &mut f).await.unwrap();
        assert_eq!(f.descripcion_suela, "Tractor");

        f.suela = "8".into();
        assert_eq!(
            buscar_suela(&gateway, &mut f).await,
            Err(Notice::error(SUELA_NO_ENCONTRADA_AVISO))
        );
        assert_eq!(f.descripcion_suela, SUELA_NO_ENCONTRADA);
    }

    #[tokio::test]
    async fn test_guardar_todo() {
        let gateway = FakeGateway::default();
        assert_eq!(
            guardar_todo(&gateway, &[SuelaFila::default()]).await,
            Notice::error(SIN_FILAS_COMPLETAS)
        );
        assert_eq!(
            guardar_todo(&gateway, &[completa(), completa()]).await,
            Notice::success(COMBINACIONES_GUARDADAS)
        );
        assert_eq!(gateway.saved.borrow().len(), 2);
    }
}
