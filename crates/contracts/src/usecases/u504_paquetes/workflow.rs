//! Package lookup and overwrite.

use async_trait::async_trait;

use super::grouping::build_detalle;
use crate::domain::a010_paquete::{PaqueteAgregado, PaqueteCreateData};
use crate::shared::api::ApiResponse;
use crate::shared::error::ApiError;
use crate::shared::notice::Notice;

pub const CAMPOS_REQUERIDOS: &str = "Por favor, complete ambos campos";
pub const SIN_RESULTADOS: &str = "No se encontraron resultados para la búsqueda.";
pub const ERROR_CONSULTA: &str = "Ocurrió un error al realizar la consulta.";
pub const SIN_DATOS: &str = "No hay datos para guardar.";
pub const PAQUETE_GUARDADO: &str = "El paquete ha sido guardado exitosamente.";
pub const ERROR_GUARDADO: &str = "Ocurrió un error al procesar los datos.";

#[async_trait(?Send)]
pub trait PaquetesGateway {
    async fn paquete_detalle(&self, periodo: i32, paquete: i32)
        -> Result<Vec<PaqueteAgregado>, ApiError>;

    async fn delete_paquete(&self, paquete: i32) -> Result<ApiResponse, ApiError>;

    async fn create_paquete(&self, data: &PaqueteCreateData) -> Result<ApiResponse, ApiError>;
}

/// Package number and period as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaqueteBusqueda {
    pub paquete: String,
    pub periodo: String,
}

impl PaqueteBusqueda {
    /// Both fields present and numeric, as `(paquete, periodo)`
    pub fn parse(&self) -> Result<(i32, i32), Notice> {
        let paquete = self.paquete.trim().parse::<i32>();
        let periodo = self.periodo.trim().parse::<i32>();
        match (paquete, periodo) {
            (Ok(paquete), Ok(periodo)) => Ok((paquete, periodo)),
            _ => Err(Notice::error(CAMPOS_REQUERIDOS)),
        }
    }
}

/// Text of the overwrite confirmation dialog
pub fn confirmacion_sobreescritura(paquete: i32) -> String {
    format!("Se sobreescribirá la información del paquete {}.", paquete)
}

pub async fn buscar<G: PaquetesGateway + ?Sized>(
    gateway: &G,
    busqueda: &PaqueteBusqueda,
) -> Result<Vec<PaqueteAgregado>, Notice> {
    let (paquete, periodo) = busqueda.parse()?;
    match gateway.paquete_detalle(periodo, paquete).await {
        Ok(rows) if !rows.is_empty() => Ok(rows),
        Ok(_) | Err(ApiError::NotFound) => Err(Notice::error(SIN_RESULTADOS)),
        Err(e) => {
            log::error!("paquetes: consulta {}/{} fallida: {}", periodo, paquete, e);
            Err(Notice::error(ERROR_CONSULTA))
        }
    }
}

/// Replaces the stored package with the aggregated rows: delete first, then create.
/// Call only after the operator confirmed.
pub async fn guardar<G: PaquetesGateway + ?Sized>(
    gateway: &G,
    busqueda: &PaqueteBusqueda,
    resultados: &[PaqueteAgregado],
) -> Notice {
    let (paquete, periodo) = match busqueda.parse() {
        Ok(parsed) if !resultados.is_empty() => parsed,
        _ => return Notice::error(SIN_DATOS),
    };
    let body = PaqueteCreateData {
        paquete,
        periodo,
        detalle_productos: build_detalle(resultados),
    };

    let result = async {
        gateway.delete_paquete(paquete).await?;
        gateway.create_paquete(&body).await
    }
    .await;

    match result {
        Ok(_) => Notice::success(PAQUETE_GUARDADO),
        Err(e) => {
            log::error!("paquetes: guardado de {} fallido: {}", paquete, e);
            Notice::error(e.user_message(ERROR_GUARDADO))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeGateway {
        rows: Vec<PaqueteAgregado>,
        calls: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl PaquetesGateway for FakeGateway {
        async fn paquete_detalle(
            &self,
            periodo: i32,
            paquete: i32,
        ) -> Result<Vec<PaqueteAgregado>, ApiError> {
            self.calls.borrow_mut().push(format!("get {} {}", periodo, paquete));
            Ok(self.rows.clone())
        }

        async fn delete_paquete(&self, paquete: i32) -> Result<ApiResponse, ApiError> {
            self.calls.borrow_mut().push(format!("delete {}", paquete));
            Ok(ApiResponse::default())
        }

        async fn create_paquete(&self, data: &PaqueteCreateData) -> Result<ApiResponse, ApiError> {
            self.calls.borrow_mut().push(format!(
                "create {} {} {}",
                data.paquete,
                data.periodo,
                data.detalle_productos.len()
            ));
            Err(ApiError::from_status(500, Some("Paquete cerrado".into())))
        }
    }

    fn busqueda(paquete: &str, periodo: &str) -> PaqueteBusqueda {
        PaqueteBusqueda {
            paquete: paquete.into(),
            periodo: periodo.into(),
        }
    }

    #[tokio::test]
    async fn test_search_requires_both_fields() {
        let gateway = FakeGateway::default();
        assert_eq!(
            buscar(&gateway, &busqueda("12", "")).await,
            Err(Notice::error(CAMPOS_REQUERIDOS))
        );
        assert!(gateway.calls.borrow().is_empty());
        assert_eq!(
            buscar(&gateway, &busqueda("12", "2025")).await,
            Err(Notice::error(SIN_RESULTADOS))
        );
    }

    #[tokio::test]
    async fn test_save_deletes_then_creates() {
        let rows = vec![PaqueteAgregado {
            suela: 7,
            corrida: 94,
            pares: 3,
            ..Default::default()
        }];
        let gateway = FakeGateway::default();
        let notice = guardar(&gateway, &busqueda("12", "2025"), &rows).await;
        assert_eq!(notice, Notice::error("Paquete cerrado"));
        assert_eq!(
            *gateway.calls.borrow(),
            vec!["delete 12".to_string(), "create 12 2025 1".to_string()]
        );

        assert_eq!(
            guardar(&gateway, &busqueda("12", "2025"), &[]).await,
            Notice::error(SIN_DATOS)
        );
        assert_eq!(
            confirmacion_sobreescritura(12),
            "Se sobreescribirá la información del paquete 12."
        );
    }
}
