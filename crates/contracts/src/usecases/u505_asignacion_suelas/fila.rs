//! Editable product row shared by the sole and barcode grids.
//!
//! A row starts blank; leaving estilo/corrida loads the corrida description and the
//! combinations of that style, and choosing a combination resolves the product id.

use async_trait::async_trait;

use crate::domain::a011_suela::{
    CombinacionInfo, CorridaInfo, ProductoInfo, DESCRIPCION_NO_DISPONIBLE,
};
use crate::shared::error::ApiError;
use crate::shared::notice::Notice;

pub const ERROR_DATOS_CORRIDA: &str = "Error al obtener datos";
pub const PRODUCTO_NO_ENCONTRADO: &str = "Producto no encontrado.";

/// Lookups behind a product row
#[async_trait(?Send)]
pub trait ProductoGateway {
    async fn corrida_info(&self, corrida: i32) -> Result<CorridaInfo, ApiError>;

    async fn combinaciones(&self, estilo: i32, corrida: i32)
        -> Result<Vec<CombinacionInfo>, ApiError>;

    async fn producto(
        &self,
        estilo: i32,
        corrida: i32,
        combinacion: i32,
    ) -> Result<ProductoInfo, ApiError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductoFila {
    pub estilo: String,
    pub corrida: String,
    pub descripcion_corrida: String,
    pub combinacion: Option<i32>,
    pub combinacion_descripcion: String,
    pub producto: Option<i32>,
    pub combinaciones: Vec<CombinacionInfo>,
}

impl ProductoFila {
    /// `(estilo, corrida)` once both are typed and numeric
    pub fn estilo_corrida(&self) -> Option<(i32, i32)> {
        let estilo = self.estilo.trim().parse().ok()?;
        let corrida = self.corrida.trim().parse().ok()?;
        Some((estilo, corrida))
    }

    /// Estilo, corrida and combinacion are filled in
    pub fn is_identified(&self) -> bool {
        !self.estilo.trim().is_empty() && !self.corrida.trim().is_empty() && self.combinacion.is_some()
    }

    /// Forgets the combination and everything derived from it
    pub fn reset_combinacion(&mut self) {
        self.combinacion = None;
        self.combinacion_descripcion.clear();
        self.producto = None;
    }

    /// Selects `combinacion` and copies its description from the loaded options
    pub fn select_combinacion(&mut self, combinacion: i32) {
        self.combinacion = Some(combinacion);
        self.combinacion_descripcion = self
            .combinaciones
            .iter()
            .find(|c| c.combinacion == combinacion)
            .map(|c| c.descripcion.clone())
            .unwrap_or_default();
        self.producto = None;
    }
}

/// Loads the corrida description and the combinations after estilo/corrida were edited.
/// Does nothing until both fields are numeric.
pub async fn cargar_corrida<G: ProductoGateway + ?Sized>(
    gateway: &G,
    fila: &mut ProductoFila,
) -> Result<(), Notice> {
    let Some((estilo, corrida)) = fila.estilo_corrida() else {
        return Ok(());
    };
    let result = async {
        let info = gateway.corrida_info(corrida).await?;
        let combinaciones = gateway.combinaciones(estilo, corrida).await?;
        Ok::<_, ApiError>((info, combinaciones))
    }
    .await;

    match result {
        Ok((info, combinaciones)) => {
            fila.descripcion_corrida = if info.descripcion_corrida.trim().is_empty() {
                DESCRIPCION_NO_DISPONIBLE.to_string()
            } else {
                info.descripcion_corrida
            };
            fila.combinaciones = combinaciones;
            fila.reset_combinacion();
            Ok(())
        }
        Err(e) => {
            log::warn!("fila: corrida {} de estilo {}: {}", corrida, estilo, e);
            Err(Notice::error(e.user_message(ERROR_DATOS_CORRIDA)))
        }
    }
}

/// Selects a combination and resolves the product id it maps to
pub async fn resolver_producto<G: ProductoGateway + ?Sized>(
    gateway: &G,
    fila: &mut ProductoFila,
    combinacion: i32,
) -> Result<i32, Notice> {
    fila.select_combinacion(combinacion);
    let Some((estilo, corrida)) = fila.estilo_corrida() else {
        return Err(Notice::error(PRODUCTO_NO_ENCONTRADO));
    };
    match gateway.producto(estilo, corrida, combinacion).await {
        Ok(ProductoInfo {
            producto: Some(producto),
        }) => {
            fila.producto = Some(producto);
            Ok(producto)
        }
        Ok(_) | Err(ApiError::NotFound) => Err(Notice::error(PRODUCTO_NO_ENCONTRADO)),
        Err(e) => {
            log::warn!("fila: producto {}/{}/{}: {}", estilo, corrida, combinacion, e);
            Err(Notice::error(e.user_message(PRODUCTO_NO_ENCONTRADO)))
        }
    }
}
