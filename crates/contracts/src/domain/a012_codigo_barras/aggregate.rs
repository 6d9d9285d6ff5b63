use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::text;

/// Barcode of one size of a product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodigoInfo {
    #[serde(default, deserialize_with = "text")]
    pub codigo: String,
    #[serde(default)]
    pub punto: i32,
    #[serde(default, deserialize_with = "text")]
    pub talla: String,
}

/// `GET /codigos-barras/{producto}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodigosBarrasResponse {
    #[serde(default)]
    pub codigos: Vec<CodigoInfo>,
}

/// One line written to the legacy DBF file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroDbf {
    pub estilo: String,
    pub combinacion: String,
    pub descripcion_combinacion: String,
    pub corrida: String,
    pub descripcion_corrida: String,
    /// Size label (`talla`)
    pub punto: String,
    pub codigo_barras: String,
}

/// Body of `POST /codigos-barras/guardar-dbf`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardarDbfRequest {
    pub registros: Vec<RegistroDbf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registro_camel_case() {
        let json = serde_json::to_value(RegistroDbf {
            codigo_barras: "7501234567890".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["codigoBarras"], "7501234567890");
        assert!(json.get("descripcionCombinacion").is_some());
    }
}
