use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::text;

/// Shown when the backend returned no description
pub const DESCRIPCION_NO_DISPONIBLE: &str = "No disponible";
/// Shown when the sole lookup failed
pub const SUELA_NO_ENCONTRADA: &str = "No encontrada";

/// `GET /suelas/productos/{estilo}/{corrida}/{combinacion}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductoInfo {
    #[serde(default)]
    pub producto: Option<i32>,
}

/// Combination available for a style and corrida
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinacionInfo {
    #[serde(rename = "Combinacion")]
    pub combinacion: i32,
    #[serde(rename = "CombinacionDescripcion", default, deserialize_with = "text")]
    pub descripcion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorridaInfo {
    #[serde(rename = "descripcionCorrida", default, deserialize_with = "text")]
    pub descripcion_corrida: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuelaInfo {
    #[serde(rename = "descripcionSuela", default, deserialize_with = "text")]
    pub descripcion_suela: String,
}

/// Body of `POST /suelas/combinaciones-prod`; user and timestamp are added server-side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinacionProdCreateData {
    #[serde(rename = "Producto")]
    pub producto: i32,
    #[serde(rename = "EstiloCliente")]
    pub estilo_cliente: String,
    #[serde(rename = "Suela")]
    pub suela: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_wire_names() {
        let c: CombinacionInfo =
            serde_json::from_str(r#"{"Combinacion": 3, "CombinacionDescripcion": "Negro/Blanco"}"#).unwrap();
        assert_eq!(c.combinacion, 3);

        let body = CombinacionProdCreateData {
            producto: 9001,
            estilo_cliente: "101".into(),
            suela: 7,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["EstiloCliente"], "101");
        assert_eq!(json["Producto"], 9001);

        let missing: ProductoInfo = serde_json::from_str(r#"{"producto": null}"#).unwrap();
        assert_eq!(missing.producto, None);
    }
}
