use serde::{Deserialize, Serialize};

/// Size columns of a package row (`Cant1`..`Cant7`)
pub const SIZE_COLUMNS: usize = 7;

/// Placeholder header for a size column the corrida does not use
pub const EMPTY_POINT: &str = "#";

/// Points (sizes) of each sole corrida, in column order; `None` is a skipped column
pub const CORRIDA_PUNTOS: &[(i32, &[Option<u16>])] = &[
    (88, &[Some(22), Some(23), Some(24), Some(25), Some(26), Some(27)]),
    (89, &[Some(12), Some(13), Some(14)]),
    (90, &[Some(15), Some(16), Some(17)]),
    (91, &[Some(18), Some(19), Some(20), Some(21)]),
    (92, &[Some(22), Some(23), Some(24)]),
    (93, &[Some(22), Some(23), Some(24), Some(25), Some(26)]),
    (94, &[Some(25), Some(26), Some(27), None, Some(28), Some(29), Some(30)]),
    (95, &[Some(21), Some(22), Some(23), Some(24), Some(25)]),
    (96, &[Some(30), Some(31), Some(32), Some(33)]),
    (97, &[Some(17), Some(18), Some(19), Some(20), Some(21)]),
    (98, &[Some(23), Some(24), Some(25), Some(26), Some(27)]),
];

/// Column headers for `corrida`, always [`SIZE_COLUMNS`] long
pub fn corrida_headers(corrida: i32) -> Vec<String> {
    let puntos = CORRIDA_PUNTOS
        .iter()
        .find(|(c, _)| *c == corrida)
        .map(|(_, p)| *p)
        .unwrap_or(&[]);
    let mut headers: Vec<String> = puntos
        .iter()
        .take(SIZE_COLUMNS)
        .map(|p| p.map(|n| n.to_string()).unwrap_or_else(|| EMPTY_POINT.to_string()))
        .collect();
    headers.resize(SIZE_COLUMNS, EMPTY_POINT.to_string());
    headers
}

/// Row of `GET /paquetes/{periodo}/{paquete}`: one style/combination with its sole
/// and quantities per size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaqueteAgregado {
    #[serde(default)]
    pub estilo: i32,
    #[serde(default)]
    pub combinacion: i32,
    #[serde(rename = "DescCombina", default)]
    pub desc_combina: String,
    #[serde(default)]
    pub corrida: i32,
    #[serde(default)]
    pub suela: i32,
    #[serde(rename = "DesSuela", default)]
    pub des_suela: String,
    #[serde(rename = "Cant1", default)]
    pub cant1: i32,
    #[serde(rename = "Cant2", default)]
    pub cant2: i32,
    #[serde(rename = "Cant3", default)]
    pub cant3: i32,
    #[serde(rename = "Cant4", default)]
    pub cant4: i32,
    #[serde(rename = "Cant5", default)]
    pub cant5: i32,
    #[serde(rename = "Cant6", default)]
    pub cant6: i32,
    #[serde(rename = "Cant7", default)]
    pub cant7: i32,
    #[serde(default)]
    pub pares: i32,
}

impl PaqueteAgregado {
    pub fn cantidades(&self) -> [i32; SIZE_COLUMNS] {
        [
            self.cant1, self.cant2, self.cant3, self.cant4, self.cant5, self.cant6, self.cant7,
        ]
    }
}

/// Per (suela, corrida) totals sent when saving a package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaqueteDetalle {
    pub suela: i32,
    pub corrida: i32,
    #[serde(rename = "Cant1")]
    pub cant1: i32,
    #[serde(rename = "Cant2")]
    pub cant2: i32,
    #[serde(rename = "Cant3")]
    pub cant3: i32,
    #[serde(rename = "Cant4")]
    pub cant4: i32,
    #[serde(rename = "Cant5")]
    pub cant5: i32,
    #[serde(rename = "Cant6")]
    pub cant6: i32,
    #[serde(rename = "Cant7")]
    pub cant7: i32,
    pub pares: i32,
}

impl PaqueteDetalle {
    pub fn new(suela: i32, corrida: i32) -> Self {
        Self {
            suela,
            corrida,
            ..Default::default()
        }
    }

    /// Adds the quantities and pairs of `row`
    pub fn accumulate(&mut self, row: &PaqueteAgregado) {
        self.cant1 += row.cant1;
        self.cant2 += row.cant2;
        self.cant3 += row.cant3;
        self.cant4 += row.cant4;
        self.cant5 += row.cant5;
        self.cant6 += row.cant6;
        self.cant7 += row.cant7;
        self.pares += row.pares;
    }
}

/// Body of `POST /paquetes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaqueteCreateData {
    pub paquete: i32,
    pub periodo: i32,
    #[serde(rename = "detalleProductos")]
    pub detalle_productos: Vec<PaqueteDetalle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_are_padded() {
        assert_eq!(corrida_headers(89), vec!["12", "13", "14", "#", "#", "#", "#"]);
        assert_eq!(corrida_headers(94), vec!["25", "26", "27", "#", "28", "29", "30"]);
        assert_eq!(corrida_headers(1), vec!["#"; SIZE_COLUMNS]);
    }

    #[test]
    fn test_wire_names() {
        let row: PaqueteAgregado = serde_json::from_str(
            r#"{"estilo":101,"combinacion":3,"DescCombina":"Negro","corrida":94,"suela":7,"DesSuela":"Tractor","Cant1":2,"Cant7":1,"pares":3}"#,
        )
        .unwrap();
        assert_eq!(row.cantidades(), [2, 0, 0, 0, 0, 0, 1]);

        let body = PaqueteCreateData {
            paquete: 12,
            periodo: 2025,
            detalle_productos: vec![PaqueteDetalle::new(7, 94)],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["detalleProductos"][0]["Cant3"], 0);
    }
}
