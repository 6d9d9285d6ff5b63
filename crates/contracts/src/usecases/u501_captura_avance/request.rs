use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::events::CapturaError;
use crate::domain::a009_lote::Departamento;

/// What the operator typed on the capture screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturaRequest {
    /// Scanned barcode; it carries the lot number
    pub codigo: String,
    pub departamento: Option<Departamento>,
    pub fecha: NaiveDate,
}

/// A request that passed local validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturaValida {
    pub codigo: String,
    pub lote: i32,
    pub departamento: Departamento,
    pub fecha: NaiveDate,
}

impl CapturaValida {
    pub fn year(&self) -> i32 {
        self.fecha.year()
    }
}

impl CapturaRequest {
    pub fn validate(&self) -> Result<CapturaValida, CapturaError> {
        let codigo = self.codigo.trim();
        if codigo.is_empty() {
            return Err(CapturaError::CodigoVacio);
        }
        let departamento = self.departamento.ok_or(CapturaError::SinProceso)?;
        let lote = codigo
            .parse::<i32>()
            .map_err(|_| CapturaError::CodigoNoNumerico)?;
        Ok(CapturaValida {
            codigo: codigo.to_string(),
            lote,
            departamento,
            fecha: self.fecha,
        })
    }
}

/// Body of `POST /inyeccion/registrar-avance`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarAvanceData {
    pub programa: i32,
    pub lote: String,
    /// Column receiving the timestamp, e.g. `fecha_inyeccion`
    pub avance: String,
    pub departamento_actual: String,
    pub departamento_siguiente: String,
    pub maquila: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_actual: Option<NaiveDate>,
}

impl RegistrarAvanceData {
    pub fn new(programa: i32, captura: &CapturaValida) -> Self {
        let depto = captura.departamento;
        Self {
            programa,
            lote: captura.codigo.clone(),
            avance: depto.avance_field(),
            departamento_actual: depto.value().to_string(),
            departamento_siguiente: depto.siguiente().to_string(),
            maquila: depto.maquila().to_string(),
            fecha_actual: Some(captura.fecha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(codigo: &str, departamento: Option<Departamento>) -> CapturaRequest {
        CapturaRequest {
            codigo: codigo.to_string(),
            departamento,
            fecha: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
        }
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(request(" ", None).validate(), Err(CapturaError::CodigoVacio));
        assert_eq!(request("1520", None).validate(), Err(CapturaError::SinProceso));
        assert_eq!(
            request("15A0", Some(Departamento::Adorno)).validate(),
            Err(CapturaError::CodigoNoNumerico)
        );
        let ok = request(" 1520 ", Some(Departamento::Adorno)).validate().unwrap();
        assert_eq!(ok.lote, 1520);
        assert_eq!(ok.codigo, "1520");
        assert_eq!(ok.year(), 2025);
    }

    #[test]
    fn test_registrar_avance_body() {
        let captura = request("1520", Some(Departamento::Inyeccion)).validate().unwrap();
        let body = serde_json::to_value(RegistrarAvanceData::new(77, &captura)).unwrap();
        assert_eq!(body["programa"], 77);
        assert_eq!(body["lote"], "1520");
        assert_eq!(body["avance"], "fecha_inyeccion");
        assert_eq!(body["departamentoActual"], "inyeccion");
        assert_eq!(body["departamentoSiguiente"], "ADORNO");
        assert_eq!(body["maquila"], "lninyec");
        assert_eq!(body["fechaActual"], "2025-01-03");
    }
}
