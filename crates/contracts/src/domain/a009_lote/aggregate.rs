//! Production lots and the records the inyeccion endpoints return about them.
//!
//! Lots are created upstream when a production program is scheduled; this console only
//! appends department advances and reads their state back.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::shared::list::Searchable;
use crate::shared::serde_utils::{opt_text, text};

/// Shown in place of an empty snapshot field
pub const EMPTY_FIELD: &str = "---";

// ============================================================================
// Departamento
// ============================================================================

/// Production department a lot advances through, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Departamento {
    Recepcion,
    Inyeccion,
    Adorno,
}

impl Departamento {
    pub const ALL: [Departamento; 3] = [
        Departamento::Recepcion,
        Departamento::Inyeccion,
        Departamento::Adorno,
    ];

    /// Wire value used in paths and request bodies
    pub fn value(&self) -> &'static str {
        match self {
            Departamento::Recepcion => "recepcion",
            Departamento::Inyeccion => "inyeccion",
            Departamento::Adorno => "adorno",
        }
    }

    /// Display name, also the value the backend stores as current department
    pub fn nombre(&self) -> &'static str {
        match self {
            Departamento::Recepcion => "RECEPCION",
            Departamento::Inyeccion => "INYECCION",
            Departamento::Adorno => "ADORNO",
        }
    }

    pub fn maquila(&self) -> &'static str {
        match self {
            Departamento::Recepcion => "lnrecp",
            Departamento::Inyeccion => "lninyec",
            Departamento::Adorno => "lnadn",
        }
    }

    /// Department the lot moves to; `PT` (producto terminado) after adorno
    pub fn siguiente(&self) -> &'static str {
        match self {
            Departamento::Recepcion => "INYECCION",
            Departamento::Inyeccion => "ADORNO",
            Departamento::Adorno => "PT",
        }
    }

    /// Column that receives the advance timestamp
    pub fn avance_field(&self) -> String {
        format!("fecha_{}", self.value())
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.value().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Departamento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nombre())
    }
}

// ============================================================================
// Lot identity
// ============================================================================

/// `(lote, años)` composite key of a lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoteInfo {
    pub lote: i32,
    pub years: i32,
}

impl LoteInfo {
    pub fn new(lote: i32, years: i32) -> Self {
        Self { lote, years }
    }
}

impl Searchable for LoteInfo {
    fn key_text(&self) -> String {
        self.lote.to_string()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![Some(Cow::Owned(self.years.to_string()))]
    }
}

/// Body of the batch verification and update calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotesData {
    pub lotes: Vec<LoteInfo>,
}

// ============================================================================
// Program and eligibility
// ============================================================================

/// Production program a lot belongs to (`sp_getinfo_programa`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoPrograma {
    pub id_prog: i32,
    #[serde(default, deserialize_with = "text")]
    pub lote: String,
    #[serde(default)]
    pub years: i32,
    #[serde(default, deserialize_with = "text")]
    pub num_orden: String,
    #[serde(default, deserialize_with = "text")]
    pub cliente: String,
    #[serde(default, deserialize_with = "text")]
    pub fecha_entrega: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuedeAvanzarResponse {
    #[serde(rename = "PuedeAvanzar", default)]
    pub puede_avanzar: bool,
    #[serde(default, deserialize_with = "text")]
    pub mensaje: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdenDepartamentoResponse {
    #[serde(rename = "Orden")]
    pub orden: i32,
}

// ============================================================================
// Snapshot shown after a capture
// ============================================================================

/// Current state of a lot as returned by `GET /inyeccion/lote/{lote}/{anio}`.
///
/// Columns come back as numbers or strings depending on the stored procedure, so every
/// field is kept as optional text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoteSnapshot {
    #[serde(default, alias = "Lote", deserialize_with = "opt_text")]
    pub lote: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub programa: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub pedido: Option<String>,
    #[serde(default, alias = "Estilo", deserialize_with = "opt_text")]
    pub estilo: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub corrida: Option<String>,
    #[serde(default, alias = "Pares", deserialize_with = "opt_text")]
    pub pares: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub combinacion: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub recepcion: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub inyeccion: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub adorno: Option<String>,
}

impl LoteSnapshot {
    /// Advance timestamp recorded for `depto`
    pub fn avance(&self, depto: Departamento) -> Option<&str> {
        match depto {
            Departamento::Recepcion => self.recepcion.as_deref(),
            Departamento::Inyeccion => self.inyeccion.as_deref(),
            Departamento::Adorno => self.adorno.as_deref(),
        }
    }

    pub fn avance_or_placeholder(&self, depto: Departamento) -> &str {
        self.avance(depto).unwrap_or(EMPTY_FIELD)
    }

    pub fn is_empty(&self) -> bool {
        self.lote.is_none()
    }
}

// ============================================================================
// Lots of the day
// ============================================================================

/// Row of `sp_get_lotes_dia`: lots advanced on a date in a department
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoteDiaInfo {
    #[serde(default, deserialize_with = "text")]
    pub pedido: String,
    #[serde(default, deserialize_with = "text")]
    pub lote: String,
    #[serde(default, deserialize_with = "text")]
    pub modulo: String,
    #[serde(default, deserialize_with = "text")]
    pub estilo: String,
    #[serde(default, deserialize_with = "text")]
    pub linea: String,
    #[serde(default, deserialize_with = "text")]
    pub combinacion: String,
    #[serde(default, deserialize_with = "text")]
    pub corridacpt: String,
    #[serde(default)]
    pub npares: i64,
    #[serde(default, deserialize_with = "text")]
    pub avance_actual: String,
}

impl Searchable for LoteDiaInfo {
    fn key_text(&self) -> String {
        self.lote.clone()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![
            Some(Cow::Borrowed(self.pedido.as_str())),
            Some(Cow::Borrowed(self.modulo.as_str())),
            Some(Cow::Borrowed(self.estilo.as_str())),
            Some(Cow::Borrowed(self.linea.as_str())),
            Some(Cow::Borrowed(self.combinacion.as_str())),
            Some(Cow::Borrowed(self.corridacpt.as_str())),
            Some(Cow::Owned(self.npares.to_string())),
            Some(Cow::Borrowed(self.avance_actual.as_str())),
        ]
    }
}

// ============================================================================
// DETAFACT
// ============================================================================

/// Invoice detail row from `DETAFACT.DBF`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetaFactRecord {
    #[serde(rename = "TIP_FACT", default, deserialize_with = "text")]
    pub tip_fact: String,
    #[serde(rename = "NUM_FACT", default, deserialize_with = "text")]
    pub num_fact: String,
    #[serde(rename = "MES_FACT", default, deserialize_with = "text")]
    pub mes_fact: String,
    #[serde(rename = "LOT_FACT", default, deserialize_with = "text")]
    pub lot_fact: String,
    #[serde(rename = "EST_FACT", default, deserialize_with = "text")]
    pub est_fact: String,
    #[serde(rename = "COR_FACT", default, deserialize_with = "text")]
    pub cor_fact: String,
    #[serde(rename = "COM_FACT", default, deserialize_with = "text")]
    pub com_fact: String,
    #[serde(rename = "CAN_FACT", default)]
    pub can_fact: f64,
    #[serde(rename = "PRE_FACT", default)]
    pub pre_fact: f64,
    #[serde(rename = "IMP_FACT", default)]
    pub imp_fact: f64,
    #[serde(rename = "FEC_FACT", default, deserialize_with = "opt_text")]
    pub fec_fact: Option<String>,
    #[serde(rename = "FEC_FACT_FORMATEADA", default, deserialize_with = "opt_text")]
    pub fec_fact_formateada: Option<String>,
}

impl DetaFactRecord {
    /// Pre-formatted date when the backend sent one, else the ISO date as dd/mm/yyyy,
    /// else the raw value
    pub fn fecha_display(&self) -> String {
        if let Some(formatted) = &self.fec_fact_formateada {
            return formatted.clone();
        }
        let Some(raw) = self.fec_fact.as_deref() else {
            return String::new();
        };
        raw.get(..10)
            .and_then(|date| chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
            .map(|date| date.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

impl Searchable for DetaFactRecord {
    fn key_text(&self) -> String {
        self.num_fact.clone()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        vec![
            Some(Cow::Borrowed(self.tip_fact.as_str())),
            Some(Cow::Borrowed(self.mes_fact.as_str())),
            Some(Cow::Borrowed(self.lot_fact.as_str())),
            Some(Cow::Borrowed(self.est_fact.as_str())),
            Some(Cow::Borrowed(self.cor_fact.as_str())),
            Some(Cow::Borrowed(self.com_fact.as_str())),
            Some(Cow::Owned(self.can_fact.to_string())),
            Some(Cow::Owned(self.pre_fact.to_string())),
            Some(Cow::Owned(self.imp_fact.to_string())),
            Some(Cow::Owned(self.fecha_display())),
        ]
    }
}
