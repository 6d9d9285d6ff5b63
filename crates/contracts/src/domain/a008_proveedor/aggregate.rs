use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::domain::common::CatalogRecord;
use crate::shared::list::{CreatePolicy, ForeignKeys, Keyed, Searchable};
use crate::shared::serde_utils::text;
use crate::shared::validation::{require_positive, require_text, FieldErrors, Validate};

pub const ESTATUS_ACTIVO: &str = "A";
pub const ESTATUS_INACTIVO: &str = "I";

fn default_estatus() -> String {
    ESTATUS_ACTIVO.to_string()
}

/// Proveedor de materiales
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proveedor {
    #[serde(default)]
    pub proveedor: i32,
    #[serde(default, deserialize_with = "text")]
    pub nombre: String,
    #[serde(default, deserialize_with = "text")]
    pub rfc: String,
    #[serde(default, deserialize_with = "text")]
    pub direccion: String,
    #[serde(default, deserialize_with = "text")]
    pub ciudad: String,
    #[serde(default, deserialize_with = "text")]
    pub cp: String,
    #[serde(default, deserialize_with = "text")]
    pub telefonos: String,
    #[serde(default, deserialize_with = "text")]
    pub fax: String,
    #[serde(rename = "correoE", default, deserialize_with = "text")]
    pub correo_e: String,
    #[serde(default, deserialize_with = "text")]
    pub contacto: String,
    #[serde(default = "default_estatus")]
    pub estatus: String,
}

impl Default for Proveedor {
    fn default() -> Self {
        Self {
            proveedor: 0,
            nombre: String::new(),
            rfc: String::new(),
            direccion: String::new(),
            ciudad: String::new(),
            cp: String::new(),
            telefonos: String::new(),
            fax: String::new(),
            correo_e: String::new(),
            contacto: String::new(),
            estatus: default_estatus(),
        }
    }
}

impl Proveedor {
    pub fn is_activo(&self) -> bool {
        self.estatus.trim().eq_ignore_ascii_case(ESTATUS_ACTIVO)
    }
}

impl Keyed for Proveedor {
    fn key(&self) -> i32 {
        self.proveedor
    }
}

impl Searchable for Proveedor {
    fn key_text(&self) -> String {
        self.proveedor.to_string()
    }

    fn search_fields(&self) -> Vec<Option<Cow<'_, str>>> {
        [
            &self.nombre,
            &self.rfc,
            &self.direccion,
            &self.ciudad,
            &self.cp,
            &self.telefonos,
            &self.fax,
            &self.correo_e,
            &self.contacto,
        ]
        .into_iter()
        .map(|field| Some(Cow::Borrowed(field.as_str())))
        .collect()
    }
}

impl ForeignKeys for Proveedor {}

impl Validate for Proveedor {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "proveedor", self.proveedor, "El # de Proveedor es requerido.");
        require_text(&mut errors, "nombre", &self.nombre, "El Nombre es requerido.");
        errors
    }
}

impl CatalogRecord for Proveedor {
    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "proveedores"
    }

    fn key_field() -> &'static str {
        "proveedor"
    }

    fn element_name() -> &'static str {
        "Proveedor"
    }

    fn list_name() -> &'static str {
        "Proveedores"
    }

    fn element_with_article() -> &'static str {
        "el proveedor"
    }

    fn create_policy() -> CreatePolicy {
        CreatePolicy::SortByKey
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_and_status_default() {
        let p: Proveedor =
            serde_json::from_str(r#"{"proveedor":12,"nombre":"Curtidos León","correoE":null}"#).unwrap();
        assert_eq!(p.estatus, "A");
        assert!(p.is_activo());
        assert!(p.correo_e.is_empty());
        assert!(p.validate().is_empty());
    }

    #[test]
    fn test_search_by_contact_fields() {
        let p = Proveedor {
            proveedor: 12,
            nombre: "Curtidos León".into(),
            correo_e: "ventas@curtidos.mx".into(),
            ..Default::default()
        };
        assert!(p.matches_filter("curtidos.mx"));
        assert!(p.matches_filter("león"));
    }

    #[test]
    fn test_serializes_wire_names() {
        let json = serde_json::to_value(Proveedor::default()).unwrap();
        assert!(json.get("correoE").is_some());
        assert_eq!(json["estatus"], "A");
    }
}
