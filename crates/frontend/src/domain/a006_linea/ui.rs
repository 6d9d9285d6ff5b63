use crate::domain::common::{catalog_list_view, CatalogUi, ColumnDef, FieldDef};
use contracts::domain::a006_linea::Linea;
use leptos::prelude::*;

impl CatalogUi for Linea {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef { header: "Línea", cell: |row| row.record.linea.to_string() },
            ColumnDef { header: "Descripción", cell: |row| row.record.descripcion.clone() },
            ColumnDef { header: "Marca", cell: |row| row.description("marca").to_string() },
            ColumnDef { header: "Sublínea", cell: |row| row.description("sublinea").to_string() },
        ]
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::number("linea", "Línea"),
            FieldDef::text("descripcion", "Descripción"),
            FieldDef::select("marca", "Marca", "marcas"),
            FieldDef::select("sublinea", "Sublínea", "sublineas"),
        ]
    }

    fn page_id() -> &'static str {
        "a006_linea--list"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn LineaList() -> impl IntoView {
    catalog_list_view::<Linea>()
}
