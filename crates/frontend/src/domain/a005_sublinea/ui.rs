use crate::domain::common::{catalog_list_view, CatalogUi, ColumnDef, FieldDef};
use contracts::domain::a005_sublinea::Sublinea;
use leptos::prelude::*;

impl CatalogUi for Sublinea {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef { header: "Sublínea", cell: |row| row.record.sublinea.to_string() },
            ColumnDef { header: "Descripción", cell: |row| row.record.descripcion.clone() },
        ]
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::number("sublinea", "Sublínea"),
            FieldDef::text("descripcion", "Descripción"),
        ]
    }

    fn page_id() -> &'static str {
        "a005_sublinea--list"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SublineaList() -> impl IntoView {
    catalog_list_view::<Sublinea>()
}
