use crate::domain::common::{catalog_list_view, CatalogUi, ColumnDef, FieldDef};
use contracts::domain::a004_marca::Marca;
use leptos::prelude::*;

impl CatalogUi for Marca {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef { header: "Marca", cell: |row| row.record.marca.to_string() },
            ColumnDef { header: "Descripción", cell: |row| row.record.descripcion.clone() },
        ]
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::number("marca", "Marca"),
            FieldDef::text("descripcion", "Descripción"),
        ]
    }

    fn page_id() -> &'static str {
        "a004_marca--list"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MarcaList() -> impl IntoView {
    catalog_list_view::<Marca>()
}
