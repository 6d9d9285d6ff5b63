use crate::domain::common::{catalog_list_view, CatalogUi, ColumnDef, FieldDef};
use contracts::domain::a002_material::{Material, MAX_DESCRIPCION};
use leptos::prelude::*;

impl CatalogUi for Material {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef { header: "Material", cell: |row| row.record.material.to_string() },
            ColumnDef { header: "Descripción", cell: |row| row.record.descripcion.clone() },
        ]
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::number("material", "# Material"),
            FieldDef::text_max("descripcion", "Descripción", MAX_DESCRIPCION),
        ]
    }

    fn page_id() -> &'static str {
        "a002_material--list"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MaterialList() -> impl IntoView {
    catalog_list_view::<Material>()
}
