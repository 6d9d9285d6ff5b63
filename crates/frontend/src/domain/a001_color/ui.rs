use crate::domain::common::{catalog_list_view, CatalogUi, ColumnDef, FieldDef};
use contracts::domain::a001_color::Color;
use leptos::prelude::*;

impl CatalogUi for Color {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef { header: "Color", cell: |row| row.record.color.to_string() },
            ColumnDef { header: "Descripción", cell: |row| row.record.descripcion.clone() },
        ]
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::number("color", "Color"),
            FieldDef::text("descripcion", "Descripción"),
        ]
    }

    fn page_id() -> &'static str {
        "a001_color--list"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ColorList() -> impl IntoView {
    catalog_list_view::<Color>()
}
