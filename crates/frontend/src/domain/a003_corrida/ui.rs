use crate::domain::common::{catalog_list_view, CatalogUi, ColumnDef, FieldDef};
use contracts::domain::a003_corrida::Corrida;
use leptos::prelude::*;

impl CatalogUi for Corrida {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef { header: "Corrida", cell: |row| row.record.corrida.to_string() },
            ColumnDef { header: "Descripción", cell: |row| row.record.descripcion.clone() },
            ColumnDef { header: "Rango", cell: |row| row.record.rango() },
        ]
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::number("corrida", "# Corrida"),
            FieldDef::number("puntoInicial", "Punto Inicial"),
            FieldDef::number("puntoFinal", "Punto Final"),
            FieldDef::text("descripcion", "Descripción"),
        ]
    }

    fn page_id() -> &'static str {
        "a003_corrida--list"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CorridaList() -> impl IntoView {
    catalog_list_view::<Corrida>()
}
