use crate::domain::common::{catalog_list_view, CatalogUi, ColumnDef, FieldDef};
use crate::domain::common::catalog_ui::FieldKind;
use contracts::domain::a008_proveedor::Proveedor;
use leptos::prelude::*;

impl CatalogUi for Proveedor {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef { header: "Proveedor", cell: |row| row.record.proveedor.to_string() },
            ColumnDef { header: "Nombre", cell: |row| row.record.nombre.clone() },
            ColumnDef { header: "RFC", cell: |row| row.record.rfc.clone() },
            ColumnDef { header: "Ciudad", cell: |row| row.record.ciudad.clone() },
            ColumnDef { header: "Teléfonos", cell: |row| row.record.telefonos.clone() },
            ColumnDef { header: "Contacto", cell: |row| row.record.contacto.clone() },
            ColumnDef {
                header: "Estatus",
                cell: |row| {
                    if row.record.is_activo() { "Activo" } else { "Inactivo" }.to_string()
                },
            },
        ]
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::number("proveedor", "# Proveedor"),
            FieldDef::text("nombre", "Nombre"),
            FieldDef::text("rfc", "RFC"),
            FieldDef::text("direccion", "Dirección"),
            FieldDef::text("ciudad", "Ciudad"),
            FieldDef::text("cp", "C.P."),
            FieldDef::text("telefonos", "Teléfonos"),
            FieldDef::text("fax", "Fax"),
            FieldDef::text("correoE", "Correo electrónico"),
            FieldDef::text("contacto", "Contacto"),
            FieldDef { name: "estatus", label: "Estatus", kind: FieldKind::Estatus },
        ]
    }

    fn page_id() -> &'static str {
        "a008_proveedor--list"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProveedorList() -> impl IntoView {
    catalog_list_view::<Proveedor>()
}
