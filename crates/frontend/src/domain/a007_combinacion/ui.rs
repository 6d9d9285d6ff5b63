use crate::domain::common::{catalog_list_view, CatalogUi, ColumnDef, FieldDef};
use contracts::domain::a007_combinacion::{Combinacion, COLOR_FIELDS, MATERIAL_FIELDS};
use contracts::shared::list::Resolved;
use leptos::prelude::*;

/// "material / color" descriptions of slot `n`, empty when the slot is unused
fn pair(row: &Resolved<Combinacion>, n: usize) -> String {
    if row.record.material(n).is_none() && row.record.color(n).is_none() {
        return String::new();
    }
    format!(
        "{} / {}",
        row.description(MATERIAL_FIELDS[n - 1]),
        row.description(COLOR_FIELDS[n - 1])
    )
}

impl CatalogUi for Combinacion {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef { header: "Combinación", cell: |row| row.record.combinacion.to_string() },
            ColumnDef { header: "Par 1", cell: |row| pair(row, 1) },
            ColumnDef { header: "Par 2", cell: |row| pair(row, 2) },
            ColumnDef { header: "Par 3", cell: |row| pair(row, 3) },
            ColumnDef { header: "Par 4", cell: |row| pair(row, 4) },
            ColumnDef { header: "Par 5", cell: |row| pair(row, 5) },
            ColumnDef { header: "Par 6", cell: |row| pair(row, 6) },
        ]
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::number("combinacion", "Combinación"),
            FieldDef::select("material1", "Material 1", "materiales"),
            FieldDef::select("color1", "Color 1", "colores"),
            FieldDef::optional_select("material2", "Material 2", "materiales"),
            FieldDef::optional_select("color2", "Color 2", "colores"),
            FieldDef::optional_select("material3", "Material 3", "materiales"),
            FieldDef::optional_select("color3", "Color 3", "colores"),
            FieldDef::optional_select("material4", "Material 4", "materiales"),
            FieldDef::optional_select("color4", "Color 4", "colores"),
            FieldDef::optional_select("material5", "Material 5", "materiales"),
            FieldDef::optional_select("color5", "Color 5", "colores"),
            FieldDef::optional_select("material6", "Material 6", "materiales"),
            FieldDef::optional_select("color6", "Color 6", "colores"),
        ]
    }

    fn page_id() -> &'static str {
        "a007_combinacion--list"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CombinacionList() -> impl IntoView {
    catalog_list_view::<Combinacion>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::catalog_ui::FieldKind;

    #[test]
    fn test_form_covers_every_slot() {
        let fields = Combinacion::form_fields();
        for n in 0..6 {
            assert!(fields.iter().any(|f| f.name == MATERIAL_FIELDS[n]));
            assert!(fields.iter().any(|f| f.name == COLOR_FIELDS[n]));
        }
        let first = fields.iter().find(|f| f.name == "material1").unwrap();
        assert_eq!(first.kind, FieldKind::Select { lookup: "materiales" });
    }

    #[test]
    fn test_unused_slot_renders_empty() {
        let row = Resolved::plain(Combinacion {
            combinacion: 3,
            material1: 1,
            color1: 2,
            ..Default::default()
        });
        assert_eq!(pair(&row, 2), "");
        assert_eq!(pair(&row, 1), " / ");
    }
}
