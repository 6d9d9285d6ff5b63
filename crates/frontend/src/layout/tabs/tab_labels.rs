//! Tab titles. Catalogs take their plural name from contracts, workflows their display name.

use contracts::domain::a001_color::Color;
use contracts::domain::a002_material::Material;
use contracts::domain::a003_corrida::Corrida;
use contracts::domain::a004_marca::Marca;
use contracts::domain::a005_sublinea::Sublinea;
use contracts::domain::a006_linea::Linea;
use contracts::domain::a007_combinacion::Combinacion;
use contracts::domain::a008_proveedor::Proveedor;
use contracts::domain::common::CatalogRecord;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_captura_avance::CapturaAvance;
use contracts::usecases::u502_verificacion_lotes::VerificacionLotes;
use contracts::usecases::u504_paquetes::Paquetes;
use contracts::usecases::u505_asignacion_suelas::AsignacionSuelas;
use contracts::usecases::u506_codigos_barras::CodigosBarras;

/// Readable title for a tab key. Fallback: empty string.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── CPT catalogs ─────────────────────────────────────────────────
        "a001_color" => Color::list_name(),
        "a002_material" => Material::list_name(),
        "a003_corrida" => Corrida::list_name(),
        "a004_marca" => Marca::list_name(),
        "a005_sublinea" => Sublinea::list_name(),
        "a006_linea" => Linea::list_name(),
        "a007_combinacion" => Combinacion::list_name(),
        "a008_proveedor" => Proveedor::list_name(),

        // ── Workflows ────────────────────────────────────────────────────
        "u501_captura_avance" => CapturaAvance::display_name(),
        "u502_verificacion_lotes" => VerificacionLotes::display_name(),
        "u503_reporte_diario" => "Reporte diario",
        "u503_reporte_semanal" => "Reporte semanal",
        "u503_inventario_proceso" => "Inventario en proceso",
        "u504_paquetes" => Paquetes::display_name(),
        "u505_asignacion_suelas" => AsignacionSuelas::display_name(),
        "u506_codigos_barras" => CodigosBarras::display_name(),

        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_color"), "Colores");
        assert_eq!(tab_label_for_key("u503_reporte_semanal"), "Reporte semanal");
        assert_eq!(tab_label_for_key("unknown"), "");
    }
}
