//! Tab content registry: the one place mapping a tab key to its view.

use crate::domain::a001_color::ui::ColorList;
use crate::domain::a002_material::ui::MaterialList;
use crate::domain::a003_corrida::ui::CorridaList;
use crate::domain::a004_marca::ui::MarcaList;
use crate::domain::a005_sublinea::ui::SublineaList;
use crate::domain::a006_linea::ui::LineaList;
use crate::domain::a007_combinacion::ui::CombinacionList;
use crate::domain::a008_proveedor::ui::ProveedorList;
use crate::usecases::u501_captura_avance::view::CapturaAvanceView;
use crate::usecases::u502_verificacion_lotes::view::VerificacionLotesView;
use crate::usecases::u503_reportes::view::{
    InventarioProcesoView, ReporteDiarioView, ReporteSemanalView,
};
use crate::usecases::u504_paquetes::view::PaquetesView;
use crate::usecases::u505_asignacion_suelas::view::AsignacionSuelasView;
use crate::usecases::u506_codigos_barras::view::CodigosBarrasView;
use leptos::logging::log;
use leptos::prelude::*;

/// Content of the tab with `key`, or a placeholder for unknown keys
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // CPT catalogs (a001-a008)
        // ═══════════════════════════════════════════════════════════════════
        "a001_color" => view! { <ColorList /> }.into_any(),
        "a002_material" => view! { <MaterialList /> }.into_any(),
        "a003_corrida" => view! { <CorridaList /> }.into_any(),
        "a004_marca" => view! { <MarcaList /> }.into_any(),
        "a005_sublinea" => view! { <SublineaList /> }.into_any(),
        "a006_linea" => view! { <LineaList /> }.into_any(),
        "a007_combinacion" => view! { <CombinacionList /> }.into_any(),
        "a008_proveedor" => view! { <ProveedorList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Workflows (u501-u506)
        // ═══════════════════════════════════════════════════════════════════
        "u501_captura_avance" => view! { <CapturaAvanceView /> }.into_any(),
        "u502_verificacion_lotes" => view! { <VerificacionLotesView /> }.into_any(),
        "u503_reporte_diario" => view! { <ReporteDiarioView /> }.into_any(),
        "u503_reporte_semanal" => view! { <ReporteSemanalView /> }.into_any(),
        "u503_inventario_proceso" => view! { <InventarioProcesoView /> }.into_any(),
        "u504_paquetes" => view! { <PaquetesView /> }.into_any(),
        "u505_asignacion_suelas" => view! { <AsignacionSuelasView /> }.into_any(),
        "u506_codigos_barras" => view! { <CodigosBarrasView /> }.into_any(),

        _ => {
            log!("⚠️ Unknown tab key: {}", key);
            view! { <div class="placeholder">{"Módulo no disponible"}</div> }.into_any()
        }
    }
}
