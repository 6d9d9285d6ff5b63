pub mod common;

// Catalogs edited through the generic list screen
pub mod a001_color;
pub mod a002_material;
pub mod a003_corrida;
pub mod a004_marca;
pub mod a005_sublinea;
pub mod a006_linea;
pub mod a007_combinacion;
pub mod a008_proveedor;

// Reference records used by the workflows
pub mod a009_lote;
pub mod a010_paquete;
pub mod a011_suela;
pub mod a012_codigo_barras;
