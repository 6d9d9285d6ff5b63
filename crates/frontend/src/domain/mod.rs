pub mod common;

pub mod a001_color;
pub mod a002_material;
pub mod a003_corrida;
pub mod a004_marca;
pub mod a005_sublinea;
pub mod a006_linea;
pub mod a007_combinacion;
pub mod a008_proveedor;
