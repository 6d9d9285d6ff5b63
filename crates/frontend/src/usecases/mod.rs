pub mod u501_captura_avance;
pub mod u502_verificacion_lotes;
pub mod u503_reportes;
pub mod u504_paquetes;
pub mod u505_asignacion_suelas;
pub mod u506_codigos_barras;
