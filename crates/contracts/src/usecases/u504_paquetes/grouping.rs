use std::collections::BTreeMap;

use crate::domain::a010_paquete::{corrida_headers, PaqueteAgregado, PaqueteDetalle};

/// Rows of one corrida with its column headers and pair total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrupoCorrida {
    pub corrida: i32,
    pub headers: Vec<String>,
    pub productos: Vec<PaqueteAgregado>,
    pub total_pares: i32,
}

/// Groups package rows by corrida, in ascending corrida order.
/// Rows keep their original order inside each group.
pub fn agrupar_por_corrida(resultados: &[PaqueteAgregado]) -> Vec<GrupoCorrida> {
    let mut grupos: BTreeMap<i32, Vec<PaqueteAgregado>> = BTreeMap::new();
    for row in resultados {
        grupos.entry(row.corrida).or_default().push(row.clone());
    }
    grupos
        .into_iter()
        .map(|(corrida, productos)| GrupoCorrida {
            corrida,
            headers: corrida_headers(corrida),
            total_pares: productos.iter().map(|p| p.pares).sum(),
            productos,
        })
        .collect()
}

/// Totals per (suela, corrida) sent on save, in first-seen order
pub fn build_detalle(resultados: &[PaqueteAgregado]) -> Vec<PaqueteDetalle> {
    let mut detalle: Vec<PaqueteDetalle> = Vec::new();
    for row in resultados {
        let pos = match detalle
            .iter()
            .position(|d| d.suela == row.suela && d.corrida == row.corrida)
        {
            Some(pos) => pos,
            None => {
                detalle.push(PaqueteDetalle::new(row.suela, row.corrida));
                detalle.len() - 1
            }
        };
        detalle[pos].accumulate(row);
    }
    detalle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(estilo: i32, corrida: i32, suela: i32, cant1: i32, pares: i32) -> PaqueteAgregado {
        PaqueteAgregado {
            estilo,
            corrida,
            suela,
            cant1,
            pares,
            ..Default::default()
        }
    }

    #[test]
    fn test_grouping_is_ascending_by_corrida() {
        let rows = vec![
            row(1, 94, 7, 2, 2),
            row(2, 89, 7, 1, 1),
            row(3, 94, 8, 4, 4),
        ];
        let grupos = agrupar_por_corrida(&rows);
        assert_eq!(
            grupos.iter().map(|g| g.corrida).collect::<Vec<_>>(),
            vec![89, 94]
        );
        assert_eq!(grupos[1].total_pares, 6);
        assert_eq!(grupos[1].productos[0].estilo, 1);
        assert_eq!(grupos[1].headers[3], "#");
    }

    #[test]
    fn test_detalle_sums_by_suela_and_corrida() {
        let rows = vec![
            row(1, 94, 8, 2, 2),
            row(2, 89, 7, 1, 1),
            row(3, 94, 8, 4, 5),
        ];
        let detalle = build_detalle(&rows);
        assert_eq!(detalle.len(), 2);
        assert_eq!((detalle[0].suela, detalle[0].corrida), (8, 94));
        assert_eq!(detalle[0].cant1, 6);
        assert_eq!(detalle[0].pares, 7);
        assert_eq!((detalle[1].suela, detalle[1].corrida), (7, 89));
    }
}
