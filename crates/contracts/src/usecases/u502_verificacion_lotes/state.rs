use std::collections::BTreeSet;

use super::workflow::VerificacionResultado;
use crate::domain::a009_lote::LoteInfo;
use crate::shared::list::{filter_list, Pagination};

/// Rows per page of the verification table
pub const VERIFICACION_PAGE_SIZE: usize = 50;

/// Counters shown above the verification table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerificacionStats {
    pub total: usize,
    pub verificados: usize,
    pub pendientes: usize,
}

/// Unsold lots loaded for this session plus the ones already confirmed sold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificacionState {
    lotes: Vec<LoteInfo>,
    checked: Vec<LoteInfo>,
    search: String,
    pub pagination: Pagination,
}

impl Default for VerificacionState {
    fn default() -> Self {
        Self {
            lotes: Vec::new(),
            checked: Vec::new(),
            search: String::new(),
            pagination: Pagination::new(VERIFICACION_PAGE_SIZE),
        }
    }
}

impl VerificacionState {
    /// Replaces the loaded lots; the checked set and the page start over
    pub fn load(&mut self, lotes: Vec<LoteInfo>) {
        self.lotes = lotes;
        self.checked.clear();
        self.pagination.reset();
    }

    pub fn lotes(&self) -> &[LoteInfo] {
        &self.lotes
    }

    pub fn checked(&self) -> &[LoteInfo] {
        &self.checked
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.pagination.reset();
    }

    pub fn is_checked(&self, lote: &LoteInfo) -> bool {
        self.checked.contains(lote)
    }

    /// Loaded lots not yet confirmed sold, in load order
    pub fn pending(&self) -> Vec<LoteInfo> {
        let checked: BTreeSet<&LoteInfo> = self.checked.iter().collect();
        self.lotes
            .iter()
            .filter(|lote| !checked.contains(lote))
            .copied()
            .collect()
    }

    /// Adds confirmed lots to the checked set, skipping the ones already there.
    /// Returns how many were new.
    pub fn merge_checked(&mut self, confirmados: &[LoteInfo]) -> usize {
        let before = self.checked.len();
        for lote in confirmados {
            if !self.checked.contains(lote) {
                self.checked.push(*lote);
            }
        }
        self.checked.len() - before
    }

    /// Merges a finished verification into the current state. Returns how many lots were new.
    pub fn aplicar(&mut self, resultado: &VerificacionResultado) -> usize {
        match resultado {
            VerificacionResultado::Vendidos(vendidos) => self.merge_checked(vendidos),
            _ => 0,
        }
    }

    pub fn stats(&self) -> VerificacionStats {
        let pendientes = self.pending().len();
        VerificacionStats {
            total: self.lotes.len(),
            verificados: self.lotes.len() - pendientes,
            pendientes,
        }
    }

    /// Lots matching the search by lot number or year
    pub fn filtered(&self) -> Vec<LoteInfo> {
        filter_list(&self.lotes, &self.search)
    }

    pub fn page_rows(&self) -> Vec<LoteInfo> {
        let filtered = self.filtered();
        let mut pagination = self.pagination;
        pagination.clamp(filtered.len());
        pagination.slice(&filtered).to_vec()
    }

    /// The verify button is only enabled with lots loaded and no verification in flight
    pub fn can_verify(&self, verificando: bool) -> bool {
        !verificando && !self.lotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lotes() -> Vec<LoteInfo> {
        vec![
            LoteInfo::new(1, 2024),
            LoteInfo::new(2, 2024),
            LoteInfo::new(31, 2023),
        ]
    }

    #[test]
    fn test_load_resets_checked_and_page() {
        let mut state = VerificacionState::default();
        state.load(lotes());
        state.merge_checked(&[LoteInfo::new(1, 2024)]);
        state.pagination.current_page = 2;

        state.load(lotes());
        assert!(state.checked().is_empty());
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.pagination.items_per_page, VERIFICACION_PAGE_SIZE);
    }

    #[test]
    fn test_merge_checked_deduplicates() {
        let mut state = VerificacionState::default();
        state.load(lotes());
        assert_eq!(state.merge_checked(&[LoteInfo::new(1, 2024)]), 1);
        assert_eq!(
            state.merge_checked(&[LoteInfo::new(1, 2024), LoteInfo::new(2, 2024)]),
            1
        );
        assert_eq!(
            state.checked(),
            &[LoteInfo::new(1, 2024), LoteInfo::new(2, 2024)]
        );
        // same lot number from another year is a different lot
        assert!(!state.is_checked(&LoteInfo::new(1, 2023)));
    }

    #[test]
    fn test_stats_and_pending() {
        let mut state = VerificacionState::default();
        state.load(lotes());
        state.merge_checked(&[LoteInfo::new(2, 2024)]);
        assert_eq!(
            state.stats(),
            VerificacionStats {
                total: 3,
                verificados: 1,
                pendientes: 2
            }
        );
        assert_eq!(
            state.pending(),
            vec![LoteInfo::new(1, 2024), LoteInfo::new(31, 2023)]
        );
    }

    #[test]
    fn test_search_by_lot_or_year() {
        let mut state = VerificacionState::default();
        state.load(lotes());
        state.set_search("2023");
        assert_eq!(state.filtered(), vec![LoteInfo::new(31, 2023)]);
        state.set_search("1");
        assert_eq!(state.filtered().len(), 2);
        state.set_search("");
        assert_eq!(state.filtered(), lotes());
    }

    #[test]
    fn test_aplicar_merges_into_reloaded_state() {
        let mut state = VerificacionState::default();
        state.load(lotes());
        // a reload landed while the verification was running
        state.load(vec![LoteInfo::new(2, 2024), LoteInfo::new(40, 2025)]);

        let nuevos = state.aplicar(&VerificacionResultado::Vendidos(vec![LoteInfo::new(2, 2024)]));
        assert_eq!(nuevos, 1);
        assert_eq!(state.lotes(), &[LoteInfo::new(2, 2024), LoteInfo::new(40, 2025)]);
        assert_eq!(state.pending(), vec![LoteInfo::new(40, 2025)]);
        assert_eq!(state.aplicar(&VerificacionResultado::NingunoVendido), 0);
    }

    #[test]
    fn test_can_verify() {
        let mut state = VerificacionState::default();
        assert!(!state.can_verify(false));
        state.load(lotes());
        assert!(state.can_verify(false));
        assert!(!state.can_verify(true));
    }
}
