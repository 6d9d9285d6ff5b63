/// Identification of a workflow for menus, tab labels and logs
pub trait UseCaseMetadata {
    /// Index (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "captura_avance")
    fn usecase_name() -> &'static str;

    /// Display name for the UI (e.g. "Captura de avances")
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name like "u501_captura_avance"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
