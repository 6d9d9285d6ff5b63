//! Explicit state of a catalog list screen and the pure reducer driving it.
//!
//! The screen owns one [`ListState`] and feeds it [`ListAction`]s. Every action returns a
//! [`Transition`]: the next state plus the side effects the screen must run (submit a
//! draft to the backend, show a notice). Remote results come back as further actions, so
//! the collection is only touched after the backend has confirmed a save.

use std::sync::Arc;

use super::lookup::{LookupResolver, Resolved};
use super::pagination::{Pagination, DEFAULT_PAGE_SIZE};
use super::search::{normalize_filter, Searchable};
use super::sync::{apply_mutation, Mutation};
use crate::domain::common::CatalogRecord;
use crate::shared::error::ApiError;
use crate::shared::notice::Notice;
use crate::shared::validation::FieldErrors;

pub const CREATED_MESSAGE: &str = "Registro agregado!";
pub const UPDATED_MESSAGE: &str = "Registro editado!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the record with this key; the key itself is locked
    Edit(i32),
}

/// Draft of the record being created or edited
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<T> {
    pub mode: FormMode,
    pub draft: T,
    pub errors: FieldErrors,
    /// A submission is in flight; further submits are ignored
    pub saving: bool,
    pub server_error: Option<String>,
}

impl<T> FormState<T> {
    fn new(mode: FormMode, draft: T) -> Self {
        Self {
            mode,
            draft,
            errors: FieldErrors::new(),
            saving: false,
            server_error: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }
}

/// What the screen has to send to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<T> {
    pub mode: FormMode,
    pub draft: T,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEffect<T> {
    Submit(Submission<T>),
    Notify(Notice),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<T> {
    LoadStarted,
    Loaded { items: Vec<T>, resolver: LookupResolver },
    LoadFailed(String),
    SearchChanged(String),
    PageRequested(usize),
    PageSizeChanged(usize),
    OpenCreate,
    OpenEdit(i32),
    /// `field` names the input that produced `draft`
    DraftEdited { field: &'static str, draft: T },
    CloseForm,
    SubmitRequested,
    SaveSucceeded { mode: FormMode, record: T },
    SaveFailed(ApiError),
}

pub struct Transition<T> {
    pub state: ListState<T>,
    pub effects: Vec<ListEffect<T>>,
}

/// State of one catalog list screen
#[derive(Debug, Clone)]
pub struct ListState<T> {
    items: Vec<T>,
    resolver: LookupResolver,
    search: String,
    /// Joined and filtered projection of `items`; rebuilt only when the collection,
    /// the lookups or the search term change
    view: Arc<Vec<Resolved<T>>>,
    pub pagination: Pagination,
    pub loading: bool,
    pub load_error: Option<String>,
    pub form: Option<FormState<T>>,
    /// Bumped on every change of the collection
    pub revision: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            resolver: LookupResolver::default(),
            search: String::new(),
            view: Arc::new(Vec::new()),
            pagination: Pagination::new(DEFAULT_PAGE_SIZE),
            loading: false,
            load_error: None,
            form: None,
            revision: 0,
        }
    }
}

impl<T: CatalogRecord> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn resolver(&self) -> &LookupResolver {
        &self.resolver
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Filtered rows, shared so renders can hold on to them cheaply
    pub fn filtered_rows(&self) -> Arc<Vec<Resolved<T>>> {
        Arc::clone(&self.view)
    }

    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    pub fn page_rows(&self) -> Vec<Resolved<T>> {
        self.pagination.slice(&self.view).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.filtered_count())
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        self.pagination.page_numbers(self.filtered_count())
    }

    fn rebuild_view(&mut self) {
        let rows = self.resolver.resolve_all(&self.items);
        let rows = match normalize_filter(&self.search) {
            None => rows,
            Some(needle) => rows
                .into_iter()
                .filter(|row| row.matches_filter(&needle))
                .collect(),
        };
        self.view = Arc::new(rows);
    }

    pub fn reduce(mut self, action: ListAction<T>) -> Transition<T> {
        let mut effects = Vec::new();

        match action {
            ListAction::LoadStarted => {
                self.loading = true;
                self.load_error = None;
            }
            ListAction::Loaded { items, resolver } => {
                log::debug!("{}: loaded {} records", T::full_name(), items.len());
                self.items = items;
                self.resolver = resolver;
                self.loading = false;
                self.revision += 1;
                self.pagination.reset();
                self.rebuild_view();
            }
            ListAction::LoadFailed(message) => {
                self.loading = false;
                self.load_error = Some(message.clone());
                effects.push(ListEffect::Notify(Notice::error(message)));
            }
            ListAction::SearchChanged(term) => {
                if term != self.search {
                    self.search = term;
                    self.pagination.reset();
                    self.rebuild_view();
                }
            }
            ListAction::PageRequested(page) => {
                let total = self.filtered_count();
                self.pagination.go_to(page, total);
            }
            ListAction::PageSizeChanged(size) => {
                self.pagination.set_items_per_page(size);
            }
            ListAction::OpenCreate => {
                self.form = Some(FormState::new(FormMode::Create, T::default()));
            }
            ListAction::OpenEdit(key) => {
                if let Some(record) = self.items.iter().find(|r| r.key() == key) {
                    self.form = Some(FormState::new(FormMode::Edit(key), record.clone()));
                }
            }
            ListAction::DraftEdited { field, draft } => {
                if let Some(form) = self.form.as_mut() {
                    let key_locked = matches!(form.mode, FormMode::Edit(key) if key != draft.key());
                    if !key_locked {
                        form.draft = draft;
                        form.errors.clear(field);
                        form.server_error = None;
                    }
                }
            }
            ListAction::CloseForm => {
                self.form = None;
            }
            ListAction::SubmitRequested => {
                if let Some(form) = self.form.as_mut() {
                    if !form.saving {
                        let errors = form.draft.validate();
                        if errors.is_empty() {
                            form.errors = errors;
                            form.saving = true;
                            form.server_error = None;
                            effects.push(ListEffect::Submit(Submission {
                                mode: form.mode,
                                draft: form.draft.clone(),
                            }));
                        } else {
                            form.errors = errors;
                        }
                    }
                }
            }
            ListAction::SaveSucceeded { mode, record } => {
                let mutation = match mode {
                    FormMode::Create => Mutation::Created(record),
                    FormMode::Edit(_) => Mutation::Updated(record),
                };
                if apply_mutation(&mut self.items, mutation, T::create_policy()) {
                    self.revision += 1;
                    self.rebuild_view();
                }
                let total = self.filtered_count();
                self.pagination.clamp(total);
                self.form = None;
                let message = match mode {
                    FormMode::Create => CREATED_MESSAGE,
                    FormMode::Edit(_) => UPDATED_MESSAGE,
                };
                effects.push(ListEffect::Notify(Notice::success(message)));
            }
            ListAction::SaveFailed(error) => {
                log::warn!("{}: save failed: {}", T::full_name(), error);
                let base = format!("Error al guardar {}.", T::element_with_article());
                let message = match &error {
                    ApiError::Server { message: Some(detail), .. } => format!("{} {}", base, detail),
                    _ => base,
                };
                if let Some(form) = self.form.as_mut() {
                    form.saving = false;
                    form.server_error = Some(message.clone());
                }
                effects.push(ListEffect::Notify(Notice::error(message)));
            }
        }

        Transition { state: self, effects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_color::Color;
    use crate::domain::common::saved_record;
    use crate::shared::notice::NoticeKind;

    fn color(key: i32, descripcion: &str) -> Color {
        Color {
            color: key,
            descripcion: descripcion.to_string(),
        }
    }

    fn run(state: ListState<Color>, actions: Vec<ListAction<Color>>) -> (ListState<Color>, Vec<ListEffect<Color>>) {
        let mut state = state;
        let mut effects = Vec::new();
        for action in actions {
            let t = state.reduce(action);
            state = t.state;
            effects.extend(t.effects);
        }
        (state, effects)
    }

    fn loaded(items: Vec<Color>) -> ListState<Color> {
        run(
            ListState::new(10),
            vec![ListAction::Loaded { items, resolver: LookupResolver::default() }],
        )
        .0
    }

    #[test]
    fn test_create_then_edit_same_key() {
        let (state, effects) = run(
            loaded(vec![]),
            vec![
                ListAction::OpenCreate,
                ListAction::DraftEdited { field: "color", draft: color(5, "Rojo") },
                ListAction::SubmitRequested,
            ],
        );
        let submission = match &effects[..] {
            [ListEffect::Submit(s)] => s.clone(),
            other => panic!("unexpected effects {:?}", other),
        };
        assert_eq!(submission.mode, FormMode::Create);

        let (state, effects) = run(
            state,
            vec![ListAction::SaveSucceeded { mode: submission.mode, record: submission.draft }],
        );
        assert_eq!(state.items(), &[color(5, "Rojo")]);
        assert!(state.form.is_none());
        assert_eq!(effects, vec![ListEffect::Notify(Notice::success(CREATED_MESSAGE))]);

        let (state, _) = run(
            state,
            vec![
                ListAction::OpenEdit(5),
                ListAction::DraftEdited { field: "descripcion", draft: color(5, "Azul") },
                ListAction::SubmitRequested,
                ListAction::SaveSucceeded { mode: FormMode::Edit(5), record: color(5, "Azul") },
            ],
        );
        assert_eq!(state.items(), &[color(5, "Azul")]);
    }

    #[test]
    fn test_saved_record_from_server_wins_over_draft() {
        let (state, effects) = run(
            loaded(vec![color(2, "Negro")]),
            vec![
                ListAction::OpenCreate,
                ListAction::DraftEdited { field: "descripcion", draft: color(9, " rojo ") },
                ListAction::SubmitRequested,
            ],
        );
        let submission = match &effects[..] {
            [ListEffect::Submit(s)] => s.clone(),
            other => panic!("unexpected effects {:?}", other),
        };

        let saved = saved_record(r#"{"color": 9, "descripcion": "ROJO"}"#, &submission.draft).unwrap();
        let (state, _) = run(
            state,
            vec![ListAction::SaveSucceeded { mode: submission.mode, record: saved }],
        );
        assert_eq!(state.items(), &[color(2, "Negro"), color(9, "ROJO")]);
        assert_eq!(state.filtered_rows()[1].record.descripcion, "ROJO");
    }

    #[test]
    fn test_key_is_locked_while_editing() {
        let (state, _) = run(
            loaded(vec![color(5, "Rojo")]),
            vec![
                ListAction::OpenEdit(5),
                ListAction::DraftEdited { field: "color", draft: color(6, "Rojo") },
            ],
        );
        assert_eq!(state.form.unwrap().draft, color(5, "Rojo"));
    }

    #[test]
    fn test_invalid_draft_is_not_submitted_and_errors_clear_on_edit() {
        let (state, effects) = run(
            loaded(vec![]),
            vec![ListAction::OpenCreate, ListAction::SubmitRequested],
        );
        assert!(effects.is_empty());
        let form = state.form.clone().unwrap();
        assert!(form.errors.get("color").is_some());
        assert!(form.errors.get("descripcion").is_some());

        let (state, _) = run(
            state,
            vec![ListAction::DraftEdited { field: "color", draft: color(3, "") }],
        );
        let form = state.form.unwrap();
        assert_eq!(form.errors.get("color"), None);
        assert!(form.errors.get("descripcion").is_some());
    }

    #[test]
    fn test_duplicate_submit_is_ignored_while_saving() {
        let (_, effects) = run(
            loaded(vec![]),
            vec![
                ListAction::OpenCreate,
                ListAction::DraftEdited { field: "color", draft: color(5, "Rojo") },
                ListAction::SubmitRequested,
                ListAction::SubmitRequested,
            ],
        );
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_failed_save_keeps_collection_and_form() {
        let before = vec![color(1, "Negro")];
        let (state, effects) = run(
            loaded(before.clone()),
            vec![
                ListAction::OpenEdit(1),
                ListAction::DraftEdited { field: "descripcion", draft: color(1, "Blanco") },
                ListAction::SubmitRequested,
                ListAction::SaveFailed(ApiError::from_status(500, Some("Clave bloqueada".into()))),
            ],
        );
        assert_eq!(state.items(), before.as_slice());
        let form = state.form.unwrap();
        assert!(!form.saving);
        assert_eq!(form.draft, color(1, "Blanco"));
        match effects.last() {
            Some(ListEffect::Notify(notice)) => {
                assert_eq!(notice.kind, NoticeKind::Error);
                assert_eq!(notice.message, "Error al guardar el color. Clave bloqueada");
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_search_resets_page_and_paging_keeps_view() {
        let items: Vec<Color> = (1..=23).map(|i| color(i, &format!("Tono {}", i))).collect();
        let (state, _) = run(loaded(items), vec![ListAction::PageRequested(3)]);
        assert_eq!(state.pagination.current_page, 3);
        assert_eq!(state.page_rows().len(), 3);

        let view = state.filtered_rows();
        let (state, _) = run(state, vec![ListAction::PageRequested(4), ListAction::PageRequested(2)]);
        assert_eq!(state.pagination.current_page, 2);
        assert!(Arc::ptr_eq(&view, &state.filtered_rows()));

        let (state, _) = run(state, vec![ListAction::SearchChanged("tono 2".into())]);
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.filtered_count(), 5);

        let (state, _) = run(state, vec![ListAction::SearchChanged(String::new())]);
        assert_eq!(state.filtered_count(), 23);
        assert_eq!(state.filtered_rows()[0].record, color(1, "Tono 1"));
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let items: Vec<Color> = (1..=23).map(|i| color(i, "x")).collect();
        let (state, _) = run(
            loaded(items),
            vec![ListAction::PageRequested(2), ListAction::PageSizeChanged(25)],
        );
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_load_failure_notifies() {
        let (state, effects) = run(
            ListState::new(10),
            vec![ListAction::LoadStarted, ListAction::LoadFailed("sin conexión".into())],
        );
        assert!(!state.loading);
        assert_eq!(state.load_error.as_deref(), Some("sin conexión"));
        assert_eq!(effects, vec![ListEffect::Notify(Notice::error("sin conexión"))]);
    }
}
