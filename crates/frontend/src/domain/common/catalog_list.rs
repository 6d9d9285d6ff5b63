//! Generic list screen shared by every catalog.
//!
//! The screen keeps one `ListState` in a signal and routes every user action
//! through its reducer. Effects returned by the reducer are run here: saves go
//! to the backend and come back as `SaveSucceeded`/`SaveFailed`, notices go to
//! the toast stack.

use super::catalog_api::{fetch_catalog, fetch_lookups, save};
use super::catalog_form::catalog_form;
use super::catalog_ui::CatalogUi;
use crate::shared::components::PaginationControls;
use crate::shared::config::{use_app_config, AppConfig};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::notifications::{use_notifications, Notifications};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::shared::error::ApiError;
use contracts::shared::list::{Keyed, ListAction, ListEffect, ListState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Spinner, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

/// Handle to the state of one catalog screen; copied into every closure
pub struct CatalogScreen<T: CatalogUi> {
    pub state: RwSignal<ListState<T>>,
    notifications: Notifications,
    config: AppConfig,
}

impl<T: CatalogUi> Clone for CatalogScreen<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: CatalogUi> Copy for CatalogScreen<T> {}

impl<T: CatalogUi> CatalogScreen<T> {
    pub fn new(config: AppConfig, notifications: Notifications) -> Self {
        Self {
            state: RwSignal::new(ListState::new(config.default_page_size())),
            notifications,
            config,
        }
    }

    pub fn dispatch(self, action: ListAction<T>) {
        let mut effects = Vec::new();
        self.state.update(|state| {
            let transition = std::mem::take(state).reduce(action);
            *state = transition.state;
            effects = transition.effects;
        });
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: ListEffect<T>) {
        match effect {
            ListEffect::Notify(notice) => self.notifications.push(notice),
            ListEffect::Submit(submission) => {
                let empresa = self.config.empresa_untracked();
                spawn_local(async move {
                    match save(&empresa, &submission).await {
                        Ok(record) => self.dispatch(ListAction::SaveSucceeded {
                            mode: submission.mode,
                            record,
                        }),
                        Err(e) => self.dispatch(ListAction::SaveFailed(e)),
                    }
                });
            }
        }
    }

    /// Fetches the catalog and its lookups for the active company
    pub fn reload(self, empresa: String) {
        self.dispatch(ListAction::LoadStarted);
        spawn_local(async move {
            let result = async {
                let items = fetch_catalog::<T>(&empresa).await?;
                let resolver = fetch_lookups::<T>(&empresa).await?;
                Ok::<_, ApiError>((items, resolver))
            }
            .await;
            match result {
                Ok((items, resolver)) => self.dispatch(ListAction::Loaded { items, resolver }),
                Err(e) => {
                    log::error!("{}: load failed: {}", T::full_name(), e);
                    let fallback = format!("Error al cargar {}.", T::list_name().to_lowercase());
                    self.dispatch(ListAction::LoadFailed(e.user_message(&fallback)));
                }
            }
        });
    }
}

/// Full list page for the catalog `T`
pub fn catalog_list_view<T: CatalogUi>() -> impl IntoView {
    let config = use_app_config();
    let screen = CatalogScreen::<T>::new(config, use_notifications());
    let state = screen.state;

    // Reload whenever the company changes (and once on mount)
    Effect::new(move |_| {
        let empresa = config.empresa();
        screen.reload(empresa);
    });

    let columns = StoredValue::new(T::columns());

    let search = Signal::derive(move || state.with(|s| s.search().to_string()));
    let pagination = Signal::derive(move || state.with(|s| s.pagination));
    let filtered_count = Signal::derive(move || state.with(|s| s.filtered_count()));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let form_open = Signal::derive(move || state.with(|s| s.form.is_some()));

    view! {
        <PageFrame page_id=T::page_id() category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("list")}
                    <h1 class="page__title">{T::list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |term: String| {
                            screen.dispatch(ListAction::SearchChanged(term))
                        })
                        placeholder=format!("Buscar {}...", T::list_name().to_lowercase())
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| screen.reload(config.empresa_untracked())
                        disabled=loading
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| screen.dispatch(ListAction::OpenCreate)
                    >
                        {icon("plus")}
                        {format!(" Nuevo {}", T::element_name())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || state.with(|s| s.load_error.clone()).map(|message| view! {
                    <div class="alert alert--error">{message}</div>
                })}

                <Show when=move || !loading.get() fallback=|| view! {
                    <div class="page__loading"><Spinner /></div>
                }>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                {columns.with_value(|columns| {
                                    columns
                                        .iter()
                                        .map(|column| {
                                            let header: &'static str = column.header;
                                            view! { <TableHeaderCell>{header}</TableHeaderCell> }
                                        })
                                        .collect_view()
                                })}
                                <TableHeaderCell min_width=80.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = state.with(|s| s.page_rows());
                                rows.into_iter()
                                    .map(|row| {
                                        let key = row.record.key();
                                        let cells = columns.with_value(|columns| {
                                            columns.iter().map(|column| (column.cell)(&row)).collect::<Vec<_>>()
                                        });
                                        view! {
                                            <TableRow>
                                                {cells.into_iter().map(|text| view! {
                                                    <TableCell><TableCellLayout>{text}</TableCellLayout></TableCell>
                                                }).collect_view()}
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| screen.dispatch(ListAction::OpenEdit(key))
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>

                    <Show when=move || filtered_count.get() == 0>
                        <p class="table__empty">
                            {format!("No hay {} para mostrar.", T::list_name().to_lowercase())}
                        </p>
                    </Show>

                    <PaginationControls
                        pagination=pagination
                        total_count=filtered_count
                        on_page_change=Callback::new(move |page| screen.dispatch(ListAction::PageRequested(page)))
                        on_page_size_change=Callback::new(move |size| screen.dispatch(ListAction::PageSizeChanged(size)))
                        page_size_options=Signal::derive(move || config.page_size_options())
                    />
                </Show>
            </div>

            <Show when=move || form_open.get()>
                {catalog_form(screen)}
            </Show>
        </PageFrame>
    }
}
