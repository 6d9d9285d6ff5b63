use super::api::{detafact, VerificacionApi};
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a009_lote::DetaFactRecord;
use contracts::shared::list::{filter_list, Pagination};
use contracts::shared::notice::Notice;
use contracts::usecases::u502_verificacion_lotes::{
    carga_notice, cargar_lotes, verificacion_notice, verificar, VerificacionState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Spinner};

const DETAFACT_PAGE_SIZE: usize = 25;

#[component]
pub fn VerificacionLotesView() -> impl IntoView {
    let notifications = use_notifications();

    let state = RwSignal::new(VerificacionState::default());
    let cargando = RwSignal::new(false);
    let verificando = RwSignal::new(false);
    let detafact_abierto = RwSignal::new(false);

    let cargar = move || {
        if cargando.get_untracked() || verificando.get_untracked() {
            return;
        }
        cargando.set(true);
        spawn_local(async move {
            let result = cargar_lotes(&VerificacionApi).await;
            notifications.push(carga_notice(&result));
            if let Ok(lotes) = result {
                state.update(|s| s.load(lotes));
            }
            cargando.set(false);
        });
    };

    let ejecutar_verificacion = move || {
        if cargando.get_untracked()
            || !state.with_untracked(|s| s.can_verify(verificando.get_untracked()))
        {
            return;
        }
        verificando.set(true);
        let pendientes = state.with_untracked(|s| s.pending());
        spawn_local(async move {
            let result = verificar(&VerificacionApi, pendientes).await;
            if let Ok(resultado) = &result {
                state.update(|s| {
                    s.aplicar(resultado);
                });
            }
            notifications.push(verificacion_notice(&result));
            verificando.set(false);
        });
    };

    let stats = move || state.with(|s| s.stats());
    let pagination = Signal::derive(move || state.with(|s| s.pagination));
    let filtered_count = Signal::derive(move || state.with(|s| s.filtered().len()));

    view! {
        <PageFrame page_id="u502_verificacion_lotes--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("check")}
                    <h1 class="page__title">"Verificación de Lotes Vendidos"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| cargar()
                        disabled=Signal::derive(move || cargando.get() || verificando.get())
                    >
                        {icon("refresh")}
                        {move || if cargando.get() { " Cargando..." } else { " Cargar Lotes" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ejecutar_verificacion()
                        disabled=Signal::derive(move || {
                            cargando.get() || !state.with(|s| s.can_verify(verificando.get()))
                        })
                    >
                        {icon("check")}
                        {move || if verificando.get() { " Verificando..." } else { " Verificar" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| detafact_abierto.set(true)>
                        {icon("file-text")}
                        " DetaFact"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stats-row">
                    <div class="stat"><span class="stat__label">"Total"</span><span class="stat__value">{move || stats().total}</span></div>
                    <div class="stat stat--success"><span class="stat__label">"Verificados"</span><span class="stat__value">{move || stats().verificados}</span></div>
                    <div class="stat stat--warning"><span class="stat__label">"Pendientes"</span><span class="stat__value">{move || stats().pendientes}</span></div>
                </div>

                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search().to_string()))
                    on_change=Callback::new(move |term: String| state.update(|s| s.set_search(term)))
                    placeholder="Buscar por lote o año..."
                />

                <Show when=move || !cargando.get() fallback=|| view! { <Spinner /> }>
                    <table class="table__data table--striped">
                        <thead>
                            <tr>
                                <th>"Lote"</th>
                                <th>"Año"</th>
                                <th>"Estado"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || state.with(|s| {
                                s.page_rows()
                                    .into_iter()
                                    .map(|lote| {
                                        let vendido = s.is_checked(&lote);
                                        view! {
                                            <tr class:row--checked=vendido>
                                                <td>{lote.lote}</td>
                                                <td>{lote.years}</td>
                                                <td>
                                                    {if vendido {
                                                        view! { <span class="badge badge--success">{icon("check")}" Vendido"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge">"Pendiente"</span> }.into_any()
                                                    }}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            })}
                        </tbody>
                    </table>
                    <Show when=move || state.with(|s| s.lotes().is_empty())>
                        <p class="table__empty">"Cargue los lotes no vendidos para comenzar."</p>
                    </Show>
                    <PaginationControls
                        pagination=pagination
                        total_count=filtered_count
                        on_page_change=Callback::new(move |page| state.update(|s| {
                            let total = s.filtered().len();
                            s.pagination.go_to(page, total);
                        }))
                    />
                </Show>
            </div>

            <Show when=move || detafact_abierto.get()>
                <DetaFactModal on_close=Callback::new(move |_| detafact_abierto.set(false)) />
            </Show>
        </PageFrame>
    }
}

/// Invoice detail listing with search and paging
#[component]
fn DetaFactModal(on_close: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();
    let registros = RwSignal::new(Vec::<DetaFactRecord>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let pagination = RwSignal::new(Pagination::new(DETAFACT_PAGE_SIZE));

    spawn_local(async move {
        match detafact().await {
            Ok(rows) => registros.set(rows),
            Err(e) => {
                log::error!("detafact: {}", e);
                notifications.push(Notice::error(e.user_message("Error al cargar DetaFact.")));
            }
        }
        loading.set(false);
    });

    let filtered = Memo::new(move |_| registros.with(|rows| filter_list(rows, &search.get())));
    let filtered_count = Signal::derive(move || filtered.with(Vec::len));

    view! {
        <Modal title="Registros de DetaFact" on_close=on_close>
            <SearchInput
                value=Signal::derive(move || search.get())
                on_change=Callback::new(move |term: String| {
                    search.set(term);
                    pagination.update(Pagination::reset);
                })
                placeholder="Buscar en facturas..."
            />
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th>"Tipo"</th>
                            <th>"Factura"</th>
                            <th>"Mes"</th>
                            <th>"Lote"</th>
                            <th>"Estilo"</th>
                            <th>"Corrida"</th>
                            <th>"Comb."</th>
                            <th>"Cantidad"</th>
                            <th>"Precio"</th>
                            <th>"Importe"</th>
                            <th>"Fecha"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let page = pagination.get();
                            filtered.with(|rows| {
                                page.slice(rows)
                                    .iter()
                                    .map(|r| view! {
                                        <tr>
                                            <td>{r.tip_fact.clone()}</td>
                                            <td>{r.num_fact.clone()}</td>
                                            <td>{r.mes_fact.clone()}</td>
                                            <td>{r.lot_fact.clone()}</td>
                                            <td>{r.est_fact.clone()}</td>
                                            <td>{r.cor_fact.clone()}</td>
                                            <td>{r.com_fact.clone()}</td>
                                            <td class="cell--number">{r.can_fact}</td>
                                            <td class="cell--number">{format!("{:.2}", r.pre_fact)}</td>
                                            <td class="cell--number">{format!("{:.2}", r.imp_fact)}</td>
                                            <td>{r.fecha_display()}</td>
                                        </tr>
                                    })
                                    .collect_view()
                            })
                        }}
                    </tbody>
                </table>
                <PaginationControls
                    pagination=Signal::derive(move || pagination.get())
                    total_count=filtered_count
                    on_page_change=Callback::new(move |page| {
                        let total = filtered_count.get_untracked();
                        pagination.update(|p| {
                            p.go_to(page, total);
                        });
                    })
                />
            </Show>
        </Modal>
    }
}
