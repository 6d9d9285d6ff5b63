use super::api::PaquetesApi;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a010_paquete::PaqueteAgregado;
use contracts::shared::notice::NoticeKind;
use contracts::usecases::u504_paquetes::{
    agrupar_por_corrida, buscar, confirmacion_sobreescritura, guardar, GrupoCorrida,
    PaqueteBusqueda,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Spinner};

/// Asks the operator before the stored package is replaced
fn confirmar(mensaje: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(mensaje).ok())
        .unwrap_or(false)
}

#[component]
pub fn PaquetesView() -> impl IntoView {
    let notifications = use_notifications();

    let paquete = RwSignal::new(String::new());
    let periodo = RwSignal::new(String::new());
    let resultados = RwSignal::new(Vec::<PaqueteAgregado>::new());
    let buscando = RwSignal::new(false);
    let guardando = RwSignal::new(false);

    let busqueda = move || PaqueteBusqueda {
        paquete: paquete.get_untracked(),
        periodo: periodo.get_untracked(),
    };

    let consultar = move || {
        if buscando.get_untracked() {
            return;
        }
        let busqueda = busqueda();
        buscando.set(true);
        spawn_local(async move {
            match buscar(&PaquetesApi, &busqueda).await {
                Ok(rows) => resultados.set(rows),
                Err(notice) => {
                    resultados.set(Vec::new());
                    notifications.push(notice);
                }
            }
            buscando.set(false);
        });
    };

    let guardar_paquete = move || {
        if guardando.get_untracked() {
            return;
        }
        let busqueda = busqueda();
        if let Ok((numero, _)) = busqueda.parse() {
            if !confirmar(&confirmacion_sobreescritura(numero)) {
                return;
            }
        }
        let rows = resultados.get_untracked();
        guardando.set(true);
        spawn_local(async move {
            let notice = guardar(&PaquetesApi, &busqueda, &rows).await;
            if notice.kind == NoticeKind::Success {
                log::info!("paquete {} guardado con {} filas", busqueda.paquete, rows.len());
            }
            notifications.push(notice);
            guardando.set(false);
        });
    };

    let on_enter = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            consultar();
        }
    };

    view! {
        <PageFrame page_id="u504_paquetes--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("package")}
                    <h1 class="page__title">"Paquetes"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="form-row">
                    <div class="form-group">
                        <label for="paquete-numero">"Paquete"</label>
                        <input
                            id="paquete-numero"
                            type="number"
                            class="form__input"
                            prop:value=move || paquete.get()
                            on:input=move |ev| paquete.set(event_target_value(&ev))
                            on:keydown=on_enter
                        />
                    </div>
                    <div class="form-group">
                        <label for="paquete-periodo">"Periodo"</label>
                        <input
                            id="paquete-periodo"
                            type="number"
                            class="form__input"
                            prop:value=move || periodo.get()
                            on:input=move |ev| periodo.set(event_target_value(&ev))
                            on:keydown=on_enter
                        />
                    </div>
                    <div class="form-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| consultar()
                            disabled=Signal::derive(move || buscando.get())
                        >
                            {icon("search")}
                            " Buscar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| guardar_paquete()
                            disabled=Signal::derive(move || {
                                guardando.get() || resultados.with(Vec::is_empty)
                            })
                        >
                            {icon("save")}
                            {move || if guardando.get() { " Guardando..." } else { " Guardar" }}
                        </Button>
                    </div>
                </div>

                <Show when=move || !buscando.get() fallback=|| view! {
                    <div class="page__loading"><Spinner /></div>
                }>
                    {move || {
                        resultados
                            .with(|rows| agrupar_por_corrida(rows))
                            .into_iter()
                            .map(grupo_table)
                            .collect_view()
                    }}
                </Show>
            </div>
        </PageFrame>
    }
}

fn grupo_table(grupo: GrupoCorrida) -> impl IntoView {
    view! {
        <div class="card paquete-grupo">
            <h3>{format!("Corrida {}", grupo.corrida)}</h3>
            <table class="table__data table--striped">
                <thead>
                    <tr>
                        <th>"Estilo"</th>
                        <th>"Comb."</th>
                        <th>"Descripción"</th>
                        <th>"Suela"</th>
                        <th>"Desc. Suela"</th>
                        {grupo.headers.iter().map(|header| view! {
                            <th class="cell--number">{header.clone()}</th>
                        }).collect_view()}
                        <th class="cell--number">"Pares"</th>
                    </tr>
                </thead>
                <tbody>
                    {grupo.productos.into_iter().map(|row| {
                        let cantidades = row.cantidades();
                        view! {
                            <tr>
                                <td>{row.estilo}</td>
                                <td>{row.combinacion}</td>
                                <td>{row.desc_combina}</td>
                                <td>{row.suela}</td>
                                <td>{row.des_suela}</td>
                                {cantidades.into_iter().map(|cantidad| view! {
                                    <td class="cell--number">{cantidad}</td>
                                }).collect_view()}
                                <td class="cell--number">{row.pares}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="12" class="cell--total">"Total pares"</td>
                        <td class="cell--number cell--total">{grupo.total_pares}</td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}
