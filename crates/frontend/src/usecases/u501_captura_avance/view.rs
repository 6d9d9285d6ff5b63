use super::api::{lotes_dia, CapturaApi};
use crate::shared::date_utils::{format_date, parse_input_date, to_input_value, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use chrono::NaiveDate;
use contracts::domain::a009_lote::{Departamento, LoteDiaInfo, LoteSnapshot, EMPTY_FIELD};
use contracts::shared::list::filter_list;
use contracts::shared::notice::Notice;
use contracts::usecases::u501_captura_avance::{registrar_avance, CapturaRequest};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Spinner};

const SIN_PROCESO_LISTADO: &str = "Debe seleccionar un proceso para ver el listado.";
const SIN_LOTES_DIA: &str = "No se encontraron lotes para esta fecha y departamento.";

fn or_placeholder(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(EMPTY_FIELD)
        .to_string()
}

/// Read-only field of the lot details card
fn detalle(
    snapshot: RwSignal<LoteSnapshot>,
    label: &'static str,
    field: fn(&LoteSnapshot) -> &Option<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="text"
                class="form__input"
                readonly
                disabled
                prop:value=move || snapshot.with(|s| {
                    if s.is_empty() { String::new() } else { or_placeholder(field(s)) }
                })
            />
        </div>
    }
}

#[component]
pub fn CapturaAvanceView() -> impl IntoView {
    let notifications = use_notifications();

    let codigo = RwSignal::new(String::new());
    let departamento = RwSignal::new(None::<Departamento>);
    let fecha = RwSignal::new(today());
    let enviando = RwSignal::new(false);
    let snapshot = RwSignal::new(LoteSnapshot::default());
    let highlighted = RwSignal::new(None::<Departamento>);
    let listado_abierto = RwSignal::new(false);

    let codigo_ref = NodeRef::<html::Input>::new();
    let focus_codigo = move || {
        if let Some(input) = codigo_ref.get_untracked() {
            if let Err(e) = input.focus() {
                log::warn!("captura: no se pudo enfocar el código: {:?}", e);
            }
        }
    };

    let registrar = move || {
        if enviando.get_untracked() {
            return;
        }
        let request = CapturaRequest {
            codigo: codigo.get_untracked(),
            departamento: departamento.get_untracked(),
            fecha: fecha.get_untracked(),
        };
        enviando.set(true);
        spawn_local(async move {
            let outcome = registrar_avance(&CapturaApi, &request).await;
            log::debug!("captura {}: {:?}", request.codigo, outcome.stages);
            if let Some(lote) = outcome.snapshot.clone() {
                snapshot.set(lote);
                highlighted.set(outcome.highlighted);
            }
            notifications.push(outcome.notice());
            if outcome.clears_codigo() {
                codigo.set(String::new());
                focus_codigo();
            }
            enviando.set(false);
        });
    };

    let limpiar = move || {
        codigo.set(String::new());
        departamento.set(None);
        snapshot.set(LoteSnapshot::default());
        highlighted.set(None);
        focus_codigo();
    };

    let mostrar_listado = move || {
        if departamento.get_untracked().is_none() {
            notifications.push(Notice::error(SIN_PROCESO_LISTADO));
            return;
        }
        listado_abierto.set(true);
    };

    let avance_cell = move |depto: Departamento| {
        view! {
            <td class:cell--highlight=move || highlighted.get() == Some(depto)>
                {move || snapshot.with(|s| s.avance_or_placeholder(depto).to_string())}
            </td>
        }
    };

    view! {
        <PageFrame page_id="u501_captura_avance--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("activity")}
                    <h1 class="page__title">"Avances de Producción"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="form-row">
                    <div class="form-group">
                        <label for="captura-codigo">"Código de Lote"</label>
                        <input
                            id="captura-codigo"
                            type="text"
                            class="form__input"
                            autofocus
                            node_ref=codigo_ref
                            prop:value=move || codigo.get()
                            on:input=move |ev| codigo.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    registrar();
                                }
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="captura-proceso">"Proceso"</label>
                        <select
                            id="captura-proceso"
                            class="form__select"
                            prop:value=move || departamento.get().map(|d| d.value()).unwrap_or("")
                            on:change=move |ev| departamento.set(Departamento::from_value(&event_target_value(&ev)))
                        >
                            <option value="">"Seleccione un proceso..."</option>
                            {Departamento::ALL.into_iter().map(|d| view! {
                                <option value=d.value()>{d.nombre()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="captura-fecha">"Fecha"</label>
                        <input
                            id="captura-fecha"
                            type="date"
                            class="form__input"
                            prop:value=move || to_input_value(fecha.get())
                            on:change=move |ev| {
                                if let Some(date) = parse_input_date(&event_target_value(&ev)) {
                                    fecha.set(date);
                                }
                            }
                        />
                    </div>
                    <div class="form-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| registrar()
                            disabled=Signal::derive(move || enviando.get())
                        >
                            {move || if enviando.get() { "Procesando..." } else { "Aceptar" }}
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| mostrar_listado()>
                            {icon("list")}
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| limpiar()>
                            {icon("x")}
                        </Button>
                    </div>
                </div>

                <table class="table__data avance-table">
                    <thead>
                        <tr>
                            <th>"Recepción"</th>
                            <th>"Inyección"</th>
                            <th>"Adorno"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr>
                            {avance_cell(Departamento::Recepcion)}
                            {avance_cell(Departamento::Inyeccion)}
                            {avance_cell(Departamento::Adorno)}
                        </tr>
                    </tbody>
                </table>

                <div class="card lote-detalle">
                    <h3>
                        {move || snapshot.with(|s| match &s.lote {
                            Some(lote) => format!("Detalles del Lote: {}", lote),
                            None => "Detalles (esperando lote)".to_string(),
                        })}
                    </h3>
                    <div class="form-grid">
                        {detalle(snapshot, "Programa", |s| &s.programa)}
                        {detalle(snapshot, "Pedido", |s| &s.pedido)}
                        {detalle(snapshot, "Estilo", |s| &s.estilo)}
                        {detalle(snapshot, "Corrida", |s| &s.corrida)}
                        {detalle(snapshot, "Pares", |s| &s.pares)}
                        {detalle(snapshot, "Combinación", |s| &s.combinacion)}
                    </div>
                </div>
            </div>

            <Show when=move || listado_abierto.get()>
                {move || departamento.get_untracked().map(|depto| view! {
                    <LotesDiaModal
                        fecha=fecha.get_untracked()
                        departamento=depto
                        on_close=Callback::new(move |_| listado_abierto.set(false))
                    />
                })}
            </Show>
        </PageFrame>
    }
}

/// Lots advanced on a date in one department
#[component]
fn LotesDiaModal(fecha: NaiveDate, departamento: Departamento, on_close: Callback<()>) -> impl IntoView {
    let lotes = RwSignal::new(Vec::<LoteDiaInfo>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());

    spawn_local(async move {
        match lotes_dia(fecha, departamento).await {
            Ok(rows) => lotes.set(rows),
            Err(e) if e.is_not_found() => lotes.set(Vec::new()),
            Err(e) => {
                log::error!("lotes del día {} {}: {}", fecha, departamento, e);
                error.set(Some(e.user_message("Error al cargar el listado.")));
            }
        }
        loading.set(false);
    });

    let filtered = move || lotes.with(|rows| filter_list(rows, &search.get()));
    let title = format!(
        "Listado de Lotes - {} - {}",
        departamento.nombre(),
        format_date(&to_input_value(fecha))
    );

    view! {
        <Modal title=title on_close=on_close>
            <SearchInput
                value=Signal::derive(move || search.get())
                on_change=Callback::new(move |term: String| search.set(term))
                placeholder="Buscar lote, pedido, estilo..."
            />
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                {move || error.get().map(|message| view! {
                    <div class="alert alert--error">{message}</div>
                })}
                {move || {
                    let rows = filtered();
                    if rows.is_empty() && error.with(Option::is_none) {
                        return view! { <p class="table__empty">{SIN_LOTES_DIA}</p> }.into_any();
                    }
                    view! {
                        <table class="table__data table--striped">
                            <thead>
                                <tr>
                                    <th>"Pedido"</th>
                                    <th>"Lote"</th>
                                    <th>"Módulo"</th>
                                    <th>"Estilo"</th>
                                    <th>"Línea"</th>
                                    <th>"Combinación"</th>
                                    <th>"Corrida"</th>
                                    <th>"Pares"</th>
                                    <th>"Avance"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|row| view! {
                                    <tr>
                                        <td>{row.pedido}</td>
                                        <td>{row.lote}</td>
                                        <td>{row.modulo}</td>
                                        <td>{row.estilo}</td>
                                        <td>{row.linea}</td>
                                        <td>{row.combinacion}</td>
                                        <td>{row.corridacpt}</td>
                                        <td>{row.npares}</td>
                                        <td>{row.avance_actual}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}
            </Show>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_snapshot_fields_show_placeholder() {
        assert_eq!(or_placeholder(&None), EMPTY_FIELD);
        assert_eq!(or_placeholder(&Some("  ".into())), EMPTY_FIELD);
        assert_eq!(or_placeholder(&Some("A-12".into())), "A-12");
    }
}
