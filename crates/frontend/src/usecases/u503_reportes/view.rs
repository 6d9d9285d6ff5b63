use crate::shared::api_utils::get_pdf;
use crate::shared::date_utils::{parse_input_date, to_input_value, today};
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, Notifications};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::pdf_viewer::{show_pdf, PdfDocument, PdfViewer};
use chrono::Datelike;
use contracts::shared::notice::Notice;
use contracts::usecases::u503_reportes::request::ERROR_REPORTE;
use contracts::usecases::u503_reportes::{
    week_number, week_options, year_options, ReportRequest, REPORTE_GENERADO,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Spinner};

/// State shared by the three report screens
#[derive(Clone, Copy)]
struct ReportSlot {
    document: RwSignal<Option<PdfDocument>>,
    generando: RwSignal<bool>,
    notifications: Notifications,
}

impl ReportSlot {
    fn new() -> Self {
        Self {
            document: RwSignal::new(None),
            generando: RwSignal::new(false),
            notifications: use_notifications(),
        }
    }

    fn generar(self, request: ReportRequest) {
        if self.generando.get_untracked() {
            return;
        }
        self.generando.set(true);
        spawn_local(async move {
            let notice = match get_pdf(&request.path_and_query()).await {
                Ok(blob) => match show_pdf(self.document, &blob, request.file_name()) {
                    Ok(()) => Notice::success(REPORTE_GENERADO),
                    Err(e) => {
                        log::error!("{}: {}", request.title(), e);
                        Notice::error(ERROR_REPORTE)
                    }
                },
                Err(e) => {
                    log::error!("{}: {}", request.title(), e);
                    Notice::error(request.error_message(&e))
                }
            };
            self.notifications.push(notice);
            self.generando.set(false);
        });
    }

    fn generate_button(self, on_click: impl Fn() + Send + Sync + 'static) -> impl IntoView {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_click()
                disabled=Signal::derive(move || self.generando.get())
            >
                {icon("file-text")}
                {move || if self.generando.get() { " Generando..." } else { " Generar Reporte" }}
            </Button>
        }
    }

    fn preview(self) -> impl IntoView {
        view! {
            <Show when=move || self.generando.get()>
                <div class="page__loading"><Spinner /></div>
            </Show>
            <PdfViewer document=self.document />
        }
    }
}

fn header(title: &'static str) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon("file-text")}
                <h1 class="page__title">{title}</h1>
            </div>
        </div>
    }
}

#[component]
pub fn ReporteDiarioView() -> impl IntoView {
    let slot = ReportSlot::new();
    let dia = RwSignal::new(today());

    view! {
        <PageFrame page_id="u503_reporte_diario--usecase" category=PAGE_CAT_USECASE>
            {header(ReportRequest::Diario(today()).title())}
            <div class="page__content">
                <div class="form-row">
                    <div class="form-group">
                        <label for="reporte-dia">"Fecha"</label>
                        <input
                            id="reporte-dia"
                            type="date"
                            class="form__input"
                            prop:value=move || to_input_value(dia.get())
                            on:change=move |ev| {
                                if let Some(date) = parse_input_date(&event_target_value(&ev)) {
                                    dia.set(date);
                                }
                            }
                        />
                    </div>
                    <div class="form-actions">
                        {slot.generate_button(move || slot.generar(ReportRequest::Diario(dia.get_untracked())))}
                    </div>
                </div>
                {slot.preview()}
            </div>
        </PageFrame>
    }
}

#[component]
pub fn ReporteSemanalView() -> impl IntoView {
    let slot = ReportSlot::new();
    let hoy = today();
    let anio = RwSignal::new(hoy.year());
    let semana = RwSignal::new(week_number(hoy));

    view! {
        <PageFrame page_id="u503_reporte_semanal--usecase" category=PAGE_CAT_USECASE>
            {header(ReportRequest::Semanal { anio: hoy.year(), semana: 1 }.title())}
            <div class="page__content">
                <div class="form-row">
                    <div class="form-group">
                        <label for="reporte-anio">"Año"</label>
                        <select
                            id="reporte-anio"
                            class="form__select"
                            prop:value=move || anio.get().to_string()
                            on:change=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse() {
                                    anio.set(value);
                                }
                            }
                        >
                            {year_options(hoy.year()).into_iter().map(|y| view! {
                                <option value=y.to_string() selected=move || anio.get() == y>{y}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="reporte-semana">"Semana"</label>
                        <select
                            id="reporte-semana"
                            class="form__select"
                            prop:value=move || semana.get().to_string()
                            on:change=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse() {
                                    semana.set(value);
                                }
                            }
                        >
                            {week_options().into_iter().map(|w| view! {
                                <option value=w.to_string() selected=move || semana.get() == w>
                                    {format!("Semana {}", w)}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-actions">
                        {slot.generate_button(move || slot.generar(ReportRequest::Semanal {
                            anio: anio.get_untracked(),
                            semana: semana.get_untracked(),
                        }))}
                    </div>
                </div>
                {slot.preview()}
            </div>
        </PageFrame>
    }
}

#[component]
pub fn InventarioProcesoView() -> impl IntoView {
    let slot = ReportSlot::new();

    view! {
        <PageFrame page_id="u503_inventario_proceso--usecase" category=PAGE_CAT_USECASE>
            {header(ReportRequest::InventarioProceso.title())}
            <div class="page__content">
                <p class="page__hint">"Lotes en proceso en todos los departamentos a la fecha actual."</p>
                <div class="form-actions">
                    {slot.generate_button(move || slot.generar(ReportRequest::InventarioProceso))}
                </div>
                {slot.preview()}
            </div>
        </PageFrame>
    }
}
