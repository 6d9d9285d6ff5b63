use super::api::CodigosApi;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, Notifications};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::usecases::u505_asignacion_suelas::grid::{producto_cells, with_row, Grid, GridRow};
use contracts::usecases::u505_asignacion_suelas::cargar_corrida;
use contracts::usecases::u506_codigos_barras::{
    guardar_en_dbf, registros_dbf, seleccionar_combinacion, CodigosFila,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
pub fn CodigosBarrasView() -> impl IntoView {
    let notifications = use_notifications();
    let grid = Grid::<CodigosFila>::new();
    let guardando = RwSignal::new(false);

    let registros = Signal::derive(move || {
        let filas: Vec<CodigosFila> = grid.rows.with(|rows| rows.iter().map(|r| r.fila.get()).collect());
        registros_dbf(&filas).len()
    });

    let guardar = move || {
        if guardando.get_untracked() {
            return;
        }
        guardando.set(true);
        let filas = grid.snapshot();
        spawn_local(async move {
            notifications.push(guardar_en_dbf(&CodigosApi, &filas).await);
            guardando.set(false);
        });
    };

    view! {
        <PageFrame page_id="u506_codigos_barras--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("barcode")}
                    <h1 class="page__title">"Códigos de Barras"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| grid.add_row()>
                        {icon("plus")}
                        " Agregar Fila"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| guardar()
                        disabled=Signal::derive(move || guardando.get() || registros.get() == 0)
                    >
                        {icon("save")}
                        {move || if guardando.get() { " Guardando..." } else { " Guardar en DBF" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <table class="table__data grid-editable">
                    <thead>
                        <tr>
                            <th>"Estilo"</th>
                            <th>"Corrida"</th>
                            <th>"Desc. Corrida"</th>
                            <th>"Combinación"</th>
                            <th>"Desc. Combinación"</th>
                            <th>"Producto"</th>
                            <th>"Códigos"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || grid.rows.get()
                            key=|row| row.id
                            children=move |row| codigos_row(grid, row, notifications)
                        />
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}

fn codigos_row(grid: Grid<CodigosFila>, row: GridRow<CodigosFila>, notifications: Notifications) -> impl IntoView {
    let fila = row.fila;

    let on_corrida = Callback::new(move |_| {
        spawn_local(async move {
            let result = with_row(fila, move |mut r| async move {
                r.codigos.clear();
                let result = cargar_corrida(&CodigosApi, &mut r.producto).await;
                (r, result)
            })
            .await;
            if let Err(notice) = result {
                notifications.push(notice);
            }
        });
    });

    let on_combinacion = Callback::new(move |combinacion: i32| {
        spawn_local(async move {
            let result = with_row(fila, move |mut r| async move {
                let result = seleccionar_combinacion(&CodigosApi, &mut r, combinacion).await;
                (r, result)
            })
            .await;
            if let Err(notice) = result {
                notifications.push(notice);
            }
        });
    });

    view! {
        <tr>
            {producto_cells(fila, |r| &r.producto, |r| &mut r.producto, on_corrida, on_combinacion)}
            <td class="cell--codes">
                {move || fila.with(|r| {
                    r.codigos
                        .iter()
                        .map(|c| view! {
                            <span class="barcode-chip" title=c.codigo.clone()>
                                <strong>{c.talla.clone()}</strong>
                                " "
                                {c.codigo.clone()}
                            </span>
                        })
                        .collect_view()
                })}
            </td>
            <td>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| grid.remove_row(row.id)
                >
                    {icon("trash")}
                </Button>
            </td>
        </tr>
    }
}
